pub type Result<T, E = Error> = std::result::Result<T, E>;

pub const MSG_REQUIRED: &str = "URL and Title are required";
pub const MSG_DUPLICATE: &str = "Link already collected.";
pub const MSG_UNAUTHORIZED: &str = "Unauthorized";

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("{message}")]
	InvalidRequest { message: String },
	#[error("Link already collected.")]
	Duplicate,
	#[error("Unauthorized")]
	Unauthorized,
	/// `message` is safe to show to clients. The underlying cause is only logged.
	#[error("{message}")]
	Storage { message: String },
}
impl Error {
	/// Maps a store failure, logging the cause and keeping only `failure` for the caller.
	pub(crate) fn from_storage(err: safelinks_storage::Error, failure: &str) -> Self {
		match err {
			safelinks_storage::Error::Conflict(_) => Self::Duplicate,
			safelinks_storage::Error::InvalidArgument(message) => Self::InvalidRequest { message },
			safelinks_storage::Error::Sqlx(inner) => {
				tracing::error!(error = %inner, "{failure}.");

				Self::Storage { message: failure.to_string() }
			},
		}
	}
}
