pub mod metadata;

mod error;

pub use error::{Error, Result};

use std::time::Duration;

use reqwest::{
	Client,
	header::{HeaderMap, HeaderValue, USER_AGENT},
};

/// Outbound client for page fetches. Without `timeout_ms` the transport default applies.
pub fn build_client(cfg: &safelinks_config::Fetcher) -> Result<Client> {
	let mut headers = HeaderMap::new();

	headers.insert(USER_AGENT, HeaderValue::from_str(&cfg.user_agent)?);

	let mut builder = Client::builder().default_headers(headers);

	if let Some(timeout_ms) = cfg.timeout_ms {
		builder = builder.timeout(Duration::from_millis(timeout_ms));
	}

	Ok(builder.build()?)
}
