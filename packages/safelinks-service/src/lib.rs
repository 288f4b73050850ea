pub mod create;
pub mod delete;
pub mod list;
pub mod preview;
pub mod search;
pub mod time_serde;
pub mod vault;

mod error;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

pub use create::{CreateRequest, CreateResponse};
pub use delete::DeleteResponse;
pub use error::{Error, MSG_DUPLICATE, MSG_REQUIRED, MSG_UNAUTHORIZED, Result};
pub use list::ListResponse;
pub use preview::PreviewResponse;
use safelinks_config::{Config, Fetcher};
use safelinks_domain::{address, vault::VaultEntry};
use safelinks_providers::metadata::{self, PageMetadata};
pub use safelinks_storage::BoxFuture;
use safelinks_storage::{LinkStore, models::Link};
pub use search::SearchResponse;
pub use vault::VaultResponse;

pub trait MetadataProvider
where
	Self: Send + Sync,
{
	fn fetch<'a>(&'a self, cfg: &'a Fetcher, url: &'a str) -> BoxFuture<'a, PageMetadata>;
}

/// A saved link as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkItem {
	pub link_id: Uuid,
	pub url: String,
	/// Display hostname derived from `url`.
	pub hostname: String,
	pub title: String,
	pub description: Option<String>,
	pub italic_keyword: Option<String>,
	pub context_note: Option<String>,
	pub category: String,
	#[serde(with = "crate::time_serde")]
	pub created_at: OffsetDateTime,
}
impl From<Link> for LinkItem {
	fn from(link: Link) -> Self {
		Self {
			hostname: address::hostname(&link.url),
			link_id: link.link_id,
			url: link.url,
			title: link.title,
			description: link.description,
			italic_keyword: link.italic_keyword,
			context_note: link.context_note,
			category: link.category,
			created_at: link.created_at,
		}
	}
}
impl VaultEntry for LinkItem {
	type Id = Uuid;

	fn id(&self) -> Uuid {
		self.link_id
	}

	fn category(&self) -> Option<&str> {
		Some(self.category.as_str())
	}
}

pub struct SafeLinksService {
	pub cfg: Config,
	pub store: Arc<dyn LinkStore>,
	pub metadata: Arc<dyn MetadataProvider>,
}
impl SafeLinksService {
	pub fn new(cfg: Config, store: Arc<dyn LinkStore>) -> Self {
		Self { cfg, store, metadata: Arc::new(DefaultMetadataProvider) }
	}

	pub fn with_metadata(
		cfg: Config,
		store: Arc<dyn LinkStore>,
		metadata: Arc<dyn MetadataProvider>,
	) -> Self {
		Self { cfg, store, metadata }
	}

	pub(crate) async fn load_links(&self, owner_id: &str) -> Result<Vec<LinkItem>> {
		let links = self
			.store
			.list_links(owner_id)
			.await
			.map_err(|err| Error::from_storage(err, "Failed to load links"))?;

		Ok(links.into_iter().map(LinkItem::from).collect())
	}
}

struct DefaultMetadataProvider;
impl MetadataProvider for DefaultMetadataProvider {
	fn fetch<'a>(&'a self, cfg: &'a Fetcher, url: &'a str) -> BoxFuture<'a, PageMetadata> {
		Box::pin(metadata::fetch_metadata(cfg, url))
	}
}

/// The caller's owner identifier, or `None` when the identity provider supplied nothing usable.
/// A usable identifier is passed through verbatim.
pub(crate) fn owner(owner_id: &str) -> Option<&str> {
	if owner_id.trim().is_empty() { None } else { Some(owner_id) }
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
	value.map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}
