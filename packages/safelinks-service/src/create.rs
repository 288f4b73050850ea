use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use safelinks_domain::address;
use safelinks_storage::models::Link;

use crate::{Error, MSG_REQUIRED, Result, SafeLinksService};

pub const MSG_COLLECTED: &str = "Link collected.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRequest {
	#[serde(default)]
	pub url: String,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub category: Option<String>,
	#[serde(default)]
	pub italic_keyword: Option<String>,
	#[serde(default)]
	pub context_note: Option<String>,
	#[serde(default)]
	pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateResponse {
	pub link_id: Uuid,
	pub message: String,
}

impl SafeLinksService {
	pub async fn create(&self, owner_id: &str, req: CreateRequest) -> Result<CreateResponse> {
		let Some(owner_id) = crate::owner(owner_id) else {
			return Err(Error::Unauthorized);
		};
		let url = address::sanitize(&req.url);
		let title = req.title.trim();

		if url.is_empty() || title.is_empty() {
			return Err(Error::InvalidRequest { message: MSG_REQUIRED.to_string() });
		}

		let category = crate::non_blank(req.category)
			.unwrap_or_else(|| self.cfg.vault.default_category.clone());
		let link = Link {
			link_id: Uuid::new_v4(),
			owner_id: owner_id.to_string(),
			url,
			title: title.to_string(),
			description: crate::non_blank(req.description),
			italic_keyword: crate::non_blank(req.italic_keyword),
			context_note: crate::non_blank(req.context_note),
			category,
			created_at: OffsetDateTime::now_utc(),
		};

		self.store
			.insert_link(&link)
			.await
			.map_err(|err| Error::from_storage(err, "Failed to save link"))?;

		tracing::info!(
			owner_id,
			link_id = %link.link_id,
			category = %link.category,
			"Link collected."
		);

		Ok(CreateResponse { link_id: link.link_id, message: MSG_COLLECTED.to_string() })
	}
}
