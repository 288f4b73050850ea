use serde::{Deserialize, Serialize};

use crate::{LinkItem, Result, SafeLinksService};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
	pub items: Vec<LinkItem>,
}

impl SafeLinksService {
	/// Every link the owner saved, newest first. No identity means no links.
	pub async fn list_by_owner(&self, owner_id: &str) -> Result<ListResponse> {
		let Some(owner_id) = crate::owner(owner_id) else {
			return Ok(ListResponse { items: Vec::new() });
		};
		let items = self.load_links(owner_id).await?;

		Ok(ListResponse { items })
	}
}
