use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result, SafeLinksService};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
	pub link_id: Uuid,
	/// `false` when nothing matched, which is still a success.
	pub deleted: bool,
}

impl SafeLinksService {
	pub async fn delete_by_owner(&self, owner_id: &str, link_id: Uuid) -> Result<DeleteResponse> {
		let Some(owner_id) = crate::owner(owner_id) else {
			return Err(Error::Unauthorized);
		};
		let deleted = self
			.store
			.delete_link(owner_id, link_id)
			.await
			.map_err(|err| Error::from_storage(err, "Failed to delete link"))?;

		if deleted {
			tracing::info!(owner_id, %link_id, "Link deleted.");
		} else {
			tracing::debug!(owner_id, %link_id, "Nothing to delete.");
		}

		Ok(DeleteResponse { link_id, deleted })
	}
}
