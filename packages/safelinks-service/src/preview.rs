use serde::{Deserialize, Serialize};

use safelinks_domain::address;

use crate::SafeLinksService;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewResponse {
	/// The URL as it would be saved.
	pub url: String,
	pub title: String,
	pub domain: String,
}

impl SafeLinksService {
	/// Title suggestion for the capture form. Failures degrade to empty strings.
	pub async fn preview_metadata(&self, owner_id: &str, url: &str) -> PreviewResponse {
		let url = address::sanitize(url);

		if crate::owner(owner_id).is_none() || url.is_empty() {
			return PreviewResponse { url, ..Default::default() };
		}

		let meta = self.metadata.fetch(&self.cfg.fetcher, &url).await;

		PreviewResponse { url, title: meta.title, domain: meta.domain }
	}
}
