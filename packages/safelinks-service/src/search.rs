use serde::{Deserialize, Serialize};

use safelinks_domain::search::{self, SearchFields};

use crate::{LinkItem, Result, SafeLinksService};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
	pub items: Vec<LinkItem>,
}

impl SafeLinksService {
	/// Case-insensitive substring search over the owner's links, capped at
	/// [`search::MAX_SEARCH_RESULTS`].
	pub async fn search(&self, owner_id: &str, query: &str) -> Result<SearchResponse> {
		let Some(owner_id) = crate::owner(owner_id) else {
			return Ok(SearchResponse { items: Vec::new() });
		};

		if search::prepare_query(query).is_none() {
			return Ok(SearchResponse { items: Vec::new() });
		}

		let links = self.load_links(owner_id).await?;
		let items = search::filter(links, query, |item| SearchFields {
			title: item.title.as_str(),
			italic_keyword: item.italic_keyword.as_deref(),
			category: Some(item.category.as_str()),
			url: item.url.as_str(),
		});

		Ok(SearchResponse { items })
	}
}
