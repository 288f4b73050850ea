use safelinks_config::Fetcher;
use safelinks_domain::{address, title};

use crate::{Error, Result};

/// Title and display hostname of a fetched page. Both are empty when the fetch failed.
///
/// The HTTP status is not consulted: an error page is matched like any other body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
	pub title: String,
	pub domain: String,
}
impl PageMetadata {
	pub fn is_empty(&self) -> bool {
		self.title.is_empty() && self.domain.is_empty()
	}
}

/// Fetches `url` once and reports its title. Never fails: any error yields empty metadata.
pub async fn fetch_metadata(cfg: &Fetcher, url: &str) -> PageMetadata {
	match try_fetch_metadata(cfg, url).await {
		Ok(metadata) => metadata,
		Err(err) => {
			tracing::debug!(error = %err, url, "Metadata fetch failed.");

			PageMetadata::default()
		},
	}
}

pub async fn try_fetch_metadata(cfg: &Fetcher, url: &str) -> Result<PageMetadata> {
	let target = address::normalize(url);

	if !address::has_scheme(&target.url) {
		return Err(Error::InvalidUrl { message: format!("Cannot fetch {:?}.", target.url) });
	}

	let client = crate::build_client(cfg)?;
	let res = client.get(target.url.as_str()).send().await?;
	let body = read_body(res, cfg.max_body_bytes).await?;
	let title = title::title_or_hostname(&body, &target.hostname);

	Ok(PageMetadata { title, domain: target.hostname })
}

/// Reads at most `limit` bytes of the body. A multi-byte character cut at the limit is replaced
/// rather than rejected.
async fn read_body(mut res: reqwest::Response, limit: usize) -> Result<String> {
	let mut buf: Vec<u8> = Vec::new();

	while buf.len() < limit {
		let Some(chunk) = res.chunk().await? else {
			break;
		};
		let take = chunk.len().min(limit - buf.len());

		buf.extend_from_slice(&chunk[..take]);
	}

	Ok(String::from_utf8_lossy(&buf).into_owned())
}
