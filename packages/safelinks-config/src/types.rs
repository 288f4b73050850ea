use serde::Deserialize;

pub const DEFAULT_OWNER_HEADER: &str = "X-SafeLinks-Owner-Id";
pub const DEFAULT_CATEGORY: &str = "General";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	#[serde(default)]
	pub fetcher: Fetcher,
	#[serde(default)]
	pub vault: Vault,
	pub security: Security,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	pub http_bind: String,
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
}

/// Outbound page fetches made while previewing a link.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Fetcher {
	pub user_agent: String,
	/// Optional. When absent the HTTP client's own defaults apply.
	pub timeout_ms: Option<u64>,
	/// Bytes of the response body kept for title matching.
	pub max_body_bytes: usize,
}
impl Default for Fetcher {
	fn default() -> Self {
		Self {
			user_agent: concat!("SafeLinks/", env!("CARGO_PKG_VERSION")).to_string(),
			timeout_ms: None,
			max_body_bytes: 1_048_576,
		}
	}
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Vault {
	pub page_size: u32,
	pub default_category: String,
	/// Display priority of categories. Anything not listed sorts alphabetically after these.
	pub category_order: Vec<String>,
}
impl Default for Vault {
	fn default() -> Self {
		Self {
			page_size: 10,
			default_category: DEFAULT_CATEGORY.to_string(),
			category_order: ["UI Library", "Inspiration", "General", "Article"]
				.into_iter()
				.map(str::to_string)
				.collect(),
		}
	}
}

#[derive(Debug, Clone, Deserialize)]
pub struct Security {
	pub bind_localhost_only: bool,
	/// Header the identity proxy uses to pass the authenticated owner identifier.
	#[serde(default = "default_owner_header")]
	pub owner_header: String,
	/// Optional. Shared secret the identity proxy presents as a bearer token.
	pub api_auth_token: Option<String>,
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_owner_header() -> String {
	DEFAULT_OWNER_HEADER.to_string()
}
