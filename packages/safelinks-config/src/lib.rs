mod error;
mod types;

pub use error::{Error, Result};
pub use types::{
	Config, DEFAULT_CATEGORY, DEFAULT_OWNER_HEADER, Fetcher, Postgres, Security, Service, Storage,
	Vault,
};

use std::{collections::HashSet, fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	parse(&raw).map_err(|err| match err {
		Error::ParseConfig { source, .. } =>
			Error::ParseConfig { path: path.to_path_buf(), source },
		other => other,
	})
}

/// Parses, normalizes, and validates a config document that is already in memory.
pub fn parse(raw: &str) -> Result<Config> {
	let mut cfg: Config = toml::from_str(raw)
		.map_err(|err| Error::ParseConfig { path: Default::default(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.dsn.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.postgres.dsn must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
		});
	}
	if cfg.fetcher.user_agent.trim().is_empty() {
		return Err(Error::Validation {
			message: "fetcher.user_agent must be non-empty.".to_string(),
		});
	}
	if cfg.fetcher.timeout_ms == Some(0) {
		return Err(Error::Validation {
			message: "fetcher.timeout_ms must be greater than zero when set.".to_string(),
		});
	}
	if cfg.fetcher.max_body_bytes == 0 {
		return Err(Error::Validation {
			message: "fetcher.max_body_bytes must be greater than zero.".to_string(),
		});
	}
	if cfg.vault.page_size == 0 {
		return Err(Error::Validation {
			message: "vault.page_size must be greater than zero.".to_string(),
		});
	}
	if cfg.vault.default_category.is_empty() {
		return Err(Error::Validation {
			message: "vault.default_category must be non-empty.".to_string(),
		});
	}

	let mut seen = HashSet::new();

	for category in &cfg.vault.category_order {
		if category.is_empty() {
			return Err(Error::Validation {
				message: "vault.category_order must not contain empty names.".to_string(),
			});
		}
		if !seen.insert(category.as_str()) {
			return Err(Error::Validation {
				message: format!("vault.category_order lists {category:?} more than once."),
			});
		}
	}

	if cfg.security.owner_header.is_empty()
		|| !cfg
			.security
			.owner_header
			.chars()
			.all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_')
	{
		return Err(Error::Validation {
			message: "security.owner_header must be a valid HTTP header name.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.security.owner_header = cfg.security.owner_header.trim().to_string();
	cfg.vault.default_category = cfg.vault.default_category.trim().to_string();

	for category in &mut cfg.vault.category_order {
		*category = category.trim().to_string();
	}

	if cfg.security.api_auth_token.as_deref().map(|token| token.trim().is_empty()).unwrap_or(false)
	{
		cfg.security.api_auth_token = None;
	}
}
