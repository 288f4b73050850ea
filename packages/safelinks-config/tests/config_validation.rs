use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use toml::Value;

use safelinks_config::Error;

const SAMPLE_CONFIG_TOML: &str = include_str!("fixtures/sample_config.toml");

fn sample_with(section: &str, key: &str, value: Value) -> String {
	let mut root: Value = toml::from_str(SAMPLE_CONFIG_TOML).expect("Failed to parse sample config.");
	let mut table = root.as_table_mut().expect("Sample config must be a table.");

	for part in section.split('.') {
		table = table
			.get_mut(part)
			.and_then(Value::as_table_mut)
			.unwrap_or_else(|| panic!("Sample config must include [{section}]."));
	}

	table.insert(key.to_string(), value);

	toml::to_string(&root).expect("Failed to render sample config.")
}

fn sample_without(section: &str) -> String {
	let mut root: Value = toml::from_str(SAMPLE_CONFIG_TOML).expect("Failed to parse sample config.");

	root.as_table_mut().expect("Sample config must be a table.").remove(section);

	toml::to_string(&root).expect("Failed to render sample config.")
}

fn expect_validation(raw: &str, needle: &str) {
	match safelinks_config::parse(raw) {
		Err(Error::Validation { message }) =>
			assert!(message.contains(needle), "Unexpected message: {message}"),
		other => panic!("Expected validation error mentioning {needle}, got {other:?}."),
	}
}

fn write_temp_config(contents: &str) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos = SystemTime::now().duration_since(UNIX_EPOCH).expect("Clock went backwards.").as_nanos();
	let path = env::temp_dir().join(format!(
		"safelinks_config_{}_{}_{}.toml",
		std::process::id(),
		nanos,
		COUNTER.fetch_add(1, Ordering::SeqCst)
	));

	fs::write(&path, contents).expect("Failed to write temp config.");

	path
}

#[test]
fn sample_config_loads_from_disk() {
	let path = write_temp_config(SAMPLE_CONFIG_TOML);
	let cfg = safelinks_config::load(&path).expect("Failed to load sample config.");

	fs::remove_file(&path).ok();

	assert_eq!(cfg.service.http_bind, "127.0.0.1:8080");
	assert_eq!(cfg.storage.postgres.pool_max_conns, 8);
	assert_eq!(cfg.fetcher.timeout_ms, Some(10_000));
	assert_eq!(cfg.vault.page_size, 10);
	assert_eq!(cfg.vault.category_order[0], "UI Library");
	assert_eq!(cfg.security.owner_header, "X-SafeLinks-Owner-Id");
}

#[test]
fn blank_api_auth_token_is_normalized_to_none() {
	let cfg = safelinks_config::parse(SAMPLE_CONFIG_TOML).expect("Failed to parse sample config.");

	assert!(cfg.security.api_auth_token.is_none());

	let raw = sample_with("security", "api_auth_token", Value::String("proxy-secret".into()));
	let cfg = safelinks_config::parse(&raw).expect("Failed to parse config with token.");

	assert_eq!(cfg.security.api_auth_token.as_deref(), Some("proxy-secret"));
}

#[test]
fn optional_sections_fall_back_to_defaults() {
	let raw = sample_without("fetcher");
	let raw = {
		let mut root: Value = toml::from_str(&raw).expect("Failed to parse config.");

		root.as_table_mut().expect("Config must be a table.").remove("vault");

		toml::to_string(&root).expect("Failed to render config.")
	};
	let cfg =
		safelinks_config::parse(&raw).expect("Failed to parse config without optional sections.");

	assert_eq!(cfg.fetcher.timeout_ms, None);
	assert_eq!(cfg.fetcher.max_body_bytes, 1_048_576);
	assert!(cfg.fetcher.user_agent.starts_with("SafeLinks/"));
	assert_eq!(cfg.vault.page_size, 10);
	assert_eq!(cfg.vault.default_category, "General");
	assert_eq!(cfg.vault.category_order, vec!["UI Library", "Inspiration", "General", "Article"]);
}

#[test]
fn rejects_zero_pool_size() {
	let raw = sample_with("storage.postgres", "pool_max_conns", Value::Integer(0));

	expect_validation(&raw, "pool_max_conns");
}

#[test]
fn rejects_zero_page_size() {
	let raw = sample_with("vault", "page_size", Value::Integer(0));

	expect_validation(&raw, "vault.page_size");
}

#[test]
fn rejects_zero_fetch_timeout() {
	let raw = sample_with("fetcher", "timeout_ms", Value::Integer(0));

	expect_validation(&raw, "fetcher.timeout_ms");
}

#[test]
fn rejects_duplicate_category_names() {
	let order = Value::Array(vec![
		Value::String("General".into()),
		Value::String(" General ".into()),
	]);
	let raw = sample_with("vault", "category_order", order);

	expect_validation(&raw, "more than once");
}

#[test]
fn rejects_invalid_owner_header() {
	let raw = sample_with("security", "owner_header", Value::String("X Owner".into()));

	expect_validation(&raw, "security.owner_header");
}

#[test]
fn reports_parse_errors_with_path() {
	let path = write_temp_config("[service\nhttp_bind = ");
	let err = safelinks_config::load(&path).expect_err("Expected parse failure.");

	fs::remove_file(&path).ok();

	match err {
		Error::ParseConfig { path: reported, .. } => assert_eq!(reported, path),
		other => panic!("Expected ParseConfig, got {other:?}."),
	}
}

#[test]
fn reports_missing_file() {
	let path = env::temp_dir().join("safelinks_config_missing_file.toml");
	let err = safelinks_config::load(&path).expect_err("Expected read failure.");

	assert!(matches!(err, Error::ReadConfig { .. }));
}
