use url::Url;

/// Hostname reported for empty input.
pub const UNKNOWN_HOST: &str = "unknown";
/// Hostname reported when nothing resembling a host can be recovered.
pub const INVALID_HOST: &str = "invalid url";

const DEFAULT_SCHEME_PREFIX: &str = "https://";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUrl {
	pub url: String,
	pub hostname: String,
}

pub fn has_scheme(input: &str) -> bool {
	input.contains("://")
}

/// Coerces pasted text into something fetchable: bare domains such as `example.com` gain an
/// `https://` prefix. Anything else is returned trimmed but otherwise untouched.
pub fn sanitize(input: &str) -> String {
	let trimmed = input.trim();

	if !trimmed.is_empty() && !has_scheme(trimmed) && trimmed.contains('.') {
		format!("{DEFAULT_SCHEME_PREFIX}{trimmed}")
	} else {
		trimmed.to_string()
	}
}

/// Best-effort display hostname. Never fails; falls back to [`UNKNOWN_HOST`] or
/// [`INVALID_HOST`].
pub fn hostname(input: &str) -> String {
	let trimmed = input.trim();

	if trimmed.is_empty() {
		return UNKNOWN_HOST.to_string();
	}
	if let Some(host) = parse_host(trimmed) {
		return host;
	}
	if let Some(host) = parse_host(&format!("{DEFAULT_SCHEME_PREFIX}{trimmed}")) {
		return host;
	}

	let head = trimmed.split('/').next().unwrap_or_default();

	if head.is_empty() || head.chars().any(char::is_whitespace) {
		INVALID_HOST.to_string()
	} else {
		head.to_string()
	}
}

pub fn normalize(input: &str) -> NormalizedUrl {
	let url = sanitize(input);
	let hostname = hostname(&url);

	NormalizedUrl { url, hostname }
}

fn parse_host(candidate: &str) -> Option<String> {
	let parsed = Url::parse(candidate).ok()?;

	parsed.host_str().filter(|host| !host.is_empty()).map(str::to_string)
}
