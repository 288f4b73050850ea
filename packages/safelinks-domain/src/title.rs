use regex::Regex;

const TITLE_PATTERN: &str = r"<title>(.*?)</title>";

/// Pulls the first `<title>` element out of a raw HTML body.
///
/// This is a plain pattern match on the bytes as served: no entity decoding, no attribute
/// handling, and titles spanning several lines are not matched.
pub fn extract_title(body: &str) -> Option<String> {
	let re = Regex::new(TITLE_PATTERN).ok()?;
	let captured = re.captures(body)?.get(1)?;

	Some(captured.as_str().trim().to_string())
}

/// Title shown for a fetched page: the extracted title, or the hostname when the page has none.
pub fn title_or_hostname(body: &str, hostname: &str) -> String {
	extract_title(body).unwrap_or_else(|| hostname.to_string())
}
