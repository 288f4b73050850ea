use crate::address;

/// Upper bound on results returned by a single link search.
pub const MAX_SEARCH_RESULTS: usize = 5;

/// The link fields a search query is matched against.
#[derive(Debug, Clone, Copy)]
pub struct SearchFields<'a> {
	pub title: &'a str,
	pub italic_keyword: Option<&'a str>,
	pub category: Option<&'a str>,
	pub url: &'a str,
}

/// Lowercased query. `None` when it is empty. Whitespace is part of the query.
pub fn prepare_query(raw: &str) -> Option<String> {
	if raw.is_empty() { None } else { Some(raw.to_lowercase()) }
}

/// Case-insensitive substring match. `query` must come from [`prepare_query`].
pub fn matches(fields: &SearchFields<'_>, query: &str) -> bool {
	contains(fields.title, query)
		|| fields.italic_keyword.is_some_and(|keyword| contains(keyword, query))
		|| fields.category.is_some_and(|category| contains(category, query))
		|| contains(&address::hostname(fields.url), query)
}

/// Keeps at most [`MAX_SEARCH_RESULTS`] matching items, preserving input order.
pub fn filter<T, F>(items: impl IntoIterator<Item = T>, raw_query: &str, fields: F) -> Vec<T>
where
	F: Fn(&T) -> SearchFields<'_>,
{
	let Some(query) = prepare_query(raw_query) else {
		return Vec::new();
	};

	items
		.into_iter()
		.filter(|item| matches(&fields(item), &query))
		.take(MAX_SEARCH_RESULTS)
		.collect()
}

fn contains(haystack: &str, query: &str) -> bool {
	haystack.to_lowercase().contains(query)
}
