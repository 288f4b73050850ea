use std::time::{Duration, Instant};

use safelinks_domain::{
	address,
	capture::{CaptureFlow, CaptureState, Rejected},
	overlay::{self, OverlayResult, ResultKind, SearchOverlay},
	search::{self, SearchFields},
	ui::{Focus, UiContext},
	vault::{self, CategoryOrder, VaultEntry, VaultPager},
};

#[derive(Debug, Clone, PartialEq)]
struct Item {
	id: u32,
	title: &'static str,
	url: &'static str,
	keyword: Option<&'static str>,
	category: Option<&'static str>,
}
impl VaultEntry for Item {
	type Id = u32;

	fn id(&self) -> u32 {
		self.id
	}

	fn category(&self) -> Option<&str> {
		self.category
	}
}

fn item(id: u32, category: Option<&'static str>) -> Item {
	Item { id, title: "Untitled", url: "https://example.com", keyword: None, category }
}

fn fields(item: &Item) -> SearchFields<'_> {
	SearchFields {
		title: item.title,
		italic_keyword: item.keyword,
		category: item.category,
		url: item.url,
	}
}

#[test]
fn hostname_of_bare_domain() {
	assert_eq!(address::hostname("example.com"), "example.com");
	assert_eq!(address::normalize("example.com").url, "https://example.com");
}

#[test]
fn hostname_of_garbage_is_sentinel() {
	assert_eq!(address::hostname("not a url at all"), address::INVALID_HOST);
	assert_eq!(address::hostname("   "), address::UNKNOWN_HOST);
}

#[test]
fn hostname_of_full_url() {
	assert_eq!(address::hostname("https://www.Example.com/a?b=c"), "www.example.com");
}

#[test]
fn vault_uses_fixed_category_priority() {
	let items =
		vec![item(1, Some("General")), item(2, Some("UI Library")), item(3, Some("Article"))];
	let groups = vault::group_by_category(&items, &CategoryOrder::default(), "General");
	let categories: Vec<_> = groups.iter().map(|group| group.category.as_str()).collect();

	assert_eq!(categories, vec!["UI Library", "General", "Article"]);
}

#[test]
fn vault_keeps_store_order_within_category_and_defaults_missing_category() {
	let items = vec![
		item(5, Some("Zines")),
		item(4, None),
		item(3, Some("General")),
		item(2, Some("")),
		item(1, Some("Books")),
	];
	let groups = vault::group_by_category(&items, &CategoryOrder::default(), "General");
	let categories: Vec<_> = groups.iter().map(|group| group.category.as_str()).collect();

	assert_eq!(categories, vec!["General", "Books", "Zines"]);

	let general: Vec<_> = groups[0].items.iter().map(|item| item.id).collect();

	assert_eq!(general, vec![4, 3, 2]);
}

#[test]
fn vault_pages_in_steps_of_ten() {
	let items: Vec<_> = (0..25).map(|id| item(id, Some("General"))).collect();
	let order = CategoryOrder::default();
	let mut pager = VaultPager::default();
	let page = vault::render(&items, &pager, &order, "General");

	assert_eq!(page.total, 25);
	assert_eq!(page.groups[0].items.len(), 10);
	assert!(page.has_more);

	pager.show_more();
	pager.show_more();

	let page = vault::render(&items, &pager, &order, "General");

	assert_eq!(page.visible, 30);
	assert_eq!(page.groups[0].items.len(), 25);
	assert!(!page.has_more);
}

#[test]
fn vault_remove_drops_empty_sections() {
	let items = vec![item(1, Some("Article")), item(2, Some("General")), item(3, Some("General"))];
	let mut page = vault::render(&items, &VaultPager::default(), &CategoryOrder::default(), "General");

	assert!(page.remove(&1));
	assert_eq!(page.categories(), vec!["General"]);
	assert_eq!(page.total, 2);
	assert!(!page.remove(&1));
}

#[test]
fn vault_remove_keeps_the_rendered_window() {
	let items: Vec<_> = (0..11).map(|id| item(id, Some("General"))).collect();
	let mut page =
		vault::render(&items, &VaultPager::default(), &CategoryOrder::default(), "General");

	assert!(page.remove(&0));
	assert_eq!(page.groups[0].items.len(), 9);
	assert_eq!(page.total, 10);
	assert!(!page.has_more);
}

#[test]
fn search_matches_every_field_case_insensitively() {
	let items = vec![
		Item { title: "Rust Book", url: "https://doc.rust-lang.org", ..item(1, None) },
		Item { title: "Colors", url: "https://coolors.co", keyword: Some("Palette"), ..item(2, None) },
		Item { title: "Shadcn", url: "https://ui.shadcn.com", ..item(3, Some("UI Library")) },
		Item { title: "Notes", url: "https://github.com/x", ..item(4, None) },
	];

	let ids = |query: &str| -> Vec<u32> {
		search::filter(items.iter(), query, |item| fields(item)).into_iter().map(|item| item.id).collect()
	};

	assert_eq!(ids("rust"), vec![1]);
	assert_eq!(ids("PALETTE"), vec![2]);
	assert_eq!(ids("library"), vec![3]);
	assert_eq!(ids("github"), vec![4]);
	assert!(ids("").is_empty());
	assert_eq!(ids(" book"), vec![1]);
	assert!(ids(" rust").is_empty());
}

#[test]
fn search_caps_results() {
	let items: Vec<_> = (0..9).map(|id| item(id, Some("General"))).collect();
	let found = search::filter(items.iter(), "general", |item| fields(item));

	assert_eq!(found.len(), search::MAX_SEARCH_RESULTS);
	assert_eq!(found[0].id, 0);
}

#[test]
fn capture_flow_happy_path() {
	let mut flow = CaptureFlow::new();

	flow.open().expect("open");
	flow.set_url("example.com").expect("set url");

	let url = flow.submit_url().expect("submit url");

	assert_eq!(url, "example.com");
	assert_eq!(flow.set_url("other"), Err(Rejected::FetchInFlight));

	flow.metadata_loaded("  Example Domain ").expect("metadata");

	let draft = flow.draft_mut().expect("details step");

	assert_eq!(draft.title, "Example Domain");
	assert_eq!(draft.category, "General");

	draft.category = "Article".to_string();
	draft.italic_keyword = "  ".to_string();
	draft.context_note = "read later".to_string();

	let submission = flow.submission().expect("submission");

	assert_eq!(submission.url, "example.com");
	assert_eq!(submission.italic_keyword, None);
	assert_eq!(submission.context_note.as_deref(), Some("read later"));

	flow.save_result(Err("Link already collected.".to_string())).expect("failed save");

	assert_eq!(
		flow.draft().and_then(|draft| draft.error.as_deref()),
		Some("Link already collected.")
	);
	assert_eq!(flow.draft().map(|draft| draft.category.as_str()), Some("Article"));

	flow.save_result(Ok(())).expect("save");

	assert_eq!(flow.state(), &CaptureState::Closed);
	assert_eq!(flow.submission(), Err(Rejected::NotInDetails));
}

#[test]
fn capture_flow_rejects_empty_url_and_cancel_discards() {
	let mut flow = CaptureFlow::new();

	assert_eq!(flow.submit_url(), Err(Rejected::NotInUrlEntry));

	flow.open().expect("open");

	assert_eq!(flow.open(), Err(Rejected::AlreadyOpen));
	assert_eq!(flow.submit_url(), Err(Rejected::EmptyUrl));
	assert_eq!(flow.metadata_loaded("x"), Err(Rejected::NoFetchInFlight));

	flow.set_url("https://example.com").expect("set url");
	flow.submit_url().expect("submit");
	flow.metadata_loaded("").expect("metadata");

	assert_eq!(flow.draft().map(|draft| draft.title.as_str()), Some(""));
	assert_eq!(flow.set_url("https://other.com"), Err(Rejected::NotInUrlEntry));

	flow.cancel();

	assert!(!flow.is_open());

	flow.open().expect("reopen");

	assert_eq!(flow.state(), &CaptureState::UrlEntry { url: String::new(), fetching: false });
}

#[test]
fn overlay_debounces_and_starts_with_home() {
	let start = Instant::now();
	let mut overlay = SearchOverlay::new();

	assert_eq!(overlay.results(), &[OverlayResult::home()]);

	overlay.input("r", start);
	overlay.input("ru", start + Duration::from_millis(100));
	overlay.input("rus", start + Duration::from_millis(200));

	assert_eq!(overlay.due(start + Duration::from_millis(400)), None);

	let issue = overlay.due(start + Duration::from_millis(500)).expect("query due");

	assert_eq!(issue.query, "rus");
	assert!(overlay.is_searching());
	assert_eq!(overlay.due(start + Duration::from_secs(5)), None);

	let applied = overlay.complete(
		issue.generation,
		vec![OverlayResult::link("Rust", "https://rust-lang.org", Some("General".to_string()))],
	);

	assert!(applied);
	assert!(!overlay.is_searching());
	assert_eq!(overlay.results().len(), 2);
	assert_eq!(overlay.results()[0].kind, ResultKind::Page);
	assert_eq!(overlay.results()[1].href, "https://rust-lang.org");
}

#[test]
fn overlay_discards_stale_responses() {
	let start = Instant::now();
	let mut overlay = SearchOverlay::new();

	overlay.input("old", start);

	let old = overlay.due(start + overlay::DEBOUNCE).expect("old query");

	overlay.input("new", start + Duration::from_secs(1));

	let new = overlay.due(start + Duration::from_secs(2)).expect("new query");

	assert!(overlay.complete(new.generation, vec![OverlayResult::link("New", "https://n.io", None)]));
	assert!(!overlay.complete(old.generation, vec![OverlayResult::link("Old", "https://o.io", None)]));
	assert_eq!(overlay.results()[1].title, "New");
}

#[test]
fn overlay_short_query_shows_only_home_and_close_resets() {
	let start = Instant::now();
	let mut overlay = SearchOverlay::new();

	overlay.input("rust", start);

	let issue = overlay.due(start + overlay::DEBOUNCE).expect("query due");

	overlay.input("r", start + Duration::from_secs(1));

	assert_eq!(overlay.due(start + Duration::from_secs(2)), None);
	assert_eq!(overlay.results(), &[OverlayResult::home()]);
	assert!(!overlay.complete(issue.generation, vec![]));

	overlay.input("rust", start + Duration::from_secs(3));

	let pending = overlay.due(start + Duration::from_secs(4)).expect("query due");

	overlay.close();

	assert_eq!(overlay.query(), "");
	assert_eq!(overlay.deadline(), None);
	let late = vec![OverlayResult::link("R", "https://r.io", None)];

	assert!(!overlay.complete(pending.generation, late));
	assert_eq!(overlay.results(), &[OverlayResult::home()]);
}

#[test]
fn overlay_counts_whitespace_toward_minimum_length() {
	let start = Instant::now();
	let mut overlay = SearchOverlay::new();

	overlay.input(" r", start);

	let issue = overlay.due(start + overlay::DEBOUNCE).expect("query due");

	assert_eq!(issue.query, " r");

	overlay.input(" ", start + Duration::from_secs(1));

	assert_eq!(overlay.due(start + Duration::from_secs(2)), None);
	assert!(!overlay.is_searching());
}

#[test]
fn slash_opens_search_unless_typing() {
	let mut ui = UiContext::new();

	assert!(!ui.handle_key("/", Focus::from_tag("INPUT")));
	assert!(!ui.is_search_open());
	assert!(ui.handle_key("/", Focus::Body));
	assert!(ui.is_search_open());
	assert!(!ui.handle_key("/", Focus::Body));
	assert!(!ui.handle_key("Escape", Focus::Input));
	assert!(!ui.is_search_open());

	ui.toggle_search();

	assert!(ui.is_search_open());
}

#[test]
fn overlay_results_serialize_snake_case() {
	let json = serde_json::to_value(OverlayResult::home()).expect("serialize");

	assert_eq!(json["kind"], "page");
	assert_eq!(json["href"], "/");
}
