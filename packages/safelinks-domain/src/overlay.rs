//! Debounced quick-search overlay.
//!
//! Every keystroke bumps a generation. A query is only issued once [`DEBOUNCE`] has passed
//! without further input, and a response is only applied if no newer response has been
//! applied already, so a slow old query cannot overwrite a fresher answer.

use std::time::{Duration, Instant};

use serde::Serialize;

pub const DEBOUNCE: Duration = Duration::from_millis(300);
/// Queries shorter than this are not sent.
pub const MIN_QUERY_CHARS: usize = 2;

pub const HOME_TITLE: &str = "My Vault";
pub const HOME_HREF: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
	Page,
	Link,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlayResult {
	pub kind: ResultKind,
	pub title: String,
	pub href: String,
	pub meta: Option<String>,
}
impl OverlayResult {
	pub fn home() -> Self {
		Self {
			kind: ResultKind::Page,
			title: HOME_TITLE.to_string(),
			href: HOME_HREF.to_string(),
			meta: None,
		}
	}

	pub fn link(title: impl Into<String>, url: impl Into<String>, category: Option<String>) -> Self {
		Self { kind: ResultKind::Link, title: title.into(), href: url.into(), meta: category }
	}
}

/// Home result followed by the link results.
pub fn with_home(links: impl IntoIterator<Item = OverlayResult>) -> Vec<OverlayResult> {
	std::iter::once(OverlayResult::home()).chain(links).collect()
}

/// A query that is due to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
	pub generation: u64,
	pub query: String,
}

#[derive(Debug, Clone)]
pub struct SearchOverlay {
	query: String,
	generation: u64,
	last_input_at: Option<Instant>,
	issued_generation: u64,
	applied_generation: u64,
	searching: bool,
	results: Vec<OverlayResult>,
}
impl SearchOverlay {
	pub fn new() -> Self {
		Self {
			query: String::new(),
			generation: 0,
			last_input_at: None,
			issued_generation: 0,
			applied_generation: 0,
			searching: false,
			results: vec![OverlayResult::home()],
		}
	}

	pub fn query(&self) -> &str {
		&self.query
	}

	pub fn results(&self) -> &[OverlayResult] {
		&self.results
	}

	pub fn is_searching(&self) -> bool {
		self.searching
	}

	/// Records a keystroke. Returns the generation it started.
	pub fn input(&mut self, query: &str, now: Instant) -> u64 {
		self.query = query.to_string();
		self.generation += 1;
		self.last_input_at = Some(now);

		self.generation
	}

	/// When the pending keystroke becomes due, if any.
	pub fn deadline(&self) -> Option<Instant> {
		if self.issued_generation == self.generation {
			return None;
		}

		self.last_input_at.map(|at| at + DEBOUNCE)
	}

	/// Fires the debounce timer. Short queries reset the list to the home result without a
	/// round trip.
	pub fn due(&mut self, now: Instant) -> Option<Issue> {
		let deadline = self.deadline()?;

		if now < deadline {
			return None;
		}

		self.issued_generation = self.generation;

		if self.query.chars().count() < MIN_QUERY_CHARS {
			self.applied_generation = self.generation;
			self.searching = false;
			self.results = vec![OverlayResult::home()];

			return None;
		}

		self.searching = true;

		Some(Issue { generation: self.generation, query: self.query.clone() })
	}

	/// Applies a search response. Returns `false` when a newer response already landed or the
	/// overlay was closed after the query went out.
	pub fn complete(&mut self, generation: u64, links: Vec<OverlayResult>) -> bool {
		if generation <= self.applied_generation {
			return false;
		}

		self.applied_generation = generation;
		self.results = with_home(links);

		if generation == self.issued_generation {
			self.searching = false;
		}

		true
	}

	/// A failed request leaves the current results alone.
	pub fn fail(&mut self, generation: u64) {
		if generation == self.issued_generation {
			self.searching = false;
		}
	}

	pub fn close(&mut self) {
		*self = Self { generation: self.generation, ..Self::new() };
		self.issued_generation = self.generation;
		self.applied_generation = self.generation;
	}
}
impl Default for SearchOverlay {
	fn default() -> Self {
		Self::new()
	}
}
