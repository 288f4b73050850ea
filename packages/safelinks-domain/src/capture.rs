//! The two-step "capture a new link" form.
//!
//! `Closed -> UrlEntry -> Details -> Closed`. Cancelling from any open state returns straight to
//! `Closed`; there is no way back from `Details` to `UrlEntry`, and nothing is kept once the
//! flow closes.

use serde::Serialize;

use crate::vault::DEFAULT_CATEGORY;

/// Categories offered by the details step.
pub const CATEGORY_OPTIONS: [&str; 5] = ["General", "UI Library", "Tool", "Article", "Inspiration"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejected {
	AlreadyOpen,
	NotInUrlEntry,
	NotInDetails,
	EmptyUrl,
	FetchInFlight,
	NoFetchInFlight,
}

/// Everything the details step collects before saving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkDraft {
	pub url: String,
	pub title: String,
	pub italic_keyword: String,
	pub context_note: String,
	pub category: String,
	/// Message from the last failed save, shown above the form.
	#[serde(skip)]
	pub error: Option<String>,
}

/// Create request built from the details step. Blank optional fields are left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkSubmission {
	pub url: String,
	pub title: String,
	pub category: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub italic_keyword: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub context_note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CaptureState {
	#[default]
	Closed,
	UrlEntry {
		url: String,
		fetching: bool,
	},
	Details(LinkDraft),
}

#[derive(Debug, Clone, Default)]
pub struct CaptureFlow {
	state: CaptureState,
}
impl CaptureFlow {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn state(&self) -> &CaptureState {
		&self.state
	}

	pub fn is_open(&self) -> bool {
		!matches!(self.state, CaptureState::Closed)
	}

	pub fn open(&mut self) -> Result<(), Rejected> {
		if self.is_open() {
			return Err(Rejected::AlreadyOpen);
		}

		self.state = CaptureState::UrlEntry { url: String::new(), fetching: false };

		Ok(())
	}

	pub fn set_url(&mut self, text: &str) -> Result<(), Rejected> {
		match &mut self.state {
			CaptureState::UrlEntry { fetching: true, .. } => Err(Rejected::FetchInFlight),
			CaptureState::UrlEntry { url, .. } => {
				*url = text.to_string();

				Ok(())
			},
			_ => Err(Rejected::NotInUrlEntry),
		}
	}

	/// Starts the metadata fetch. Returns the URL to preview.
	pub fn submit_url(&mut self) -> Result<String, Rejected> {
		match &mut self.state {
			CaptureState::UrlEntry { fetching: true, .. } => Err(Rejected::FetchInFlight),
			CaptureState::UrlEntry { url, .. } if url.trim().is_empty() => Err(Rejected::EmptyUrl),
			CaptureState::UrlEntry { url, fetching } => {
				*fetching = true;

				Ok(url.clone())
			},
			_ => Err(Rejected::NotInUrlEntry),
		}
	}

	/// Moves to the details step with the fetched title pre-filled. An empty title leaves the
	/// field blank for the user to fill in.
	pub fn metadata_loaded(&mut self, fetched_title: &str) -> Result<(), Rejected> {
		let url = match &self.state {
			CaptureState::UrlEntry { url, fetching: true } => url.clone(),
			CaptureState::UrlEntry { .. } => return Err(Rejected::NoFetchInFlight),
			_ => return Err(Rejected::NotInUrlEntry),
		};

		self.state = CaptureState::Details(LinkDraft {
			url,
			title: fetched_title.trim().to_string(),
			italic_keyword: String::new(),
			context_note: String::new(),
			category: DEFAULT_CATEGORY.to_string(),
			error: None,
		});

		Ok(())
	}

	pub fn draft(&self) -> Option<&LinkDraft> {
		match &self.state {
			CaptureState::Details(draft) => Some(draft),
			_ => None,
		}
	}

	pub fn draft_mut(&mut self) -> Option<&mut LinkDraft> {
		match &mut self.state {
			CaptureState::Details(draft) => Some(draft),
			_ => None,
		}
	}

	pub fn submission(&self) -> Result<LinkSubmission, Rejected> {
		let draft = self.draft().ok_or(Rejected::NotInDetails)?;

		Ok(LinkSubmission {
			url: draft.url.trim().to_string(),
			title: draft.title.trim().to_string(),
			category: draft.category.clone(),
			italic_keyword: non_blank(&draft.italic_keyword),
			context_note: non_blank(&draft.context_note),
		})
	}

	pub fn cancel(&mut self) {
		self.state = CaptureState::Closed;
	}

	/// Applies the store's answer to a save. Success closes the flow; failure keeps the draft.
	pub fn save_result(&mut self, outcome: Result<(), String>) -> Result<(), Rejected> {
		let CaptureState::Details(draft) = &mut self.state else {
			return Err(Rejected::NotInDetails);
		};

		if let Err(message) = outcome {
			draft.error = Some(message);

			return Ok(());
		}

		self.state = CaptureState::Closed;

		Ok(())
	}
}

fn non_blank(value: &str) -> Option<String> {
	let trimmed = value.trim();

	if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
}
