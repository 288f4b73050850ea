/// Kind of element holding keyboard focus when a key event arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
	Body,
	Input,
	TextArea,
	Select,
	Other,
}
impl Focus {
	pub fn is_text_entry(self) -> bool {
		matches!(self, Self::Input | Self::TextArea | Self::Select)
	}

	/// Maps a lowercase or uppercase DOM tag name.
	pub fn from_tag(tag: &str) -> Self {
		match tag.to_ascii_lowercase().as_str() {
			"body" => Self::Body,
			"input" => Self::Input,
			"textarea" => Self::TextArea,
			"select" => Self::Select,
			_ => Self::Other,
		}
	}
}

pub const SEARCH_SHORTCUT: &str = "/";
pub const CLOSE_KEY: &str = "Escape";

/// Application-wide UI state, created at the root and dropped on teardown.
#[derive(Debug, Default)]
pub struct UiContext {
	search_open: bool,
}
impl UiContext {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_search_open(&self) -> bool {
		self.search_open
	}

	pub fn open_search(&mut self) {
		self.search_open = true;
	}

	pub fn close_search(&mut self) {
		self.search_open = false;
	}

	pub fn toggle_search(&mut self) {
		self.search_open = !self.search_open;
	}

	/// Global key handler. Returns `true` when the event was consumed and its default action
	/// should be suppressed.
	pub fn handle_key(&mut self, key: &str, focus: Focus) -> bool {
		if key == SEARCH_SHORTCUT && !self.search_open {
			if focus.is_text_entry() {
				return false;
			}

			self.open_search();

			return true;
		}
		if key == CLOSE_KEY {
			self.close_search();
		}

		false
	}
}
