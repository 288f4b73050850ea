use std::{cmp::Ordering, collections::HashMap};

use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_CATEGORY: &str = "General";
pub const DEFAULT_CATEGORY_ORDER: [&str; 4] = ["UI Library", "Inspiration", "General", "Article"];

/// Something that can be placed in the vault.
pub trait VaultEntry {
	type Id: PartialEq;

	fn id(&self) -> Self::Id;

	fn category(&self) -> Option<&str>;
}

/// Display order for category sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOrder {
	priority: Vec<String>,
}
impl CategoryOrder {
	pub fn new<I, S>(priority: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self { priority: priority.into_iter().map(Into::into).collect() }
	}

	pub fn rank(&self, category: &str) -> Option<usize> {
		self.priority.iter().position(|value| value == category)
	}

	/// Listed categories first in list order, the rest alphabetically.
	pub fn compare(&self, a: &str, b: &str) -> Ordering {
		match (self.rank(a), self.rank(b)) {
			(Some(a), Some(b)) => a.cmp(&b),
			(Some(_), None) => Ordering::Less,
			(None, Some(_)) => Ordering::Greater,
			(None, None) => a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)),
		}
	}
}
impl Default for CategoryOrder {
	fn default() -> Self {
		Self::new(DEFAULT_CATEGORY_ORDER)
	}
}

/// "Show more" pagination over the vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaultPager {
	visible: usize,
	page_size: usize,
}
impl VaultPager {
	pub fn new(page_size: usize) -> Self {
		let page_size = page_size.max(1);

		Self { visible: page_size, page_size }
	}

	/// Pager restored from a client-supplied visible count, rounded up to whole pages.
	pub fn with_visible(page_size: usize, visible: usize) -> Self {
		let mut pager = Self::new(page_size);
		let pages = visible.div_ceil(pager.page_size).max(1);

		pager.visible = pages.saturating_mul(pager.page_size);

		pager
	}

	pub fn visible(&self) -> usize {
		self.visible
	}

	pub fn page_size(&self) -> usize {
		self.page_size
	}

	pub fn show_more(&mut self) {
		self.visible = self.visible.saturating_add(self.page_size);
	}

	pub fn has_more(&self, total: usize) -> bool {
		self.visible < total
	}

	pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
		&items[..items.len().min(self.visible)]
	}
}
impl Default for VaultPager {
	fn default() -> Self {
		Self::new(DEFAULT_PAGE_SIZE)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup<T> {
	pub category: String,
	pub items: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VaultPage<T> {
	pub total: usize,
	pub visible: usize,
	pub has_more: bool,
	pub groups: Vec<CategoryGroup<T>>,
}
impl<T> VaultPage<T>
where
	T: VaultEntry,
{
	/// Drops a deleted item from the rendered page. Empty sections disappear with it.
	pub fn remove(&mut self, id: &T::Id) -> bool {
		let mut removed = false;

		for group in &mut self.groups {
			if let Some(index) = group.items.iter().position(|item| &item.id() == id) {
				group.items.remove(index);

				removed = true;

				break;
			}
		}

		if removed {
			self.groups.retain(|group| !group.items.is_empty());

			self.total = self.total.saturating_sub(1);
			self.has_more = self.visible < self.total;
		}

		removed
	}

	pub fn categories(&self) -> Vec<&str> {
		self.groups.iter().map(|group| group.category.as_str()).collect()
	}
}

/// Partitions items by category, keeping the incoming order inside each section.
pub fn group_by_category<T>(
	items: &[T],
	order: &CategoryOrder,
	default_category: &str,
) -> Vec<CategoryGroup<T>>
where
	T: VaultEntry + Clone,
{
	let mut groups: Vec<CategoryGroup<T>> = Vec::new();
	let mut index_by_category: HashMap<String, usize> = HashMap::new();

	for item in items {
		let category = item
			.category()
			.map(str::trim)
			.filter(|value| !value.is_empty())
			.unwrap_or(default_category);
		let index = match index_by_category.get(category) {
			Some(index) => *index,
			None => {
				groups.push(CategoryGroup { category: category.to_string(), items: Vec::new() });
				index_by_category.insert(category.to_string(), groups.len() - 1);

				groups.len() - 1
			},
		};

		groups[index].items.push(item.clone());
	}

	groups.sort_by(|a, b| order.compare(&a.category, &b.category));

	groups
}

/// Renders the visible slice of `items`, which must already be newest first.
pub fn render<T>(
	items: &[T],
	pager: &VaultPager,
	order: &CategoryOrder,
	default_category: &str,
) -> VaultPage<T>
where
	T: VaultEntry + Clone,
{
	let total = items.len();
	let window = pager.window(items);

	VaultPage {
		total,
		visible: pager.visible(),
		has_more: pager.has_more(total),
		groups: group_by_category(window, order, default_category),
	}
}
