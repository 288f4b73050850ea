use safelinks_domain::vault::{self, CategoryOrder, VaultPage, VaultPager};

use crate::{LinkItem, Result, SafeLinksService};

pub type VaultResponse = VaultPage<LinkItem>;

impl SafeLinksService {
	/// The owner's links grouped by category. `visible` is rounded up to whole pages and
	/// defaults to one page.
	pub async fn vault(&self, owner_id: &str, visible: Option<usize>) -> Result<VaultResponse> {
		let page_size = self.cfg.vault.page_size as usize;
		let pager = match visible {
			Some(visible) => VaultPager::with_visible(page_size, visible),
			None => VaultPager::new(page_size),
		};
		let order = CategoryOrder::new(self.cfg.vault.category_order.iter().cloned());
		let items = match crate::owner(owner_id) {
			Some(owner_id) => self.load_links(owner_id).await?,
			None => Vec::new(),
		};

		Ok(vault::render(&items, &pager, &order, &self.cfg.vault.default_category))
	}
}
