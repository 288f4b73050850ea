use std::sync::{
	Mutex,
	atomic::{AtomicBool, Ordering},
};

use uuid::Uuid;

use safelinks_storage::{BoxFuture, Error, LinkStore, Result, models::Link};

/// In-process [`LinkStore`] with the same uniqueness and ordering rules as the Postgres schema.
#[derive(Default)]
pub struct MemoryLinkStore {
	links: Mutex<Vec<Link>>,
	failing: AtomicBool,
}
impl MemoryLinkStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Makes every following call fail as if the database were unreachable.
	pub fn set_failing(&self, failing: bool) {
		self.failing.store(failing, Ordering::SeqCst);
	}

	pub fn len(&self) -> usize {
		self.links.lock().unwrap_or_else(|err| err.into_inner()).len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn count_for(&self, owner_id: &str) -> usize {
		self.links
			.lock()
			.unwrap_or_else(|err| err.into_inner())
			.iter()
			.filter(|link| link.owner_id == owner_id)
			.count()
	}

	fn check_available(&self) -> Result<()> {
		if self.failing.load(Ordering::SeqCst) {
			return Err(Error::Sqlx(sqlx::Error::PoolClosed));
		}

		Ok(())
	}

	fn insert(&self, link: &Link) -> Result<()> {
		self.check_available()?;

		let mut links = self.links.lock().unwrap_or_else(|err| err.into_inner());

		if links.iter().any(|stored| stored.owner_id == link.owner_id && stored.url == link.url) {
			return Err(Error::Conflict(format!(
				"Link {} already exists for this owner.",
				link.url
			)));
		}

		links.push(link.clone());

		Ok(())
	}

	fn list(&self, owner_id: &str) -> Result<Vec<Link>> {
		self.check_available()?;

		let links = self.links.lock().unwrap_or_else(|err| err.into_inner());
		let mut owned: Vec<Link> =
			links.iter().filter(|link| link.owner_id == owner_id).cloned().collect();

		owned.sort_by(|a, b| {
			b.created_at.cmp(&a.created_at).then_with(|| b.link_id.cmp(&a.link_id))
		});

		Ok(owned)
	}

	fn delete(&self, owner_id: &str, link_id: Uuid) -> Result<bool> {
		self.check_available()?;

		let mut links = self.links.lock().unwrap_or_else(|err| err.into_inner());
		let before = links.len();

		links.retain(|link| !(link.owner_id == owner_id && link.link_id == link_id));

		Ok(links.len() < before)
	}
}
impl LinkStore for MemoryLinkStore {
	fn insert_link<'a>(&'a self, link: &'a Link) -> BoxFuture<'a, Result<()>> {
		Box::pin(async move { self.insert(link) })
	}

	fn list_links<'a>(&'a self, owner_id: &'a str) -> BoxFuture<'a, Result<Vec<Link>>> {
		Box::pin(async move { self.list(owner_id) })
	}

	fn delete_link<'a>(
		&'a self,
		owner_id: &'a str,
		link_id: Uuid,
	) -> BoxFuture<'a, Result<bool>> {
		Box::pin(async move { self.delete(owner_id, link_id) })
	}
}
