pub mod db;
pub mod models;
pub mod queries;
pub mod schema;

mod error;

use std::{future::Future, pin::Pin};

use uuid::Uuid;

pub use error::Error;

use crate::{db::Db, models::Link};

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Owner-scoped persistence for saved links.
///
/// Implementations must report an insert that collides with an existing `(owner_id, url)` pair
/// as [`Error::Conflict`] without writing anything.
pub trait LinkStore
where
	Self: Send + Sync,
{
	fn insert_link<'a>(&'a self, link: &'a Link) -> BoxFuture<'a, Result<()>>;

	/// Newest first, ties broken by `link_id` descending.
	fn list_links<'a>(&'a self, owner_id: &'a str) -> BoxFuture<'a, Result<Vec<Link>>>;

	/// Returns whether a row was removed.
	fn delete_link<'a>(&'a self, owner_id: &'a str, link_id: Uuid)
	-> BoxFuture<'a, Result<bool>>;
}

impl LinkStore for Db {
	fn insert_link<'a>(&'a self, link: &'a Link) -> BoxFuture<'a, Result<()>> {
		Box::pin(queries::insert_link(&self.pool, link))
	}

	fn list_links<'a>(&'a self, owner_id: &'a str) -> BoxFuture<'a, Result<Vec<Link>>> {
		Box::pin(queries::list_links(&self.pool, owner_id))
	}

	fn delete_link<'a>(
		&'a self,
		owner_id: &'a str,
		link_id: Uuid,
	) -> BoxFuture<'a, Result<bool>> {
		Box::pin(queries::delete_link(&self.pool, owner_id, link_id))
	}
}
