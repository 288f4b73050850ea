use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{Error, Result, models::Link};

/// Inserts `link` unless the owner already saved the same URL.
pub async fn insert_link<'e, E>(executor: E, link: &Link) -> Result<()>
where
	E: Executor<'e, Database = Postgres>,
{
	if link.owner_id.is_empty() || link.url.is_empty() || link.title.is_empty() {
		return Err(Error::InvalidArgument(
			"owner_id, url, and title must not be empty.".to_string(),
		));
	}

	let inserted: Option<Uuid> = sqlx::query_scalar(
		"\
INSERT INTO links (
	link_id,
	owner_id,
	url,
	title,
	description,
	italic_keyword,
	context_note,
	category,
	created_at
)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
ON CONFLICT (owner_id, url) DO NOTHING
RETURNING link_id",
	)
	.bind(link.link_id)
	.bind(link.owner_id.as_str())
	.bind(link.url.as_str())
	.bind(link.title.as_str())
	.bind(link.description.as_deref())
	.bind(link.italic_keyword.as_deref())
	.bind(link.context_note.as_deref())
	.bind(link.category.as_str())
	.bind(link.created_at)
	.fetch_optional(executor)
	.await?;

	match inserted {
		Some(_) => Ok(()),
		None => {
			tracing::debug!(owner_id = %link.owner_id, url = %link.url, "Link already stored.");

			Err(Error::Conflict(format!("Link {} already exists for this owner.", link.url)))
		},
	}
}

pub async fn list_links<'e, E>(executor: E, owner_id: &str) -> Result<Vec<Link>>
where
	E: Executor<'e, Database = Postgres>,
{
	let links = sqlx::query_as::<_, Link>(
		"\
SELECT
	link_id,
	owner_id,
	url,
	title,
	description,
	italic_keyword,
	context_note,
	category,
	created_at
FROM links
WHERE owner_id = $1
ORDER BY created_at DESC, link_id DESC",
	)
	.bind(owner_id)
	.fetch_all(executor)
	.await?;

	Ok(links)
}

pub async fn delete_link<'e, E>(executor: E, owner_id: &str, link_id: Uuid) -> Result<bool>
where
	E: Executor<'e, Database = Postgres>,
{
	let result = sqlx::query("DELETE FROM links WHERE link_id = $1 AND owner_id = $2")
		.bind(link_id)
		.bind(owner_id)
		.execute(executor)
		.await?;

	Ok(result.rows_affected() > 0)
}

pub async fn count_links<'e, E>(executor: E, owner_id: &str) -> Result<i64>
where
	E: Executor<'e, Database = Postgres>,
{
	let count: i64 = sqlx::query_scalar("SELECT count(*) FROM links WHERE owner_id = $1")
		.bind(owner_id)
		.fetch_one(executor)
		.await?;

	Ok(count)
}
