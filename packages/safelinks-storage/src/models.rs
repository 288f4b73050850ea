use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Link {
	pub link_id: Uuid,
	pub owner_id: String,
	pub url: String,
	pub title: String,
	pub description: Option<String>,
	pub italic_keyword: Option<String>,
	pub context_note: Option<String>,
	pub category: String,
	pub created_at: OffsetDateTime,
}
