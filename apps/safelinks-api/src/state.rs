use std::sync::Arc;

use safelinks_config::Config;
use safelinks_service::SafeLinksService;
use safelinks_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<SafeLinksService>,
}
impl AppState {
	/// Connects to Postgres and brings the schema up to date before serving.
	pub async fn new(config: Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		let service = SafeLinksService::new(config, Arc::new(db));

		Ok(Self::with_service(service))
	}

	pub fn with_service(service: SafeLinksService) -> Self {
		Self { service: Arc::new(service) }
	}
}
