use axum::{
	Json, Router,
	body::Body,
	extract::{
		Path, Query, State,
		rejection::{JsonRejection, PathRejection, QueryRejection},
	},
	http::{HeaderMap, Request, StatusCode, header::AUTHORIZATION},
	middleware::{self, Next},
	response::{IntoResponse, Response},
	routing::{delete, get, post},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::state::AppState;
use safelinks_service::{
	CreateRequest, CreateResponse, DeleteResponse, Error, ListResponse, MSG_DUPLICATE,
	MSG_REQUIRED, MSG_UNAUTHORIZED, PreviewResponse, SearchResponse, VaultResponse,
};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
	#[serde(default)]
	pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct VaultParams {
	pub visible: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
	#[serde(default)]
	pub url: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}
impl ApiError {
	fn new(
		status: StatusCode,
		error_code: impl Into<String>,
		message: impl Into<String>,
		fields: Option<Vec<String>>,
	) -> Self {
		Self { status, error_code: error_code.into(), message: message.into(), fields }
	}
}
impl From<Error> for ApiError {
	fn from(err: Error) -> Self {
		match err {
			Error::InvalidRequest { message } => {
				let fields = (message == MSG_REQUIRED)
					.then(|| vec!["$.url".to_string(), "$.title".to_string()]);

				json_error(StatusCode::UNPROCESSABLE_ENTITY, "INVALID_REQUEST", message, fields)
			},
			Error::Duplicate =>
				json_error(StatusCode::CONFLICT, "DUPLICATE_LINK", MSG_DUPLICATE, None),
			Error::Unauthorized =>
				json_error(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", MSG_UNAUTHORIZED, None),
			Error::Storage { message } =>
				json_error(StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR", message, None),
		}
	}
}
impl From<JsonRejection> for ApiError {
	fn from(rejection: JsonRejection) -> Self {
		json_error(rejection.status(), "INVALID_REQUEST", rejection.body_text(), None)
	}
}
impl From<PathRejection> for ApiError {
	fn from(rejection: PathRejection) -> Self {
		json_error(rejection.status(), "INVALID_REQUEST", rejection.body_text(), None)
	}
}
impl From<QueryRejection> for ApiError {
	fn from(rejection: QueryRejection) -> Self {
		json_error(rejection.status(), "INVALID_REQUEST", rejection.body_text(), None)
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body =
			ErrorBody { error_code: self.error_code, message: self.message, fields: self.fields };

		(self.status, Json(body)).into_response()
	}
}

pub fn router(state: AppState) -> Router {
	let v1 = Router::new()
		.route("/v1/links", get(list_links).post(create_link))
		.route("/v1/links/search", get(search_links))
		.route("/v1/links/{link_id}", delete(delete_link))
		.route("/v1/metadata/preview", post(preview_metadata))
		.route("/v1/vault", get(vault))
		.layer(middleware::from_fn_with_state(state.clone(), api_auth_middleware));

	Router::new().route("/health", get(health)).merge(v1).with_state(state)
}

pub fn json_error(
	status: StatusCode,
	code: &str,
	message: impl Into<String>,
	fields: Option<Vec<String>>,
) -> ApiError {
	ApiError::new(status, code, message, fields)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn list_links(
	State(state): State<AppState>,
	headers: HeaderMap,
) -> Result<Json<ListResponse>, ApiError> {
	let owner_id = owner_id(&state, &headers);
	let response = state.service.list_by_owner(&owner_id).await?;

	Ok(Json(response))
}

async fn create_link(
	State(state): State<AppState>,
	headers: HeaderMap,
	payload: Result<Json<CreateRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateResponse>), ApiError> {
	let owner_id = owner_id(&state, &headers);
	let Json(payload) = payload?;
	let response = state.service.create(&owner_id, payload).await?;

	Ok((StatusCode::CREATED, Json(response)))
}

async fn delete_link(
	State(state): State<AppState>,
	headers: HeaderMap,
	link_id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<DeleteResponse>, ApiError> {
	let owner_id = owner_id(&state, &headers);
	let Path(link_id) = link_id?;
	let response = state.service.delete_by_owner(&owner_id, link_id).await?;

	Ok(Json(response))
}

async fn search_links(
	State(state): State<AppState>,
	headers: HeaderMap,
	params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
	let owner_id = owner_id(&state, &headers);
	let Query(params) = params?;
	let response = state.service.search(&owner_id, &params.q).await?;

	Ok(Json(response))
}

async fn preview_metadata(
	State(state): State<AppState>,
	headers: HeaderMap,
	payload: Result<Json<PreviewRequest>, JsonRejection>,
) -> Result<Json<PreviewResponse>, ApiError> {
	let owner_id = owner_id(&state, &headers);
	let Json(payload) = payload?;
	let response = state.service.preview_metadata(&owner_id, &payload.url).await;

	Ok(Json(response))
}

async fn vault(
	State(state): State<AppState>,
	headers: HeaderMap,
	params: Result<Query<VaultParams>, QueryRejection>,
) -> Result<Json<VaultResponse>, ApiError> {
	let owner_id = owner_id(&state, &headers);
	let Query(params) = params?;
	let response = state.service.vault(&owner_id, params.visible).await?;

	Ok(Json(response))
}

async fn api_auth_middleware(
	State(state): State<AppState>,
	req: Request<Body>,
	next: Next,
) -> Response {
	if let Some(expected) = state.service.cfg.security.api_auth_token.as_deref()
		&& read_bearer_token(req.headers()) != Some(expected)
	{
		return json_error(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", MSG_UNAUTHORIZED, None)
			.into_response();
	}

	next.run(req).await
}

/// Owner identifier injected by the identity proxy, verbatim. Empty when absent or unreadable.
fn owner_id(state: &AppState, headers: &HeaderMap) -> String {
	headers
		.get(state.service.cfg.security.owner_header.as_str())
		.and_then(|value| value.to_str().ok())
		.map(str::to_string)
		.unwrap_or_default()
}

fn read_bearer_token(headers: &HeaderMap) -> Option<&str> {
	let raw = headers.get(AUTHORIZATION)?;
	let value = raw.to_str().ok()?.trim();
	let token = value.strip_prefix("Bearer ")?.trim();

	if token.is_empty() { None } else { Some(token) }
}
