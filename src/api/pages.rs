//! 页面与区块流接口
//!
//! 把 PageStore 的页面聚合契约暴露为 HTTP 端点：页面不存在返回 404，
//! 区块校验失败返回 422 并附带完整的字段错误列表。

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use crate::blocks::Block;
use crate::core::server::AppState;
use crate::core::store::StoreError;
use crate::models::types::{LandingPage, PageId, PageSummary};

/// 接口错误，统一映射为 JSON 错误响应
#[derive(Debug)]
pub enum ApiError {
    Store(StoreError),
    Internal(anyhow::Error),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Store(StoreError::PageNotFound(id)) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("page {} not found", id) })),
            )
                .into_response(),
            ApiError::Store(StoreError::BlockIndexOutOfRange { index, len }) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "error": format!("block index {} out of range (len {})", index, len),
                })),
            )
                .into_response(),
            ApiError::Store(StoreError::Invalid(err)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "error": "validation failed",
                    "fields": err.errors,
                })),
            )
                .into_response(),
            ApiError::Internal(err) => {
                warn!("内部错误: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

/// 创建页面的请求体
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatePageBody {
    pub title: String,
}

/// GET /api/pages
pub async fn list(State(state): State<AppState>) -> Json<Vec<PageSummary>> {
    Json(state.engine.store.list_pages())
}

/// POST /api/pages
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreatePageBody>,
) -> Result<(StatusCode, Json<LandingPage>), ApiError> {
    let page = state.engine.store.create_page(&body.title);
    state.engine.persist()?;
    Ok((StatusCode::CREATED, Json(page)))
}

/// GET /api/pages/:id
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<LandingPage>, ApiError> {
    let page = state.engine.store.get_page(PageId(id))?;
    Ok(Json(page))
}

/// DELETE /api/pages/:id
///
/// 级联删除区块流与全部分区记录。
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    state.engine.store.delete_page(PageId(id))?;
    state.engine.persist()?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/pages/:id/blocks
pub async fn blocks(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Vec<Block>>, ApiError> {
    let blocks = state.engine.store.get_blocks(PageId(id))?;
    Ok(Json(blocks))
}

/// POST /api/pages/:id/blocks
pub async fn append_block(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(block): Json<Block>,
) -> Result<StatusCode, ApiError> {
    state.engine.store.append_block(PageId(id), block)?;
    state.engine.persist()?;
    Ok(StatusCode::CREATED)
}

/// DELETE /api/pages/:id/blocks/:index
pub async fn remove_block(
    State(state): State<AppState>,
    Path((id, index)): Path<(u64, usize)>,
) -> Result<Json<Block>, ApiError> {
    let removed = state.engine.store.remove_block(PageId(id), index)?;
    state.engine.persist()?;
    Ok(Json(removed))
}
