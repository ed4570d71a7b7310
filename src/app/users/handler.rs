//! 用户请求处理器
//!
//! 无状态的 verb+path 到存储操作的映射，
//! 状态码转换由 CoreError 的 IntoResponse 统一完成。

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};

use crate::core::{error::CoreError, response::DeleteConfirmation};

use super::{
    model::{User, UserPayload},
    service::UserService,
    validation,
};

#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
}

/// 组装全部路由
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health_check))
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/:id", put(update_user).delete(delete_user))
}

/// 根路径欢迎信息
pub async fn welcome() -> &'static str {
    "欢迎使用用户管理后端！"
}

/// 健康检查
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, CoreError> {
    state.user_service.ping().await?;

    Ok(Json(serde_json::json!({
        "status": "healthy",
        "database": "connected",
        "timestamp": chrono::Utc::now()
    })))
}

/// 获取所有用户，按创建时间倒序
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, CoreError> {
    let users = state.user_service.list().await?;
    Ok(Json(users))
}

/// 创建新用户
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<(StatusCode, Json<User>), CoreError> {
    let data = validation::validate(&payload)?;
    let user = state.user_service.create(data).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// 更新用户
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<User>, CoreError> {
    let data = validation::validate(&payload)?;
    let user = state.user_service.update(id, data).await?;
    Ok(Json(user))
}

/// 删除用户
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteConfirmation>, CoreError> {
    let id = state.user_service.delete(id).await?;
    Ok(Json(DeleteConfirmation::new(id)))
}
