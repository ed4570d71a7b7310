//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;

/// 统一错误类型：校验失败、唯一性冲突、未找到、存储失败
#[derive(Debug)]
pub enum CoreError {
    /// 必填字段缺失或为空
    MissingField(&'static str),
    /// 邮箱不符合 local@domain.tld 形式
    InvalidEmail,
    /// 年龄不是非负整数
    InvalidAge,
    /// 邮箱与已有记录冲突
    DuplicateEmail,
    /// 指定 id 的用户不存在
    NotFound(i64),
    /// 存储层意外失败
    Store(sqlx::Error),
}

/// 错误响应体，所有失败状态统一为 {"error": "..."}
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreError::MissingField(field) => write!(f, "缺少必填字段: {}", field),
            CoreError::InvalidEmail => write!(f, "请提供有效的邮箱地址"),
            CoreError::InvalidAge => write!(f, "年龄必须是非负整数"),
            CoreError::DuplicateEmail => write!(f, "邮箱地址已存在"),
            CoreError::NotFound(id) => write!(f, "用户 {} 不存在", id),
            CoreError::Store(err) => write!(f, "存储操作失败: {}", err),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<sqlx::Error> for CoreError {
    fn from(err: sqlx::Error) -> Self {
        // 唯一索引冲突视为邮箱重复，其余归为存储失败
        if err
            .as_database_error()
            .map_or(false, |db| db.is_unique_violation())
        {
            CoreError::DuplicateEmail
        } else {
            CoreError::Store(err)
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            CoreError::MissingField(_) | CoreError::InvalidEmail | CoreError::InvalidAge => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            CoreError::DuplicateEmail => (StatusCode::CONFLICT, self.to_string()),
            CoreError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            CoreError::Store(err) => {
                // 底层错误文本不透给客户端
                error!("存储层错误: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "服务器内部错误".to_string(),
                )
            }
        };

        (status, axum::Json(ErrorResponse { error: message })).into_response()
    }
}
