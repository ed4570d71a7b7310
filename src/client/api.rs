//! 后端 API 的 HTTP 客户端封装

use serde_json::json;

use crate::app::users::model::User;
use crate::core::error::ErrorResponse;
use crate::core::response::DeleteConfirmation;

/// 客户端错误：服务端返回失败状态，或请求本身失败
#[derive(Debug)]
pub enum ClientError {
    /// 服务端返回失败状态，附带 {"error": ...} 中的消息
    Server { status: u16, message: String },
    /// 网络或协议层错误
    Http(reqwest::Error),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Server { status, message } => write!(f, "[{}] {}", status, message),
            ClientError::Http(err) => write!(f, "请求失败: {}", err),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Http(err)
    }
}

impl ClientError {
    /// 展示给用户的消息：优先用服务端的 error 文本
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Server { message, .. } => message.clone(),
            ClientError::Http(_) => "操作失败，请稍后重试".to_string(),
        }
    }
}

/// 用户管理 API 客户端
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// GET /api/users
    pub async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        let response = self
            .http
            .get(format!("{}/api/users", self.base_url))
            .send()
            .await?;

        Self::parse(response).await
    }

    /// POST /api/users
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        age: i64,
    ) -> Result<User, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/users", self.base_url))
            .json(&json!({ "name": name, "email": email, "age": age }))
            .send()
            .await?;

        Self::parse(response).await
    }

    /// PUT /api/users/:id
    pub async fn update_user(
        &self,
        id: i64,
        name: &str,
        email: &str,
        age: i64,
    ) -> Result<User, ClientError> {
        let response = self
            .http
            .put(format!("{}/api/users/{}", self.base_url, id))
            .json(&json!({ "name": name, "email": email, "age": age }))
            .send()
            .await?;

        Self::parse(response).await
    }

    /// DELETE /api/users/:id
    pub async fn delete_user(&self, id: i64) -> Result<DeleteConfirmation, ClientError> {
        let response = self
            .http
            .delete(format!("{}/api/users/{}", self.base_url, id))
            .send()
            .await?;

        Self::parse(response).await
    }

    /// 成功时反序列化响应体，失败时提取 {"error": ...}
    async fn parse<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let message = response
            .json::<ErrorResponse>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| "操作失败，请稍后重试".to_string());

        Err(ClientError::Server {
            status: status.as_u16(),
            message,
        })
    }
}
