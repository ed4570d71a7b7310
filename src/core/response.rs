//! 核心响应处理模块

use serde::{Deserialize, Serialize};

/// 删除成功的确认响应
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    pub message: String,
    pub id: i64,
}

impl DeleteConfirmation {
    pub fn new(id: i64) -> Self {
        Self {
            message: "用户删除成功".to_string(),
            id,
        }
    }
}
