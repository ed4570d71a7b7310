//! 配置基础设施

use std::env;

/// 应用配置，来自环境变量，缺省时取默认值
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP 服务绑定地址
    pub bind_addr: String,
    /// 数据库连接串
    pub database_url: String,
}

impl AppConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3001".to_string());
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://users.db?mode=rwc".to_string());

        Self {
            bind_addr,
            database_url,
        }
    }
}
