//! 用户管理后端入口
//!
//! 组装配置、日志、数据库与路由，启动 HTTP 服务

use std::time::Duration;

use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

use user_management::app::users::handler::{create_routes, AppState};
use user_management::app::users::service::UserService;
use user_management::core::middleware::request_logging_middleware;
use user_management::infrastructure::{
    config::AppConfig, database::DatabaseManager, logger::Logger,
};

#[tokio::main]
async fn main() {
    // 初始化日志
    Logger::init("info");

    let config = AppConfig::from_env();
    info!("启动用户管理后端...");

    // 连接数据库并初始化表结构
    let database = DatabaseManager::new(&config.database_url)
        .await
        .expect("无法连接到数据库");
    info!("已连接到数据库: {}", config.database_url);

    // 存储对象在启动时构造一次，经由路由状态注入处理器
    let state = AppState {
        user_service: UserService::new(database.pool().clone()),
    };

    // 创建路由
    let app = create_routes()
        .layer(axum::middleware::from_fn(request_logging_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TimeoutLayer::new(Duration::from_secs(10)))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // 绑定地址
    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .expect("无法绑定监听地址");

    info!("🚀 服务器运行在 http://{}", config.bind_addr);
    info!("📖 API 端点:");
    info!("   GET    /              - 欢迎信息");
    info!("   GET    /health        - 健康检查");
    info!("   GET    /api/users     - 获取所有用户");
    info!("   POST   /api/users     - 创建新用户");
    info!("   PUT    /api/users/:id - 更新用户");
    info!("   DELETE /api/users/:id - 删除用户");

    // 启动服务器
    axum::serve(listener, app).await.expect("服务器启动失败");
}
