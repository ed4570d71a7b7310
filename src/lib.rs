//! # 用户管理应用
//!
//! 基于 Axum + SQLx 的用户记录管理应用，包括：
//! - REST API：单表 CRUD，email 带唯一约束
//! - 校验层：必填、格式、范围逐级检查
//! - 客户端：API 封装与表单/列表状态控制器

pub mod app;
pub mod client;
pub mod core;
pub mod infrastructure;
