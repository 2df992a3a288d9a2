//! Student Registry - 学生注册服务
//!
//! 基于 Actix Web 构建的"创建学生"请求处理层。
//!
//! # 架构
//! - `config`: 配置管理
//! - `controllers`: 控制器层（请求校验 + 结果映射）
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `usecases`: 业务能力接口及其后端实现
//! - `utils`: 工具函数

pub mod config;
pub mod controllers;
pub mod errors;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod usecases;
pub mod utils;
