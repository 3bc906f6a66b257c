//! API 路由模块
//!
//! - [`health`] - 健康检查
//! - [`catalog`] - 菜单 (cardápio)
//! - [`tables`] - 桌台列表
//! - [`orders`] - 点单 / 查看 / 删除 / 结账
//! - [`extractor`] - JSON 请求体解析 (统一错误格式)

pub mod catalog;
pub mod extractor;
pub mod health;
pub mod orders;
pub mod tables;
