//! POS Server - 餐厅点单 (comanda) 后端
//!
//! # 模块结构
//!
//! ```text
//! pos-server/src/
//! ├── core/     # 配置、状态、HTTP 服务器
//! ├── db/       # SQLite 连接池、迁移、仓储、种子数据
//! ├── orders/   # 订单服务 (点单 / 查看 / 删除 / 结账)
//! ├── api/      # HTTP 路由和处理器
//! ├── routes/   # 路由汇总与中间件
//! └── utils/    # 错误类型、日志
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod orders;
pub mod routes;
pub mod utils;

pub use core::{Config, Server, ServerState};
pub use db::DbService;
pub use orders::OrderService;
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use utils::logger::init_logger;
