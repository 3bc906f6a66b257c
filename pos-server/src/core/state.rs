use crate::core::Config;
use crate::db::DbService;
use crate::orders::OrderService;

/// 服务器状态 - 持有所有服务的共享引用
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 配置项 (不可变) |
/// | db | SQLite 连接池 (读 / 写) |
/// | orders | 订单服务 (写连接池 + 桌台锁) |
///
/// Clone 为浅拷贝，作为 axum `State` 注入每个 handler。
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
    pub orders: OrderService,
}

impl ServerState {
    pub fn new(config: Config, db: DbService) -> Self {
        let orders = OrderService::new(db.writer.clone());
        Self { config, db, orders }
    }
}
