/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DATABASE_PATH | restaurante.db | SQLite 数据库文件 |
/// | HTTP_PORT | 5000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 (production 时日志为 JSON) |
/// | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | LOG_DIR | - | 日志目录，未设置则只输出到 stdout |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | 关闭超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// DATABASE_PATH=/data/restaurante.db HTTP_PORT=8080 pos-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub http_port: u16,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub request_timeout_ms: u64,
    pub shutdown_timeout_ms: u64,
}

impl Config {
    /// 从环境变量加载配置，未设置或无法解析时使用默认值
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            database_path: var("DATABASE_PATH").unwrap_or_else(|| "restaurante.db".into()),
            http_port: var("HTTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            environment: var("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: var("LOG_DIR").filter(|d| !d.is_empty()),
            request_timeout_ms: var("REQUEST_TIMEOUT_MS")
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            shutdown_timeout_ms: var("SHUTDOWN_TIMEOUT_MS")
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
        }
    }

    /// 是否生产环境 (stdout 日志输出 JSON)
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
