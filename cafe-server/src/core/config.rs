use std::path::PathBuf;

/// 服务器配置 - 咖啡柜台服务的所有配置项
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (数据库在 database/cafe.db) |
/// | DATABASE_URL | - | 覆盖数据库位置 (sqlite: URL) |
/// | HTTP_PORT | 1333 | HTTP 服务端口 (别名 SERVITOR_PORT) |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | debug (development) / info | 日志级别 |
/// | LOG_FORMAT | text | text 或 json |
/// | LOG_DIR | - | 日志文件目录 (按天滚动) |
/// | DB_MAX_CONNECTIONS | 5 | SQLite 连接池大小 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | 优雅关闭超时(毫秒) |
/// | OTEL_TRACES_ENDPOINT | - | OTLP/HTTP collector, 未设置则不导出 trace |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/cafe HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库和日志
    pub work_dir: String,
    /// 显式指定的数据库 URL
    pub database_url: Option<String>,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    pub log_level: String,
    /// 输出 JSON 格式日志
    pub log_json: bool,
    pub log_dir: Option<String>,
    pub db_max_connections: u32,
    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
    /// 关闭超时时间 (毫秒)
    pub shutdown_timeout_ms: u64,
    /// OTLP/HTTP collector 地址
    pub otel_traces_endpoint: Option<String>,
}

const DEFAULT_HTTP_PORT: u16 = 1333;

/// HTTP_PORT, then SERVITOR_PORT, then the default
fn port_from(lookup: impl Fn(&str) -> Option<String>) -> u16 {
    ["HTTP_PORT", "SERVITOR_PORT"]
        .into_iter()
        .find_map(|key| lookup(key).and_then(|p| p.trim().parse().ok()))
        .unwrap_or(DEFAULT_HTTP_PORT)
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let default_level = if environment == "development" {
            "debug"
        } else {
            "info"
        };

        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            database_url: std::env::var("DATABASE_URL")
                .ok()
                .filter(|url| !url.is_empty()),
            http_port: port_from(|key| std::env::var(key).ok()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| default_level.into()),
            log_json: std::env::var("LOG_FORMAT")
                .map(|f| f.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            shutdown_timeout_ms: std::env::var("SHUTDOWN_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
            otel_traces_endpoint: std::env::var("OTEL_TRACES_ENDPOINT")
                .ok()
                .filter(|e| !e.trim().is_empty()),
            environment,
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.database_url = None;
        config.http_port = http_port;
        config
    }

    /// 数据库目录
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// 数据库 URL: DATABASE_URL 优先，否则 WORK_DIR/database/cafe.db
    pub fn database_url(&self) -> String {
        match &self.database_url {
            Some(url) => url.clone(),
            None => format!("sqlite:{}", self.database_dir().join("cafe.db").display()),
        }
    }
}
