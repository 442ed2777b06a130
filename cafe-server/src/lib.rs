//! Cafe Server - 咖啡柜台订单服务
//!
//! # 架构概述
//!
//! Accepts coffee orders over HTTP, fans each order out into one brew job
//! per cup, and hands finished orders to the customer exactly once. An
//! external workforce brews the jobs by writing to the same SQLite store.
//!
//! # 模块结构
//!
//! ```text
//! cafe-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── routes/        # 路由组装和中间件栈
//! ├── middleware/    # 请求日志
//! ├── orders/        # 下单、取餐、统计
//! ├── db/            # SQLite 连接池和 repository
//! └── utils/         # 错误、日志、校验
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod orders;
pub mod routes;
pub mod utils;

// Re-export 公共类型
pub use self::core::{Config, Server, ServerError, ServerState};
pub use orders::OrderError;
pub use routes::{build_app, build_router};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::{TelemetryProviders, init_logger_with_file};

/// Load `.env` and initialise logging and trace export from the environment
///
/// Call outside the tokio runtime: the OTLP/HTTP exporter uses a blocking
/// client. Shut the returned providers down after the server stops.
pub fn setup_environment() -> Result<(Config, TelemetryProviders), ServerError> {
    // .env is optional
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    let telemetry = init_logger_with_file(
        Some(&config.log_level),
        config.log_json,
        config.log_dir.as_deref(),
        config.otel_traces_endpoint.as_deref(),
    );
    Ok((config, telemetry))
}

pub fn print_banner() {
    println!(
        r#"
   ______      ____
  / ____/___ _/ __/__
 / /   / __ `/ /_/ _ \
/ /___/ /_/ / __/  __/
\____/\__,_/_/  \___/   coffee counter v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
