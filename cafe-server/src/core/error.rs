use thiserror::Error;

use crate::utils::AppError;

/// Startup and serving failures
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("数据库错误: {0}")]
    Database(#[from] AppError),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("内部服务器错误: {0}")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
