use thiserror::Error;

/// 外壳层错误 (终端 I/O、配置)。计算核心本身不会出错。
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config: {message}")]
    InvalidConfig { message: String },

    #[error("Unable to locate the user {0} directory")]
    NoDataDir(&'static str),
}

pub type Result<T> = std::result::Result<T, AppError>;
