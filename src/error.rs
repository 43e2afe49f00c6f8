//! Copyright (c) 2025, Kirky.X
//!
//! MIT License
//!
//! 该模块定义了序列化系统的错误类型和处理机制。

use thiserror::Error;

/// 序列化系统错误类型枚举
///
/// 定义了属性计算、编码和配置加载中可能发生的错误类型
#[derive(Error, Debug)]
pub enum SerializerError {
    /// 序列化器没有实现 `attributes`
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// 编码器失败
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// 配置错误
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO错误
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML解析错误
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl SerializerError {
    /// 为指定的序列化器类型构造 `NotImplemented` 错误
    pub fn not_implemented<S: ?Sized>() -> Self {
        SerializerError::NotImplemented(format!(
            "{} must implement attributes()",
            std::any::type_name::<S>()
        ))
    }

    /// 是否为 `NotImplemented` 错误
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, SerializerError::NotImplemented(_))
    }
}

/// 序列化操作结果类型别名
pub type Result<T> = std::result::Result<T, SerializerError>;
