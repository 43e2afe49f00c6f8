//! Copyright (c) 2025, Kirky.X
//!
//! MIT License
//!
//! 该模块定义了渲染配置结构和解析逻辑。

use crate::encoding::{EncoderEnum, JsonEncoder, RenderOptions, DEFAULT_INDENT, MAX_INDENT};
use crate::error::{Result, SerializerError};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

pub const CONFIG_VERSION: u32 = 1;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub config_version: Option<u32>,
    #[serde(default)]
    pub render: RenderConfig,
}

/// 渲染配置
///
/// 定义默认编码器和默认渲染选项
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// 编码器类型
    pub encoder: EncoderType,
    /// 是否输出带缩进的JSON
    pub pretty: bool,
    /// 缩进宽度
    pub indent: usize,
    /// 是否排序对象键
    pub sort_keys: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            encoder: EncoderType::Json,
            pretty: false,
            indent: DEFAULT_INDENT,
            sort_keys: false,
        }
    }
}

impl RenderConfig {
    pub fn options(&self) -> RenderOptions {
        RenderOptions {
            pretty: self.pretty,
            indent: self.indent,
            sort_keys: self.sort_keys,
        }
    }
}

/// 编码器类型枚举
#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EncoderType {
    /// serde_json编码
    #[default]
    Json,
}

impl EncoderType {
    pub fn build(&self) -> EncoderEnum {
        match self {
            EncoderType::Json => EncoderEnum::Json(JsonEncoder::new()),
        }
    }
}

impl std::str::FromStr for Config {
    type Err = SerializerError;

    /// 从TOML字符串解析并验证配置
    fn from_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        config.validate().map_err(SerializerError::ConfigError)?;
        Ok(config)
    }
}

impl Config {
    /// 从TOML文件加载配置
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: Config = content.parse()?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// 验证配置
    ///
    /// 检查配置版本和渲染选项是否在合理范围内
    pub fn validate(&self) -> std::result::Result<(), String> {
        if let Some(version) = self.config_version {
            if version > CONFIG_VERSION {
                return Err(format!(
                    "Configuration version {} is not supported. Current version is {}.",
                    version, CONFIG_VERSION
                ));
            }
        }

        if self.render.indent > MAX_INDENT {
            return Err(format!(
                "render.indent cannot exceed {} (got {})",
                MAX_INDENT, self.render.indent
            ));
        }

        if !self.render.pretty && self.render.indent != DEFAULT_INDENT {
            warn!(
                indent = self.render.indent,
                "render.indent has no effect unless render.pretty is enabled"
            );
        }

        Ok(())
    }
}
