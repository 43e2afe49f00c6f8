//! Copyright (c) 2025-2026, Kirky.X
//!
//! MIT License
//!
//! 该模块定义了属性结构的编码机制，支持可插拔的编码器。

pub mod json;

use crate::attributes::Attributes;
use crate::error::Result;

pub use json::JsonEncoder;

/// 默认的缩进宽度（空格数）
pub const DEFAULT_INDENT: usize = 2;

/// 允许的最大缩进宽度
pub const MAX_INDENT: usize = 16;

/// 渲染选项
///
/// 原样传递给编码器，由编码器决定如何解释
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// 是否输出带缩进的多行JSON
    pub pretty: bool,
    /// `pretty` 模式下每层缩进的空格数，不能超过 `MAX_INDENT`
    pub indent: usize,
    /// 是否按字典序递归排序对象键
    pub sort_keys: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: DEFAULT_INDENT,
            sort_keys: false,
        }
    }
}

impl RenderOptions {
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Default::default()
        }
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_sorted_keys(mut self) -> Self {
        self.sort_keys = true;
        self
    }
}

/// 编码器特征
///
/// 将属性结构和渲染选项转换为最终字符串
pub trait Encoder: Send + Sync {
    fn encode(&self, attributes: &Attributes, options: &RenderOptions) -> Result<String>;
}

/// 任意满足签名的闭包都可以作为编码器
impl<F> Encoder for F
where
    F: Fn(&Attributes, &RenderOptions) -> Result<String> + Send + Sync,
{
    fn encode(&self, attributes: &Attributes, options: &RenderOptions) -> Result<String> {
        self(attributes, options)
    }
}

/// 从闭包构造编码器
///
/// 仅用于帮助编译器推断闭包参数的生命周期
pub fn encoder_fn<F>(f: F) -> F
where
    F: Fn(&Attributes, &RenderOptions) -> Result<String> + Send + Sync,
{
    f
}

/// 编码器枚举
///
/// 用于根据配置选择内置编码器
#[derive(Clone, Debug)]
pub enum EncoderEnum {
    Json(JsonEncoder),
}

impl Default for EncoderEnum {
    fn default() -> Self {
        EncoderEnum::Json(JsonEncoder::new())
    }
}

impl Encoder for EncoderEnum {
    fn encode(&self, attributes: &Attributes, options: &RenderOptions) -> Result<String> {
        match self {
            EncoderEnum::Json(e) => e.encode(attributes, options),
        }
    }
}
