//! Copyright (c) 2025-2026, Kirky.X
//!
//! MIT License
//!
//! 该模块定义了JSON编码器的实现。

use super::{Encoder, RenderOptions, MAX_INDENT};
use crate::attributes::Attributes;
use crate::error::{Result, SerializerError};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

/// JSON编码器
///
/// 实现基于serde_json的编码，默认输出紧凑格式并保留键的声明顺序
#[derive(Clone, Debug, Default)]
pub struct JsonEncoder;

impl JsonEncoder {
    /// 创建新的JSON编码器
    pub fn new() -> Self {
        Self
    }

    fn write<T: Serialize + ?Sized>(value: &T, options: &RenderOptions) -> Result<String> {
        if !options.pretty {
            return serde_json::to_string(value)
                .map_err(|e| SerializerError::Encoding(e.to_string()));
        }

        if options.indent > MAX_INDENT {
            return Err(SerializerError::Encoding(format!(
                "indent cannot exceed {} (got {})",
                MAX_INDENT, options.indent
            )));
        }

        let indent = " ".repeat(options.indent);
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value
            .serialize(&mut ser)
            .map_err(|e| SerializerError::Encoding(e.to_string()))?;

        String::from_utf8(buf).map_err(|e| SerializerError::Encoding(e.to_string()))
    }
}

impl Encoder for JsonEncoder {
    /// 编码属性为JSON字符串
    ///
    /// # 参数
    ///
    /// * `attributes` - 要编码的属性
    /// * `options` - 渲染选项
    ///
    /// # 返回值
    ///
    /// 返回JSON字符串或错误
    fn encode(&self, attributes: &Attributes, options: &RenderOptions) -> Result<String> {
        if options.sort_keys {
            let value = sort_keys(attributes.clone().into_value());
            Self::write(&value, options)
        } else {
            Self::write(attributes, options)
        }
    }
}

/// 递归地按字典序重排对象键
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, sort_keys(v)))
                    .collect::<Map<String, Value>>(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}
