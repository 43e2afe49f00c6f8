//! Copyright (c) 2025-2026, Kirky.X
//!
//! MIT License
//!
//! 该模块定义了序列化器产出的属性结构。

use serde::Serialize;
use serde_json::{Map, Value};

/// 属性映射：字符串键到任意JSON值，保留插入顺序
pub type AttributeMap = Map<String, Value>;

/// 序列化器产出的属性结构
///
/// 单个对象产出映射，列表序列化器产出有序序列。
/// 序列化时不带标签，直接输出为JSON对象或数组。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Attributes {
    /// 单个对象的属性
    Object(AttributeMap),
    /// 有序的属性序列
    List(Vec<Attributes>),
}

/// 属性映射的构建扩展
pub trait AttributeMapExt {
    /// 追加一个键值对
    ///
    /// 同名键会覆盖原值但保留原位置
    fn with(self, key: impl Into<String>, value: impl Into<Value>) -> Self;
}

impl AttributeMapExt for AttributeMap {
    fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key.into(), value.into());
        self
    }
}

impl Attributes {
    pub fn as_object(&self) -> Option<&AttributeMap> {
        match self {
            Attributes::Object(map) => Some(map),
            Attributes::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Attributes]> {
        match self {
            Attributes::List(items) => Some(items),
            Attributes::Object(_) => None,
        }
    }

    /// 转换为 `serde_json::Value`
    pub fn into_value(self) -> Value {
        match self {
            Attributes::Object(map) => Value::Object(map),
            Attributes::List(items) => {
                Value::Array(items.into_iter().map(Attributes::into_value).collect())
            }
        }
    }
}

impl From<AttributeMap> for Attributes {
    fn from(map: AttributeMap) -> Self {
        Attributes::Object(map)
    }
}

impl From<Vec<Attributes>> for Attributes {
    fn from(items: Vec<Attributes>) -> Self {
        Attributes::List(items)
    }
}

impl From<Attributes> for Value {
    fn from(attributes: Attributes) -> Self {
        attributes.into_value()
    }
}
