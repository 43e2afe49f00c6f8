//! oxserial - 对象到JSON的序列化约定
//!
//! 序列化器把领域对象映射为属性结构，再通过可替换的编码器渲染为JSON字符串；
//! 列表序列化器把同一个序列化器应用到集合的每个元素上。

#![doc(html_root_url = "https://docs.rs/oxserial/0.1.2")]

pub use serde;
pub use serde_json;

pub mod attributes;
pub mod config;
pub mod context;
pub mod encoding;
pub mod error;
pub mod serializer;
pub mod utils;

// Re-export commonly used items
pub use attributes::{AttributeMap, AttributeMapExt, Attributes};
pub use config::Config;
pub use context::RenderContext;
pub use encoding::{encoder_fn, Encoder, JsonEncoder, RenderOptions};
pub use error::{Result, SerializerError};
pub use serializer::{BaseSerializer, ItemSerializer, ListSerializer, Serializer, MIME_TYPE_JSON};

#[cfg(feature = "macros")]
pub use oxserial_macros::ItemSerializer;

/// oxserial 版本号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
