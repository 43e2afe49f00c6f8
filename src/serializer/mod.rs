//! Copyright (c) 2025-2026, Kirky.X
//!
//! MIT License
//!
//! 该模块定义了序列化器的核心抽象：把领域对象映射为属性结构，
//! 再通过渲染上下文中的编码器输出JSON字符串。

pub mod list;

use crate::attributes::Attributes;
use crate::context::RenderContext;
use crate::encoding::RenderOptions;
use crate::error::{Result, SerializerError};
use tracing::debug;

pub use list::ListSerializer;

/// 默认的内容类型
pub const MIME_TYPE_JSON: &str = "application/json";

/// 序列化器特征
///
/// 每个具体的序列化器都必须实现 `attributes`。渲染时先计算属性，
/// 再把属性和渲染选项交给上下文中的编码器；两步中的任何错误都原样返回。
pub trait Serializer {
    /// 计算属性结构，每次调用都重新计算
    fn attributes(&self) -> Result<Attributes>;

    /// 输出的内容类型
    fn mime_type(&self) -> &str {
        MIME_TYPE_JSON
    }

    /// 使用上下文的默认选项渲染
    fn render(&self, ctx: &RenderContext) -> Result<String> {
        self.render_with(ctx, ctx.options())
    }

    /// 使用指定选项渲染，覆盖上下文的默认选项
    fn render_with(&self, ctx: &RenderContext, options: &RenderOptions) -> Result<String> {
        let attributes = self.attributes()?;
        let output = ctx.encoder().encode(&attributes, options)?;
        debug!(
            mime_type = self.mime_type(),
            len = output.len(),
            "attributes rendered"
        );
        Ok(output)
    }
}

/// 可由单个领域对象构造的序列化器
///
/// `Args` 是构造时附加的参数，列表序列化器会把它克隆给每个元素
pub trait ItemSerializer: Serializer + Sized {
    type Object;
    type Args: Clone;

    fn new(object: Self::Object, args: Self::Args) -> Self;

    /// 被包装的领域对象
    fn object(&self) -> &Self::Object;

    /// 为集合中的每个元素构造一个序列化器
    fn list<I>(collection: I, args: Self::Args) -> ListSerializer<Self>
    where
        I: IntoIterator<Item = Self::Object>,
    {
        ListSerializer::new(collection, args)
    }
}

/// 未实现 `attributes` 的基础序列化器
///
/// 只保存对象，计算属性或渲染时总是返回 `NotImplemented`
#[derive(Debug, Clone)]
pub struct BaseSerializer<T> {
    object: T,
}

impl<T> Serializer for BaseSerializer<T> {
    fn attributes(&self) -> Result<Attributes> {
        Err(SerializerError::not_implemented::<Self>())
    }
}

impl<T> ItemSerializer for BaseSerializer<T> {
    type Object = T;
    type Args = ();

    fn new(object: T, _args: ()) -> Self {
        Self { object }
    }

    fn object(&self) -> &T {
        &self.object
    }
}

impl<S: Serializer + ?Sized> Serializer for &S {
    fn attributes(&self) -> Result<Attributes> {
        (**self).attributes()
    }

    fn mime_type(&self) -> &str {
        (**self).mime_type()
    }

    fn render_with(&self, ctx: &RenderContext, options: &RenderOptions) -> Result<String> {
        (**self).render_with(ctx, options)
    }
}

impl<S: Serializer + ?Sized> Serializer for Box<S> {
    fn attributes(&self) -> Result<Attributes> {
        (**self).attributes()
    }

    fn mime_type(&self) -> &str {
        (**self).mime_type()
    }

    fn render_with(&self, ctx: &RenderContext, options: &RenderOptions) -> Result<String> {
        (**self).render_with(ctx, options)
    }
}
