//! Copyright (c) 2025-2026, Kirky.X
//!
//! MIT License
//!
//! 该模块定义了列表序列化器，把同一个序列化器应用到集合的每个元素上。

use super::{ItemSerializer, Serializer};
use crate::attributes::Attributes;
use crate::error::Result;
use tracing::trace;

/// 列表序列化器
///
/// 构造时为集合中的每个元素立即创建一个元素序列化器，
/// 只保留元素序列化器，不保留原集合。元素顺序与输入顺序一致。
#[derive(Debug, Clone)]
pub struct ListSerializer<S> {
    items: Vec<S>,
}

impl<S: ItemSerializer> ListSerializer<S> {
    /// 创建列表序列化器
    ///
    /// # 参数
    ///
    /// * `collection` - 领域对象集合
    /// * `args` - 附加参数，克隆后传给每个元素序列化器
    pub fn new<I>(collection: I, args: S::Args) -> Self
    where
        I: IntoIterator<Item = S::Object>,
    {
        let items: Vec<S> = collection
            .into_iter()
            .map(|object| S::new(object, args.clone()))
            .collect();

        trace!(
            serializer = std::any::type_name::<S>(),
            count = items.len(),
            "list serializer built"
        );

        Self { items }
    }
}

impl<S> ListSerializer<S> {
    pub fn items(&self) -> &[S] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.items.iter()
    }
}

impl<S: Serializer> Serializer for ListSerializer<S> {
    /// 依次计算每个元素的属性，第一个错误直接返回
    fn attributes(&self) -> Result<Attributes> {
        self.items
            .iter()
            .map(|item| item.attributes())
            .collect::<Result<Vec<_>>>()
            .map(Attributes::List)
    }
}

impl<S> IntoIterator for ListSerializer<S> {
    type Item = S;
    type IntoIter = std::vec::IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, S> IntoIterator for &'a ListSerializer<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
