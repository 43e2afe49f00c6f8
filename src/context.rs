//! Copyright (c) 2025-2026, Kirky.X
//!
//! MIT License
//!
//! 该模块定义了渲染上下文，负责向序列化器注入编码器和默认渲染选项。

use crate::config::Config;
use crate::encoding::{Encoder, EncoderEnum, RenderOptions};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// 渲染上下文
///
/// 持有当前编码器和默认渲染选项。编码器在渲染时读取，
/// 替换编码器后通过该上下文进行的后续渲染都会使用新的编码器。
#[derive(Clone)]
pub struct RenderContext {
    encoder: Arc<dyn Encoder>,
    options: RenderOptions,
}

impl RenderContext {
    /// 使用指定编码器和默认选项创建上下文
    pub fn new<E: Encoder + 'static>(encoder: E) -> Self {
        Self {
            encoder: Arc::new(encoder),
            options: RenderOptions::default(),
        }
    }

    /// 根据配置创建上下文
    pub fn from_config(config: &Config) -> Self {
        let encoder = config.render.encoder.build();
        debug!(encoder = ?config.render.encoder, "render context created from config");
        Self {
            encoder: Arc::new(encoder),
            options: config.render.options(),
        }
    }

    pub fn with_encoder<E: Encoder + 'static>(mut self, encoder: E) -> Self {
        self.set_encoder(encoder);
        self
    }

    pub fn with_shared_encoder(mut self, encoder: Arc<dyn Encoder>) -> Self {
        self.encoder = encoder;
        self
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// 替换编码器
    pub fn set_encoder<E: Encoder + 'static>(&mut self, encoder: E) {
        debug!("render context encoder replaced");
        self.encoder = Arc::new(encoder);
    }

    pub fn set_options(&mut self, options: RenderOptions) {
        self.options = options;
    }

    pub fn encoder(&self) -> &dyn Encoder {
        self.encoder.as_ref()
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new(EncoderEnum::default())
    }
}

impl fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContext")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
