//! 模块状态报告
//!
//! proc 端点的内容生成器：每次读取重新渲染，不缓存。
//! [`ProcFile`] 负责一次性交付契约——非零偏移的续读返回空。

use alloc::format;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cmp;

use sync::SpinLock;

use crate::error::LedError;
use crate::{MODULE_AUTHOR, MODULE_DESCRIPTION, MODULE_LICENCE, MODULE_REVISION};
use uapi::led::LED_MODULE_NAME;

/// 动态内容生成器 trait
pub trait ContentGenerator: Send + Sync {
    /// 生成文件内容（每次调用时重新生成）
    fn generate(&self) -> Result<Vec<u8>, LedError>;
}

/// 模块状态报告生成器
///
/// 输出模块元数据和已分配设备号区段的 major 部分，格式固定：
///
/// ```text
/// led: Simple LED module example with procfs and IOCTL
/// revision: 0.1
/// author: Darije Hanzekovic
/// licence: GPL
/// major: <N>
/// ```
pub struct StatusReporter {
    major: u32,
}

impl StatusReporter {
    /// 以已分配区段的 major 创建报告生成器。
    pub fn new(major: u32) -> Self {
        StatusReporter { major }
    }

    /// 报告里携带的 major 号。
    pub fn major(&self) -> u32 {
        self.major
    }
}

impl ContentGenerator for StatusReporter {
    fn generate(&self) -> Result<Vec<u8>, LedError> {
        log::info!("reading led proc entry");
        let content = format!(
            "{}: {}\nrevision: {}\nauthor: {}\nlicence: {}\nmajor: {}\n",
            LED_MODULE_NAME,
            MODULE_DESCRIPTION,
            MODULE_REVISION,
            MODULE_AUTHOR,
            MODULE_LICENCE,
            self.major,
        );
        Ok(content.into_bytes())
    }
}

/// proc 端点的读会话
///
/// 内容在一次读取里整体交付；调用方不重置位置再读时得到 0 字节，
/// 和设备读路径的契约一致。
pub struct ProcFile {
    generator: Arc<dyn ContentGenerator>,
    offset: SpinLock<usize>,
}

impl ProcFile {
    /// 包装一个内容生成器为读会话。
    pub fn new(generator: Arc<dyn ContentGenerator>) -> Self {
        ProcFile {
            generator,
            offset: SpinLock::new(0),
        }
    }

    /// 一次性读取：首次调用交付全部内容，之后返回 0。
    pub fn read(&self, buf: &mut [u8]) -> Result<usize, LedError> {
        let mut offset = self.offset.lock();
        if *offset > 0 {
            return Ok(0);
        }
        let content = self.generator.generate()?;
        let count = cmp::min(buf.len(), content.len());
        buf[..count].copy_from_slice(&content[..count]);
        *offset += count;
        Ok(count)
    }
}
