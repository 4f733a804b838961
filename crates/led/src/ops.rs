//! 外部协作方接口
//!
//! 设备号分配和 proc 端点都是宿主环境的设施，这里只定义
//! 核心需要的能力 trait。实现以 [`Platform`] 捆绑的形式在
//! [`crate::LedRegistry::initialize`] 时显式注入，没有全局注册入口。

use alloc::sync::Arc;

use gpio::GpioOps;

use crate::error::LedError;
use crate::status::ContentGenerator;

/// 设备号分配与字符设备暴露
pub trait DevnoOps: Send + Sync {
    /// 预留一段连续的设备号区段，返回首个设备号。
    ///
    /// 区段不可用时返回 [`LedError::Allocation`]。
    fn alloc_region(&self, count: u32, name: &str) -> Result<u64, LedError>;

    /// 释放先前预留的区段。
    fn release_region(&self, base: u64, count: u32);

    /// 把一个设备号暴露为可被外部打开的设备。
    ///
    /// 失败返回 [`LedError::Resource`]。
    fn device_add(&self, dev: u64) -> Result<(), LedError>;

    /// 撤销设备号的对外暴露。
    fn device_del(&self, dev: u64);
}

/// proc 伪文件端点
pub trait ProcOps: Send + Sync {
    /// 以给定名字发布一个只读的内容生成器。
    ///
    /// 失败返回 [`LedError::Resource`]。
    fn publish(&self, name: &str, generator: Arc<dyn ContentGenerator>) -> Result<(), LedError>;

    /// 移除先前发布的端点。
    fn remove(&self, name: &str);
}

/// 注册表依赖的全部外部能力
///
/// 谁创建注册表，谁负责提供这组实现；测试用 Mock 替换其中任意一个。
#[derive(Clone)]
pub struct Platform {
    /// GPIO 子系统
    pub gpio: Arc<dyn GpioOps>,
    /// 设备号分配
    pub devno: Arc<dyn DevnoOps>,
    /// proc 端点
    pub proc: Arc<dyn ProcOps>,
}
