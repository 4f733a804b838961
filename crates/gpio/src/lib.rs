//! GPIO 能力接口
//!
//! 此 crate 把对物理 GPIO 子系统的依赖抽象成一个小的能力 trait：
//! 按线号申请、驱动电平、释放。驱动核心只持有 [`GpioOps`] 的
//! trait object，宿主环境（或测试里的 Mock 实现）提供具体实现，
//! 核心逻辑因此可以在宿主机上测试。
//!
//! 接口是显式传递的，不提供全局注册入口；谁创建驱动实例，
//! 谁负责把 GPIO 能力交给它。

#![no_std]

use bitflags::bitflags;

bitflags! {
    /// GPIO 申请标志
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct GpioFlags: u32 {
        /// 配置为输出并初始化为低电平
        const OUT_INIT_LOW = 1 << 0;
        /// 配置为输出并初始化为高电平
        const OUT_INIT_HIGH = 1 << 1;
    }
}

/// 逻辑电平
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// 低电平
    Low,
    /// 高电平
    High,
}

impl Level {
    /// 翻转电平。
    pub fn toggled(self) -> Self {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }

    /// 电平是否为高。
    pub fn is_high(self) -> bool {
        matches!(self, Level::High)
    }
}

/// 已申请到的 GPIO 线的不透明句柄
///
/// 由 [`GpioOps::request`] 发放，绑定成功后不再变化，
/// 直到通过 [`GpioOps::free`] 归还。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinHandle(u32);

impl PinHandle {
    /// 由实现方用原始线号构造句柄。
    pub const fn new(raw: u32) -> Self {
        PinHandle(raw)
    }

    /// 取出原始线号。
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// GPIO 操作错误
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioError {
    /// 线号无法申请（已被占用或不存在）
    NotAvailable,
    /// 句柄无效（未申请或已释放）
    InvalidHandle,
}

/// GPIO 操作
///
/// 此 trait 抽象了驱动需要的全部 GPIO 操作。
/// 实现必须允许多线程并发调用。
pub trait GpioOps: Send + Sync {
    /// 按线号申请一条 GPIO 线并按 flags 配置初始电平。
    fn request(&self, line: u32, flags: GpioFlags, label: &str) -> Result<PinHandle, GpioError>;

    /// 驱动输出电平。
    fn set_value(&self, pin: PinHandle, level: Level) -> Result<(), GpioError>;

    /// 归还一条 GPIO 线。
    fn free(&self, pin: PinHandle) -> Result<(), GpioError>;
}
