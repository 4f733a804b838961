//! GPIO 能力的 Mock 实现
//!
//! 记录每次申请/释放，支持按线号注入申请失败和驱动失败，
//! 用于验证回滚完整性（申请-释放净额必须归零）。

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;

use gpio::{GpioError, GpioFlags, GpioOps, Level, PinHandle};
use sync::SpinLock;

#[derive(Default)]
struct MockGpioInner {
    /// 当前被占用的线号及其电平
    active: BTreeMap<u32, Level>,
    /// 按时间顺序记录的申请线号
    requested: Vec<u32>,
    /// 按时间顺序记录的释放线号
    freed: Vec<u32>,
    /// 申请这些线号时返回失败
    fail_request: BTreeSet<u32>,
    /// 对这些线号的 set_value 返回失败
    fail_set: BTreeSet<u32>,
}

/// GPIO 能力的 Mock 实现
#[derive(Default)]
pub struct MockGpio {
    inner: SpinLock<MockGpioInner>,
}

impl MockGpio {
    /// 创建空的 Mock。
    pub fn new() -> Self {
        Self::default()
    }

    /// 注入故障：申请指定线号时失败。
    pub fn fail_request_on(&self, line: u32) {
        self.inner.lock().fail_request.insert(line);
    }

    /// 注入故障：驱动指定线号的电平时失败。
    pub fn fail_set_on(&self, line: u32) {
        self.inner.lock().fail_set.insert(line);
    }

    /// 当前仍被占用的线数。
    pub fn outstanding(&self) -> usize {
        self.inner.lock().active.len()
    }

    /// 读取某条线当前的电平；未占用时返回 None。
    pub fn level(&self, line: u32) -> Option<Level> {
        self.inner.lock().active.get(&line).copied()
    }

    /// 申请历史（按时间顺序的线号）。
    pub fn request_history(&self) -> Vec<u32> {
        self.inner.lock().requested.clone()
    }

    /// 释放历史（按时间顺序的线号）。
    pub fn free_history(&self) -> Vec<u32> {
        self.inner.lock().freed.clone()
    }
}

impl GpioOps for MockGpio {
    fn request(&self, line: u32, flags: GpioFlags, _label: &str) -> Result<PinHandle, GpioError> {
        let mut inner = self.inner.lock();
        if inner.fail_request.contains(&line) || inner.active.contains_key(&line) {
            return Err(GpioError::NotAvailable);
        }
        let level = if flags.contains(GpioFlags::OUT_INIT_HIGH) {
            Level::High
        } else {
            Level::Low
        };
        inner.active.insert(line, level);
        inner.requested.push(line);
        Ok(PinHandle::new(line))
    }

    fn set_value(&self, pin: PinHandle, level: Level) -> Result<(), GpioError> {
        let mut inner = self.inner.lock();
        if inner.fail_set.contains(&pin.raw()) {
            return Err(GpioError::InvalidHandle);
        }
        match inner.active.get_mut(&pin.raw()) {
            Some(slot) => {
                *slot = level;
                Ok(())
            }
            None => Err(GpioError::InvalidHandle),
        }
    }

    fn free(&self, pin: PinHandle) -> Result<(), GpioError> {
        let mut inner = self.inner.lock();
        match inner.active.remove(&pin.raw()) {
            Some(_) => {
                inner.freed.push(pin.raw());
                Ok(())
            }
            None => Err(GpioError::InvalidHandle),
        }
    }
}
