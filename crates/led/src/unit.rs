//! 单个 LED 设备单元
//!
//! 一个单元对应一条 GPIO 线、一个设备身份和一把互斥锁。
//! 亮度只能通过 [`UnitGuard`] 访问，"必须持锁"的不变量由类型系统保证。

use alloc::sync::Arc;

use gpio::{GpioFlags, GpioOps, Level, PinHandle};
use sync::{CancelToken, SpinLock, SpinLockGuard};
use uapi::led::{LED_MAX_BRIGHTNESS, LED_MODULE_NAME};

use crate::dev::minor;
use crate::error::LedError;

/// 锁保护下的可变状态
struct LedState {
    brightness: u8,
}

/// 单个 LED 的控制状态
///
/// `pin` 在绑定成功时设置一次，直到解绑前始终有效。
pub struct LedUnit {
    pin: PinHandle,
    dev: u64,
    gpio: Arc<dyn GpioOps>,
    state: SpinLock<LedState>,
}

impl LedUnit {
    /// 一次性绑定：申请 GPIO 线并记录设备身份。
    ///
    /// 线申请失败返回 [`LedError::Resource`]，不留任何状态。
    pub(crate) fn bind(
        gpio: Arc<dyn GpioOps>,
        line: u32,
        dev: u64,
    ) -> Result<Arc<LedUnit>, LedError> {
        let pin = gpio
            .request(line, GpioFlags::OUT_INIT_LOW, LED_MODULE_NAME)
            .map_err(|_| LedError::Resource)?;
        Ok(Arc::new(LedUnit {
            pin,
            dev,
            gpio,
            state: SpinLock::new(LedState { brightness: 0 }),
        }))
    }

    /// 归还 GPIO 线。
    ///
    /// 只在绑定成功的单元上调用。引脚释放是尽力而为：
    /// 外部早已让引脚失效时只记日志，不向上传播。
    pub(crate) fn unbind(&self) {
        if let Err(err) = self.gpio.free(self.pin) {
            log::warn!("led{}: gpio free failed: {:?}", minor(self.dev), err);
        }
    }

    /// 此单元的设备身份。
    pub fn dev(&self) -> u64 {
        self.dev
    }

    /// 获取单元锁。
    pub fn lock(&self) -> UnitGuard<'_> {
        UnitGuard {
            unit: self,
            state: self.state.lock(),
        }
    }

    /// 可中断地获取单元锁。
    ///
    /// 取消信号置位时返回 [`LedError::Interrupted`]，调用方应重试。
    pub fn lock_interruptible(&self, cancel: &CancelToken) -> Result<UnitGuard<'_>, LedError> {
        let state = self.state.lock_interruptible(cancel)?;
        Ok(UnitGuard { unit: self, state })
    }
}

/// 单元锁的 RAII 保护器
///
/// 所有亮度读写都经由此类型，保证"持锁访问"的不变量。
pub struct UnitGuard<'a> {
    unit: &'a LedUnit,
    state: SpinLockGuard<'a, LedState>,
}

impl UnitGuard<'_> {
    /// 当前存储的亮度。
    pub fn brightness(&self) -> u8 {
        self.state.brightness
    }

    /// 存储亮度并驱动二值物理电平：亮度大于零输出高电平，否则低电平。
    ///
    /// 物理输出没有模拟分量，即使输入是一个字节。
    /// 引脚句柄失效时返回 [`LedError::Resource`]，亮度保持不变。
    pub fn set_brightness(&mut self, value: u8) -> Result<(), LedError> {
        let level = if value > 0 { Level::High } else { Level::Low };
        self.unit.gpio.set_value(self.unit.pin, level)?;
        self.state.brightness = value;
        Ok(())
    }

    /// 点亮：亮度置为最大值。
    pub fn turn_on(&mut self) -> Result<(), LedError> {
        self.set_brightness(LED_MAX_BRIGHTNESS)
    }

    /// 熄灭：亮度置零。
    pub fn turn_off(&mut self) -> Result<(), LedError> {
        self.set_brightness(0)
    }

    /// 翻转：亮着则熄灭，灭着则点到最大值。
    pub fn toggle(&mut self) -> Result<(), LedError> {
        if self.state.brightness > 0 {
            self.set_brightness(0)
        } else {
            self.set_brightness(LED_MAX_BRIGHTNESS)
        }
    }
}
