//! 独立的闪烁定时器模块
//!
//! 单条 GPIO 线上的周期性翻转：状态机由宿主的定时器回调驱动
//! （每个周期调用一次 [`BlinkLed::tick`]），与注册表不共享任何状态。

#![no_std]

extern crate alloc;

use alloc::sync::Arc;

use gpio::{GpioError, GpioFlags, GpioOps, Level, PinHandle};

/// 默认使用的 GPIO 线号
pub const BLINK_LINE: u32 = 2;

/// 翻转周期，宿主定时器按此间隔调用 tick
pub const BLINK_PERIOD_MS: u64 = 1000;

/// 闪烁状态机
///
/// 启动时把线配置为低电平输出；每次 tick 驱动一个电平并翻转，
/// 因此首个 tick 点亮。
pub struct BlinkLed {
    gpio: Arc<dyn GpioOps>,
    pin: PinHandle,
    next: Level,
}

impl BlinkLed {
    /// 申请 GPIO 线并初始化状态机；线不可用时直接失败。
    pub fn start(gpio: Arc<dyn GpioOps>, line: u32) -> Result<Self, GpioError> {
        log::info!("blinkled driver init");
        let pin = gpio.request(line, GpioFlags::OUT_INIT_LOW, "led1")?;
        Ok(BlinkLed {
            gpio,
            pin,
            next: Level::High,
        })
    }

    /// 定时器回调：驱动当前电平并调度下一次的相反电平。
    pub fn tick(&mut self) -> Result<(), GpioError> {
        log::info!("blink_timer_func");
        self.gpio.set_value(self.pin, self.next)?;
        self.next = self.next.toggled();
        Ok(())
    }

    /// 停止闪烁：熄灭并归还 GPIO 线。
    ///
    /// 两步都是尽力而为，失败只记日志。
    pub fn stop(self) {
        log::info!("blinkled driver exit");
        if let Err(err) = self.gpio.set_value(self.pin, Level::Low) {
            log::warn!("blinkled: failed to drive low on exit: {:?}", err);
        }
        if let Err(err) = self.gpio.free(self.pin) {
            log::warn!("blinkled: gpio free failed: {:?}", err);
        }
    }
}
