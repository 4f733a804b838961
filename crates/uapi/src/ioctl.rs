//! LED 设备的 ioctl 命令码
//!
//! 命令码是稳定的 ABI，用户空间程序按数值调用，不可改动。

/// 点亮 LED（亮度置为最大值）
pub const LED_ON: u32 = 1;
/// 熄灭 LED（亮度置零）
pub const LED_OFF: u32 = 2;
/// 翻转 LED 当前状态
pub const LED_TOGGLE: u32 = 3;
