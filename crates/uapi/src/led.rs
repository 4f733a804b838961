//! LED 模块常量

/// 模块名，同时用作 proc 条目名和 GPIO 申请时的标签
pub const LED_MODULE_NAME: &str = "led";

/// 受管理的 LED 设备数量，对应连续的 minor 号 0..LED_COUNT
pub const LED_COUNT: usize = 3;

/// 写路径的内部缓冲区容量（含结尾终止字节）
///
/// 超长输入会被截断到 `LED_WRITE_BUF_CAP - 1` 字节，
/// 返回的已消费字节数按截断后长度计算。
pub const LED_WRITE_BUF_CAP: usize = 64;

/// 亮度上限；写入值超过上限时按上限收紧
pub const LED_MAX_BRIGHTNESS: u8 = 255;
