//! 外部协作方的 Mock 实现
//!
//! 注意：设备号分配和 proc 端点的 Mock 直接定义在 led crate 的
//! 集成测试里（孤儿规则要求实现方类型在测试 crate 本地）；
//! 这里只放多个 crate 共用的 GPIO Mock。

mod gpio;

pub use self::gpio::MockGpio;
