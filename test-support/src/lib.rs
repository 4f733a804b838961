//! 测试支持 crate
//!
//! 提供 Mock 实现和测试工具：
//!
//! - [`MockGpio`] - 带故障注入和资源计数的 GPIO 能力 Mock
//! - [`CaptureLogger`] - 捕获 `log` 输出用于断言的日志实现

#![no_std]

extern crate alloc;

mod logger;
pub mod mock;

pub use logger::CaptureLogger;
pub use mock::MockGpio;
