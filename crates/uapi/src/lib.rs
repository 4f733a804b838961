//! 与用户空间共用的定义和声明
//!
//! 包含 LED 驱动的 ioctl 命令码、errno 常量和模块级常量，
//! 确保内核侧和用户空间的一致性。

#![no_std]

pub mod errno;
pub mod ioctl;
pub mod led;
