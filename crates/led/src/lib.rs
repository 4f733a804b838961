//! 多设备 GPIO LED 字符驱动核心
//!
//! 在一段连续的设备号区段后面复用多个相互独立的 LED 设备：
//!
//! - [`LedUnit`] - 单个 LED 的状态（亮度）、每单元互斥锁和设备身份绑定
//! - [`LedRegistry`] - 固定数量单元的集合，负责批量初始化和严格逆序的卸载
//! - [`LedFile`] - 会话对象，把 open/read/write/ioctl 路由到解析出的单元
//! - [`StatusReporter`] - 只读的模块状态报告（proc 伪文件内容）
//!
//! # 外部协作方
//!
//! GPIO 子系统、设备号分配和 proc 端点都以能力 trait 的形式注入
//! （见 [`Platform`]），核心不持有任何环境全局量，可在宿主机上测试。
//!
//! # 并发契约
//!
//! 每个单元一把锁，任何亮度读写都在锁内进行；不同单元之间互不阻塞。
//! 等锁可被会话的取消信号打断，调用方收到 `Interrupted` 后应重试。

#![no_std]

extern crate alloc;

pub mod dev;
mod error;
mod file;
mod ops;
mod parse;
mod registry;
mod status;
mod unit;

pub use error::{InitError, LedError};
pub use file::LedFile;
pub use ops::{DevnoOps, Platform, ProcOps};
pub use registry::LedRegistry;
pub use status::{ContentGenerator, ProcFile, StatusReporter};
pub use unit::{LedUnit, UnitGuard};

/// 模块描述，原样出现在状态报告里
pub const MODULE_DESCRIPTION: &str = "Simple LED module example with procfs and IOCTL";

/// 模块版本
pub const MODULE_REVISION: &str = "0.1";

/// 模块作者
pub const MODULE_AUTHOR: &str = "Darije Hanzekovic";

/// 模块许可证
pub const MODULE_LICENCE: &str = "GPL";
