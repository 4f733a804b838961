//! 同步原语
//!
//! 向驱动模块提供基本的锁和同步原语，包括自旋锁、读写锁和
//! 可中断的锁获取路径。
//!
//! # 可中断获取
//!
//! 阻塞等待锁的调用方必须能被外部取消信号打断：
//! [`SpinLock::lock_interruptible`] 在 [`CancelToken`] 置位后
//! 返回 [`Interrupted`]，调用方收到该结果后应当重试而不是无限等待。

#![no_std]

mod cancel;
mod raw_spin_lock;
mod rwlock;
mod spin_lock;

pub use cancel::{CancelToken, Interrupted};
pub use raw_spin_lock::*;
pub use rwlock::{RawRwSpinLock, RwLock, RwLockReadGuard, RwLockWriteGuard};
pub use spin_lock::*;
