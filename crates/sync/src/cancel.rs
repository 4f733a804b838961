//! 取消信号
//!
//! 模拟"等锁的任务收到信号"这一场景：持有 [`CancelToken`] 的一方
//! 调用 [`CancelToken::cancel`] 后，正在可中断路径上等锁的一方会
//! 得到 [`Interrupted`] 并放弃等待。

use core::sync::atomic::{AtomicBool, Ordering};

/// 外部取消信号
///
/// 一个令牌对应一个会话；置位是单向的，可通过 [`CancelToken::clear`]
/// 在测试中复位。
#[derive(Debug)]
pub struct CancelToken {
    flag: AtomicBool,
}

impl CancelToken {
    /// 创建未置位的取消令牌。
    pub const fn new() -> Self {
        CancelToken {
            flag: AtomicBool::new(false),
        }
    }

    /// 置位取消信号。
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// 检查取消信号是否已置位。
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    /// 复位取消信号。
    pub fn clear(&self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

/// 可中断的锁获取被取消信号打断
///
/// 不代表锁状态发生过变化，调用方应当重试。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interrupted;
