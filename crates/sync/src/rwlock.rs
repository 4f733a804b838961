//! 读写锁
//!
//! 基于 `lock_api` 的 [`lock_api::RwLock`] 封装：这里只实现底层的
//! [`lock_api::RawRwLock`]，保护器、毒化语义等由 `lock_api` 提供。
//!
//! 注册表用写锁作为卸载闸门：卸载方持写锁置位 closed 标志，
//! 会话打开方持读锁检查标志，两者互斥。

use core::hint;
use core::sync::atomic::{AtomicUsize, Ordering};

use lock_api::GuardSend;

/// 写者占用时的状态值；其余非零值为读者计数
const WRITER: usize = usize::MAX;

/// 自旋实现的底层读写锁
pub struct RawRwSpinLock {
    state: AtomicUsize,
}

unsafe impl lock_api::RawRwLock for RawRwSpinLock {
    const INIT: Self = RawRwSpinLock {
        state: AtomicUsize::new(0),
    };

    type GuardMarker = GuardSend;

    fn lock_shared(&self) {
        while !self.try_lock_shared() {
            hint::spin_loop();
        }
    }

    fn try_lock_shared(&self) -> bool {
        let cur = self.state.load(Ordering::Relaxed);
        if cur == WRITER {
            return false;
        }
        self.state
            .compare_exchange_weak(cur, cur + 1, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
    }

    unsafe fn unlock_shared(&self) {
        self.state.fetch_sub(1, Ordering::Release);
    }

    fn lock_exclusive(&self) {
        while !self.try_lock_exclusive() {
            hint::spin_loop();
        }
    }

    fn try_lock_exclusive(&self) -> bool {
        self.state
            .compare_exchange(0, WRITER, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
    }

    unsafe fn unlock_exclusive(&self) {
        self.state.store(0, Ordering::Release);
    }

    fn is_locked(&self) -> bool {
        self.state.load(Ordering::Relaxed) != 0
    }
}

/// 读写锁，写者独占，读者共享。
pub type RwLock<T> = lock_api::RwLock<RawRwSpinLock, T>;

/// 读保护器
pub type RwLockReadGuard<'a, T> = lock_api::RwLockReadGuard<'a, RawRwSpinLock, T>;

/// 写保护器
pub type RwLockWriteGuard<'a, T> = lock_api::RwLockWriteGuard<'a, RawRwSpinLock, T>;
