//! 驱动错误类型
//!
//! 各错误种类可通过 [`LedError::to_errno()`] 转换为系统调用错误码。
//! 传播策略：初始化/卸载路径的错误在返回前完成全部回滚（不泄漏资源）；
//! 单元操作的错误不影响其它单元；日志永远是尽力而为，不构成错误来源。

use sync::Interrupted;
use uapi::errno;

/// 驱动错误类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    /// 设备号区段不可用，初始化失败且不留部分状态 (-EBUSY)
    Allocation,
    /// GPIO 线或存储分配不可用，触发有序回滚 (-ENOMEM)
    Resource,
    /// 未知的 ioctl 命令，状态不变 (-EINVAL)
    InvalidCommand,
    /// 写入文本无法解析为数字 (-EINVAL)
    ///
    /// 写路径本身采取宽容策略（接受字节、忽略语义、记一条警告），
    /// 该变体只在需要显式报告解析失败的场合使用。
    Parse,
    /// 设备身份超出有效范围，或注册表已开始卸载 (-ENOENT)
    ///
    /// 属于调用方用法错误，内部不重试。
    NotFound,
    /// 等锁被取消信号打断，调用方应重试 (-EINTR)
    Interrupted,
}

impl LedError {
    /// 转换为系统调用错误码（负数）。
    pub fn to_errno(&self) -> i32 {
        match self {
            LedError::Allocation => -errno::EBUSY,
            LedError::Resource => -errno::ENOMEM,
            LedError::InvalidCommand => -errno::EINVAL,
            LedError::Parse => -errno::EINVAL,
            LedError::NotFound => -errno::ENOENT,
            LedError::Interrupted => -errno::EINTR,
        }
    }
}

impl From<Interrupted> for LedError {
    fn from(_: Interrupted) -> Self {
        LedError::Interrupted
    }
}

impl From<gpio::GpioError> for LedError {
    fn from(_: gpio::GpioError) -> Self {
        LedError::Resource
    }
}

/// 初始化失败
///
/// 携带出错的槽位（协作方级别的失败没有槽位）和底层原因。
/// 返回此错误时所有已绑定的资源都已按严格逆序回滚完毕。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitError {
    /// 绑定失败的槽位；设备号区段或 proc 端点失败时为 None
    pub slot: Option<usize>,
    /// 底层原因
    pub cause: LedError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errno_mapping() {
        assert_eq!(LedError::Allocation.to_errno(), -16);
        assert_eq!(LedError::Resource.to_errno(), -12);
        assert_eq!(LedError::InvalidCommand.to_errno(), -22);
        assert_eq!(LedError::Parse.to_errno(), -22);
        assert_eq!(LedError::NotFound.to_errno(), -2);
        assert_eq!(LedError::Interrupted.to_errno(), -4);
    }

    #[test]
    fn interrupted_conversion() {
        assert_eq!(LedError::from(Interrupted), LedError::Interrupted);
    }
}
