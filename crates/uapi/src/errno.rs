//! POSIX errno 常量
//!
//! 驱动错误类型通过 `to_errno()` 转换为这里定义的（正数）错误码，
//! 返回给调用方时取负。

/// 文件或设备不存在
pub const ENOENT: i32 = 2;
/// 被信号中断
pub const EINTR: i32 = 4;
/// I/O 错误
pub const EIO: i32 = 5;
/// 设备或地址不存在
pub const ENXIO: i32 = 6;
/// 内存不足
pub const ENOMEM: i32 = 12;
/// 设备或资源忙
pub const EBUSY: i32 = 16;
/// 设备不存在
pub const ENODEV: i32 = 19;
/// 无效参数
pub const EINVAL: i32 = 22;
