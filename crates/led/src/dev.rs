//! 设备号编解码
//!
//! 设备号把 major（驱动类别）和 minor（同类下的具体设备）打包进
//! 一个 64 位整数；minor 占低 20 位。注册表按 `base + slot` 的
//! 连续 minor 区段寻址各单元。

/// minor 号占用的位数
pub const MINORBITS: u32 = 20;

const MINORMASK: u64 = (1 << MINORBITS) - 1;

/// 由 major/minor 组合出设备号。
pub const fn makedev(major: u32, minor: u32) -> u64 {
    ((major as u64) << MINORBITS) | (minor as u64 & MINORMASK)
}

/// 取出设备号的 major 部分。
pub const fn major(dev: u64) -> u32 {
    (dev >> MINORBITS) as u32
}

/// 取出设备号的 minor 部分。
pub const fn minor(dev: u64) -> u32 {
    (dev & MINORMASK) as u32
}
