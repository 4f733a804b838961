//! 设备会话
//!
//! open 把设备身份解析成单元后得到的会话对象；read/write/ioctl
//! 都在该单元的锁内完成，锁在每条退出路径上释放（包括解析失败）。

use alloc::format;
use alloc::sync::Arc;
use core::cmp;

use sync::{CancelToken, SpinLock};
use uapi::ioctl::{LED_OFF, LED_ON, LED_TOGGLE};
use uapi::led::{LED_MAX_BRIGHTNESS, LED_WRITE_BUF_CAP};

use crate::dev::minor;
use crate::error::LedError;
use crate::parse::parse_uint;
use crate::unit::LedUnit;

/// 打开的设备会话
///
/// 持有对单元的引用直到关闭；会话自身的偏移量决定
/// 一次性读取契约（非零偏移的续读返回空）。
pub struct LedFile {
    unit: Arc<LedUnit>,
    cancel: Arc<CancelToken>,
    offset: SpinLock<usize>,
}

impl LedFile {
    pub(crate) fn new(unit: Arc<LedUnit>, cancel: Arc<CancelToken>) -> Self {
        LedFile {
            unit,
            cancel,
            offset: SpinLock::new(0),
        }
    }

    /// 此会话绑定单元的设备身份。
    pub fn dev(&self) -> u64 {
        self.unit.dev()
    }

    /// 读取当前亮度，十进制 ASCII 加换行。
    ///
    /// 状态在一次读取里整体交付；从非零偏移继续读返回 0 字节，
    /// 调用方不应期待分块续读。
    pub fn read(&self, buf: &mut [u8]) -> Result<usize, LedError> {
        let mut offset = self.offset.lock();
        if *offset > 0 {
            return Ok(0);
        }

        let brightness = {
            let guard = self.unit.lock_interruptible(&self.cancel)?;
            guard.brightness()
        };

        let text = format!("{}\n", brightness);
        let bytes = text.as_bytes();
        let count = cmp::min(buf.len(), bytes.len());
        buf[..count].copy_from_slice(&bytes[..count]);
        *offset += count;
        Ok(count)
    }

    /// 写入亮度文本。
    ///
    /// 输入截断到内部缓冲区容量减一（返回的已消费字节数按截断后计），
    /// 解析前导数字并收紧到亮度上限。解析失败采取宽容策略：
    /// 字节照常消费、亮度不变、记一条警告。
    pub fn write(&self, data: &[u8]) -> Result<usize, LedError> {
        let mut buf = [0u8; LED_WRITE_BUF_CAP];
        let len = cmp::min(data.len(), LED_WRITE_BUF_CAP - 1);
        buf[..len].copy_from_slice(&data[..len]);

        let mut guard = self.unit.lock_interruptible(&self.cancel)?;
        match parse_uint(&buf[..len]) {
            Some((value, _)) => {
                let clamped = cmp::min(value, LED_MAX_BRIGHTNESS as u64) as u8;
                guard.set_brightness(clamped)?;
            }
            None => {
                log::warn!(
                    "led{}: ignoring unparsable brightness input",
                    minor(self.unit.dev()),
                );
            }
        }
        Ok(len)
    }

    /// 执行 ioctl 命令。
    ///
    /// 未知命令返回 [`LedError::InvalidCommand`]，状态不变。
    pub fn ioctl(&self, cmd: u32) -> Result<(), LedError> {
        log::info!("led_ioctl()");

        let mut guard = self.unit.lock_interruptible(&self.cancel)?;
        match cmd {
            LED_ON => {
                guard.turn_on()?;
                log::info!("turn led on");
            }
            LED_OFF => {
                guard.turn_off()?;
                log::info!("turn led off");
                // 兼容性保留：熄灭命令同时落入翻转分支的日志（fall-through）
                log::info!("toggle led");
            }
            LED_TOGGLE => {
                guard.toggle()?;
                log::info!("toggle led");
            }
            _ => {
                log::error!("ioctl: no such command");
                return Err(LedError::InvalidCommand);
            }
        }
        Ok(())
    }

    /// 关闭会话，释放对单元的引用；不改变单元状态。
    pub fn close(self) {}
}
