//! 捕获式日志实现
//!
//! 把 `log` 门面的输出捕获到内存里，供测试断言
//! （例如"解析失败必须产生一条警告"）。

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use log::{Level, LevelFilter, Log, Metadata, Record};
use sync::SpinLock;

/// 捕获 `log` 输出的日志实现
pub struct CaptureLogger {
    records: SpinLock<Vec<(Level, String)>>,
}

static CAPTURE_LOGGER: CaptureLogger = CaptureLogger {
    records: SpinLock::new(Vec::new()),
};

impl CaptureLogger {
    /// 把捕获器安装为全局 logger 并返回它。
    ///
    /// `log::set_logger` 每个进程只会成功一次；重复调用安全，
    /// 后续调用只返回已安装的实例。
    pub fn install() -> &'static CaptureLogger {
        let _ = log::set_logger(&CAPTURE_LOGGER);
        log::set_max_level(LevelFilter::Trace);
        &CAPTURE_LOGGER
    }

    /// 清空已捕获的记录。
    pub fn clear(&self) {
        self.records.lock().clear();
    }

    /// 取出所有已捕获的记录。
    pub fn take(&self) -> Vec<(Level, String)> {
        core::mem::take(&mut *self.records.lock())
    }

    /// 是否捕获到指定级别且包含指定子串的记录。
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.records
            .lock()
            .iter()
            .any(|(l, msg)| *l == level && msg.contains(needle))
    }
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        self.records
            .lock()
            .push((record.level(), format!("{}", record.args())));
    }

    fn flush(&self) {}
}
