//! 日志输出断言
//!
//! 全局 logger 是进程级单例，且捕获缓冲会被并行测试互相污染，
//! 所以全部日志断言集中在一个测试函数里。

mod common;

use common::{open, test_platform};
use led::LedRegistry;
use log::Level;
use test_support::CaptureLogger;
use uapi::ioctl::LED_OFF;

#[test]
fn test_log_lines_for_write_and_ioctl_paths() {
    let logger = CaptureLogger::install();
    let env = test_platform();
    let registry = LedRegistry::initialize(3, env.platform.clone()).unwrap();

    logger.clear();
    open(&registry, registry.base()).write(b"garbage").unwrap();
    assert!(logger.contains(Level::Warn, "ignoring unparsable brightness input"));

    logger.clear();
    let file = open(&registry, registry.base());
    file.ioctl(LED_OFF).unwrap();
    let records = logger.take();
    let has = |needle: &str| {
        records
            .iter()
            .any(|(l, msg)| *l == Level::Info && msg.contains(needle))
    };
    assert!(has("led_ioctl()"));
    assert!(has("turn led off"));
    // 熄灭命令的历史行为：同时落下翻转分支的那条日志
    assert!(has("toggle led"));

    registry.teardown();
    assert!(logger.contains(Level::Info, "led module uninstalled"));
}
