mod common;

use std::sync::Arc;
use std::thread;

use common::{open, test_platform};
use gpio::Level;
use led::{LedError, LedRegistry};
use sync::CancelToken;
use uapi::ioctl::{LED_OFF, LED_ON, LED_TOGGLE};

fn read_to_string(registry: &LedRegistry, dev: u64) -> String {
    let file = open(registry, dev);
    let mut buf = [0u8; 16];
    let count = file.read(&mut buf).unwrap();
    String::from_utf8(buf[..count].to_vec()).unwrap()
}

#[test]
fn test_write_then_read_roundtrip() {
    let env = test_platform();
    let registry = LedRegistry::initialize(3, env.platform.clone()).unwrap();
    let base = registry.base();

    for value in [0u32, 1, 7, 128, 255] {
        let text = value.to_string();
        let file = open(&registry, base);
        assert_eq!(file.write(text.as_bytes()).unwrap(), text.len());
        assert_eq!(read_to_string(&registry, base), format!("{}\n", value));
    }
    registry.teardown();
}

#[test]
fn test_read_is_one_shot() {
    let env = test_platform();
    let registry = LedRegistry::initialize(3, env.platform.clone()).unwrap();
    let base = registry.base();

    open(&registry, base).write(b"7").unwrap();

    let file = open(&registry, base);
    let mut buf = [0u8; 16];
    assert_eq!(file.read(&mut buf).unwrap(), 2);
    assert_eq!(&buf[..2], b"7\n");
    // 位置已前移，续读得到 0 字节
    assert_eq!(file.read(&mut buf).unwrap(), 0);
    registry.teardown();
}

#[test]
fn test_write_garbage_leaves_brightness_unchanged() {
    let env = test_platform();
    let registry = LedRegistry::initialize(3, env.platform.clone()).unwrap();
    let base = registry.base();

    open(&registry, base).write(b"7").unwrap();

    // 宽容策略：字节照常消费，亮度不变
    let file = open(&registry, base);
    assert_eq!(file.write(b"garbage").unwrap(), 7);
    assert_eq!(read_to_string(&registry, base), "7\n");
    registry.teardown();
}

#[test]
fn test_write_base_autodetection() {
    let env = test_platform();
    let registry = LedRegistry::initialize(3, env.platform.clone()).unwrap();
    let base = registry.base();

    open(&registry, base).write(b"0x1A").unwrap();
    assert_eq!(read_to_string(&registry, base), "26\n");

    open(&registry, base).write(b"010").unwrap();
    assert_eq!(read_to_string(&registry, base), "8\n");

    open(&registry, base).write(b"42 trailing junk").unwrap();
    assert_eq!(read_to_string(&registry, base), "42\n");
    registry.teardown();
}

#[test]
fn test_write_clamps_to_max_brightness() {
    let env = test_platform();
    let registry = LedRegistry::initialize(3, env.platform.clone()).unwrap();
    let base = registry.base();

    open(&registry, base).write(b"300").unwrap();
    assert_eq!(read_to_string(&registry, base), "255\n");
    registry.teardown();
}

#[test]
fn test_write_truncates_to_buffer_capacity() {
    let env = test_platform();
    let registry = LedRegistry::initialize(3, env.platform.clone()).unwrap();
    let base = registry.base();

    // 100 字节输入截断到 63，消费数按截断后长度报告
    let input = [b'1'; 100];
    let file = open(&registry, base);
    assert_eq!(file.write(&input).unwrap(), 63);
    assert_eq!(read_to_string(&registry, base), "255\n");
    registry.teardown();
}

#[test]
fn test_gpio_level_is_binary() {
    let env = test_platform();
    let registry = LedRegistry::initialize(3, env.platform.clone()).unwrap();
    let base = registry.base();

    open(&registry, base).write(b"128").unwrap();
    assert_eq!(env.gpio.level(0), Some(Level::High));

    open(&registry, base).write(b"1").unwrap();
    assert_eq!(env.gpio.level(0), Some(Level::High));

    open(&registry, base).write(b"0").unwrap();
    assert_eq!(env.gpio.level(0), Some(Level::Low));
    registry.teardown();
}

#[test]
fn test_write_propagates_pin_failure() {
    let env = test_platform();
    let registry = LedRegistry::initialize(3, env.platform.clone()).unwrap();
    let base = registry.base();
    env.gpio.fail_set_on(1);

    // 引脚驱动失败向上传播，亮度保持不变
    let file = open(&registry, base + 1);
    assert_eq!(file.write(b"9"), Err(LedError::Resource));
    assert_eq!(read_to_string(&registry, base + 1), "0\n");
    registry.teardown();
}

#[test]
fn test_session_reports_device_identity() {
    let env = test_platform();
    let registry = LedRegistry::initialize(3, env.platform.clone()).unwrap();
    let base = registry.base();

    assert_eq!(open(&registry, base + 2).dev(), base + 2);
    registry.teardown();
}

#[test]
fn test_ioctl_command_set() {
    let env = test_platform();
    let registry = LedRegistry::initialize(3, env.platform.clone()).unwrap();
    let base = registry.base();

    let file = open(&registry, base);
    file.ioctl(LED_ON).unwrap();
    assert_eq!(read_to_string(&registry, base), "255\n");
    assert_eq!(env.gpio.level(0), Some(Level::High));

    file.ioctl(LED_OFF).unwrap();
    assert_eq!(read_to_string(&registry, base), "0\n");
    assert_eq!(env.gpio.level(0), Some(Level::Low));

    file.ioctl(LED_TOGGLE).unwrap();
    assert_eq!(read_to_string(&registry, base), "255\n");
    file.ioctl(LED_TOGGLE).unwrap();
    assert_eq!(read_to_string(&registry, base), "0\n");
    registry.teardown();
}

#[test]
fn test_ioctl_unknown_command_rejected() {
    let env = test_platform();
    let registry = LedRegistry::initialize(3, env.platform.clone()).unwrap();
    let base = registry.base();

    open(&registry, base).write(b"7").unwrap();

    let file = open(&registry, base);
    assert_eq!(file.ioctl(99), Err(LedError::InvalidCommand));
    assert_eq!(read_to_string(&registry, base), "7\n");
    registry.teardown();
}

#[test]
fn test_operations_on_distinct_units_do_not_block() {
    let env = test_platform();
    let registry = Arc::new(LedRegistry::initialize(3, env.platform.clone()).unwrap());
    let base = registry.base();

    // 长期持有单元 1 的锁
    let unit1 = registry.resolve(base + 1).unwrap();
    let held = unit1.lock();

    // 单元 0 上的写操作必须在单元 1 的锁被占用时照常完成
    let worker = {
        let registry = registry.clone();
        thread::spawn(move || {
            let file = registry
                .open(base, Arc::new(CancelToken::new()))
                .unwrap();
            file.write(b"5").unwrap()
        })
    };
    assert_eq!(worker.join().unwrap(), 1);
    drop(held);

    assert_eq!(read_to_string(&registry, base), "5\n");
    registry.teardown();
}

#[test]
fn test_write_interrupted_while_lock_held() {
    let env = test_platform();
    let registry = LedRegistry::initialize(3, env.platform.clone()).unwrap();
    let base = registry.base();

    let cancel = Arc::new(CancelToken::new());
    let file = registry.open(base, cancel.clone()).unwrap();

    let unit = registry.resolve(base).unwrap();
    let held = unit.lock();

    // 锁被占用且取消信号置位：返回 Interrupted，状态不变
    cancel.cancel();
    assert_eq!(file.write(b"9"), Err(LedError::Interrupted));
    drop(held);

    cancel.clear();
    assert_eq!(read_to_string(&registry, base), "0\n");
    registry.teardown();
}

#[test]
fn test_close_releases_reference_only() {
    let env = test_platform();
    let registry = LedRegistry::initialize(3, env.platform.clone()).unwrap();
    let base = registry.base();

    let file = open(&registry, base);
    file.write(b"3").unwrap();
    file.close();

    // 关闭会话不改变单元状态
    assert_eq!(read_to_string(&registry, base), "3\n");
    registry.teardown();
}
