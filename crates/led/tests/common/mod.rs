//! led crate 集成测试共用的 Mock 协作方
//!
//! 设备号分配和 proc 端点的 Mock 定义在这里（实现方类型必须在
//! 测试 crate 本地）；GPIO Mock 复用 test-support。

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use std::vec::Vec;

use led::{ContentGenerator, DevnoOps, LedError, LedFile, LedRegistry, Platform, ProcOps};
use led::dev::makedev;
use sync::{CancelToken, SpinLock};
use test_support::MockGpio;

/// 测试用的固定 major 号
pub const TEST_MAJOR: u32 = 240;

#[derive(Default)]
struct DevnoInner {
    /// 未释放的区段 (base, count)
    regions: Vec<(u64, u32)>,
    /// 当前对外暴露的设备号
    devices: BTreeSet<u64>,
    /// 按时间顺序记录的 device_del
    del_history: Vec<u64>,
    fail_alloc: bool,
    fail_add: BTreeSet<u64>,
}

/// 设备号分配的 Mock 实现
#[derive(Default)]
pub struct MockDevno {
    inner: SpinLock<DevnoInner>,
}

impl MockDevno {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注入故障：区段预留失败。
    pub fn fail_alloc(&self) {
        self.inner.lock().fail_alloc = true;
    }

    /// 注入故障：指定设备号的暴露失败。
    pub fn fail_device_add(&self, dev: u64) {
        self.inner.lock().fail_add.insert(dev);
    }

    /// 未释放的区段数。
    pub fn outstanding_regions(&self) -> usize {
        self.inner.lock().regions.len()
    }

    /// 仍对外暴露的设备号数。
    pub fn outstanding_devices(&self) -> usize {
        self.inner.lock().devices.len()
    }

    /// device_del 的调用顺序。
    pub fn del_history(&self) -> Vec<u64> {
        self.inner.lock().del_history.clone()
    }
}

impl DevnoOps for MockDevno {
    fn alloc_region(&self, count: u32, _name: &str) -> Result<u64, LedError> {
        let mut inner = self.inner.lock();
        if inner.fail_alloc {
            return Err(LedError::Allocation);
        }
        let base = makedev(TEST_MAJOR, 0);
        inner.regions.push((base, count));
        Ok(base)
    }

    fn release_region(&self, base: u64, count: u32) {
        let mut inner = self.inner.lock();
        if let Some(pos) = inner.regions.iter().position(|r| *r == (base, count)) {
            inner.regions.remove(pos);
        }
    }

    fn device_add(&self, dev: u64) -> Result<(), LedError> {
        let mut inner = self.inner.lock();
        if inner.fail_add.contains(&dev) {
            return Err(LedError::Resource);
        }
        inner.devices.insert(dev);
        Ok(())
    }

    fn device_del(&self, dev: u64) {
        let mut inner = self.inner.lock();
        inner.devices.remove(&dev);
        inner.del_history.push(dev);
    }
}

#[derive(Default)]
struct ProcInner {
    published: BTreeMap<String, Arc<dyn ContentGenerator>>,
    fail_publish: bool,
}

/// proc 端点的 Mock 实现
#[derive(Default)]
pub struct MockProc {
    inner: SpinLock<ProcInner>,
}

impl MockProc {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注入故障：发布失败。
    pub fn fail_publish(&self) {
        self.inner.lock().fail_publish = true;
    }

    /// 当前仍发布着的端点数。
    pub fn outstanding(&self) -> usize {
        self.inner.lock().published.len()
    }

    /// 取出指定名字的生成器。
    pub fn generator(&self, name: &str) -> Option<Arc<dyn ContentGenerator>> {
        self.inner.lock().published.get(name).cloned()
    }
}

impl ProcOps for MockProc {
    fn publish(
        &self,
        name: &str,
        generator: Arc<dyn ContentGenerator>,
    ) -> Result<(), LedError> {
        let mut inner = self.inner.lock();
        if inner.fail_publish {
            return Err(LedError::Resource);
        }
        inner.published.insert(name.to_string(), generator);
        Ok(())
    }

    fn remove(&self, name: &str) {
        self.inner.lock().published.remove(name);
    }
}

/// 一组 Mock 协作方和由它们构成的 Platform
pub struct TestPlatform {
    pub gpio: Arc<MockGpio>,
    pub devno: Arc<MockDevno>,
    pub proc: Arc<MockProc>,
    pub platform: Platform,
}

/// 构造全套 Mock 协作方。
pub fn test_platform() -> TestPlatform {
    let gpio = Arc::new(MockGpio::new());
    let devno = Arc::new(MockDevno::new());
    let proc = Arc::new(MockProc::new());
    let platform = Platform {
        gpio: gpio.clone(),
        devno: devno.clone(),
        proc: proc.clone(),
    };
    TestPlatform {
        gpio,
        devno,
        proc,
        platform,
    }
}

/// 用新的取消令牌打开一个会话。
pub fn open(registry: &LedRegistry, dev: u64) -> LedFile {
    registry
        .open(dev, Arc::new(CancelToken::new()))
        .expect("open failed")
}
