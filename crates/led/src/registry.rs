//! LED 单元注册表
//!
//! 拥有全部单元和它们占用的设备号区段，负责批量初始化和卸载。
//! 初始化是全有或全无的：任何一步失败都按与获取相反的顺序
//! 回滚已持有的资源，对外不留下可达的半绑定单元。

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use sync::{CancelToken, RwLock};
use uapi::led::LED_MODULE_NAME;

use crate::dev::{major, minor};
use crate::error::{InitError, LedError};
use crate::file::LedFile;
use crate::ops::Platform;
use crate::status::{ContentGenerator, StatusReporter};
use crate::unit::LedUnit;

/// 固定数量 LED 单元的注册表
///
/// `units[i]` 对应设备号 `base + i`。生命周期与驱动加载一致：
/// 加载时创建一次，卸载时销毁一次，单元没有独立的生命周期。
pub struct LedRegistry {
    units: Vec<Arc<LedUnit>>,
    base: u64,
    reporter: Arc<StatusReporter>,
    platform: Platform,
    /// 卸载闸门：置位后不再接受新会话
    closed: RwLock<bool>,
}

impl core::fmt::Debug for LedRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LedRegistry")
            .field("base", &self.base)
            .field("units", &self.units.len())
            .finish_non_exhaustive()
    }
}

impl LedRegistry {
    /// 批量初始化 `count` 个单元。
    ///
    /// 获取顺序：设备号区段 → 单元存储 → 逐槽位升序绑定
    /// （GPIO 线 + 设备身份）→ proc 端点。任何一步失败都按
    /// 严格降序回滚已绑定的槽位，并释放区段和存储，
    /// 返回携带出错槽位和底层原因的 [`InitError`]。
    pub fn initialize(count: usize, platform: Platform) -> Result<LedRegistry, InitError> {
        let base = platform
            .devno
            .alloc_region(count as u32, LED_MODULE_NAME)
            .map_err(|cause| InitError { slot: None, cause })?;

        let mut units: Vec<Arc<LedUnit>> = Vec::new();
        if units.try_reserve_exact(count).is_err() {
            platform.devno.release_region(base, count as u32);
            return Err(InitError {
                slot: None,
                cause: LedError::Resource,
            });
        }

        for slot in 0..count {
            let dev = base + slot as u64;
            match Self::bind_slot(&platform, slot, dev) {
                Ok(unit) => units.push(unit),
                Err(cause) => {
                    Self::unwind_units(&platform, &mut units);
                    platform.devno.release_region(base, count as u32);
                    return Err(InitError {
                        slot: Some(slot),
                        cause,
                    });
                }
            }
        }

        let reporter = Arc::new(StatusReporter::new(major(base)));
        let generator: Arc<dyn ContentGenerator> = reporter.clone();
        if let Err(cause) = platform.proc.publish(LED_MODULE_NAME, generator) {
            Self::unwind_units(&platform, &mut units);
            platform.devno.release_region(base, count as u32);
            return Err(InitError { slot: None, cause });
        }

        log::info!("led module installed, major {}", major(base));
        Ok(LedRegistry {
            units,
            base,
            reporter,
            platform,
            closed: RwLock::new(false),
        })
    }

    /// 绑定单个槽位：先 GPIO 线，再设备身份。
    ///
    /// 设备身份绑定失败时就地解绑刚申请的线，不把半绑定单元交给调用方。
    fn bind_slot(platform: &Platform, slot: usize, dev: u64) -> Result<Arc<LedUnit>, LedError> {
        let unit = LedUnit::bind(platform.gpio.clone(), slot as u32, dev)?;
        if let Err(cause) = platform.devno.device_add(dev) {
            unit.unbind();
            return Err(cause);
        }
        Ok(unit)
    }

    /// 按严格降序解绑已绑定的单元。
    fn unwind_units(platform: &Platform, units: &mut Vec<Arc<LedUnit>>) {
        while let Some(unit) = units.pop() {
            platform.devno.device_del(unit.dev());
            unit.unbind();
        }
    }

    /// 卸载：关闭闸门，按与初始化相反的顺序释放一切。
    ///
    /// 可安全地与在途会话并发：闸门置位后新的 open 一律失败，
    /// 已打开的会话只触碰各自单元的锁。重复调用是空操作。
    pub fn teardown(&self) {
        {
            let mut closed = self.closed.write();
            if *closed {
                return;
            }
            *closed = true;
        }

        self.platform.proc.remove(LED_MODULE_NAME);
        for unit in self.units.iter().rev() {
            self.platform.devno.device_del(unit.dev());
            unit.unbind();
        }
        self.platform
            .devno
            .release_region(self.base, self.units.len() as u32);
        log::info!("led module uninstalled");
    }

    /// 把外部给出的设备身份映射到其所属单元。
    ///
    /// 超出区段时返回 None——调用方应视为用法错误，不重试。
    pub fn resolve(&self, dev: u64) -> Option<Arc<LedUnit>> {
        if major(dev) != major(self.base) {
            return None;
        }
        let idx = minor(dev).checked_sub(minor(self.base))? as usize;
        self.units.get(idx).cloned()
    }

    /// 打开一个会话。
    ///
    /// 在闸门的读保护下解析设备身份；注册表已开始卸载或身份
    /// 超出范围时返回 [`LedError::NotFound`]。
    pub fn open(&self, dev: u64, cancel: Arc<CancelToken>) -> Result<LedFile, LedError> {
        let closed = self.closed.read();
        if *closed {
            return Err(LedError::NotFound);
        }
        let unit = self.resolve(dev).ok_or(LedError::NotFound)?;
        Ok(LedFile::new(unit, cancel))
    }

    /// 已分配区段的首个设备号。
    pub fn base(&self) -> u64 {
        self.base
    }

    /// 受管理的单元数。
    pub fn count(&self) -> usize {
        self.units.len()
    }

    /// 渲染当前状态报告。
    pub fn status(&self) -> Result<String, LedError> {
        let bytes = self.reporter.generate()?;
        // 报告由本模块渲染，必然是合法的 UTF-8
        String::from_utf8(bytes).map_err(|_| LedError::Resource)
    }
}
