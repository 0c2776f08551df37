//! Machine configuration: memory map, burst tuning and throttle policy.
//!
//! Every section has a default, so an empty TOML document yields the
//! standard 32K RAM / 32K ROM layout running unthrottled.

use std::ops::RangeInclusive;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::machine::Throttle;

/// Inclusive address range, `start..=end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRange {
    pub start: u16,
    pub end: u16,
}

impl AddressRange {
    pub const fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn contains(&self, addr: u16) -> bool {
        self.start <= addr && addr <= self.end
    }

    pub fn as_range(&self) -> RangeInclusive<u16> {
        self.start..=self.end
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    pub ram: AddressRange,
    pub rom: Option<AddressRange>,
}

impl MemoryConfig {
    /// The whole 64KB address space as RAM; used by test harnesses.
    pub const fn all_ram() -> Self {
        Self {
            ram: AddressRange::new(0x0000, 0xFFFF),
            rom: None,
        }
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            ram: AddressRange::new(0x0000, 0x7FFF),
            rom: Some(AddressRange::new(0x8000, 0xFFFF)),
        }
    }
}

/// Outer/inner op counts for burst runs. Only `startup` changes at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BurstConfig {
    pub startup: u32,
    pub min: u32,
    pub max: u32,
    pub inner: u32,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            startup: 100,
            min: 10,
            max: 10_000,
            inner: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrottleConfig {
    pub target_cycles_per_sec: u64,
    pub max_delay_ms: u64,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            target_cycles_per_sec: 1_000_000,
            max_delay_ms: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    pub memory: MemoryConfig,
    pub burst: BurstConfig,
    /// Absent means run as fast as the host allows.
    pub throttle: Option<ThrottleConfig>,
    /// Wall-clock budget for one `Machine::run` call; drives burst retuning.
    pub max_run_time_ms: u64,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            memory: MemoryConfig::default(),
            burst: BurstConfig::default(),
            throttle: None,
            max_run_time_ms: 100,
        }
    }
}

impl MachineConfig {
    pub fn throttle(&self) -> Throttle {
        match &self.throttle {
            None => Throttle::Unlimited,
            Some(cfg) => Throttle::SpeedLimited {
                target_cycles_per_sec: cfg.target_cycles_per_sec,
                max_delay: Duration::from_millis(cfg.max_delay_ms),
            },
        }
    }

    pub fn max_run_time(&self) -> Duration {
        Duration::from_millis(self.max_run_time_ms)
    }
}
