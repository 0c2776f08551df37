//! Execution driver.
//!
//! A [`Machine`] owns a CPU and its bus and runs the CPU in bursts of
//! `outer × inner` steps. Sync callbacks are checked after every inner
//! loop. After each burst the outer count is retuned so that one `run`
//! call takes roughly `max_run_time` of wall-clock time, and an optional
//! [`Throttle`] sleeps to hold a target clock rate.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use log::{error, info};
use serde::{Deserialize, Serialize};

use super::bus::Bus;
use super::config::MachineConfig;
use super::memory::Memory;
use crate::cpu::{Cpu, CpuError, CpuStateTrait, M6809, M6809State};

/// Host speed policy applied between bursts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Throttle {
    Unlimited,
    SpeedLimited {
        target_cycles_per_sec: u64,
        /// Upper bound for a single sleep
        max_delay: Duration,
    },
}

impl Throttle {
    /// Sleep needed after a burst that executed `cycles` in `elapsed`.
    pub fn delay_for(&self, cycles: u64, elapsed: Duration) -> Duration {
        match *self {
            Throttle::Unlimited => Duration::ZERO,
            Throttle::SpeedLimited {
                target_cycles_per_sec,
                max_delay,
            } => {
                if target_cycles_per_sec == 0 {
                    return Duration::ZERO;
                }
                let should_take =
                    Duration::from_secs_f64(cycles as f64 / target_cycles_per_sec as f64);
                should_take.saturating_sub(elapsed).min(max_delay)
            }
        }
    }
}

/// Clonable stop switch for a running [`Machine`]. Checked at burst
/// boundaries, so it can be used from a sync callback or another thread.
#[derive(Debug, Clone)]
pub struct QuitHandle {
    running: Arc<AtomicBool>,
}

impl QuitHandle {
    pub fn quit(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

struct SyncCallback {
    interval: u64,
    last_call: u64,
    callback: Box<dyn FnMut(u64)>,
}

/// Serializable machine snapshot: CPU registers plus the 64KB image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineState {
    pub cpu: M6809State,
    pub ram: Vec<u8>,
}

/// New outer burst count, aiming for `target` seconds per run given the
/// last run took `trigger` seconds with `value` bursts.
///
/// A zero trigger (run too fast to measure) doubles the count.
pub fn calc_new_count(min: u32, value: u32, max: u32, trigger: f64, target: f64) -> u32 {
    if trigger <= 0.0 {
        return value.saturating_mul(2).min(max);
    }
    let new = value as f64 / trigger * target;
    if new > max as f64 {
        return max;
    }
    let new = new as u32;
    min.max(((value as u64 + new as u64) / 2) as u32)
}

pub struct Machine<B: Bus> {
    pub cpu: M6809,
    pub bus: B,

    outer_burst_count: u32,
    inner_burst_count: u32,
    min_burst_count: u32,
    max_burst_count: u32,
    max_run_time: Duration,

    throttle: Throttle,
    /// Sleep applied after the last burst
    delay: Duration,

    sync_callbacks: Vec<SyncCallback>,
    running: Arc<AtomicBool>,
}

impl<B: Bus> Machine<B> {
    pub fn new(bus: B) -> Self {
        Self::from_config(bus, &MachineConfig::default())
    }

    pub fn from_config(bus: B, config: &MachineConfig) -> Self {
        Self {
            cpu: M6809::new(),
            bus,
            outer_burst_count: config.burst.startup,
            inner_burst_count: config.burst.inner,
            min_burst_count: config.burst.min,
            max_burst_count: config.burst.max,
            max_run_time: config.max_run_time(),
            throttle: config.throttle(),
            delay: Duration::ZERO,
            sync_callbacks: Vec::new(),
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Reset the CPU from the vector at 0xFFFE and re-arm the run flag.
    pub fn reset(&mut self) {
        self.cpu.reset(&mut self.bus);
        self.running.store(true, Ordering::SeqCst);
    }

    /// Call `callback` with the elapsed cycle delta whenever more than
    /// `interval` cycles have passed since its previous call.
    pub fn add_sync_callback<F>(&mut self, interval: u64, callback: F)
    where
        F: FnMut(u64) + 'static,
    {
        self.sync_callbacks.push(SyncCallback {
            interval,
            last_call: self.cpu.cycles,
            callback: Box::new(callback),
        });
    }

    fn call_sync_callbacks(&mut self) {
        let current = self.cpu.cycles;
        for entry in &mut self.sync_callbacks {
            let delta = current.saturating_sub(entry.last_call);
            if delta > entry.interval {
                entry.last_call = current;
                (entry.callback)(delta);
            }
        }
    }

    pub fn quit_handle(&self) -> QuitHandle {
        QuitHandle {
            running: Arc::clone(&self.running),
        }
    }

    /// Stop the run loop and halt the CPU.
    pub fn quit(&mut self) {
        info!("quit at ${:04x} after {} cycles", self.cpu.pc.value(), self.cpu.cycles);
        self.running.store(false, Ordering::SeqCst);
        self.cpu.halt();
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub fn set_throttle(&mut self, throttle: Throttle) {
        self.throttle = throttle;
    }

    pub fn throttle(&self) -> Throttle {
        self.throttle
    }

    pub fn outer_burst_count(&self) -> u32 {
        self.outer_burst_count
    }

    pub fn cycles(&self) -> u64 {
        self.cpu.cycles
    }

    /// Run `outer × inner` steps, checking the run flag before each inner
    /// loop and sync callbacks after it.
    pub fn burst_run(&mut self) -> Result<(), CpuError> {
        for _ in 0..self.outer_burst_count {
            if !self.is_running() {
                if !self.cpu.is_halted() {
                    self.quit();
                }
                break;
            }
            for _ in 0..self.inner_burst_count {
                self.cpu.step(&mut self.bus)?;
            }
            self.call_sync_callbacks();
        }
        Ok(())
    }

    /// One throttled, self-tuning burst.
    pub fn run(&mut self) -> Result<(), CpuError> {
        let start = Instant::now();
        let start_cycles = self.cpu.cycles;

        self.burst_run()?;

        self.delay = self
            .throttle
            .delay_for(self.cpu.cycles - start_cycles, start.elapsed());
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        let trigger = start.elapsed().saturating_sub(self.delay);
        let new_count = calc_new_count(
            self.min_burst_count,
            self.outer_burst_count,
            self.max_burst_count,
            trigger.as_secs_f64(),
            self.max_run_time.as_secs_f64(),
        );
        if new_count != self.outer_burst_count {
            info!(
                "outer burst count {} -> {new_count} (burst took {trigger:?})",
                self.outer_burst_count
            );
            self.outer_burst_count = new_count;
        }
        Ok(())
    }

    /// `run` until quit (by handle, callback or `quit`).
    pub fn run_until_quit(&mut self) -> Result<(), CpuError> {
        while self.is_running() && !self.cpu.is_halted() {
            self.run()?;
        }
        Ok(())
    }

    /// Execute from `start` until PC equals `end`, for at most `max_ops`
    /// instructions. Sync callbacks are not called.
    pub fn test_run(&mut self, start: u16, end: u16, max_ops: u64) -> Result<(), CpuError> {
        self.cpu.pc.set(start as i32);
        for _ in 0..max_ops {
            if self.cpu.pc.value() == end {
                return Ok(());
            }
            self.cpu.step(&mut self.bus)?;
        }
        error!("max ops {max_ops} arrived before ${end:04x}");
        Err(CpuError::MaxOpsReached { max_ops, end })
    }

    /// Execute `count` instructions from `start`, calling sync callbacks
    /// after every one.
    pub fn test_run2(&mut self, start: u16, count: u32) -> Result<(), CpuError> {
        self.cpu.pc.set(start as i32);
        let saved = (self.outer_burst_count, self.inner_burst_count);
        self.outer_burst_count = count;
        self.inner_burst_count = 1;
        let result = self.burst_run();
        (self.outer_burst_count, self.inner_burst_count) = saved;
        result
    }
}

impl Machine<Memory> {
    pub fn get_state(&self) -> MachineState {
        MachineState {
            cpu: self.cpu.snapshot(),
            ram: self.bus.image().to_vec(),
        }
    }

    pub fn set_state(&mut self, state: &MachineState) {
        self.cpu.restore(&state.cpu);
        self.bus.restore_image(&state.ram);
    }
}
