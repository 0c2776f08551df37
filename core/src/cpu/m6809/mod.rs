//! Motorola 6809.
//!
//! Instructions execute atomically. `step` fetches one opcode, lets the
//! dispatch table resolve its operands and run its semantics, then adds the
//! opcode's base cycle count. Page prefixes, indexed post-bytes and
//! interrupt entry account for their own cycles on top of that.

use std::fmt;

use log::{error, trace};

mod addressing;
mod alu;
mod branch;
pub mod cc;
mod dispatch;
mod interrupt;
mod load_store;
pub mod opcodes;
pub mod registers;
mod stack;
mod transfer;

pub use branch::Condition;
pub use cc::{CcFlag, ConditionCodes};
pub use registers::{Register8, Register16, RegisterId, UndefinedRegister, convert_width};

use self::dispatch::DispatchTable;
use crate::core::bus::{Bus, InterruptState};
use crate::cpu::{ConfigError, Cpu, CpuError, CpuStateTrait, M6809State};

pub const RESET_VECTOR: u16 = 0xFFFE;
pub const NMI_VECTOR: u16 = 0xFFFC;
pub const SWI_VECTOR: u16 = 0xFFFA;
pub const IRQ_VECTOR: u16 = 0xFFF8;
pub const FIRQ_VECTOR: u16 = 0xFFF6;
pub const SWI2_VECTOR: u16 = 0xFFF4;
pub const SWI3_VECTOR: u16 = 0xFFF2;

/// Why the CPU is parked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaitKind {
    /// CWAI: the entire state is already stacked.
    Cwai,
    /// SYNC: nothing stacked; a masked interrupt simply resumes.
    Sync,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecState {
    Fetching,
    Dispatching,
    Executing,
    Waiting(WaitKind),
    /// Terminal; only `reset` leaves it.
    Halted,
}

pub struct M6809 {
    pub a: Register8,
    pub b: Register8,
    pub dp: Register8,
    pub x: Register16,
    pub y: Register16,
    pub u: Register16,
    pub s: Register16,
    pub pc: Register16,
    pub cc: ConditionCodes,
    pub cycles: u64,

    pub(crate) state: ExecState,
    /// Address of the first byte of the instruction being executed
    pub(crate) last_op_address: u16,
    /// Lines latched by `signal_interrupt`, held until serviced
    pending: InterruptState,
    /// Last NMI level seen on the bus (NMI is edge triggered)
    nmi_line: bool,
    pub(crate) undefined: UndefinedRegister,
    dispatch: DispatchTable,
}

impl M6809 {
    /// Build a CPU with all registers zeroed.
    ///
    /// # Panics
    ///
    /// If the opcode table and the instruction families disagree. That is
    /// a build defect, not a runtime condition; use [`M6809::try_new`] to
    /// observe the error instead.
    pub fn new() -> Self {
        match Self::try_new() {
            Ok(cpu) => cpu,
            Err(err) => panic!("6809 dispatch table: {err}"),
        }
    }

    pub fn try_new() -> Result<Self, ConfigError> {
        Ok(Self {
            a: Register8::default(),
            b: Register8::default(),
            dp: Register8::default(),
            x: Register16::default(),
            y: Register16::default(),
            u: Register16::default(),
            s: Register16::default(),
            pc: Register16::default(),
            cc: ConditionCodes::default(),
            cycles: 0,
            state: ExecState::Fetching,
            last_op_address: 0,
            pending: InterruptState::default(),
            nmi_line: false,
            undefined: UndefinedRegister,
            dispatch: DispatchTable::build()?,
        })
    }

    /// D = A:B
    #[inline]
    pub fn d(&self) -> u16 {
        u16::from_be_bytes([self.a.value(), self.b.value()])
    }

    /// Split into A (high) and B (low), wrapping like any register write.
    #[inline]
    pub fn set_d(&mut self, value: i32) {
        let [hi, lo] = (value.rem_euclid(0x10000) as u16).to_be_bytes();
        self.a.set(hi as i32);
        self.b.set(lo as i32);
    }

    pub fn state(&self) -> ExecState {
        self.state
    }

    pub fn last_op_address(&self) -> u16 {
        self.last_op_address
    }

    pub fn is_halted(&self) -> bool {
        self.state == ExecState::Halted
    }

    /// Stop executing. Further `step` calls do nothing until `reset`.
    pub fn halt(&mut self) {
        self.state = ExecState::Halted;
    }

    /// Run one instruction at `addr` without touching the interrupt logic.
    /// Used by single-step test harnesses.
    pub fn execute_at<B: Bus + ?Sized>(&mut self, bus: &mut B, addr: u16) -> Result<(), CpuError> {
        self.pc.set(addr as i32);
        self.state = ExecState::Fetching;
        self.fetch_and_execute(bus)
    }

    fn fetch_and_execute<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<(), CpuError> {
        let (op_address, opcode) = self.read_pc_byte(bus);
        trace!("{self} op=${opcode:02x}");
        self.call_instruction(bus, op_address, opcode as u16)?;
        if matches!(self.state, ExecState::Dispatching | ExecState::Executing) {
            self.state = ExecState::Fetching;
        }
        Ok(())
    }

    /// Fold freshly polled bus lines into the latched set. Returns the
    /// lines that are asserted right now.
    fn poll_interrupts<B: Bus + ?Sized>(&mut self, bus: &mut B) -> InterruptState {
        let lines = bus.check_interrupts();
        if lines.nmi && !self.nmi_line {
            self.pending.nmi = true;
        }
        self.nmi_line = lines.nmi;
        InterruptState {
            nmi: self.pending.nmi,
            irq: lines.irq || self.pending.irq,
            firq: lines.firq || self.pending.firq,
        }
    }

    /// Take the highest priority unmasked interrupt, if any.
    fn service_interrupts<B: Bus + ?Sized>(&mut self, bus: &mut B, lines: InterruptState) -> bool {
        if lines.nmi {
            self.pending.nmi = false;
            self.nmi(bus);
        } else if lines.firq && !self.cc.f {
            self.pending.firq = false;
            self.firq(bus);
        } else if lines.irq && !self.cc.i {
            self.pending.irq = false;
            self.irq(bus);
        } else {
            return false;
        }
        true
    }
}

impl Default for M6809 {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu for M6809 {
    fn reset<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        self.cc.set(CcFlag::I as u8 | CcFlag::F as u8);
        self.dp.set(0);
        let vector = bus.read_word(RESET_VECTOR);
        if vector == 0 {
            error!("reset vector at ${RESET_VECTOR:04x} is $0000");
        }
        self.pc.set(vector as i32);
        self.pending = InterruptState::default();
        self.nmi_line = false;
        self.state = ExecState::Fetching;
    }

    fn step<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<(), CpuError> {
        if self.state == ExecState::Halted {
            return Ok(());
        }

        let lines = self.poll_interrupts(bus);
        if self.service_interrupts(bus, lines) {
            return Ok(());
        }

        if let ExecState::Waiting(kind) = self.state {
            // Masked lines still wake SYNC, which then carries on inline
            if kind == WaitKind::Sync && lines.any() {
                self.state = ExecState::Fetching;
            } else {
                self.cycles += 1;
                return Ok(());
            }
        }

        self.fetch_and_execute(bus)
    }

    fn signal_interrupt(&mut self, int: InterruptState) {
        self.pending = self.pending.merge(int);
    }

    fn is_sleeping(&self) -> bool {
        matches!(self.state, ExecState::Waiting(_))
    }

    fn cycles(&self) -> u64 {
        self.cycles
    }
}

impl CpuStateTrait for M6809 {
    type Snapshot = M6809State;

    fn snapshot(&self) -> M6809State {
        M6809State {
            a: self.a.value(),
            b: self.b.value(),
            dp: self.dp.value(),
            x: self.x.value(),
            y: self.y.value(),
            u: self.u.value(),
            s: self.s.value(),
            pc: self.pc.value(),
            cc: self.cc.get(),
            cycles: self.cycles,
        }
    }

    fn restore(&mut self, state: &M6809State) {
        self.a.set(state.a as i32);
        self.b.set(state.b as i32);
        self.dp.set(state.dp as i32);
        self.x.set(state.x as i32);
        self.y.set(state.y as i32);
        self.u.set(state.u as i32);
        self.s.set(state.s as i32);
        self.pc.set(state.pc as i32);
        self.cc.set(state.cc);
        self.cycles = state.cycles;
        self.state = ExecState::Fetching;
    }
}

/// One-line register dump used by trace logging.
impl fmt::Display for M6809 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cc={:02x} a={:02x} b={:02x} dp={:02x} x={:04x} y={:04x} u={:04x} s={:04x} pc={:04x} | {}",
            self.cc.get(),
            self.a.value(),
            self.b.value(),
            self.dp.value(),
            self.x.value(),
            self.y.value(),
            self.u.value(),
            self.s.value(),
            self.pc.value(),
            self.cc,
        )
    }
}
