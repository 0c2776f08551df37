//! Hardware interrupt entry and the software interrupt/wait instructions.

use log::debug;

use super::{
    ExecState, FIRQ_VECTOR, IRQ_VECTOR, M6809, NMI_VECTOR, SWI_VECTOR, SWI2_VECTOR, SWI3_VECTOR,
    WaitKind,
};
use crate::core::Bus;

/// Cycles spent stacking the entire state and vectoring (IRQ, NMI).
const ENTIRE_ENTRY_CYCLES: u64 = 19;
/// Cycles spent stacking PC/CC and vectoring (FIRQ).
const FAST_ENTRY_CYCLES: u64 = 10;
/// Out of CWAI the frame is already stacked; only the vector is fetched.
const VECTOR_FETCH_CYCLES: u64 = 2;

impl M6809 {
    /// CWAI already stacked everything; other waits (and normal execution)
    /// still need the frame pushed.
    fn already_stacked(&self) -> bool {
        self.state == ExecState::Waiting(WaitKind::Cwai)
    }

    /// Push the frame unless CWAI already did, and charge accordingly.
    fn enter<B: Bus + ?Sized>(&mut self, bus: &mut B, entire: bool) {
        if self.already_stacked() {
            self.cycles += VECTOR_FETCH_CYCLES;
        } else if entire {
            self.cc.e = true;
            self.push_entire_state(bus);
            self.cycles += ENTIRE_ENTRY_CYCLES;
        } else {
            self.cc.e = false;
            self.push_pc_cc(bus);
            self.cycles += FAST_ENTRY_CYCLES;
        }
    }

    fn vector_to<B: Bus + ?Sized>(&mut self, bus: &mut B, vector: u16) {
        let target = bus.read_word(vector);
        self.pc.set(target as i32);
        self.state = ExecState::Fetching;
    }

    /// IRQ: E=1, entire state stacked, I masked, vector at 0xFFF8.
    pub(crate) fn irq<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        debug!("${:04x} IRQ", self.pc.value());
        self.enter(bus, true);
        self.cc.i = true;
        self.vector_to(bus, IRQ_VECTOR);
    }

    /// FIRQ: E=0, only PC and CC stacked, I and F masked, vector at 0xFFF6.
    /// Taken out of CWAI the full frame is already on the stack with E=1.
    pub(crate) fn firq<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        debug!("${:04x} FIRQ", self.pc.value());
        self.enter(bus, false);
        self.cc.i = true;
        self.cc.f = true;
        self.vector_to(bus, FIRQ_VECTOR);
    }

    /// NMI: like IRQ but also masks FIRQ, vector at 0xFFFC.
    pub(crate) fn nmi<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        debug!("${:04x} NMI", self.pc.value());
        self.enter(bus, true);
        self.cc.i = true;
        self.cc.f = true;
        self.vector_to(bus, NMI_VECTOR);
    }

    /// SWI (0x3F), SWI2 (0x103F), SWI3 (0x113F).
    /// All stack the entire state; only SWI masks IRQ and FIRQ.
    pub(crate) fn op_swi<B: Bus + ?Sized>(&mut self, bus: &mut B, opcode: u16) {
        self.cc.e = true;
        self.push_entire_state(bus);
        let vector = match opcode {
            0x103F => SWI2_VECTOR,
            0x113F => SWI3_VECTOR,
            _ => {
                self.cc.i = true;
                self.cc.f = true;
                SWI_VECTOR
            }
        };
        let target = bus.read_word(vector);
        self.pc.set(target as i32);
    }

    /// CWAI immediate (0x3C): CC &= imm, stack the entire state and wait.
    pub(crate) fn op_cwai<B: Bus + ?Sized>(&mut self, bus: &mut B, m: u8) {
        let status = self.cc.get() & m;
        self.cc.set(status);
        self.cc.e = true;
        self.push_entire_state(bus);
        self.state = ExecState::Waiting(WaitKind::Cwai);
    }

    /// SYNC (0x13): wait for any interrupt line.
    pub(crate) fn op_sync(&mut self) {
        self.state = ExecState::Waiting(WaitKind::Sync);
    }
}
