//! Stack primitives and the PSH/PUL/RTI instructions.
//!
//! Stacks grow down: the pointer is decremented before every write and
//! incremented after every read. A pushed word ends up with its high byte
//! at the lower address, so it can be read back with a plain `read_word`.

use super::{M6809, RegisterId};
use crate::core::Bus;

/// PSH/PUL post-byte bits, highest first (push order).
const PSH_ORDER: [(u8, Slot); 8] = [
    (0x80, Slot::Pc),
    (0x40, Slot::OtherStack),
    (0x20, Slot::Reg(RegisterId::Y)),
    (0x10, Slot::Reg(RegisterId::X)),
    (0x08, Slot::Reg(RegisterId::DP)),
    (0x04, Slot::Reg(RegisterId::B)),
    (0x02, Slot::Reg(RegisterId::A)),
    (0x01, Slot::Reg(RegisterId::CC)),
];

#[derive(Clone, Copy)]
enum Slot {
    Pc,
    /// U when operating on S, S when operating on U
    OtherStack,
    Reg(RegisterId),
}

impl M6809 {
    pub(crate) fn push_byte<B: Bus + ?Sized>(&mut self, bus: &mut B, stack: RegisterId, value: u8) {
        let addr = self.read_register(stack).wrapping_sub(1);
        self.write_register(stack, addr as i32);
        bus.write_byte(addr, value);
    }

    pub(crate) fn pull_byte<B: Bus + ?Sized>(&mut self, bus: &mut B, stack: RegisterId) -> u8 {
        let addr = self.read_register(stack);
        let value = bus.read_byte(addr);
        self.write_register(stack, addr as i32 + 1);
        value
    }

    pub(crate) fn push_word<B: Bus + ?Sized>(&mut self, bus: &mut B, stack: RegisterId, value: u16) {
        let addr = self.read_register(stack).wrapping_sub(2);
        self.write_register(stack, addr as i32);
        bus.write_word(addr, value);
    }

    pub(crate) fn pull_word<B: Bus + ?Sized>(&mut self, bus: &mut B, stack: RegisterId) -> u16 {
        let addr = self.read_register(stack);
        let value = bus.read_word(addr);
        self.write_register(stack, addr as i32 + 2);
        value
    }

    fn slot_register(stack: RegisterId, slot: Slot) -> RegisterId {
        match slot {
            Slot::Pc => RegisterId::PC,
            Slot::OtherStack if stack == RegisterId::S => RegisterId::U,
            Slot::OtherStack => RegisterId::S,
            Slot::Reg(reg) => reg,
        }
    }

    /// PSHS/PSHU (0x34, 0x36): push the registers selected by the post-byte.
    /// Order is PC, U/S, Y, X, DP, B, A, CC; CC ends up on top.
    pub(crate) fn op_psh<B: Bus + ?Sized>(&mut self, bus: &mut B, stack: RegisterId, m: u8) {
        for (bit, slot) in PSH_ORDER {
            if m & bit == 0 {
                continue;
            }
            let reg = Self::slot_register(stack, slot);
            let value = self.read_register(reg);
            if reg.width() == 16 {
                self.push_word(bus, stack, value);
            } else {
                self.push_byte(bus, stack, value as u8);
            }
        }
    }

    /// PULS/PULU (0x35, 0x37): the reverse of PSH. Pulling PC is a jump.
    pub(crate) fn op_pul<B: Bus + ?Sized>(&mut self, bus: &mut B, stack: RegisterId, m: u8) {
        for (bit, slot) in PSH_ORDER.into_iter().rev() {
            if m & bit == 0 {
                continue;
            }
            let reg = Self::slot_register(stack, slot);
            let value = if reg.width() == 16 {
                self.pull_word(bus, stack)
            } else {
                self.pull_byte(bus, stack) as u16
            };
            self.write_register(reg, value as i32);
        }
    }

    /// Stack PC, U, Y, X, DP, B, A and CC on S. The caller sets E first.
    pub(crate) fn push_entire_state<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        self.op_psh(bus, RegisterId::S, 0xFF);
    }

    /// Stack PC and CC on S (FIRQ frame).
    pub(crate) fn push_pc_cc<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        self.op_psh(bus, RegisterId::S, 0x81);
    }

    /// RTI (0x3B): pull CC; if E is set pull A, B, DP, X, Y and U too;
    /// then pull PC.
    pub(crate) fn op_rti<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        let cc = self.pull_byte(bus, RegisterId::S);
        self.cc.set(cc);
        let rest = if self.cc.e { 0xFE } else { 0x80 };
        self.op_pul(bus, RegisterId::S, rest);
    }
}

#[cfg(test)]
mod tests {
    use crate::core::config::MemoryConfig;
    use crate::core::{Bus, Memory};
    use crate::cpu::m6809::{M6809, RegisterId};

    fn setup() -> (M6809, Memory) {
        let mut cpu = M6809::new();
        cpu.s.set(0x8000);
        cpu.u.set(0x7000);
        (cpu, Memory::new(&MemoryConfig::all_ram()))
    }

    #[test]
    fn test_word_push_is_big_endian() {
        let (mut cpu, mut mem) = setup();
        cpu.push_word(&mut mem, RegisterId::S, 0x1234);
        assert_eq!(cpu.s.value(), 0x7FFE);
        assert_eq!(mem.peek(0x7FFE), 0x12);
        assert_eq!(mem.peek(0x7FFF), 0x34);
        assert_eq!(cpu.pull_word(&mut mem, RegisterId::S), 0x1234);
        assert_eq!(cpu.s.value(), 0x8000);
    }

    #[test]
    fn test_pshs_all_layout() {
        let (mut cpu, mut mem) = setup();
        cpu.pc.set(0xABCD);
        cpu.x.set(0x1111);
        cpu.y.set(0x2222);
        cpu.a.set(0xAA);
        cpu.b.set(0xBB);
        cpu.dp.set(0xDD);
        cpu.cc.set(0x5C);
        cpu.op_psh(&mut mem, RegisterId::S, 0xFF);

        assert_eq!(cpu.s.value(), 0x8000 - 12);
        let top = cpu.s.value();
        assert_eq!(mem.peek(top), 0x5C); // CC
        assert_eq!(mem.peek(top + 1), 0xAA); // A
        assert_eq!(mem.peek(top + 2), 0xBB); // B
        assert_eq!(mem.peek(top + 3), 0xDD); // DP
        assert_eq!(mem.read_word(top + 4), 0x1111); // X
        assert_eq!(mem.read_word(top + 6), 0x2222); // Y
        assert_eq!(mem.read_word(top + 8), 0x7000); // U
        assert_eq!(mem.read_word(top + 10), 0xABCD); // PC
    }

    #[test]
    fn test_pshu_pulu_swap_other_stack() {
        let (mut cpu, mut mem) = setup();
        cpu.op_psh(&mut mem, RegisterId::U, 0x40);
        assert_eq!(cpu.u.value(), 0x6FFE);
        assert_eq!(mem.read_word(0x6FFE), 0x8000);

        cpu.s.set(0x1234);
        cpu.op_pul(&mut mem, RegisterId::U, 0x40);
        assert_eq!(cpu.s.value(), 0x8000);
        assert_eq!(cpu.u.value(), 0x7000);
    }

    #[test]
    fn test_psh_pul_round_trip() {
        let (mut cpu, mut mem) = setup();
        cpu.set_d(0x1234);
        cpu.x.set(0x5678);
        cpu.op_psh(&mut mem, RegisterId::S, 0x16); // X B A
        cpu.set_d(0);
        cpu.x.set(0);
        cpu.op_pul(&mut mem, RegisterId::S, 0x16);
        assert_eq!(cpu.d(), 0x1234);
        assert_eq!(cpu.x.value(), 0x5678);
        assert_eq!(cpu.s.value(), 0x8000);
    }

    #[test]
    fn test_rti_fast_frame() {
        let (mut cpu, mut mem) = setup();
        cpu.pc.set(0x4321);
        cpu.cc.set(0x01);
        cpu.push_pc_cc(&mut mem);
        cpu.pc.set(0);
        cpu.cc.set(0xFF);
        cpu.a.set(0x99);
        cpu.op_rti(&mut mem);
        assert_eq!(cpu.pc.value(), 0x4321);
        assert_eq!(cpu.cc.get(), 0x01);
        assert_eq!(cpu.a.value(), 0x99);
        assert_eq!(cpu.s.value(), 0x8000);
    }
}
