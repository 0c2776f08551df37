//! Addressing mode resolution.
//!
//! All helpers consume instruction bytes through `read_pc_*`, so PC always
//! points past the operand when they return. Indexed modes add their
//! post-byte cycle penalties directly to `self.cycles`.

use log::warn;

use super::M6809;
use super::dispatch::{EaMode, OperandMode};
use super::registers::RegisterId;
use crate::core::Bus;

impl M6809 {
    /// Fetch the byte at PC and advance PC. Returns `(address, value)`.
    #[inline]
    pub(crate) fn read_pc_byte<B: Bus + ?Sized>(&mut self, bus: &mut B) -> (u16, u8) {
        let addr = self.pc.value();
        let value = bus.read_byte(addr);
        self.pc.increment(1);
        (addr, value)
    }

    /// Fetch the big-endian word at PC and advance PC by two.
    #[inline]
    pub(crate) fn read_pc_word<B: Bus + ?Sized>(&mut self, bus: &mut B) -> (u16, u16) {
        let addr = self.pc.value();
        let value = bus.read_word(addr);
        self.pc.increment(2);
        (addr, value)
    }

    pub(crate) fn resolve_ea<B: Bus + ?Sized>(&mut self, bus: &mut B, mode: EaMode) -> u16 {
        match mode {
            EaMode::Direct => self.ea_direct(bus),
            EaMode::Extended => self.ea_extended(bus),
            EaMode::Indexed => self.ea_indexed(bus),
            EaMode::Relative => self.ea_relative(bus),
            EaMode::RelativeWord => self.ea_relative_word(bus),
        }
    }

    pub(crate) fn read_operand_byte<B: Bus + ?Sized>(
        &mut self,
        bus: &mut B,
        mode: OperandMode,
    ) -> u8 {
        let ea = match mode {
            OperandMode::Immediate => return self.read_pc_byte(bus).1,
            OperandMode::Direct => self.ea_direct(bus),
            OperandMode::Extended => self.ea_extended(bus),
            OperandMode::Indexed => self.ea_indexed(bus),
        };
        bus.read_byte(ea)
    }

    pub(crate) fn read_operand_word<B: Bus + ?Sized>(
        &mut self,
        bus: &mut B,
        mode: OperandMode,
    ) -> u16 {
        let ea = match mode {
            OperandMode::Immediate => return self.read_pc_word(bus).1,
            OperandMode::Direct => self.ea_direct(bus),
            OperandMode::Extended => self.ea_extended(bus),
            OperandMode::Indexed => self.ea_indexed(bus),
        };
        bus.read_word(ea)
    }

    /// EA = DP:next byte
    pub(crate) fn ea_direct<B: Bus + ?Sized>(&mut self, bus: &mut B) -> u16 {
        let (_, low) = self.read_pc_byte(bus);
        u16::from_be_bytes([self.dp.value(), low])
    }

    pub(crate) fn ea_extended<B: Bus + ?Sized>(&mut self, bus: &mut B) -> u16 {
        self.read_pc_word(bus).1
    }

    /// EA = PC after the offset byte + signed offset.
    pub(crate) fn ea_relative<B: Bus + ?Sized>(&mut self, bus: &mut B) -> u16 {
        let (_, offset) = self.read_pc_byte(bus);
        self.pc.value().wrapping_add(offset as i8 as u16)
    }

    pub(crate) fn ea_relative_word<B: Bus + ?Sized>(&mut self, bus: &mut B) -> u16 {
        let (_, offset) = self.read_pc_word(bus);
        self.pc.value().wrapping_add(offset)
    }

    /// Decode an indexed post-byte and everything that follows it.
    ///
    /// Post-byte layout: bit 7 selects the 5-bit offset form, bits 5-6 the
    /// index register, bit 4 indirection (or the offset sign), bits 0-3 the
    /// variant.
    pub(crate) fn ea_indexed<B: Bus + ?Sized>(&mut self, bus: &mut B) -> u16 {
        let (post_addr, postbyte) = self.read_pc_byte(bus);
        let reg = RegisterId::from_index_bits(postbyte >> 5);
        let base = self.read_register(reg);

        if postbyte & 0x80 == 0 {
            // 5-bit two's complement offset in bits 0-4
            let offset = ((postbyte & 0x1F) as i8) << 3 >> 3;
            return base.wrapping_add(offset as u16);
        }

        self.cycles += 1;
        let ea = match postbyte & 0x0F {
            // ,R+
            0x0 => {
                self.write_register(reg, base as i32 + 1);
                base
            }
            // ,R++
            0x1 => {
                self.write_register(reg, base as i32 + 2);
                self.cycles += 1;
                base
            }
            // ,-R
            0x2 => {
                self.write_register(reg, base as i32 - 1);
                base.wrapping_sub(1)
            }
            // ,--R
            0x3 => {
                self.write_register(reg, base as i32 - 2);
                self.cycles += 1;
                base.wrapping_sub(2)
            }
            // ,R
            0x4 => base,
            // B,R
            0x5 => base.wrapping_add(self.b.value() as i8 as u16),
            // A,R
            0x6 => base.wrapping_add(self.a.value() as i8 as u16),
            // n8,R
            0x8 => {
                let (_, offset) = self.read_pc_byte(bus);
                base.wrapping_add(offset as i8 as u16)
            }
            // n16,R
            0x9 => {
                let (_, offset) = self.read_pc_word(bus);
                self.cycles += 1;
                base.wrapping_add(offset)
            }
            // D,R
            0xB => {
                self.cycles += 1;
                base.wrapping_add(self.d())
            }
            // n8,PCR
            0xC => {
                let (_, offset) = self.read_pc_byte(bus);
                self.pc.value().wrapping_add(offset as i8 as u16)
            }
            // n16,PCR
            0xD => {
                let (_, offset) = self.read_pc_word(bus);
                self.cycles += 1;
                self.pc.value().wrapping_add(offset)
            }
            // [n16]
            0xF => self.read_pc_word(bus).1,
            0xE => {
                warn!("${post_addr:04x} illegal indexed post-byte ${postbyte:02x}");
                0xFFFF
            }
            // 0x7 and 0xA
            _ => {
                warn!("${post_addr:04x} illegal indexed post-byte ${postbyte:02x}");
                0x0000
            }
        };

        if postbyte & 0x10 != 0 {
            bus.read_word(ea)
        } else {
            ea
        }
    }
}
