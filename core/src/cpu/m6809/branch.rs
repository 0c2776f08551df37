use super::{M6809, RegisterId};
use crate::core::Bus;

/// Branch conditions, shared by the short (0x20-0x2F) and long
/// (0x10 0x21-0x2F, 0x16) forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Condition {
    Always,
    Never,
    Higher,
    LowerOrSame,
    CarryClear,
    CarrySet,
    NotEqual,
    Equal,
    OverflowClear,
    OverflowSet,
    Plus,
    Minus,
    GreaterOrEqual,
    LessThan,
    GreaterThan,
    LessOrEqual,
}

impl M6809 {
    pub fn condition_met(&self, condition: Condition) -> bool {
        let cc = &self.cc;
        match condition {
            // 0x20 BRA / 0x16 LBRA
            Condition::Always => true,
            // 0x21 BRN: a two-byte NOP
            Condition::Never => false,
            // 0x22 BHI: Branch if Higher (unsigned >) -> C=0 and Z=0
            Condition::Higher => !cc.c && !cc.z,
            // 0x23 BLS: Branch if Lower or Same (unsigned <=) -> C=1 or Z=1
            Condition::LowerOrSame => cc.c || cc.z,
            // 0x24 BCC/BHS
            Condition::CarryClear => !cc.c,
            // 0x25 BCS/BLO
            Condition::CarrySet => cc.c,
            // 0x26 BNE
            Condition::NotEqual => !cc.z,
            // 0x27 BEQ: Branch if Equal (Z=1)
            Condition::Equal => cc.z,
            // 0x28 BVC
            Condition::OverflowClear => !cc.v,
            // 0x29 BVS
            Condition::OverflowSet => cc.v,
            // 0x2A BPL
            Condition::Plus => !cc.n,
            // 0x2B BMI
            Condition::Minus => cc.n,
            // 0x2C BGE: signed >= -> N=V
            Condition::GreaterOrEqual => cc.n == cc.v,
            // 0x2D BLT: signed < -> N!=V
            Condition::LessThan => cc.n != cc.v,
            // 0x2E BGT: signed > -> Z=0 and N=V
            Condition::GreaterThan => !cc.z && cc.n == cc.v,
            // 0x2F BLE: signed <= -> Z=1 or N!=V
            Condition::LessOrEqual => cc.z || cc.n != cc.v,
        }
    }

    /// All Bcc/LBcc forms. The wrapper already resolved the target and
    /// moved PC past the offset; flags are never touched.
    pub(crate) fn op_branch(&mut self, condition: Condition, ea: u16) {
        if self.condition_met(condition) {
            self.pc.set(ea as i32);
        }
    }

    /// JMP direct/indexed/extended (0x0E, 0x6E, 0x7E)
    pub(crate) fn op_jmp(&mut self, ea: u16) {
        self.pc.set(ea as i32);
    }

    /// JSR (0x9D, 0xAD, 0xBD): push the return address on S, then jump.
    pub(crate) fn op_jsr<B: Bus + ?Sized>(&mut self, bus: &mut B, ea: u16) {
        let ret = self.pc.value();
        self.push_word(bus, RegisterId::S, ret);
        self.pc.set(ea as i32);
    }

    /// BSR (0x8D) and LBSR (0x17) only differ in how the target was resolved.
    pub(crate) fn op_bsr<B: Bus + ?Sized>(&mut self, bus: &mut B, ea: u16) {
        self.op_jsr(bus, ea);
    }

    /// RTS (0x39)
    pub(crate) fn op_rts<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        let ret = self.pull_word(bus, RegisterId::S);
        self.pc.set(ret as i32);
    }
}
