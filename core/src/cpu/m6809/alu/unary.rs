//! Single-operand read-modify-write instructions.
//!
//! The `_register` forms act on A or B in place; the `_memory` forms get the
//! byte the wrapper already read and hand back `(ea, result)` for it to
//! write.

use crate::cpu::m6809::{M6809, RegisterId};

impl M6809 {
    // --- Internal Unary Helpers ---

    #[inline]
    fn perform_neg(&mut self, m: u8) -> u8 {
        let b = m as i32;
        let r = -b;
        self.cc.clear_nzvc();
        self.cc.update_nzvc_8(0, b, r);
        r as u8
    }

    #[inline]
    fn perform_com(&mut self, m: u8) -> u8 {
        let r = !m;
        self.cc.clear_nz();
        self.cc.update_nz01_8(r as i32);
        r
    }

    #[inline]
    fn perform_clr(&mut self) -> u8 {
        self.cc.update_0100();
        0
    }

    #[inline]
    fn perform_inc(&mut self, m: u8) -> u8 {
        let r = m.wrapping_add(1);
        self.cc.clear_nzv();
        self.cc.update_nz_8(r as i32);
        self.cc.v = r == 0x80;
        r
    }

    #[inline]
    fn perform_dec(&mut self, m: u8) -> u8 {
        let r = m.wrapping_sub(1);
        self.cc.clear_nzv();
        self.cc.update_nz_8(r as i32);
        self.cc.v = r == 0x7F;
        r
    }

    #[inline]
    fn perform_tst(&mut self, m: u8) {
        self.cc.clear_nz();
        self.cc.update_nz0_8(m as i32);
    }

    #[inline]
    fn accumulator(&self, reg: RegisterId) -> u8 {
        self.reg8(reg) as u8
    }

    /// NEGA/NEGB (0x40, 0x50): R = 0 - R.
    /// V set only for 0x80, C set for any non-zero operand.
    pub(crate) fn op_neg_register(&mut self, reg: RegisterId) {
        let r = self.perform_neg(self.accumulator(reg));
        self.write_register(reg, r as i32);
    }

    /// NEG direct/indexed/extended (0x00, 0x60, 0x70).
    pub(crate) fn op_neg_memory(&mut self, ea: u16, m: u8) -> (u16, u8) {
        (ea, self.perform_neg(m))
    }

    /// COMA/COMB (0x43, 0x53): one's complement. V cleared, C set.
    pub(crate) fn op_com_register(&mut self, reg: RegisterId) {
        let r = self.perform_com(self.accumulator(reg));
        self.write_register(reg, r as i32);
    }

    pub(crate) fn op_com_memory(&mut self, ea: u16, m: u8) -> (u16, u8) {
        (ea, self.perform_com(m))
    }

    /// CLRA/CLRB (0x4F, 0x5F): N=0 Z=1 V=0 C=0.
    pub(crate) fn op_clr_register(&mut self, reg: RegisterId) {
        let r = self.perform_clr();
        self.write_register(reg, r as i32);
    }

    /// CLR memory only writes; the old value is never read.
    pub(crate) fn op_clr_memory(&mut self, ea: u16) -> (u16, u8) {
        (ea, self.perform_clr())
    }

    /// INCA/INCB (0x4C, 0x5C). C untouched, V on 0x7F -> 0x80.
    pub(crate) fn op_inc_register(&mut self, reg: RegisterId) {
        let r = self.perform_inc(self.accumulator(reg));
        self.write_register(reg, r as i32);
    }

    pub(crate) fn op_inc_memory(&mut self, ea: u16, m: u8) -> (u16, u8) {
        (ea, self.perform_inc(m))
    }

    /// DECA/DECB (0x4A, 0x5A). C untouched, V on 0x80 -> 0x7F.
    pub(crate) fn op_dec_register(&mut self, reg: RegisterId) {
        let r = self.perform_dec(self.accumulator(reg));
        self.write_register(reg, r as i32);
    }

    pub(crate) fn op_dec_memory(&mut self, ea: u16, m: u8) -> (u16, u8) {
        (ea, self.perform_dec(m))
    }

    /// TSTA/TSTB (0x4D, 0x5D)
    pub(crate) fn op_tst_register(&mut self, reg: RegisterId) {
        self.perform_tst(self.accumulator(reg));
    }

    /// TST memory reads only; nothing is written back.
    pub(crate) fn op_tst_memory(&mut self, m: u8) {
        self.perform_tst(m);
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu::m6809::{M6809, RegisterId};

    #[test]
    fn test_neg_boundaries() {
        let mut cpu = M6809::new();
        cpu.a.set(0x80);
        cpu.op_neg_register(RegisterId::A);
        assert_eq!(cpu.a.value(), 0x80);
        assert!(cpu.cc.v && cpu.cc.n && cpu.cc.c);

        cpu.a.set(0x00);
        cpu.op_neg_register(RegisterId::A);
        assert_eq!(cpu.a.value(), 0x00);
        assert!(cpu.cc.z && !cpu.cc.c && !cpu.cc.v);

        cpu.cc.h = true;
        cpu.b.set(0x01);
        cpu.op_neg_register(RegisterId::B);
        assert_eq!(cpu.b.value(), 0xFF);
        assert!(cpu.cc.c && cpu.cc.n && cpu.cc.h);
    }

    #[test]
    fn test_com() {
        let mut cpu = M6809::new();
        cpu.cc.v = true;
        assert_eq!(cpu.op_com_memory(0x2000, 0xFF), (0x2000, 0x00));
        assert!(cpu.cc.z && cpu.cc.c && !cpu.cc.v && !cpu.cc.n);
    }

    #[test]
    fn test_clr() {
        let mut cpu = M6809::new();
        cpu.cc.set(0x0B); // N V C
        cpu.b.set(0x55);
        cpu.op_clr_register(RegisterId::B);
        assert_eq!(cpu.b.value(), 0);
        assert_eq!(cpu.cc.get(), 0x04);
    }

    #[test]
    fn test_inc_dec_overflow_and_carry() {
        let mut cpu = M6809::new();
        cpu.cc.c = true;
        assert_eq!(cpu.op_inc_memory(0x10, 0x7F), (0x10, 0x80));
        assert!(cpu.cc.v && cpu.cc.n && cpu.cc.c);

        assert_eq!(cpu.op_inc_memory(0x10, 0xFF), (0x10, 0x00));
        assert!(cpu.cc.z && !cpu.cc.v && cpu.cc.c);

        cpu.a.set(0x80);
        cpu.op_dec_register(RegisterId::A);
        assert_eq!(cpu.a.value(), 0x7F);
        assert!(cpu.cc.v && !cpu.cc.n);

        cpu.a.set(0x00);
        cpu.op_dec_register(RegisterId::A);
        assert_eq!(cpu.a.value(), 0xFF);
        assert!(!cpu.cc.v && cpu.cc.n && cpu.cc.c);
    }

    #[test]
    fn test_tst() {
        let mut cpu = M6809::new();
        cpu.cc.v = true;
        cpu.cc.c = true;
        cpu.op_tst_memory(0x80);
        assert!(cpu.cc.n && !cpu.cc.z && !cpu.cc.v && cpu.cc.c);
        cpu.a.set(0);
        cpu.op_tst_register(RegisterId::A);
        assert!(cpu.cc.z && !cpu.cc.n);
    }
}
