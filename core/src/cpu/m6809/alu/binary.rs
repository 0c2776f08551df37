//! 8-bit accumulator/memory arithmetic and logic.
//!
//! Every operation takes the accumulator id (A or B) and the already
//! fetched operand. Results are computed in `i32` so the flag helpers see
//! the raw carry or borrow.

use crate::cpu::m6809::{M6809, RegisterId};

impl M6809 {
    #[inline]
    fn perform_add8(&mut self, reg: RegisterId, m: u8, carry: bool) {
        let a = self.reg8(reg);
        let b = m as i32;
        let r = a + b + carry as i32;
        self.write_register(reg, r);
        self.cc.clear_hnzvc();
        self.cc.update_hnzvc_8(a, b, r);
    }

    #[inline]
    fn perform_sub8(&mut self, reg: RegisterId, m: u8, borrow: bool) -> i32 {
        let a = self.reg8(reg);
        let b = m as i32;
        let r = a - b - borrow as i32;
        self.cc.clear_nzvc();
        self.cc.update_nzvc_8(a, b, r);
        r
    }

    #[inline]
    fn perform_logical(&mut self, r: i32) {
        self.cc.clear_nz();
        self.cc.update_nz0_8(r);
    }

    /// ADDA/ADDB (0x8B, 0xCB and friends): R = R + M.
    /// H, N, Z, V and C all come from the sum.
    pub(crate) fn op_add8(&mut self, reg: RegisterId, m: u8) {
        self.perform_add8(reg, m, false);
    }

    /// ADCA/ADCB: R = R + M + C.
    pub(crate) fn op_adc(&mut self, reg: RegisterId, m: u8) {
        let carry = self.cc.c;
        self.perform_add8(reg, m, carry);
    }

    /// SUBA/SUBB: R = R - M. H is not affected.
    pub(crate) fn op_sub8(&mut self, reg: RegisterId, m: u8) {
        let r = self.perform_sub8(reg, m, false);
        self.write_register(reg, r);
    }

    /// SBCA/SBCB: R = R - M - C.
    pub(crate) fn op_sbc(&mut self, reg: RegisterId, m: u8) {
        let borrow = self.cc.c;
        let r = self.perform_sub8(reg, m, borrow);
        self.write_register(reg, r);
    }

    /// CMPA/CMPB: flags from R - M, result discarded.
    pub(crate) fn op_cmp8(&mut self, reg: RegisterId, m: u8) {
        self.perform_sub8(reg, m, false);
    }

    pub(crate) fn op_and(&mut self, reg: RegisterId, m: u8) {
        let r = self.reg8(reg) & m as i32;
        self.write_register(reg, r);
        self.perform_logical(r);
    }

    pub(crate) fn op_or(&mut self, reg: RegisterId, m: u8) {
        let r = self.reg8(reg) | m as i32;
        self.write_register(reg, r);
        self.perform_logical(r);
    }

    pub(crate) fn op_eor(&mut self, reg: RegisterId, m: u8) {
        let r = self.reg8(reg) ^ m as i32;
        self.write_register(reg, r);
        self.perform_logical(r);
    }

    /// BITA/BITB: flags from R & M, register untouched.
    pub(crate) fn op_bit(&mut self, reg: RegisterId, m: u8) {
        let r = self.reg8(reg) & m as i32;
        self.perform_logical(r);
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu::m6809::{M6809, RegisterId};

    #[test]
    fn test_add_sets_half_carry_and_overflow() {
        let mut cpu = M6809::new();
        cpu.a.set(0x7F);
        cpu.op_add8(RegisterId::A, 0x01);
        assert_eq!(cpu.a.value(), 0x80);
        assert!(cpu.cc.h && cpu.cc.n && cpu.cc.v && !cpu.cc.c && !cpu.cc.z);
    }

    #[test]
    fn test_add_clears_stale_flags() {
        let mut cpu = M6809::new();
        cpu.cc.set(0x2F); // H N Z V C
        cpu.b.set(0x01);
        cpu.op_add8(RegisterId::B, 0x01);
        assert_eq!(cpu.b.value(), 0x02);
        assert_eq!(cpu.cc.get(), 0x00);
    }

    #[test]
    fn test_adc_uses_carry() {
        let mut cpu = M6809::new();
        cpu.a.set(0xFF);
        cpu.cc.c = true;
        cpu.op_adc(RegisterId::A, 0x00);
        assert_eq!(cpu.a.value(), 0x00);
        assert!(cpu.cc.c && cpu.cc.z && cpu.cc.h);
    }

    #[test]
    fn test_sub_borrow_leaves_half_carry() {
        let mut cpu = M6809::new();
        cpu.cc.h = true;
        cpu.a.set(0x00);
        cpu.op_sub8(RegisterId::A, 0x01);
        assert_eq!(cpu.a.value(), 0xFF);
        assert!(cpu.cc.c && cpu.cc.n && !cpu.cc.v && cpu.cc.h);
    }

    #[test]
    fn test_sbc_and_cmp() {
        let mut cpu = M6809::new();
        cpu.b.set(0x80);
        cpu.cc.c = true;
        cpu.op_sbc(RegisterId::B, 0x00);
        assert_eq!(cpu.b.value(), 0x7F);
        assert!(cpu.cc.v && !cpu.cc.c);

        cpu.op_cmp8(RegisterId::B, 0x7F);
        assert_eq!(cpu.b.value(), 0x7F);
        assert!(cpu.cc.z && !cpu.cc.c && !cpu.cc.v);
    }

    #[test]
    fn test_logic_clears_overflow_keeps_carry() {
        let mut cpu = M6809::new();
        cpu.cc.v = true;
        cpu.cc.c = true;
        cpu.a.set(0xF0);
        cpu.op_and(RegisterId::A, 0x0F);
        assert_eq!(cpu.a.value(), 0x00);
        assert!(cpu.cc.z && !cpu.cc.v && cpu.cc.c);

        cpu.op_or(RegisterId::A, 0x81);
        assert_eq!(cpu.a.value(), 0x81);
        assert!(cpu.cc.n && !cpu.cc.z);

        cpu.op_eor(RegisterId::A, 0x81);
        assert_eq!(cpu.a.value(), 0x00);
        assert!(cpu.cc.z);

        cpu.a.set(0x80);
        cpu.op_bit(RegisterId::A, 0xC0);
        assert_eq!(cpu.a.value(), 0x80);
        assert!(cpu.cc.n);
    }
}
