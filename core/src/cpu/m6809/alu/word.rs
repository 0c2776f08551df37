use crate::cpu::m6809::{M6809, RegisterId};

impl M6809 {
    #[inline]
    fn perform_sub16(&mut self, reg: RegisterId, m: u16) -> i32 {
        let a = self.read_register(reg) as i32;
        let b = m as i32;
        let r = a - b;
        self.cc.clear_nzvc();
        self.cc.update_nzvc_16(a, b, r);
        r
    }

    /// ADDD (0xC3): D = D + M:M+1. N, Z, V, C; H is not affected.
    pub(crate) fn op_add16(&mut self, reg: RegisterId, m: u16) {
        let a = self.read_register(reg) as i32;
        let b = m as i32;
        let r = a + b;
        self.write_register(reg, r);
        self.cc.clear_nzvc();
        self.cc.update_nzvc_16(a, b, r);
    }

    /// SUBD (0x83): D = D - M:M+1.
    pub(crate) fn op_sub16(&mut self, reg: RegisterId, m: u16) {
        let r = self.perform_sub16(reg, m);
        self.write_register(reg, r);
    }

    /// CMPD/CMPX/CMPY/CMPU/CMPS: flags from R - M:M+1.
    pub(crate) fn op_cmp16(&mut self, reg: RegisterId, m: u16) {
        self.perform_sub16(reg, m);
    }

    /// ABX inherent (0x3A): X = X + B, unsigned. No flags.
    pub(crate) fn op_abx(&mut self) {
        self.x.increment(self.b.value() as i32);
    }

    /// MUL inherent (0x3D): D = A * B, unsigned.
    /// Z set if the product is zero. C is bit 7 of the product, so that a
    /// following ADCA rounds D to 8 bits.
    pub(crate) fn op_mul(&mut self) {
        let r = self.a.value() as i32 * self.b.value() as i32;
        self.set_d(r);
        self.cc.z = r == 0;
        self.cc.c = r & 0x80 != 0;
    }
}
