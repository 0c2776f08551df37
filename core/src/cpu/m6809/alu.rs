use super::{M6809, RegisterId};

mod binary;
mod shift;
mod unary;
mod word;

impl M6809 {
    /// Value of an 8-bit accumulator as a signed-arithmetic operand.
    #[inline]
    pub(crate) fn reg8(&self, reg: RegisterId) -> i32 {
        (self.read_register(reg) & 0xFF) as i32
    }

    /// ANDCC immediate (0x1C): AND the operand into the packed CC byte.
    /// Commonly used to unmask interrupts (ANDCC #$AF).
    pub(crate) fn op_andcc(&mut self, m: u8) {
        let status = self.cc.get() & m;
        self.cc.set(status);
    }

    /// ORCC immediate (0x1A): OR the operand into the packed CC byte.
    pub(crate) fn op_orcc(&mut self, m: u8) {
        let status = self.cc.get() | m;
        self.cc.set(status);
    }

    /// DAA inherent (0x19): decimal-adjust A after a BCD add.
    ///
    /// Low nibble corrected by 6 when it exceeds 9 or H is set; high nibble
    /// corrected by 0x60 when it exceeds 9 (or would after the low fix) or
    /// C is set. C can be set here but never cleared. V is left alone.
    pub(crate) fn op_daa(&mut self) {
        let a = self.a.value() as i32;
        let hi = a & 0xF0;
        let lo = a & 0x0F;

        let mut correction = 0;
        if lo > 9 || self.cc.h {
            correction |= 0x06;
        }
        if (hi > 0x80 && lo > 9) || hi > 0x90 || self.cc.c {
            correction |= 0x60;
        }

        let r = a + correction;
        self.a.set(r);
        self.cc.clear_nz();
        self.cc.update_nzc_8(r);
    }

    /// SEX inherent (0x1D): sign-extend B into A.
    pub(crate) fn op_sex(&mut self) {
        let high = if self.b.value() & 0x80 != 0 { 0xFF } else { 0x00 };
        self.a.set(high);
        self.cc.clear_nz();
        self.cc.update_nz_16(self.d() as i32);
    }
}
