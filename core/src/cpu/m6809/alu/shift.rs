use crate::cpu::m6809::{M6809, RegisterId};

impl M6809 {
    // --- Internal Shift/Rotate Helpers ---

    #[inline]
    fn perform_lsl(&mut self, m: u8) -> u8 {
        let a = m as i32;
        let r = a << 1;
        self.cc.clear_nzvc();
        self.cc.update_nzvc_8(a, a, r);
        r as u8
    }

    #[inline]
    fn perform_lsr(&mut self, m: u8) -> u8 {
        let r = m >> 1;
        self.cc.clear_nzc();
        self.cc.c = m & 0x01 != 0;
        self.cc.set_z8(r as i32);
        r
    }

    #[inline]
    fn perform_asr(&mut self, m: u8) -> u8 {
        let r = (m >> 1) | (m & 0x80);
        self.cc.clear_nzc();
        self.cc.c = m & 0x01 != 0;
        self.cc.update_nz_8(r as i32);
        r
    }

    #[inline]
    fn perform_rol(&mut self, m: u8) -> u8 {
        let a = m as i32;
        let r = (a << 1) | self.cc.c as i32;
        self.cc.clear_nzvc();
        self.cc.update_nzvc_8(a, a, r);
        r as u8
    }

    #[inline]
    fn perform_ror(&mut self, m: u8) -> u8 {
        let r = (m >> 1) | ((self.cc.c as u8) << 7);
        self.cc.clear_nzc();
        self.cc.c = m & 0x01 != 0;
        self.cc.update_nz_8(r as i32);
        r
    }

    /// ASLA/LSLA, ASLB/LSLB (0x48, 0x58): bit 7 goes to C, 0 enters bit 0.
    /// V = N XOR C after the shift.
    pub(crate) fn op_lsl_register(&mut self, reg: RegisterId) {
        let r = self.perform_lsl(self.reg8(reg) as u8);
        self.write_register(reg, r as i32);
    }

    pub(crate) fn op_lsl_memory(&mut self, ea: u16, m: u8) -> (u16, u8) {
        (ea, self.perform_lsl(m))
    }

    /// LSRA/LSRB (0x44, 0x54): 0 enters bit 7, bit 0 goes to C. N always clear.
    pub(crate) fn op_lsr_register(&mut self, reg: RegisterId) {
        let r = self.perform_lsr(self.reg8(reg) as u8);
        self.write_register(reg, r as i32);
    }

    pub(crate) fn op_lsr_memory(&mut self, ea: u16, m: u8) -> (u16, u8) {
        (ea, self.perform_lsr(m))
    }

    /// ASRA/ASRB (0x47, 0x57): bit 7 is preserved (sign extension).
    pub(crate) fn op_asr_register(&mut self, reg: RegisterId) {
        let r = self.perform_asr(self.reg8(reg) as u8);
        self.write_register(reg, r as i32);
    }

    pub(crate) fn op_asr_memory(&mut self, ea: u16, m: u8) -> (u16, u8) {
        (ea, self.perform_asr(m))
    }

    /// ROLA/ROLB (0x49, 0x59): rotate left through C.
    pub(crate) fn op_rol_register(&mut self, reg: RegisterId) {
        let r = self.perform_rol(self.reg8(reg) as u8);
        self.write_register(reg, r as i32);
    }

    pub(crate) fn op_rol_memory(&mut self, ea: u16, m: u8) -> (u16, u8) {
        (ea, self.perform_rol(m))
    }

    /// RORA/RORB (0x46, 0x56): rotate right through C. V unaffected.
    pub(crate) fn op_ror_register(&mut self, reg: RegisterId) {
        let r = self.perform_ror(self.reg8(reg) as u8);
        self.write_register(reg, r as i32);
    }

    pub(crate) fn op_ror_memory(&mut self, ea: u16, m: u8) -> (u16, u8) {
        (ea, self.perform_ror(m))
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu::m6809::{M6809, RegisterId};

    #[test]
    fn test_lsl() {
        let mut cpu = M6809::new();
        cpu.a.set(0xC0);
        cpu.op_lsl_register(RegisterId::A);
        assert_eq!(cpu.a.value(), 0x80);
        assert!(cpu.cc.c && cpu.cc.n && !cpu.cc.v);

        cpu.a.set(0x40);
        cpu.op_lsl_register(RegisterId::A);
        assert_eq!(cpu.a.value(), 0x80);
        assert!(!cpu.cc.c && cpu.cc.n && cpu.cc.v);
    }

    #[test]
    fn test_lsr_and_asr() {
        let mut cpu = M6809::new();
        cpu.cc.n = true;
        assert_eq!(cpu.op_lsr_memory(0x40, 0x81), (0x40, 0x40));
        assert!(cpu.cc.c && !cpu.cc.n && !cpu.cc.z);

        assert_eq!(cpu.op_lsr_memory(0x40, 0x01), (0x40, 0x00));
        assert!(cpu.cc.c && cpu.cc.z);

        cpu.b.set(0x81);
        cpu.op_asr_register(RegisterId::B);
        assert_eq!(cpu.b.value(), 0xC0);
        assert!(cpu.cc.c && cpu.cc.n);
    }

    #[test]
    fn test_rotates_through_carry() {
        let mut cpu = M6809::new();
        cpu.cc.c = true;
        cpu.a.set(0x80);
        cpu.op_rol_register(RegisterId::A);
        assert_eq!(cpu.a.value(), 0x01);
        assert!(cpu.cc.c && !cpu.cc.n);

        cpu.cc.v = true;
        cpu.op_ror_register(RegisterId::A);
        assert_eq!(cpu.a.value(), 0x80);
        assert!(cpu.cc.c && cpu.cc.n && cpu.cc.v);

        cpu.cc.c = false;
        assert_eq!(cpu.op_ror_memory(0x10, 0x01), (0x10, 0x00));
        assert!(cpu.cc.c && cpu.cc.z);
    }
}
