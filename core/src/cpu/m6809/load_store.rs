use super::{M6809, RegisterId};

impl M6809 {
    /// LDA/LDB (0x86, 0xC6 and the memory forms): load an accumulator.
    /// N set if result bit 7 is set. Z set if result is zero. V always cleared.
    pub(crate) fn op_ld8(&mut self, reg: RegisterId, m: u8) {
        self.write_register(reg, m as i32);
        self.cc.clear_nz();
        self.cc.update_nz0_8(m as i32);
    }

    /// LDD/LDX/LDY/LDU/LDS: 16-bit load, flags from bit 15.
    pub(crate) fn op_ld16(&mut self, reg: RegisterId, m: u16) {
        self.write_register(reg, m as i32);
        self.cc.clear_nz();
        self.cc.update_nz0_16(m as i32);
    }

    /// STA/STB: flags as for a load of the stored value.
    pub(crate) fn op_st8(&mut self, reg: RegisterId, ea: u16) -> (u16, u8) {
        let value = self.reg8(reg) as u8;
        self.cc.clear_nz();
        self.cc.update_nz0_8(value as i32);
        (ea, value)
    }

    /// STD/STX/STY/STU/STS
    pub(crate) fn op_st16(&mut self, reg: RegisterId, ea: u16) -> (u16, u16) {
        let value = self.read_register(reg);
        self.cc.clear_nz();
        self.cc.update_nz0_16(value as i32);
        (ea, value)
    }

    /// LEAX/LEAY (0x30, 0x31): load the effective address. Z reflects it.
    pub(crate) fn op_lea_register(&mut self, reg: RegisterId, ea: u16) {
        self.write_register(reg, ea as i32);
        self.cc.z = false;
        self.cc.set_z16(ea as i32);
    }

    /// LEAS/LEAU (0x32, 0x33): load the effective address. No flags.
    pub(crate) fn op_lea_pointer(&mut self, reg: RegisterId, ea: u16) {
        self.write_register(reg, ea as i32);
    }
}
