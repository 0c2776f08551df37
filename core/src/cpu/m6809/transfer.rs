use super::{M6809, RegisterId, convert_width};

impl M6809 {
    /// Current value of any register, D included. 8-bit registers are
    /// zero-extended; the undefined register reads 0xFFFF.
    pub fn read_register(&self, id: RegisterId) -> u16 {
        match id {
            RegisterId::D => self.d(),
            RegisterId::X => self.x.value(),
            RegisterId::Y => self.y.value(),
            RegisterId::U => self.u.value(),
            RegisterId::S => self.s.value(),
            RegisterId::PC => self.pc.value(),
            RegisterId::A => self.a.value() as u16,
            RegisterId::B => self.b.value() as u16,
            RegisterId::CC => self.cc.get() as u16,
            RegisterId::DP => self.dp.value() as u16,
            RegisterId::Undefined => self.undefined.value(),
        }
    }

    /// Store into any register, wrapping to its width.
    pub fn write_register(&mut self, id: RegisterId, value: i32) {
        match id {
            RegisterId::D => self.set_d(value),
            RegisterId::X => self.x.set(value),
            RegisterId::Y => self.y.set(value),
            RegisterId::U => self.u.set(value),
            RegisterId::S => self.s.set(value),
            RegisterId::PC => self.pc.set(value),
            RegisterId::A => self.a.set(value),
            RegisterId::B => self.b.set(value),
            RegisterId::CC => self.cc.set(value.rem_euclid(0x100) as u8),
            RegisterId::DP => self.dp.set(value),
            RegisterId::Undefined => self.undefined.set(value),
        }
    }

    /// TFR immediate (0x1F): copy R1 (high nibble) into R2 (low nibble).
    /// Mixed widths go through `convert_width`.
    pub(crate) fn op_tfr(&mut self, m: u8) {
        let src = RegisterId::from_nibble(m >> 4);
        let dst = RegisterId::from_nibble(m);
        let value = convert_width(self.read_register(src), src, dst);
        self.write_register(dst, value as i32);
    }

    /// EXG immediate (0x1E): swap R1 and R2. Both are read before either
    /// is written.
    pub(crate) fn op_exg(&mut self, m: u8) {
        let r1 = RegisterId::from_nibble(m >> 4);
        let r2 = RegisterId::from_nibble(m);
        let v1 = self.read_register(r1);
        let v2 = self.read_register(r2);
        self.write_register(r1, convert_width(v2, r2, r1) as i32);
        self.write_register(r2, convert_width(v1, r1, r2) as i32);
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu::m6809::{M6809, RegisterId};

    #[test]
    fn test_tfr_same_width() {
        let mut cpu = M6809::new();
        cpu.x.set(0xBEEF);
        cpu.op_tfr(0x12); // X -> Y
        assert_eq!(cpu.y.value(), 0xBEEF);

        cpu.a.set(0x42);
        cpu.op_tfr(0x8B); // A -> DP
        assert_eq!(cpu.dp.value(), 0x42);
    }

    #[test]
    fn test_tfr_mixed_width() {
        let mut cpu = M6809::new();
        cpu.a.set(0x80);
        cpu.op_tfr(0x81); // A -> X sign-extends
        assert_eq!(cpu.x.value(), 0xFF80);

        cpu.x.set(0x1234);
        cpu.op_tfr(0x19); // X -> B keeps the low byte
        assert_eq!(cpu.b.value(), 0x34);
    }

    #[test]
    fn test_tfr_undefined_source_and_destination() {
        let mut cpu = M6809::new();
        cpu.op_tfr(0x61); // undefined -> X
        assert_eq!(cpu.x.value(), 0xFFFF);

        cpu.a.set(0x11);
        cpu.op_tfr(0x8F); // A -> undefined, dropped
        assert_eq!(cpu.read_register(RegisterId::Undefined), 0xFFFF);
        assert_eq!(cpu.a.value(), 0x11);
    }

    #[test]
    fn test_exg_reads_both_first() {
        let mut cpu = M6809::new();
        cpu.set_d(0x1234);
        cpu.x.set(0xABCD);
        cpu.op_exg(0x01); // D <-> X
        assert_eq!(cpu.d(), 0xABCD);
        assert_eq!(cpu.x.value(), 0x1234);

        cpu.a.set(0x01);
        cpu.b.set(0x02);
        cpu.op_exg(0x89); // A <-> B
        assert_eq!(cpu.a.value(), 0x02);
        assert_eq!(cpu.b.value(), 0x01);
    }

    #[test]
    fn test_tfr_into_cc() {
        let mut cpu = M6809::new();
        cpu.b.set(0xA5);
        cpu.op_tfr(0x9A); // B -> CC
        assert_eq!(cpu.cc.get(), 0xA5);
        assert!(cpu.cc.e && cpu.cc.h && cpu.cc.z && cpu.cc.c);
    }
}
