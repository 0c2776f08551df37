/// Byte-addressed 64KB memory interface seen by the CPU.
///
/// Words are big-endian: the high byte lives at `addr`, the low byte at
/// `addr + 1` (wrapping at 0xFFFF). Implementations may intercept any
/// address for memory-mapped I/O; the CPU treats every access the same way.
pub trait Bus {
    fn read_byte(&mut self, addr: u16) -> u8;
    fn write_byte(&mut self, addr: u16, value: u8);

    fn read_word(&mut self, addr: u16) -> u16 {
        let hi = self.read_byte(addr);
        let lo = self.read_byte(addr.wrapping_add(1));
        u16::from_be_bytes([hi, lo])
    }

    fn write_word(&mut self, addr: u16, value: u16) {
        let [hi, lo] = value.to_be_bytes();
        self.write_byte(addr, hi);
        self.write_byte(addr.wrapping_add(1), lo);
    }

    /// Interrupt lines currently asserted by devices on the bus.
    /// Polled by the CPU at every instruction boundary.
    fn check_interrupts(&self) -> InterruptState {
        InterruptState::default()
    }
}

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct InterruptState {
    pub nmi: bool,
    pub irq: bool,
    pub firq: bool,
}

impl InterruptState {
    pub fn any(&self) -> bool {
        self.nmi || self.irq || self.firq
    }

    pub(crate) fn merge(self, other: InterruptState) -> InterruptState {
        InterruptState {
            nmi: self.nmi || other.nmi,
            irq: self.irq || other.irq,
            firq: self.firq || other.firq,
        }
    }
}
