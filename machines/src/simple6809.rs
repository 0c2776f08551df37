use log::info;
use mc6809_core::core::bus::InterruptState;
use mc6809_core::core::{Machine, MachineConfig, MachineState, Memory};
use mc6809_core::cpu::{Cpu, CpuError, M6809};

use crate::rom_loader::{RomImage, RomLoadError};

/// 1 MHz CPU, 60 Hz frame
pub const CYCLES_PER_FRAME: u64 = 16_667;

/// A bare 6809 board: RAM and ROM as the config maps them (32K each by
/// default), no peripherals. An IRQ is raised at the start of every frame.
pub struct Simple6809 {
    machine: Machine<Memory>,
    rom_start: u16,
}

impl Default for Simple6809 {
    fn default() -> Self {
        Self::new()
    }
}

impl Simple6809 {
    pub fn new() -> Self {
        Self::from_config(&MachineConfig::default())
    }

    pub fn from_config(config: &MachineConfig) -> Self {
        let memory = Memory::new(&config.memory);
        let rom_start = config.memory.rom.map_or(0x8000, |rom| rom.start);
        Self {
            machine: Machine::from_config(memory, config),
            rom_start,
        }
    }

    /// Place a ROM image at the start of the ROM region.
    pub fn load_rom(&mut self, image: &RomImage) -> Result<(), RomLoadError> {
        self.load_image(image, self.rom_start)
    }

    /// Place any image (code or data) at `addr`.
    pub fn load_image(&mut self, image: &RomImage, addr: u16) -> Result<(), RomLoadError> {
        image.load_into(&mut self.machine.bus, addr)
    }

    pub fn reset(&mut self) {
        self.machine.reset();
        info!("reset to ${:04x}", self.machine.cpu.pc.value());
    }

    /// Run one frame's worth of cycles, raising IRQ first.
    pub fn run_frame(&mut self) -> Result<(), CpuError> {
        self.machine.cpu.signal_interrupt(InterruptState {
            irq: true,
            ..Default::default()
        });
        let target = self.machine.cycles() + CYCLES_PER_FRAME;
        while self.machine.cycles() < target && !self.machine.cpu.is_halted() {
            self.machine.cpu.step(&mut self.machine.bus)?;
        }
        Ok(())
    }

    pub fn cpu(&self) -> &M6809 {
        &self.machine.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut M6809 {
        &mut self.machine.cpu
    }

    pub fn machine(&self) -> &Machine<Memory> {
        &self.machine
    }

    pub fn machine_mut(&mut self) -> &mut Machine<Memory> {
        &mut self.machine
    }

    pub fn save_state(&self) -> MachineState {
        self.machine.get_state()
    }

    pub fn load_state(&mut self, state: &MachineState) {
        self.machine.set_state(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mc6809_core::core::Bus;
    use mc6809_core::cpu::m6809::{IRQ_VECTOR, RESET_VECTOR};

    /// ROM image for 0x8000-0xFFFF: main loop at 0x8000 counting frames in
    /// RAM from an IRQ handler at 0x8010.
    fn frame_counter_rom() -> RomImage {
        let mut rom = vec![0u8; 0x8000];
        rom[0x0000..0x0008].copy_from_slice(&[
            0x10, 0xCE, 0x7F, 0x00, // LDS #$7F00
            0x1C, 0xEF, // ANDCC #$EF (enable IRQ)
            0x20, 0xFE, // BRA *
        ]);
        rom[0x0010..0x0014].copy_from_slice(&[
            0x7C, 0x00, 0x40, // INC $0040
            0x3B, // RTI
        ]);
        let irq = (IRQ_VECTOR - 0x8000) as usize;
        rom[irq..irq + 2].copy_from_slice(&[0x80, 0x10]);
        let reset = (RESET_VECTOR - 0x8000) as usize;
        rom[reset..reset + 2].copy_from_slice(&[0x80, 0x00]);
        RomImage::from_bytes("counter.rom", &rom)
    }

    #[test]
    fn test_reset_from_rom() {
        let mut system = Simple6809::new();
        system.load_rom(&frame_counter_rom()).unwrap();
        system.reset();
        assert_eq!(system.cpu().pc.value(), 0x8000);
        assert!(system.cpu().cc.i && system.cpu().cc.f);
    }

    #[test]
    fn test_frame_irq_counts() {
        let mut system = Simple6809::new();
        system.load_rom(&frame_counter_rom()).unwrap();
        system.reset();
        for _ in 0..3 {
            system.run_frame().unwrap();
        }
        // First frame's IRQ arrives while still masked and stays latched
        assert_eq!(system.machine_mut().bus.read_byte(0x0040), 3);
        assert!(system.machine().cycles() >= 3 * CYCLES_PER_FRAME);
    }

    #[test]
    fn test_rom_is_read_only_to_the_cpu() {
        let mut system = Simple6809::new();
        system.load_rom(&frame_counter_rom()).unwrap();
        system.machine_mut().bus.write_byte(0x8000, 0x00);
        assert_eq!(system.machine().bus.peek(0x8000), 0x10);
    }

    #[test]
    fn test_save_and_load_state() {
        let mut system = Simple6809::new();
        system.load_rom(&frame_counter_rom()).unwrap();
        system.reset();
        system.run_frame().unwrap();
        let saved = system.save_state();

        system.run_frame().unwrap();
        assert_ne!(system.save_state(), saved);
        system.load_state(&saved);
        assert_eq!(system.save_state(), saved);
    }
}
