//! Flat 64KB memory image with RAM/ROM regions and per-address
//! interception (callbacks and middleware) for memory-mapped I/O.

use std::ops::RangeInclusive;

use log::warn;

use super::bus::Bus;
use super::config::{AddressRange, MemoryConfig};

const MEMORY_SIZE: usize = 0x10000;

/// Replaces the storage read entirely.
pub type ReadCallback = Box<dyn FnMut(u16) -> u8>;
/// Sees the stored value and returns the value the CPU gets.
pub type ReadMiddleware = Box<dyn FnMut(u16, u8) -> u8>;
/// Replaces the storage write entirely.
pub type WriteCallback = Box<dyn FnMut(u16, u8)>;
/// Transforms the value before it is stored.
pub type WriteMiddleware = Box<dyn FnMut(u16, u8) -> u8>;

struct Hook<F> {
    range: AddressRange,
    func: F,
}

fn hook_range(range: RangeInclusive<u16>) -> AddressRange {
    assert!(
        range.start() <= range.end(),
        "inverted hook range ${:04X}..=${:04X}",
        range.start(),
        range.end()
    );
    AddressRange::new(*range.start(), *range.end())
}

pub struct Memory {
    data: Vec<u8>,
    ram: AddressRange,
    rom: Option<AddressRange>,
    read_callbacks: Vec<Hook<ReadCallback>>,
    read_middleware: Vec<Hook<ReadMiddleware>>,
    write_callbacks: Vec<Hook<WriteCallback>>,
    write_middleware: Vec<Hook<WriteMiddleware>>,
}

impl Memory {
    pub fn new(config: &MemoryConfig) -> Self {
        Self {
            data: vec![0; MEMORY_SIZE],
            ram: config.ram,
            rom: config.rom,
            read_callbacks: Vec::new(),
            read_middleware: Vec::new(),
            write_callbacks: Vec::new(),
            write_middleware: Vec::new(),
        }
    }

    #[inline]
    fn is_rom(&self, addr: u16) -> bool {
        self.rom.is_some_and(|rom| rom.contains(addr))
    }

    #[inline]
    fn is_mapped(&self, addr: u16) -> bool {
        self.ram.contains(addr) || self.is_rom(addr)
    }

    /// Host-side bulk load. Bypasses ROM protection and hooks.
    ///
    /// Panics if `data` runs past 0xFFFF: that is a bug in the caller,
    /// not something guest code can trigger.
    pub fn load(&mut self, addr: u16, data: &[u8]) {
        let start = addr as usize;
        let end = start + data.len();
        assert!(
            end <= MEMORY_SIZE,
            "load of {} bytes at ${:04X} overruns the address space",
            data.len(),
            addr
        );
        self.data[start..end].copy_from_slice(data);
    }

    /// Raw stored byte, without hooks or mapping checks.
    pub fn peek(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    /// The full 64KB image, for snapshots.
    pub fn image(&self) -> &[u8] {
        &self.data
    }

    /// Replace the full image. Panics unless exactly 64KB are given.
    pub fn restore_image(&mut self, image: &[u8]) {
        assert_eq!(
            image.len(),
            MEMORY_SIZE,
            "memory image must be exactly 64KB"
        );
        self.data.copy_from_slice(image);
    }

    pub fn add_read_byte_callback(
        &mut self,
        range: RangeInclusive<u16>,
        callback: impl FnMut(u16) -> u8 + 'static,
    ) {
        self.read_callbacks.push(Hook {
            range: hook_range(range),
            func: Box::new(callback),
        });
    }

    pub fn add_read_byte_middleware(
        &mut self,
        range: RangeInclusive<u16>,
        middleware: impl FnMut(u16, u8) -> u8 + 'static,
    ) {
        self.read_middleware.push(Hook {
            range: hook_range(range),
            func: Box::new(middleware),
        });
    }

    pub fn add_write_byte_callback(
        &mut self,
        range: RangeInclusive<u16>,
        callback: impl FnMut(u16, u8) + 'static,
    ) {
        self.write_callbacks.push(Hook {
            range: hook_range(range),
            func: Box::new(callback),
        });
    }

    pub fn add_write_byte_middleware(
        &mut self,
        range: RangeInclusive<u16>,
        middleware: impl FnMut(u16, u8) -> u8 + 'static,
    ) {
        self.write_middleware.push(Hook {
            range: hook_range(range),
            func: Box::new(middleware),
        });
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new(&MemoryConfig::default())
    }
}

impl Bus for Memory {
    fn read_byte(&mut self, addr: u16) -> u8 {
        if let Some(hook) = self
            .read_callbacks
            .iter_mut()
            .find(|hook| hook.range.contains(addr))
        {
            return (hook.func)(addr);
        }

        let mut value = if self.is_mapped(addr) {
            self.data[addr as usize]
        } else {
            warn!("read from unmapped address ${addr:04X} returns $00");
            0
        };

        for hook in self
            .read_middleware
            .iter_mut()
            .filter(|hook| hook.range.contains(addr))
        {
            value = (hook.func)(addr, value);
        }
        value
    }

    fn write_byte(&mut self, addr: u16, value: u8) {
        let mut value = value;
        for hook in self
            .write_middleware
            .iter_mut()
            .filter(|hook| hook.range.contains(addr))
        {
            value = (hook.func)(addr, value);
        }

        if let Some(hook) = self
            .write_callbacks
            .iter_mut()
            .find(|hook| hook.range.contains(addr))
        {
            (hook.func)(addr, value);
            return;
        }

        if self.is_rom(addr) {
            warn!("write ${value:02X} to ROM address ${addr:04X} ignored");
            return;
        }
        if !self.ram.contains(addr) {
            warn!("write ${value:02X} to unmapped address ${addr:04X} ignored");
            return;
        }
        self.data[addr as usize] = value;
    }
}
