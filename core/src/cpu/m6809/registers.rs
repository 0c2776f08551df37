//! Register cells and register identities used by TFR/EXG and the
//! opcode table.
//!
//! Registers never reject a value: anything assigned is reduced modulo
//! 2^width, matching the truncation the hardware applies.

use std::fmt;

use log::warn;
use serde::{Deserialize, Serialize};

/// 8-bit register cell (A, B, DP).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Register8 {
    value: u8,
}

impl Register8 {
    pub const WIDTH: u32 = 8;

    pub const fn new(value: u8) -> Self {
        Self { value }
    }

    #[inline]
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Store `value mod 256`; negative values wrap from the top.
    #[inline]
    pub fn set(&mut self, value: i32) {
        self.value = value.rem_euclid(0x100) as u8;
    }

    #[inline]
    pub fn increment(&mut self, n: i32) {
        self.set(self.value as i32 + n);
    }

    #[inline]
    pub fn decrement(&mut self, n: i32) {
        self.set(self.value as i32 - n);
    }
}

/// 16-bit register cell (X, Y, U, S, PC).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Register16 {
    value: u16,
}

impl Register16 {
    pub const WIDTH: u32 = 16;

    pub const fn new(value: u16) -> Self {
        Self { value }
    }

    #[inline]
    pub fn value(&self) -> u16 {
        self.value
    }

    /// Store `value mod 65536`; negative values wrap from the top.
    #[inline]
    pub fn set(&mut self, value: i32) {
        self.value = value.rem_euclid(0x10000) as u16;
    }

    #[inline]
    pub fn increment(&mut self, n: i32) {
        self.set(self.value as i32 + n);
    }

    #[inline]
    pub fn decrement(&mut self, n: i32) {
        self.set(self.value as i32 - n);
    }
}

/// Target of illegal TFR/EXG register codes. Reads as 0xFFFF, drops writes.
#[derive(Clone, Copy, Debug, Default)]
pub struct UndefinedRegister;

impl UndefinedRegister {
    pub const VALUE: u16 = 0xFFFF;

    pub fn value(&self) -> u16 {
        Self::VALUE
    }

    pub fn set(&self, value: i32) {
        warn!("write ${value:04X} to undefined register ignored");
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegisterId {
    D,
    X,
    Y,
    U,
    S,
    PC,
    A,
    B,
    CC,
    DP,
    Undefined,
}

impl RegisterId {
    /// TFR/EXG post-byte nibble mapping.
    pub const fn from_nibble(nibble: u8) -> Self {
        match nibble & 0x0F {
            0x0 => RegisterId::D,
            0x1 => RegisterId::X,
            0x2 => RegisterId::Y,
            0x3 => RegisterId::U,
            0x4 => RegisterId::S,
            0x5 => RegisterId::PC,
            0x8 => RegisterId::A,
            0x9 => RegisterId::B,
            0xA => RegisterId::CC,
            0xB => RegisterId::DP,
            _ => RegisterId::Undefined,
        }
    }

    /// Index register selected by bits 5-6 of an indexed post-byte.
    pub const fn from_index_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => RegisterId::X,
            1 => RegisterId::Y,
            2 => RegisterId::U,
            _ => RegisterId::S,
        }
    }

    pub const fn width(self) -> u32 {
        match self {
            RegisterId::A | RegisterId::B | RegisterId::CC | RegisterId::DP => 8,
            _ => 16,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            RegisterId::D => "D",
            RegisterId::X => "X",
            RegisterId::Y => "Y",
            RegisterId::U => "U",
            RegisterId::S => "S",
            RegisterId::PC => "PC",
            RegisterId::A => "A",
            RegisterId::B => "B",
            RegisterId::CC => "CC",
            RegisterId::DP => "DP",
            RegisterId::Undefined => "undefined",
        }
    }
}

impl fmt::Display for RegisterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Convert a value read from `src` for storage in `dst`.
///
/// 8 -> 16 sign-extends from bit 7 (0xFF00 prefix), 16 -> 8 keeps the low
/// byte. Not yet confirmed against real silicon for the mixed-width cases.
pub fn convert_width(value: u16, src: RegisterId, dst: RegisterId) -> u16 {
    match (src.width(), dst.width()) {
        (8, 16) => {
            if value & 0x80 != 0 {
                0xFF00 | (value & 0xFF)
            } else {
                value & 0xFF
            }
        }
        (16, 8) => value & 0xFF,
        _ => value,
    }
}
