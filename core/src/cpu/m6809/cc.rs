//! Condition code register.
//!
//! The `set_*` primitives are monotonic: they only ever raise a flag. Every
//! instruction clears the flags it owns with a `clear_*` group first and
//! then calls the matching `update_*` helper. Operands and results are
//! passed as `i32` so the raw, unmasked result (carry in bit 8/16, negative
//! after a subtract) is still visible to the flag logic.

use std::fmt;

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CcFlag {
    C = 0x01, // Carry
    V = 0x02, // Overflow
    Z = 0x04, // Zero
    N = 0x08, // Negative
    I = 0x10, // IRQ mask
    H = 0x20, // Half carry
    F = 0x40, // FIRQ mask
    E = 0x80, // Entire
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConditionCodes {
    pub e: bool,
    pub f: bool,
    pub h: bool,
    pub i: bool,
    pub n: bool,
    pub z: bool,
    pub v: bool,
    pub c: bool,
}

impl ConditionCodes {
    pub const fn from_byte(status: u8) -> Self {
        Self {
            e: status & CcFlag::E as u8 != 0,
            f: status & CcFlag::F as u8 != 0,
            h: status & CcFlag::H as u8 != 0,
            i: status & CcFlag::I as u8 != 0,
            n: status & CcFlag::N as u8 != 0,
            z: status & CcFlag::Z as u8 != 0,
            v: status & CcFlag::V as u8 != 0,
            c: status & CcFlag::C as u8 != 0,
        }
    }

    /// Packed value, bit 7 = E ... bit 0 = C.
    #[inline]
    pub fn get(&self) -> u8 {
        (self.c as u8)
            | (self.v as u8) << 1
            | (self.z as u8) << 2
            | (self.n as u8) << 3
            | (self.i as u8) << 4
            | (self.h as u8) << 5
            | (self.f as u8) << 6
            | (self.e as u8) << 7
    }

    #[inline]
    pub fn set(&mut self, status: u8) {
        *self = Self::from_byte(status);
    }

    pub fn is_set(&self, flag: CcFlag) -> bool {
        self.get() & flag as u8 != 0
    }

    pub fn set_flag(&mut self, flag: CcFlag, set: bool) {
        let status = if set {
            self.get() | flag as u8
        } else {
            self.get() & !(flag as u8)
        };
        self.set(status);
    }

    // --- monotonic setters ---

    #[inline]
    pub fn set_h(&mut self, a: i32, b: i32, r: i32) {
        if !self.h && (a ^ b ^ r) & 0x10 != 0 {
            self.h = true;
        }
    }

    #[inline]
    pub fn set_z8(&mut self, r: i32) {
        if !self.z && r & 0xFF == 0 {
            self.z = true;
        }
    }

    #[inline]
    pub fn set_z16(&mut self, r: i32) {
        if !self.z && r & 0xFFFF == 0 {
            self.z = true;
        }
    }

    #[inline]
    pub fn set_n8(&mut self, r: i32) {
        if !self.n && r & 0x80 != 0 {
            self.n = true;
        }
    }

    #[inline]
    pub fn set_n16(&mut self, r: i32) {
        if !self.n && r & 0x8000 != 0 {
            self.n = true;
        }
    }

    #[inline]
    pub fn set_c8(&mut self, r: i32) {
        if !self.c && r & 0x100 != 0 {
            self.c = true;
        }
    }

    #[inline]
    pub fn set_c16(&mut self, r: i32) {
        if !self.c && r & 0x10000 != 0 {
            self.c = true;
        }
    }

    #[inline]
    pub fn set_v8(&mut self, a: i32, b: i32, r: i32) {
        if !self.v && (a ^ b ^ r ^ (r >> 1)) & 0x80 != 0 {
            self.v = true;
        }
    }

    #[inline]
    pub fn set_v16(&mut self, a: i32, b: i32, r: i32) {
        if !self.v && (a ^ b ^ r ^ (r >> 1)) & 0x8000 != 0 {
            self.v = true;
        }
    }

    // --- clear groups ---

    #[inline]
    pub fn clear_nz(&mut self) {
        self.n = false;
        self.z = false;
    }

    #[inline]
    pub fn clear_nzc(&mut self) {
        self.clear_nz();
        self.c = false;
    }

    #[inline]
    pub fn clear_nzv(&mut self) {
        self.clear_nz();
        self.v = false;
    }

    #[inline]
    pub fn clear_nzvc(&mut self) {
        self.clear_nzv();
        self.c = false;
    }

    #[inline]
    pub fn clear_hnzvc(&mut self) {
        self.clear_nzvc();
        self.h = false;
    }

    // --- update helpers ---

    pub fn update_nz_8(&mut self, r: i32) {
        self.set_n8(r);
        self.set_z8(r);
    }

    pub fn update_nz_16(&mut self, r: i32) {
        self.set_n16(r);
        self.set_z16(r);
    }

    /// CLR pattern: N=0 Z=1 V=0 C=0.
    pub fn update_0100(&mut self) {
        self.n = false;
        self.z = true;
        self.v = false;
        self.c = false;
    }

    /// COM pattern: N/Z from the result, V=0 C=1.
    pub fn update_nz01_8(&mut self, r: i32) {
        self.update_nz_8(r);
        self.v = false;
        self.c = true;
    }

    pub fn update_nz0_8(&mut self, r: i32) {
        self.update_nz_8(r);
        self.v = false;
    }

    pub fn update_nz0_16(&mut self, r: i32) {
        self.update_nz_16(r);
        self.v = false;
    }

    pub fn update_nzc_8(&mut self, r: i32) {
        self.update_nz_8(r);
        self.set_c8(r);
    }

    pub fn update_nzvc_8(&mut self, a: i32, b: i32, r: i32) {
        self.update_nz_8(r);
        self.set_v8(a, b, r);
        self.set_c8(r);
    }

    pub fn update_nzvc_16(&mut self, a: i32, b: i32, r: i32) {
        self.update_nz_16(r);
        self.set_v16(a, b, r);
        self.set_c16(r);
    }

    pub fn update_hnzvc_8(&mut self, a: i32, b: i32, r: i32) {
        self.set_h(a, b, r);
        self.update_nzvc_8(a, b, r);
    }
}

/// Flags as text, e.g. `E.H....C` (a dot for every clear bit).
impl fmt::Display for ConditionCodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = self.get();
        for (bit, name) in (0..8).rev().zip("EFHINZVC".chars()) {
            let c = if status & (1 << bit) != 0 { name } else { '.' };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
