//! ROM image loading and validation.
//!
//! An image is a raw binary read from disk or handed over as bytes. Before
//! it is placed in memory it can be checked against an expected size and a
//! list of accepted CRC-32 values; placement itself refuses images that
//! would run past the top of the address space.

use std::path::Path;

use log::debug;
use mc6809_core::core::Memory;
use thiserror::Error;

// ---------------------------------------------------------------------------
// CRC-32
// ---------------------------------------------------------------------------

/// CRC-32 lookup table (reflected polynomial 0xEDB88320), as used by ZIP.
const CRC32_TABLE: [u32; 256] = {
    let mut table = [0u32; 256];
    let mut i = 0u32;
    while i < 256 {
        let mut crc = i;
        let mut j = 0;
        while j < 8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ 0xEDB8_8320;
            } else {
                crc >>= 1;
            }
            j += 1;
        }
        table[i as usize] = crc;
        i += 1;
    }
    table
};

/// ZIP CRC-32 of a byte slice. Also the host-side reference for the 6809
/// CRC-32 program.
pub fn crc32(data: &[u8]) -> u32 {
    let crc = data.iter().fold(0xFFFF_FFFFu32, |crc, &byte| {
        let index = ((crc ^ byte as u32) & 0xFF) as usize;
        (crc >> 8) ^ CRC32_TABLE[index]
    });
    crc ^ 0xFFFF_FFFF
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum RomLoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ROM {file}: expected {expected} bytes, got {actual}")]
    SizeMismatch {
        file: String,
        expected: usize,
        actual: usize,
    },

    #[error("ROM {file}: CRC32 expected 0x{expected:08X}, got 0x{actual:08X}")]
    ChecksumMismatch {
        file: String,
        expected: u32,
        actual: u32,
    },

    #[error("ROM {file}: {len} bytes at ${addr:04X} run past $FFFF")]
    DoesNotFit { file: String, addr: u16, len: usize },
}

// ---------------------------------------------------------------------------
// RomImage
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomImage {
    name: String,
    data: Vec<u8>,
}

impl RomImage {
    /// Read a raw binary. The image is named after the file.
    pub fn from_file(path: &Path) -> Result<Self, RomLoadError> {
        let data = std::fs::read(path)?;
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        debug!("read {} bytes from {}", data.len(), path.display());
        Ok(Self { name, data })
    }

    pub fn from_bytes(name: &str, data: &[u8]) -> Self {
        Self {
            name: name.to_string(),
            data: data.to_vec(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn crc32(&self) -> u32 {
        crc32(&self.data)
    }

    pub fn require_size(&self, expected: usize) -> Result<(), RomLoadError> {
        if self.data.len() != expected {
            return Err(RomLoadError::SizeMismatch {
                file: self.name.clone(),
                expected,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    /// Accept the image if its CRC-32 matches any of `accepted`. An empty
    /// list accepts everything.
    pub fn verify_crc32(&self, accepted: &[u32]) -> Result<(), RomLoadError> {
        let Some(&first) = accepted.first() else {
            return Ok(());
        };
        let actual = self.crc32();
        if accepted.contains(&actual) {
            Ok(())
        } else {
            Err(RomLoadError::ChecksumMismatch {
                file: self.name.clone(),
                expected: first,
                actual,
            })
        }
    }

    /// Copy the image into `memory` at `addr`, bypassing ROM protection.
    pub fn load_into(&self, memory: &mut Memory, addr: u16) -> Result<(), RomLoadError> {
        if addr as usize + self.data.len() > 0x10000 {
            return Err(RomLoadError::DoesNotFit {
                file: self.name.clone(),
                addr,
                len: self.data.len(),
            });
        }
        memory.load(addr, &self.data);
        debug!(
            "loaded {} ({} bytes) at ${addr:04X}, crc32 {:08X}",
            self.name,
            self.data.len(),
            self.crc32()
        );
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
