//! Checksum routines in 6809 machine code.
//!
//! Both programs run over a buffer at [`DATA_ADDRESS`] with X pointing one
//! past its last byte, so they exercise indexed auto-increment, 16-bit
//! compares, register exchange and shifts through carry. They back the
//! CPU regression tests and the `benchmark` command.

use log::debug;
use mc6809_core::core::{Machine, Memory};
use mc6809_core::cpu::CpuError;
use thiserror::Error;

pub const PROGRAM_ADDRESS: u16 = 0x0100;
pub const DATA_ADDRESS: u16 = 0x1000;
/// Programs set S here; the buffer must end below the two bytes they push.
const STACK_TOP: u16 = 0x4000;
pub const MAX_DATA_LEN: usize = (STACK_TOP - DATA_ADDRESS) as usize - 0x100;

/// The 100 printable ASCII characters, digits first. Benchmark input.
pub const PRINTABLE: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~ \t\n\r\x0b\x0c";

/// Worst case per data byte is well under this many instructions.
const OPS_PER_BYTE: u64 = 200;

#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("checksum input is empty")]
    Empty,

    #[error("checksum input of {len} bytes exceeds {max}")]
    TooLong { len: usize, max: usize },

    #[error(transparent)]
    Cpu(#[from] CpuError),
}

/// ZIP CRC-32, reflected polynomial 0xEDB88320, kept as D (low word) and X
/// (high word). Origin code by Johann E. Klasek.
pub fn crc32_program(data_address: u16) -> Vec<u8> {
    let [hi, lo] = data_address.to_be_bytes();
    vec![
        0x10, 0xCE, 0x40, 0x00, // 0100       LDS   #$4000
        0xCE, hi, lo, //           0104       LDU   #data
        0x34, 0x10, //             0107       PSHS  X          ; end address
        0xCC, 0xFF, 0xFF, //       0109       LDD   #$FFFF
        0xDD, 0x82, //             010C       STD   <$82
        0x8E, 0xFF, 0xFF, //       010E       LDX   #$FFFF
        0x9F, 0x80, //             0111       STX   <$80
        0xE8, 0xC0, //             0113 BL    EORB  ,U+
        0x10, 0x8E, 0x00, 0x08, // 0115       LDY   #8
        0x1E, 0x01, //             0119 RL    EXG   D,X
        0x44, //                   011B RL1   LSRA
        0x56, //                   011C       RORB
        0x1E, 0x01, //             011D       EXG   D,X
        0x46, //                   011F       RORA
        0x56, //                   0120       RORB
        0x24, 0x12, //             0121       BCC   CL
        0x88, 0x83, //             0123       EORA  #$83
        0xC8, 0x20, //             0125       EORB  #$20
        0x1E, 0x01, //             0127       EXG   D,X
        0x88, 0xED, //             0129       EORA  #$ED
        0xC8, 0xB8, //             012B       EORB  #$B8
        0x31, 0x3F, //             012D       LEAY  -1,Y
        0x26, 0xEA, //             012F       BNE   RL1
        0x1E, 0x01, //             0131       EXG   D,X
        0x27, 0x04, //             0133       BEQ   EL
        0x31, 0x3F, //             0135 CL    LEAY  -1,Y
        0x26, 0xE0, //             0137       BNE   RL
        0x11, 0xA3, 0xE4, //       0139 EL    CMPU  ,S
        0x26, 0xD5, //             013C       BNE   BL
        0xDD, 0x82, //             013E       STD   <$82
        0x9F, 0x80, //             0140       STX   <$80
    ] //                           0142
}

/// CRC-16/CCITT (polynomial 0x1021, initial value 0xFFFF, MSB first), kept
/// in D.
pub fn crc16_program(data_address: u16) -> Vec<u8> {
    let [hi, lo] = data_address.to_be_bytes();
    vec![
        0x10, 0xCE, 0x40, 0x00, // 0100       LDS   #$4000
        0xCE, hi, lo, //           0104       LDU   #data
        0x34, 0x10, //             0107       PSHS  X          ; end address
        0xCC, 0xFF, 0xFF, //       0109       LDD   #$FFFF
        0xA8, 0xC0, //             010C BL    EORA  ,U+
        0x10, 0x8E, 0x00, 0x08, // 010E       LDY   #8
        0x58, //                   0112 RL    LSLB
        0x49, //                   0113       ROLA
        0x24, 0x04, //             0114       BCC   CL
        0x88, 0x10, //             0116       EORA  #$10
        0xC8, 0x21, //             0118       EORB  #$21
        0x31, 0x3F, //             011A CL    LEAY  -1,Y
        0x26, 0xF4, //             011C       BNE   RL
        0x11, 0xA3, 0xE4, //       011E       CMPU  ,S
        0x26, 0xE9, //             0121       BNE   BL
    ] //                           0123
}

/// Host-side CRC-16/CCITT matching [`crc16_program`].
pub fn crc16(data: &[u8]) -> u16 {
    data.iter().fold(0xFFFF, |crc, &byte| {
        let mut crc = crc ^ ((byte as u16) << 8);
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ 0x1021
            } else {
                crc << 1
            };
        }
        crc
    })
}

/// Load `program` and `data`, then run until PC passes the program's last
/// byte. The step budget scales with the input length.
fn run_checksum(
    machine: &mut Machine<Memory>,
    program: &[u8],
    data: &[u8],
) -> Result<(), ProgramError> {
    if data.is_empty() {
        return Err(ProgramError::Empty);
    }
    if data.len() > MAX_DATA_LEN {
        return Err(ProgramError::TooLong {
            len: data.len(),
            max: MAX_DATA_LEN,
        });
    }
    machine.bus.load(DATA_ADDRESS, data);
    machine.bus.load(PROGRAM_ADDRESS, program);
    machine.cpu.x.set(DATA_ADDRESS as i32 + data.len() as i32);

    let end = PROGRAM_ADDRESS + program.len() as u16;
    let max_ops = OPS_PER_BYTE * data.len() as u64 + 100;
    machine.test_run(PROGRAM_ADDRESS, end, max_ops)?;
    Ok(())
}

/// Compute the ZIP CRC-32 of `data` on the emulated CPU.
pub fn run_crc32(machine: &mut Machine<Memory>, data: &[u8]) -> Result<u32, ProgramError> {
    run_checksum(machine, &crc32_program(DATA_ADDRESS), data)?;
    let raw = ((machine.cpu.x.value() as u32) << 16) | machine.cpu.d() as u32;
    let crc = raw ^ 0xFFFF_FFFF;
    debug!("6809 crc32 over {} bytes: {crc:08X}", data.len());
    Ok(crc)
}

/// Compute the CRC-16/CCITT of `data` on the emulated CPU.
pub fn run_crc16(machine: &mut Machine<Memory>, data: &[u8]) -> Result<u16, ProgramError> {
    run_checksum(machine, &crc16_program(DATA_ADDRESS), data)?;
    let crc = machine.cpu.d();
    debug!("6809 crc16 over {} bytes: {crc:04X}", data.len());
    Ok(crc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_lengths_match_listings() {
        assert_eq!(crc32_program(DATA_ADDRESS).len(), 0x42);
        assert_eq!(crc16_program(DATA_ADDRESS).len(), 0x23);
    }

    #[test]
    fn test_printable_is_one_hundred_bytes() {
        assert_eq!(PRINTABLE.len(), 100);
    }

    #[test]
    fn test_host_crc16_check_value() {
        assert_eq!(crc16(b"123456789"), 0x29B1);
    }

    #[test]
    fn test_data_address_is_patched_in() {
        let program = crc16_program(0x1234);
        assert_eq!(&program[4..7], &[0xCE, 0x12, 0x34]);
    }
}
