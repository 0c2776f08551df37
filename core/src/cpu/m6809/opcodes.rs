//! Static opcode metadata.
//!
//! One descriptor per opcode, including the page 2 (0x10xx) and page 3
//! (0x11xx) combined values. The dispatch table is built from this data
//! and the opcodes each instruction family claims; the two must agree
//! exactly (see `dispatch::DispatchTable::build`).

use super::registers::RegisterId::{self, A, B, CC, D, S, U, X, Y};

/// How an instruction locates its operand.
///
/// The word forms of immediate/direct/indexed/extended are not separate
/// modes here; the descriptor's read width decides whether one or two
/// bytes are fetched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddrMode {
    /// Page-select prefix byte (0x10, 0x11)
    Page,
    Inherent,
    Immediate,
    Direct,
    Extended,
    Indexed,
    Relative,
    RelativeWord,
}

/// Width of the memory access an instruction performs on its operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemWidth {
    NoAccess,
    Byte,
    Word,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpcodeDescriptor {
    pub opcode: u16,
    pub mnemonic: &'static str,
    pub mode: AddrMode,
    /// Instruction length in bytes, prefix included
    pub bytes: u8,
    /// Base cycle count; indexed modes add their own penalty on top
    pub cycles: u8,
    pub needs_ea: bool,
    pub register: Option<RegisterId>,
    pub read: MemWidth,
    pub write: MemWidth,
}

impl OpcodeDescriptor {
    pub const fn page(&self) -> u8 {
        (self.opcode >> 8) as u8
    }
}

const EA: bool = true;
const NO_EA: bool = false;

#[allow(clippy::too_many_arguments)]
const fn op(
    opcode: u16,
    mnemonic: &'static str,
    mode: AddrMode,
    bytes: u8,
    cycles: u8,
    needs_ea: bool,
    register: Option<RegisterId>,
    read: MemWidth,
    write: MemWidth,
) -> OpcodeDescriptor {
    OpcodeDescriptor {
        opcode,
        mnemonic,
        mode,
        bytes,
        cycles,
        needs_ea,
        register,
        read,
        write,
    }
}

use AddrMode::{Direct, Extended, Immediate, Indexed, Inherent, Page, Relative, RelativeWord};
use MemWidth::{Byte, NoAccess, Word};

/// Every documented opcode. The undocumented RESET (0x3E) is left out on
/// purpose and decodes as an unknown opcode.
pub static OPCODES: &[OpcodeDescriptor] = &[
    // ---- page 1 ----
    op(0x00, "NEG", Direct, 2, 6, EA, None, Byte, Byte),
    op(0x03, "COM", Direct, 2, 6, EA, None, Byte, Byte),
    op(0x04, "LSR", Direct, 2, 6, EA, None, Byte, Byte),
    op(0x06, "ROR", Direct, 2, 6, EA, None, Byte, Byte),
    op(0x07, "ASR", Direct, 2, 6, EA, None, Byte, Byte),
    op(0x08, "LSL", Direct, 2, 6, EA, None, Byte, Byte),
    op(0x09, "ROL", Direct, 2, 6, EA, None, Byte, Byte),
    op(0x0A, "DEC", Direct, 2, 6, EA, None, Byte, Byte),
    op(0x0C, "INC", Direct, 2, 6, EA, None, Byte, Byte),
    op(0x0D, "TST", Direct, 2, 6, NO_EA, None, Byte, NoAccess),
    op(0x0E, "JMP", Direct, 2, 3, EA, None, NoAccess, NoAccess),
    op(0x0F, "CLR", Direct, 2, 6, EA, None, NoAccess, Byte),
    op(0x10, "PAGE2", Page, 1, 1, NO_EA, None, NoAccess, NoAccess),
    op(0x11, "PAGE3", Page, 1, 1, NO_EA, None, NoAccess, NoAccess),
    op(0x12, "NOP", Inherent, 1, 2, NO_EA, None, NoAccess, NoAccess),
    op(0x13, "SYNC", Inherent, 1, 2, NO_EA, None, NoAccess, NoAccess),
    op(0x16, "LBRA", RelativeWord, 3, 5, EA, None, NoAccess, NoAccess),
    op(0x17, "LBSR", RelativeWord, 3, 9, EA, None, NoAccess, NoAccess),
    op(0x19, "DAA", Inherent, 1, 2, NO_EA, None, NoAccess, NoAccess),
    op(0x1A, "ORCC", Immediate, 2, 3, NO_EA, Some(CC), Byte, NoAccess),
    op(0x1C, "ANDCC", Immediate, 2, 3, NO_EA, Some(CC), Byte, NoAccess),
    op(0x1D, "SEX", Inherent, 1, 2, NO_EA, None, NoAccess, NoAccess),
    op(0x1E, "EXG", Immediate, 2, 8, NO_EA, None, Byte, NoAccess),
    op(0x1F, "TFR", Immediate, 2, 7, NO_EA, None, Byte, NoAccess),
    op(0x20, "BRA", Relative, 2, 3, EA, None, NoAccess, NoAccess),
    op(0x21, "BRN", Relative, 2, 3, EA, None, NoAccess, NoAccess),
    op(0x22, "BHI", Relative, 2, 3, EA, None, NoAccess, NoAccess),
    op(0x23, "BLS", Relative, 2, 3, EA, None, NoAccess, NoAccess),
    op(0x24, "BCC", Relative, 2, 3, EA, None, NoAccess, NoAccess),
    op(0x25, "BLO", Relative, 2, 3, EA, None, NoAccess, NoAccess),
    op(0x26, "BNE", Relative, 2, 3, EA, None, NoAccess, NoAccess),
    op(0x27, "BEQ", Relative, 2, 3, EA, None, NoAccess, NoAccess),
    op(0x28, "BVC", Relative, 2, 3, EA, None, NoAccess, NoAccess),
    op(0x29, "BVS", Relative, 2, 3, EA, None, NoAccess, NoAccess),
    op(0x2A, "BPL", Relative, 2, 3, EA, None, NoAccess, NoAccess),
    op(0x2B, "BMI", Relative, 2, 3, EA, None, NoAccess, NoAccess),
    op(0x2C, "BGE", Relative, 2, 3, EA, None, NoAccess, NoAccess),
    op(0x2D, "BLT", Relative, 2, 3, EA, None, NoAccess, NoAccess),
    op(0x2E, "BGT", Relative, 2, 3, EA, None, NoAccess, NoAccess),
    op(0x2F, "BLE", Relative, 2, 3, EA, None, NoAccess, NoAccess),
    op(0x30, "LEAX", Indexed, 2, 4, EA, Some(X), NoAccess, NoAccess),
    op(0x31, "LEAY", Indexed, 2, 4, EA, Some(Y), NoAccess, NoAccess),
    op(0x32, "LEAS", Indexed, 2, 4, EA, Some(S), NoAccess, NoAccess),
    op(0x33, "LEAU", Indexed, 2, 4, EA, Some(U), NoAccess, NoAccess),
    op(0x34, "PSHS", Immediate, 2, 5, NO_EA, Some(S), Byte, NoAccess),
    op(0x35, "PULS", Immediate, 2, 5, NO_EA, Some(S), Byte, NoAccess),
    op(0x36, "PSHU", Immediate, 2, 5, NO_EA, Some(U), Byte, NoAccess),
    op(0x37, "PULU", Immediate, 2, 5, NO_EA, Some(U), Byte, NoAccess),
    op(0x39, "RTS", Inherent, 1, 5, NO_EA, None, NoAccess, NoAccess),
    op(0x3A, "ABX", Inherent, 1, 3, NO_EA, None, NoAccess, NoAccess),
    op(0x3B, "RTI", Inherent, 1, 6, NO_EA, None, NoAccess, NoAccess),
    op(0x3C, "CWAI", Immediate, 2, 21, NO_EA, None, Byte, NoAccess),
    op(0x3D, "MUL", Inherent, 1, 11, NO_EA, None, NoAccess, NoAccess),
    op(0x3F, "SWI", Inherent, 1, 19, NO_EA, None, NoAccess, NoAccess),
    op(0x40, "NEGA", Inherent, 1, 2, NO_EA, Some(A), NoAccess, NoAccess),
    op(0x43, "COMA", Inherent, 1, 2, NO_EA, Some(A), NoAccess, NoAccess),
    op(0x44, "LSRA", Inherent, 1, 2, NO_EA, Some(A), NoAccess, NoAccess),
    op(0x46, "RORA", Inherent, 1, 2, NO_EA, Some(A), NoAccess, NoAccess),
    op(0x47, "ASRA", Inherent, 1, 2, NO_EA, Some(A), NoAccess, NoAccess),
    op(0x48, "LSLA", Inherent, 1, 2, NO_EA, Some(A), NoAccess, NoAccess),
    op(0x49, "ROLA", Inherent, 1, 2, NO_EA, Some(A), NoAccess, NoAccess),
    op(0x4A, "DECA", Inherent, 1, 2, NO_EA, Some(A), NoAccess, NoAccess),
    op(0x4C, "INCA", Inherent, 1, 2, NO_EA, Some(A), NoAccess, NoAccess),
    op(0x4D, "TSTA", Inherent, 1, 2, NO_EA, Some(A), NoAccess, NoAccess),
    op(0x4F, "CLRA", Inherent, 1, 2, NO_EA, Some(A), NoAccess, NoAccess),
    op(0x50, "NEGB", Inherent, 1, 2, NO_EA, Some(B), NoAccess, NoAccess),
    op(0x53, "COMB", Inherent, 1, 2, NO_EA, Some(B), NoAccess, NoAccess),
    op(0x54, "LSRB", Inherent, 1, 2, NO_EA, Some(B), NoAccess, NoAccess),
    op(0x56, "RORB", Inherent, 1, 2, NO_EA, Some(B), NoAccess, NoAccess),
    op(0x57, "ASRB", Inherent, 1, 2, NO_EA, Some(B), NoAccess, NoAccess),
    op(0x58, "LSLB", Inherent, 1, 2, NO_EA, Some(B), NoAccess, NoAccess),
    op(0x59, "ROLB", Inherent, 1, 2, NO_EA, Some(B), NoAccess, NoAccess),
    op(0x5A, "DECB", Inherent, 1, 2, NO_EA, Some(B), NoAccess, NoAccess),
    op(0x5C, "INCB", Inherent, 1, 2, NO_EA, Some(B), NoAccess, NoAccess),
    op(0x5D, "TSTB", Inherent, 1, 2, NO_EA, Some(B), NoAccess, NoAccess),
    op(0x5F, "CLRB", Inherent, 1, 2, NO_EA, Some(B), NoAccess, NoAccess),
    op(0x60, "NEG", Indexed, 2, 6, EA, None, Byte, Byte),
    op(0x63, "COM", Indexed, 2, 6, EA, None, Byte, Byte),
    op(0x64, "LSR", Indexed, 2, 6, EA, None, Byte, Byte),
    op(0x66, "ROR", Indexed, 2, 6, EA, None, Byte, Byte),
    op(0x67, "ASR", Indexed, 2, 6, EA, None, Byte, Byte),
    op(0x68, "LSL", Indexed, 2, 6, EA, None, Byte, Byte),
    op(0x69, "ROL", Indexed, 2, 6, EA, None, Byte, Byte),
    op(0x6A, "DEC", Indexed, 2, 6, EA, None, Byte, Byte),
    op(0x6C, "INC", Indexed, 2, 6, EA, None, Byte, Byte),
    op(0x6D, "TST", Indexed, 2, 6, NO_EA, None, Byte, NoAccess),
    op(0x6E, "JMP", Indexed, 2, 3, EA, None, NoAccess, NoAccess),
    op(0x6F, "CLR", Indexed, 2, 6, EA, None, NoAccess, Byte),
    op(0x70, "NEG", Extended, 3, 7, EA, None, Byte, Byte),
    op(0x73, "COM", Extended, 3, 7, EA, None, Byte, Byte),
    op(0x74, "LSR", Extended, 3, 7, EA, None, Byte, Byte),
    op(0x76, "ROR", Extended, 3, 7, EA, None, Byte, Byte),
    op(0x77, "ASR", Extended, 3, 7, EA, None, Byte, Byte),
    op(0x78, "LSL", Extended, 3, 7, EA, None, Byte, Byte),
    op(0x79, "ROL", Extended, 3, 7, EA, None, Byte, Byte),
    op(0x7A, "DEC", Extended, 3, 7, EA, None, Byte, Byte),
    op(0x7C, "INC", Extended, 3, 7, EA, None, Byte, Byte),
    op(0x7D, "TST", Extended, 3, 7, NO_EA, None, Byte, NoAccess),
    op(0x7E, "JMP", Extended, 3, 3, EA, None, NoAccess, NoAccess),
    op(0x7F, "CLR", Extended, 3, 7, EA, None, NoAccess, Byte),
    op(0x80, "SUBA", Immediate, 2, 2, NO_EA, Some(A), Byte, NoAccess),
    op(0x81, "CMPA", Immediate, 2, 2, NO_EA, Some(A), Byte, NoAccess),
    op(0x82, "SBCA", Immediate, 2, 2, NO_EA, Some(A), Byte, NoAccess),
    op(0x83, "SUBD", Immediate, 3, 4, NO_EA, Some(D), Word, NoAccess),
    op(0x84, "ANDA", Immediate, 2, 2, NO_EA, Some(A), Byte, NoAccess),
    op(0x85, "BITA", Immediate, 2, 2, NO_EA, Some(A), Byte, NoAccess),
    op(0x86, "LDA", Immediate, 2, 2, NO_EA, Some(A), Byte, NoAccess),
    op(0x88, "EORA", Immediate, 2, 2, NO_EA, Some(A), Byte, NoAccess),
    op(0x89, "ADCA", Immediate, 2, 2, NO_EA, Some(A), Byte, NoAccess),
    op(0x8A, "ORA", Immediate, 2, 2, NO_EA, Some(A), Byte, NoAccess),
    op(0x8B, "ADDA", Immediate, 2, 2, NO_EA, Some(A), Byte, NoAccess),
    op(0x8C, "CMPX", Immediate, 3, 4, NO_EA, Some(X), Word, NoAccess),
    op(0x8D, "BSR", Relative, 2, 7, EA, None, NoAccess, NoAccess),
    op(0x8E, "LDX", Immediate, 3, 3, NO_EA, Some(X), Word, NoAccess),
    op(0x90, "SUBA", Direct, 2, 4, NO_EA, Some(A), Byte, NoAccess),
    op(0x91, "CMPA", Direct, 2, 4, NO_EA, Some(A), Byte, NoAccess),
    op(0x92, "SBCA", Direct, 2, 4, NO_EA, Some(A), Byte, NoAccess),
    op(0x93, "SUBD", Direct, 2, 6, NO_EA, Some(D), Word, NoAccess),
    op(0x94, "ANDA", Direct, 2, 4, NO_EA, Some(A), Byte, NoAccess),
    op(0x95, "BITA", Direct, 2, 4, NO_EA, Some(A), Byte, NoAccess),
    op(0x96, "LDA", Direct, 2, 4, NO_EA, Some(A), Byte, NoAccess),
    op(0x97, "STA", Direct, 2, 4, EA, Some(A), NoAccess, Byte),
    op(0x98, "EORA", Direct, 2, 4, NO_EA, Some(A), Byte, NoAccess),
    op(0x99, "ADCA", Direct, 2, 4, NO_EA, Some(A), Byte, NoAccess),
    op(0x9A, "ORA", Direct, 2, 4, NO_EA, Some(A), Byte, NoAccess),
    op(0x9B, "ADDA", Direct, 2, 4, NO_EA, Some(A), Byte, NoAccess),
    op(0x9C, "CMPX", Direct, 2, 6, NO_EA, Some(X), Word, NoAccess),
    op(0x9D, "JSR", Direct, 2, 7, EA, None, NoAccess, NoAccess),
    op(0x9E, "LDX", Direct, 2, 5, NO_EA, Some(X), Word, NoAccess),
    op(0x9F, "STX", Direct, 2, 5, EA, Some(X), NoAccess, Word),
    op(0xA0, "SUBA", Indexed, 2, 4, NO_EA, Some(A), Byte, NoAccess),
    op(0xA1, "CMPA", Indexed, 2, 4, NO_EA, Some(A), Byte, NoAccess),
    op(0xA2, "SBCA", Indexed, 2, 4, NO_EA, Some(A), Byte, NoAccess),
    op(0xA3, "SUBD", Indexed, 2, 6, NO_EA, Some(D), Word, NoAccess),
    op(0xA4, "ANDA", Indexed, 2, 4, NO_EA, Some(A), Byte, NoAccess),
    op(0xA5, "BITA", Indexed, 2, 4, NO_EA, Some(A), Byte, NoAccess),
    op(0xA6, "LDA", Indexed, 2, 4, NO_EA, Some(A), Byte, NoAccess),
    op(0xA7, "STA", Indexed, 2, 4, EA, Some(A), NoAccess, Byte),
    op(0xA8, "EORA", Indexed, 2, 4, NO_EA, Some(A), Byte, NoAccess),
    op(0xA9, "ADCA", Indexed, 2, 4, NO_EA, Some(A), Byte, NoAccess),
    op(0xAA, "ORA", Indexed, 2, 4, NO_EA, Some(A), Byte, NoAccess),
    op(0xAB, "ADDA", Indexed, 2, 4, NO_EA, Some(A), Byte, NoAccess),
    op(0xAC, "CMPX", Indexed, 2, 6, NO_EA, Some(X), Word, NoAccess),
    op(0xAD, "JSR", Indexed, 2, 7, EA, None, NoAccess, NoAccess),
    op(0xAE, "LDX", Indexed, 2, 5, NO_EA, Some(X), Word, NoAccess),
    op(0xAF, "STX", Indexed, 2, 5, EA, Some(X), NoAccess, Word),
    op(0xB0, "SUBA", Extended, 3, 5, NO_EA, Some(A), Byte, NoAccess),
    op(0xB1, "CMPA", Extended, 3, 5, NO_EA, Some(A), Byte, NoAccess),
    op(0xB2, "SBCA", Extended, 3, 5, NO_EA, Some(A), Byte, NoAccess),
    op(0xB3, "SUBD", Extended, 3, 7, NO_EA, Some(D), Word, NoAccess),
    op(0xB4, "ANDA", Extended, 3, 5, NO_EA, Some(A), Byte, NoAccess),
    op(0xB5, "BITA", Extended, 3, 5, NO_EA, Some(A), Byte, NoAccess),
    op(0xB6, "LDA", Extended, 3, 5, NO_EA, Some(A), Byte, NoAccess),
    op(0xB7, "STA", Extended, 3, 5, EA, Some(A), NoAccess, Byte),
    op(0xB8, "EORA", Extended, 3, 5, NO_EA, Some(A), Byte, NoAccess),
    op(0xB9, "ADCA", Extended, 3, 5, NO_EA, Some(A), Byte, NoAccess),
    op(0xBA, "ORA", Extended, 3, 5, NO_EA, Some(A), Byte, NoAccess),
    op(0xBB, "ADDA", Extended, 3, 5, NO_EA, Some(A), Byte, NoAccess),
    op(0xBC, "CMPX", Extended, 3, 7, NO_EA, Some(X), Word, NoAccess),
    op(0xBD, "JSR", Extended, 3, 8, EA, None, NoAccess, NoAccess),
    op(0xBE, "LDX", Extended, 3, 6, NO_EA, Some(X), Word, NoAccess),
    op(0xBF, "STX", Extended, 3, 6, EA, Some(X), NoAccess, Word),
    op(0xC0, "SUBB", Immediate, 2, 2, NO_EA, Some(B), Byte, NoAccess),
    op(0xC1, "CMPB", Immediate, 2, 2, NO_EA, Some(B), Byte, NoAccess),
    op(0xC2, "SBCB", Immediate, 2, 2, NO_EA, Some(B), Byte, NoAccess),
    op(0xC3, "ADDD", Immediate, 3, 4, NO_EA, Some(D), Word, NoAccess),
    op(0xC4, "ANDB", Immediate, 2, 2, NO_EA, Some(B), Byte, NoAccess),
    op(0xC5, "BITB", Immediate, 2, 2, NO_EA, Some(B), Byte, NoAccess),
    op(0xC6, "LDB", Immediate, 2, 2, NO_EA, Some(B), Byte, NoAccess),
    op(0xC8, "EORB", Immediate, 2, 2, NO_EA, Some(B), Byte, NoAccess),
    op(0xC9, "ADCB", Immediate, 2, 2, NO_EA, Some(B), Byte, NoAccess),
    op(0xCA, "ORB", Immediate, 2, 2, NO_EA, Some(B), Byte, NoAccess),
    op(0xCB, "ADDB", Immediate, 2, 2, NO_EA, Some(B), Byte, NoAccess),
    op(0xCC, "LDD", Immediate, 3, 3, NO_EA, Some(D), Word, NoAccess),
    op(0xCE, "LDU", Immediate, 3, 3, NO_EA, Some(U), Word, NoAccess),
    op(0xD0, "SUBB", Direct, 2, 4, NO_EA, Some(B), Byte, NoAccess),
    op(0xD1, "CMPB", Direct, 2, 4, NO_EA, Some(B), Byte, NoAccess),
    op(0xD2, "SBCB", Direct, 2, 4, NO_EA, Some(B), Byte, NoAccess),
    op(0xD3, "ADDD", Direct, 2, 6, NO_EA, Some(D), Word, NoAccess),
    op(0xD4, "ANDB", Direct, 2, 4, NO_EA, Some(B), Byte, NoAccess),
    op(0xD5, "BITB", Direct, 2, 4, NO_EA, Some(B), Byte, NoAccess),
    op(0xD6, "LDB", Direct, 2, 4, NO_EA, Some(B), Byte, NoAccess),
    op(0xD7, "STB", Direct, 2, 4, EA, Some(B), NoAccess, Byte),
    op(0xD8, "EORB", Direct, 2, 4, NO_EA, Some(B), Byte, NoAccess),
    op(0xD9, "ADCB", Direct, 2, 4, NO_EA, Some(B), Byte, NoAccess),
    op(0xDA, "ORB", Direct, 2, 4, NO_EA, Some(B), Byte, NoAccess),
    op(0xDB, "ADDB", Direct, 2, 4, NO_EA, Some(B), Byte, NoAccess),
    op(0xDC, "LDD", Direct, 2, 5, NO_EA, Some(D), Word, NoAccess),
    op(0xDD, "STD", Direct, 2, 5, EA, Some(D), NoAccess, Word),
    op(0xDE, "LDU", Direct, 2, 5, NO_EA, Some(U), Word, NoAccess),
    op(0xDF, "STU", Direct, 2, 5, EA, Some(U), NoAccess, Word),
    op(0xE0, "SUBB", Indexed, 2, 4, NO_EA, Some(B), Byte, NoAccess),
    op(0xE1, "CMPB", Indexed, 2, 4, NO_EA, Some(B), Byte, NoAccess),
    op(0xE2, "SBCB", Indexed, 2, 4, NO_EA, Some(B), Byte, NoAccess),
    op(0xE3, "ADDD", Indexed, 2, 6, NO_EA, Some(D), Word, NoAccess),
    op(0xE4, "ANDB", Indexed, 2, 4, NO_EA, Some(B), Byte, NoAccess),
    op(0xE5, "BITB", Indexed, 2, 4, NO_EA, Some(B), Byte, NoAccess),
    op(0xE6, "LDB", Indexed, 2, 4, NO_EA, Some(B), Byte, NoAccess),
    op(0xE7, "STB", Indexed, 2, 4, EA, Some(B), NoAccess, Byte),
    op(0xE8, "EORB", Indexed, 2, 4, NO_EA, Some(B), Byte, NoAccess),
    op(0xE9, "ADCB", Indexed, 2, 4, NO_EA, Some(B), Byte, NoAccess),
    op(0xEA, "ORB", Indexed, 2, 4, NO_EA, Some(B), Byte, NoAccess),
    op(0xEB, "ADDB", Indexed, 2, 4, NO_EA, Some(B), Byte, NoAccess),
    op(0xEC, "LDD", Indexed, 2, 5, NO_EA, Some(D), Word, NoAccess),
    op(0xED, "STD", Indexed, 2, 5, EA, Some(D), NoAccess, Word),
    op(0xEE, "LDU", Indexed, 2, 5, NO_EA, Some(U), Word, NoAccess),
    op(0xEF, "STU", Indexed, 2, 5, EA, Some(U), NoAccess, Word),
    op(0xF0, "SUBB", Extended, 3, 5, NO_EA, Some(B), Byte, NoAccess),
    op(0xF1, "CMPB", Extended, 3, 5, NO_EA, Some(B), Byte, NoAccess),
    op(0xF2, "SBCB", Extended, 3, 5, NO_EA, Some(B), Byte, NoAccess),
    op(0xF3, "ADDD", Extended, 3, 7, NO_EA, Some(D), Word, NoAccess),
    op(0xF4, "ANDB", Extended, 3, 5, NO_EA, Some(B), Byte, NoAccess),
    op(0xF5, "BITB", Extended, 3, 5, NO_EA, Some(B), Byte, NoAccess),
    op(0xF6, "LDB", Extended, 3, 5, NO_EA, Some(B), Byte, NoAccess),
    op(0xF7, "STB", Extended, 3, 5, EA, Some(B), NoAccess, Byte),
    op(0xF8, "EORB", Extended, 3, 5, NO_EA, Some(B), Byte, NoAccess),
    op(0xF9, "ADCB", Extended, 3, 5, NO_EA, Some(B), Byte, NoAccess),
    op(0xFA, "ORB", Extended, 3, 5, NO_EA, Some(B), Byte, NoAccess),
    op(0xFB, "ADDB", Extended, 3, 5, NO_EA, Some(B), Byte, NoAccess),
    op(0xFC, "LDD", Extended, 3, 6, NO_EA, Some(D), Word, NoAccess),
    op(0xFD, "STD", Extended, 3, 6, EA, Some(D), NoAccess, Word),
    op(0xFE, "LDU", Extended, 3, 6, NO_EA, Some(U), Word, NoAccess),
    op(0xFF, "STU", Extended, 3, 6, EA, Some(U), NoAccess, Word),
    // ---- page 2 (0x10 prefix) ----
    op(0x1021, "LBRN", RelativeWord, 4, 5, EA, None, NoAccess, NoAccess),
    op(0x1022, "LBHI", RelativeWord, 4, 5, EA, None, NoAccess, NoAccess),
    op(0x1023, "LBLS", RelativeWord, 4, 5, EA, None, NoAccess, NoAccess),
    op(0x1024, "LBCC", RelativeWord, 4, 5, EA, None, NoAccess, NoAccess),
    op(0x1025, "LBCS", RelativeWord, 4, 5, EA, None, NoAccess, NoAccess),
    op(0x1026, "LBNE", RelativeWord, 4, 5, EA, None, NoAccess, NoAccess),
    op(0x1027, "LBEQ", RelativeWord, 4, 5, EA, None, NoAccess, NoAccess),
    op(0x1028, "LBVC", RelativeWord, 4, 5, EA, None, NoAccess, NoAccess),
    op(0x1029, "LBVS", RelativeWord, 4, 5, EA, None, NoAccess, NoAccess),
    op(0x102A, "LBPL", RelativeWord, 4, 5, EA, None, NoAccess, NoAccess),
    op(0x102B, "LBMI", RelativeWord, 4, 5, EA, None, NoAccess, NoAccess),
    op(0x102C, "LBGE", RelativeWord, 4, 5, EA, None, NoAccess, NoAccess),
    op(0x102D, "LBLT", RelativeWord, 4, 5, EA, None, NoAccess, NoAccess),
    op(0x102E, "LBGT", RelativeWord, 4, 5, EA, None, NoAccess, NoAccess),
    op(0x102F, "LBLE", RelativeWord, 4, 5, EA, None, NoAccess, NoAccess),
    op(0x103F, "SWI2", Inherent, 2, 20, NO_EA, None, NoAccess, NoAccess),
    op(0x1083, "CMPD", Immediate, 4, 5, NO_EA, Some(D), Word, NoAccess),
    op(0x108C, "CMPY", Immediate, 4, 5, NO_EA, Some(Y), Word, NoAccess),
    op(0x108E, "LDY", Immediate, 4, 4, NO_EA, Some(Y), Word, NoAccess),
    op(0x1093, "CMPD", Direct, 3, 7, NO_EA, Some(D), Word, NoAccess),
    op(0x109C, "CMPY", Direct, 3, 7, NO_EA, Some(Y), Word, NoAccess),
    op(0x109E, "LDY", Direct, 3, 6, NO_EA, Some(Y), Word, NoAccess),
    op(0x109F, "STY", Direct, 3, 6, EA, Some(Y), NoAccess, Word),
    op(0x10A3, "CMPD", Indexed, 3, 7, NO_EA, Some(D), Word, NoAccess),
    op(0x10AC, "CMPY", Indexed, 3, 7, NO_EA, Some(Y), Word, NoAccess),
    op(0x10AE, "LDY", Indexed, 3, 6, NO_EA, Some(Y), Word, NoAccess),
    op(0x10AF, "STY", Indexed, 3, 6, EA, Some(Y), NoAccess, Word),
    op(0x10B3, "CMPD", Extended, 4, 8, NO_EA, Some(D), Word, NoAccess),
    op(0x10BC, "CMPY", Extended, 4, 8, NO_EA, Some(Y), Word, NoAccess),
    op(0x10BE, "LDY", Extended, 4, 7, NO_EA, Some(Y), Word, NoAccess),
    op(0x10BF, "STY", Extended, 4, 7, EA, Some(Y), NoAccess, Word),
    op(0x10CE, "LDS", Immediate, 4, 4, NO_EA, Some(S), Word, NoAccess),
    op(0x10DE, "LDS", Direct, 3, 6, NO_EA, Some(S), Word, NoAccess),
    op(0x10DF, "STS", Direct, 3, 6, EA, Some(S), NoAccess, Word),
    op(0x10EE, "LDS", Indexed, 3, 6, NO_EA, Some(S), Word, NoAccess),
    op(0x10EF, "STS", Indexed, 3, 6, EA, Some(S), NoAccess, Word),
    op(0x10FE, "LDS", Extended, 4, 7, NO_EA, Some(S), Word, NoAccess),
    op(0x10FF, "STS", Extended, 4, 7, EA, Some(S), NoAccess, Word),
    // ---- page 3 (0x11 prefix) ----
    op(0x113F, "SWI3", Inherent, 2, 20, NO_EA, None, NoAccess, NoAccess),
    op(0x1183, "CMPU", Immediate, 4, 5, NO_EA, Some(U), Word, NoAccess),
    op(0x118C, "CMPS", Immediate, 4, 5, NO_EA, Some(S), Word, NoAccess),
    op(0x1193, "CMPU", Direct, 3, 7, NO_EA, Some(U), Word, NoAccess),
    op(0x119C, "CMPS", Direct, 3, 7, NO_EA, Some(S), Word, NoAccess),
    op(0x11A3, "CMPU", Indexed, 3, 7, NO_EA, Some(U), Word, NoAccess),
    op(0x11AC, "CMPS", Indexed, 3, 7, NO_EA, Some(S), Word, NoAccess),
    op(0x11B3, "CMPU", Extended, 4, 8, NO_EA, Some(U), Word, NoAccess),
    op(0x11BC, "CMPS", Extended, 4, 8, NO_EA, Some(S), Word, NoAccess),
];

/// Look up a descriptor by (possibly paged) opcode.
pub fn descriptor(opcode: u16) -> Option<&'static OpcodeDescriptor> {
    OPCODES.iter().find(|desc| desc.opcode == opcode)
}
