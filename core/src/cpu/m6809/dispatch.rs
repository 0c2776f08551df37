//! Opcode dispatch.
//!
//! Every instruction family declares the opcodes it implements in
//! [`CLAIMS`]. [`DispatchTable::build`] pairs each claim with its
//! [`OpcodeDescriptor`] and a calling [`Wrapper`] chosen by matching on the
//! descriptor's addressing mode, register and memory widths. The result is
//! one `(cycles, wrapper, family)` entry per opcode.

use log::{debug, error};

use super::branch::Condition;
use super::opcodes::{AddrMode, MemWidth, OPCODES, OpcodeDescriptor};
use super::registers::RegisterId;
use super::{ExecState, M6809};
use crate::core::Bus;
use crate::cpu::{ConfigError, CpuError};

/// Instruction families; each maps onto one semantics method.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Op {
    Abx,
    Adc,
    Add8,
    Add16,
    And,
    AndCc,
    AsrMemory,
    AsrRegister,
    Bit,
    Branch(Condition),
    Bsr,
    ClrMemory,
    ClrRegister,
    Cmp8,
    Cmp16,
    ComMemory,
    ComRegister,
    Cwai,
    Daa,
    DecMemory,
    DecRegister,
    Eor,
    Exg,
    IncMemory,
    IncRegister,
    Jmp,
    Jsr,
    Ld8,
    Ld16,
    LeaPointer,
    LeaRegister,
    LslMemory,
    LslRegister,
    LsrMemory,
    LsrRegister,
    Mul,
    NegMemory,
    NegRegister,
    Nop,
    Or,
    OrCc,
    Page,
    Psh,
    Pul,
    RolMemory,
    RolRegister,
    RorMemory,
    RorRegister,
    Rti,
    Rts,
    Sbc,
    Sex,
    St8,
    St16,
    Sub8,
    Sub16,
    Swi,
    Sync,
    Tfr,
    TstMemory,
    TstRegister,
}

/// Opcodes implemented by each family.
#[rustfmt::skip]
static CLAIMS: &[(Op, &[u16])] = &[
    (Op::Abx, &[0x3A]),
    (Op::Adc, &[0x89, 0x99, 0xA9, 0xB9, 0xC9, 0xD9, 0xE9, 0xF9]),
    (Op::Add8, &[0x8B, 0x9B, 0xAB, 0xBB, 0xCB, 0xDB, 0xEB, 0xFB]),
    (Op::Add16, &[0xC3, 0xD3, 0xE3, 0xF3]),
    (Op::And, &[0x84, 0x94, 0xA4, 0xB4, 0xC4, 0xD4, 0xE4, 0xF4]),
    (Op::AndCc, &[0x1C]),
    (Op::AsrMemory, &[0x07, 0x67, 0x77]),
    (Op::AsrRegister, &[0x47, 0x57]),
    (Op::Bit, &[0x85, 0x95, 0xA5, 0xB5, 0xC5, 0xD5, 0xE5, 0xF5]),
    (Op::Branch(Condition::Always), &[0x20, 0x16]),
    (Op::Branch(Condition::Never), &[0x21, 0x1021]),
    (Op::Branch(Condition::Higher), &[0x22, 0x1022]),
    (Op::Branch(Condition::LowerOrSame), &[0x23, 0x1023]),
    (Op::Branch(Condition::CarryClear), &[0x24, 0x1024]),
    (Op::Branch(Condition::CarrySet), &[0x25, 0x1025]),
    (Op::Branch(Condition::NotEqual), &[0x26, 0x1026]),
    (Op::Branch(Condition::Equal), &[0x27, 0x1027]),
    (Op::Branch(Condition::OverflowClear), &[0x28, 0x1028]),
    (Op::Branch(Condition::OverflowSet), &[0x29, 0x1029]),
    (Op::Branch(Condition::Plus), &[0x2A, 0x102A]),
    (Op::Branch(Condition::Minus), &[0x2B, 0x102B]),
    (Op::Branch(Condition::GreaterOrEqual), &[0x2C, 0x102C]),
    (Op::Branch(Condition::LessThan), &[0x2D, 0x102D]),
    (Op::Branch(Condition::GreaterThan), &[0x2E, 0x102E]),
    (Op::Branch(Condition::LessOrEqual), &[0x2F, 0x102F]),
    (Op::Bsr, &[0x8D, 0x17]),
    (Op::ClrMemory, &[0x0F, 0x6F, 0x7F]),
    (Op::ClrRegister, &[0x4F, 0x5F]),
    (Op::Cmp8, &[0x81, 0x91, 0xA1, 0xB1, 0xC1, 0xD1, 0xE1, 0xF1]),
    (Op::Cmp16, &[
        0x8C, 0x9C, 0xAC, 0xBC,         // CMPX
        0x1083, 0x1093, 0x10A3, 0x10B3, // CMPD
        0x108C, 0x109C, 0x10AC, 0x10BC, // CMPY
        0x1183, 0x1193, 0x11A3, 0x11B3, // CMPU
        0x118C, 0x119C, 0x11AC, 0x11BC, // CMPS
    ]),
    (Op::ComMemory, &[0x03, 0x63, 0x73]),
    (Op::ComRegister, &[0x43, 0x53]),
    (Op::Cwai, &[0x3C]),
    (Op::Daa, &[0x19]),
    (Op::DecMemory, &[0x0A, 0x6A, 0x7A]),
    (Op::DecRegister, &[0x4A, 0x5A]),
    (Op::Eor, &[0x88, 0x98, 0xA8, 0xB8, 0xC8, 0xD8, 0xE8, 0xF8]),
    (Op::Exg, &[0x1E]),
    (Op::IncMemory, &[0x0C, 0x6C, 0x7C]),
    (Op::IncRegister, &[0x4C, 0x5C]),
    (Op::Jmp, &[0x0E, 0x6E, 0x7E]),
    (Op::Jsr, &[0x9D, 0xAD, 0xBD]),
    (Op::Ld8, &[0x86, 0x96, 0xA6, 0xB6, 0xC6, 0xD6, 0xE6, 0xF6]),
    (Op::Ld16, &[
        0xCC, 0xDC, 0xEC, 0xFC,         // LDD
        0xCE, 0xDE, 0xEE, 0xFE,         // LDU
        0x8E, 0x9E, 0xAE, 0xBE,         // LDX
        0x108E, 0x109E, 0x10AE, 0x10BE, // LDY
        0x10CE, 0x10DE, 0x10EE, 0x10FE, // LDS
    ]),
    (Op::LeaPointer, &[0x32, 0x33]),
    (Op::LeaRegister, &[0x30, 0x31]),
    (Op::LslMemory, &[0x08, 0x68, 0x78]),
    (Op::LslRegister, &[0x48, 0x58]),
    (Op::LsrMemory, &[0x04, 0x64, 0x74]),
    (Op::LsrRegister, &[0x44, 0x54]),
    (Op::Mul, &[0x3D]),
    (Op::NegMemory, &[0x00, 0x60, 0x70]),
    (Op::NegRegister, &[0x40, 0x50]),
    (Op::Nop, &[0x12]),
    (Op::Or, &[0x8A, 0x9A, 0xAA, 0xBA, 0xCA, 0xDA, 0xEA, 0xFA]),
    (Op::OrCc, &[0x1A]),
    (Op::Page, &[0x10, 0x11]),
    (Op::Psh, &[0x34, 0x36]),
    (Op::Pul, &[0x35, 0x37]),
    (Op::RolMemory, &[0x09, 0x69, 0x79]),
    (Op::RolRegister, &[0x49, 0x59]),
    (Op::RorMemory, &[0x06, 0x66, 0x76]),
    (Op::RorRegister, &[0x46, 0x56]),
    (Op::Rti, &[0x3B]),
    (Op::Rts, &[0x39]),
    (Op::Sbc, &[0x82, 0x92, 0xA2, 0xB2, 0xC2, 0xD2, 0xE2, 0xF2]),
    (Op::Sex, &[0x1D]),
    (Op::St8, &[0x97, 0xA7, 0xB7, 0xD7, 0xE7, 0xF7]),
    (Op::St16, &[
        0xDD, 0xED, 0xFD,       // STD
        0xDF, 0xEF, 0xFF,       // STU
        0x9F, 0xAF, 0xBF,       // STX
        0x109F, 0x10AF, 0x10BF, // STY
        0x10DF, 0x10EF, 0x10FF, // STS
    ]),
    (Op::Sub8, &[0x80, 0x90, 0xA0, 0xB0, 0xC0, 0xD0, 0xE0, 0xF0]),
    (Op::Sub16, &[0x83, 0x93, 0xA3, 0xB3]),
    (Op::Swi, &[0x3F, 0x103F, 0x113F]),
    (Op::Sync, &[0x13]),
    (Op::Tfr, &[0x1F]),
    (Op::TstMemory, &[0x0D, 0x6D, 0x7D]),
    (Op::TstRegister, &[0x4D, 0x5D]),
];

/// Modes that produce an effective address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EaMode {
    Direct,
    Extended,
    Indexed,
    Relative,
    RelativeWord,
}

impl EaMode {
    fn from_mode(mode: AddrMode) -> Option<Self> {
        match mode {
            AddrMode::Direct => Some(EaMode::Direct),
            AddrMode::Extended => Some(EaMode::Extended),
            AddrMode::Indexed => Some(EaMode::Indexed),
            AddrMode::Relative => Some(EaMode::Relative),
            AddrMode::RelativeWord => Some(EaMode::RelativeWord),
            AddrMode::Page | AddrMode::Inherent | AddrMode::Immediate => None,
        }
    }
}

/// Modes that produce an operand value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OperandMode {
    Immediate,
    Direct,
    Extended,
    Indexed,
}

impl OperandMode {
    fn from_mode(mode: AddrMode) -> Option<Self> {
        match mode {
            AddrMode::Immediate => Some(OperandMode::Immediate),
            AddrMode::Direct => Some(OperandMode::Direct),
            AddrMode::Extended => Some(OperandMode::Extended),
            AddrMode::Indexed => Some(OperandMode::Indexed),
            AddrMode::Page | AddrMode::Inherent | AddrMode::Relative | AddrMode::RelativeWord => {
                None
            }
        }
    }
}

/// Calling convention between the decoder and an instruction family:
/// what to resolve before the call and what to write back after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Wrapper {
    Page,
    Inherent,
    InherentRegister(RegisterId),
    Ea(EaMode),
    EaRegister(EaMode, RegisterId),
    ReadByte(OperandMode),
    ReadByteRegister(OperandMode, RegisterId),
    ReadWordRegister(OperandMode, RegisterId),
    EaWriteByte(EaMode),
    EaReadWriteByte(EaMode),
    EaRegisterWriteByte(EaMode, RegisterId),
    EaRegisterWriteWord(EaMode, RegisterId),
}

impl Wrapper {
    pub(crate) fn select(desc: &OpcodeDescriptor) -> Result<Self, ConfigError> {
        use MemWidth::{Byte, NoAccess, Word};

        let unsupported = || ConfigError::UnsupportedWrapper {
            opcode: desc.opcode,
            mnemonic: desc.mnemonic,
        };
        let ea = || EaMode::from_mode(desc.mode).ok_or_else(unsupported);
        let operand = || OperandMode::from_mode(desc.mode).ok_or_else(unsupported);

        let wrapper = match (desc.mode, desc.needs_ea, desc.register, desc.read, desc.write) {
            (AddrMode::Page, false, None, NoAccess, NoAccess) => Wrapper::Page,
            (AddrMode::Inherent, false, None, NoAccess, NoAccess) => Wrapper::Inherent,
            (AddrMode::Inherent, false, Some(reg), NoAccess, NoAccess) => {
                Wrapper::InherentRegister(reg)
            }
            (_, true, None, NoAccess, NoAccess) => Wrapper::Ea(ea()?),
            (_, true, Some(reg), NoAccess, NoAccess) => Wrapper::EaRegister(ea()?, reg),
            (_, false, None, Byte, NoAccess) => Wrapper::ReadByte(operand()?),
            (_, false, Some(reg), Byte, NoAccess) => Wrapper::ReadByteRegister(operand()?, reg),
            (_, false, Some(reg), Word, NoAccess) => Wrapper::ReadWordRegister(operand()?, reg),
            (_, true, None, NoAccess, Byte) => Wrapper::EaWriteByte(ea()?),
            (_, true, None, Byte, Byte) => Wrapper::EaReadWriteByte(ea()?),
            (_, true, Some(reg), NoAccess, Byte) => Wrapper::EaRegisterWriteByte(ea()?, reg),
            (_, true, Some(reg), NoAccess, Word) => Wrapper::EaRegisterWriteWord(ea()?, reg),
            _ => return Err(unsupported()),
        };
        Ok(wrapper)
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct DispatchEntry {
    pub cycles: u8,
    pub wrapper: Wrapper,
    pub op: Op,
}

/// Page 1 opcodes live in slots 0x000-0x0FF, page 2 in 0x100-0x1FF and
/// page 3 in 0x200-0x2FF.
const TABLE_SLOTS: usize = 0x300;

#[inline]
fn slot(opcode: u16) -> Option<usize> {
    let low = (opcode & 0xFF) as usize;
    match opcode >> 8 {
        0x00 => Some(low),
        0x10 => Some(0x100 + low),
        0x11 => Some(0x200 + low),
        _ => None,
    }
}

pub(crate) struct DispatchTable {
    entries: Box<[Option<DispatchEntry>]>,
}

impl DispatchTable {
    pub(crate) fn build() -> Result<Self, ConfigError> {
        let mut descriptors: Vec<Option<&'static OpcodeDescriptor>> = vec![None; TABLE_SLOTS];
        for desc in OPCODES {
            let index = slot(desc.opcode).ok_or(ConfigError::UnsupportedWrapper {
                opcode: desc.opcode,
                mnemonic: desc.mnemonic,
            })?;
            if descriptors[index].is_some() {
                return Err(ConfigError::DuplicateDescriptor {
                    opcode: desc.opcode,
                });
            }
            descriptors[index] = Some(desc);
        }

        let mut entries: Vec<Option<DispatchEntry>> = vec![None; TABLE_SLOTS];
        for &(op, opcodes) in CLAIMS {
            for &opcode in opcodes {
                let Some((index, desc)) =
                    slot(opcode).and_then(|i| descriptors[i].map(|desc| (i, desc)))
                else {
                    return Err(ConfigError::MissingDescriptor {
                        opcode,
                        family: format!("{op:?}"),
                    });
                };
                if let Some(existing) = entries[index] {
                    return Err(ConfigError::DuplicateOpcode {
                        opcode,
                        first: format!("{:?}", existing.op),
                        second: format!("{op:?}"),
                    });
                }
                entries[index] = Some(DispatchEntry {
                    cycles: desc.cycles,
                    wrapper: Wrapper::select(desc)?,
                    op,
                });
            }
        }

        for desc in OPCODES {
            let claimed = slot(desc.opcode).is_some_and(|i| entries[i].is_some());
            if !claimed {
                return Err(ConfigError::UnclaimedOpcode {
                    opcode: desc.opcode,
                    mnemonic: desc.mnemonic,
                });
            }
        }

        debug!("dispatch table built with {} opcodes", OPCODES.len());
        Ok(Self {
            entries: entries.into_boxed_slice(),
        })
    }

    #[inline]
    pub(crate) fn get(&self, opcode: u16) -> Option<DispatchEntry> {
        slot(opcode).and_then(|index| self.entries[index])
    }
}

/// Operands resolved by a wrapper before the semantics run.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Operands {
    pub opcode: u16,
    pub ea: u16,
    pub m: u16,
    pub register: RegisterId,
}

/// Memory write requested by a memory-destination instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum WriteBack {
    Byte(u16, u8),
    Word(u16, u16),
}

impl From<(u16, u8)> for WriteBack {
    fn from((ea, value): (u16, u8)) -> Self {
        WriteBack::Byte(ea, value)
    }
}

impl From<(u16, u16)> for WriteBack {
    fn from((ea, value): (u16, u16)) -> Self {
        WriteBack::Word(ea, value)
    }
}

impl M6809 {
    /// Look up `opcode` and run it. `op_address` is where the (first byte
    /// of the) instruction was fetched from; paged opcodes keep it.
    pub(crate) fn call_instruction<B: Bus + ?Sized>(
        &mut self,
        bus: &mut B,
        op_address: u16,
        opcode: u16,
    ) -> Result<(), CpuError> {
        self.last_op_address = op_address;
        let Some(entry) = self.dispatch.get(opcode) else {
            error!("${op_address:04x} *** UNKNOWN OP ${opcode:x}");
            return Err(CpuError::UnknownOpcode {
                address: op_address,
                opcode,
            });
        };
        self.state = ExecState::Dispatching;
        self.run_wrapper(bus, entry, op_address, opcode)?;
        self.cycles += entry.cycles as u64;
        Ok(())
    }

    fn run_wrapper<B: Bus + ?Sized>(
        &mut self,
        bus: &mut B,
        entry: DispatchEntry,
        op_address: u16,
        opcode: u16,
    ) -> Result<(), CpuError> {
        let mut operands = Operands {
            opcode,
            ea: 0,
            m: 0,
            register: RegisterId::Undefined,
        };

        match entry.wrapper {
            Wrapper::Page => {
                let (_, next) = self.read_pc_byte(bus);
                return self.call_instruction(bus, op_address, (opcode << 8) | next as u16);
            }
            Wrapper::Inherent => {}
            Wrapper::InherentRegister(reg) => operands.register = reg,
            Wrapper::Ea(mode) | Wrapper::EaWriteByte(mode) => {
                operands.ea = self.resolve_ea(bus, mode);
            }
            Wrapper::EaRegister(mode, reg)
            | Wrapper::EaRegisterWriteByte(mode, reg)
            | Wrapper::EaRegisterWriteWord(mode, reg) => {
                operands.ea = self.resolve_ea(bus, mode);
                operands.register = reg;
            }
            Wrapper::ReadByte(mode) => {
                operands.m = self.read_operand_byte(bus, mode) as u16;
            }
            Wrapper::ReadByteRegister(mode, reg) => {
                operands.m = self.read_operand_byte(bus, mode) as u16;
                operands.register = reg;
            }
            Wrapper::ReadWordRegister(mode, reg) => {
                operands.m = self.read_operand_word(bus, mode);
                operands.register = reg;
            }
            Wrapper::EaReadWriteByte(mode) => {
                operands.ea = self.resolve_ea(bus, mode);
                operands.m = bus.read_byte(operands.ea) as u16;
            }
        }

        self.state = ExecState::Executing;
        match self.execute(bus, entry.op, operands) {
            Some(WriteBack::Byte(ea, value)) => bus.write_byte(ea, value),
            Some(WriteBack::Word(ea, value)) => bus.write_word(ea, value),
            None => {}
        }
        Ok(())
    }

    fn execute<B: Bus + ?Sized>(
        &mut self,
        bus: &mut B,
        op: Op,
        operands: Operands,
    ) -> Option<WriteBack> {
        let Operands {
            opcode,
            ea,
            m,
            register: reg,
        } = operands;
        let m8 = m as u8;

        match op {
            Op::Abx => self.op_abx(),
            Op::Adc => self.op_adc(reg, m8),
            Op::Add8 => self.op_add8(reg, m8),
            Op::Add16 => self.op_add16(reg, m),
            Op::And => self.op_and(reg, m8),
            Op::AndCc => self.op_andcc(m8),
            Op::AsrMemory => return Some(self.op_asr_memory(ea, m8).into()),
            Op::AsrRegister => self.op_asr_register(reg),
            Op::Bit => self.op_bit(reg, m8),
            Op::Branch(condition) => self.op_branch(condition, ea),
            Op::Bsr => self.op_bsr(bus, ea),
            Op::ClrMemory => return Some(self.op_clr_memory(ea).into()),
            Op::ClrRegister => self.op_clr_register(reg),
            Op::Cmp8 => self.op_cmp8(reg, m8),
            Op::Cmp16 => self.op_cmp16(reg, m),
            Op::ComMemory => return Some(self.op_com_memory(ea, m8).into()),
            Op::ComRegister => self.op_com_register(reg),
            Op::Cwai => self.op_cwai(bus, m8),
            Op::Daa => self.op_daa(),
            Op::DecMemory => return Some(self.op_dec_memory(ea, m8).into()),
            Op::DecRegister => self.op_dec_register(reg),
            Op::Eor => self.op_eor(reg, m8),
            Op::Exg => self.op_exg(m8),
            Op::IncMemory => return Some(self.op_inc_memory(ea, m8).into()),
            Op::IncRegister => self.op_inc_register(reg),
            Op::Jmp => self.op_jmp(ea),
            Op::Jsr => self.op_jsr(bus, ea),
            Op::Ld8 => self.op_ld8(reg, m8),
            Op::Ld16 => self.op_ld16(reg, m),
            Op::LeaPointer => self.op_lea_pointer(reg, ea),
            Op::LeaRegister => self.op_lea_register(reg, ea),
            Op::LslMemory => return Some(self.op_lsl_memory(ea, m8).into()),
            Op::LslRegister => self.op_lsl_register(reg),
            Op::LsrMemory => return Some(self.op_lsr_memory(ea, m8).into()),
            Op::LsrRegister => self.op_lsr_register(reg),
            Op::Mul => self.op_mul(),
            Op::NegMemory => return Some(self.op_neg_memory(ea, m8).into()),
            Op::NegRegister => self.op_neg_register(reg),
            Op::Nop => {}
            Op::Or => self.op_or(reg, m8),
            Op::OrCc => self.op_orcc(m8),
            // Consumed by the Page wrapper before execution.
            Op::Page => {}
            Op::Psh => self.op_psh(bus, reg, m8),
            Op::Pul => self.op_pul(bus, reg, m8),
            Op::RolMemory => return Some(self.op_rol_memory(ea, m8).into()),
            Op::RolRegister => self.op_rol_register(reg),
            Op::RorMemory => return Some(self.op_ror_memory(ea, m8).into()),
            Op::RorRegister => self.op_ror_register(reg),
            Op::Rti => self.op_rti(bus),
            Op::Rts => self.op_rts(bus),
            Op::Sbc => self.op_sbc(reg, m8),
            Op::Sex => self.op_sex(),
            Op::St8 => return Some(self.op_st8(reg, ea).into()),
            Op::St16 => return Some(self.op_st16(reg, ea).into()),
            Op::Sub8 => self.op_sub8(reg, m8),
            Op::Sub16 => self.op_sub16(reg, m),
            Op::Swi => self.op_swi(bus, opcode),
            Op::Sync => self.op_sync(),
            Op::Tfr => self.op_tfr(m8),
            Op::TstMemory => self.op_tst_memory(m8),
            Op::TstRegister => self.op_tst_register(reg),
        }
        None
    }
}
