use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use mc6809_core::core::Bus;
use mc6809_core::cpu::m6809::opcodes::{AddrMode, OPCODES, OpcodeDescriptor};
use mc6809_core::cpu::{CpuError, CpuStateTrait, M6809, M6809State};
use rand::Rng;
use serde::{Deserialize, Serialize};

// --- TracingBus: flat 64KB memory recording every access ---

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BusOp {
    Read,
    Write,
}

impl BusOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BusOp::Read => "read",
            BusOp::Write => "write",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BusAccess {
    pub addr: u16,
    pub data: u8,
    pub op: BusOp,
}

pub struct TracingBus {
    pub memory: Box<[u8; 0x10000]>,
    pub accesses: Vec<BusAccess>,
}

impl TracingBus {
    pub fn new() -> Self {
        Self {
            memory: Box::new([0; 0x10000]),
            accesses: Vec::new(),
        }
    }

    pub fn load(&mut self, addr: u16, data: &[u8]) {
        let start = addr as usize;
        self.memory[start..start + data.len()].copy_from_slice(data);
    }

    pub fn clear_accesses(&mut self) {
        self.accesses.clear();
    }

    /// Addresses touched so far, each once, in ascending order.
    pub fn touched(&self) -> BTreeSet<u16> {
        self.accesses.iter().map(|access| access.addr).collect()
    }
}

impl Default for TracingBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for TracingBus {
    fn read_byte(&mut self, addr: u16) -> u8 {
        let data = self.memory[addr as usize];
        self.accesses.push(BusAccess {
            addr,
            data,
            op: BusOp::Read,
        });
        data
    }

    fn write_byte(&mut self, addr: u16, data: u8) {
        self.memory[addr as usize] = data;
        self.accesses.push(BusAccess {
            addr,
            data,
            op: BusOp::Write,
        });
    }
}

// --- JSON test vector types ---

/// One instruction: the state before, the state after, the cycles it took
/// and every bus access it made, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub initial: CpuState,
    #[serde(rename = "final")]
    pub final_state: CpuState,
    pub cycles: u64,
    pub accesses: Vec<(u16, u8, String)>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuState {
    pub pc: u16,
    pub s: u16,
    pub u: u16,
    pub a: u8,
    pub b: u8,
    pub dp: u8,
    pub x: u16,
    pub y: u16,
    pub cc: u8,
    pub ram: Vec<(u16, u8)>,
}

impl CpuState {
    /// Registers only; `ram` is left empty.
    pub fn capture(cpu: &M6809) -> Self {
        let regs = cpu.snapshot();
        Self {
            pc: regs.pc,
            s: regs.s,
            u: regs.u,
            a: regs.a,
            b: regs.b,
            dp: regs.dp,
            x: regs.x,
            y: regs.y,
            cc: regs.cc,
            ram: Vec::new(),
        }
    }

    /// Load registers into `cpu` (cycle counter cleared) and `ram` into `bus`.
    pub fn apply(&self, cpu: &mut M6809, bus: &mut TracingBus) {
        cpu.restore(&M6809State {
            a: self.a,
            b: self.b,
            dp: self.dp,
            x: self.x,
            y: self.y,
            u: self.u,
            s: self.s,
            pc: self.pc,
            cc: self.cc,
            cycles: 0,
        });
        for &(addr, value) in &self.ram {
            bus.memory[addr as usize] = value;
        }
    }
}

fn ram_at(memory: &[u8; 0x10000], addresses: &BTreeSet<u16>) -> Vec<(u16, u8)> {
    addresses
        .iter()
        .map(|&addr| (addr, memory[addr as usize]))
        .collect()
}

fn encode_accesses(accesses: &[BusAccess]) -> Vec<(u16, u8, String)> {
    accesses
        .iter()
        .map(|access| (access.addr, access.data, access.op.as_str().to_string()))
        .collect()
}

// --- Generation and replay ---

/// Opcodes worth generating vectors for: everything in the table except
/// the bare page prefixes.
pub fn testable_opcodes() -> impl Iterator<Item = &'static OpcodeDescriptor> {
    OPCODES.iter().filter(|desc| desc.mode != AddrMode::Page)
}

/// Vector file name for an opcode, e.g. `86.json.gz` or `108e.json.gz`.
pub fn file_name(opcode: u16) -> String {
    if opcode > 0xFF {
        format!("{opcode:04x}.json.gz")
    } else {
        format!("{opcode:02x}.json.gz")
    }
}

/// Build one vector for `desc` from random memory and registers.
pub fn generate_case(rng: &mut impl Rng, desc: &OpcodeDescriptor) -> Result<TestCase, CpuError> {
    let mut cpu = M6809::new();
    let mut bus = TracingBus::new();
    rng.fill(&mut bus.memory[..]);

    let max_pc = (0x10000 - desc.bytes as u32) as u16;
    let pc = rng.gen_range(0..=max_pc);
    cpu.a.set(rng.r#gen::<u8>() as i32);
    cpu.b.set(rng.r#gen::<u8>() as i32);
    cpu.dp.set(rng.r#gen::<u8>() as i32);
    cpu.x.set(rng.r#gen::<u16>() as i32);
    cpu.y.set(rng.r#gen::<u16>() as i32);
    cpu.u.set(rng.r#gen::<u16>() as i32);
    cpu.s.set(rng.r#gen::<u16>() as i32);
    cpu.cc.set(rng.r#gen());
    cpu.pc.set(pc as i32);

    // Operand bytes stay random from the fill
    if desc.page() != 0 {
        bus.memory[pc as usize] = desc.page();
        bus.memory[pc as usize + 1] = desc.opcode as u8;
    } else {
        bus.memory[pc as usize] = desc.opcode as u8;
    }

    let before = bus.memory.clone();
    let mut initial = CpuState::capture(&cpu);
    cpu.execute_at(&mut bus, pc)?;
    let mut final_state = CpuState::capture(&cpu);

    let touched = bus.touched();
    initial.ram = ram_at(&before, &touched);
    final_state.ram = ram_at(&bus.memory, &touched);

    let name = format!(
        "{} {}",
        desc.mnemonic,
        (0..desc.bytes as u16)
            .map(|i| format!("{:02x}", before[pc.wrapping_add(i) as usize]))
            .collect::<Vec<_>>()
            .join(" ")
    );

    Ok(TestCase {
        name,
        initial,
        final_state,
        cycles: cpu.cycles,
        accesses: encode_accesses(&bus.accesses),
    })
}

pub fn generate_cases(
    rng: &mut impl Rng,
    desc: &OpcodeDescriptor,
    count: usize,
) -> Result<Vec<TestCase>, CpuError> {
    (0..count).map(|_| generate_case(rng, desc)).collect()
}

/// What one instruction actually did when replayed from a vector's
/// initial state. `final_state.ram` covers the addresses the vector lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replay {
    pub final_state: CpuState,
    pub cycles: u64,
    pub accesses: Vec<(u16, u8, String)>,
}

pub fn replay(tc: &TestCase) -> Result<Replay, CpuError> {
    let mut cpu = M6809::new();
    let mut bus = TracingBus::new();
    tc.initial.apply(&mut cpu, &mut bus);
    cpu.execute_at(&mut bus, tc.initial.pc)?;

    let mut final_state = CpuState::capture(&cpu);
    final_state.ram = tc
        .final_state
        .ram
        .iter()
        .map(|&(addr, _)| (addr, bus.memory[addr as usize]))
        .collect();

    Ok(Replay {
        final_state,
        cycles: cpu.cycles,
        accesses: encode_accesses(&bus.accesses),
    })
}

// --- gzip JSON I/O ---

pub fn write_vectors<W: Write>(writer: W, tests: &[TestCase]) -> io::Result<()> {
    let mut encoder = GzEncoder::new(writer, Compression::default());
    serde_json::to_writer(&mut encoder, tests)?;
    encoder.finish()?;
    Ok(())
}

pub fn read_vectors<R: Read>(reader: R) -> io::Result<Vec<TestCase>> {
    let decoder = GzDecoder::new(reader);
    Ok(serde_json::from_reader(BufReader::new(decoder))?)
}

pub fn save_vectors(path: &Path, tests: &[TestCase]) -> io::Result<()> {
    write_vectors(BufWriter::new(File::create(path)?), tests)
}

pub fn load_vectors(path: &Path) -> io::Result<Vec<TestCase>> {
    read_vectors(File::open(path)?)
}
