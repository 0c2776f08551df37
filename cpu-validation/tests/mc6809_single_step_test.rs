use std::path::Path;

use mc6809_core::cpu::m6809::opcodes::descriptor;
use mc6809_validation::{
    CpuState, Replay, TestCase, generate_cases, load_vectors, read_vectors, replay,
    testable_opcodes, write_vectors,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn run_test_case(tc: &TestCase) {
    let Replay {
        final_state,
        cycles,
        accesses,
    } = replay(tc).unwrap_or_else(|e| panic!("{}: {e}", tc.name));

    let expected = &tc.final_state;
    assert_eq!(final_state.pc, expected.pc, "{}: PC", tc.name);
    assert_eq!(final_state.a, expected.a, "{}: A", tc.name);
    assert_eq!(final_state.b, expected.b, "{}: B", tc.name);
    assert_eq!(final_state.dp, expected.dp, "{}: DP", tc.name);
    assert_eq!(final_state.x, expected.x, "{}: X", tc.name);
    assert_eq!(final_state.y, expected.y, "{}: Y", tc.name);
    assert_eq!(final_state.u, expected.u, "{}: U", tc.name);
    assert_eq!(final_state.s, expected.s, "{}: S", tc.name);
    assert_eq!(final_state.cc, expected.cc, "{}: CC", tc.name);
    assert_eq!(final_state.ram, expected.ram, "{}: RAM", tc.name);
    assert_eq!(cycles, tc.cycles, "{}: cycle count", tc.name);
    assert_eq!(accesses, tc.accesses, "{}: bus accesses", tc.name);
}

fn access(addr: u16, data: u8, op: &str) -> (u16, u8, String) {
    (addr, data, op.to_string())
}

fn state(pc: u16, ram: &[(u16, u8)]) -> CpuState {
    CpuState {
        pc,
        ram: ram.to_vec(),
        ..Default::default()
    }
}

// =================================================================
// Hand-written vectors
// =================================================================

#[test]
fn test_lda_immediate_vector() {
    let ram = [(0x1000, 0x86), (0x1001, 0x80)];
    let tc = TestCase {
        name: "LDA 86 80".into(),
        initial: state(0x1000, &ram),
        final_state: CpuState {
            a: 0x80,
            cc: 0x08,
            ..state(0x1002, &ram)
        },
        cycles: 2,
        accesses: vec![access(0x1000, 0x86, "read"), access(0x1001, 0x80, "read")],
    };
    run_test_case(&tc);
}

#[test]
fn test_sta_extended_vector() {
    let code = [(0x3000, 0xB7), (0x3001, 0x20), (0x3002, 0x00)];
    let mut initial = state(0x3000, &code);
    initial.a = 0x5A;
    initial.ram.push((0x2000, 0x00));
    let mut final_state = state(0x3003, &code);
    final_state.a = 0x5A;
    final_state.ram.push((0x2000, 0x5A));

    let tc = TestCase {
        name: "STA b7 20 00".into(),
        initial,
        final_state,
        cycles: 5,
        accesses: vec![
            access(0x3000, 0xB7, "read"),
            access(0x3001, 0x20, "read"),
            access(0x3002, 0x00, "read"),
            access(0x2000, 0x5A, "write"),
        ],
    };
    run_test_case(&tc);
}

#[test]
fn test_paged_ldy_vector() {
    let code = [(0x0400, 0x10), (0x0401, 0x8E), (0x0402, 0x12), (0x0403, 0x34)];
    let mut final_state = state(0x0404, &code);
    final_state.y = 0x1234;
    let tc = TestCase {
        name: "LDY 10 8e 12 34".into(),
        initial: state(0x0400, &code),
        final_state,
        cycles: 5,
        accesses: code.iter().map(|&(a, d)| access(a, d, "read")).collect(),
    };
    run_test_case(&tc);
}

// =================================================================
// Generated vectors
// =================================================================

#[test]
fn test_generated_vectors_replay_for_every_opcode() {
    let mut rng = StdRng::seed_from_u64(0x6809);
    let mut total = 0;
    for desc in testable_opcodes() {
        let tests = generate_cases(&mut rng, desc, 16).expect("generate");
        for tc in &tests {
            assert!(tc.name.starts_with(desc.mnemonic));
            assert!(tc.cycles >= desc.cycles as u64, "{}: too few cycles", tc.name);
            run_test_case(tc);
        }
        total += tests.len();
    }
    assert!(total > 1000);
}

#[test]
fn test_generation_is_deterministic_per_seed() {
    let desc = descriptor(0xE3).expect("ADDD indexed");
    let first = generate_cases(&mut StdRng::seed_from_u64(1), desc, 8).unwrap();
    let again = generate_cases(&mut StdRng::seed_from_u64(1), desc, 8).unwrap();
    let other = generate_cases(&mut StdRng::seed_from_u64(2), desc, 8).unwrap();
    assert_eq!(first, again);
    assert_ne!(first, other);
}

#[test]
fn test_vectors_survive_gzip_json() {
    let desc = descriptor(0x34).expect("PSHS");
    let tests = generate_cases(&mut StdRng::seed_from_u64(7), desc, 32).unwrap();

    let mut buffer = Vec::new();
    write_vectors(&mut buffer, &tests).unwrap();
    assert_eq!(&buffer[..2], &[0x1F, 0x8B], "gzip magic");

    let back = read_vectors(buffer.as_slice()).unwrap();
    assert_eq!(back, tests);
    let json = serde_json::to_value(&back[0]).unwrap();
    assert!(json.get("final").is_some());
}

/// Replays whatever `gen_mc6809_tests` has written, if anything.
#[test]
fn test_vectors_on_disk() {
    let test_dir = Path::new("test_data/mc6809");
    let Ok(entries) = std::fs::read_dir(test_dir) else {
        eprintln!("no vectors in {}, skipping", test_dir.display());
        return;
    };

    let mut files: Vec<_> = entries
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.to_string_lossy().ends_with(".json.gz").then_some(path)
        })
        .collect();
    files.sort();

    let mut total_tests = 0;
    for path in &files {
        let tests = load_vectors(path).unwrap_or_else(|e| panic!("{}: {e}", path.display()));
        assert!(!tests.is_empty(), "{} is empty", path.display());
        for tc in &tests {
            run_test_case(tc);
        }
        total_tests += tests.len();
    }
    eprintln!("validated {total_tests} tests across {} opcode files", files.len());
}
