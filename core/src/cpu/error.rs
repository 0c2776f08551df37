use thiserror::Error;

/// Runtime failures surfaced by `step`/`run`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CpuError {
    /// The fetched opcode has no dispatch entry. PC no longer points at a
    /// known instruction stream, so the run cannot continue.
    #[error("${address:04x} *** UNKNOWN OP ${opcode:x}")]
    UnknownOpcode { address: u16, opcode: u16 },

    /// A bounded test run used up its step budget before reaching its end address.
    #[error("max ops {max_ops} arrived before PC reached ${end:04x}")]
    MaxOpsReached { max_ops: u64, end: u16 },
}

/// Mismatch between the static opcode table and the instruction families.
/// Raised while building the dispatch table; never recoverable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("opcode ${opcode:04x} claimed by both {first} and {second}")]
    DuplicateOpcode {
        opcode: u16,
        first: String,
        second: String,
    },

    #[error("opcode table lists ${opcode:04x} more than once")]
    DuplicateDescriptor { opcode: u16 },

    #[error("{family} claims opcode ${opcode:04x}, which has no descriptor")]
    MissingDescriptor { opcode: u16, family: String },

    #[error("descriptor ${opcode:04x} ({mnemonic}) is not claimed by any instruction")]
    UnclaimedOpcode { opcode: u16, mnemonic: &'static str },

    #[error("no calling wrapper fits ${opcode:04x} ({mnemonic})")]
    UnsupportedWrapper { opcode: u16, mnemonic: &'static str },
}
