//! Bitcoin script tooling: opcode table, script compilation and decompilation,
//! recognition of the standard output templates and builders producing them.

pub mod hashes;
pub mod opcodes;
pub mod script;
pub mod script_builder;
pub mod script_class;
pub mod standard;
pub mod viewer;

pub use scriptkit_txscript_errors::TxScriptError;

pub use script::{compile, decompile, parse_raw_ops, parse_script, Chunk, RawOp, Script, ScriptVec};
pub use script_class::ScriptTemplate;
pub use standard::*;
pub use viewer::ScriptViewer;

/// Maximum size in bytes of a script the builder will produce.
pub const MAX_SCRIPTS_SIZE: usize = 10_000;

/// Maximum size in bytes of a single pushed element.
pub const MAX_SCRIPT_ELEMENT_SIZE: usize = 520;

/// Maximum number of public keys in a bare multisig script.
pub const MAX_PUB_KEYS_PER_MULTISIG: usize = 16;

pub mod prelude {
    pub use super::{
        classify, compile, decompile, multisig_redeem_script, multisig_redeem_script_sorted, Chunk, Script, ScriptTemplate,
        TxScriptError,
    };
}
