use crate::{
    hashes::{hash160, sha256, HASH160_SIZE, SHA256_SIZE},
    opcodes::codes::{
        Op0, OpCheckSig, OpData20, OpData32, OpData36, OpDup, OpEqual, OpEqualVerify, OpHash160, OpReturn,
    },
    script::{decompile, Chunk, Script},
    script_builder::{ScriptBuilder, ScriptBuilderError},
    script_class::ScriptTemplate,
};
use log::trace;
use thiserror::Error;

mod multisig;

pub use multisig::{
    get_multisig_params, is_multisig, is_multisig_chunks, multisig_redeem_script, multisig_redeem_script_sorted,
    Error as MultisigCreateError, MultisigParams,
};

pub const PUB_KEY_COMPRESSED_SIZE: usize = 33;
pub const PUB_KEY_UNCOMPRESSED_SIZE: usize = 65;

const P2SH_SIZE: usize = 23;
const P2PKH_SIZE: usize = 25;
const P2WPKH_SIZE: usize = 22;
const P2WSH_SIZE: usize = 34;
const WITNESS_COMMITMENT_SIZE: usize = 25;

/// OP_RETURN, a 36 byte push and the BIP141 commitment tag 0xaa21a9ed.
const WITNESS_COMMITMENT_HEADER: [u8; 6] = [OpReturn, OpData36, 0xaa, 0x21, 0xa9, 0xed];

#[derive(Error, PartialEq, Eq, Debug, Clone)]
pub enum StandardError {
    #[error("expected a {0} byte hash, got {1} bytes")]
    HashLength(usize, usize),

    #[error("public key is not in a canonical compressed or uncompressed form")]
    NonCanonicalKey,

    #[error(transparent)]
    ScriptBuilderError(#[from] ScriptBuilderError),
}

/// Returns whether `key` is formatted as a compressed (33 bytes, 0x02/0x03 prefix)
/// or uncompressed (65 bytes, 0x04 prefix) public key. The point itself is not validated.
pub fn is_canonical_pubkey(key: &[u8]) -> bool {
    match key.first() {
        Some(0x02 | 0x03) => key.len() == PUB_KEY_COMPRESSED_SIZE,
        Some(0x04) => key.len() == PUB_KEY_UNCOMPRESSED_SIZE,
        _ => false,
    }
}

fn is_canonical_pubkey_chunk(chunk: &Chunk) -> bool {
    chunk.data().is_some_and(is_canonical_pubkey)
}

/// OP_HASH160 <20 bytes> OP_EQUAL
pub fn is_p2sh(script: &[u8]) -> bool {
    script.len() == P2SH_SIZE && script[0] == OpHash160 && script[1] == OpData20 && script[22] == OpEqual
}

/// OP_DUP OP_HASH160 <20 bytes> OP_EQUALVERIFY OP_CHECKSIG
pub fn is_p2pkh(script: &[u8]) -> bool {
    script.len() == P2PKH_SIZE
        && script[0] == OpDup
        && script[1] == OpHash160
        && script[2] == OpData20
        && script[23] == OpEqualVerify
        && script[24] == OpCheckSig
}

/// OP_0 <32 bytes>
pub fn is_p2wsh(script: &[u8]) -> bool {
    script.len() == P2WSH_SIZE && script[0] == Op0 && script[1] == OpData32
}

/// OP_0 <20 bytes>
pub fn is_p2wpkh(script: &[u8]) -> bool {
    script.len() == P2WPKH_SIZE && script[0] == Op0 && script[1] == OpData20
}

/// A 25 byte script opening with OP_RETURN, a 36 byte push opcode and the commitment tag.
///
/// Only the header is inspected, so the script is not required to decompile.
pub fn is_witness_commitment(script: &[u8]) -> bool {
    script.len() == WITNESS_COMMITMENT_SIZE && script.starts_with(&WITNESS_COMMITMENT_HEADER)
}

/// OP_RETURN followed by anything.
pub fn is_null_data(script: &[u8]) -> bool {
    script.len() > 1 && script[0] == OpReturn
}

/// <canonical pubkey> OP_CHECKSIG
pub fn is_p2pk_chunks(chunks: &[Chunk]) -> bool {
    matches!(chunks, [key, checksig] if is_canonical_pubkey_chunk(key) && checksig.is_opcode(OpCheckSig))
}

pub fn is_p2pk(script: &[u8]) -> bool {
    decompile(script).is_ok_and(|chunks| is_p2pk_chunks(&chunks))
}

/// Returns the standard template `script` matches, or [`ScriptTemplate::NonStandard`].
///
/// Templates are tried in a fixed order. The witness commitment is tried before
/// generic null data since every witness commitment also starts with OP_RETURN.
pub fn classify(script: &[u8]) -> ScriptTemplate {
    let chunks = decompile(script);
    let chunks = chunks.as_deref().ok();

    let template = if chunks.is_some_and(is_p2pk_chunks) {
        ScriptTemplate::PubKey
    } else if is_p2pkh(script) {
        ScriptTemplate::PubKeyHash
    } else if chunks.is_some_and(is_multisig_chunks) {
        ScriptTemplate::Multisig
    } else if is_p2sh(script) {
        ScriptTemplate::ScriptHash
    } else if is_p2wpkh(script) {
        ScriptTemplate::WitnessPubKeyHash
    } else if is_p2wsh(script) {
        ScriptTemplate::WitnessScriptHash
    } else if is_witness_commitment(script) {
        ScriptTemplate::WitnessCommitment
    } else if is_null_data(script) {
        ScriptTemplate::NullData
    } else {
        ScriptTemplate::NonStandard
    };

    trace!("classified script {} as {}", hex::encode(script), template);
    template
}

fn check_hash_length(hash: &[u8], expected: usize) -> Result<(), StandardError> {
    if hash.len() != expected {
        return Err(StandardError::HashLength(expected, hash.len()));
    }
    Ok(())
}

/// Creates a script paying directly to a canonical public key.
pub fn pay_to_pub_key(pub_key: &[u8]) -> Result<Script, StandardError> {
    if !is_canonical_pubkey(pub_key) {
        return Err(StandardError::NonCanonicalKey);
    }
    Ok(ScriptBuilder::new().add_data(pub_key)?.add_op(OpCheckSig)?.build())
}

/// Creates a script paying to the hash160 of a public key.
pub fn pay_to_pub_key_hash(pub_key_hash: &[u8]) -> Result<Script, StandardError> {
    check_hash_length(pub_key_hash, HASH160_SIZE)?;
    Ok(ScriptBuilder::new().add_ops(&[OpDup, OpHash160])?.add_data(pub_key_hash)?.add_ops(&[OpEqualVerify, OpCheckSig])?.build())
}

/// Creates a script paying to a script hash.
/// It is expected that the input is the hash160 of the redeem script.
pub fn pay_to_script_hash(script_hash: &[u8]) -> Result<Script, StandardError> {
    check_hash_length(script_hash, HASH160_SIZE)?;
    Ok(ScriptBuilder::new().add_op(OpHash160)?.add_data(script_hash)?.add_op(OpEqual)?.build())
}

/// Takes a redeem script and returns the pay-to-script-hash script locking to it.
pub fn pay_to_script_hash_script(redeem_script: &[u8]) -> Result<Script, StandardError> {
    pay_to_script_hash(&hash160(redeem_script))
}

/// Creates a segwit v0 script paying to the hash160 of a public key.
pub fn pay_to_witness_pub_key_hash(pub_key_hash: &[u8]) -> Result<Script, StandardError> {
    check_hash_length(pub_key_hash, HASH160_SIZE)?;
    Ok(ScriptBuilder::new().add_op(Op0)?.add_data(pub_key_hash)?.build())
}

/// Creates a segwit v0 script paying to the sha256 of a witness script.
pub fn pay_to_witness_script_hash(script_hash: &[u8]) -> Result<Script, StandardError> {
    check_hash_length(script_hash, SHA256_SIZE)?;
    Ok(ScriptBuilder::new().add_op(Op0)?.add_data(script_hash)?.build())
}

pub fn pay_to_witness_script_hash_script(witness_script: &[u8]) -> Result<Script, StandardError> {
    pay_to_witness_script_hash(&sha256(witness_script))
}

/// Creates a provably unspendable output carrying `data`.
pub fn null_data(data: &[u8]) -> Result<Script, StandardError> {
    Ok(ScriptBuilder::new().add_op(OpReturn)?.add_data(data)?.build())
}
