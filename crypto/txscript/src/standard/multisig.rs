use super::is_canonical_pubkey;
use crate::{
    opcodes::{codes::OpCheckMultiSig, OP_INT_BASE},
    script::{decompile, Chunk, Script},
    script_builder::{ScriptBuilder, ScriptBuilderError},
    MAX_PUB_KEYS_PER_MULTISIG,
};
use thiserror::Error;

#[derive(Error, PartialEq, Eq, Debug, Clone)]
pub enum Error {
    // TooManyRequiredSigs is returned when the specified number of required
    // signatures is larger than the number of provided public keys.
    #[error("too many required signatures")]
    TooManyRequiredSigs,
    #[error("at least one signature must be required")]
    ZeroRequiredSigs,
    #[error(transparent)]
    ScriptBuilderError(#[from] ScriptBuilderError),
    #[error("provided public keys should not be empty")]
    EmptyKeys,
    #[error("a multisig script accepts at most {MAX_PUB_KEYS_PER_MULTISIG} public keys")]
    TooManyKeys,
    #[error("public key at index {0} is not canonical")]
    NonCanonicalKey(usize),
}

/// The `m {pubkey}...{pubkey} n OP_CHECKMULTISIG` parameters of a bare multisig script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultisigParams<'a> {
    pub required: usize,
    pub signers: usize,
    pub pub_keys: Vec<&'a [u8]>,
}

/// Extracts the multisig parameters from decompiled chunks, or `None` if they are
/// not a standard `m {pubkey}...{pubkey} n OP_CHECKMULTISIG` script.
///
/// `m` and `n` must be opcode chunks; their value is taken relative to OP_RESERVED,
/// so any opcode in that position is accepted as long as the resulting bounds hold:
/// `0 < m <= n <= 16` and `n` equal to the number of keys.
pub fn get_multisig_params(chunks: &[Chunk]) -> Option<MultisigParams<'_>> {
    if chunks.len() < 4 {
        return None;
    }
    let [first, keys @ .., n_chunk, last] = chunks else {
        return None;
    };
    if !last.is_opcode(OpCheckMultiSig) {
        return None;
    }
    let (Chunk::Opcode(m_op), Chunk::Opcode(n_op)) = (first, n_chunk) else {
        return None;
    };

    let m = *m_op as i32 - OP_INT_BASE as i32;
    let n = *n_op as i32 - OP_INT_BASE as i32;
    if m <= 0 || n > MAX_PUB_KEYS_PER_MULTISIG as i32 || m > n || n as usize != keys.len() {
        return None;
    }

    let pub_keys = keys.iter().map(|chunk| chunk.data().filter(|key| is_canonical_pubkey(key))).collect::<Option<Vec<_>>>()?;
    Some(MultisigParams { required: m as usize, signers: n as usize, pub_keys })
}

pub fn is_multisig_chunks(chunks: &[Chunk]) -> bool {
    get_multisig_params(chunks).is_some()
}

/// Returns whether `script` is a bare m-of-n multisig. Scripts that fail to decompile never are.
pub fn is_multisig(script: &[u8]) -> bool {
    decompile(script).is_ok_and(|chunks| is_multisig_chunks(&chunks))
}

/// Generates a multi-signature redeem script from sorted public keys.
///
/// This function builds a redeem script requiring `required` out of the
/// already sorted `pub_keys` given. It is expected that the public keys
/// are provided in a sorted order.
///
/// # Parameters
///
/// * `pub_keys`: An iterator over sorted serialized public keys.
/// * `required`: The number of required signatures to spend the funds.
///
/// # Errors
///
/// This function will return an error if:
/// * `required` is zero or larger than the number of provided keys.
/// * There are no public keys provided, or more than [`MAX_PUB_KEYS_PER_MULTISIG`].
/// * A public key is not in a canonical compressed or uncompressed form.
pub fn multisig_redeem_script_sorted<K: AsRef<[u8]>>(pub_keys: impl IntoIterator<Item = K>, required: usize) -> Result<Script, Error> {
    if required == 0 {
        return Err(Error::ZeroRequiredSigs);
    }
    let pub_keys = pub_keys.into_iter();
    if pub_keys.size_hint().1.is_some_and(|upper| upper < required) {
        return Err(Error::TooManyRequiredSigs);
    };

    let mut builder = ScriptBuilder::new();
    builder.add_i64(required as i64)?;

    let mut count = 0usize;
    for pub_key in pub_keys {
        let pub_key = pub_key.as_ref();
        if !is_canonical_pubkey(pub_key) {
            return Err(Error::NonCanonicalKey(count));
        }
        count += 1;
        if count > MAX_PUB_KEYS_PER_MULTISIG {
            return Err(Error::TooManyKeys);
        }
        builder.add_data(pub_key)?;
    }
    if count == 0 {
        return Err(Error::EmptyKeys);
    }
    if count < required {
        return Err(Error::TooManyRequiredSigs);
    }

    builder.add_i64(count as i64)?;
    builder.add_op(OpCheckMultiSig)?;

    Ok(builder.build())
}

/// This function sorts the provided public keys lexicographically (BIP67) and
/// then constructs a redeem script requiring `required` out of the sorted keys.
///
/// # Parameters
///
/// * `pub_keys`: A mutable slice of serialized public keys. The keys can be in any order.
/// * `required`: The number of required signatures to spend the funds.
///
/// # Errors
///
/// Same as [`multisig_redeem_script_sorted`].
pub fn multisig_redeem_script<K: AsRef<[u8]> + Ord>(pub_keys: &mut [K], required: usize) -> Result<Script, Error> {
    pub_keys.sort();
    multisig_redeem_script_sorted(pub_keys.iter(), required)
}
