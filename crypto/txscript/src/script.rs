use crate::{
    opcodes::{
        codes::{Op0, Op1Negate, OpPushData1, OpPushData2, OpPushData4},
        is_push_data_op, opcode_from_name, opcode_name, OP_1_NEGATE_VAL, OP_DATA_MAX_VAL, OP_INT_BASE, OP_SMALL_INT_MAX_VAL,
        OP_SMALL_INT_MIN_VAL,
    },
    script_class::ScriptTemplate,
    standard::classify,
};
use itertools::Itertools;
use scriptkit_txscript_errors::TxScriptError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;
use std::{
    fmt::{Debug, Display, Formatter},
    iter::once,
    slice::Iter,
    str::FromStr,
};

/// Size of the inline buffer of a script, enough for every standard output template.
pub const SCRIPT_VECTOR_SIZE: usize = 36;

/// Underlying storage of a [`Script`].
pub type ScriptVec = SmallVec<[u8; SCRIPT_VECTOR_SIZE]>;

/// One decoded element of a script.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Chunk {
    /// A non-push opcode, or a push that is expressed by its opcode alone (Op0, Op1Negate, Op1..=Op16).
    Opcode(u8),
    /// Bytes carried by an OpData#/OpPushData# push.
    Data(Vec<u8>),
}

impl Chunk {
    /// Builds the chunk a push of `data` decompiles to, folding minimal pushes into their opcode.
    pub fn from_push(data: Vec<u8>) -> Self {
        match minimal_op(&data) {
            Some(opcode) => Chunk::Opcode(opcode),
            None => Chunk::Data(data),
        }
    }

    pub fn opcode(&self) -> Option<u8> {
        match self {
            Chunk::Opcode(opcode) => Some(*opcode),
            Chunk::Data(_) => None,
        }
    }

    pub fn data(&self) -> Option<&[u8]> {
        match self {
            Chunk::Opcode(_) => None,
            Chunk::Data(data) => Some(data),
        }
    }

    pub fn is_opcode(&self, opcode: u8) -> bool {
        self.opcode() == Some(opcode)
    }
}

impl Display for Chunk {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Chunk::Opcode(opcode) => f.write_str(opcode_name(*opcode)),
            Chunk::Data(data) => f.write_str(&hex::encode(data)),
        }
    }
}

/// Returns the single opcode that pushes `data`, if BIP62 requires one.
fn minimal_op(data: &[u8]) -> Option<u8> {
    match data {
        [] => Some(Op0),
        [value @ OP_SMALL_INT_MIN_VAL..=OP_SMALL_INT_MAX_VAL] => Some(OP_INT_BASE + value),
        [OP_1_NEGATE_VAL] => Some(Op1Negate),
        _ => None,
    }
}

/// Returns the number of bytes the canonical push of `data` takes.
pub(crate) fn canonical_push_size(data: &[u8]) -> usize {
    if minimal_op(data).is_some() {
        return 1;
    }

    let data_len = data.len();
    data_len
        + if data_len <= OP_DATA_MAX_VAL as usize {
            1 // length encoded as OpData#
        } else if data_len <= u8::MAX as usize {
            2 // length encoded as OpPushData1 + 1 byte for value
        } else if data_len <= u16::MAX as usize {
            3 // length encoded as OpPushData2 + 2 bytes for value
        } else {
            5 // length encoded as OpPushData4 + 4 bytes for value
        }
}

/// Appends the canonical push of `data`. No size limits are enforced here.
pub(crate) fn write_push<E: Extend<u8>>(out: &mut E, data: &[u8]) {
    if let Some(opcode) = minimal_op(data) {
        out.extend(once(opcode));
        return;
    }

    let data_len = data.len();
    if data_len <= OP_DATA_MAX_VAL as usize {
        out.extend(once(data_len as u8));
    } else if data_len <= u8::MAX as usize {
        out.extend(once(OpPushData1).chain(once(data_len as u8)));
    } else if data_len <= u16::MAX as usize {
        out.extend(once(OpPushData2).chain((data_len as u16).to_le_bytes()));
    } else {
        out.extend(once(OpPushData4).chain((data_len as u32).to_le_bytes()));
    }
    out.extend(data.iter().copied());
}

/// One operation exactly as encoded in a script. `data` is empty for non push opcodes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RawOp<'a> {
    pub opcode: u8,
    pub data: &'a [u8],
}

impl RawOp<'_> {
    pub fn is_push(&self) -> bool {
        is_push_data_op(self.opcode)
    }

    pub fn to_chunk(&self) -> Chunk {
        if self.is_push() {
            Chunk::from_push(self.data.to_vec())
        } else {
            Chunk::Opcode(self.opcode)
        }
    }
}

/// Splits `n` bytes off the front of the iterator. On failure the iterator is
/// exhausted and the bytes that were available are returned.
fn take_bytes<'a>(it: &mut Iter<'a, u8>, n: usize) -> Result<&'a [u8], &'a [u8]> {
    let rest = it.as_slice();
    if rest.len() < n {
        *it = Default::default();
        return Err(rest);
    }
    let (taken, remaining) = rest.split_at(n);
    *it = remaining.iter();
    Ok(taken)
}

fn read_push_length(it: &mut Iter<'_, u8>, size: usize) -> Result<usize, TxScriptError> {
    let bytes = take_bytes(it, size).map_err(|bytes| TxScriptError::MalformedPushSize(bytes.to_vec()))?;
    let mut le = [0u8; 4];
    le[..size].copy_from_slice(bytes);
    Ok(u32::from_le_bytes(le) as usize)
}

/// Width of the little endian length prefix of an OP_PUSHDATA opcode.
fn push_length_size(opcode: u8) -> Option<usize> {
    if opcode == OpPushData1 {
        Some(1)
    } else if opcode == OpPushData2 {
        Some(2)
    } else if opcode == OpPushData4 {
        Some(4)
    } else {
        None
    }
}

fn deserialize_next_op<'a>(it: &mut Iter<'a, u8>) -> Option<Result<RawOp<'a>, TxScriptError>> {
    let opcode = *it.next()?;
    if !is_push_data_op(opcode) {
        return Some(Ok(RawOp { opcode, data: &[] }));
    }

    let length = match push_length_size(opcode) {
        Some(size) => read_push_length(it, size),
        None => Ok(opcode as usize),
    };
    Some(length.and_then(|length| {
        let data = take_bytes(it, length).map_err(|available| TxScriptError::MalformedPush(length, available.len()))?;
        Ok(RawOp { opcode, data })
    }))
}

/// Lazily walks the operations of `script` as they are encoded, without folding pushes.
/// Iteration yields an error at the first malformed push and stops.
pub fn parse_raw_ops(script: &[u8]) -> impl Iterator<Item = Result<RawOp<'_>, TxScriptError>> + '_ {
    script.iter().batching(|it| deserialize_next_op(it))
}

/// Lazily parses `script` into chunks. Iteration yields an error at the first malformed push.
pub fn parse_script(script: &[u8]) -> impl Iterator<Item = Result<Chunk, TxScriptError>> + '_ {
    parse_raw_ops(script).map_ok(|op| op.to_chunk())
}

/// Decodes a compiled script into its chunks, failing as a whole on any malformed push.
pub fn decompile(script: &[u8]) -> Result<Vec<Chunk>, TxScriptError> {
    parse_script(script).collect()
}

/// Encodes chunks into the canonical binary form of a script.
pub fn compile(chunks: &[Chunk]) -> Script {
    let mut script = ScriptVec::new();
    for chunk in chunks {
        match chunk {
            Chunk::Opcode(opcode) => script.push(*opcode),
            Chunk::Data(data) => write_push(&mut script, data),
        }
    }
    Script(script)
}

/// A compiled script. Read-only once constructed.
#[derive(Default, Clone, PartialEq, Eq, Hash)]
pub struct Script(ScriptVec);

impl Script {
    pub fn from_slice(script: &[u8]) -> Self {
        Self(ScriptVec::from_slice(script))
    }

    pub fn from_vec(script: Vec<u8>) -> Self {
        Self(ScriptVec::from_vec(script))
    }

    pub fn from_hex(hex_str: &str) -> Result<Self, TxScriptError> {
        hex::decode(hex_str.trim()).map(Self::from_vec).map_err(|err| TxScriptError::InvalidHex(err.to_string()))
    }

    /// Parses the space separated ASM form, e.g. `OP_DUP OP_HASH160 <hex> OP_EQUALVERIFY OP_CHECKSIG`.
    pub fn from_asm(asm: &str) -> Result<Self, TxScriptError> {
        let chunks = asm
            .split_whitespace()
            .map(|token| match opcode_from_name(token) {
                Some(opcode) if is_push_data_op(opcode) => Err(TxScriptError::InvalidAsm(token.to_string())),
                Some(opcode) => Ok(Chunk::Opcode(opcode)),
                None => hex::decode(token).map(Chunk::Data).map_err(|_| TxScriptError::InvalidAsm(token.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(compile(&chunks))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    pub fn chunks(&self) -> Result<Vec<Chunk>, TxScriptError> {
        decompile(&self.0)
    }

    pub fn to_asm(&self) -> Result<String, TxScriptError> {
        Ok(self.chunks()?.iter().join(" "))
    }

    pub fn classify(&self) -> ScriptTemplate {
        classify(&self.0)
    }
}

impl AsRef<[u8]> for Script {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Script {
    fn from(script: Vec<u8>) -> Self {
        Self::from_vec(script)
    }
}

impl From<&[u8]> for Script {
    fn from(script: &[u8]) -> Self {
        Self::from_slice(script)
    }
}

impl FromStr for Script {
    type Err = TxScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Display for Script {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Debug for Script {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Script({})", self.to_hex())
    }
}

impl Serialize for Script {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Script {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex_str = String::deserialize(deserializer)?;
        Self::from_hex(&hex_str).map_err(serde::de::Error::custom)
    }
}
