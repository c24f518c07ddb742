use crate::{
    opcodes::{
        codes::{Op0, Op1Negate},
        OP_INT_BASE,
    },
    script::{canonical_push_size, write_push, Script},
    MAX_SCRIPTS_SIZE, MAX_SCRIPT_ELEMENT_SIZE,
};
use hexplay::{HexView, HexViewBuilder};
use thiserror::Error;

/// Initial capacity of a builder. Every standard output template fits in it.
const DEFAULT_SCRIPT_ALLOC: usize = 128;

#[derive(Error, PartialEq, Eq, Debug, Clone, Copy)]
pub enum ScriptBuilderError {
    #[error("script would grow to {0} bytes, over the {MAX_SCRIPTS_SIZE} byte limit")]
    ScriptTooLong(usize),

    #[error("data element of {0} bytes is over the {MAX_SCRIPT_ELEMENT_SIZE} byte limit")]
    ElementTooLarge(usize),
}

pub type ScriptBuilderResult<T> = std::result::Result<T, ScriptBuilderError>;

/// Appends opcodes and canonically encoded pushes to a script.
///
/// A rejected append leaves the script as it was. A pay to pubkey hash output:
///
/// ```
/// use scriptkit_txscript::opcodes::codes::*;
/// use scriptkit_txscript::script_builder::{ScriptBuilder, ScriptBuilderResult};
///
/// fn p2pkh(pub_key_hash: &[u8; 20]) -> ScriptBuilderResult<Vec<u8>> {
///     Ok(ScriptBuilder::new().add_ops(&[OpDup, OpHash160])?.add_data(pub_key_hash)?.add_ops(&[OpEqualVerify, OpCheckSig])?.drain())
/// }
///
/// assert_eq!(p2pkh(&[0; 20]).unwrap().len(), 25);
/// ```
pub struct ScriptBuilder {
    script: Vec<u8>,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self { script: Vec::with_capacity(DEFAULT_SCRIPT_ALLOC) }
    }

    pub fn script(&self) -> &[u8] {
        &self.script
    }

    /// Takes the bytes built so far, leaving the builder empty.
    pub fn drain(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.script)
    }

    pub fn build(&mut self) -> Script {
        Script::from_vec(self.drain())
    }

    fn check_growth(&self, additional: usize) -> ScriptBuilderResult<()> {
        let new_len = self.script.len() + additional;
        if new_len > MAX_SCRIPTS_SIZE {
            return Err(ScriptBuilderError::ScriptTooLong(new_len));
        }
        Ok(())
    }

    pub fn add_op(&mut self, opcode: u8) -> ScriptBuilderResult<&mut Self> {
        self.check_growth(1)?;
        self.script.push(opcode);
        Ok(self)
    }

    /// Appends raw bytes as they are, without interpreting them.
    pub fn add_ops(&mut self, opcodes: &[u8]) -> ScriptBuilderResult<&mut Self> {
        self.check_growth(opcodes.len())?;
        self.script.extend_from_slice(opcodes);
        Ok(self)
    }

    /// Pushes `data` with the shortest encoding BIP62 allows: OP_0 for nothing,
    /// OP_1..OP_16 and OP_1NEGATE for the matching single bytes, and otherwise the
    /// smallest of OP_PUSHBYTES_n, OP_PUSHDATA1 and OP_PUSHDATA2.
    pub fn add_data(&mut self, data: &[u8]) -> ScriptBuilderResult<&mut Self> {
        if data.len() > MAX_SCRIPT_ELEMENT_SIZE {
            return Err(ScriptBuilderError::ElementTooLarge(data.len()));
        }
        self.check_growth(canonical_push_size(data))?;
        write_push(&mut self.script, data);
        Ok(self)
    }

    /// Pushes a number, as a small integer opcode when one exists.
    pub fn add_i64(&mut self, val: i64) -> ScriptBuilderResult<&mut Self> {
        match val {
            0 => self.add_op(Op0),
            -1 => self.add_op(Op1Negate),
            1..=16 => self.add_op(OP_INT_BASE + val as u8),
            _ => self.add_data(&serialize_script_num(val)),
        }
    }

    pub fn hex_view(&self, offset: usize, width: usize) -> HexView<'_> {
        HexViewBuilder::new(&self.script).address_offset(offset).row_width(width).finish()
    }
}

impl Default for ScriptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimal little-endian sign-magnitude encoding of a script number.
fn serialize_script_num(val: i64) -> Vec<u8> {
    let mut magnitude = val.unsigned_abs();
    let mut bytes = Vec::with_capacity(9);
    while magnitude > 0 {
        bytes.push((magnitude & 0xff) as u8);
        magnitude >>= 8;
    }

    // The sign lives in the high bit of the last byte.
    if bytes.last().is_some_and(|last| last & 0x80 != 0) {
        bytes.push(if val < 0 { 0x80 } else { 0x00 });
    } else if val < 0 {
        if let Some(last) = bytes.last_mut() {
            *last |= 0x80;
        }
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opcodes::codes::*;
    use std::iter::{once, repeat_n};

    fn pushed(prefix: &[u8], byte: u8, count: usize) -> Vec<u8> {
        prefix.iter().copied().chain(repeat_n(byte, count)).collect()
    }

    #[test]
    fn test_add_ops() {
        let mut builder = ScriptBuilder::new();
        builder.add_op(OpFalse).unwrap().add_op(OpTrue).unwrap().add_ops(&[OpHash160, OpEqual]).unwrap();
        assert_eq!(builder.script(), &[Op0, Op1, OpHash160, OpEqual]);

        assert_eq!(builder.drain(), vec![Op0, Op1, OpHash160, OpEqual]);
        assert!(builder.script().is_empty());
        builder.add_ops(&[]).unwrap();
        assert!(builder.build().is_empty());
    }

    #[test]
    fn test_add_i64() {
        struct Test {
            val: i64,
            expected: Vec<u8>,
        }

        let mut tests = vec![Test { val: -1, expected: vec![Op1Negate] }, Test { val: 0, expected: vec![Op0] }];
        tests.extend((1..=16).map(|val| Test { val, expected: vec![OP_INT_BASE + val as u8] }));
        tests.extend([
            Test { val: 17, expected: vec![OpData1, 0x11] },
            Test { val: 127, expected: vec![OpData1, 0x7f] },
            Test { val: 128, expected: vec![OpData2, 0x80, 0x00] },
            Test { val: 256, expected: vec![OpData2, 0x00, 0x01] },
            Test { val: 32768, expected: vec![OpData3, 0x00, 0x80, 0x00] },
            Test { val: -2, expected: vec![OpData1, 0x82] },
            Test { val: -128, expected: vec![OpData2, 0x80, 0x80] },
            Test { val: -256, expected: vec![OpData2, 0x00, 0x81] },
            Test { val: i64::MAX, expected: pushed(&[OpData8], 0xff, 7).into_iter().chain(once(0x7f)).collect() },
            Test { val: i64::MIN, expected: pushed(&[OpData9], 0x00, 7).into_iter().chain([0x80, 0x80]).collect() },
        ]);

        for test in tests {
            let mut builder = ScriptBuilder::new();
            builder.add_i64(test.val).unwrap();
            assert_eq!(builder.script(), test.expected, "wrong encoding of {}", test.val);
        }
    }

    #[test]
    fn test_add_data() {
        struct Test {
            name: String,
            data: Vec<u8>,
            expected: ScriptBuilderResult<Vec<u8>>,
        }

        let mut tests = vec![
            Test { name: "empty".into(), data: vec![], expected: Ok(vec![Op0]) },
            // Not folded into OP_0: an empty item and a zero byte differ on the stack.
            Test { name: "zero byte".into(), data: vec![0x00], expected: Ok(vec![OpData1, 0x00]) },
            Test { name: "0x81".into(), data: vec![0x81], expected: Ok(vec![Op1Negate]) },
            Test { name: "0x11".into(), data: vec![0x11], expected: Ok(vec![OpData1, 0x11]) },
            Test { name: "0x80".into(), data: vec![0x80], expected: Ok(vec![OpData1, 0x80]) },
        ];
        tests.extend((0x01..=0x10u8).map(|byte| Test { name: format!("{byte:#04x}"), data: vec![byte], expected: Ok(vec![OP_INT_BASE + byte]) }));
        tests.extend([
            Test { name: "75 bytes".into(), data: vec![0xaa; 75], expected: Ok(pushed(&[OpData75], 0xaa, 75)) },
            Test { name: "76 bytes".into(), data: vec![0xaa; 76], expected: Ok(pushed(&[OpPushData1, 76], 0xaa, 76)) },
            Test { name: "255 bytes".into(), data: vec![0xaa; 255], expected: Ok(pushed(&[OpPushData1, 0xff], 0xaa, 255)) },
            Test { name: "256 bytes".into(), data: vec![0xaa; 256], expected: Ok(pushed(&[OpPushData2, 0x00, 0x01], 0xaa, 256)) },
            Test { name: "520 bytes".into(), data: vec![0xaa; 520], expected: Ok(pushed(&[OpPushData2, 0x08, 0x02], 0xaa, 520)) },
            Test { name: "521 bytes".into(), data: vec![0xaa; 521], expected: Err(ScriptBuilderError::ElementTooLarge(521)) },
        ]);

        for test in tests {
            let mut builder = ScriptBuilder::new();
            let result = builder.add_data(&test.data).map(|b| b.drain());
            assert_eq!(result, test.expected, "add_data test failed for '{}'", test.name);
        }
    }

    #[test]
    fn test_script_size_limit() {
        let mut builder = ScriptBuilder::new();
        builder.add_ops(&[OpNop; MAX_SCRIPTS_SIZE - 1]).unwrap();
        let before = builder.script().to_vec();

        assert_eq!(builder.add_data(&[0x42]).err(), Some(ScriptBuilderError::ScriptTooLong(MAX_SCRIPTS_SIZE + 1)));
        assert_eq!(builder.add_ops(&[OpDup, OpDup]).err(), Some(ScriptBuilderError::ScriptTooLong(MAX_SCRIPTS_SIZE + 1)));
        assert_eq!(builder.add_i64(17).err(), Some(ScriptBuilderError::ScriptTooLong(MAX_SCRIPTS_SIZE + 1)));
        assert_eq!(builder.script(), &before[..]);

        builder.add_i64(16).unwrap();
        assert_eq!(builder.script().len(), MAX_SCRIPTS_SIZE);
        assert_eq!(builder.add_op(OpCheckSig).err(), Some(ScriptBuilderError::ScriptTooLong(MAX_SCRIPTS_SIZE + 1)));
    }

    #[test]
    fn test_build_and_hex_view() {
        let mut builder = ScriptBuilder::new();
        builder.add_op(OpReturn).unwrap().add_data(b"hello").unwrap();
        assert!(builder.hex_view(0, 16).to_string().contains("6a"));
        let script = builder.build();
        assert_eq!(script.to_hex(), "6a0568656c6c6f");
        assert!(builder.script().is_empty());
    }
}
