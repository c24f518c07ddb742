use crate::{
    opcodes::{codes, opcode_name, to_small_int},
    script::{parse_raw_ops, Chunk, RawOp},
    standard::get_multisig_params,
    TxScriptError,
};
use std::fmt::{Display, Formatter};

/// Renders a script one operation per line, indenting conditional branches.
pub struct ScriptViewer<'a> {
    script: &'a [u8],
}

impl<'a> ScriptViewer<'a> {
    pub fn new(script: &'a [u8]) -> Self {
        Self { script }
    }

    pub fn disassemble(&self) -> Result<String, TxScriptError> {
        self.render(true)
    }

    /// Pushed data is expanded as a redeem script only at the top level.
    fn render(&self, expand_pushes: bool) -> Result<String, TxScriptError> {
        let ops: Vec<RawOp> = parse_raw_ops(self.script).collect::<Result<_, _>>()?;
        let chunks: Vec<Chunk> = ops.iter().map(RawOp::to_chunk).collect();
        let mut s = String::new();
        let mut indent_level: usize = 0;

        for (i, op) in ops.iter().enumerate() {
            let value = op.opcode;

            if value == codes::OpEndIf || value == codes::OpElse {
                indent_level = indent_level.saturating_sub(1);
            }

            s.push_str(&"  ".repeat(indent_level));
            s.push_str(opcode_name(value));

            if (codes::OpData1..=codes::OpData75).contains(&value) {
                s.push(' ');
                s.push_str(&hex::encode(op.data));
            } else if value == codes::OpPushData1 || value == codes::OpPushData2 || value == codes::OpPushData4 {
                s.push(' ');
                s.push_str(&op.data.len().to_string());
                s.push(' ');
                s.push_str(&hex::encode(op.data));

                // try to disassemble the data as a script
                if expand_pushes {
                    if let Ok(sub_disassembly) = ScriptViewer::new(op.data).render(false) {
                        if sub_disassembly.contains("OP_") {
                            s.push_str("\n    -- Begin Redeem Script --\n");
                            let indented = sub_disassembly.lines().map(|line| format!("    {}", line)).collect::<Vec<_>>().join("\n");
                            s.push_str(&indented);
                            s.push_str("\n    -- End Redeem Script --");
                        }
                    }
                }
            } else if value == codes::OpCheckMultiSig {
                if let Some((required, signers)) = multisig_counts(&chunks[..=i]) {
                    s.push_str(&format!(" // {} of {}", required, signers));
                }
            }

            s.push('\n');

            if value == codes::OpIf || value == codes::OpNotIf || value == codes::OpElse {
                indent_level += 1;
            }
        }
        Ok(s)
    }
}

/// Finds the standard multisig ending at the last chunk, which must be OP_CHECKMULTISIG.
fn multisig_counts(chunks: &[Chunk]) -> Option<(usize, usize)> {
    let n_chunk = chunks.get(chunks.len().checked_sub(2)?)?;
    let n = to_small_int(n_chunk.opcode()?) as usize;
    let start = chunks.len().checked_sub(n + 3)?;
    get_multisig_params(&chunks[start..]).map(|params| (params.required, params.signers))
}

impl Display for ScriptViewer<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self.disassemble() {
            Ok(s) => f.write_str(&s),
            Err(e) => write!(f, "Error disassembling script: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        opcodes::codes::*,
        standard::{multisig_redeem_script, pay_to_pub_key_hash, pay_to_script_hash_script},
    };

    #[test]
    fn test_disassemble() {
        struct Test {
            name: &'static str,
            script: Vec<u8>,
            expected: Result<&'static str, TxScriptError>,
        }

        // cspell:disable
        let tests = vec![
            Test { name: "empty", script: vec![], expected: Ok("") },
            Test {
                name: "p2pkh",
                script: pay_to_pub_key_hash(&[0x11; 20]).unwrap().as_bytes().to_vec(),
                expected: Ok("OP_DUP\nOP_HASH160\nOP_PUSHBYTES_20 1111111111111111111111111111111111111111\nOP_EQUALVERIFY\nOP_CHECKSIG\n"),
            },
            Test {
                name: "conditional",
                script: vec![OpIf, OpNotIf, OpNop, OpEndIf, OpElse, OpData1, 0x00, OpEndIf, OpTrue],
                expected: Ok("OP_IF\n  OP_NOTIF\n    OP_NOP\n  OP_ENDIF\nOP_ELSE\n  OP_PUSHBYTES_1 00\nOP_ENDIF\nOP_1\n"),
            },
            Test {
                name: "push data",
                script: vec![OpPushData1, 0x02, OpPushData1, 0x05],
                expected: Ok("OP_PUSHDATA1 2 4c05\n"),
            },
            Test {
                name: "nested redeem script",
                script: vec![OpPushData1, 0x02, OpDup, OpDrop],
                expected: Ok("OP_PUSHDATA1 2 7675\n    -- Begin Redeem Script --\n    OP_DUP\n    OP_DROP\n    -- End Redeem Script --\n"),
            },
            Test {
                name: "redeem script is expanded one level",
                script: vec![OpPushData1, 0x04, OpPushData1, 0x02, OpDup, OpDrop],
                expected: Ok("OP_PUSHDATA1 4 4c027675\n    -- Begin Redeem Script --\n    OP_PUSHDATA1 2 7675\n    -- End Redeem Script --\n"),
            },
            Test { name: "unknown opcode", script: vec![0xc0], expected: Ok("OP_UNKNOWN192\n") },
            Test { name: "malformed", script: vec![OpData2, 0x01], expected: Err(TxScriptError::MalformedPush(2, 1)) },
        ];
        // cspell:enable

        for test in tests {
            let result = ScriptViewer::new(&test.script).disassemble();
            assert_eq!(result, test.expected.map(String::from), "disassemble test failed for '{}'", test.name);
        }
    }

    #[test]
    fn test_deeply_nested_pushes() {
        // Each level is OP_PUSHDATA4 with a 4 byte length wrapping the rest of the script.
        const DEPTH: usize = 20_000;
        let mut script = Vec::with_capacity(DEPTH * 5 + 1);
        for level in 0..DEPTH {
            let remaining = (DEPTH - 1 - level) * 5 + 1;
            script.push(OpPushData4);
            script.extend_from_slice(&(remaining as u32).to_le_bytes());
        }
        script.push(OpNop);

        let disassembly = ScriptViewer::new(&script).disassemble().unwrap();
        let lines: Vec<_> = disassembly.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with(&format!("OP_PUSHDATA4 {} 4e", script.len() - 5)));
        assert_eq!(lines[1], "    -- Begin Redeem Script --");
        assert!(lines[2].starts_with(&format!("    OP_PUSHDATA4 {} 4e", script.len() - 10)));
        assert_eq!(lines[3], "    -- End Redeem Script --");
        assert_eq!(disassembly.matches("-- Begin Redeem Script --").count(), 1);
        assert!(disassembly.len() < script.len() * 5);
    }

    #[test]
    fn test_multisig_annotation() {
        let mut keys: Vec<Vec<u8>> = (1u8..=3).map(|i| std::iter::once(0x02).chain(std::iter::repeat(i).take(32)).collect()).collect();
        let redeem_script = multisig_redeem_script(&mut keys, 2).unwrap();
        let disassembly = ScriptViewer::new(redeem_script.as_bytes()).disassemble().unwrap();
        let lines: Vec<_> = disassembly.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "OP_2");
        assert_eq!(lines[4], "OP_3");
        assert_eq!(lines[5], "OP_CHECKMULTISIG // 2 of 3");

        let non_standard = [OpTrue, OpCheckMultiSig];
        assert_eq!(ScriptViewer::new(&non_standard).disassemble().unwrap(), "OP_1\nOP_CHECKMULTISIG\n");

        let p2sh = pay_to_script_hash_script(redeem_script.as_bytes()).unwrap();
        assert!(ScriptViewer::new(p2sh.as_bytes()).to_string().starts_with("OP_HASH160\nOP_PUSHBYTES_20 "));
        assert_eq!(
            ScriptViewer::new(&[OpPushData2, 0x01]).to_string(),
            format!("Error disassembling script: {}", TxScriptError::MalformedPushSize(vec![0x01]))
        );
    }
}
