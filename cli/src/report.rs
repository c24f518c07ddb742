use scriptkit_txscript::{decompile, get_multisig_params, Script, ScriptTemplate, ScriptViewer};
use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MultisigSummary {
    pub required: usize,
    pub signers: usize,
}

/// Classification result for a single input script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptReport {
    pub script: Script,
    pub template: ScriptTemplate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multisig: Option<MultisigSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disassembly: Option<String>,
}

impl ScriptReport {
    pub fn new(script: Script, with_disassembly: bool) -> Self {
        let template = script.classify();
        let chunks = decompile(script.as_bytes()).ok();
        let asm = script.to_asm().ok();
        let multisig = match template {
            ScriptTemplate::Multisig => chunks
                .as_deref()
                .and_then(get_multisig_params)
                .map(|params| MultisigSummary { required: params.required, signers: params.signers }),
            _ => None,
        };
        let disassembly = with_disassembly.then(|| ScriptViewer::new(script.as_bytes()).to_string());
        Self { script, template, asm, multisig, disassembly }
    }
}

impl Display for ScriptReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.template, self.script)?;
        if let Some(MultisigSummary { required, signers }) = self.multisig {
            write!(f, " ({required} of {signers})")?;
        }
        match &self.asm {
            Some(asm) => write!(f, "\n  asm: {asm}")?,
            None => write!(f, "\n  asm: <undecodable>")?,
        }
        if let Some(disassembly) = &self.disassembly {
            for line in disassembly.lines() {
                write!(f, "\n  | {line}")?;
            }
        }
        Ok(())
    }
}
