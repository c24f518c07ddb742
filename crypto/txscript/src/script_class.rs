use scriptkit_txscript_errors::TxScriptError;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

/// Standard script templates a compiled script can be recognized as.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum ScriptTemplate {
    /// m-of-n bare multisig.
    Multisig,

    /// None of the recognized forms.
    #[default]
    NonStandard,

    /// OP_RETURN data carrier.
    NullData,

    /// Pay to pubkey.
    PubKey,

    /// Pay to pubkey hash.
    PubKeyHash,

    /// Pay to script hash.
    ScriptHash,

    /// Pay to witness pubkey hash (segwit v0).
    WitnessPubKeyHash,

    /// Pay to witness script hash (segwit v0).
    WitnessScriptHash,

    /// Block witness commitment (BIP141).
    WitnessCommitment,
}

const MULTISIG: &str = "multisig";
const NON_STANDARD: &str = "nonstandard";
const NULL_DATA: &str = "nulldata";
const PUB_KEY: &str = "pubkey";
const PUB_KEY_HASH: &str = "pubkeyhash";
const SCRIPT_HASH: &str = "scripthash";
const WITNESS_PUB_KEY_HASH: &str = "witnesspubkeyhash";
const WITNESS_SCRIPT_HASH: &str = "witnessscripthash";
const WITNESS_COMMITMENT: &str = "witnesscommitment";

impl ScriptTemplate {
    pub const ALL: [ScriptTemplate; 9] = [
        ScriptTemplate::Multisig,
        ScriptTemplate::NonStandard,
        ScriptTemplate::NullData,
        ScriptTemplate::PubKey,
        ScriptTemplate::PubKeyHash,
        ScriptTemplate::ScriptHash,
        ScriptTemplate::WitnessPubKeyHash,
        ScriptTemplate::WitnessScriptHash,
        ScriptTemplate::WitnessCommitment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptTemplate::Multisig => MULTISIG,
            ScriptTemplate::NonStandard => NON_STANDARD,
            ScriptTemplate::NullData => NULL_DATA,
            ScriptTemplate::PubKey => PUB_KEY,
            ScriptTemplate::PubKeyHash => PUB_KEY_HASH,
            ScriptTemplate::ScriptHash => SCRIPT_HASH,
            ScriptTemplate::WitnessPubKeyHash => WITNESS_PUB_KEY_HASH,
            ScriptTemplate::WitnessScriptHash => WITNESS_SCRIPT_HASH,
            ScriptTemplate::WitnessCommitment => WITNESS_COMMITMENT,
        }
    }

    pub fn is_standard(&self) -> bool {
        *self != ScriptTemplate::NonStandard
    }
}

impl Display for ScriptTemplate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScriptTemplate {
    type Err = TxScriptError;

    fn from_str(template: &str) -> Result<Self, Self::Err> {
        match template {
            MULTISIG => Ok(ScriptTemplate::Multisig),
            NON_STANDARD => Ok(ScriptTemplate::NonStandard),
            NULL_DATA => Ok(ScriptTemplate::NullData),
            PUB_KEY => Ok(ScriptTemplate::PubKey),
            PUB_KEY_HASH => Ok(ScriptTemplate::PubKeyHash),
            SCRIPT_HASH => Ok(ScriptTemplate::ScriptHash),
            WITNESS_PUB_KEY_HASH => Ok(ScriptTemplate::WitnessPubKeyHash),
            WITNESS_SCRIPT_HASH => Ok(ScriptTemplate::WitnessScriptHash),
            WITNESS_COMMITMENT => Ok(ScriptTemplate::WitnessCommitment),

            _ => Err(TxScriptError::InvalidScriptTemplate(template.to_string())),
        }
    }
}

impl TryFrom<&str> for ScriptTemplate {
    type Error = TxScriptError;

    fn try_from(template: &str) -> Result<Self, Self::Error> {
        template.parse()
    }
}

impl TryFrom<String> for ScriptTemplate {
    type Error = TxScriptError;

    fn try_from(template: String) -> Result<Self, Self::Error> {
        template.parse()
    }
}

impl From<ScriptTemplate> for &'static str {
    fn from(template: ScriptTemplate) -> Self {
        template.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_names() {
        for template in ScriptTemplate::ALL {
            assert_eq!(template.to_string().parse::<ScriptTemplate>(), Ok(template));
            let json = serde_json::to_string(&template).unwrap();
            assert_eq!(json, format!("\"{template}\""));
            assert_eq!(serde_json::from_str::<ScriptTemplate>(&json).unwrap(), template);
        }
        assert_eq!(ScriptTemplate::default(), ScriptTemplate::NonStandard);
        assert!(!ScriptTemplate::NonStandard.is_standard());
        assert!(ScriptTemplate::WitnessCommitment.is_standard());
        assert_eq!(ScriptTemplate::try_from("P2PKH"), Err(TxScriptError::InvalidScriptTemplate("P2PKH".to_string())));
        assert!(serde_json::from_str::<ScriptTemplate>("\"multi\"").is_err());
    }
}
