use alloy::primitives::Bytes;
use deployer_trait::{ConstructorArg, encode_constructor_args};
use eyre::WrapErr;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// Compiled contract as emitted by hardhat (`"bytecode": "0x.."`) or
/// foundry (`"bytecode": { "object": "0x.." }`).
#[derive(Debug, Clone)]
pub struct Artifact {
    pub contract: String,
    pub bytecode: Bytes,
}

#[derive(Deserialize)]
struct ArtifactFile {
    bytecode: Bytecode,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Bytecode {
    Hex(String),
    Object { object: String },
}

impl Artifact {
    /// Reads `<dir>/<contract>.json`.
    pub fn load(dir: &Path, contract: &str) -> eyre::Result<Self> {
        let path = dir.join(format!("{contract}.json"));
        let contents = std::fs::read_to_string(&path)
            .wrap_err_with(|| format!("failed to read artifact {}", path.display()))?;

        Self::from_json(contract, &contents)
    }

    pub fn from_json(contract: &str, contents: &str) -> eyre::Result<Self> {
        let file: ArtifactFile = serde_json::from_str(contents)
            .wrap_err_with(|| format!("malformed artifact for {contract}"))?;

        let hex = match &file.bytecode {
            Bytecode::Hex(hex) => hex,
            Bytecode::Object { object } => object,
        };
        let bytecode = Bytes::from_str(hex)
            .wrap_err_with(|| format!("artifact for {contract} has invalid bytecode"))?;

        if bytecode.is_empty() {
            return Err(eyre::eyre!(
                "artifact for {contract} has no bytecode, is it abstract or an interface?"
            ));
        }

        Ok(Self {
            contract: contract.to_string(),
            bytecode,
        })
    }

    /// Creation code followed by the encoded constructor arguments.
    pub fn deploy_code(&self, args: &[ConstructorArg]) -> Bytes {
        let encoded = encode_constructor_args(args);
        let mut code = Vec::with_capacity(self.bytecode.len() + encoded.len());
        code.extend_from_slice(&self.bytecode);
        code.extend_from_slice(&encoded);
        code.into()
    }
}
