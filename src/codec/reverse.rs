use super::Codec;
use crate::error::Result;
use crate::types::{CaseRule, CodecMeta, UnmappedRule};

pub struct Reverse;

impl Codec for Reverse {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "Reverse Cipher",
            aliases: &["reverse", "rev"],
            alphabet: String::new(),
            case_rule: CaseRule::Preserve,
            unmapped: UnmappedRule::PassThrough,
            word_marker: None,
            lossless: true,
            description: "Writes the text backwards (its own inverse)",
        }
    }

    fn encode(&self, input: &str) -> Result<String> {
        Ok(input.chars().rev().collect())
    }

    fn decode(&self, input: &str) -> Result<String> {
        Ok(input.chars().rev().collect())
    }
}
