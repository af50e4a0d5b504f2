use std::collections::HashMap;

use super::Codec;
use crate::error::{MixerError, Result};
use crate::types::{CaseRule, CodecMeta, UnmappedRule};

/// Pairwise letter swap between two alphabets, e.g. POLAR <-> CENIT.
///
/// Every `source[i]` becomes `target[i]` and every `target[i]` becomes
/// `source[i]`, so encoding and decoding are the same operation. Matching
/// ignores ASCII case and the output keeps the case of the input letter.
pub struct SwapCodec {
    name: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
    source: String,
    target: String,
    pairs: HashMap<char, char>,
}

impl SwapCodec {
    /// Validates the alphabets and builds the substitution table.
    ///
    /// Both alphabets must be non-empty, equally long, made of ASCII letters,
    /// and no letter may appear twice across the two (ignoring case).
    pub fn new(name: &'static str, source: &str, target: &str) -> Result<Self> {
        let source = source.to_ascii_uppercase();
        let target = target.to_ascii_uppercase();

        if source.is_empty() || target.is_empty() {
            return Err(MixerError::invalid_alphabet("alphabets must not be empty"));
        }

        let src: Vec<char> = source.chars().collect();
        let dst: Vec<char> = target.chars().collect();
        if src.len() != dst.len() {
            return Err(MixerError::invalid_alphabet(format!(
                "source has {} letters but target has {}",
                src.len(),
                dst.len()
            )));
        }

        let mut pairs = HashMap::with_capacity(src.len() * 2);
        for (&a, &b) in src.iter().zip(dst.iter()) {
            for c in [a, b] {
                if !c.is_ascii_alphabetic() {
                    return Err(MixerError::invalid_alphabet(format!("'{}' is not an ASCII letter", c)));
                }
            }
            if a == b || pairs.contains_key(&a) || pairs.contains_key(&b) {
                let repeated = if pairs.contains_key(&a) || a == b { a } else { b };
                return Err(MixerError::invalid_alphabet(format!("letter '{}' appears more than once", repeated)));
            }
            pairs.insert(a, b);
            pairs.insert(b, a);
        }

        Ok(Self {
            name,
            aliases: &[],
            description: "Custom letter swap",
            source,
            target,
            pairs,
        })
    }

    pub fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    fn swap_char(&self, c: char) -> char {
        match self.pairs.get(&c.to_ascii_uppercase()) {
            Some(&mapped) if c.is_ascii_lowercase() => mapped.to_ascii_lowercase(),
            Some(&mapped) => mapped,
            None => c,
        }
    }

    fn swap(&self, input: &str) -> String {
        input.chars().map(|c| self.swap_char(c)).collect()
    }
}

impl Codec for SwapCodec {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: self.name,
            aliases: self.aliases,
            alphabet: format!("{}/{}", self.source, self.target),
            case_rule: CaseRule::Preserve,
            unmapped: UnmappedRule::PassThrough,
            word_marker: None,
            lossless: true,
            description: self.description,
        }
    }

    fn encode(&self, input: &str) -> Result<String> {
        Ok(self.swap(input))
    }

    fn decode(&self, input: &str) -> Result<String> {
        Ok(self.swap(input))
    }
}

/// The classic scout cipher swapping P-C, O-E, L-N, A-I and R-T.
pub fn polar_cenit() -> Result<SwapCodec> {
    Ok(SwapCodec::new("Polar Cenit", "POLAR", "CENIT")?
        .with_aliases(&["polar-cenit", "polarcenit", "zenit-polar", "cenit"])
        .with_description("Swaps the letters of POLAR with those of CENIT, preserving case"))
}
