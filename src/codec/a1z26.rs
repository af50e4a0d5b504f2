use super::Codec;
use crate::error::{MixerError, Result};
use crate::types::{CaseRule, CodecMeta, UnmappedRule};

/// Token standing for a space between words.
pub const WORD_MARKER: char = '|';

/// Prefix that makes digits, the marker and itself literal, e.g. `#7`.
pub const ESCAPE: char = '#';

fn needs_escape(c: char) -> bool {
    c.is_ascii_digit() || c == WORD_MARKER || c == ESCAPE
}

pub struct A1Z26;

impl Codec for A1Z26 {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "A1Z26",
            aliases: &["a1z26 (numbers)", "numbers", "letternum"],
            alphabet: "0123456789 |#".to_string(),
            case_rule: CaseRule::Uppercase,
            unmapped: UnmappedRule::PassThrough,
            word_marker: Some("|"),
            lossless: false,
            description: "Letter position encoding (A=1 ... Z=26), '|' between words, '#' escapes literal digits",
        }
    }

    fn encode(&self, input: &str) -> Result<String> {
        let tokens: Vec<String> = input
            .chars()
            .map(|c| {
                if c.is_ascii_alphabetic() {
                    (c.to_ascii_uppercase() as u8 - b'A' + 1).to_string()
                } else if c == ' ' {
                    WORD_MARKER.to_string()
                } else if needs_escape(c) {
                    format!("{}{}", ESCAPE, c)
                } else {
                    c.to_string()
                }
            })
            .collect();

        Ok(tokens.join(" "))
    }

    /// Rejects the whole input on the first numeric token outside 1-26.
    /// `position` in the error counts non-empty tokens from zero.
    fn decode(&self, input: &str) -> Result<String> {
        let mut result = String::with_capacity(input.len() / 2);

        for (position, token) in input.split(' ').filter(|t| !t.is_empty()).enumerate() {
            if token.bytes().all(|b| b.is_ascii_digit()) {
                let num = token
                    .parse::<u8>()
                    .ok()
                    .filter(|n| (1..=26).contains(n))
                    .ok_or_else(|| MixerError::out_of_range(token, position))?;
                result.push((b'A' + num - 1) as char);
                continue;
            }

            let mut chars = token.chars();
            match (chars.next(), chars.next(), chars.next()) {
                (Some(WORD_MARKER), None, _) => result.push(' '),
                (Some(ESCAPE), Some(literal), None) => result.push(literal),
                _ => result.push_str(token),
            }
        }

        Ok(result)
    }

    fn canonicalize(&self, input: &str) -> String {
        input.chars().map(|c| c.to_ascii_uppercase()).collect()
    }
}
