use super::Codec;
use crate::error::{MixerError, Result};
use crate::types::{CaseRule, CodecMeta, UnmappedRule};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Token placed between words; letters inside a word are separated by one space.
pub const WORD_MARKER: &str = "/";

const MORSE_CODE: [(char, &str); 36] = [
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
];

fn morse_table() -> &'static HashMap<char, &'static str> {
    static TABLE: OnceLock<HashMap<char, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| MORSE_CODE.iter().copied().collect())
}

fn reverse_morse_table() -> &'static HashMap<&'static str, char> {
    static TABLE: OnceLock<HashMap<&'static str, char>> = OnceLock::new();
    TABLE.get_or_init(|| MORSE_CODE.iter().map(|&(ch, code)| (code, ch)).collect())
}

fn lookup(c: char) -> Option<&'static str> {
    morse_table().get(&c.to_ascii_uppercase()).copied()
}

/// Morse code over A-Z and 0-9.
///
/// Only the word structure of the input survives a round trip: leading and
/// trailing whitespace is dropped and any whitespace run between words comes
/// back as a single space. `decode` skips unknown symbols; `validate` rejects them.
pub struct Morse;

impl Codec for Morse {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "Morse Code",
            aliases: &["morse", "morsecode", "morse-code"],
            alphabet: ".- /".to_string(),
            case_rule: CaseRule::Uppercase,
            unmapped: UnmappedRule::Drop,
            word_marker: Some(WORD_MARKER),
            lossless: false,
            description: "International Morse code for A-Z and 0-9 (letters split by spaces, words by ' / ')",
        }
    }

    fn encode(&self, input: &str) -> Result<String> {
        let words: Vec<String> = input
            .split_whitespace()
            .map(|word| {
                word.chars()
                    .filter_map(|c| {
                        let code = lookup(c);
                        if code.is_none() {
                            tracing::trace!(char = ?c, "dropping character with no morse code");
                        }
                        code
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .filter(|word| !word.is_empty())
            .collect();

        let gap = format!(" {} ", WORD_MARKER);
        Ok(words.join(gap.as_str()))
    }

    fn decode(&self, input: &str) -> Result<String> {
        let table = reverse_morse_table();

        let words: Vec<String> = input
            .split(WORD_MARKER)
            .map(|word| {
                word.split_whitespace()
                    .filter_map(|code| {
                        let ch = table.get(code).copied();
                        if ch.is_none() {
                            tracing::trace!(symbol = code, "dropping unknown morse symbol");
                        }
                        ch
                    })
                    .collect::<String>()
            })
            .filter(|word| !word.is_empty())
            .collect();

        Ok(words.join(" "))
    }

    fn validate(&self, input: &str) -> Result<()> {
        let table = reverse_morse_table();
        for code in input.split(WORD_MARKER).flat_map(str::split_whitespace) {
            if !table.contains_key(code) {
                return Err(MixerError::invalid_input(format!("unknown morse symbol: {}", code)));
            }
        }
        Ok(())
    }

    fn canonicalize(&self, input: &str) -> String {
        let words: Vec<String> = input
            .split_whitespace()
            .map(|word| {
                word.chars()
                    .map(|c| c.to_ascii_uppercase())
                    .filter(|up| morse_table().contains_key(up))
                    .collect::<String>()
            })
            .filter(|word| !word.is_empty())
            .collect();
        words.join(" ")
    }
}
