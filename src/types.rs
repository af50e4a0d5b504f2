use serde::Serialize;
use std::path::PathBuf;

use crate::codec::Registry;

pub struct Context {
    pub registry: &'static Registry,
}

impl Context {
    pub fn new(registry: &'static Registry) -> Self {
        Self { registry }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self {
            registry: Registry::global(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Encode,
    Decode,
}

#[derive(Debug, Clone)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
    Literal(String),
}

impl InputSource {
    pub fn parse(s: &str) -> Self {
        match s {
            "-" => InputSource::Stdin,
            s if s.starts_with('@') => InputSource::File(PathBuf::from(&s[1..])),
            s => InputSource::Literal(s.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub enum OutputDest {
    Stdout,
    File(PathBuf),
}

impl OutputDest {
    pub fn parse(s: &str) -> Self {
        match s {
            "-" => OutputDest::Stdout,
            s if s.starts_with('@') => OutputDest::File(PathBuf::from(&s[1..])),
            s => OutputDest::File(PathBuf::from(s)),
        }
    }
}

/// How a codec treats the case of letters it maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CaseRule {
    /// Output keeps the case of the input character.
    Preserve,
    /// Letters come back upper-cased after a round trip.
    Uppercase,
}

/// What a codec does with characters outside its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnmappedRule {
    Drop,
    PassThrough,
}

/// Static description of a codec and its edge-case policy.
#[derive(Debug, Clone, Serialize)]
pub struct CodecMeta {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub alphabet: String,
    pub case_rule: CaseRule,
    pub unmapped: UnmappedRule,
    pub word_marker: Option<&'static str>,
    pub lossless: bool,
    pub description: &'static str,
}
