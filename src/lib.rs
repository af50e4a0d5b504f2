//! Reversible text obfuscation: Morse code, A1Z26, reversal and the
//! Polar Cenit letter swap, dispatched by method name.
//!
//! None of these transforms hide anything from a determined reader; they are
//! deterministic puzzles, not encryption.

pub mod codec;
pub mod error;
pub mod types;

pub use codec::{Codec, Registry, SwapCodec};
pub use error::{MixerError, Result};
pub use types::{CaseRule, CodecMeta, Context, Direction, InputSource, OutputDest, UnmappedRule};

/// Method names in display order.
pub fn list_methods() -> Vec<&'static str> {
    Registry::global().names()
}

/// Runs `method` over `text` in the given direction.
pub fn transform(method: &str, direction: Direction, text: &str) -> Result<String> {
    Registry::global().transform(method, direction, text)
}
