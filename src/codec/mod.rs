mod a1z26;
mod morse;
mod reverse;
pub mod registry;
mod swap;

pub use registry::Registry;
pub use swap::SwapCodec;

use crate::error::Result;
use crate::types::{CodecMeta, Direction};

/// A reversible text transform.
///
/// `decode(encode(t))` must equal `canonicalize(t)` for every input.
pub trait Codec: Send + Sync {
    fn meta(&self) -> CodecMeta;
    fn encode(&self, input: &str) -> Result<String>;
    fn decode(&self, input: &str) -> Result<String>;

    /// The form of `input` that survives an encode/decode round trip.
    fn canonicalize(&self, input: &str) -> String {
        input.to_string()
    }

    fn apply(&self, direction: Direction, input: &str) -> Result<String> {
        match direction {
            Direction::Encode => self.encode(input),
            Direction::Decode => self.decode(input),
        }
    }

    fn validate(&self, input: &str) -> Result<()> {
        self.decode(input)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        self.meta().name
    }
}
