use rainbow_mixer::codec::{Codec, SwapCodec};
use rainbow_mixer::error::Result;
use rainbow_mixer::types::Direction;

pub fn run_swap(source: &str, target: &str, direction: Direction, text: &str) -> Result<String> {
    let codec = SwapCodec::new("Custom Swap", source, target)?;
    tracing::debug!(source, target, ?direction, "ad-hoc swap");
    codec.apply(direction, text)
}
