use rainbow_mixer::error::Result;
use rainbow_mixer::types::{CodecMeta, Context};

pub fn run_info(ctx: &Context, method: &str) -> Result<CodecMeta> {
    let codec = ctx.registry.get(method)?;
    Ok(codec.meta())
}

pub fn run_list(ctx: &Context) -> Vec<CodecMeta> {
    ctx.registry.list()
}
