use serde::Serialize;

use rainbow_mixer::error::{MixerError, Result};
use rainbow_mixer::types::Context;

#[derive(Debug, Serialize)]
pub struct VerifyResult {
    pub schema_version: u32,
    pub valid: bool,
    pub method: String,
    pub error: Option<String>,
    #[serde(skip)]
    pub failure: Option<MixerError>,
}

pub fn run_verify(ctx: &Context, method: &str, text: &str) -> Result<VerifyResult> {
    let codec = ctx.registry.get(method)?;

    match codec.validate(text) {
        Ok(()) => Ok(VerifyResult {
            schema_version: 1,
            valid: true,
            method: codec.name().to_string(),
            error: None,
            failure: None,
        }),
        Err(e) => Ok(VerifyResult {
            schema_version: 1,
            valid: false,
            method: codec.name().to_string(),
            error: Some(e.to_string()),
            failure: Some(e),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_valid_and_invalid() {
        let ctx = Context::default();
        assert!(run_verify(&ctx, "A1Z26", "1 2 | 3").unwrap().valid);
        let bad = run_verify(&ctx, "A1Z26", "1 40").unwrap();
        assert!(!bad.valid);
        assert!(bad.error.is_some());
        assert!(matches!(bad.failure, Some(MixerError::OutOfRangeCode { .. })));
        assert!(run_verify(&ctx, "nope", "1").is_err());
    }

    #[test]
    fn test_verify_rejects_non_morse() {
        let ctx = Context::default();
        let result = run_verify(&ctx, "morse", "hello").unwrap();
        assert!(!result.valid);
        assert!(matches!(result.failure, Some(MixerError::InvalidInput { .. })));
        assert!(run_verify(&ctx, "morse", ".... .. / -.-- --- ..-").unwrap().valid);
    }
}
