use serde::Serialize;

use rainbow_mixer::error::Result;
use rainbow_mixer::types::{Context, Direction};

#[derive(Debug, Serialize)]
pub struct TransformResult {
    pub schema_version: u32,
    pub method: String,
    pub direction: Direction,
    pub input: String,
    pub output: String,
}

#[derive(Debug, Serialize)]
pub struct MethodOutput {
    pub method: &'static str,
    pub output: Option<String>,
    pub error: Option<String>,
}

pub fn run_transform(ctx: &Context, method: &str, direction: Direction, text: &str) -> Result<TransformResult> {
    let codec = ctx.registry.get(method)?;
    let output = ctx.registry.transform(method, direction, text)?;
    Ok(TransformResult {
        schema_version: 1,
        method: codec.name().to_string(),
        direction,
        input: text.to_string(),
        output,
    })
}

/// Runs every registered method; failures are reported per method.
pub fn run_all(ctx: &Context, direction: Direction, text: &str) -> Vec<MethodOutput> {
    ctx.registry
        .names()
        .into_iter()
        .map(|method| match ctx.registry.transform(method, direction, text) {
            Ok(output) => MethodOutput {
                method,
                output: Some(output),
                error: None,
            },
            Err(e) => MethodOutput {
                method,
                output: None,
                error: Some(e.to_string()),
            },
        })
        .collect()
}

pub fn format_all(results: &[MethodOutput]) -> String {
    let mut lines = vec![format!("{:<16} {}", "METHOD", "OUTPUT"), "-".repeat(70)];
    for r in results {
        let shown = match (&r.output, &r.error) {
            (Some(output), _) => preview(output),
            (None, Some(err)) => format!("({})", err),
            (None, None) => String::new(),
        };
        lines.push(format!("{:<16} {}", r.method, shown));
    }
    lines.join("\n")
}

fn preview(text: &str) -> String {
    if text.chars().count() > 50 {
        format!("{}...", text.chars().take(47).collect::<String>())
    } else {
        text.to_string()
    }
}
