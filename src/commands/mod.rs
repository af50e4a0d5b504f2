mod info;
mod swap;
mod transform;
mod verify;

pub use info::{run_info, run_list};
pub use swap::run_swap;
pub use transform::{format_all, run_all, run_transform};
pub use verify::run_verify;

use serde::Serialize;

use crate::io::{read_input, write_output};
use rainbow_mixer::error::{MixerError, Result};
use rainbow_mixer::types::{Context, Direction, InputSource, OutputDest};

pub trait CommandHandler {
    fn execute(&self, ctx: &Context) -> Result<()>;
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| MixerError::invalid_input(format!("cannot render JSON: {}", e)))?;
    println!("{}", rendered);
    Ok(())
}

/// Backs both `enc` and `dec`; only the direction differs.
pub struct TransformCommand {
    pub direction: Direction,
    pub method: String,
    pub input: InputSource,
    pub output: OutputDest,
    pub all: bool,
    pub json: bool,
}

impl CommandHandler for TransformCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let text = read_input(&self.input)?;

        if self.all {
            let results = run_all(ctx, self.direction, &text);
            if self.json {
                return print_json(&results);
            }
            return write_output(&format_all(&results), &self.output);
        }

        let result = run_transform(ctx, &self.method, self.direction, &text)?;
        if self.json {
            return print_json(&result);
        }
        write_output(&result.output, &self.output)
    }
}

pub struct ListCommand {
    pub json: bool,
}

impl CommandHandler for ListCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let methods = run_list(ctx);
        if self.json {
            return print_json(&methods);
        }
        println!("{:<16} {:<9} DESCRIPTION", "NAME", "LOSSLESS");
        println!("{}", "-".repeat(70));
        for m in methods {
            let lossless = if m.lossless { "yes" } else { "no" };
            println!("{:<16} {:<9} {}", m.name, lossless, m.description);
        }
        Ok(())
    }
}

pub struct InfoCommand {
    pub method: String,
    pub json: bool,
}

impl CommandHandler for InfoCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let meta = run_info(ctx, &self.method)?;
        if self.json {
            return print_json(&meta);
        }
        println!("Name:        {}", meta.name);
        println!("Aliases:     {}", meta.aliases.join(", "));
        println!("Alphabet:    {}", if meta.alphabet.is_empty() { "-" } else { meta.alphabet.as_str() });
        println!("Case:        {:?}", meta.case_rule);
        println!("Unmapped:    {:?}", meta.unmapped);
        println!("Word marker: {}", meta.word_marker.unwrap_or("-"));
        println!("Lossless:    {}", meta.lossless);
        println!("Description: {}", meta.description);
        Ok(())
    }
}

pub struct VerifyCommand {
    pub method: String,
    pub input: InputSource,
    pub json: bool,
}

impl CommandHandler for VerifyCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let text = read_input(&self.input)?;
        let mut result = run_verify(ctx, &self.method, &text)?;
        if self.json {
            print_json(&result)?;
        } else if result.valid {
            println!("valid");
        } else {
            println!("invalid: {}", result.error.as_deref().unwrap_or_default());
        }
        match result.failure.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

pub struct SwapCommand {
    pub source: String,
    pub target: String,
    pub direction: Direction,
    pub input: InputSource,
    pub output: OutputDest,
}

impl CommandHandler for SwapCommand {
    fn execute(&self, _ctx: &Context) -> Result<()> {
        let text = read_input(&self.input)?;
        let swapped = run_swap(&self.source, &self.target, self.direction, &text)?;
        write_output(&swapped, &self.output)
    }
}
