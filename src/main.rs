mod cli;
mod commands;
mod io;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use commands::CommandHandler;
use rainbow_mixer::{error, types, Context};

fn init_tracing() {
    let filter = EnvFilter::try_from_env("RMIX_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {}", e);
            e.exit_code().into()
        }
    }
}

fn run(cli: Cli) -> error::Result<()> {
    let ctx = Context::default();

    let handler: Box<dyn CommandHandler> = match cli.command {
        Command::Enc {
            method,
            r#in,
            out,
            all,
            json,
        } => Box::new(commands::TransformCommand {
            direction: types::Direction::Encode,
            method,
            input: types::InputSource::parse(&r#in),
            output: types::OutputDest::parse(&out),
            all,
            json,
        }),

        Command::Dec {
            method,
            r#in,
            out,
            all,
            json,
        } => Box::new(commands::TransformCommand {
            direction: types::Direction::Decode,
            method,
            input: types::InputSource::parse(&r#in),
            output: types::OutputDest::parse(&out),
            all,
            json,
        }),

        Command::List { json } => Box::new(commands::ListCommand { json }),

        Command::Info { method, json } => Box::new(commands::InfoCommand { method, json }),

        Command::Verify { method, r#in, json } => Box::new(commands::VerifyCommand {
            method,
            input: types::InputSource::parse(&r#in),
            json,
        }),

        Command::Swap {
            source,
            target,
            decode,
            r#in,
            out,
        } => Box::new(commands::SwapCommand {
            source,
            target,
            direction: if decode {
                types::Direction::Decode
            } else {
                types::Direction::Encode
            },
            input: types::InputSource::parse(&r#in),
            output: types::OutputDest::parse(&out),
        }),
    };

    handler.execute(&ctx)
}
