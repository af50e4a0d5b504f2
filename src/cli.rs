use clap::{Parser, Subcommand};

const DEFAULT_METHOD: &str = "Morse Code";

#[derive(Parser)]
#[command(name = "rmix")]
#[command(about = "Encode and decode text with classical obfuscation schemes")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Encode text with a method")]
    Enc {
        #[arg(long, short = 'm', env = "RMIX_METHOD", default_value = DEFAULT_METHOD)]
        method: String,

        #[arg(long, short = 'i', default_value = "-", help = "Text, @file, or - for stdin")]
        r#in: String,

        #[arg(long, short = 'o', default_value = "-", help = "@file, path, or - for stdout")]
        out: String,

        #[arg(long, help = "Show encoding with every method")]
        all: bool,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Decode text with a method")]
    Dec {
        #[arg(long, short = 'm', env = "RMIX_METHOD", default_value = DEFAULT_METHOD)]
        method: String,

        #[arg(long, short = 'i', default_value = "-", help = "Text, @file, or - for stdin")]
        r#in: String,

        #[arg(long, short = 'o', default_value = "-", help = "@file, path, or - for stdout")]
        out: String,

        #[arg(long, help = "Decode with every method")]
        all: bool,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "List available methods")]
    List {
        #[arg(long)]
        json: bool,
    },

    #[command(about = "Show a method's policy")]
    Info {
        method: String,

        #[arg(long)]
        json: bool,
    },

    #[command(about = "Check that input decodes with a method")]
    Verify {
        #[arg(long, short = 'm', env = "RMIX_METHOD", default_value = DEFAULT_METHOD)]
        method: String,

        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long)]
        json: bool,
    },

    #[command(about = "Apply a one-off letter swap between two alphabets")]
    Swap {
        #[arg(long, short = 's', help = "Source alphabet, e.g. POLAR")]
        source: String,

        #[arg(long, short = 't', help = "Target alphabet, e.g. CENIT")]
        target: String,

        #[arg(long, help = "Decode instead of encode (same result for a swap)")]
        decode: bool,

        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long, short = 'o', default_value = "-")]
        out: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_dec_all_help() {
        let cmd = Cli::command();
        let dec = cmd.find_subcommand("dec").unwrap();
        let all = dec.get_arguments().find(|a| a.get_id().as_str() == "all").unwrap();
        assert_eq!(all.get_help().unwrap().to_string(), "Decode with every method");
    }

    #[test]
    fn test_parse_enc() {
        let cli = Cli::try_parse_from(["rmix", "enc", "-m", "A1Z26", "-i", "CAB"]).unwrap();
        match cli.command {
            Command::Enc { method, r#in, out, all, json } => {
                assert_eq!(method, "A1Z26");
                assert_eq!(r#in, "CAB");
                assert_eq!(out, "-");
                assert!(!all && !json);
            }
            _ => panic!("expected enc"),
        }
    }
}
