use std::fs;
use std::io::{self, Write};

use rainbow_mixer::error::Result;
use rainbow_mixer::types::OutputDest;

/// Writes `text` to the destination. Stdout gets a trailing newline, files do not.
pub fn write_output(text: &str, dest: &OutputDest) -> Result<()> {
    match dest {
        OutputDest::File(path) => {
            fs::write(path, text)?;
            tracing::debug!(path = %path.display(), bytes = text.len(), "wrote output file");
            Ok(())
        }
        OutputDest::Stdout => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(text.as_bytes())?;
            handle.write_all(b"\n")?;
            handle.flush()?;
            Ok(())
        }
    }
}
