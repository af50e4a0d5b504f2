use std::fs;
use std::io::{self, Read};

use is_terminal::IsTerminal;

use rainbow_mixer::error::{MixerError, Result};
use rainbow_mixer::types::InputSource;

/// Reads the whole input as UTF-8 text.
///
/// One trailing newline is removed from stdin and file input so that
/// `echo SOS | rmix enc` encodes exactly `SOS`.
pub fn read_input(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Stdin => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                return Err(MixerError::invalid_input(
                    "no input given; pass -i TEXT, -i @FILE, or pipe text on stdin",
                ));
            }
            let mut buf = Vec::new();
            stdin.lock().read_to_end(&mut buf)?;
            into_text(buf)
        }
        InputSource::File(path) => into_text(fs::read(path)?),
        InputSource::Literal(text) => Ok(text.clone()),
    }
}

fn into_text(buf: Vec<u8>) -> Result<String> {
    let mut text = String::from_utf8(buf)
        .map_err(|e| MixerError::invalid_input(format!("input is not valid UTF-8: {}", e)))?;
    strip_trailing_newline(&mut text);
    Ok(text)
}

fn strip_trailing_newline(text: &mut String) {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_trailing_newline() {
        let mut text = "SOS\r\n".to_string();
        strip_trailing_newline(&mut text);
        assert_eq!(text, "SOS");

        let mut text = "A\n\n".to_string();
        strip_trailing_newline(&mut text);
        assert_eq!(text, "A\n");
    }

    #[test]
    fn test_literal_untouched() {
        let text = read_input(&InputSource::Literal("A B\n".to_string())).unwrap();
        assert_eq!(text, "A B\n");
    }

    #[test]
    fn test_invalid_utf8() {
        assert!(matches!(into_text(vec![0xff, 0xfe]), Err(MixerError::InvalidInput { .. })));
    }
}
