use std::collections::HashMap;
use std::sync::OnceLock;

use super::Codec;
use crate::error::{MixerError, Result};
use crate::types::{CodecMeta, Direction};

macro_rules! register_codecs {
    ($($codec:expr),* $(,)?) => {
        fn builtin_codecs() -> Result<Vec<Box<dyn Codec>>> {
            let codecs: Vec<Box<dyn Codec>> = vec![
                $(Box::new($codec)),*
            ];
            Ok(codecs)
        }
    };
}

register_codecs! {
    super::morse::Morse,
    super::a1z26::A1Z26,
    super::reverse::Reverse,
    super::swap::polar_cenit()?,
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Ordered, read-only table of codecs keyed by display name and aliases.
pub struct Registry {
    codecs: Vec<Box<dyn Codec>>,
    name_map: HashMap<String, usize>,
}

impl Registry {
    /// Builds a registry from `codecs`, in display order.
    ///
    /// Fails if two codecs share a name or alias (compared case-insensitively).
    pub fn from_codecs(codecs: Vec<Box<dyn Codec>>) -> Result<Self> {
        let mut name_map = HashMap::new();
        for (idx, codec) in codecs.iter().enumerate() {
            let meta = codec.meta();
            for key in std::iter::once(meta.name).chain(meta.aliases.iter().copied()) {
                if let Some(prev) = name_map.insert(key.to_lowercase(), idx) {
                    if prev != idx {
                        return Err(MixerError::DuplicateMethod {
                            name: key.to_string(),
                            first: codecs[prev].name().to_string(),
                            second: meta.name.to_string(),
                        });
                    }
                }
            }
        }

        Ok(Registry { codecs, name_map })
    }

    /// The built-in method table: Morse Code, A1Z26, Reverse Cipher, Polar Cenit.
    pub fn standard() -> Result<Self> {
        Self::from_codecs(builtin_codecs()?)
    }

    pub fn global() -> &'static Registry {
        REGISTRY.get_or_init(|| match Registry::standard() {
            Ok(registry) => registry,
            Err(e) => panic!("built-in codec table is inconsistent: {}", e),
        })
    }

    pub fn get(&self, name: &str) -> Result<&dyn Codec> {
        self.name_map
            .get(name.trim().to_lowercase().as_str())
            .map(|&idx| self.codecs[idx].as_ref())
            .ok_or_else(|| MixerError::unknown_method(name))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.codecs.iter().map(|c| c.name()).collect()
    }

    pub fn list(&self) -> Vec<CodecMeta> {
        self.codecs.iter().map(|c| c.meta()).collect()
    }

    pub fn transform(&self, name: &str, direction: Direction, text: &str) -> Result<String> {
        let codec = self.get(name)?;
        tracing::debug!(method = codec.name(), ?direction, len = text.len(), "transform");
        codec.apply(direction, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::SwapCodec;

    #[test]
    fn test_names_in_display_order() {
        assert_eq!(
            Registry::global().names(),
            vec!["Morse Code", "A1Z26", "Reverse Cipher", "Polar Cenit"]
        );
    }

    #[test]
    fn test_names_are_restartable() {
        let registry = Registry::global();
        assert_eq!(registry.names(), registry.names());
        assert_eq!(registry.list().len(), registry.names().len());
    }

    #[test]
    fn test_lookup_by_name_and_alias() {
        let registry = Registry::global();
        assert_eq!(registry.get("Morse Code").unwrap().name(), "Morse Code");
        assert_eq!(registry.get("morse").unwrap().name(), "Morse Code");
        assert_eq!(registry.get("A1Z26 (Numbers)").unwrap().name(), "A1Z26");
        assert_eq!(registry.get("REVERSE").unwrap().name(), "Reverse Cipher");
        assert_eq!(registry.get("zenit-polar").unwrap().name(), "Polar Cenit");
    }

    #[test]
    fn test_unknown_method() {
        assert!(matches!(
            Registry::global().get("NoSuchMethod"),
            Err(MixerError::UnknownMethod { ref name }) if name == "NoSuchMethod"
        ));
        assert!(matches!(
            Registry::global().transform("NoSuchMethod", Direction::Encode, "x"),
            Err(MixerError::UnknownMethod { .. })
        ));
    }

    #[test]
    fn test_transform_dispatch() {
        let registry = Registry::global();
        assert_eq!(registry.transform("Morse Code", Direction::Encode, "SOS").unwrap(), "... --- ...");
        assert_eq!(registry.transform("A1Z26", Direction::Decode, "3 1 2").unwrap(), "CAB");
        assert_eq!(registry.transform("Reverse Cipher", Direction::Encode, "hello").unwrap(), "olleh");
        assert_eq!(registry.transform("Polar Cenit", Direction::Decode, "CENIT").unwrap(), "POLAR");
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let codecs: Vec<Box<dyn Codec>> = vec![
            Box::new(SwapCodec::new("Twin", "AB", "CD").unwrap()),
            Box::new(SwapCodec::new("twin", "EF", "GH").unwrap()),
        ];
        let err = match Registry::from_codecs(codecs) {
            Ok(_) => panic!("expected duplicate name to be rejected"),
            Err(e) => e,
        };
        assert!(matches!(err, MixerError::DuplicateMethod { ref name, .. } if name == "twin"));
        assert_eq!(err.to_string(), "method name 'twin' is used by both 'Twin' and 'twin'");
    }
}
