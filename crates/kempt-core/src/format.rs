//! Name formats: the parsed form of `"PascalCase.kebab-case.lc"`.

use serde::{Serialize, Serializer};

use crate::casing::Casing;
use crate::error::{Error, Result};

/// An ordered, non-empty sequence of casings, one per dot-delimited name
/// fragment.
///
/// When a name has more fragments than the format, the final casing
/// repeats. The original spelling is kept so a format prints back exactly
/// as it was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFormat {
    casings: Vec<Casing>,
    pattern: String,
}

impl NameFormat {
    /// Parse a format string such as `"UPPER CASE.lc"`.
    ///
    /// Fails on unknown casing tokens, and on extension casings anywhere
    /// but the final position. A single-token format is valid and applies
    /// uniformly to every fragment.
    pub fn parse(pattern: &str) -> Result<Self> {
        let tokens: Vec<&str> = pattern.split('.').collect();
        let mut casings = Vec::with_capacity(tokens.len());

        for (i, token) in tokens.iter().enumerate() {
            let casing = Casing::parse(token).ok_or_else(|| Error::UnknownCasing {
                token: token.to_string(),
                pattern: pattern.to_string(),
            })?;

            if casing.is_extension() && i != tokens.len() - 1 {
                return Err(Error::MisplacedExtension {
                    token: token.to_string(),
                    pattern: pattern.to_string(),
                });
            }

            casings.push(casing);
        }

        Ok(Self {
            casings,
            pattern: pattern.to_string(),
        })
    }

    /// The resolved casings, in fragment order.
    pub fn casings(&self) -> &[Casing] {
        &self.casings
    }

    /// The casing governing fragment `index`, with the final casing
    /// repeating past the end of the format.
    pub fn at(&self, index: usize) -> Casing {
        self.casings[index.min(self.casings.len() - 1)]
    }

    /// The extension casing, when the format ends with one.
    pub fn extension(&self) -> Option<Casing> {
        self.casings
            .last()
            .copied()
            .filter(Casing::is_extension)
    }
}

impl std::fmt::Display for NameFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pattern)
    }
}

impl Serialize for NameFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
