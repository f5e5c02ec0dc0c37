//! Project configuration: the `.kempt.toml` file.
//!
//! Rule tables map glob patterns to name-format strings. First match wins,
//! so declaration order is semantic and the tables deserialize into ordered
//! pairs rather than a map type.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::error::{Error, Result};
use crate::format::NameFormat;
use crate::glob::Glob;

/// The configuration filename that marks a folder as a project root.
pub const CONFIG_FILE_NAME: &str = ".kempt.toml";

/// An ordered set of `glob = "format"` rules, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet(Vec<(String, String)>);

impl RuleSet {
    pub fn iter(&self) -> std::slice::Iter<'_, (String, String)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<(String, String)>> for RuleSet {
    fn from(rules: Vec<(String, String)>) -> Self {
        Self(rules)
    }
}

impl<'de> Deserialize<'de> for RuleSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct RuleSetVisitor;

        impl<'de> Visitor<'de> for RuleSetVisitor {
            type Value = RuleSet;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a table mapping glob patterns to name formats")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<RuleSet, A::Error> {
                let mut rules = Vec::new();
                while let Some(entry) = map.next_entry::<String, String>()? {
                    rules.push(entry);
                }
                Ok(RuleSet(rules))
            }
        }

        deserializer.deserialize_map(RuleSetVisitor)
    }
}

/// The parsed shape of a `.kempt.toml` file.
///
/// # Example
///
/// ```
/// use kempt_core::config::ProjectConfig;
///
/// let config = ProjectConfig::parse(".kempt.toml", r#"
/// ignore = ["**/generated"]
///
/// [files]
/// "**/*.rs" = "snake_case.lc"
///
/// [folders]
/// "**/*" = "kebab-case"
/// "#).unwrap();
///
/// assert_eq!(config.ignore, vec!["**/generated"]);
/// assert_eq!(config.files.len(), 1);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectConfig {
    /// Patterns to ignore, in addition to any ignore files.
    #[serde(default)]
    pub ignore: Vec<String>,

    /// File naming rules, first match wins.
    #[serde(default)]
    pub files: RuleSet,

    /// Folder naming rules, first match wins.
    #[serde(default)]
    pub folders: RuleSet,
}

impl ProjectConfig {
    /// Parse a config from TOML content.
    ///
    /// `path` only labels the error when parsing fails.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config {
            path: path.to_string(),
            message: e.message().to_string(),
        })
    }

    /// Compile the declarative rules into matchable conventions.
    pub fn into_settings(self) -> Result<ProjectSettings> {
        Ok(ProjectSettings {
            ignore: self.ignore,
            file_conventions: parse_conventions(&self.files)?,
            folder_conventions: parse_conventions(&self.folders)?,
        })
    }
}

/// A glob scope paired with the name format its matches must follow.
#[derive(Debug, Clone)]
pub struct Convention {
    pub glob: Glob,
    pub format: NameFormat,
}

/// Compiled project settings: what to ignore and which conventions apply.
#[derive(Debug, Default)]
pub struct ProjectSettings {
    pub ignore: Vec<String>,
    pub file_conventions: Vec<Convention>,
    pub folder_conventions: Vec<Convention>,
}

fn parse_conventions(rules: &RuleSet) -> Result<Vec<Convention>> {
    rules
        .iter()
        .map(|(glob, format)| {
            Ok(Convention {
                glob: Glob::new(glob),
                format: NameFormat::parse(format)?,
            })
        })
        .collect()
}
