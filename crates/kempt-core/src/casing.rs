//! Casing identifiers and their transforms.

use heck::{
    ToKebabCase, ToLowerCamelCase, ToShoutyKebabCase, ToShoutySnakeCase, ToSnakeCase,
    ToTitleCase, ToTrainCase, ToUpperCamelCase,
};

/// A named casing convention for one fragment of a file or folder name.
///
/// General casings can apply to any fragment; extension casings (the short
/// `p`/`lc`/`UC`/`Tc` identifiers) are the cheap transforms meant for the
/// final extension fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Casing {
    Preserve,
    Lower,
    Title,
    Upper,
    Camel,
    Pascal,
    Kebab,
    Cobol,
    Train,
    Snake,
    SnakeTitle,
    UpperSnake,
    Sponge,
    ExtPreserve,
    ExtLower,
    ExtUpper,
    ExtTitle,
}

/// Aliases accepted in format strings, resolving many-to-one onto the
/// canonical casings.
const ALIASES: [(&str, Casing); 7] = [
    ("CONSTANT_CASE", Casing::UpperSnake),
    ("UpperCamelCase", Casing::Pascal),
    ("Header-Case", Casing::Train),
    ("lower-header-case", Casing::Kebab),
    ("dash-case", Casing::Kebab),
    ("UPPER-DASH-CASE", Casing::Cobol),
    ("UPPER-KEBAB-CASE", Casing::Cobol),
];

impl Casing {
    /// The canonical general casings, in declaration order.
    pub const GENERAL: [Casing; 13] = [
        Casing::Preserve,
        Casing::Lower,
        Casing::Title,
        Casing::Upper,
        Casing::Camel,
        Casing::Pascal,
        Casing::Kebab,
        Casing::Cobol,
        Casing::Train,
        Casing::Snake,
        Casing::SnakeTitle,
        Casing::UpperSnake,
        Casing::Sponge,
    ];

    /// The extension casings.
    pub const EXTENSION: [Casing; 4] = [
        Casing::ExtPreserve,
        Casing::ExtLower,
        Casing::ExtUpper,
        Casing::ExtTitle,
    ];

    /// The alias tokens accepted by [`Casing::parse`].
    pub fn aliases() -> impl Iterator<Item = (&'static str, Casing)> {
        ALIASES.into_iter()
    }

    /// Parse a casing token, resolving aliases onto canonical casings.
    ///
    /// Tokens are matched exactly; `"LC"` or `"Uc"` are not casings.
    pub fn parse(token: &str) -> Option<Casing> {
        let canonical = Self::GENERAL
            .into_iter()
            .chain(Self::EXTENSION)
            .find(|casing| casing.as_str() == token);

        canonical.or_else(|| {
            ALIASES
                .into_iter()
                .find_map(|(alias, casing)| (alias == token).then_some(casing))
        })
    }

    /// The canonical token for this casing.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Preserve => "preserve",
            Self::Lower => "lower case",
            Self::Title => "Title Case",
            Self::Upper => "UPPER CASE",
            Self::Camel => "camelCase",
            Self::Pascal => "PascalCase",
            Self::Kebab => "kebab-case",
            Self::Cobol => "COBOL-CASE",
            Self::Train => "Train-Case",
            Self::Snake => "snake_case",
            Self::SnakeTitle => "Snake_Title_Case",
            Self::UpperSnake => "UPPER_SNAKE_CASE",
            Self::Sponge => "sPoNGEcAsE",
            Self::ExtPreserve => "p",
            Self::ExtLower => "lc",
            Self::ExtUpper => "UC",
            Self::ExtTitle => "Tc",
        }
    }

    /// Whether this casing may only appear as the final fragment of a
    /// format.
    pub fn is_extension(&self) -> bool {
        matches!(
            self,
            Self::ExtPreserve | Self::ExtLower | Self::ExtUpper | Self::ExtTitle
        )
    }

    /// Apply this casing's transform to a single fragment core.
    ///
    /// Every transform is total; unknown input never fails, it just comes
    /// out re-shaped.
    pub fn apply(&self, fragment: &str) -> String {
        match self {
            Self::Preserve | Self::ExtPreserve => fragment.to_string(),
            Self::Lower | Self::ExtLower => fragment.to_lowercase(),
            Self::Upper | Self::ExtUpper => fragment.to_uppercase(),
            Self::Title | Self::ExtTitle => fragment.to_title_case(),
            Self::Camel => fragment.to_lower_camel_case(),
            Self::Pascal => fragment.to_upper_camel_case(),
            Self::Kebab => fragment.to_kebab_case(),
            Self::Cobol => fragment.to_shouty_kebab_case(),
            Self::Train => fragment.to_train_case(),
            Self::Snake => fragment.to_snake_case(),
            Self::UpperSnake => fragment.to_shouty_snake_case(),
            Self::SnakeTitle => snake_title(fragment),
            Self::Sponge => sponge(fragment),
        }
    }
}

impl std::fmt::Display for Casing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Snake case with each segment capitalized: `some file` -> `Some_File`.
fn snake_title(fragment: &str) -> String {
    fragment
        .to_snake_case()
        .split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join("_")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Alternating caps over the alphabetic characters, starting lowercase.
///
/// The upstream notion of sponge case is random; alternation keeps the
/// transform deterministic so repeated runs agree on the expected name.
fn sponge(fragment: &str) -> String {
    let mut upper = false;
    fragment
        .chars()
        .map(|c| {
            if c.is_alphabetic() {
                let out: String = if upper {
                    c.to_uppercase().collect()
                } else {
                    c.to_lowercase().collect()
                };
                upper = !upper;
                out
            } else {
                c.to_string()
            }
        })
        .collect()
}
