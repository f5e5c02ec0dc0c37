//! Glob patterns compiled into path predicates.

use glob_match::glob_match;

/// A compiled glob: wildcards (`*`, `**`), brace groups, and character
/// classes, matched case-insensitively with dot-files included.
///
/// A pattern without any glob syntax degrades to a literal path-equality
/// check. A leading `!` marks the glob as negated; the flag is exposed for
/// the ignore resolver, while [`Glob::matches`] always tests the pattern
/// body itself.
#[derive(Debug, Clone)]
pub struct Glob {
    pattern: String,
    negated: bool,
    matcher: Matcher,
}

#[derive(Debug, Clone)]
enum Matcher {
    /// Matches every path unconditionally.
    Anything,
    /// Case-insensitive path equality, for patterns with no glob syntax.
    Literal(String),
    /// Case-folded glob evaluation.
    Pattern(String),
}

impl Glob {
    /// Compile a pattern into a matcher.
    pub fn new(pattern: &str) -> Self {
        let (negated, body) = match pattern.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, pattern),
        };

        let folded = body.to_lowercase();
        let matcher = if body.contains(['*', '?', '[', ']', '{', '}']) {
            Matcher::Pattern(folded)
        } else {
            Matcher::Literal(folded)
        };

        Self {
            pattern: pattern.to_string(),
            negated,
            matcher,
        }
    }

    /// The glob that matches any file or folder.
    pub fn anything() -> Self {
        Self {
            pattern: "**/*".to_string(),
            negated: false,
            matcher: Matcher::Anything,
        }
    }

    /// Compile a pattern rewritten to apply under a prefix directory,
    /// preserving a leading negation marker.
    ///
    /// `Glob::within("/foo/", "!/**/*.ts")` compiles `"!/foo/**/*.ts"`.
    pub fn within(prefix: &str, pattern: &str) -> Self {
        let (bang, body) = match pattern.strip_prefix('!') {
            Some(rest) => ("!", rest),
            None => ("", pattern),
        };
        let prefix = prefix.trim_end_matches('/');
        let body = body.trim_start_matches('/');

        if prefix.is_empty() {
            Self::new(&format!("{bang}{body}"))
        } else {
            Self::new(&format!("{bang}{prefix}/{body}"))
        }
    }

    /// The pattern text this glob was compiled from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether the pattern carried a leading `!`.
    pub fn negated(&self) -> bool {
        self.negated
    }

    /// Whether the path matches the pattern body.
    pub fn matches(&self, path: &str) -> bool {
        match &self.matcher {
            Matcher::Anything => true,
            Matcher::Literal(literal) => *literal == path.to_lowercase(),
            Matcher::Pattern(glob) => glob_match(glob, &path.to_lowercase()),
        }
    }
}
