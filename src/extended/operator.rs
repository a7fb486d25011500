// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The six deterministic operators and their token recognizers.

use super::{span, MatchResult, Matcher};
use crate::contracts;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Closed set of deterministic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    Exact,
    InverseExact,
    PrefixExact,
    InversePrefixExact,
    SuffixExact,
    InverseSuffixExact,
}

/// Recognizer pairs indexed by `OperatorKind as usize`: (single, quoted).
static RECOGNIZERS: LazyLock<[(Regex, Regex); 6]> = LazyLock::new(|| {
    let compile = |single: &str, quoted: &str| {
        (
            Regex::new(single).expect("static operator pattern"),
            Regex::new(quoted).expect("static operator pattern"),
        )
    };
    [
        compile(r#"^"(.*)"$"#, r"^'(.*)'$"),
        compile(r#"^!"(.*)"$"#, r"^!'(.*)'$"),
        compile(r"^\^(.*)$", r#"^\^"(.*)"$"#),
        compile(r"^!\^(.*)$", r#"^!\^"(.*)"$"#),
        compile(r"^(.*)\$$", r#"^"(.*)"\$$"#),
        compile(r"^!(.*)\$$", r#"^!"(.*)"\$$"#),
    ]
});

impl OperatorKind {
    pub const ALL: [OperatorKind; 6] = [
        OperatorKind::Exact,
        OperatorKind::InverseExact,
        OperatorKind::PrefixExact,
        OperatorKind::InversePrefixExact,
        OperatorKind::SuffixExact,
        OperatorKind::InverseSuffixExact,
    ];

    /// Order in which token parsing tries the operators. Where two
    /// single-token syntaxes overlap the earlier kind wins: `"fly$"` is an
    /// exact match on `fly$`, and `^fire$` is a prefix match on `fire$`.
    pub const PARSE_ORDER: [OperatorKind; 6] = [
        OperatorKind::Exact,
        OperatorKind::PrefixExact,
        OperatorKind::InversePrefixExact,
        OperatorKind::InverseSuffixExact,
        OperatorKind::SuffixExact,
        OperatorKind::InverseExact,
    ];

    /// Stable type tag.
    pub fn name(self) -> &'static str {
        match self {
            OperatorKind::Exact => "exact",
            OperatorKind::InverseExact => "inverse-exact",
            OperatorKind::PrefixExact => "prefix-exact",
            OperatorKind::InversePrefixExact => "inverse-prefix-exact",
            OperatorKind::SuffixExact => "suffix-exact",
            OperatorKind::InverseSuffixExact => "inverse-suffix-exact",
        }
    }

    pub fn is_inverse(self) -> bool {
        matches!(
            self,
            OperatorKind::InverseExact
                | OperatorKind::InversePrefixExact
                | OperatorKind::InverseSuffixExact
        )
    }

    /// The operator whose `is_match` is always the opposite of this one's.
    pub fn inverse(self) -> OperatorKind {
        match self {
            OperatorKind::Exact => OperatorKind::InverseExact,
            OperatorKind::InverseExact => OperatorKind::Exact,
            OperatorKind::PrefixExact => OperatorKind::InversePrefixExact,
            OperatorKind::InversePrefixExact => OperatorKind::PrefixExact,
            OperatorKind::SuffixExact => OperatorKind::InverseSuffixExact,
            OperatorKind::InverseSuffixExact => OperatorKind::SuffixExact,
        }
    }

    /// Recognizer for the single-token form, e.g. `^word` or `"word"`.
    pub fn single_pattern(self) -> &'static Regex {
        &RECOGNIZERS[self as usize].0
    }

    /// Recognizer for the quoted multi-word form, e.g. `^"multi word"` or
    /// `'multi word'`.
    pub fn quoted_pattern(self) -> &'static Regex {
        &RECOGNIZERS[self as usize].1
    }

    /// Pattern captured from `token`, if this operator's syntax matches.
    ///
    /// An empty capture (`^`, `""`) counts as no match.
    pub fn recognize(self, token: &str, quoted: bool) -> Option<&str> {
        let recognizer = if quoted {
            self.quoted_pattern()
        } else {
            self.single_pattern()
        };
        recognizer
            .captures(token)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|pattern| !pattern.is_empty())
    }

    fn decorate(self, pattern: &str, quoted: bool) -> String {
        match (self, quoted) {
            (OperatorKind::Exact, false) => format!("\"{pattern}\""),
            (OperatorKind::Exact, true) => format!("'{pattern}'"),
            (OperatorKind::InverseExact, false) => format!("!\"{pattern}\""),
            (OperatorKind::InverseExact, true) => format!("!'{pattern}'"),
            (OperatorKind::PrefixExact, false) => format!("^{pattern}"),
            (OperatorKind::PrefixExact, true) => format!("^\"{pattern}\""),
            (OperatorKind::InversePrefixExact, false) => format!("!^{pattern}"),
            (OperatorKind::InversePrefixExact, true) => format!("!^\"{pattern}\""),
            (OperatorKind::SuffixExact, false) => format!("{pattern}$"),
            (OperatorKind::SuffixExact, true) => format!("\"{pattern}\"$"),
            (OperatorKind::InverseSuffixExact, false) => format!("!{pattern}$"),
            (OperatorKind::InverseSuffixExact, true) => format!("!\"{pattern}\"$"),
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A deterministic operator bound to its literal pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtendedMatch {
    pub kind: OperatorKind,
    pub pattern: String,
}

impl ExtendedMatch {
    pub fn new(kind: OperatorKind, pattern: impl Into<String>) -> Self {
        Self {
            kind,
            pattern: pattern.into(),
        }
    }

    pub fn exact(pattern: impl Into<String>) -> Self {
        Self::new(OperatorKind::Exact, pattern)
    }

    pub fn inverse_exact(pattern: impl Into<String>) -> Self {
        Self::new(OperatorKind::InverseExact, pattern)
    }

    pub fn prefix(pattern: impl Into<String>) -> Self {
        Self::new(OperatorKind::PrefixExact, pattern)
    }

    pub fn inverse_prefix(pattern: impl Into<String>) -> Self {
        Self::new(OperatorKind::InversePrefixExact, pattern)
    }

    pub fn suffix(pattern: impl Into<String>) -> Self {
        Self::new(OperatorKind::SuffixExact, pattern)
    }

    pub fn inverse_suffix(pattern: impl Into<String>) -> Self {
        Self::new(OperatorKind::InverseSuffixExact, pattern)
    }

    /// Same pattern, opposite operator.
    pub fn negated(&self) -> Self {
        Self::new(self.kind.inverse(), self.pattern.clone())
    }

    /// Token text that parses back to this operator. Patterns containing
    /// whitespace use the quoted form.
    pub fn to_token(&self) -> String {
        let quoted = self.pattern.chars().any(char::is_whitespace);
        self.kind.decorate(&self.pattern, quoted)
    }
}

impl Matcher for ExtendedMatch {
    fn search(&self, text: &str) -> MatchResult {
        let pattern = self.pattern.as_str();
        let text_len = text.chars().count();
        let whole_text = span(0, text_len);

        let result = match self.kind {
            OperatorKind::Exact => MatchResult::binary(text == pattern, whole_text),
            OperatorKind::InverseExact => MatchResult::binary(text != pattern, whole_text),
            OperatorKind::PrefixExact => MatchResult::binary(
                text.starts_with(pattern),
                span(0, pattern.chars().count()),
            ),
            OperatorKind::InversePrefixExact => {
                MatchResult::binary(!text.starts_with(pattern), whole_text)
            }
            OperatorKind::SuffixExact => {
                let start = text_len.saturating_sub(pattern.chars().count());
                MatchResult::binary(text.ends_with(pattern), span(start, text_len))
            }
            OperatorKind::InverseSuffixExact => {
                MatchResult::binary(!text.ends_with(pattern), whole_text)
            }
        };

        contracts::check_binary_score(&result);
        contracts::check_indices_within(&result, text_len);
        result
    }
}

impl fmt::Display for ExtendedMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_token())
    }
}
