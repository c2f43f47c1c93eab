//! Pattern compilation.
//!
//! # Responsibilities
//! - Turn a route pattern (`/users/:id`) into an anchored, case-insensitive regex
//! - Extract placeholder names in pattern order
//!
//! # Design Decisions
//! - Only `/` is escaped; any other regex syntax in the pattern passes through
//! - Placeholders are `:` followed by ASCII word characters
//! - Names are only collected when the pattern has two or more placeholders

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex, RegexBuilder};

/// Matches a `:identifier` placeholder token.
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r":[A-Za-z0-9_]+").expect("placeholder regex is valid")
});

/// Capture group substituted for every placeholder.
const SEGMENT_CAPTURE: &str = "([^/]+)";

/// Matches nothing. Used when a pattern cannot be compiled at all.
static UNMATCHABLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\s\S]").expect("unmatchable regex is valid")
});

/// How a pattern ended up compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileMode {
    /// The pattern text was used as regex syntax.
    Raw,
    /// The regex engine rejected the raw text; literal runs were escaped.
    Literal,
    /// Neither form compiled (e.g. over the regex size limit). Never matches.
    Unmatchable,
}

impl CompileMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompileMode::Raw => "raw",
            CompileMode::Literal => "literal",
            CompileMode::Unmatchable => "unmatchable",
        }
    }
}

/// A pattern compiled into a path regex.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
    mode: CompileMode,
}

impl CompiledPattern {
    /// The compiled regex.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn into_regex(self) -> Regex {
        self.regex
    }

    pub fn mode(&self) -> CompileMode {
        self.mode
    }
}

/// Build the regex source for `pattern`.
///
/// Slashes are escaped first, then each placeholder becomes a non-empty
/// segment capture, then the whole thing is anchored at both ends.
pub fn regex_source(pattern: &str) -> String {
    let escaped = pattern.replace('/', r"\/");
    let substituted = PLACEHOLDER.replace_all(&escaped, NoExpand(SEGMENT_CAPTURE));
    format!("^{}$", substituted)
}

/// Same shape as [`regex_source`] but with every literal run escaped, so the
/// result always compiles.
fn literal_regex_source(pattern: &str) -> String {
    let mut source = String::with_capacity(pattern.len() + 8);
    source.push('^');

    let mut pos = 0;
    for token in PLACEHOLDER.find_iter(pattern) {
        source.push_str(&regex::escape(&pattern[pos..token.start()]));
        source.push_str(SEGMENT_CAPTURE);
        pos = token.end();
    }
    source.push_str(&regex::escape(&pattern[pos..]));

    source.push('$');
    source
}

fn build(source: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(source).case_insensitive(true).build()
}

/// Compile `pattern` into a path matcher.
///
/// Never fails. A pattern the regex engine rejects (for example an unbalanced
/// `(`) is recompiled with its literal text escaped; if that is rejected too
/// the route gets a regex that matches no path.
pub fn compile(pattern: &str) -> CompiledPattern {
    let raw_err = match build(&regex_source(pattern)) {
        Ok(regex) => {
            return CompiledPattern {
                regex,
                mode: CompileMode::Raw,
            }
        }
        Err(e) => e,
    };

    match build(&literal_regex_source(pattern)) {
        Ok(regex) => {
            tracing::warn!(
                pattern = %pattern,
                error = %raw_err,
                "Pattern is not a valid regex, matching its text literally"
            );
            CompiledPattern {
                regex,
                mode: CompileMode::Literal,
            }
        }
        Err(e) => {
            tracing::warn!(
                pattern_len = pattern.len(),
                error = %e,
                "Pattern cannot be compiled, route will never match"
            );
            CompiledPattern {
                regex: UNMATCHABLE.clone(),
                mode: CompileMode::Unmatchable,
            }
        }
    }
}

/// Every placeholder name in `pattern`, in order, without the leading `:`.
pub fn placeholder_names(pattern: &str) -> Vec<String> {
    PLACEHOLDER
        .find_iter(pattern)
        .map(|m| m.as_str()[1..].to_string())
        .collect()
}

/// Parameter names bound by a matcher for `pattern`.
///
/// Patterns with fewer than two placeholders bind no names at all; with two
/// or more, every name is kept, the first included.
pub fn param_names(pattern: &str) -> Vec<String> {
    let names = placeholder_names(pattern);
    if names.len() > 1 {
        names
    } else {
        Vec::new()
    }
}
