//! Name synthesis - tokens plus category base word into a kebab-case file name

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::{Error, Result};

pub const EXTENSION: &str = "svg";

/// Most descriptor tokens kept ahead of the base word
pub const MAX_DESCRIPTORS: usize = 3;

/// Base word when a category label sanitizes to nothing
const FALLBACK_BASE: &str = "shape";

static INVALID_CHARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9-]").unwrap());
static SEPARATOR_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").unwrap());
static VALID_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*\.svg$").unwrap());

/// A sanitized `.svg` file name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DescriptiveName(String);

impl DescriptiveName {
    /// Validate an existing file name
    pub fn parse(name: &str) -> Result<Self> {
        if VALID_NAME.is_match(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(Error::InvalidName(name.to_string()))
        }
    }

    /// Name from an already sanitized, non-empty stem
    fn from_stem(stem: &str) -> Self {
        Self(format!("{stem}.{EXTENSION}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name without the extension
    pub fn stem(&self) -> &str {
        self.0
            .strip_suffix(EXTENSION)
            .and_then(|s| s.strip_suffix('.'))
            .unwrap_or(&self.0)
    }

    /// Same name with a `-v{n}` collision marker before the extension
    pub fn versioned(&self, n: usize) -> Self {
        Self::from_stem(&format!("{}-v{n}", self.stem()))
    }
}

impl fmt::Display for DescriptiveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DescriptiveName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DescriptiveName {
    type Error = Error;

    fn try_from(name: String) -> Result<Self> {
        Self::parse(&name)
    }
}

impl From<DescriptiveName> for String {
    fn from(name: DescriptiveName) -> Self {
        name.0
    }
}

/// Build the file name for a token sequence in `category`.
///
/// Tokens are deduplicated keeping first occurrence and capped at
/// [`MAX_DESCRIPTORS`]; the category base word always comes last.
pub fn synthesize<S: AsRef<str>>(tokens: &[S], category: &Category) -> DescriptiveName {
    let base = sanitize(category.base_word());
    let base = if base.is_empty() {
        FALLBACK_BASE.to_string()
    } else {
        base
    };

    let mut parts: Vec<&str> = Vec::with_capacity(MAX_DESCRIPTORS + 1);
    for token in tokens {
        let token: &str = token.as_ref();
        if parts.len() == MAX_DESCRIPTORS {
            break;
        }
        if !parts.contains(&token) {
            parts.push(token);
        }
    }
    parts.push(&base);

    DescriptiveName::from_stem(&sanitize(&parts.join("-")))
}

/// Lowercase, map anything outside `[a-z0-9-]` to `-`, collapse and trim separators
pub fn sanitize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let replaced = INVALID_CHARS.replace_all(&lowered, "-");
    let collapsed = SEPARATOR_RUNS.replace_all(&replaced, "-");
    collapsed.trim_matches('-').to_string()
}
