//! URI references that keep their exact text.

use core::hash::{Hash, Hasher};
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use cclkit_core::{DomainError, DomainResult};

/// A URI reference, absolute (`http://www.cnn.com`, `file:/c:/temp/test.txt`)
/// or relative (`/temp/target/target.txt`).
///
/// The input text is kept verbatim. `Url` would normalize it (for example by
/// appending a trailing `/` to a bare host), which breaks round-tripping.
/// Equality and hashing use the text alone.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Uri {
    raw: String,
    /// Byte offset of the `:` ending the scheme, when the reference is absolute.
    scheme_end: Option<usize>,
}

impl Uri {
    pub fn parse(input: &str) -> DomainResult<Self> {
        if input.is_empty() {
            return Err(DomainError::invalid_argument("URI must not be empty"));
        }
        check_reference_syntax(input)?;

        let scheme_end = match Url::parse(input) {
            Ok(_) => input.find(':'),
            Err(url::ParseError::RelativeUrlWithoutBase) => None,
            Err(e) => {
                return Err(DomainError::invalid_argument(format!(
                    "invalid URI {input:?}: {e}"
                )));
            }
        };

        Ok(Self {
            raw: input.to_string(),
            scheme_end,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Scheme as written in the input, e.g. `file` or `http`.
    pub fn scheme(&self) -> Option<&str> {
        self.scheme_end.map(|end| &self.raw[..end])
    }

    pub fn is_absolute(&self) -> bool {
        self.scheme_end.is_some()
    }

    /// Parsed form for collaborators that need one; `None` for relative references.
    pub fn to_url(&self) -> Option<Url> {
        if self.is_absolute() {
            Url::parse(&self.raw).ok()
        } else {
            None
        }
    }
}

/// Characters allowed by RFC 3986 outside of percent-escapes: unreserved,
/// gen-delims and sub-delims. Non-ASCII text is let through unescaped.
fn is_uri_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '-' | '.' | '_' | '~'
                | ':' | '/' | '?' | '#' | '[' | ']' | '@'
                | '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '='
        )
        || (!c.is_ascii() && !c.is_whitespace() && !c.is_control())
}

fn check_reference_syntax(input: &str) -> DomainResult<()> {
    let mut chars = input.char_indices();
    while let Some((i, c)) = chars.next() {
        if c == '%' {
            let escape = input.get(i + 1..i + 3);
            if !escape.is_some_and(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit())) {
                return Err(DomainError::invalid_argument(format!(
                    "invalid URI {input:?}: malformed escape at index {i}"
                )));
            }
            chars.nth(1);
        } else if !is_uri_char(c) {
            return Err(DomainError::invalid_argument(format!(
                "invalid URI {input:?}: illegal character {c:?} at index {i}"
            )));
        }
    }
    Ok(())
}

impl core::fmt::Debug for Uri {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Uri").field(&self.raw).finish()
    }
}

impl PartialEq for Uri {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Uri {}

impl Hash for Uri {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl core::fmt::Display for Uri {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Uri {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uri::parse(s)
    }
}

impl TryFrom<&str> for Uri {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Uri::parse(value)
    }
}

impl TryFrom<String> for Uri {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Uri::parse(&value)
    }
}

impl From<Uri> for String {
    fn from(value: Uri) -> Self {
        value.raw
    }
}
