//! Player name normalization
//!
//! The reference tables store some last names with their non-ASCII
//! characters double-encoded as literal escape sequences (`Mbapp\u00e9`).
//! [`normalize_name`] decodes those sequences and falls back to the raw
//! text when a sequence is malformed, reporting which case applied.

use thiserror::Error;
use tracing::trace;

/// Result of normalizing a raw name field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedName {
    /// One or more escape sequences were decoded
    Decoded(String),
    /// Nothing to decode; the text is returned as-is (empty for a missing field)
    Unchanged(String),
    /// Decoding failed; the original text is returned
    Malformed(String),
}

impl NormalizedName {
    pub fn as_str(&self) -> &str {
        match self {
            NormalizedName::Decoded(s) | NormalizedName::Unchanged(s) | NormalizedName::Malformed(s) => s,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            NormalizedName::Decoded(s) | NormalizedName::Unchanged(s) | NormalizedName::Malformed(s) => s,
        }
    }

    pub fn is_decoded(&self) -> bool {
        matches!(self, NormalizedName::Decoded(_))
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, NormalizedName::Malformed(_))
    }
}

/// Reasons an escaped name cannot be decoded
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EscapeError {
    #[error("trailing backslash")]
    TrailingBackslash,

    #[error("truncated \\{escape} escape at offset {offset}")]
    TruncatedHex { escape: char, offset: usize },

    #[error("code point {0:#x} is out of range")]
    InvalidCodePoint(u32),

    #[error("unpaired surrogate {0:#x}")]
    LoneSurrogate(u32),

    #[error("named escapes are not supported")]
    NamedEscape,
}

/// Normalize an optional raw name into a display string
pub fn normalize_name(raw: Option<&str>) -> NormalizedName {
    let Some(raw) = raw else {
        return NormalizedName::Unchanged(String::new());
    };

    if !raw.contains('\\') {
        return NormalizedName::Unchanged(raw.to_string());
    }

    match unescape(raw) {
        Ok(decoded) if decoded == raw => NormalizedName::Unchanged(decoded),
        Ok(decoded) => NormalizedName::Decoded(decoded),
        Err(e) => {
            trace!("Keeping raw name {:?}: {}", raw, e);
            NormalizedName::Malformed(raw.to_string())
        }
    }
}

/// Shorthand for callers that only need the display string
pub fn display_name(raw: Option<&str>) -> String {
    normalize_name(raw).into_string()
}

/// Decode backslash escape sequences.
///
/// Unknown escapes are kept verbatim, backslash included. Characters outside
/// escape sequences are copied through untouched.
pub fn unescape(raw: &str) -> Result<String, EscapeError> {
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        i += 1;
        if c != '\\' {
            out.push(c);
            continue;
        }

        let Some(&esc) = chars.get(i) else {
            return Err(EscapeError::TrailingBackslash);
        };
        i += 1;

        match esc {
            '\n' => {}
            '\\' => out.push('\\'),
            '\'' => out.push('\''),
            '"' => out.push('"'),
            'a' => out.push('\u{07}'),
            'b' => out.push('\u{08}'),
            'f' => out.push('\u{0C}'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'v' => out.push('\u{0B}'),
            '0'..='7' => {
                let mut value = esc.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match chars.get(i).and_then(|d| d.to_digit(8)) {
                        Some(d) => {
                            value = value * 8 + d;
                            i += 1;
                        }
                        None => break,
                    }
                }
                out.push(to_char(value)?);
            }
            'x' => {
                let value = read_hex(&chars, i, 2, esc)?;
                i += 2;
                out.push(to_char(value)?);
            }
            'u' => {
                let value = read_hex(&chars, i, 4, esc)?;
                i += 4;
                if (0xD800..=0xDBFF).contains(&value) {
                    // High surrogate: only valid when followed by \uDC00..\uDFFF
                    let low = match (chars.get(i), chars.get(i + 1)) {
                        (Some('\\'), Some('u')) => read_hex(&chars, i + 2, 4, 'u').ok(),
                        _ => None,
                    };
                    match low {
                        Some(low) if (0xDC00..=0xDFFF).contains(&low) => {
                            i += 6;
                            let combined = 0x10000 + ((value - 0xD800) << 10) + (low - 0xDC00);
                            out.push(to_char(combined)?);
                        }
                        _ => return Err(EscapeError::LoneSurrogate(value)),
                    }
                } else {
                    out.push(to_char(value)?);
                }
            }
            'U' => {
                let value = read_hex(&chars, i, 8, esc)?;
                i += 8;
                out.push(to_char(value)?);
            }
            'N' => return Err(EscapeError::NamedEscape),
            other => {
                out.push('\\');
                out.push(other);
            }
        }
    }

    Ok(out)
}

fn read_hex(chars: &[char], start: usize, len: usize, escape: char) -> Result<u32, EscapeError> {
    let truncated = EscapeError::TruncatedHex { escape, offset: start.saturating_sub(2) };
    let digits = chars.get(start..start + len).ok_or_else(|| truncated.clone())?;
    let mut value: u32 = 0;
    for d in digits {
        let digit = d.to_digit(16).ok_or_else(|| truncated.clone())?;
        value = value.checked_mul(16).ok_or(EscapeError::InvalidCodePoint(value))? + digit;
    }
    Ok(value)
}

fn to_char(value: u32) -> Result<char, EscapeError> {
    if (0xD800..=0xDFFF).contains(&value) {
        return Err(EscapeError::LoneSurrogate(value));
    }
    char::from_u32(value).ok_or(EscapeError::InvalidCodePoint(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_name_is_empty() {
        assert_eq!(normalize_name(None), NormalizedName::Unchanged(String::new()));
        assert_eq!(display_name(None), "");
    }

    #[test]
    fn test_plain_ascii_unchanged() {
        let name = normalize_name(Some("Pavard"));
        assert_eq!(name, NormalizedName::Unchanged("Pavard".into()));
        assert!(!name.is_decoded());
    }

    #[test]
    fn test_real_non_ascii_kept() {
        assert_eq!(normalize_name(Some("Müller")).as_str(), "Müller");
    }

    #[test]
    fn test_unicode_escape_decoded() {
        let name = normalize_name(Some(r"Mbapp\u00e9"));
        assert!(name.is_decoded());
        assert_eq!(name.as_str(), "Mbappé");
    }

    #[test]
    fn test_multiple_escape_forms() {
        assert_eq!(display_name(Some(r"Kant\xe9")), "Kanté");
        assert_eq!(display_name(Some(r"Kant\351")), "Kanté");
        assert_eq!(display_name(Some(r"\U0000015Bwiątek")), "świątek");
        assert_eq!(display_name(Some(r"O\'Neil")), "O'Neil");
        assert_eq!(display_name(Some(r"a\\b")), r"a\b");
    }

    #[test]
    fn test_surrogate_pair_combined() {
        assert_eq!(display_name(Some(r"\ud83d\ude00")), "\u{1F600}");
    }

    #[test]
    fn test_unknown_escape_kept_verbatim() {
        let name = normalize_name(Some(r"ab\qc"));
        assert_eq!(name, NormalizedName::Unchanged(r"ab\qc".into()));
    }

    #[test]
    fn test_malformed_returns_original() {
        for raw in [r"Trailing\", r"Bad\u00g1", r"Short\x4", r"\ud83d alone", r"\N{DASH}", r"\U00110000"] {
            let name = normalize_name(Some(raw));
            assert!(name.is_malformed(), "{raw} should be malformed");
            assert_eq!(name.into_string(), raw);
        }
    }

    #[test]
    fn test_unescape_errors() {
        assert_eq!(unescape(r"x\"), Err(EscapeError::TrailingBackslash));
        assert_eq!(unescape(r"\udc00"), Err(EscapeError::LoneSurrogate(0xDC00)));
        assert_eq!(unescape(r"\U00110000"), Err(EscapeError::InvalidCodePoint(0x110000)));
        assert!(matches!(unescape(r"\x"), Err(EscapeError::TruncatedHex { escape: 'x', .. })));
    }

    #[test]
    fn test_line_continuation_dropped() {
        assert_eq!(unescape("ab\\\ncd").unwrap(), "abcd");
    }
}
