use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use crate::config::TokenizeConfig;
use crate::error::CanonicalError;

/// Splits raw text into normalized word tokens using the default
/// (ASCII-exact) configuration.
///
/// Each whitespace-delimited unit keeps only its ASCII letters and digits,
/// lowercased. Units that become empty are dropped, so `"-- Hi!"` yields
/// just `["hi"]`. Units are separated by the C locale whitespace set, which
/// includes vertical tab.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::with_capacity((text.len() / 5).saturating_add(1));
    for unit in text.split(is_c_space).filter(|unit| !unit.is_empty()) {
        push_ascii_unit(unit, &mut tokens);
    }
    tokens
}

/// Splits raw text into normalized word tokens with an explicit configuration.
pub fn tokenize_with(text: &str, cfg: &TokenizeConfig) -> Result<Vec<String>, CanonicalError> {
    cfg.validate()?;

    if !cfg.unicode {
        return Ok(tokenize(text));
    }

    let normalized: Cow<str> = if cfg.normalize_unicode {
        Cow::Owned(text.nfkc().collect::<String>())
    } else {
        Cow::Borrowed(text)
    };

    let mut tokens = Vec::with_capacity((normalized.len() / 5).saturating_add(1));
    for unit in normalized.split_whitespace() {
        let mut clean = String::with_capacity(unit.len());
        for ch in unit.chars().filter(|c| c.is_alphanumeric()) {
            // Lowercasing can expand a single character (e.g. 'İ' -> "i̇").
            clean.extend(ch.to_lowercase());
        }
        if !clean.is_empty() {
            tokens.push(clean);
        }
    }
    Ok(tokens)
}

/// Space, `\t`, `\n`, `\v`, `\f` and `\r`.
#[inline]
fn is_c_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

#[inline]
fn push_ascii_unit(unit: &str, out: &mut Vec<String>) {
    let clean: String = unit
        .bytes()
        .filter(u8::is_ascii_alphanumeric)
        .map(|b| char::from(b.to_ascii_lowercase()))
        .collect();
    if !clean.is_empty() {
        out.push(clean);
    }
}
