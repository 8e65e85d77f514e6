//! Quote-aware whitespace tokenizer for raw axis value strings.

use crate::error::{DynaxisError, Result};

/// Splits a raw value string on runs of whitespace.
///
/// A double-quoted substring is part of the current token with the quotes
/// stripped and is not split on internal whitespace. No escape sequences
/// are interpreted; every character other than `"` and unquoted whitespace
/// is literal token content.
///
/// ```text
/// 1 2 3      → ["1", "2", "3"]
/// 1 "2 3"    → ["1", "2 3"]
/// a"b c"d    → ["ab cd"]
/// 1 "2       → unterminated quote error
/// ```
pub fn tokenize(raw: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in raw.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }

    if in_quotes {
        return Err(DynaxisError::UnterminatedQuote {
            raw: raw.to_string(),
        });
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    Ok(tokens)
}
