//! Environment variable validation with helpful warnings
//!
//! Invalid values never abort a run: the override is dropped and a
//! [`ConfigWarning`] carries a Levenshtein-based suggestion back to the caller.

use super::types::ConfigWarning;

/// Validator for environment variable values
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    /// Create a new validator for the given environment variable
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse a value, or describe why it was rejected
    pub fn parse<T, F>(&self, value: &str, parser: F) -> Result<T, ConfigWarning>
    where
        F: Fn(&str) -> Option<T>,
    {
        parser(value).ok_or_else(|| ConfigWarning::InvalidEnvValue {
            var: self.var_name.to_string(),
            value: value.to_string(),
            suggestion: suggest(value, self.valid_values),
            valid: self.valid_values.iter().map(|v| v.to_string()).collect(),
        })
    }
}

/// Closest candidate within two edits, compared case-insensitively
///
/// A candidate spelled exactly like `value` is never suggested; one that
/// differs only in case is.
pub fn suggest(value: &str, candidates: &[&str]) -> Option<String> {
    let input = value.to_lowercase();
    let mut best: Option<(&str, usize)> = None;

    for &candidate in candidates {
        if candidate == value {
            continue;
        }
        let dist = levenshtein(&input, &candidate.to_lowercase());
        match best {
            None => best = Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => best = Some((candidate, dist)),
            _ => {}
        }
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

/// Edit distance between two strings
///
/// Compares bytes, not chars: a non-ASCII character counts as one edit per
/// UTF-8 byte, so lowercasing non-ASCII input first (as [`suggest`] does) can
/// change the distance.
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    if a_bytes.is_empty() {
        return b_bytes.len();
    }
    if b_bytes.is_empty() {
        return a_bytes.len();
    }

    let mut prev_row: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; b_bytes.len() + 1];

    for (i, a_char) in a_bytes.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_char) in b_bytes.iter().enumerate() {
            let cost = if a_char == b_char { 0 } else { 1 };
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_bytes.len()]
}
