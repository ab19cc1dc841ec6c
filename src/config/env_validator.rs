//! Environment variable parsing and typo suggestions
//!
//! A bad `STAFFDECK_*` value never fails a command. It is reported on the
//! warning writer, with the closest valid spelling when one is near, and the
//! value already in the config is kept.

use std::io::Write;

/// Largest edit distance still offered as a "did you mean" suggestion.
pub const MAX_SUGGESTION_DISTANCE: usize = 2;

pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    expected: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    /// `expected` lists the accepted spellings, or a description such as
    /// `"a positive integer"` when the value is free-form.
    pub fn new(var_name: &'a str, expected: &'a [&'a str]) -> Self {
        Self { var_name, expected }
    }

    /// Parse `value`; on failure warn on `writer` and return `fallback`.
    pub fn parse_with_writer<T, F, W>(&self, value: &str, parser: F, fallback: T, writer: &mut W) -> T
    where
        F: Fn(&str) -> Option<T>,
        W: Write,
    {
        if let Some(parsed) = parser(value) {
            return parsed;
        }

        let hint = closest_match(value, self.expected.iter().copied(), MAX_SUGGESTION_DISTANCE)
            .map(|s| format!(". Did you mean '{}'?", s))
            .unwrap_or_default();
        let _ = writeln!(
            writer,
            "Warning: Invalid {} value '{}'{}",
            self.var_name, value, hint
        );
        let _ = writeln!(writer, "Valid values: {}", self.expected.join(", "));
        fallback
    }
}

/// Case-insensitive nearest candidate within `max_distance` edits.
///
/// An exact match is not a suggestion and yields `None`.
pub fn closest_match<'c>(
    input: &str,
    candidates: impl IntoIterator<Item = &'c str>,
    max_distance: usize,
) -> Option<&'c str> {
    let input = input.to_lowercase();
    candidates
        .into_iter()
        .map(|c| (c, levenshtein(&input, &c.to_lowercase())))
        .filter(|(_, d)| (1..=max_distance).contains(d))
        .min_by_key(|(_, d)| *d)
        .map(|(c, _)| c)
}

/// Edit distance over chars, single rolling row.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == *cb {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
        }
    }

    row[b.len()]
}
