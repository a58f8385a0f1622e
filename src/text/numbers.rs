use std::num::IntErrorKind;

use crate::error::TokenizerError;

const FIRST_FOURTEEN: [&str; 15] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen",
];

/// Stems shared by the `-teen` and `-ty` forms, starting at "twen".
const PREFIXES: [&str; 8] = ["twen", "thir", "for", "fif", "six", "seven", "eigh", "nine"];

/// Exclusive upper bound on the magnitude `int_to_str` can spell out.
pub const MAX_SPELLED: u64 = 1_000_000_000;

/// Spell out an integer in English words.
///
/// Negative values are prefixed with `"minus"`. Magnitudes of one billion or
/// more are rejected with [`TokenizerError::NumberOutOfRange`].
///
/// ```
/// use tts_text::text::int_to_str;
///
/// assert_eq!(int_to_str(1001).unwrap(), "one thousand one");
/// assert_eq!(int_to_str(-5).unwrap(), "minus five");
/// ```
pub fn int_to_str(number: i64) -> Result<String, TokenizerError> {
    let magnitude = number.unsigned_abs();
    if magnitude >= MAX_SPELLED {
        return Err(TokenizerError::NumberOutOfRange(number));
    }

    let words = spell(magnitude);
    if number < 0 {
        Ok(format!("minus {words}"))
    } else {
        Ok(words)
    }
}

fn spell(n: u64) -> String {
    match n {
        0..=14 => FIRST_FOURTEEN[n as usize].to_string(),
        15..=19 => format!("{}teen", PREFIXES[n as usize - 12]),
        20..=99 => {
            let tens = format!("{}ty", PREFIXES[n as usize / 10 - 2]);
            with_remainder(tens, n % 10)
        }
        100..=999 => {
            let hundreds = format!("{} hundred", FIRST_FOURTEEN[n as usize / 100]);
            with_remainder(hundreds, n % 100)
        }
        1_000..=999_999 => with_remainder(format!("{} thousand", spell(n / 1_000)), n % 1_000),
        _ => with_remainder(format!("{} million", spell(n / 1_000_000)), n % 1_000_000),
    }
}

fn with_remainder(head: String, remainder: u64) -> String {
    if remainder == 0 {
        head
    } else {
        format!("{head} {}", spell(remainder))
    }
}

/// Replace purely numeric tokens with their spelled-out words.
///
/// A token is numeric only if the whole of it parses as a base-10 integer
/// (an optional sign is accepted). Non-numeric tokens pass through
/// unchanged. Numerals that cannot be spelled (one billion and beyond, or
/// too long to fit an `i64`) are dropped from the output.
pub fn expand_numbers<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    let mut expanded = Vec::with_capacity(tokens.len());

    for token in tokens {
        let token = token.as_ref();
        let value = match token.parse::<i64>() {
            Ok(value) => value,
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                log::trace!("Dropping numeral {token:?}: does not fit in i64");
                continue;
            }
            Err(_) => {
                expanded.push(token.to_string());
                continue;
            }
        };

        let words = match int_to_str(value) {
            Ok(words) => words,
            Err(e) => {
                log::trace!("Dropping numeral {token:?}: {e}");
                continue;
            }
        };

        let before = expanded.len();
        expanded.extend(words.split(' ').filter(|w| !w.is_empty()).map(str::to_string));
        if expanded.len() == before {
            expanded.push(words);
        }
    }

    expanded
}
