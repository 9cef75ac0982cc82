//! Natural ordering for street labels
//!
//! Digit runs compare as numbers, so "2nd St" sorts before "10th St".

use std::cmp::Ordering;

use crate::suggestion::SuggestionItem;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum KeyPart {
    Number(u64),
    Text(String),
}

/// Split a label into alternating text and number parts
pub fn natural_key(label: &str) -> Vec<KeyPart> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut in_digits = false;

    for ch in label.chars() {
        let is_digit = ch.is_ascii_digit();
        if is_digit != in_digits && !current.is_empty() {
            parts.push(make_part(std::mem::take(&mut current), in_digits));
        }
        in_digits = is_digit;
        current.push(ch);
    }
    if !current.is_empty() {
        parts.push(make_part(current, in_digits));
    }

    parts
}

fn make_part(run: String, digits: bool) -> KeyPart {
    if digits {
        // Runs too long for u64 fall back to text comparison
        match run.parse::<u64>() {
            Ok(n) => KeyPart::Number(n),
            Err(_) => KeyPart::Text(run),
        }
    } else {
        KeyPart::Text(run)
    }
}

fn compare_labels(a: &str, b: &str) -> Ordering {
    natural_key(a).cmp(&natural_key(b)).then_with(|| a.cmp(b))
}

/// Sort items by the natural order of their labels (stable)
pub fn sort_naturally(items: &mut [SuggestionItem]) {
    items.sort_by(|a, b| compare_labels(&a.label, &b.label));
}

#[cfg(test)]
#[path = "sorting_tests.rs"]
mod sorting_tests;
