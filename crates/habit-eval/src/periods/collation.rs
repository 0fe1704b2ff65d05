use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Three-level sort key over the canonical decomposition of a name.
///
/// Levels are compared in order over the whole string: base letters
/// ignoring case, then the accents on each letter, then case with
/// lowercase first.
#[derive(Debug, PartialEq, Eq)]
struct CollationKey {
    primary: Vec<char>,
    secondary: Vec<Vec<char>>,
    tertiary: Vec<bool>,
}

impl CollationKey {
    fn new(name: &str) -> Self {
        let mut key = CollationKey {
            primary: Vec::new(),
            secondary: Vec::new(),
            tertiary: Vec::new(),
        };

        for ch in name.trim().nfd() {
            if is_combining_mark(ch) {
                match key.secondary.last_mut() {
                    Some(marks) => marks.push(ch),
                    None => key.secondary.push(vec![ch]),
                }
                continue;
            }

            key.primary.extend(ch.to_lowercase());
            key.secondary.push(Vec::new());
            key.tertiary.push(ch.is_uppercase());
        }

        key
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.primary
            .cmp(&other.primary)
            .then_with(|| self.secondary.cmp(&other.secondary))
            .then_with(|| self.tertiary.cmp(&other.tertiary))
    }
}

/// Orders display names alphabetically: letters first, then accents, then
/// case (lowercase before uppercase). Falls back to the raw strings so the
/// order is total.
pub fn compare_names(left: &str, right: &str) -> Ordering {
    CollationKey::new(left)
        .compare(&CollationKey::new(right))
        .then_with(|| left.cmp(right))
}
