fn ascii_alphanumeric(s: &str) -> impl Iterator<Item = u8> + '_ {
    s.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c as u8)
}

/// Substitute for https://doc.rust-lang.org/std/iter/trait.Iterator.html#method.eq_by which is
/// not yet stabilized.
fn eq_by<T>(
    mut a: impl Iterator<Item = T>,
    mut b: impl Iterator<Item = T>,
    eq: impl Fn(T, T) -> bool,
) -> bool {
    loop {
        match (a.next(), b.next()) {
            (None, None) => return true,
            (Some(_), None) | (None, Some(_)) => return false,
            (Some(a), Some(b)) => {
                if !eq(a, b) {
                    return false;
                }
            }
        }
    }
}

/// Compare two names, ignoring case and everything that isn't an ASCII letter or digit
pub fn flex_eq(str_a: &str, str_b: &str) -> bool {
    eq_by(
        ascii_alphanumeric(str_a),
        ascii_alphanumeric(str_b),
        |a, b| a.eq_ignore_ascii_case(&b),
    )
}

/// Lookup in a list of `(name, value)` entries using [`flex_eq`].
pub trait FlexLookup<T> {
    fn flex_find(&self, key: &str) -> Option<&T>;
}

impl<T> FlexLookup<T> for [(&str, T)] {
    fn flex_find(&self, search_key: &str) -> Option<&T> {
        if let Some((_, value)) = self.iter().find(|(key, _)| *key == search_key) {
            return Some(value);
        }

        let mut winning_value: Option<&T> = None;
        for (key, value) in self.iter() {
            if !flex_eq(key, search_key) {
                continue;
            }
            if winning_value.is_none() {
                winning_value = Some(value);
            } else {
                // Two entries match loosely, so the key is ambiguous
                return None;
            }
        }

        winning_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flex_eq() {
        // Equal
        assert!(flex_eq("foo", "foo"));
        assert!(flex_eq("", ""));
        assert!(flex_eq("my_sql", "MySQL"));
        assert!(flex_eq("postgre-sql", "PostgreSQL"));
        assert!(flex_eq("FOO Bar!", "foo bar."));

        // Not equal
        assert!(!flex_eq("a", "b"));
        assert!(!flex_eq("a", "aa"));
        assert!(!flex_eq("sqlite", "sqlite3"));
        assert!(!flex_eq("four", "föúr")); // Unicode -> ASCII transliteration is not supported
    }

    #[test]
    fn test_flex_find() {
        let entries: &[(&str, i32)] = &[
            ("one", 1),
            ("one two", 12),
            ("Two three", 23),
            ("two_three", 230),
        ];

        assert_eq!(entries.flex_find("one"), Some(&1));
        assert_eq!(entries.flex_find("ONE"), Some(&1));
        assert_eq!(entries.flex_find("one_two"), Some(&12));
        assert_eq!(entries.flex_find("oneTwo"), Some(&12));

        // Exact matches win over ambiguous loose ones
        assert_eq!(entries.flex_find("two_three"), Some(&230));
        assert_eq!(entries.flex_find("twoThree"), None);

        assert_eq!(entries.flex_find("nope"), None);
    }
}
