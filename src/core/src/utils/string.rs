pub struct StringUtils;

impl StringUtils {
    /// Uppercases the first character, leaves the rest untouched.
    pub fn capitalize(value: &str) -> String {
        let mut chars = value.chars();

        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// First letter of up to two words; words are split on whitespace and '-'.
    pub fn initials(value: &str) -> String {
        value
            .split(|c: char| c.is_whitespace() || c == '-')
            .filter(|part| !part.is_empty())
            .take(2)
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
        needles.iter().any(|needle| haystack.contains(needle))
    }
}
