//! Entropy estimation for candidate passwords.
//!
//! Implements a coarse charset-coverage heuristic: sum a fixed weight for
//! each character class present in the password, then score
//! `length * log2(charset_size)` bits. The estimate deliberately ignores
//! repetition and positional structure; the blacklist and tier rules layer
//! those concerns on top.

/// Weight contributed by lowercase letters.
const LOWERCASE_SPAN: u32 = 26;
/// Weight contributed by uppercase letters.
const UPPERCASE_SPAN: u32 = 26;
/// Weight contributed by ASCII digits.
const DIGIT_SPAN: u32 = 10;
/// Weight contributed by symbols, i.e. any non-alphanumeric character.
const SYMBOL_SPAN: u32 = 32;

/// Number of characters in a password (not bytes).
#[inline]
pub fn char_count(password: &str) -> usize {
    if password.is_ascii() {
        password.len()
    } else {
        password.chars().count()
    }
}

/// Effective character-set size for a password.
///
/// Each class counts at most once no matter how many of its characters
/// appear. A string of caseless alphanumerics (CJK text, for example)
/// matches no class and yields 0.
pub fn charset_size(password: &str) -> u32 {
    let mut size = 0;
    if password.chars().any(|c| c.is_lowercase()) {
        size += LOWERCASE_SPAN;
    }
    if password.chars().any(|c| c.is_uppercase()) {
        size += UPPERCASE_SPAN;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        size += DIGIT_SPAN;
    }
    if password.chars().any(|c| !c.is_alphanumeric()) {
        size += SYMBOL_SPAN;
    }
    size
}

/// Estimated password strength in bits.
///
/// Returns `length * log2(charset_size)`, or exactly `0.0` for an empty
/// password or one whose characters match no recognized class.
pub fn estimate_entropy(password: &str) -> f64 {
    if password.is_empty() {
        return 0.0;
    }
    let charset = charset_size(password);
    if charset == 0 {
        return 0.0;
    }
    char_count(password) as f64 * f64::from(charset).log2()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_empty() {
        assert_eq!(estimate_entropy(""), 0.0);
    }

    #[test]
    fn test_entropy_no_recognized_class() {
        // caseless alphanumerics contribute no class weight
        assert_eq!(charset_size("漢字"), 0);
        assert_eq!(estimate_entropy("漢字"), 0.0);
    }

    #[test]
    fn test_charset_counts_each_class_once() {
        assert_eq!(charset_size("aaaa"), 26);
        assert_eq!(charset_size("aA"), 52);
        assert_eq!(charset_size("a1"), 36);
        assert_eq!(charset_size("a!"), 58);
        assert_eq!(charset_size("aB3!"), 94);
    }

    #[test]
    fn test_entropy_lowercase_only() {
        let e = estimate_entropy("aaaaaa");
        assert_eq!(e, 6.0 * 26.0f64.log2());
        assert!((e - 28.20).abs() < 0.01);
    }

    #[test]
    fn test_entropy_all_classes() {
        let e = estimate_entropy("aB3!");
        assert_eq!(e, 4.0 * 94.0f64.log2());
        assert!((e - 26.22).abs() < 0.01);
    }

    #[test]
    fn test_entropy_grows_with_length() {
        // class composition held fixed, longer is never weaker
        let mut pw = String::from("aB3!");
        let mut prev = estimate_entropy(&pw);
        for _ in 0..16 {
            pw.push('x');
            let e = estimate_entropy(&pw);
            assert!(e > prev);
            prev = e;
        }
    }

    #[test]
    fn test_char_count_unicode() {
        assert_eq!(char_count("hello"), 5);
        // 6 bytes, 5 chars
        assert_eq!(char_count("hëllo"), 5);
    }
}
