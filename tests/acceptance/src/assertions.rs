//! Output assertions
//!
//! Checks over compiled CSS text. Each returns an [`AssertResult`] so the
//! harness can collect failures per scenario.

use alloc::format;
use alloc::string::String;

/// Assertion result
pub type AssertResult = Result<(), String>;

/// Assert that a condition is true
pub fn assert_true(condition: bool, message: &str) -> AssertResult {
    if condition {
        Ok(())
    } else {
        Err(String::from(message))
    }
}

/// Assert equality
pub fn assert_eq<T: PartialEq + core::fmt::Debug>(left: T, right: T) -> AssertResult {
    if left == right {
        Ok(())
    } else {
        Err(format!("Expected {:?} to equal {:?}", left, right))
    }
}

/// Assert CSS contains `needle`
pub fn assert_contains(css: &str, needle: &str) -> AssertResult {
    if css.contains(needle) {
        Ok(())
    } else {
        Err(format!("Expected '{}' to contain '{}'", css, needle))
    }
}

/// Assert CSS does not contain `needle`
pub fn assert_absent(css: &str, needle: &str) -> AssertResult {
    if css.contains(needle) {
        Err(format!("Expected '{}' not to contain '{}'", css, needle))
    } else {
        Ok(())
    }
}

/// Assert CSS contains none of `needles`
pub fn assert_absent_all(css: &str, needles: &[&str]) -> AssertResult {
    needles.iter().try_for_each(|needle| assert_absent(css, needle))
}

/// Assert `needle` occurs exactly `expected` times
pub fn assert_count(css: &str, needle: &str, expected: usize) -> AssertResult {
    let found = css.matches(needle).count();
    if found == expected {
        Ok(())
    } else {
        Err(format!(
            "Expected {} occurrence(s) of '{}', found {} in '{}'",
            expected, needle, found, css
        ))
    }
}

/// Assert every declaration in the CSS is free of vendor prefixes
/// from the suppressed families.
pub fn assert_no_legacy_prefixes(css: &str) -> AssertResult {
    assert_absent_all(
        css,
        &[
            "-webkit-animation",
            "-moz-animation",
            "@-webkit-keyframes",
            "::-webkit-input-placeholder",
            "::-moz-placeholder",
            ":-ms-input-placeholder",
            ":-moz-read-only",
            ":-moz-read-write",
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_and_absent() {
        assert!(assert_count("a:1;a:2;", "a:", 2).is_ok());
        assert!(assert_count("a:1;", "a:", 2).is_err());
        assert!(assert_absent_all(".a{}", &["-webkit-", "-moz-"]).is_ok());
        assert!(assert_no_legacy_prefixes("@-webkit-keyframes x{}").is_err());
    }
}
