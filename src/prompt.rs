use dialoguer::{Confirm, Input};

use crate::error::WizardError;

// ── Retry-until-valid combinator ──────────────────────────────────────────────

/// Reads lines under `text` until `valid` accepts one.
///
/// Deliberately unbounded: the wizard is interactive-only and has no
/// non-interactive fallback, so an invalid answer is always re-asked.
pub fn line_until(
    text: &str,
    valid: impl Fn(&str) -> bool,
) -> Result<String, WizardError> {
    loop {
        let answer: String = Input::new()
            .with_prompt(text)
            .allow_empty(true)
            .interact_text()?;
        if valid(&answer) {
            return Ok(answer);
        }
    }
}

/// 1-indexed numbered-menu choice within `1..=len`.
/// With `len == 0` the range is empty and this never returns.
pub fn menu_choice(len: usize) -> Result<usize, WizardError> {
    let answer = line_until("choice", |s| is_menu_choice(s, len))?;
    Ok(answer.parse().unwrap_or(0))
}

/// Case-insensitive y/n question; re-asks until one of the two is given.
pub fn yes_no(text: &str) -> Result<bool, WizardError> {
    Ok(Confirm::new().with_prompt(text).interact()?)
}

// ── Validators ────────────────────────────────────────────────────────────────

pub fn is_int(s: &str) -> bool {
    s.parse::<i64>().is_ok()
}

pub fn is_positive_int(s: &str) -> bool {
    is_int(s) && s.parse::<i64>().map(|n| n > 0).unwrap_or(false)
}

/// Accepts exactly the canonical decimal forms of `1..=len`.
pub fn is_menu_choice(s: &str, len: usize) -> bool {
    match s.parse::<usize>() {
        Ok(n) => n >= 1 && n <= len && s == n.to_string(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_validator() {
        assert!(is_int("512"));
        assert!(is_int("-3"));
        assert!(!is_int(""));
        assert!(!is_int("12a"));
    }

    #[test]
    fn positive_int_rejects_zero() {
        assert!(is_positive_int("512"));
        assert!(is_positive_int("1"));
        assert!(!is_positive_int("0"));
        assert!(!is_positive_int("-1"));
        assert!(!is_positive_int("abc"));
    }

    #[test]
    fn menu_choice_bounds() {
        assert!(is_menu_choice("1", 5));
        assert!(is_menu_choice("5", 5));
        assert!(!is_menu_choice("0", 5));
        assert!(!is_menu_choice("6", 5));
        assert!(!is_menu_choice("", 5));
        assert!(!is_menu_choice("two", 5));
    }

    #[test]
    fn menu_choice_empty_menu_accepts_nothing() {
        for s in ["0", "1", "-1", ""] {
            assert!(!is_menu_choice(s, 0));
        }
    }

    #[test]
    fn menu_choice_requires_canonical_form() {
        // "01" and "+1" would desync the echoed choice from the menu label.
        assert!(!is_menu_choice("01", 5));
        assert!(!is_menu_choice("+1", 5));
    }
}
