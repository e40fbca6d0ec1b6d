//! Pages
//!
//! Top-level page components for each route.

pub mod home;
pub mod journal_detail;
pub mod journals;
pub mod login;
pub mod new_journal;
pub mod register;
pub mod resources;

pub use home::Home;
pub use journal_detail::JournalDetail;
pub use journals::Journals;
pub use login::Login;
pub use new_journal::NewJournal;
pub use register::Register;
pub use resources::Resources;

use regex::Regex;
use std::sync::OnceLock;

/// `local@domain` with no whitespace and exactly one `@`, as in the core crate
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+$";

fn email_regex() -> Result<&'static Regex, String> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    if let Some(re) = PATTERN.get() {
        return Ok(re);
    }
    let re = Regex::new(EMAIL_PATTERN).map_err(|e| format!("Invalid email pattern: {}", e))?;
    Ok(PATTERN.get_or_init(|| re))
}

/// Email check matching the browser's `type="email"` rule
pub fn looks_like_email(email: &str) -> Result<bool, String> {
    Ok(email_regex()?.is_match(email.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        assert!(looks_like_email("ada@example.com").unwrap());
        assert!(looks_like_email("  ada@example.com ").unwrap());
        assert!(!looks_like_email("ada").unwrap());
        assert!(!looks_like_email("@example.com").unwrap());
        assert!(!looks_like_email("ada@").unwrap());
        assert!(!looks_like_email("a b@example.com").unwrap());
        assert!(!looks_like_email("ada@ex@ample.com").unwrap());
    }
}
