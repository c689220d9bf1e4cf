use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").ok());

const NAME_MAX_LEN: usize = 100;
const PASSWORD_MIN_LEN: usize = 8;

const WEAK_PASSWORDS: [&str; 8] = [
    "password",
    "12345678",
    "123456789",
    "qwerty123",
    "admin123",
    "password1",
    "abcd1234",
    "letmein1",
];

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    let matched = EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email));
    if !matched {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 姓名：去除空白后非空，长度不超过 100
pub fn validate_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Name must not be empty");
    }
    if trimmed.chars().count() > NAME_MAX_LEN {
        return Err("Name must be at most 100 characters");
    }
    Ok(())
}

/// 密码策略：至少 8 位，含大小写字母和数字，且不在常见弱密码表中
pub fn password_policy_errors(password: &str) -> Vec<&'static str> {
    let mut errors = Vec::new();

    if password.chars().count() < PASSWORD_MIN_LEN {
        errors.push("Password must be at least 8 characters long");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit");
    }
    if WEAK_PASSWORDS
        .iter()
        .any(|weak| password.eq_ignore_ascii_case(weak))
    {
        errors.push("Password is too common, please choose a stronger password");
    }

    errors
}

pub fn validate_password(password: &str) -> Result<(), String> {
    let errors = password_policy_errors(password);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(validate_email("head@school.edu").is_ok());
        assert!(validate_email("no-at-sign.edu").is_err());
        assert!(validate_email("x@y").is_err());
    }

    #[test]
    fn test_name() {
        assert!(validate_name("  Ada ").is_ok());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"n".repeat(101)).is_err());
    }

    #[test]
    fn test_strong_password_passes() {
        assert!(validate_password("Blackboard42").is_ok());
    }

    #[test]
    fn test_each_rule_reports() {
        assert!(password_policy_errors("Ab1").contains(&"Password must be at least 8 characters long"));
        assert!(
            password_policy_errors("lowercase1")
                .contains(&"Password must contain at least one uppercase letter")
        );
        assert!(
            password_policy_errors("UPPERCASE1")
                .contains(&"Password must contain at least one lowercase letter")
        );
        assert!(
            password_policy_errors("NoDigitsHere")
                .contains(&"Password must contain at least one digit")
        );
    }

    #[test]
    fn test_weak_password_is_case_insensitive() {
        let err = validate_password("ABCD1234").unwrap_err();
        assert!(err.contains("too common"));
        assert!(validate_password("Abcd1234").unwrap_err().contains("too common"));
    }
}
