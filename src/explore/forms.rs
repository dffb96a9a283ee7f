//! Pre-submit form validation.
//!
//! Each function returns the full list of error messages so the caller can
//! render them all at once; an empty list means the form may be submitted.

/// Minimal sanity check: something@something.tld, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

pub fn validate_login_form(email: &str, password: &str) -> Vec<String> {
    let mut errors = Vec::new();
    let email = email.trim();
    if email.is_empty() {
        errors.push("Email is required.".to_string());
    } else if !is_valid_email(email) {
        errors.push("Enter a valid email address.".to_string());
    }

    let password = password.trim();
    if password.is_empty() {
        errors.push("Password is required.".to_string());
    } else if password.len() < 6 {
        errors.push("Password must be at least 6 characters.".to_string());
    }
    errors
}

#[allow(clippy::too_many_arguments)]
pub fn validate_registration_form(
    name: &str,
    email: &str,
    bio: &str,
    username: &str,
    password: &str,
    contact_number: &str,
    location: &str,
) -> Vec<String> {
    let mut errors = Vec::new();
    if name.trim().len() < 3 {
        errors.push("Full name should be at least 3 characters.".to_string());
    }
    if !is_valid_email(email) {
        errors.push("Enter a valid email address.".to_string());
    }
    if bio.trim().len() < 10 {
        errors.push("Bio should describe you in at least 10 characters.".to_string());
    }
    if username.trim().len() < 3 {
        errors.push("Username must be at least 3 characters.".to_string());
    }
    if password.trim().len() < 6 {
        errors.push("Password must be at least 6 characters.".to_string());
    }
    // Only the digits count; separators and a leading + are tolerated.
    let digits = contact_number.chars().filter(char::is_ascii_digit).count();
    if digits < 10 {
        errors.push("Enter a valid contact number (10 digits).".to_string());
    }
    if location.trim().is_empty() {
        errors.push("Location cannot be empty.".to_string());
    }
    errors
}

/// One half of the add-skills form (the teach block or the learn block).
pub fn validate_skill_form(skill_name: &str, description: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if skill_name.trim().len() < 2 {
        errors.push("Skill name must be at least 2 characters.".to_string());
    }
    if description.trim().len() < 10 {
        errors.push("Description must be at least 10 characters.".to_string());
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@missing-local.com"));
        assert!(!is_valid_email("spaces in@mail.com"));
        assert!(!is_valid_email("no-tld@domain"));
    }

    #[test]
    fn login_form_collects_all_errors() {
        assert!(validate_login_form("a@b.co", "secret1").is_empty());
        let errors = validate_login_form("", "abc");
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("Email"));
        assert!(errors[1].contains("6 characters"));
    }

    #[test]
    fn registration_form_rules() {
        assert!(validate_registration_form(
            "Ann",
            "ann@b.co",
            "Carpenter and weekend potter.",
            "ann42",
            "secret1",
            "+1 (555) 123-4567",
            "Lisbon",
        )
        .is_empty());

        let errors =
            validate_registration_form("Al", "bad", "hi", "ab", "123", "555-123", "  ");
        assert_eq!(errors.len(), 7);
        assert!(errors[0].contains("3 characters"));
        assert!(errors[2].contains("Bio"));
        assert!(errors[5].contains("10 digits"));
        assert!(errors[6].contains("Location"));
    }

    #[test]
    fn contact_number_counts_digits_only() {
        let base = |phone: &str| {
            validate_registration_form(
                "Ann",
                "ann@b.co",
                "Carpenter and weekend potter.",
                "ann42",
                "secret1",
                phone,
                "Lisbon",
            )
        };
        assert!(base("5551234567").is_empty());
        assert!(base("555.123.4567").is_empty());
        assert_eq!(base("555-1234").len(), 1);
    }

    #[test]
    fn skill_form_rules() {
        assert!(validate_skill_form("Rust", "Systems programming").is_empty());
        assert_eq!(validate_skill_form("R", "too short").len(), 2);
    }
}
