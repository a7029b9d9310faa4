//! Password strength rules

/// Validate password strength.
///
/// The password must be at least `min_length` characters and contain a
/// lowercase letter, an uppercase letter, and a digit.
///
/// # Returns
///
/// * `Ok(())` - every rule satisfied
/// * `Err(reasons)` - one human-readable reason per violated rule
pub fn validate_password_strength(password: &str, min_length: usize) -> Result<(), Vec<String>> {
    let mut reasons = Vec::new();

    if password.chars().count() < min_length {
        reasons.push(format!("shorter than {} characters", min_length));
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        reasons.push("no lowercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        reasons.push("no uppercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        reasons.push("no digit".to_string());
    }

    if reasons.is_empty() {
        Ok(())
    } else {
        Err(reasons)
    }
}
