use crate::utils::error::{ReadmeError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: impl Into<String>) -> ReadmeError {
    ReadmeError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(invalid(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(invalid(
            field_name,
            url_str,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_email(field_name: &str, email: &str) -> Result<()> {
    let Some((local, domain)) = email.split_once('@') else {
        return Err(invalid(field_name, email, "Email must contain '@'"));
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid(field_name, email, "Email must look like name@domain"));
    }

    if email.chars().any(char::is_whitespace) {
        return Err(invalid(field_name, email, "Email cannot contain whitespace"));
    }

    Ok(())
}

/// GitHub logins: 1-39 ASCII alphanumerics or hyphens, no leading, trailing
/// or doubled hyphen.
pub fn validate_github_username(field_name: &str, username: &str) -> Result<()> {
    if username.is_empty() || username.len() > 39 {
        return Err(invalid(
            field_name,
            username,
            "Username must be between 1 and 39 characters",
        ));
    }

    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(invalid(
            field_name,
            username,
            "Username may only contain letters, digits and hyphens",
        ));
    }

    if username.starts_with('-') || username.ends_with('-') || username.contains("--") {
        return Err(invalid(
            field_name,
            username,
            "Hyphens must sit between other characters",
        ));
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("social_links.blog", "https://dev.to/octo").is_ok());
        assert!(validate_url("social_links.blog", "http://example.com").is_ok());
        assert!(validate_url("social_links.blog", "").is_err());
        assert!(validate_url("social_links.blog", "dev.to/octo").is_err());
        assert!(validate_url("social_links.blog", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("social_links.email", "octo@example.com").is_ok());
        assert!(validate_email("social_links.email", "octo.example.com").is_err());
        assert!(validate_email("social_links.email", "@example.com").is_err());
        assert!(validate_email("social_links.email", "oc to@example.com").is_err());
        assert!(validate_email("social_links.email", "a@b@c").is_err());
    }

    #[test]
    fn test_validate_github_username() {
        assert!(validate_github_username("basic_info.github_username", "octo-cat42").is_ok());
        assert!(validate_github_username("basic_info.github_username", "").is_err());
        assert!(validate_github_username("basic_info.github_username", "-octo").is_err());
        assert!(validate_github_username("basic_info.github_username", "octo--cat").is_err());
        assert!(validate_github_username("basic_info.github_username", "octo cat").is_err());
        assert!(validate_github_username("basic_info.github_username", &"a".repeat(40)).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("basic_info.name", "Ada").is_ok());
        assert!(validate_non_empty_string("basic_info.name", "   ").is_err());
    }
}
