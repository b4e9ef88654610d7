use crate::utils::error::{FormatterError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub const CAMPAIGN_ID_LEN: usize = 4;

/// Campaign IDs are exactly four ASCII digits. The messages are shown to the
/// user unchanged.
pub fn validate_campaign_id(campaign_id: &str) -> Result<()> {
    if campaign_id.trim().is_empty() {
        return Err(FormatterError::validation(
            "Please enter a 4-digit campaign ID before generating.",
        ));
    }

    if campaign_id.len() != CAMPAIGN_ID_LEN || !campaign_id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatterError::validation(
            "Campaign ID must be exactly 4 digits.",
        ));
    }

    Ok(())
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(FormatterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(FormatterError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(FormatterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(FormatterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(FormatterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Output file names must not escape the output directory.
pub fn validate_file_name(field_name: &str, name: &str) -> Result<()> {
    validate_path(field_name, name)?;

    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return Err(FormatterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "File name cannot contain path separators".to_string(),
        });
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(FormatterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_campaign_id() {
        assert!(validate_campaign_id("1234").is_ok());
        assert!(validate_campaign_id("0007").is_ok());
        assert!(validate_campaign_id("123").is_err());
        assert!(validate_campaign_id("12345").is_err());
        assert!(validate_campaign_id("12a4").is_err());
        assert!(validate_campaign_id(" 123").is_err());
        // Non-ASCII digits are rejected even though they are numeric.
        assert!(validate_campaign_id("١٢٣٤").is_err());
    }

    #[test]
    fn test_campaign_id_messages() {
        let empty = validate_campaign_id("   ").unwrap_err();
        assert_eq!(
            empty.user_friendly_message(),
            "Please enter a 4-digit campaign ID before generating."
        );

        let malformed = validate_campaign_id("abcd").unwrap_err();
        assert_eq!(
            malformed.user_friendly_message(),
            "Campaign ID must be exactly 4 digits."
        );
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("webhook_url", "https://example.com/webhook").is_ok());
        assert!(validate_url("webhook_url", "http://127.0.0.1:8080").is_ok());
        assert!(validate_url("webhook_url", "").is_err());
        assert!(validate_url("webhook_url", "invalid-url").is_err());
        assert!(validate_url("webhook_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_file_name() {
        assert!(validate_file_name("output_filename", "services_output.md").is_ok());
        assert!(validate_file_name("output_filename", "").is_err());
        assert!(validate_file_name("output_filename", "../escape.md").is_err());
        assert!(validate_file_name("output_filename", "..").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("timeout_secs", 15u64, 1, 300).is_ok());
        assert!(validate_range("timeout_secs", 0u64, 1, 300).is_err());
        assert!(validate_range("timeout_secs", 301u64, 1, 300).is_err());
    }
}
