use crate::utils::error::{GenError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(GenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(GenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(GenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
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
        return Err(GenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// ASP predicate tokens: lowercase first letter, then letters/digits/underscore.
pub fn validate_predicate_name(field_name: &str, name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };

    if !valid {
        return Err(GenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Predicate names must start with a lowercase letter and contain only \
                     letters, digits and underscores"
                .to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("count", 5, 1).is_ok());
        assert!(validate_positive_number("count", 0, 1).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "./instances").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_predicate_name() {
        assert!(validate_predicate_name("predicate", "sel").is_ok());
        assert!(validate_predicate_name("predicate", "tag_req2").is_ok());
        assert!(validate_predicate_name("predicate", "Sel").is_err());
        assert!(validate_predicate_name("predicate", "2sel").is_err());
        assert!(validate_predicate_name("predicate", "").is_err());
        assert!(validate_predicate_name("predicate", "se l").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("max_tag", 3, 1, 10).is_ok());
        assert!(validate_range("max_tag", 0, 1, 10).is_err());
        assert!(validate_range("max_tag", 11, 1, 10).is_err());
    }
}
