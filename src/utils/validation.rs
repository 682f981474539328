use crate::domain::model::Coordinate;
use crate::utils::error::{QuoteError, Result};
use std::collections::HashSet;

pub const SUPPORTED_OUTPUT_FORMATS: [&str; 2] = ["json", "csv"];

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extensions(
    field_name: &str,
    files: &[String],
    allowed_extensions: &[&str],
) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    for file in files {
        match std::path::Path::new(file)
            .extension()
            .and_then(|ext| ext.to_str())
        {
            Some(extension) if allowed_set.contains(extension) => {}
            Some(extension) => {
                return Err(QuoteError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: file.clone(),
                    reason: format!(
                        "Unsupported file extension: {}. Allowed extensions: {}",
                        extension,
                        allowed_extensions.join(", ")
                    ),
                });
            }
            None => {
                return Err(QuoteError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: file.clone(),
                    reason: "File has no extension or invalid filename".to_string(),
                });
            }
        }
    }

    Ok(())
}

pub fn validate_output_formats(field_name: &str, formats: &[String]) -> Result<()> {
    if formats.is_empty() {
        return Err(QuoteError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    for format in formats {
        if !SUPPORTED_OUTPUT_FORMATS.contains(&format.as_str()) {
            return Err(QuoteError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format.clone(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    SUPPORTED_OUTPUT_FORMATS.join(", ")
                ),
            });
        }
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
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
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_coordinate(coordinate: &Coordinate) -> Result<()> {
    if coordinate.is_finite() {
        Ok(())
    } else {
        Err(QuoteError::NonFiniteCoordinate {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_output_formats() {
        let formats = vec!["json".to_string(), "csv".to_string()];
        assert!(validate_output_formats("output_formats", &formats).is_ok());

        let invalid = vec!["xlsx".to_string()];
        assert!(validate_output_formats("output_formats", &invalid).is_err());
        assert!(validate_output_formats("output_formats", &[]).is_err());
    }

    #[test]
    fn test_validate_file_extensions() {
        let files = vec!["request.json".to_string()];
        assert!(validate_file_extensions("input", &files, &["json"]).is_ok());

        let invalid_files = vec!["request.txt".to_string(), "noext".to_string()];
        assert!(validate_file_extensions("input", &invalid_files[..1], &["json"]).is_err());
        assert!(validate_file_extensions("input", &invalid_files[1..], &["json"]).is_err());
    }

    #[test]
    fn test_validate_coordinate() {
        assert!(validate_coordinate(&Coordinate::new(43.3, 5.37)).is_ok());
        assert!(validate_coordinate(&Coordinate::new(f64::NAN, 5.37)).is_err());
        assert!(validate_coordinate(&Coordinate::new(43.3, f64::INFINITY)).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("latitude", 45.0, -90.0, 90.0).is_ok());
        assert!(validate_range("latitude", 95.0, -90.0, 90.0).is_err());
    }
}
