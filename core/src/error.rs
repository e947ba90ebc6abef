use thiserror::Error;

/// Result type for dicom2fhir operations
pub type Result<T> = std::result::Result<T, Dicom2FhirError>;

/// Error types for dicom2fhir operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Dicom2FhirError {
    /// Required tag or sequence item field not found
    #[error("Tag not found: {0}")]
    TagNotFound(String),

    /// Invalid tag value
    #[error("Invalid tag value: {0}")]
    InvalidValue(String),

    /// DICOM DA value that is not a strict YYYYMMDD calendar date
    #[error("Invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    /// DICOM TM value that does not start with a valid HHMMSS time
    #[error("Invalid time '{value}': {reason}")]
    InvalidTime { value: String, reason: String },

    /// Generic mapping error
    #[error("Mapping error: {0}")]
    MappingError(String),
}

impl From<String> for Dicom2FhirError {
    fn from(s: String) -> Self {
        Dicom2FhirError::MappingError(s)
    }
}

impl From<&str> for Dicom2FhirError {
    fn from(s: &str) -> Self {
        Dicom2FhirError::MappingError(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_message() {
        let err = Dicom2FhirError::InvalidDate {
            value: "2023-1-1".to_string(),
            reason: "expected YYYYMMDD".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid date '2023-1-1': expected YYYYMMDD"
        );
    }

    #[test]
    fn test_from_str() {
        let err: Dicom2FhirError = "boom".into();
        assert_eq!(err, Dicom2FhirError::MappingError("boom".to_string()));
    }

    #[test]
    fn test_tag_not_found_message() {
        let err = Dicom2FhirError::TagNotFound("CodeValue (0008,0100)".to_string());
        assert_eq!(err.to_string(), "Tag not found: CodeValue (0008,0100)");
    }
}
