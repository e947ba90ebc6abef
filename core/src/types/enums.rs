use std::fmt;

/// [AdministrativeGender](https://hl7.org/fhir/R5/valueset-administrative-gender.html)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum AdministrativeGender {
    Female,
    Male,
    Other,
    #[default]
    Unknown,
}

impl AdministrativeGender {
    /// Returns whether this gender is unknown
    pub fn is_unknown(&self) -> bool {
        matches!(self, AdministrativeGender::Unknown)
    }

    /// Returns the FHIR code
    pub fn simple_name(&self) -> &'static str {
        match self {
            AdministrativeGender::Female => "female",
            AdministrativeGender::Male => "male",
            AdministrativeGender::Other => "other",
            AdministrativeGender::Unknown => "unknown",
        }
    }

    /// Maps a DICOM PatientSex (CS) value
    ///
    /// Case-insensitive: "F" → Female, "M" → Male, "O" → Other.
    /// Absent, empty or any other value → Unknown.
    pub fn from_dicom_code(code: Option<&str>) -> Self {
        match code {
            Some(c) if c.eq_ignore_ascii_case("f") => AdministrativeGender::Female,
            Some(c) if c.eq_ignore_ascii_case("m") => AdministrativeGender::Male,
            Some(c) if c.eq_ignore_ascii_case("o") => AdministrativeGender::Other,
            _ => AdministrativeGender::Unknown,
        }
    }
}

impl fmt::Display for AdministrativeGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// [IdentifierUse](https://hl7.org/fhir/R5/valueset-identifier-use.html)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum IdentifierUse {
    Usual,
    Official,
    Temp,
    Secondary,
    Old,
}

impl IdentifierUse {
    /// Returns the FHIR code
    pub fn simple_name(&self) -> &'static str {
        match self {
            IdentifierUse::Usual => "usual",
            IdentifierUse::Official => "official",
            IdentifierUse::Temp => "temp",
            IdentifierUse::Secondary => "secondary",
            IdentifierUse::Old => "old",
        }
    }
}

impl fmt::Display for IdentifierUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// [ImagingStudyStatus](https://hl7.org/fhir/R5/valueset-imagingstudy-status.html)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "kebab-case"))]
pub enum ImagingStudyStatus {
    Registered,
    #[default]
    Available,
    Cancelled,
    EnteredInError,
    Unknown,
}

impl ImagingStudyStatus {
    /// Returns the FHIR code
    pub fn simple_name(&self) -> &'static str {
        match self {
            ImagingStudyStatus::Registered => "registered",
            ImagingStudyStatus::Available => "available",
            ImagingStudyStatus::Cancelled => "cancelled",
            ImagingStudyStatus::EnteredInError => "entered-in-error",
            ImagingStudyStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ImagingStudyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_from_dicom_code() {
        assert_eq!(
            AdministrativeGender::from_dicom_code(Some("F")),
            AdministrativeGender::Female
        );
        assert_eq!(
            AdministrativeGender::from_dicom_code(Some("m")),
            AdministrativeGender::Male
        );
        assert_eq!(
            AdministrativeGender::from_dicom_code(Some("O")),
            AdministrativeGender::Other
        );
        assert_eq!(
            AdministrativeGender::from_dicom_code(Some("FM")),
            AdministrativeGender::Unknown
        );
        assert!(AdministrativeGender::from_dicom_code(None).is_unknown());
    }

    #[test]
    fn test_display_codes() {
        assert_eq!(AdministrativeGender::Other.to_string(), "other");
        assert_eq!(IdentifierUse::Usual.to_string(), "usual");
        assert_eq!(
            ImagingStudyStatus::EnteredInError.to_string(),
            "entered-in-error"
        );
        assert_eq!(ImagingStudyStatus::default(), ImagingStudyStatus::Available);
    }
}
