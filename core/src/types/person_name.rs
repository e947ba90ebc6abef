use std::fmt;

/// Patient name split into the parts the FHIR HumanName carries
///
/// DICOM PN values look like `Family^Given^Middle^Prefix^Suffix`, optionally
/// followed by ideographic and phonetic groups separated by `=`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct PatientName {
    pub family: String,
    pub given: String,
}

impl PatientName {
    /// Creates a new PatientName
    pub fn new(family: impl Into<String>, given: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            given: given.into(),
        }
    }

    /// Parses a DICOM PN value
    ///
    /// Only the alphabetic group is used. Missing components become empty
    /// strings; nothing here can fail.
    pub fn parse(value: &str) -> Self {
        let alphabetic = value.split('=').next().unwrap_or_default();
        let mut components = alphabetic.split('^').map(str::trim);
        Self {
            family: components.next().unwrap_or_default().to_string(),
            given: components.next().unwrap_or_default().to_string(),
        }
    }

    /// Returns true if both parts are empty
    pub fn is_empty(&self) -> bool {
        self.family.is_empty() && self.given.is_empty()
    }
}

impl fmt::Display for PatientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}^{}", self.family, self.given)
    }
}
