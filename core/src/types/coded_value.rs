/// A coded concept read from a DICOM code sequence item
///
/// Holds the CodeValue, CodingSchemeDesignator and CodeMeaning of one item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct CodedValue {
    pub code: String,
    pub system: String,
    pub display: String,
}

impl CodedValue {
    /// Creates a new CodedValue
    pub fn new(
        code: impl Into<String>,
        system: impl Into<String>,
        display: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            system: system.into(),
            display: display.into(),
        }
    }
}
