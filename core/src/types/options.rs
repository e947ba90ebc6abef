/// Options controlling how a DICOM dataset is mapped to FHIR
///
/// # Example
///
/// ```
/// use dicom2fhir_core::MappingOptions;
///
/// let options = MappingOptions::default()
///     .with_patient_reference_id("pat-1")
///     .with_default_timezone_offset("+0100");
///
/// assert_eq!(options.patient_reference_id, "pat-1");
/// assert!(options.use_dataset_timezone);
/// assert_eq!(options.default_timezone_offset.as_deref(), Some("+0100"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(default))]
pub struct MappingOptions {
    /// Id of the contained Patient, also the target of ImagingStudy.subject
    pub patient_reference_id: String,

    /// Attach the dataset's TimezoneOffsetFromUTC to a study start with a time
    pub use_dataset_timezone: bool,

    /// Caller-confirmed `+HHMM`/`-HHMM` offset used when the dataset has none
    /// If None, a study start time without a dataset offset stays offset-free.
    pub default_timezone_offset: Option<String>,

    /// Fail when PatientBirthDate is missing
    /// A present but malformed birth date always fails.
    pub require_birth_date: bool,
}

impl Default for MappingOptions {
    fn default() -> Self {
        Self {
            patient_reference_id: "patient".to_string(),
            use_dataset_timezone: true,
            default_timezone_offset: None,
            require_birth_date: true,
        }
    }
}

impl MappingOptions {
    /// Creates options that tolerate a missing birth date
    ///
    /// # Example
    ///
    /// ```
    /// use dicom2fhir_core::MappingOptions;
    ///
    /// let lenient = MappingOptions::lenient();
    /// assert!(!lenient.require_birth_date);
    /// ```
    pub fn lenient() -> Self {
        Self {
            require_birth_date: false,
            ..Self::default()
        }
    }

    /// Builder: Set the contained patient id
    pub fn with_patient_reference_id(mut self, id: impl Into<String>) -> Self {
        self.patient_reference_id = id.into();
        self
    }

    /// Builder: Use or ignore the dataset's TimezoneOffsetFromUTC
    pub fn use_dataset_timezone(mut self, value: bool) -> Self {
        self.use_dataset_timezone = value;
        self
    }

    /// Builder: Set the fallback timezone offset
    pub fn with_default_timezone_offset(mut self, offset: impl Into<String>) -> Self {
        self.default_timezone_offset = Some(offset.into());
        self
    }

    /// Builder: Require PatientBirthDate
    pub fn require_birth_date(mut self, value: bool) -> Self {
        self.require_birth_date = value;
        self
    }
}
