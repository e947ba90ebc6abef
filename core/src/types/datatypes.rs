//! FHIR R5 general-purpose data types
//!
//! Only the elements the DICOM mapping populates are modelled. Absent
//! elements are `None` or empty and are omitted from JSON output.

use super::enums::IdentifierUse;

/// [Coding](https://hl7.org/fhir/R5/datatypes.html#Coding)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "camelCase"))]
pub struct Coding {
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none", default))]
    pub system: Option<String>,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none", default))]
    pub code: Option<String>,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none", default))]
    pub display: Option<String>,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none", default))]
    pub user_selected: Option<bool>,
}

impl Coding {
    /// Creates a coding with a system and a code
    pub fn new(system: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            system: Some(system.into()),
            code: Some(code.into()),
            ..Default::default()
        }
    }

    /// Builder: Set the display text
    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }
}

/// [CodeableConcept](https://hl7.org/fhir/R5/datatypes.html#CodeableConcept)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct CodeableConcept {
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Vec::is_empty", default))]
    pub coding: Vec<Coding>,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none", default))]
    pub text: Option<String>,
}

impl CodeableConcept {
    /// Creates a concept holding exactly one coding
    pub fn from_coding(coding: Coding) -> Self {
        Self {
            coding: vec![coding],
            text: None,
        }
    }

    /// Creates a concept that carries only free text
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            coding: Vec::new(),
            text: Some(text.into()),
        }
    }

    /// Returns true if the concept carries no coding, only text
    pub fn is_text_only(&self) -> bool {
        self.coding.is_empty() && self.text.is_some()
    }
}

/// [Reference](https://hl7.org/fhir/R5/references.html#Reference)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct Reference {
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none", default))]
    pub reference: Option<String>,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none", default))]
    pub display: Option<String>,
}

impl Reference {
    /// Reference to a resource contained in the same resource (`#id`)
    pub fn contained(id: &str) -> Self {
        Self {
            reference: Some(format!("#{}", id)),
            display: None,
        }
    }

    /// Display-only reference, not resolvable to a resource
    pub fn display_only(display: impl Into<String>) -> Self {
        Self {
            reference: None,
            display: Some(display.into()),
        }
    }
}

/// [CodeableReference](https://hl7.org/fhir/R5/references.html#CodeableReference)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct CodeableReference {
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none", default))]
    pub concept: Option<CodeableConcept>,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none", default))]
    pub reference: Option<Reference>,
}

impl CodeableReference {
    /// Wraps a concept
    pub fn from_concept(concept: CodeableConcept) -> Self {
        Self {
            concept: Some(concept),
            reference: None,
        }
    }
}

/// [Identifier](https://hl7.org/fhir/R5/datatypes.html#Identifier)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct Identifier {
    #[cfg_attr(
        feature = "json",
        serde(rename = "use", skip_serializing_if = "Option::is_none", default)
    )]
    pub use_: Option<IdentifierUse>,
    #[cfg_attr(
        feature = "json",
        serde(rename = "type", skip_serializing_if = "Option::is_none", default)
    )]
    pub type_: Option<CodeableConcept>,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none", default))]
    pub system: Option<String>,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none", default))]
    pub value: Option<String>,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none", default))]
    pub assigner: Option<Reference>,
}

/// [HumanName](https://hl7.org/fhir/R5/datatypes.html#HumanName)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct HumanName {
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none", default))]
    pub family: Option<String>,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Vec::is_empty", default))]
    pub given: Vec<String>,
}
