//! FHIR R5 resources produced by the mapping
//!
//! With the `json` feature, resources serialize with their `resourceType`.

use super::datatypes::{CodeableConcept, CodeableReference, Coding, HumanName, Identifier, Reference};
use super::date_time::StudyStart;
use super::enums::{AdministrativeGender, ImagingStudyStatus};
use chrono::NaiveDate;

/// [Patient](https://hl7.org/fhir/R5/patient.html)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(
    feature = "json",
    serde(tag = "resourceType", rename = "Patient", rename_all = "camelCase")
)]
pub struct Patient {
    pub id: String,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Vec::is_empty"))]
    pub identifier: Vec<Identifier>,
    pub active: bool,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Vec::is_empty"))]
    pub name: Vec<HumanName>,
    pub gender: AdministrativeGender,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub birth_date: Option<NaiveDate>,
}

/// [ImagingStudy.series.instance](https://hl7.org/fhir/R5/imagingstudy-definitions.html#ImagingStudy.series.instance)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "camelCase"))]
pub struct ImagingStudyInstance {
    pub uid: String,
    pub sop_class: Coding,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub number: Option<u32>,
}

/// [ImagingStudy.series](https://hl7.org/fhir/R5/imagingstudy-definitions.html#ImagingStudy.series)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "camelCase"))]
pub struct ImagingStudySeries {
    pub uid: String,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub number: Option<u32>,
    pub modality: CodeableConcept,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub body_site: Option<CodeableReference>,
    pub number_of_instances: u32,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Vec::is_empty"))]
    pub instance: Vec<ImagingStudyInstance>,
}

/// [ImagingStudy](https://hl7.org/fhir/R5/imagingstudy.html)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(
    feature = "json",
    serde(tag = "resourceType", rename = "ImagingStudy", rename_all = "camelCase")
)]
pub struct ImagingStudy {
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub id: Option<String>,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Vec::is_empty"))]
    pub contained: Vec<Patient>,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Vec::is_empty"))]
    pub identifier: Vec<Identifier>,
    pub status: ImagingStudyStatus,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Vec::is_empty"))]
    pub modality: Vec<CodeableConcept>,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub subject: Option<Reference>,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub started: Option<StudyStart>,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub number_of_series: Option<u32>,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub number_of_instances: Option<u32>,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub procedure: Option<Vec<CodeableReference>>,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub reason: Option<Vec<CodeableReference>>,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Vec::is_empty"))]
    pub series: Vec<ImagingStudySeries>,
}

impl ImagingStudy {
    /// Recomputes numberOfSeries and numberOfInstances from the series list
    pub fn update_counts(&mut self) {
        let instances: usize = self.series.iter().map(|s| s.instance.len()).sum();
        self.number_of_series = Some(self.series.len() as u32);
        self.number_of_instances = Some(instances as u32);
    }
}
