//! Core type definitions for the DICOM to FHIR mapping
//!
//! This module provides:
//! - FHIR R5 data types: [`Coding`], [`CodeableConcept`], [`CodeableReference`],
//!   [`Identifier`], [`Reference`], [`HumanName`]
//! - FHIR R5 resources: [`Patient`], [`ImagingStudy`] with its series and instances
//! - [`StudyStart`]: a FHIR `date` or `dateTime` built from DICOM DA/TM values
//! - DICOM-side values: [`CodedValue`] and [`PatientName`]
//! - [`MappingOptions`]: configuration for the dataset-level mapper

mod coded_value;
mod datatypes;
mod date_time;
mod enums;
mod options;
mod person_name;
mod resources;

pub use coded_value::CodedValue;
pub use datatypes::{CodeableConcept, CodeableReference, Coding, HumanName, Identifier, Reference};
pub use date_time::{parse_dicom_date, parse_dicom_time, parse_timezone_offset, StudyStart};
pub use enums::{AdministrativeGender, IdentifierUse, ImagingStudyStatus};
pub use options::MappingOptions;
pub use person_name::PatientName;
pub use resources::{ImagingStudy, ImagingStudyInstance, ImagingStudySeries, Patient};
