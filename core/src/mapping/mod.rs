//! Field mapping from DICOM-derived values to FHIR fragments
//!
//! Every function here is independent and stateless apart from
//! [`merge_modality`], which grows a caller-owned study.

pub mod codes;
pub mod identifiers;
pub mod modality;
pub mod patient;
pub mod study_start;

pub use codes::{
    build_freetext_coding, build_instance_sop_class, build_procedure_list, build_reason_list,
};
pub use identifiers::{
    build_accession_identifier, build_patient_identifier, build_study_instance_uid_identifier,
};
pub use modality::{build_modality_concept, merge_modality};
pub use patient::{build_patient_stub, normalize_sex};
pub use study_start::build_study_start;
