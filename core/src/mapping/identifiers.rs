use crate::terminology::{
    DICOM_UID_SYSTEM, IDENTIFIER_TYPE_ACCESSION, IDENTIFIER_TYPE_MRN, IDENTIFIER_TYPE_SYSTEM,
    OID_URN_PREFIX,
};
use crate::types::{CodeableConcept, Coding, Identifier, IdentifierUse, Reference};

/// Builds the identifier for a DICOM AccessionNumber
///
/// The identifier is typed `ACSN` from HL7 v2 table 0203. The value is taken
/// as-is.
pub fn build_accession_identifier(id: &str) -> Identifier {
    Identifier {
        use_: Some(IdentifierUse::Usual),
        type_: Some(identifier_type(IDENTIFIER_TYPE_ACCESSION)),
        value: Some(id.to_string()),
        ..Default::default()
    }
}

/// Builds the identifier for a DICOM StudyInstanceUID
///
/// The UID is not validated.
pub fn build_study_instance_uid_identifier(id: &str) -> Identifier {
    Identifier {
        system: Some(DICOM_UID_SYSTEM.to_string()),
        value: Some(format!("{}{}", OID_URN_PREFIX, id)),
        ..Default::default()
    }
}

/// Builds the medical record number identifier of a patient
///
/// When `issuer` (IssuerOfPatientID) is present it becomes a display-only
/// assigner reference.
pub fn build_patient_identifier(patient_id: &str, issuer: Option<&str>) -> Identifier {
    Identifier {
        use_: Some(IdentifierUse::Usual),
        type_: Some(identifier_type(IDENTIFIER_TYPE_MRN)),
        value: Some(patient_id.to_string()),
        assigner: issuer.map(Reference::display_only),
        ..Default::default()
    }
}

fn identifier_type(code: &str) -> CodeableConcept {
    CodeableConcept::from_coding(Coding::new(IDENTIFIER_TYPE_SYSTEM, code))
}
