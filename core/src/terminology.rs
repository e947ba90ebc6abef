//! Coding systems and fixed codes used by the mapping

/// HL7 v2 table 0203 (identifier type)
pub const IDENTIFIER_TYPE_SYSTEM: &str = "http://terminology.hl7.org/CodeSystem/v2-0203";

/// Identifier type code for accession numbers
pub const IDENTIFIER_TYPE_ACCESSION: &str = "ACSN";

/// Identifier type code for medical record numbers
pub const IDENTIFIER_TYPE_MRN: &str = "MR";

/// DICOM controlled terminology (acquisition modalities)
pub const ACQUISITION_MODALITY_SYSTEM: &str = "http://dicom.nema.org/resources/ontology/DCM";

/// URI system used for SOP class codings
pub const SOP_CLASS_SYSTEM: &str = "urn:ietf:rfc:3986";

/// Identifier system for DICOM UIDs
pub const DICOM_UID_SYSTEM: &str = "urn:dicom:uid";

/// Prefix that turns a DICOM UID into an OID URI
pub const OID_URN_PREFIX: &str = "urn:oid:";
