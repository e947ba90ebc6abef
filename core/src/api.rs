use crate::error::{Dicom2FhirError, Result};
use crate::extraction::tags::{
    get_non_empty_string_value, get_string_value, get_u32_value, tag_name, ACCESSION_NUMBER,
    BODY_PART_EXAMINED, INSTANCE_NUMBER, ISSUER_OF_PATIENT_ID, MODALITY, PATIENT_BIRTH_DATE,
    PATIENT_ID, PATIENT_NAME, PATIENT_SEX, PROCEDURE_CODE_SEQUENCE,
    REASON_FOR_REQUESTED_PROCEDURE_CODE_SEQUENCE, REASON_FOR_THE_REQUESTED_PROCEDURE,
    SERIES_DESCRIPTION, SERIES_INSTANCE_UID, SERIES_NUMBER, SOP_CLASS_UID, SOP_INSTANCE_UID,
    STUDY_DATE, STUDY_DESCRIPTION, STUDY_INSTANCE_UID, STUDY_TIME, TIMEZONE_OFFSET_FROM_UTC,
};
use crate::extraction::extract_code_sequence;
use crate::mapping::patient::assemble_patient;
use crate::mapping::{
    build_accession_identifier, build_freetext_coding, build_instance_sop_class,
    build_modality_concept, build_patient_stub, build_procedure_list, build_reason_list,
    build_study_instance_uid_identifier, build_study_start, merge_modality,
};
use crate::terminology::{DICOM_UID_SYSTEM, OID_URN_PREFIX};
use crate::types::{
    parse_timezone_offset, CodeableConcept, CodeableReference, ImagingStudy, ImagingStudyInstance,
    ImagingStudySeries, ImagingStudyStatus, MappingOptions, Patient, PatientName, Reference,
    StudyStart,
};
use dicom_core::Tag;
use dicom_object::InMemDicomObject;
use log::debug;

/// Maps DICOM datasets to a FHIR ImagingStudy
///
/// The first dataset of a study creates the ImagingStudy with an inline
/// Patient; further instances of the same study are merged with
/// [`StudyMapper::add_instance`].
///
/// # Example
///
/// ```
/// use dicom2fhir_core::StudyMapper;
/// use dicom_object::InMemDicomObject;
/// use dicom_core::{DataElement, PrimitiveValue, VR, Tag};
///
/// let dcm = InMemDicomObject::from_element_iter([
///     DataElement::new(Tag(0x0010, 0x0010), VR::PN, PrimitiveValue::from("Doe^Jane")),
///     DataElement::new(Tag(0x0010, 0x0020), VR::LO, PrimitiveValue::from("MRN42")),
///     DataElement::new(Tag(0x0010, 0x0030), VR::DA, PrimitiveValue::from("19800229")),
///     DataElement::new(Tag(0x0010, 0x0040), VR::CS, PrimitiveValue::from("F")),
///     DataElement::new(Tag(0x0020, 0x000D), VR::UI, PrimitiveValue::from("1.2.3")),
///     DataElement::new(Tag(0x0020, 0x000E), VR::UI, PrimitiveValue::from("1.2.3.1")),
///     DataElement::new(Tag(0x0008, 0x0018), VR::UI, PrimitiveValue::from("1.2.3.1.1")),
///     DataElement::new(Tag(0x0008, 0x0016), VR::UI, PrimitiveValue::from("1.2.840.10008.5.1.4.1.1.2")),
///     DataElement::new(Tag(0x0008, 0x0060), VR::CS, PrimitiveValue::from("CT")),
///     DataElement::new(Tag(0x0008, 0x0020), VR::DA, PrimitiveValue::from("20230101")),
/// ]);
///
/// let study = StudyMapper::map(&dcm).unwrap();
///
/// assert_eq!(study.contained[0].gender.to_string(), "female");
/// assert_eq!(study.started.unwrap().to_string(), "2023-01-01");
/// assert_eq!(study.number_of_instances, Some(1));
/// ```
pub struct StudyMapper;

impl StudyMapper {
    /// Maps a dataset with default options
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A required tag (StudyInstanceUID, PatientBirthDate, series and
    ///   instance UIDs, Modality) is missing
    /// - A date, time or timezone offset is malformed
    /// - A procedure or reason code item lacks one of its fields
    pub fn map(dcm: &InMemDicomObject) -> Result<ImagingStudy> {
        Self::map_with_options(dcm, &MappingOptions::default())
    }

    /// Maps a dataset with explicit options
    pub fn map_with_options(
        dcm: &InMemDicomObject,
        options: &MappingOptions,
    ) -> Result<ImagingStudy> {
        let study_uid = required_string(dcm, STUDY_INSTANCE_UID)?;

        let mut identifier = vec![build_study_instance_uid_identifier(&study_uid)];
        if let Some(accession) = get_non_empty_string_value(dcm, ACCESSION_NUMBER) {
            identifier.push(build_accession_identifier(&accession));
        }

        let procedures = extract_code_sequence(dcm, PROCEDURE_CODE_SEQUENCE)?;
        let reasons = extract_code_sequence(dcm, REASON_FOR_REQUESTED_PROCEDURE_CODE_SEQUENCE)?;
        let reason_text = get_non_empty_string_value(dcm, REASON_FOR_THE_REQUESTED_PROCEDURE);

        let mut study = ImagingStudy {
            contained: vec![Self::extract_patient(dcm, options)?],
            identifier,
            status: ImagingStudyStatus::Available,
            subject: Some(Reference::contained(&options.patient_reference_id)),
            started: Self::extract_started(dcm, options)?,
            procedure: build_procedure_list(procedures.as_deref()),
            reason: build_reason_list(reasons.as_deref(), reason_text.as_deref()),
            description: get_non_empty_string_value(dcm, STUDY_DESCRIPTION),
            ..Default::default()
        };

        Self::add_instance(&mut study, dcm)?;
        debug!("Mapped study {}", study_uid);
        Ok(study)
    }

    /// Merges one instance of the study into `study`
    ///
    /// Creates the series on first sight, adds the instance unless its
    /// SOPInstanceUID is already listed, merges the modality and refreshes the
    /// counters. Returns `true` if the instance was new.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset belongs to another study or lacks one
    /// of the series/instance tags.
    pub fn add_instance(study: &mut ImagingStudy, dcm: &InMemDicomObject) -> Result<bool> {
        let study_uid = required_string(dcm, STUDY_INSTANCE_UID)?;
        if let Some(expected) = Self::study_instance_uid(study) {
            if expected != study_uid {
                return Err(Dicom2FhirError::MappingError(format!(
                    "instance of study {} cannot be merged into study {}",
                    study_uid, expected
                )));
            }
        }

        let series_uid = required_string(dcm, SERIES_INSTANCE_UID)?;
        let sop_instance_uid = required_string(dcm, SOP_INSTANCE_UID)?;
        let sop_class_uid = required_string(dcm, SOP_CLASS_UID)?;
        let modality = build_modality_concept(&required_string(dcm, MODALITY)?);

        merge_modality(study, modality.clone());

        let index = match study.series.iter().position(|s| s.uid == series_uid) {
            Some(index) => index,
            None => {
                study.series.push(Self::new_series(dcm, series_uid, modality));
                study.series.len() - 1
            }
        };
        let series = &mut study.series[index];

        if series.instance.iter().any(|i| i.uid == sop_instance_uid) {
            debug!("Instance {} already present, skipping", sop_instance_uid);
            return Ok(false);
        }

        series.instance.push(ImagingStudyInstance {
            uid: sop_instance_uid,
            sop_class: build_instance_sop_class(&sop_class_uid),
            number: get_u32_value(dcm, INSTANCE_NUMBER),
        });
        series.number_of_instances = series.instance.len() as u32;
        study.update_counts();
        Ok(true)
    }

    /// Returns the StudyInstanceUID recorded in the study's identifiers
    pub fn study_instance_uid(study: &ImagingStudy) -> Option<&str> {
        study
            .identifier
            .iter()
            .filter(|i| i.system.as_deref() == Some(DICOM_UID_SYSTEM))
            .find_map(|i| i.value.as_deref())
            .map(|v| v.strip_prefix(OID_URN_PREFIX).unwrap_or(v))
    }

    fn new_series(
        dcm: &InMemDicomObject,
        uid: String,
        modality: CodeableConcept,
    ) -> ImagingStudySeries {
        ImagingStudySeries {
            uid,
            number: get_u32_value(dcm, SERIES_NUMBER),
            modality,
            description: get_non_empty_string_value(dcm, SERIES_DESCRIPTION),
            body_site: get_non_empty_string_value(dcm, BODY_PART_EXAMINED).map(|part| {
                CodeableReference::from_concept(CodeableConcept::from_coding(
                    build_freetext_coding(&part),
                ))
            }),
            number_of_instances: 0,
            instance: Vec::new(),
        }
    }

    /// Extracts the inline patient
    fn extract_patient(dcm: &InMemDicomObject, options: &MappingOptions) -> Result<Patient> {
        let patient_id = get_string_value(dcm, PATIENT_ID).unwrap_or_default();
        let issuer = get_non_empty_string_value(dcm, ISSUER_OF_PATIENT_ID);
        let name = get_string_value(dcm, PATIENT_NAME)
            .map(|n| PatientName::parse(&n))
            .unwrap_or_default();
        let sex = get_string_value(dcm, PATIENT_SEX);
        let reference_id = options.patient_reference_id.as_str();

        match get_non_empty_string_value(dcm, PATIENT_BIRTH_DATE) {
            Some(dob) => build_patient_stub(
                reference_id,
                &patient_id,
                issuer.as_deref(),
                &name,
                sex.as_deref(),
                &dob,
            ),
            None if options.require_birth_date => {
                Err(Dicom2FhirError::TagNotFound(tag_name(PATIENT_BIRTH_DATE)))
            }
            None => {
                debug!("No birth date for patient {}", patient_id);
                Ok(assemble_patient(
                    reference_id,
                    &patient_id,
                    issuer.as_deref(),
                    &name,
                    sex.as_deref(),
                    None,
                ))
            }
        }
    }

    /// Extracts the study start, attaching an offset only when one is known
    fn extract_started(
        dcm: &InMemDicomObject,
        options: &MappingOptions,
    ) -> Result<Option<StudyStart>> {
        let date = get_non_empty_string_value(dcm, STUDY_DATE);
        let time = get_non_empty_string_value(dcm, STUDY_TIME);
        let Some(started) = build_study_start(date.as_deref(), time.as_deref())? else {
            return Ok(None);
        };
        if !started.has_time() {
            return Ok(Some(started));
        }

        let dataset_offset = if options.use_dataset_timezone {
            get_non_empty_string_value(dcm, TIMEZONE_OFFSET_FROM_UTC)
        } else {
            None
        };

        match dataset_offset.or_else(|| options.default_timezone_offset.clone()) {
            Some(offset) => started.with_offset(parse_timezone_offset(&offset)?).map(Some),
            None => Ok(Some(started)),
        }
    }
}

fn required_string(dcm: &InMemDicomObject, tag: Tag) -> Result<String> {
    get_non_empty_string_value(dcm, tag).ok_or_else(|| Dicom2FhirError::TagNotFound(tag_name(tag)))
}
