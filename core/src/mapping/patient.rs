use crate::error::Result;
use crate::mapping::identifiers::build_patient_identifier;
use crate::types::{parse_dicom_date, AdministrativeGender, HumanName, Patient, PatientName};
use chrono::NaiveDate;
use log::debug;

/// Normalizes a DICOM PatientSex value to a FHIR administrative gender
///
/// Never fails: absent, empty and unrecognized codes all map to
/// [`AdministrativeGender::Unknown`].
pub fn normalize_sex(code: Option<&str>) -> AdministrativeGender {
    let gender = AdministrativeGender::from_dicom_code(code);
    if gender.is_unknown() {
        if let Some(c) = code.filter(|c| !c.is_empty()) {
            debug!("Unrecognized patient sex code '{}', using unknown", c);
        }
    }
    gender
}

/// Builds the inline Patient of a study
///
/// The birth date must be a strict `YYYYMMDD` DICOM date.
///
/// # Errors
///
/// Returns [`crate::Dicom2FhirError::InvalidDate`] if `dob` cannot be parsed.
pub fn build_patient_stub(
    reference_id: &str,
    patient_id: &str,
    issuer: Option<&str>,
    name: &PatientName,
    sex: Option<&str>,
    dob: &str,
) -> Result<Patient> {
    let birth_date = parse_dicom_date(dob)?;
    Ok(assemble_patient(
        reference_id,
        patient_id,
        issuer,
        name,
        sex,
        Some(birth_date),
    ))
}

/// Builds the Patient from already-parsed parts
pub(crate) fn assemble_patient(
    reference_id: &str,
    patient_id: &str,
    issuer: Option<&str>,
    name: &PatientName,
    sex: Option<&str>,
    birth_date: Option<NaiveDate>,
) -> Patient {
    Patient {
        id: reference_id.to_string(),
        identifier: vec![build_patient_identifier(patient_id, issuer)],
        active: true,
        name: vec![human_name(name)],
        gender: normalize_sex(sex),
        birth_date,
    }
}

fn human_name(name: &PatientName) -> HumanName {
    HumanName {
        family: Some(name.family.clone()).filter(|f| !f.is_empty()),
        given: if name.given.is_empty() {
            Vec::new()
        } else {
            vec![name.given.clone()]
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Dicom2FhirError;
    use rstest::rstest;

    #[rstest]
    #[case(Some("f"), AdministrativeGender::Female)]
    #[case(Some("F"), AdministrativeGender::Female)]
    #[case(Some("m"), AdministrativeGender::Male)]
    #[case(Some("M"), AdministrativeGender::Male)]
    #[case(Some("o"), AdministrativeGender::Other)]
    #[case(Some("O"), AdministrativeGender::Other)]
    #[case(None, AdministrativeGender::Unknown)]
    #[case(Some(""), AdministrativeGender::Unknown)]
    #[case(Some("x"), AdministrativeGender::Unknown)]
    #[case(Some("female"), AdministrativeGender::Unknown)]
    fn test_normalize_sex(#[case] code: Option<&str>, #[case] expected: AdministrativeGender) {
        assert_eq!(normalize_sex(code), expected);
    }

    #[test]
    fn test_build_patient_stub() {
        let name = PatientName::new("Doe", "Jane");
        let patient =
            build_patient_stub("patient", "MRN42", Some("HOSP"), &name, Some("F"), "19800229")
                .unwrap();

        assert_eq!(patient.id, "patient");
        assert!(patient.active);
        assert_eq!(patient.gender, AdministrativeGender::Female);
        assert_eq!(patient.birth_date, NaiveDate::from_ymd_opt(1980, 2, 29));
        assert_eq!(patient.name.len(), 1);
        assert_eq!(patient.name[0].family.as_deref(), Some("Doe"));
        assert_eq!(patient.name[0].given, vec!["Jane".to_string()]);
        assert_eq!(patient.identifier.len(), 1);
        assert_eq!(patient.identifier[0].value.as_deref(), Some("MRN42"));
        assert_eq!(
            patient.identifier[0]
                .assigner
                .as_ref()
                .and_then(|a| a.display.as_deref()),
            Some("HOSP")
        );
    }

    #[test]
    fn test_build_patient_stub_omits_empty_given() {
        let name = PatientName::parse("Doe");
        let patient = build_patient_stub("p", "1", None, &name, None, "20000101").unwrap();
        assert!(patient.name[0].given.is_empty());
        assert_eq!(patient.gender, AdministrativeGender::Unknown);
    }

    #[rstest]
    #[case("")]
    #[case("1980-02-29")]
    #[case("19810229")]
    fn test_build_patient_stub_invalid_dob(#[case] dob: &str) {
        let name = PatientName::new("Doe", "Jane");
        let result = build_patient_stub("p", "1", None, &name, Some("F"), dob);
        assert!(matches!(result, Err(Dicom2FhirError::InvalidDate { .. })));
    }
}
