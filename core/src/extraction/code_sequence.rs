use crate::error::{Dicom2FhirError, Result};
use crate::types::CodedValue;
use dicom_core::Tag;
use dicom_object::InMemDicomObject;

use super::tags::{get_string_value, tag_name, CODE_MEANING, CODE_VALUE, CODING_SCHEME_DESIGNATOR};

/// Extracts coded values from the items of a DICOM code sequence
///
/// Each item must carry CodeValue, CodingSchemeDesignator and CodeMeaning.
///
/// # Errors
///
/// Returns [`Dicom2FhirError::TagNotFound`] naming the first missing field.
pub fn extract_coded_concepts(items: &[InMemDicomObject]) -> Result<Vec<CodedValue>> {
    items
        .iter()
        .map(|item| {
            Ok(CodedValue {
                code: required_field(item, CODE_VALUE)?,
                system: required_field(item, CODING_SCHEME_DESIGNATOR)?,
                display: required_field(item, CODE_MEANING)?,
            })
        })
        .collect()
}

/// Extracts the coded values of the code sequence stored under `tag`
///
/// Returns `Ok(None)` when the dataset has no such sequence.
pub fn extract_code_sequence(dcm: &InMemDicomObject, tag: Tag) -> Result<Option<Vec<CodedValue>>> {
    let Ok(elem) = dcm.element(tag) else {
        return Ok(None);
    };
    let items = elem.items().ok_or_else(|| {
        Dicom2FhirError::InvalidValue(format!("{} is not a sequence", tag_name(tag)))
    })?;
    extract_coded_concepts(items).map(Some)
}

fn required_field(item: &InMemDicomObject, tag: Tag) -> Result<String> {
    get_string_value(item, tag).ok_or_else(|| Dicom2FhirError::TagNotFound(tag_name(tag)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::tags::PROCEDURE_CODE_SEQUENCE;
    use dicom_core::value::DataSetSequence;
    use dicom_core::{DataElement, PrimitiveValue, VR};

    fn code_item(code: &str, scheme: &str, meaning: &str) -> InMemDicomObject {
        InMemDicomObject::from_element_iter([
            DataElement::new(CODE_VALUE, VR::SH, PrimitiveValue::from(code)),
            DataElement::new(CODING_SCHEME_DESIGNATOR, VR::SH, PrimitiveValue::from(scheme)),
            DataElement::new(CODE_MEANING, VR::LO, PrimitiveValue::from(meaning)),
        ])
    }

    #[test]
    fn test_extract_coded_concepts() {
        let items = vec![
            code_item("RPID16", "RADLEX", "CT Chest"),
            code_item("24627-2", "LN", "Chest CT"),
        ];
        let concepts = extract_coded_concepts(&items).unwrap();
        assert_eq!(
            concepts,
            vec![
                CodedValue::new("RPID16", "RADLEX", "CT Chest"),
                CodedValue::new("24627-2", "LN", "Chest CT"),
            ]
        );
    }

    #[test]
    fn test_extract_coded_concepts_empty() {
        assert!(extract_coded_concepts(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_missing_field_is_named() {
        let item = InMemDicomObject::from_element_iter([
            DataElement::new(CODE_VALUE, VR::SH, PrimitiveValue::from("T-D3000")),
            DataElement::new(CODE_MEANING, VR::LO, PrimitiveValue::from("Chest")),
        ]);
        let err = extract_coded_concepts(&[item]).unwrap_err();
        assert_eq!(
            err,
            Dicom2FhirError::TagNotFound("CodingSchemeDesignator (0008,0102)".to_string())
        );
    }

    #[test]
    fn test_extract_code_sequence() {
        let mut dcm = InMemDicomObject::new_empty();
        assert_eq!(
            extract_code_sequence(&dcm, PROCEDURE_CODE_SEQUENCE).unwrap(),
            None
        );

        dcm.put(DataElement::new(
            PROCEDURE_CODE_SEQUENCE,
            VR::SQ,
            DataSetSequence::from(vec![code_item("RPID16", "RADLEX", "CT Chest")]),
        ));
        let concepts = extract_code_sequence(&dcm, PROCEDURE_CODE_SEQUENCE)
            .unwrap()
            .unwrap();
        assert_eq!(concepts.len(), 1);
        assert_eq!(concepts[0].display, "CT Chest");
    }

    #[test]
    fn test_extract_code_sequence_not_a_sequence() {
        let dcm = InMemDicomObject::from_element_iter([DataElement::new(
            PROCEDURE_CODE_SEQUENCE,
            VR::LO,
            PrimitiveValue::from("oops"),
        )]);
        assert!(matches!(
            extract_code_sequence(&dcm, PROCEDURE_CODE_SEQUENCE),
            Err(Dicom2FhirError::InvalidValue(_))
        ));
    }
}
