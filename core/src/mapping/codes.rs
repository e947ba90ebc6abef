use crate::terminology::{OID_URN_PREFIX, SOP_CLASS_SYSTEM};
use crate::types::{CodeableConcept, CodeableReference, CodedValue, Coding};

/// Builds ImagingStudy.procedure from procedure code triples
///
/// Each triple becomes one coded reference whose concept text repeats the
/// display. Returns `None` both for absent input and for an empty list.
pub fn build_procedure_list(procedures: Option<&[CodedValue]>) -> Option<Vec<CodeableReference>> {
    let procedures: Vec<CodeableReference> = procedures?
        .iter()
        .map(|p| {
            let mut concept = CodeableConcept::from_coding(coding_from(p));
            concept.text = Some(p.display.clone());
            CodeableReference::from_concept(concept)
        })
        .collect();

    if procedures.is_empty() {
        None
    } else {
        Some(procedures)
    }
}

/// Builds ImagingStudy.reason
///
/// Structured reasons win: if any are present, `free_text` is ignored.
/// Without structured reasons the free text becomes a single text-only
/// concept. With neither, returns `None`.
pub fn build_reason_list(
    reasons: Option<&[CodedValue]>,
    free_text: Option<&str>,
) -> Option<Vec<CodeableReference>> {
    match reasons {
        Some(reasons) if !reasons.is_empty() => Some(
            reasons
                .iter()
                .map(|r| CodeableReference::from_concept(CodeableConcept::from_coding(coding_from(r))))
                .collect(),
        ),
        _ => free_text.map(|text| {
            vec![CodeableReference::from_concept(CodeableConcept::from_text(
                text,
            ))]
        }),
    }
}

/// Builds the SOP class coding of an instance
pub fn build_instance_sop_class(sop_class_uid: &str) -> Coding {
    Coding::new(
        SOP_CLASS_SYSTEM,
        format!("{}{}", OID_URN_PREFIX, sop_class_uid),
    )
}

/// Builds a coding for a value that has no code system
pub fn build_freetext_coding(text: &str) -> Coding {
    Coding {
        code: Some(text.to_string()),
        user_selected: Some(true),
        ..Default::default()
    }
}

fn coding_from(value: &CodedValue) -> Coding {
    Coding::new(&value.system, &value.code).with_display(&value.display)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple() -> CodedValue {
        CodedValue::new("C", "S", "D")
    }

    #[test]
    fn test_procedure_list_none() {
        assert!(build_procedure_list(None).is_none());
        assert!(build_procedure_list(Some(&[])).is_none());
    }

    #[test]
    fn test_procedure_list_single() {
        let procedures = build_procedure_list(Some(&[triple()])).unwrap();
        assert_eq!(procedures.len(), 1);

        let concept = procedures[0].concept.as_ref().unwrap();
        assert_eq!(concept.text.as_deref(), Some("D"));
        assert_eq!(
            concept.coding,
            vec![Coding::new("S", "C").with_display("D")]
        );
        assert!(procedures[0].reference.is_none());
    }

    #[test]
    fn test_reason_list_none() {
        assert!(build_reason_list(None, None).is_none());
        assert!(build_reason_list(Some(&[]), None).is_none());
    }

    #[test]
    fn test_reason_list_free_text() {
        let reasons = build_reason_list(None, Some("chest pain")).unwrap();
        assert_eq!(reasons.len(), 1);
        let concept = reasons[0].concept.as_ref().unwrap();
        assert!(concept.is_text_only());
        assert_eq!(concept.text.as_deref(), Some("chest pain"));

        let reasons = build_reason_list(Some(&[]), Some("chest pain")).unwrap();
        assert_eq!(reasons.len(), 1);
    }

    #[test]
    fn test_reason_list_structured_ignores_free_text() {
        let structured = [triple(), CodedValue::new("C2", "S2", "D2")];
        let reasons = build_reason_list(Some(&structured), Some("ignored")).unwrap();
        assert_eq!(reasons.len(), 2);
        for reason in &reasons {
            let concept = reason.concept.as_ref().unwrap();
            assert!(concept.text.is_none());
            assert_eq!(concept.coding.len(), 1);
        }
        assert_eq!(
            reasons[1].concept.as_ref().unwrap().coding[0].code.as_deref(),
            Some("C2")
        );
    }

    #[test]
    fn test_instance_sop_class() {
        let coding = build_instance_sop_class("1.2.840.10008.5.1.4.1.1.2");
        assert_eq!(coding.system.as_deref(), Some("urn:ietf:rfc:3986"));
        assert_eq!(
            coding.code.as_deref(),
            Some("urn:oid:1.2.840.10008.5.1.4.1.1.2")
        );
    }

    #[test]
    fn test_freetext_coding() {
        let coding = build_freetext_coding("CHEST PA");
        assert!(coding.system.is_none());
        assert_eq!(coding.code.as_deref(), Some("CHEST PA"));
        assert_eq!(coding.user_selected, Some(true));
    }
}
