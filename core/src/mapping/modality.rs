use crate::terminology::ACQUISITION_MODALITY_SYSTEM;
use crate::types::{CodeableConcept, Coding, ImagingStudy};
use log::trace;

/// Wraps a DICOM Modality value in a single-coding concept
pub fn build_modality_concept(modality: &str) -> CodeableConcept {
    CodeableConcept::from_coding(Coding::new(ACQUISITION_MODALITY_SYSTEM, modality))
}

/// Adds a modality to the study unless an equal one is already listed
///
/// Two concepts are equal when their coding lists are element-wise equal.
/// Insertion order is preserved. Returns `true` if the concept was added.
pub fn merge_modality(study: &mut ImagingStudy, modality: CodeableConcept) -> bool {
    if study
        .modality
        .iter()
        .any(|existing| existing.coding == modality.coding)
    {
        trace!("Modality {:?} already present", modality.coding);
        return false;
    }

    study.modality.push(modality);
    true
}
