pub mod api;
pub mod error;
pub mod extraction;
pub mod mapping;
pub mod terminology;
pub mod types;

pub use api::StudyMapper;
pub use error::{Dicom2FhirError, Result};
pub use extraction::{extract_code_sequence, extract_coded_concepts};
pub use mapping::*;
pub use types::*;
