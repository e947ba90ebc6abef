pub mod code_sequence;
pub mod tags;

pub use code_sequence::{extract_code_sequence, extract_coded_concepts};
pub use tags::*;
