#![forbid(unsafe_code)]
//! Submitted-form surface: decoding, validation, material extraction.

mod errors;
mod extract;
mod fields;
mod validate;

pub use errors::FormError;
pub use extract::{extract_materials, material_field_name, CUSTOM_FIELD, MATERIAL_FIELD_PREFIX};
pub use fields::SubmittedForm;
pub use validate::{point_draft_from_form, validate_point_form, REQUIRED_FIELDS};

pub const CRATE_NAME: &str = "recicla-form";
