mod image_ref;
mod patch_field;
mod validation;

pub use image_ref::{ImageKind, ImageRef};
pub use patch_field::PatchField;
pub use validation::{max_chars, required, ValidationError};
