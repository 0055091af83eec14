//! Admin console: the product editor and its submit payload.

pub mod form;
pub mod submission;

pub use form::{FormMode, FormState, ProductBackend, ProductEdit, ProductForm};
pub use submission::ProductSubmission;
