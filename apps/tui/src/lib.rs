// Export our modules for use in binaries and tests
pub mod config;
pub mod domain;
pub mod form;

pub use domain::{FieldDescriptor, FieldKind, FormTemplate, TemplateRegistry};
pub use form::{Action, FormController, FormState, Notice};
