pub mod validation;
pub use validation::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
