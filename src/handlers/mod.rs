// Handler modules
pub mod rules;
pub mod validate;

// Re-export all handler functions
pub use rules::{handle_explain, handle_rules};
pub use validate::{handle_validate, ValidateOptions};
