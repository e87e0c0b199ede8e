mod error;
mod lexer;
mod segment;

pub use error::{TemplateError, TemplateResult};
pub use lexer::{scan_template, validate_template};
pub use segment::{PathTemplate, TemplatePart, TemplateParts};
