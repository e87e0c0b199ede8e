use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template '{template}' contains a parameter with an empty name")]
    EmptyParameterName { template: String },
    #[error(
        "parameter name '{name}' in template '{template}' must start with an alphabetic character or underscore (found '{found}')"
    )]
    ParameterInvalidStart {
        template: String,
        name: String,
        found: char,
    },
    #[error(
        "parameter name '{name}' in template '{template}' contains invalid character '{invalid}'"
    )]
    ParameterInvalidCharacter {
        template: String,
        name: String,
        invalid: char,
    },
    #[error("duplicate parameter name '{name}' in template '{template}'")]
    DuplicateParameterName { template: String, name: String },
}

pub type TemplateResult<T> = Result<T, TemplateError>;
