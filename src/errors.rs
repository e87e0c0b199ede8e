use crate::route::RouteOptionsError;
use crate::template::TemplateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("parameters required for route '{template}'")]
    InvalidInvocation { template: String },
    #[error("missing value for parameter '{name}' in route '{template}'")]
    MissingParameter { template: String, name: String },
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error(transparent)]
    Options(#[from] RouteOptionsError),
}

pub type RouteResult<T> = Result<T, RouteError>;
