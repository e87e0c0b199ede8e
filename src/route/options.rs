use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What rendering does when the mapping lacks a name the template declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MissingParamPolicy {
    #[default]
    Error,
    KeepPlaceholder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteOptions {
    pub missing_params: MissingParamPolicy,
    pub strict_names: bool,
    pub allow_duplicate_names: bool,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            missing_params: MissingParamPolicy::default(),
            strict_names: false,
            allow_duplicate_names: true,
        }
    }
}

impl RouteOptions {
    pub fn builder() -> RouteOptionsBuilder {
        RouteOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RouteOptionsError> {
        if !self.allow_duplicate_names && !self.strict_names {
            return Err(RouteOptionsError::DuplicateCheckRequiresStrictNames);
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouteOptionsBuilder {
    options: RouteOptions,
}

impl RouteOptionsBuilder {
    pub fn missing_params(mut self, value: MissingParamPolicy) -> Self {
        self.options.missing_params = value;
        self
    }

    pub fn strict_names(mut self, value: bool) -> Self {
        self.options.strict_names = value;
        self
    }

    pub fn allow_duplicate_names(mut self, value: bool) -> Self {
        self.options.allow_duplicate_names = value;
        self
    }

    pub fn build(self) -> Result<RouteOptions, RouteOptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteOptionsError {
    #[error("rejecting duplicate parameter names requires strict_names to be enabled")]
    DuplicateCheckRequiresStrictNames,
}
