use crate::errors::{RouteError, RouteResult};
use crate::params::Params;
use crate::route::{MissingParamPolicy, RouteNode};
use crate::template::TemplatePart;

impl RouteNode {
    /// Renders the route, with or without a parameter mapping.
    ///
    /// Static templates come back unchanged and ignore any mapping. A
    /// parametric template without a mapping is an
    /// [`RouteError::InvalidInvocation`]. Each `:name` is looked up by its exact
    /// name, so mapping order never matters and a repeated name is filled
    /// everywhere it appears. Unknown keys are ignored.
    #[tracing::instrument(
        level = "trace",
        skip(self, params),
        fields(template = %self.raw(), supplied = params.map_or(0, Params::len) as u64)
    )]
    pub fn call(&self, params: Option<&Params>) -> RouteResult<String> {
        if !self.is_parametric() {
            return Ok(self.raw().to_string());
        }

        let Some(params) = params else {
            return Err(RouteError::InvalidInvocation {
                template: self.raw().to_string(),
            });
        };

        let mut out = String::with_capacity(self.raw().len() + params.len() * 8);
        for part in self.template.parts() {
            match part {
                TemplatePart::Literal(text) => out.push_str(text),
                TemplatePart::Param { name } => match params.get(name) {
                    Some(value) => out.push_str(&value.to_string()),
                    None => self.handle_missing(name, &mut out)?,
                },
            }
        }

        Ok(out)
    }

    /// Renders without parameters; only static templates succeed.
    pub fn path(&self) -> RouteResult<String> {
        self.call(None)
    }

    pub fn render(&self, params: &Params) -> RouteResult<String> {
        self.call(Some(params))
    }

    fn handle_missing(&self, name: &str, out: &mut String) -> RouteResult<()> {
        match self.options.missing_params {
            MissingParamPolicy::Error => Err(RouteError::MissingParameter {
                template: self.raw().to_string(),
                name: name.to_string(),
            }),
            MissingParamPolicy::KeepPlaceholder => {
                tracing::debug!(param = %name, template = %self.raw(), "parameter missing; keeping placeholder");
                out.push(':');
                out.push_str(name);
                Ok(())
            }
        }
    }
}
