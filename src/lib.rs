pub mod errors;
pub mod params;
pub mod route;
pub mod template;

pub use errors::{RouteError, RouteResult};
pub use params::{ParamValue, Params};
pub use route::{
    MissingParamPolicy, RouteChildren, RouteNode, RouteOptions, RouteOptionsBuilder,
    RouteOptionsError, Walk, route, route_with, try_route,
};
pub use template::{PathTemplate, TemplateError, TemplatePart};
