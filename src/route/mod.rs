mod declare;
mod node;
mod options;
mod render;
mod walk;

pub use node::{RouteChildren, RouteNode, route, route_with, try_route};
pub use options::{MissingParamPolicy, RouteOptions, RouteOptionsBuilder, RouteOptionsError};
pub use walk::Walk;
