use smallvec::SmallVec;
use std::ops::Index;
use std::sync::Arc;

use crate::errors::RouteResult;
use crate::route::{RouteOptions, Walk};
use crate::template::{PathTemplate, validate_template};

pub type RouteChildren = SmallVec<[(Box<str>, Arc<RouteNode>); 4]>;

/// An immutable route declaration: a path template plus named children.
///
/// Children are held behind [`Arc`], so the node handed to [`RouteNode::with_child`]
/// is the very node returned by [`RouteNode::child`].
#[derive(Debug, Clone)]
pub struct RouteNode {
    pub(crate) template: PathTemplate,
    pub(crate) options: RouteOptions,
    children: RouteChildren,
}

/// Declares a route with default options.
pub fn route<T: AsRef<str>>(template: T) -> RouteNode {
    RouteNode::new(template.as_ref())
}

/// Declares a route and attaches `children` under their keys.
pub fn route_with<T, I, K, C>(template: T, children: I) -> RouteNode
where
    T: AsRef<str>,
    I: IntoIterator<Item = (K, C)>,
    K: AsRef<str>,
    C: Into<Arc<RouteNode>>,
{
    route(template).with_children(children)
}

/// Declares a route with explicit options, validating them and, when
/// `strict_names` is set, the template's parameter names.
pub fn try_route<T: AsRef<str>>(template: T, options: RouteOptions) -> RouteResult<RouteNode> {
    RouteNode::try_new(template.as_ref(), options)
}

impl RouteNode {
    pub fn new(template: &str) -> Self {
        Self::assemble(PathTemplate::parse(template), RouteOptions::default())
    }

    #[tracing::instrument(level = "trace", skip(options), fields(template_len = template.len() as u64))]
    pub fn try_new(template: &str, options: RouteOptions) -> RouteResult<Self> {
        options.validate()?;

        let template = PathTemplate::parse(template);
        if options.strict_names {
            validate_template(&template, options.allow_duplicate_names)?;
        }

        Ok(Self::assemble(template, options))
    }

    fn assemble(template: PathTemplate, options: RouteOptions) -> Self {
        Self {
            template,
            options,
            children: RouteChildren::new(),
        }
    }

    /// Attaches `child` under `key`, replacing any child already stored there.
    pub fn with_child<K, C>(mut self, key: K, child: C) -> Self
    where
        K: AsRef<str>,
        C: Into<Arc<RouteNode>>,
    {
        self.attach(key.as_ref(), child.into());
        self
    }

    pub fn with_children<I, K, C>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = (K, C)>,
        K: AsRef<str>,
        C: Into<Arc<RouteNode>>,
    {
        for (key, child) in children {
            self.attach(key.as_ref(), child.into());
        }
        self
    }

    fn attach(&mut self, key: &str, child: Arc<RouteNode>) {
        match self.children.iter_mut().find(|(existing, _)| &**existing == key) {
            Some(slot) => slot.1 = child,
            None => self.children.push((key.into(), child)),
        }
    }

    /// The template exactly as declared, placeholders included.
    pub fn raw(&self) -> &str {
        self.template.raw()
    }

    pub fn template(&self) -> &PathTemplate {
        &self.template
    }

    pub fn is_parametric(&self) -> bool {
        self.template.is_parametric()
    }

    pub fn param_names(&self) -> Vec<&str> {
        self.template.param_names()
    }

    pub fn options(&self) -> &RouteOptions {
        &self.options
    }

    pub fn child(&self, key: &str) -> Option<&Arc<RouteNode>> {
        self.children
            .iter()
            .find(|(existing, _)| &**existing == key)
            .map(|(_, child)| child)
    }

    /// Children in declaration order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &Arc<RouteNode>)> {
        self.children.iter().map(|(key, child)| (&**key, child))
    }

    /// Follows a dotted key path such as `users.posts.detail`.
    /// The empty path resolves to `self`.
    pub fn at(&self, path: &str) -> Option<&RouteNode> {
        if path.is_empty() {
            return Some(self);
        }

        path.split('.')
            .try_fold(self, |node, key| node.child(key).map(|child| &**child))
    }

    /// Depth-first walk over this node and its descendants, keyed by dotted path.
    pub fn walk(&self) -> Walk<'_> {
        Walk::new(self)
    }
}

impl Index<&str> for RouteNode {
    type Output = RouteNode;

    fn index(&self, key: &str) -> &RouteNode {
        match self.child(key) {
            Some(child) => &**child,
            None => panic!("route '{}' has no child named '{key}'", self.raw()),
        }
    }
}
