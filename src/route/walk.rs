use crate::route::RouteNode;

/// Depth-first, pre-order iterator over a route tree.
///
/// Yields `(dotted_key, node)`; the starting node has the empty key and its
/// descendants are keyed like `users.posts.detail`, in declaration order.
#[derive(Debug)]
pub struct Walk<'a> {
    stack: Vec<(String, &'a RouteNode)>,
}

impl<'a> Walk<'a> {
    pub(crate) fn new(root: &'a RouteNode) -> Self {
        Self {
            stack: vec![(String::new(), root)],
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = (String, &'a RouteNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, node) = self.stack.pop()?;

        let children: Vec<_> = node.children().collect();
        for (child_key, child) in children.into_iter().rev() {
            let dotted = if key.is_empty() {
                child_key.to_string()
            } else {
                format!("{key}.{child_key}")
            };
            self.stack.push((dotted, &**child));
        }

        Some((key, node))
    }
}
