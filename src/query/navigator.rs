use crate::document::access::TreeNode;
use crate::jsonpath::ast::{JsonPath, Segment};
use tracing::trace;

/// Walks a tree along a parsed path.
///
/// Property lookups and index steps share one linear walk. Every way a path
/// can fail to resolve (null root, non-object, missing key, non-array, index
/// out of bounds) ends the walk with `None`.
pub struct Navigator<'a, N: TreeNode> {
    root: &'a N,
}

impl<'a, N: TreeNode> Navigator<'a, N> {
    pub fn new(root: &'a N) -> Self {
        Navigator { root }
    }

    /// Returns the node at `path`, or `None` when the path does not resolve.
    pub fn locate(&self, path: &JsonPath) -> Option<&'a N> {
        // An explicit null root is absent, not an empty object.
        if self.root.is_null() {
            trace!(path = %path, "root is null");
            return None;
        }

        let mut current = self.root;
        for segment in path.segments() {
            current = self.step(current, segment)?;
        }
        Some(current)
    }

    /// Applies one segment: property lookup, then each index in order.
    fn step(&self, node: &'a N, segment: &Segment) -> Option<&'a N> {
        let Some(mut current) = node.property(&segment.property) else {
            trace!(
                property = %segment.property,
                kind = %node.kind(),
                "property lookup did not resolve"
            );
            return None;
        };

        for &index in &segment.indices {
            match current.element(index) {
                Some(element) => current = element,
                None => {
                    trace!(
                        property = %segment.property,
                        index,
                        kind = %current.kind(),
                        "index step did not resolve"
                    );
                    return None;
                }
            }
        }

        Some(current)
    }
}
