//! Token tree flattening.

use tokensmith_types::{Category, FlattenedVariable, TokenNode};

/// Flatten `category` into declarations, depth-first in document order.
///
/// Each leaf reachable through keys `[a, b, c]` becomes `--{prefix}-a-b-c`
/// (or `--a-b-c` with an empty prefix). Names are not deduplicated.
#[must_use]
pub fn flatten(category: &Category, prefix: &str) -> Vec<FlattenedVariable> {
    let mut out = Vec::with_capacity(category.leaf_count());
    walk(category, prefix, &mut out);
    out
}

fn walk(category: &Category, prefix: &str, out: &mut Vec<FlattenedVariable>) {
    for (key, node) in category.iter() {
        let child_prefix = if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{prefix}-{key}")
        };
        match node {
            TokenNode::Leaf(token) => {
                out.push(FlattenedVariable::new(
                    format!("--{child_prefix}"),
                    token.value(),
                ));
            }
            TokenNode::Category(child) => walk(child, &child_prefix, out),
        }
    }
}
