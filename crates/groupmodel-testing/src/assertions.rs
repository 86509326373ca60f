//! Custom assertions for presentation trees.
//!
//! Provides high-level assertions that make tests more readable:
//! - Field list comparison
//! - Child label ordering
//! - Identifier checks over a whole tree

use anyhow::{Context, Result};
use groupmodel_types::PresentationNode;

/// Assert that a node's fields are exactly `expected` `(label, value)` pairs, in order.
pub fn assert_fields(node: &PresentationNode, expected: &[(&str, &str)]) -> Result<()> {
    let actual: Vec<(&str, &str)> = node
        .fields()
        .iter()
        .map(|field| (field.label.as_str(), field.value.as_str()))
        .collect();

    if actual != expected {
        anyhow::bail!(
            "Node '{}' has fields {:?}, expected {:?}",
            node.identifier(),
            actual,
            expected
        );
    }

    Ok(())
}

/// Assert that a node's direct children carry `expected` labels, in order.
pub fn assert_child_labels(node: &PresentationNode, expected: &[&str]) -> Result<()> {
    let actual: Vec<&str> = node.children().iter().map(|child| child.label()).collect();

    if actual != expected {
        anyhow::bail!(
            "Node '{}' has children {:?}, expected {:?}",
            node.identifier(),
            actual,
            expected
        );
    }

    Ok(())
}

/// Follow child indices from `node`, e.g. `&[0, 2]` is the third child of the first child.
pub fn child_at<'a>(node: &'a PresentationNode, path: &[usize]) -> Result<&'a PresentationNode> {
    path.iter().try_fold(node, |current, &index| {
        current.children().get(index).with_context(|| {
            format!(
                "Node '{}' has no child at index {}",
                current.identifier(),
                index
            )
        })
    })
}

/// Assert that no identifier appears twice anywhere in the tree.
pub fn assert_unique_identifiers(node: &PresentationNode) -> Result<()> {
    let mut seen = std::collections::HashSet::new();
    for (_, current) in node.walk() {
        if !seen.insert(current.identifier().clone()) {
            anyhow::bail!("Identifier '{}' appears more than once", current.identifier());
        }
    }
    Ok(())
}
