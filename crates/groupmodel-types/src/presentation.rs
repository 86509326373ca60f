//! Presentation tree handed to the rendering layer.
//!
//! Nodes are immutable once a controller returns them; rebuilding a tree
//! means applying the context again.

use serde::{Deserialize, Serialize};

use crate::{ListStyle, TabIdentifier};

/// A single label/value line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldNode {
    pub label: String,
    pub value: String,
}

impl FieldNode {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Group made of an ordered field list and, for composite controllers,
/// nested groups in creation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardGroup {
    pub identifier: TabIdentifier,
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_style: Option<ListStyle>,

    #[serde(default)]
    pub fields: Vec<FieldNode>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<PresentationNode>,
}

impl StandardGroup {
    pub fn new(identifier: TabIdentifier, label: impl Into<String>) -> Self {
        Self {
            identifier,
            label: label.into(),
            list_style: None,
            fields: Vec::new(),
            children: Vec::new(),
        }
    }
}

/// Group showing one composed label/text field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultilineGroup {
    pub identifier: TabIdentifier,
    pub label: String,
    pub field: FieldNode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PresentationNode {
    Standard(StandardGroup),
    Multiline(MultilineGroup),
}

impl PresentationNode {
    pub fn identifier(&self) -> &TabIdentifier {
        match self {
            PresentationNode::Standard(group) => &group.identifier,
            PresentationNode::Multiline(group) => &group.identifier,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            PresentationNode::Standard(group) => &group.label,
            PresentationNode::Multiline(group) => &group.label,
        }
    }

    /// Field lines of this node (the single composed field for multiline groups)
    pub fn fields(&self) -> &[FieldNode] {
        match self {
            PresentationNode::Standard(group) => &group.fields,
            PresentationNode::Multiline(group) => std::slice::from_ref(&group.field),
        }
    }

    pub fn children(&self) -> &[PresentationNode] {
        match self {
            PresentationNode::Standard(group) => &group.children,
            PresentationNode::Multiline(_) => &[],
        }
    }

    pub fn as_standard(&self) -> Option<&StandardGroup> {
        match self {
            PresentationNode::Standard(group) => Some(group),
            PresentationNode::Multiline(_) => None,
        }
    }

    pub fn as_multiline(&self) -> Option<&MultilineGroup> {
        match self {
            PresentationNode::Multiline(group) => Some(group),
            PresentationNode::Standard(_) => None,
        }
    }

    /// Depth-first, pre-order traversal in stable child order.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![(0, self)] }
    }
}

/// Iterator returned by [`PresentationNode::walk`], yielding `(depth, node)`.
pub struct Walk<'a> {
    stack: Vec<(usize, &'a PresentationNode)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a PresentationNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children().iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}
