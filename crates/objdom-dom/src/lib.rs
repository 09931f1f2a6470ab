//! objdom DOM - document tree
//!
//! Host-document layer for the objdom wrapper: parent/child/sibling link
//! traversal, element-vs-other node discrimination, and the mutation
//! operations needed to build and evolve documents.

mod document;
mod node;
mod tree;

pub use document::Document;
pub use node::{Attribute, ElementData, Node, NodeData};
pub use tree::{Children, DomTree};

/// Node identifier (index into the tree arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check that this ID refers to a node at all
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }
}

/// Result type for DOM mutation
pub type DomResult<T> = Result<T, DomError>;

/// DOM mutation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// A node ID did not resolve to a node
    #[error("node not found")]
    NotFound,

    /// Inserting a node into itself or one of its descendants
    #[error("hierarchy request error")]
    HierarchyRequest,

    /// The given node is not a child of the given parent
    #[error("node is not a child of the given parent")]
    NotAChild,

    /// The operation is not defined for this node type
    #[error("operation not valid for this node type")]
    InvalidNodeType,
}
