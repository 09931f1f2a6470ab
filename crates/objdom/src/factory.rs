//! Wrap factory
//!
//! The only construction path for `ObjectElement`. `None` passes straight
//! through, and an id that does not resolve to an element node wraps to
//! `None`, so selection methods can pipe a possibly-absent match result
//! in here without a null check of their own.

use objdom_dom::{Document, NodeId};

use crate::ObjectElement;

/// Wrap a node id as an element handle
pub fn wrap_element(doc: &Document, id: Option<NodeId>) -> Option<ObjectElement<'_>> {
    let id = id?;
    doc.tree()
        .is_element(id)
        .then_some(ObjectElement { doc, id })
}

/// Wrap a sequence of node ids, dropping any that are not element nodes
pub fn wrap_elements<I>(doc: &Document, ids: I) -> Vec<ObjectElement<'_>>
where
    I: IntoIterator<Item = NodeId>,
{
    ids.into_iter()
        .filter_map(|id| wrap_element(doc, Some(id)))
        .collect()
}
