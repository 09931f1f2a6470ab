//! Matching primitives
//!
//! The four scan primitives the selection methods compose with. They take
//! wrapped elements or raw node ids through the `AsNodeId` seam, so
//! callers never probe what kind of handle they are holding.
//!
//! A selector the engine cannot parse is an error; "nothing matched"
//! never is.

use objdom_css::{SelectorError, SelectorList};
use objdom_dom::{Document, NodeId};

use crate::ObjectElement;

/// Anything that designates a node: a raw id or a wrapped element
pub trait AsNodeId {
    fn as_node_id(&self) -> NodeId;
}

impl AsNodeId for NodeId {
    fn as_node_id(&self) -> NodeId {
        *self
    }
}

impl AsNodeId for ObjectElement<'_> {
    fn as_node_id(&self) -> NodeId {
        self.node_id()
    }
}

/// Match one element against a selector
pub fn matches<N: AsNodeId>(
    doc: &Document,
    element: &N,
    selector: &str,
) -> Result<bool, SelectorError> {
    let list = SelectorList::parse(selector)?;
    Ok(list.matches(doc, element.as_node_id()))
}

/// Keep the elements matching the selector, preserving order
pub fn match_all<N: AsNodeId + Copy>(
    doc: &Document,
    elements: &[N],
    selector: &str,
) -> Result<Vec<N>, SelectorError> {
    let list = SelectorList::parse(selector)?;
    Ok(elements
        .iter()
        .copied()
        .filter(|e| list.matches(doc, e.as_node_id()))
        .collect())
}

/// First element matching the selector, scanning in order
pub fn match_first<N: AsNodeId + Copy>(
    doc: &Document,
    elements: &[N],
    selector: &str,
) -> Result<Option<N>, SelectorError> {
    let list = SelectorList::parse(selector)?;
    Ok(elements
        .iter()
        .copied()
        .find(|e| list.matches(doc, e.as_node_id())))
}

/// Last element matching the selector. Scans back to front; the caller's
/// slice is left untouched.
pub fn match_last<N: AsNodeId + Copy>(
    doc: &Document,
    elements: &[N],
    selector: &str,
) -> Result<Option<N>, SelectorError> {
    let list = SelectorList::parse(selector)?;
    Ok(elements
        .iter()
        .rev()
        .copied()
        .find(|e| list.matches(doc, e.as_node_id())))
}
