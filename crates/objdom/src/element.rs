//! Wrapped element handle and positional properties
//!
//! All properties walk the live tree links on every access; sibling and
//! child walks skip text and comment nodes so results contain elements
//! only.

use std::fmt;

use objdom_dom::{Document, Node, NodeId};

use crate::factory;

/// A wrapped element: a borrowed document plus the id of one element node.
///
/// Built only through the wrap factory, which refuses non-element nodes,
/// so a value of this type always points at exactly one element.
#[derive(Clone, Copy)]
pub struct ObjectElement<'d> {
    pub(crate) doc: &'d Document,
    pub(crate) id: NodeId,
}

impl<'d> ObjectElement<'d> {
    /// The underlying node id
    pub fn node_id(&self) -> NodeId {
        self.id
    }

    /// The document this element belongs to
    pub fn document(&self) -> &'d Document {
        self.doc
    }

    /// Lowercased tag name
    pub fn tag_name(&self) -> &'d str {
        self.doc
            .tree()
            .get(self.id)
            .and_then(Node::as_element)
            .map_or("", |e| e.name.as_str())
    }

    /// An attribute value, if set
    pub fn attr(&self, name: &str) -> Option<&'d str> {
        self.doc
            .tree()
            .get(self.id)
            .and_then(Node::as_element)
            .and_then(|e| e.get_attr(name))
    }

    /// Wrapped immediate parent; `None` when the parent is the document
    /// node or the element is detached
    pub fn parent(&self) -> Option<ObjectElement<'d>> {
        factory::wrap_element(self.doc, self.doc.tree().parent_of(self.id))
    }

    /// Wrapped ancestors, nearest first, excluding the document node
    pub fn ancestors(&self) -> Vec<ObjectElement<'d>> {
        let mut out = Vec::new();
        let mut cursor = self.parent();
        while let Some(ancestor) = cursor {
            out.push(ancestor);
            cursor = ancestor.parent();
        }
        out
    }

    /// First element child, skipping text and comment nodes
    pub fn first_child(&self) -> Option<ObjectElement<'d>> {
        let tree = self.doc.tree();
        let mut cursor = tree.first_child_of(self.id);
        while let Some(id) = cursor {
            if tree.is_element(id) {
                return factory::wrap_element(self.doc, Some(id));
            }
            cursor = tree.next_sibling_of(id);
        }
        None
    }

    /// Last element child, skipping text and comment nodes
    pub fn last_child(&self) -> Option<ObjectElement<'d>> {
        let tree = self.doc.tree();
        let mut cursor = tree.last_child_of(self.id);
        while let Some(id) = cursor {
            if tree.is_element(id) {
                return factory::wrap_element(self.doc, Some(id));
            }
            cursor = tree.prev_sibling_of(id);
        }
        None
    }

    /// All element children in document order; empty when none
    pub fn children(&self) -> Vec<ObjectElement<'d>> {
        factory::wrap_elements(
            self.doc,
            self.doc
                .tree()
                .children(self.id)
                .filter(|(_, node)| node.is_element())
                .map(|(id, _)| id),
        )
    }

    /// Nearest preceding element sibling
    pub fn prev_sibling(&self) -> Option<ObjectElement<'d>> {
        let tree = self.doc.tree();
        let mut cursor = tree.prev_sibling_of(self.id);
        while let Some(id) = cursor {
            if tree.is_element(id) {
                return factory::wrap_element(self.doc, Some(id));
            }
            cursor = tree.prev_sibling_of(id);
        }
        None
    }

    /// Nearest following element sibling
    pub fn next_sibling(&self) -> Option<ObjectElement<'d>> {
        let tree = self.doc.tree();
        let mut cursor = tree.next_sibling_of(self.id);
        while let Some(id) = cursor {
            if tree.is_element(id) {
                return factory::wrap_element(self.doc, Some(id));
            }
            cursor = tree.next_sibling_of(id);
        }
        None
    }

    /// All preceding element siblings, returned in document order
    pub fn prev_siblings(&self) -> Vec<ObjectElement<'d>> {
        let mut out = Vec::new();
        let mut cursor = self.prev_sibling();
        while let Some(prev) = cursor {
            out.push(prev);
            cursor = prev.prev_sibling();
        }
        out.reverse();
        out
    }

    /// All following element siblings, in document order
    pub fn next_siblings(&self) -> Vec<ObjectElement<'d>> {
        let mut out = Vec::new();
        let mut cursor = self.next_sibling();
        while let Some(next) = cursor {
            out.push(next);
            cursor = next.next_sibling();
        }
        out
    }

    /// Preceding then following element siblings; excludes self
    pub fn siblings(&self) -> Vec<ObjectElement<'d>> {
        let mut out = self.prev_siblings();
        out.extend(self.next_siblings());
        out
    }

    /// First element child of the parent (may be self)
    pub fn first_sibling(&self) -> Option<ObjectElement<'d>> {
        self.parent().and_then(|p| p.first_child())
    }

    /// Last element child of the parent (may be self)
    pub fn last_sibling(&self) -> Option<ObjectElement<'d>> {
        self.parent().and_then(|p| p.last_child())
    }

    /// All descendant elements in document order, excluding self
    pub fn descendants(&self) -> Vec<ObjectElement<'d>> {
        factory::wrap_elements(self.doc, descendant_element_ids(self.doc, self.id))
    }
}

/// Depth-first, document-order ids of the element descendants of `root`
pub(crate) fn descendant_element_ids(doc: &Document, root: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    collect_descendants(doc, root, &mut out);
    out
}

fn collect_descendants(doc: &Document, id: NodeId, out: &mut Vec<NodeId>) {
    for (child, node) in doc.tree().children(id) {
        if node.is_element() {
            out.push(child);
        }
        collect_descendants(doc, child, out);
    }
}

impl PartialEq for ObjectElement<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && std::ptr::eq(self.doc, other.doc)
    }
}

impl Eq for ObjectElement<'_> {}

impl fmt::Debug for ObjectElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectElement")
            .field("id", &self.id)
            .field("tag", &self.tag_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wrap_element;

    #[test]
    fn test_parent_stops_at_document() {
        let mut doc = Document::new();
        let div = doc.append_element(doc.body(), "div").unwrap();
        let div = wrap_element(&doc, Some(div)).unwrap();

        let html = div.parent().unwrap().parent().unwrap();
        assert_eq!(html.tag_name(), "html");
        assert_eq!(html.parent(), None);
    }

    #[test]
    fn test_children_skip_non_elements() {
        let mut doc = Document::new();
        let body = doc.body();
        doc.append_text(body, "one").unwrap();
        let a = doc.append_element(body, "a").unwrap();
        doc.append_comment(body, "two").unwrap();
        let b = doc.append_element(body, "b").unwrap();
        doc.append_text(body, "three").unwrap();

        let body = wrap_element(&doc, Some(body)).unwrap();
        let ids: Vec<NodeId> = body.children().iter().map(|c| c.node_id()).collect();
        assert_eq!(ids, vec![a, b]);
        assert_eq!(body.first_child().unwrap().node_id(), a);
        assert_eq!(body.last_child().unwrap().node_id(), b);
    }

    #[test]
    fn test_sibling_walks_skip_non_elements() {
        let mut doc = Document::new();
        let body = doc.body();
        let a = doc.append_element(body, "a").unwrap();
        doc.append_text(body, "gap").unwrap();
        let b = doc.append_element(body, "b").unwrap();

        let a = wrap_element(&doc, Some(a)).unwrap();
        let b = wrap_element(&doc, Some(b)).unwrap();
        assert_eq!(a.next_sibling(), Some(b));
        assert_eq!(b.prev_sibling(), Some(a));
        assert_eq!(a.prev_sibling(), None);
    }

    #[test]
    fn test_descendants_document_order() {
        let mut doc = Document::new();
        let body = doc.body();
        let outer = doc.append_element(body, "div").unwrap();
        let inner = doc.append_element(outer, "span").unwrap();
        let second = doc.append_element(body, "p").unwrap();

        let body = wrap_element(&doc, Some(body)).unwrap();
        let ids: Vec<NodeId> = body.descendants().iter().map(|d| d.node_id()).collect();
        assert_eq!(ids, vec![outer, inner, second]);
    }
}
