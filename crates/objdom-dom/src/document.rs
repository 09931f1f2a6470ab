//! Document - high-level document API

use crate::{DomResult, DomTree, NodeId};

/// A document: the tree plus cached references to its skeleton elements
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    tree: DomTree,
    /// Cached reference to the <html> element
    html_element: NodeId,
    /// Cached reference to the <head> element
    head_element: NodeId,
    /// Cached reference to the <body> element
    body_element: NodeId,
}

impl Document {
    /// Create a document with the html/head/body skeleton
    pub fn new() -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        // Fresh nodes under a fresh root: these appends cannot fail
        let _ = tree.append_child(tree.root(), html);
        let _ = tree.append_child(html, head);
        let _ = tree.append_child(html, body);

        Self {
            tree,
            html_element: html,
            head_element: head,
            body_element: body,
        }
    }

    /// Create an empty document (no structure)
    pub fn empty() -> Self {
        Self {
            tree: DomTree::new(),
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
        }
    }

    /// Get the <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get the <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get the <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Create an element and append it to `parent`
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> DomResult<NodeId> {
        let id = self.tree.create_element(tag);
        self.tree.append_child(parent, id)
    }

    /// Create a text node and append it to `parent`
    pub fn append_text(&mut self, parent: NodeId, content: &str) -> DomResult<NodeId> {
        let id = self.tree.create_text(content);
        self.tree.append_child(parent, id)
    }

    /// Create a comment node and append it to `parent`
    pub fn append_comment(&mut self, parent: NodeId, content: &str) -> DomResult<NodeId> {
        let id = self.tree.create_comment(content);
        self.tree.append_child(parent, id)
    }

    /// Set an attribute on an element node
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        let elem = self
            .tree
            .get_mut(id)
            .ok_or(crate::DomError::NotFound)?
            .as_element_mut()
            .ok_or(crate::DomError::InvalidNodeType)?;
        elem.set_attr(name, value);
        Ok(())
    }

    /// Get an element by its id attribute
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find_element_with_id(self.tree.root(), id)
    }

    fn find_element_with_id(&self, start: NodeId, target_id: &str) -> Option<NodeId> {
        for (node_id, node) in self.tree.children(start) {
            if let Some(elem) = node.as_element() {
                if elem.id.as_deref() == Some(target_id) {
                    return Some(node_id);
                }
            }
            if let Some(found) = self.find_element_with_id(node_id, target_id) {
                return Some(found);
            }
        }
        None
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton() {
        let doc = Document::new();

        assert!(doc.tree().is_element(doc.document_element()));
        assert_eq!(
            doc.tree().parent_of(doc.head()),
            Some(doc.document_element())
        );
        assert_eq!(doc.tree().next_sibling_of(doc.head()), Some(doc.body()));
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::empty();

        assert!(!doc.document_element().is_valid());
        assert_eq!(doc.tree().first_child_of(doc.tree().root()), None);
    }

    #[test]
    fn test_get_element_by_id() {
        let mut doc = Document::new();
        let div = doc.append_element(doc.body(), "div").unwrap();
        doc.set_attr(div, "id", "main").unwrap();

        assert_eq!(doc.get_element_by_id("main"), Some(div));
        assert_eq!(doc.get_element_by_id("missing"), None);
    }

    #[test]
    fn test_set_attr_on_text_rejected() {
        let mut doc = Document::new();
        let text = doc.append_text(doc.body(), "hello").unwrap();

        assert_eq!(
            doc.set_attr(text, "id", "x"),
            Err(crate::DomError::InvalidNodeType)
        );
    }
}
