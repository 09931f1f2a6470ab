//! Structural matching against the DOM tree
//!
//! Evaluates parsed selectors directly on objdom-dom nodes. Only element
//! nodes can match; sibling-position pseudo-classes count element
//! siblings, ignoring text and comment nodes.

use objdom_dom::{Document, Node, NodeId};

use crate::parser::{CompoundSelector, PseudoClass, SelectorComponent, SelectorList};

impl SelectorList {
    /// Check whether an element matches any compound in the list
    pub fn matches(&self, doc: &Document, id: NodeId) -> bool {
        if !doc.tree().is_element(id) {
            return false;
        }
        self.compounds.iter().any(|c| c.matches(doc, id))
    }
}

impl CompoundSelector {
    /// Check whether an element matches every component of this compound
    pub fn matches(&self, doc: &Document, id: NodeId) -> bool {
        self.components
            .iter()
            .all(|comp| match_component(doc, id, comp))
    }
}

fn match_component(doc: &Document, id: NodeId, component: &SelectorComponent) -> bool {
    let Some(elem) = doc.tree().get(id).and_then(Node::as_element) else {
        return false;
    };

    match component {
        SelectorComponent::Universal => true,
        SelectorComponent::Type(tag) => elem.name.eq_ignore_ascii_case(tag),
        SelectorComponent::Id(id_attr) => elem.id.as_deref() == Some(id_attr.as_str()),
        SelectorComponent::Class(class) => elem.has_class(class),
        SelectorComponent::Attribute(attr) => attr.matches(elem.get_attr(&attr.name)),
        SelectorComponent::PseudoClass(pseudo) => match_pseudo_class(doc, id, pseudo),
    }
}

fn match_pseudo_class(doc: &Document, id: NodeId, pseudo: &PseudoClass) -> bool {
    let tree = doc.tree();

    match pseudo {
        PseudoClass::FirstChild => element_sibling_index(doc, id).0 == 1,
        PseudoClass::LastChild => {
            let (index, count) = element_sibling_index(doc, id);
            index == count
        }
        PseudoClass::OnlyChild => element_sibling_index(doc, id).1 == 1,
        PseudoClass::NthChild(expr) => expr.matches(element_sibling_index(doc, id).0 as i32),
        PseudoClass::Empty => !tree
            .children(id)
            .any(|(_, node)| node.is_element() || node.is_text()),
        PseudoClass::Root => tree.parent_of(id) == Some(tree.root()),
        PseudoClass::Not(inner) => !match_component(doc, id, inner),
    }
}

/// 1-based position among element siblings, and the element sibling count.
/// A detached element counts as the only child.
fn element_sibling_index(doc: &Document, id: NodeId) -> (usize, usize) {
    let tree = doc.tree();
    let Some(parent) = tree.parent_of(id) else {
        return (1, 1);
    };

    let mut index = 0;
    let mut count = 0;
    for (child, node) in tree.children(parent) {
        if node.is_element() {
            count += 1;
            if child == id {
                index = count;
            }
        }
    }
    (index, count)
}
