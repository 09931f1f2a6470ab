//! DOM tree (arena-based allocation)
//!
//! All nodes live in one `Vec`; removal detaches nodes from the tree but
//! never frees slots, so a `NodeId` stays usable for the lifetime of the
//! tree it came from.

use crate::{DomError, DomResult, Node, NodeData, NodeId};

/// Arena-based DOM tree
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
        }
    }

    /// The document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize)
    }

    /// Number of nodes allocated (detached nodes included)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Allocate a detached element node
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.alloc(Node::element(tag))
    }

    /// Allocate a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.alloc(Node::text(content))
    }

    /// Allocate a detached comment node
    pub fn create_comment(&mut self, content: &str) -> NodeId {
        self.alloc(Node::comment(content))
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    // Panic-free only after the caller has validated `id`; all public
    // entry points validate before reaching these.
    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0 as usize]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0 as usize]
    }

    /// Parent link, if any
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.parent).filter(|p| p.is_valid())
    }

    /// First child link, if any
    pub fn first_child_of(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.first_child).filter(|c| c.is_valid())
    }

    /// Last child link, if any
    pub fn last_child_of(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.last_child).filter(|c| c.is_valid())
    }

    /// Previous sibling link, if any
    pub fn prev_sibling_of(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.prev_sibling).filter(|s| s.is_valid())
    }

    /// Next sibling link, if any
    pub fn next_sibling_of(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.next_sibling).filter(|s| s.is_valid())
    }

    /// Check whether an ID resolves to an element node
    pub fn is_element(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(Node::is_element)
    }

    /// Iterate the direct children of a node, all node types
    pub fn children(&self, parent: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(parent).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    /// Append a child at the end of a parent's child list
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.insert_before(parent, child, None)
    }

    /// Insert `new_child` before `ref_child` (append when `ref_child` is None)
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        new_child: NodeId,
        ref_child: Option<NodeId>,
    ) -> DomResult<NodeId> {
        if self.get(parent).is_none() || self.get(new_child).is_none() {
            return Err(DomError::NotFound);
        }
        match self.node(parent).data {
            NodeData::Document | NodeData::Element(_) => {}
            _ => return Err(DomError::InvalidNodeType),
        }
        if matches!(self.node(new_child).data, NodeData::Document) {
            return Err(DomError::InvalidNodeType);
        }

        // new_child must not be the parent or one of its ancestors
        let mut cursor = parent;
        while cursor.is_valid() {
            if cursor == new_child {
                return Err(DomError::HierarchyRequest);
            }
            cursor = self.node(cursor).parent;
        }

        if let Some(r) = ref_child {
            if self.get(r).is_none() {
                return Err(DomError::NotFound);
            }
            if self.node(r).parent != parent {
                return Err(DomError::NotAChild);
            }
            // inserting a node before itself leaves it where it is
            if r == new_child {
                return Ok(new_child);
            }
        }

        self.detach(new_child);

        match ref_child {
            None => {
                let last = self.node(parent).last_child;
                self.node_mut(new_child).prev_sibling = last;
                if last.is_valid() {
                    self.node_mut(last).next_sibling = new_child;
                } else {
                    self.node_mut(parent).first_child = new_child;
                }
                self.node_mut(parent).last_child = new_child;
            }
            Some(r) => {
                let prev = self.node(r).prev_sibling;
                self.node_mut(new_child).prev_sibling = prev;
                self.node_mut(new_child).next_sibling = r;
                self.node_mut(r).prev_sibling = new_child;
                if prev.is_valid() {
                    self.node_mut(prev).next_sibling = new_child;
                } else {
                    self.node_mut(parent).first_child = new_child;
                }
            }
        }

        self.node_mut(new_child).parent = parent;
        Ok(new_child)
    }

    /// Detach a child from its parent; the node stays allocated
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        if self.get(parent).is_none() || self.get(child).is_none() {
            return Err(DomError::NotFound);
        }
        if self.node(child).parent != parent {
            return Err(DomError::NotAChild);
        }
        self.detach(child);
        Ok(child)
    }

    fn detach(&mut self, child: NodeId) {
        let (parent, prev, next) = {
            let n = self.node(child);
            (n.parent, n.prev_sibling, n.next_sibling)
        };
        if !parent.is_valid() {
            return;
        }

        if prev.is_valid() {
            self.node_mut(prev).next_sibling = next;
        } else {
            self.node_mut(parent).first_child = next;
        }
        if next.is_valid() {
            self.node_mut(next).prev_sibling = prev;
        } else {
            self.node_mut(parent).last_child = prev;
        }

        let n = self.node_mut(child);
        n.parent = NodeId::NONE;
        n.prev_sibling = NodeId::NONE;
        n.next_sibling = NodeId::NONE;
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the direct children of a node
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.next.is_valid() {
            return None;
        }
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_with_children(tags: &[&str]) -> (DomTree, NodeId, Vec<NodeId>) {
        let mut tree = DomTree::new();
        let parent = tree.create_element("div");
        tree.append_child(tree.root(), parent).unwrap();
        let children = tags
            .iter()
            .map(|tag| {
                let id = tree.create_element(tag);
                tree.append_child(parent, id).unwrap();
                id
            })
            .collect();
        (tree, parent, children)
    }

    #[test]
    fn test_append_links() {
        let (tree, parent, kids) = tree_with_children(&["a", "b", "c"]);

        assert_eq!(tree.first_child_of(parent), Some(kids[0]));
        assert_eq!(tree.last_child_of(parent), Some(kids[2]));
        assert_eq!(tree.next_sibling_of(kids[0]), Some(kids[1]));
        assert_eq!(tree.prev_sibling_of(kids[2]), Some(kids[1]));
        assert_eq!(tree.parent_of(kids[1]), Some(parent));
        assert_eq!(tree.prev_sibling_of(kids[0]), None);
        assert_eq!(tree.next_sibling_of(kids[2]), None);
    }

    #[test]
    fn test_children_iterates_in_order() {
        let (tree, parent, kids) = tree_with_children(&["a", "b", "c"]);

        let ids: Vec<NodeId> = tree.children(parent).map(|(id, _)| id).collect();
        assert_eq!(ids, kids);
    }

    #[test]
    fn test_insert_before_front_and_middle() {
        let (mut tree, parent, kids) = tree_with_children(&["a", "c"]);

        let b = tree.create_element("b");
        tree.insert_before(parent, b, Some(kids[1])).unwrap();
        let front = tree.create_element("z");
        tree.insert_before(parent, front, Some(kids[0])).unwrap();

        let tags: Vec<&str> = tree
            .children(parent)
            .filter_map(|(_, n)| n.as_element().map(|e| e.name.as_str()))
            .collect();
        assert_eq!(tags, ["z", "a", "b", "c"]);
        assert_eq!(tree.first_child_of(parent), Some(front));
    }

    #[test]
    fn test_remove_child_relinks() {
        let (mut tree, parent, kids) = tree_with_children(&["a", "b", "c"]);

        tree.remove_child(parent, kids[1]).unwrap();

        assert_eq!(tree.next_sibling_of(kids[0]), Some(kids[2]));
        assert_eq!(tree.prev_sibling_of(kids[2]), Some(kids[0]));
        assert_eq!(tree.parent_of(kids[1]), None);
    }

    #[test]
    fn test_remove_not_a_child() {
        let (mut tree, parent, _) = tree_with_children(&["a"]);

        let stranger = tree.create_element("b");
        assert_eq!(tree.remove_child(parent, stranger), Err(DomError::NotAChild));
    }

    #[test]
    fn test_append_into_own_subtree_rejected() {
        let (mut tree, parent, kids) = tree_with_children(&["a"]);

        assert_eq!(
            tree.append_child(kids[0], parent),
            Err(DomError::HierarchyRequest)
        );
        assert_eq!(
            tree.append_child(parent, parent),
            Err(DomError::HierarchyRequest)
        );
    }

    #[test]
    fn test_append_to_text_node_rejected() {
        let mut tree = DomTree::new();
        let text = tree.create_text("hi");
        let elem = tree.create_element("span");

        assert_eq!(tree.append_child(text, elem), Err(DomError::InvalidNodeType));
    }

    #[test]
    fn test_reappend_moves_node() {
        let (mut tree, parent, kids) = tree_with_children(&["a", "b"]);

        // Appending an attached node moves it to the end
        tree.append_child(parent, kids[0]).unwrap();

        let ids: Vec<NodeId> = tree.children(parent).map(|(id, _)| id).collect();
        assert_eq!(ids, vec![kids[1], kids[0]]);
    }

    #[test]
    fn test_unknown_id_not_found() {
        let mut tree = DomTree::new();
        let elem = tree.create_element("div");

        assert_eq!(
            tree.append_child(NodeId(999), elem),
            Err(DomError::NotFound)
        );
        assert_eq!(tree.get(NodeId::NONE).map(|_| ()), None);
    }
}
