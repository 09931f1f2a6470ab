//! Selector-filtered traversal
//!
//! Each method composes a positional property with a matching primitive.
//! "Nearest preceding match" is the last match over `prev_siblings()`,
//! which is already in document order; "nearest following match" is the
//! first match over `next_siblings()`.

use objdom_css::{SelectorError, SelectorList};

use crate::element::descendant_element_ids;
use crate::{ObjectElement, factory, matching};

impl<'d> ObjectElement<'d> {
    /// Match this element against a selector
    pub fn matches(&self, selector: &str) -> Result<bool, SelectorError> {
        matching::matches(self.doc, self, selector)
    }

    /// Nearest preceding sibling matching the selector
    pub fn select_prev_sibling(
        &self,
        selector: &str,
    ) -> Result<Option<ObjectElement<'d>>, SelectorError> {
        let prevs = self.prev_siblings();
        matching::match_last(self.doc, &prevs, selector)
    }

    /// Nearest following sibling matching the selector
    pub fn select_next_sibling(
        &self,
        selector: &str,
    ) -> Result<Option<ObjectElement<'d>>, SelectorError> {
        let nexts = self.next_siblings();
        matching::match_first(self.doc, &nexts, selector)
    }

    /// Alias of `select_prev_sibling`
    pub fn prev(&self, selector: &str) -> Result<Option<ObjectElement<'d>>, SelectorError> {
        self.select_prev_sibling(selector)
    }

    /// Alias of `select_next_sibling`
    pub fn next(&self, selector: &str) -> Result<Option<ObjectElement<'d>>, SelectorError> {
        self.select_next_sibling(selector)
    }

    /// All preceding siblings matching the selector, document order
    pub fn select_prev_siblings(
        &self,
        selector: &str,
    ) -> Result<Vec<ObjectElement<'d>>, SelectorError> {
        let prevs = self.prev_siblings();
        matching::match_all(self.doc, &prevs, selector)
    }

    /// All following siblings matching the selector, document order
    pub fn select_next_siblings(
        &self,
        selector: &str,
    ) -> Result<Vec<ObjectElement<'d>>, SelectorError> {
        let nexts = self.next_siblings();
        matching::match_all(self.doc, &nexts, selector)
    }

    /// All siblings matching the selector: preceding then following
    pub fn select_siblings(
        &self,
        selector: &str,
    ) -> Result<Vec<ObjectElement<'d>>, SelectorError> {
        let mut out = self.select_prev_siblings(selector)?;
        out.extend(self.select_next_siblings(selector)?);
        Ok(out)
    }

    /// Element children matching the selector, or all of them when the
    /// selector is `None` or empty
    pub fn select_children(
        &self,
        selector: Option<&str>,
    ) -> Result<Vec<ObjectElement<'d>>, SelectorError> {
        let children = self.children();
        match selector {
            Some(s) if !s.is_empty() => matching::match_all(self.doc, &children, s),
            _ => Ok(children),
        }
    }

    /// First element child matching the selector
    pub fn select_first_child(
        &self,
        selector: &str,
    ) -> Result<Option<ObjectElement<'d>>, SelectorError> {
        let children = self.children();
        let found = matching::match_first(self.doc, &children, selector)?;
        // the match result goes through the factory, absent or not
        Ok(factory::wrap_element(self.doc, found.map(|e| e.node_id())))
    }

    /// Last element child matching the selector
    pub fn select_last_child(
        &self,
        selector: &str,
    ) -> Result<Option<ObjectElement<'d>>, SelectorError> {
        let children = self.children();
        let found = matching::match_last(self.doc, &children, selector)?;
        Ok(factory::wrap_element(self.doc, found.map(|e| e.node_id())))
    }

    /// All descendant elements matching the selector, document order
    pub fn select(&self, selector: &str) -> Result<Vec<ObjectElement<'d>>, SelectorError> {
        let list = SelectorList::parse(selector)?;
        let matched: Vec<_> = descendant_element_ids(self.doc, self.id)
            .into_iter()
            .filter(|id| list.matches(self.doc, *id))
            .collect();

        tracing::debug!("select {:?}: {} matches", selector, matched.len());
        Ok(factory::wrap_elements(self.doc, matched))
    }

    /// First matching descendant at any depth
    pub fn select_first(
        &self,
        selector: &str,
    ) -> Result<Option<ObjectElement<'d>>, SelectorError> {
        let list = SelectorList::parse(selector)?;
        let found = descendant_element_ids(self.doc, self.id)
            .into_iter()
            .find(|id| list.matches(self.doc, *id));
        Ok(factory::wrap_element(self.doc, found))
    }

    /// Last matching descendant at any depth
    pub fn select_last(
        &self,
        selector: &str,
    ) -> Result<Option<ObjectElement<'d>>, SelectorError> {
        let mut all = self.select(selector)?;
        Ok(all.pop())
    }
}
