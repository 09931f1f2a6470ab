//! objdom - wrapped-element traversal and selection
//!
//! Gives element handles jQuery-like positional properties (`parent`,
//! `children`, `siblings`, `ancestors`) and selector-filtered traversal
//! methods (`select_first_child`, `select_next_sibling`, `select`). Every
//! operation is a thin delegation to the objdom-dom tree and the
//! objdom-css matcher, re-wrapped on the way out so traversal never hands
//! back a raw node id.
//!
//! Nothing is cached: each property recomputes from the live tree on
//! every access, so results always reflect the current document.

mod element;
mod factory;
mod matching;
mod selection;

pub use element::ObjectElement;
pub use factory::{wrap_element, wrap_elements};
pub use matching::{AsNodeId, match_all, match_first, match_last, matches};

pub use objdom_css::{SelectorError, SelectorList};
pub use objdom_dom::{Document, DomError, DomResult, NodeId};
