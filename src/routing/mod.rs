//! Tab path resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! A tab's path is resolved independently of the browser location. `pattern`
//! parses and matches paths, `resolver` maps the first matching pattern to a
//! view factory, and `scope` hands the extracted parameters to the view that
//! renders inside the tab.

pub mod pattern;
pub mod resolver;
pub mod scope;
