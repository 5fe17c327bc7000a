//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render workspace chrome and the tab content area, reading the
//! tab store and session from Leptos context providers.

pub mod sidebar;
pub mod tab_bar;
pub mod tab_views;
