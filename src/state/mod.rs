//! Shared application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each state type is wrapped in an `RwSignal` and provided as context by
//! `App`. `tabs` owns the open-tab workspace, `session` the signed-in user.

pub mod session;
pub mod tabs;
