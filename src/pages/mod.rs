//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! `workspace` and `sign_in` are browser routes. The rest are tab views,
//! registered in `app::view_registry` and rendered inside tabs.

pub mod console;
pub mod project_dashboard;
pub mod project_members;
pub mod sign_in;
pub mod survey_create;
pub mod workspace;
