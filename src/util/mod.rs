//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser and bookkeeping concerns from page and
//! component code so they can be tested natively.

pub mod auth;
pub mod storage;
pub mod tab_actions;
pub mod view_pool;
