//! LeetCode site adapters

/// Shared utilities used by both adapters.
pub(crate) mod common;

mod cn;
mod global;

pub use cn::ChinaService;
pub use global::GlobalService;
