//! Utility modules.

/// Log sanitization utilities to keep upstream payloads out of full logs.
pub mod log_sanitizer;

/// Serde helpers for loosely typed upstream fields.
pub mod serde_helpers;
