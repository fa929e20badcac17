//! # lit-core
//!
//! Core types and error definitions for liturgia-rs.
//!
//! This crate provides the foundational pieces shared across the other
//! crates in the workspace: primitive type aliases and the error hierarchy
//! together with the `ensure!` / `ensure_post!` macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `ensure_post!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A civil (proleptic Gregorian) year.
pub type Year = u16;

/// A 1-based week-of-season index; 0 means "not numbered".
pub type WeekIndex = u8;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
