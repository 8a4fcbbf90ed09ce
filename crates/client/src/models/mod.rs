//! Typed mirrors of the upstream JSON schemas.

pub mod chess;
pub mod toggl;
