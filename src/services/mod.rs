//! Collaborators the matching core delegates to but never depends on directly.

pub mod collaborators;
