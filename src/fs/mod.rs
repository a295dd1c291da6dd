//! Filesystem plumbing: the provider boundary, tree materialization,
//! recursive copy/move/delete helpers and drive enumeration.

pub mod drives;
pub mod provider;
pub mod tree;
pub mod utils;
