//! Request extractors applied before controllers run.

pub mod extract;
pub mod sharer;
