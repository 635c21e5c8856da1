//! Invoice module containing order aggregation and invoice snapshots

pub mod aggregate;
pub mod builder;

pub use aggregate::*;
pub use builder::*;
