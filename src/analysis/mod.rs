//! Structure classification and reporting over a graph snapshot.

pub mod classify;
pub mod report;

pub use classify::TreeShape;
pub use report::StructureReport;
