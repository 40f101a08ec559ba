//! Point-in-time board export.

pub mod exporter;
pub mod models;

pub use exporter::SnapshotBuilder;
pub use models::{BoardInfo, BoardSnapshot, CardExport, ListExport, MemberExport};
