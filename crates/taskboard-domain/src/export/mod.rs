//! Snapshot import/export.
//!
//! A snapshot is the board rendered as a JSON array of stage lists. The same
//! text goes to the durable slot and to exported files.

pub mod exporter;
pub mod importer;
pub mod validation;

pub use exporter::SnapshotExporter;
pub use importer::SnapshotImporter;
pub use validation::validate_shape;
