pub mod board;
pub mod commands;
pub mod export;
pub mod field_update;
pub mod filter;
pub mod operations;
pub mod search;
pub mod stage_list;
pub mod store;
pub mod task;
pub mod views;

pub use board::{Board, Direction};
pub use commands::Command;
pub use export::{SnapshotExporter, SnapshotImporter};
pub use field_update::FieldUpdate;
pub use filter::{CompositeFilter, TagFilter, TaskFilter};
pub use operations::BoardOperations;
pub use search::NameSearch;
pub use stage_list::{ListId, StageList};
pub use store::BoardStore;
pub use task::{Task, TaskId, TaskUpdate};
pub use views::{CompletionSummary, DueTask, ListTaskCount, ListedTask};
