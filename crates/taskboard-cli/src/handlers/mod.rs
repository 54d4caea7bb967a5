pub mod board;
pub mod export;
pub mod tag;
pub mod task;
