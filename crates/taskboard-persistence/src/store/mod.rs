pub mod atomic_writer;
pub mod json_slot_store;
pub mod memory_store;

pub use atomic_writer::AtomicWriter;
pub use json_slot_store::JsonSlotStore;
pub use memory_store::MemoryStore;
