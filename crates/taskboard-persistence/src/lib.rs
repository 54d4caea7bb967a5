pub mod adapter;
pub mod session;
pub mod store;
pub mod traits;

pub use adapter::{PersistenceAdapter, PersistenceStatus};
pub use session::BoardSession;
pub use store::*;
pub use traits::*;
