//! Session persistence for the payroll calculator.
//!
//! The store is a plain key-value contract: values are the JSON
//! serialization of the in-memory structures, read once at startup and
//! rewritten in full after every mutation. Backends are injected, so the
//! session layer is testable against [`MemoryStore`] and runs against
//! [`FileStore`] in the application.

mod file;
mod memory;
mod rate_tables;
mod session;
mod store;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use rate_tables::{load_rate_tables, save_rate_tables};
pub use session::{keys, Session};
pub use store::{SessionStore, StoreError};
