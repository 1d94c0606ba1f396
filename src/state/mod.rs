pub mod keys;
pub mod persistence;
pub mod store;

pub use persistence::JsonFileStore;
pub use store::{MemoryStore, StorePort, read_json, write_json};
