pub mod engine;
pub mod server;
pub mod store;

pub use engine::Engine;
pub use server::{AppState, Server};
pub use store::{PageStore, StoreError, StoreSnapshot};
