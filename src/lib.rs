pub mod api;
pub mod blocks;
pub mod cli;
pub mod core;
pub mod models;
pub mod theme;
pub mod utils;

// Re-export commonly used types and traits
pub use crate::blocks::{Block, FieldError, ValidationError};
pub use crate::core::{Engine, PageStore, StoreError};
pub use crate::models::{Config, LandingPage, PageId};
