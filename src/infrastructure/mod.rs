//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod export;
pub mod media_store;
pub mod repository;
pub mod timestamps;

pub use config::Config;
pub use export::load_export;
pub use media_store::{MediaLibrary, MediaStore};
pub use repository::VaultRepository;
