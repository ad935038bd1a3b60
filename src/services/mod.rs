// Service exports
pub mod postgres;

pub use postgres::{ItemStore, NewItem, StoreError};
