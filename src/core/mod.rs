//! Core functionality: documents, their persisted store, and configuration

pub mod clock;
pub mod config;
pub mod document;
pub mod error;
pub mod search;
pub mod storage;
pub mod store;
