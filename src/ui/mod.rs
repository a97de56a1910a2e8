//! UI surfaces for the documentation manager

pub mod browser;
pub mod document_card;
pub mod editor;
