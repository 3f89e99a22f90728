// src/view/mod.rs

pub mod form;
pub mod page;
pub mod primitives;
pub mod tables;
pub mod upload;

pub use page::render_page;
