// src/handlers/mod.rs

pub mod exam;
pub mod page;
pub mod template;
pub mod upload;
