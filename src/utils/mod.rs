// src/utils/mod.rs

pub mod cookie;
pub mod date;
pub mod html;
pub mod template;
