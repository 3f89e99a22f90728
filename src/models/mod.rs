// src/models/mod.rs

pub mod exam_record;
pub mod form;
pub mod ranking;
pub mod upload;
