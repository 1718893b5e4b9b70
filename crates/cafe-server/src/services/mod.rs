//! Слой хранения.

pub mod cafe_service;
