//! SeaORM-сущности сервиса кафе.

pub mod cafes;
