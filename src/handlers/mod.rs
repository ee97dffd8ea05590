// src/handlers/mod.rs

pub mod health;
pub mod page;
pub mod quiz;
