// src/utils/mod.rs

pub mod cookie;
pub mod html;
pub mod jwt;
pub mod template;
