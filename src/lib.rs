// src/lib.rs

pub mod app_logic;
pub mod core;
pub mod platform_layer;
