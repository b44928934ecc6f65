// src/models/mod.rs
pub mod category;
pub mod customer;
pub mod game;
pub mod rental;
pub mod validation;
