// src/web/mod.rs
pub mod category_handlers;
pub mod customer_handlers;
pub mod extract;
pub mod game_handlers;
pub mod health_handlers;
pub mod rental_handlers;
pub mod routes;
