// src/lib.rs
//! API de uma locadora de jogos de tabuleiro: categorias, jogos, clientes e
//! alugueis sobre SQLite, expostos por HTTP/JSON.
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod web;
