// src/state.rs
use chrono::NaiveDate;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Fonte da data "de hoje" usada nos alugueis (rentDate/returnDate).
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Relógio real, na data local do servidor.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Relógio parado numa data; útil em testes de multa por atraso.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, clock: Arc<dyn Clock>) -> Self {
        AppState { db_pool, clock }
    }
}

