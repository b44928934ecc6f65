// src/db.rs
use crate::{config::Config, error::AppResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{Sqlite, Transaction};
use std::str::FromStr;
use std::time::Duration;

pub async fn create_db_pool(config: &Config) -> AppResult<SqlitePool> {
    tracing::info!("Ligando à base de dados: {}", config.database_url);

    // Opções de conexão (criar se não existir, timeout, FKs ativas)
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;
    Ok(pool)
}

/// Pool em memória para testes: uma única conexão que nunca é reciclada,
/// senão a base de dados desaparece com ela.
pub async fn create_in_memory_pool() -> AppResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;
    Ok(pool)
}

async fn run_migrations(pool: &SqlitePool) -> AppResult {
    tracing::info!("Executando migrações da base de dados...");
    // Executa os ficheiros SQL em ./migrations (embutidos no binário)
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Migrações concluídas.");
    Ok(())
}

/// Transação de escrita (`BEGIN IMMEDIATE`): o lock de escrita é pedido logo
/// no início, e escritores concorrentes esperam pelo `busy_timeout` em vez de
/// falharem com SQLITE_BUSY ao passar de leitura para escrita.
pub async fn begin_write(pool: &SqlitePool) -> AppResult<Transaction<'static, Sqlite>> {
    Ok(pool.begin_with("BEGIN IMMEDIATE").await?)
}

/// `SELECT 1` contra o pool; usado pelo endpoint de health.
pub async fn health_check(pool: &SqlitePool) -> bool {
    sqlx::query("SELECT 1").execute(pool).await.is_ok()
}
