// src/main.rs
use locadora::{
    config::Config,
    db,
    state::{AppState, SystemClock},
    web,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Configuração do Logging (Tracing) ---
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "locadora=debug,tower_http=info,sqlx=warn".into()),
        )
        .with(fmt::layer())
        .init();

    tracing::info!("🚀 Iniciando servidor da locadora...");

    let config = Config::from_env()
        .map_err(|e| anyhow::anyhow!("Configuração inválida: {}", e))?;

    // --- Configuração da Base de Dados ---
    let db_pool = match db::create_db_pool(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("❌ Falha crítica ao inicializar a base de dados: {}", e);
            return Err(anyhow::anyhow!("Falha ao conectar/migrar DB: {}", e));
        }
    };

    let app_state = AppState::new(db_pool.clone(), Arc::new(SystemClock));
    let app = web::routes::create_app(app_state);

    // --- Configuração do Endereço e Listener ---
    let addr = config.socket_addr()?;
    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("❌ Falha ao iniciar listener em {}: {}", addr, e);
            return Err(e.into());
        }
    };
    tracing::info!("📡 Servidor escutando em http://{}", addr);

    // --- Início do Servidor ---
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("❌ Erro fatal no servidor: {}", e);
        return Err(e.into());
    }

    db_pool.close().await;
    tracing::info!("👋 Servidor encerrado.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Falha ao escutar Ctrl-C: {}", e);
    }
    tracing::info!("Sinal de encerramento recebido.");
}
