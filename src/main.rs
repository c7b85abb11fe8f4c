//! # Resto Fuzzy Rank
//!
//! **Ponto de entrada** do sistema de pontuação de restaurantes por lógica
//! fuzzy. Combina kualitas servis e harga em um skor kelayakan via
//! inferência Mamdani e exporta os melhores.
//!
//! ## Modos
//!
//! ```text
//! main()
//!   ├── Configura tracing/logging (RUST_LOG)
//!   ├── Config::from_env()
//!   └── argumento:
//!       ├── (nenhum) | rank → batch:
//!       │     lê planilha → pontua (rayon) → top-N
//!       │     → grava planilha de ranking → imprime tabela
//!       └── serve → HTTP:
//!             carrega ranking inicial (ou vazio) → axum em RESTO_ADDR
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! # Ranking da planilha padrão (data/restoran.json → data/peringkat.json)
//! cargo run
//!
//! # Logs detalhados por registro
//! RUST_LOG=debug cargo run -- rank
//!
//! # Servidor HTTP
//! RESTO_ADDR=127.0.0.1:3000 cargo run -- serve
//! ```

/// Módulo `config` — configuração por variáveis de ambiente.
mod config;

/// Módulo `core` — tipos fundamentais: Degree, Shape, Membership, Record.
mod core;

/// Módulo `error` — erros tipados de fronteira (planilha, configuração).
mod error;

/// Módulo `inference` — fuzzificação, regras e defuzzificação.
mod inference;

/// Módulo `pipeline` — orquestra a pontuação e o ranking.
mod pipeline;

/// Módulo `report` — tabela textual do ranking.
mod report;

/// Módulo `sheet` — leitura e escrita de planilhas.
mod sheet;

/// Módulo `web` — servidor axum, handlers e templates.
mod web;

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::pipeline::{Ranking, ScoringPipeline};
use crate::web::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Aceita RUST_LOG para configurar o nível. Exemplo: RUST_LOG=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("Configuração inválida")?;
    tracing::info!(
        input = %config.input_path.display(),
        top_n = config.top_n,
        resolution = config.resolution,
        lenient = config.lenient,
        "Configuração carregada"
    );

    let mode = std::env::args().nth(1);
    match mode.as_deref() {
        None | Some("rank") => run_batch(config).await,
        Some("serve") => serve(config).await,
        Some(other) => bail!("modo desconhecido: {other} (use `rank` ou `serve`)"),
    }
}

/// Modo batch: planilha → ranking → planilha + console.
async fn run_batch(config: Config) -> Result<()> {
    let scorer = ScoringPipeline::from_config(&config);
    let (config, ranking) = tokio::task::spawn_blocking(move || {
        pipeline::load_ranking(&config, &scorer).map(|ranking| (config, ranking))
    })
    .await
    .context("Tarefa de ranking abortada")??;

    sheet::write_ranking(&config.output_path, &ranking.entries)?;
    print!("{}", report::render_table(&ranking.entries, config.top_n));
    Ok(())
}

/// Modo serve: ranking inicial + servidor axum.
async fn serve(config: Config) -> Result<()> {
    let (config, ranking) = initial_ranking(config).await?;

    let addr = config.bind_addr.clone();
    let app = web::create_router(AppState::new(config, ranking));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Falha ao fazer bind em {addr}"))?;
    tracing::info!(%addr, "🚀 Servidor ouvindo");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Carrega o ranking inicial fora do executor async.
///
/// Sem planilha o servidor sobe vazio; `POST /api/reload` carrega depois.
async fn initial_ranking(config: Config) -> Result<(Config, Ranking)> {
    let scorer = ScoringPipeline::from_config(&config);
    let (config, loaded) = tokio::task::spawn_blocking(move || {
        let loaded = pipeline::load_ranking(&config, &scorer);
        (config, loaded)
    })
    .await
    .context("Tarefa de carga inicial abortada")?;

    let ranking = match loaded {
        Ok(ranking) => ranking,
        Err(e) => {
            tracing::warn!(error = %format!("{e:#}"), "Planilha indisponível, iniciando ranking vazio");
            Ranking::empty()
        }
    };
    Ok((config, ranking))
}
