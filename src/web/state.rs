//! # Estado da Aplicação Web
//!
//! ```text
//! AppState (Clone, barato)
//!  ├── config   Arc<Config>            imutável
//!  ├── pipeline ScoringPipeline        Copy, sem estado
//!  └── ranking  Arc<RwLock<Ranking>>   escrito só pelo /api/reload
//! ```

use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::Config;
use crate::pipeline::{Ranking, ScoringPipeline};

/// Estado compartilhado entre os handlers Axum.
#[derive(Clone)]
pub struct AppState {
    /// Configuração do processo.
    pub config: Arc<Config>,
    /// Pipeline fuzzy (pura, compartilhável por cópia).
    pub pipeline: ScoringPipeline,
    /// Ranking atual da planilha configurada.
    pub ranking: Arc<RwLock<Ranking>>,
}

impl AppState {
    pub fn new(config: Config, ranking: Ranking) -> Self {
        let pipeline = ScoringPipeline::from_config(&config);
        Self {
            config: Arc::new(config),
            pipeline,
            ranking: Arc::new(RwLock::new(ranking)),
        }
    }
}
