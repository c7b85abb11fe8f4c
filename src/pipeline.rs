//! # Pipeline de Pontuação
//!
//! O [`ScoringPipeline`] orquestra as etapas do motor fuzzy para cada
//! restaurante e depois monta o ranking.
//!
//! ## Fluxo
//!
//! ```text
//! Vec<Record>
//!   │
//!   ├── 1. par_iter (rayon) — cada registro, independente:
//!   │      fuzzify_service + fuzzify_price
//!   │      → InferenceEngine::infer
//!   │      → Defuzzifier::centroid
//!   │      = ScoredRecord
//!   │
//!   ├── 2. collect preservando a ordem de entrada
//!   │
//!   └── 3. sort estável por score decrescente → truncate(top_n)
//! ```
//!
//! ## Concorrência
//!
//! Cada avaliação é função pura do próprio registro: não há estado mutável
//! compartilhado. O `collect` do rayon grava cada resultado no slot do seu
//! índice, então a ordem de entrada chega intacta ao sort estável e
//! empates de score mantêm a ordem original.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::Serialize;

use crate::config::Config;
use crate::core::{LinguisticLabel, Record, ScoredRecord};
use crate::inference::{
    fuzzify_price, fuzzify_service, Defuzzifier, FiredRule, InferenceEngine, OutputSet,
    PriceMembership, ServiceMembership,
};
use crate::sheet::{self, Validation};

/// Trace completo da avaliação de um par (servis, harga).
///
/// Expõe cada valor intermediário para explicar a pontuação.
#[derive(Clone, Debug, Serialize)]
pub struct Evaluation {
    pub servis: f64,
    pub harga: f64,
    /// Pertinência de kualitas servis.
    pub service: ServiceMembership,
    /// Pertinência de harga.
    pub price: PriceMembership,
    /// Força de cada rótulo de saída após a inferência.
    pub output: OutputSet,
    /// Regras com sua força de disparo, na ordem da tabela.
    pub rules: Vec<FiredRule>,
    /// Pontuação nítida de kelayakan.
    pub score: f64,
}

/// Resultado de uma rodada de ranking.
#[derive(Clone, Debug, Serialize)]
pub struct Ranking {
    /// Momento em que o ranking foi calculado.
    pub generated_at: DateTime<Utc>,
    /// Quantos registros foram avaliados.
    pub evaluated: usize,
    /// Os melhores registros, em ordem decrescente de score.
    pub entries: Vec<ScoredRecord>,
}

impl Ranking {
    /// Ranking vazio — usado antes da primeira carga no modo `serve`.
    pub fn empty() -> Self {
        Self {
            generated_at: Utc::now(),
            evaluated: 0,
            entries: Vec::new(),
        }
    }
}

/// Orquestrador da pontuação fuzzy.
#[derive(Clone, Copy, Debug)]
pub struct ScoringPipeline {
    defuzzifier: Defuzzifier,
    top_n: usize,
}

impl Default for ScoringPipeline {
    fn default() -> Self {
        Self::new(Defuzzifier::default(), crate::config::DEFAULT_TOP_N)
    }
}

impl ScoringPipeline {
    pub fn new(defuzzifier: Defuzzifier, top_n: usize) -> Self {
        Self { defuzzifier, top_n }
    }

    /// Monta a pipeline com a resolução e o top-N da configuração.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Defuzzifier::new(config.resolution), config.top_n)
    }

    /// Tamanho máximo do ranking.
    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Avalia um par (servis, harga) retornando o trace completo.
    pub fn evaluate(&self, servis: f64, harga: f64) -> Evaluation {
        let service = fuzzify_service(servis);
        let price = fuzzify_price(harga);
        let output = InferenceEngine::infer(&service, &price);
        let rules = InferenceEngine::explain(&service, &price);
        let score = self.defuzzifier.centroid(&output);

        Evaluation {
            servis,
            harga,
            service,
            price,
            output,
            rules,
            score,
        }
    }

    /// Pontua um registro.
    pub fn score(&self, record: &Record) -> ScoredRecord {
        let service = fuzzify_service(record.servis);
        let price = fuzzify_price(record.harga);
        let output = InferenceEngine::infer(&service, &price);
        let score = self.defuzzifier.centroid(&output);

        if output.is_empty() {
            tracing::debug!(id = record.id, "Nenhuma regra disparou, score 0");
        }
        tracing::debug!(
            id = record.id,
            servis = record.servis,
            harga = record.harga,
            service = %service,
            price = %price,
            output = %output,
            dominant = ?output.dominant().map(|l| l.name()),
            score,
            "Registro avaliado"
        );

        ScoredRecord {
            record: record.clone(),
            score,
        }
    }

    /// Pontua todos os registros em paralelo, preservando a ordem de entrada.
    pub fn score_all(&self, records: &[Record]) -> Vec<ScoredRecord> {
        records.par_iter().map(|r| self.score(r)).collect()
    }

    /// Pontua e ranqueia: os `top_n` melhores em ordem decrescente.
    pub fn rank(&self, records: &[Record]) -> Ranking {
        let scored = self.score_all(records);
        let evaluated = scored.len();
        let entries = top_n(scored, self.top_n);

        tracing::info!(
            evaluated,
            ranked = entries.len(),
            resolution = self.defuzzifier.resolution(),
            "Ranking calculado"
        );

        Ranking {
            generated_at: Utc::now(),
            evaluated,
            entries,
        }
    }
}

/// Lê a planilha configurada e calcula o ranking.
///
/// Usado pelo modo batch e pelo `POST /api/reload`.
///
/// # Erros
///
/// Propaga falhas de leitura/validação da planilha.
pub fn load_ranking(config: &Config, pipeline: &ScoringPipeline) -> anyhow::Result<Ranking> {
    let read = sheet::read_records(&config.input_path, Validation::from_lenient(config.lenient))?;
    if !read.skipped.is_empty() {
        tracing::warn!(skipped = read.skipped.len(), "Linhas ignoradas na planilha");
    }
    Ok(pipeline.rank(&read.records))
}

/// Ordena por score decrescente (estável) e mantém os `n` primeiros.
///
/// Empates preservam a ordem de entrada.
pub fn top_n(mut scored: Vec<ScoredRecord>, n: usize) -> Vec<ScoredRecord> {
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(n);
    scored
}
