//! # Módulo Core — Tipos Fundamentais
//!
//! Tipos compartilhados por todas as etapas da pipeline fuzzy:
//!
//! - [`Degree`] — grau de pertinência em `[0, 1]` com os conectivos E/OU
//! - [`Shape`] — função de pertinência linear por partes
//! - [`LinguisticLabel`] — conjunto fechado de rótulos de um eixo
//! - [`Membership`] — mapeamento rótulo → grau
//! - [`Record`] / [`ScoredRecord`] — linha de entrada e linha pontuada
//!
//! Nada aqui conhece os rótulos concretos (Buruk, Murah, Layak...);
//! eles vivem em [`crate::inference`].

/// Sub-módulo com [`Degree`].
pub mod degree;

/// Sub-módulo com [`Shape`], [`LinguisticLabel`] e [`Membership`].
pub mod membership;

/// Sub-módulo com [`Record`] e [`ScoredRecord`].
pub mod record;

pub use degree::Degree;
pub use membership::{LinguisticLabel, Membership, Shape};
pub use record::{Record, RecordId, ScoredRecord};
