//! # Módulo Inference — Motor Fuzzy de Kelayakan
//!
//! As três etapas do sistema de inferência fuzzy (estilo Mamdani):
//!
//! ```text
//! servis ──► fuzzify_service ──┐
//!                              ├──► InferenceEngine::infer ──► Defuzzifier::centroid ──► score
//! harga  ──► fuzzify_price   ──┘        (min / max)               (centroide discreto)
//! ```
//!
//! | Etapa | Sub-módulo | Entrada → Saída |
//! |-------|------------|-----------------|
//! | Fuzzificação | [`fuzzifier`] | `f64` → [`ServiceMembership`] / [`PriceMembership`] |
//! | Inferência | [`rules`] | duas pertinências → [`OutputSet`] |
//! | Defuzzificação | [`defuzzifier`] | [`OutputSet`] → `f64` em `[0, 100]` |
//!
//! Funções de pertinência e regras são fixas; não é um motor fuzzy genérico.

pub mod defuzzifier;
pub mod fuzzifier;
pub mod rules;

pub use defuzzifier::{Defuzzifier, OutputSet};
pub use fuzzifier::{fuzzify_price, fuzzify_service, PriceMembership, ServiceMembership};
pub use rules::{FiredRule, InferenceEngine};
