//! # Regras de Inferência Fuzzy
//!
//! Tabela fixa de regras que combina a pertinência de servis e de harga
//! em um conjunto fuzzy de saída (kelayakan).
//!
//! ## Base de Regras
//!
//! ```text
//! R1: SE Servis Buruk       OU Harga Mahal  ENTÃO Tidak Layak
//! R2: SE Servis Cukup       E  Harga Sedang ENTÃO Cukup Layak
//! R3: SE Servis Baik        E  Harga Murah  ENTÃO Layak
//! R4: SE Servis Sangat Baik E  Harga Murah  ENTÃO Sangat Layak
//! ```
//!
//! - **E** → `min` (t-norma de Zadeh)
//! - **OU** → `max` (t-conorma de Zadeh)
//!
//! Cada regra produz um rótulo de saída distinto, então não há prioridade
//! entre regras. Se duas regras apontassem para o mesmo rótulo, seus graus
//! seriam agregados por `max`.
//!
//! ## Contrato
//!
//! [`InferenceEngine::infer`] é uma função pura das duas pertinências:
//! sem estado, sem efeitos colaterais. Como min/max são fechados em
//! `[0, 1]`, todo grau de saída também está em `[0, 1]`.

use std::fmt;

use super::defuzzifier::{OutputSet, Suitability};
use super::fuzzifier::{PriceLabel, PriceMembership, ServiceLabel, ServiceMembership};
use crate::core::{Degree, LinguisticLabel};

/// Conectivo lógico entre o antecedente de servis e o de harga.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connective {
    /// E fuzzy — `min`.
    And,
    /// OU fuzzy — `max`.
    Or,
}

impl Connective {
    /// Aplica o conectivo a dois graus.
    pub fn apply(self, a: Degree, b: Degree) -> Degree {
        match self {
            Connective::And => a.and(b),
            Connective::Or => a.or(b),
        }
    }

    /// Palavra usada nas explicações.
    pub fn label(self) -> &'static str {
        match self {
            Connective::And => "E",
            Connective::Or => "OU",
        }
    }
}

/// Uma regra `SE servis <conectivo> harga ENTÃO saída`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    pub service: ServiceLabel,
    pub connective: Connective,
    pub price: PriceLabel,
    pub output: Suitability,
}

impl Rule {
    /// Força de disparo da regra para as pertinências dadas.
    pub fn strength(&self, service: &ServiceMembership, price: &PriceMembership) -> Degree {
        self.connective
            .apply(service.degree(self.service), price.degree(self.price))
    }
}

/// Formato legível: `SE Servis Buruk OU Harga Mahal ENTÃO Tidak Layak`.
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SE Servis {} {} Harga {} ENTÃO {}",
            self.service.name(),
            self.connective.label(),
            self.price.name(),
            self.output.name()
        )
    }
}

/// Base de regras fixa do domínio.
pub const RULES: [Rule; 4] = [
    Rule {
        service: ServiceLabel::Buruk,
        connective: Connective::Or,
        price: PriceLabel::Mahal,
        output: Suitability::TidakLayak,
    },
    Rule {
        service: ServiceLabel::Cukup,
        connective: Connective::And,
        price: PriceLabel::Sedang,
        output: Suitability::CukupLayak,
    },
    Rule {
        service: ServiceLabel::Baik,
        connective: Connective::And,
        price: PriceLabel::Murah,
        output: Suitability::Layak,
    },
    Rule {
        service: ServiceLabel::SangatBaik,
        connective: Connective::And,
        price: PriceLabel::Murah,
        output: Suitability::SangatLayak,
    },
];

/// Uma regra disparada, com sua força e explicação.
///
/// Usada no trace de avaliação para mostrar **por que** um restaurante
/// recebeu a pontuação que recebeu.
#[derive(Clone, Debug, serde::Serialize)]
pub struct FiredRule {
    /// Texto da regra (ver `Display` de [`Rule`]).
    pub rule: String,
    /// Força de disparo.
    pub strength: Degree,
}

/// Motor de inferência — struct sem estado.
///
/// ## Uso
///
/// ```rust
/// let saida = InferenceEngine::infer(&fuzzify_service(80.0), &fuzzify_price(20_000.0));
/// assert!(saida.degree(Suitability::SangatLayak).is_active());
/// ```
pub struct InferenceEngine;

impl InferenceEngine {
    /// Avalia todas as regras e agrega por rótulo de saída.
    pub fn infer(service: &ServiceMembership, price: &PriceMembership) -> OutputSet {
        OutputSet::from_fn(|output| {
            RULES
                .iter()
                .filter(|rule| rule.output == output)
                .fold(Degree::ZERO, |acc, rule| {
                    acc.or(rule.strength(service, price))
                })
        })
    }

    /// Lista cada regra com sua força de disparo, na ordem da tabela.
    pub fn explain(service: &ServiceMembership, price: &PriceMembership) -> Vec<FiredRule> {
        RULES
            .iter()
            .map(|rule| FiredRule {
                rule: rule.to_string(),
                strength: rule.strength(service, price),
            })
            .collect()
    }
}
