//! # Defuzzificação — Método do Centroide
//!
//! Converte o conjunto fuzzy de saída (graus de cada rótulo de kelayakan)
//! em **uma** pontuação nítida no universo `[0, 100]`.
//!
//! ## Funções de Saída
//!
//! | Rótulo | Forma | Suporte | Topo |
//! |--------|-------|---------|------|
//! | Tidak Layak | RampDown | 0..30 | 1.0 em 0 |
//! | Cukup Layak | Ramps | 20..50 | 1.0 em 35 |
//! | Layak | Ramps | 40..70 | 1.0 em 55 |
//! | Sangat Layak | Ramps | 60..100 | 0.5 em 80 |
//!
//! ## Algoritmo
//!
//! ```text
//! para x = 0, 1, 2, ..., 100:
//!     μ(x) = max over rótulo ( min(forma_rótulo(x), grau_rótulo) )
//!     area     += μ(x)
//!     momento  += x · μ(x)
//!
//! score = momento / area      (0 se area == 0)
//! ```
//!
//! O passo de amostragem (1 unidade, 101 pontos) é constante e afeta o
//! valor final; a resolução padrão reproduz exatamente os scores
//! históricos. Resoluções maiores ([`Defuzzifier::new`]) aproximam melhor a
//! integral contínua, mas mudam os resultados de forma mensurável.

use serde::Serialize;

use crate::core::{Degree, LinguisticLabel, Membership, Shape};

/// Limite inferior do universo de saída.
pub const UNIVERSE_MIN: f64 = 0.0;

/// Limite superior do universo de saída.
pub const UNIVERSE_MAX: f64 = 100.0;

/// Amostras por unidade usadas por padrão (passo = 1).
pub const DEFAULT_RESOLUTION: u32 = 1;

/// Resolução máxima aceita (100 001 amostras por avaliação).
pub const MAX_RESOLUTION: u32 = 1000;

/// Rótulos de kelayakan (eixo de saída).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Suitability {
    TidakLayak,
    CukupLayak,
    Layak,
    SangatLayak,
}

impl LinguisticLabel for Suitability {
    const ALL: &'static [Self] = &[
        Suitability::TidakLayak,
        Suitability::CukupLayak,
        Suitability::Layak,
        Suitability::SangatLayak,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            Suitability::TidakLayak => "Tidak Layak",
            Suitability::CukupLayak => "Cukup Layak",
            Suitability::Layak => "Layak",
            Suitability::SangatLayak => "Sangat Layak",
        }
    }

    fn shape(self) -> Shape {
        match self {
            Suitability::TidakLayak => Shape::RampDown {
                zero: 30.0,
                width: 30.0,
            },
            Suitability::CukupLayak => Shape::Ramps {
                start: 20.0,
                rise: 15.0,
                end: 50.0,
                fall: 15.0,
            },
            Suitability::Layak => Shape::Ramps {
                start: 40.0,
                rise: 15.0,
                end: 70.0,
                fall: 15.0,
            },
            Suitability::SangatLayak => Shape::Ramps {
                start: 60.0,
                rise: 40.0,
                end: 100.0,
                fall: 40.0,
            },
        }
    }
}

/// Conjunto fuzzy de saída: força de cada rótulo de kelayakan.
pub type OutputSet = Membership<Suitability>;

/// Defuzzificador por centroide discretizado.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Defuzzifier {
    /// Amostras por unidade do universo (≥ 1).
    resolution: u32,
}

impl Default for Defuzzifier {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

impl Defuzzifier {
    /// Cria um defuzzificador com `resolution` amostras por unidade.
    ///
    /// Resolução 0 é tratada como 1; acima de [`MAX_RESOLUTION`] é limitada.
    pub fn new(resolution: u32) -> Self {
        Self {
            resolution: resolution.clamp(1, MAX_RESOLUTION),
        }
    }

    /// Amostras por unidade.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Número de pontos amostrados no universo (101 na resolução padrão).
    pub fn sample_count(&self) -> u64 {
        (UNIVERSE_MAX - UNIVERSE_MIN) as u64 * u64::from(self.resolution) + 1
    }

    /// Pertinência agregada em `x`: cada forma de saída recortada (min)
    /// pelo grau da sua regra, combinadas por max.
    pub fn aggregate_at(&self, output: &OutputSet, x: f64) -> Degree {
        Suitability::ALL.iter().fold(Degree::ZERO, |acc, &label| {
            acc.or(label.shape().degree(x).and(output.degree(label)))
        })
    }

    /// Centroide do conjunto agregado.
    ///
    /// Retorna exatamente 0.0 quando a área total é zero (nenhuma regra
    /// disparou), em vez de dividir por zero.
    pub fn centroid(&self, output: &OutputSet) -> f64 {
        let resolution = f64::from(self.resolution);
        let mut total_area = 0.0;
        let mut weighted_sum = 0.0;

        for i in 0..self.sample_count() {
            let x = UNIVERSE_MIN + i as f64 / resolution;
            let membership = self.aggregate_at(output, x).value();
            total_area += membership;
            weighted_sum += x * membership;
        }

        if total_area == 0.0 {
            return 0.0;
        }
        weighted_sum / total_area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(tl: f64, cl: f64, l: f64, sl: f64) -> OutputSet {
        OutputSet::from_fn(|label| {
            Degree::new(match label {
                Suitability::TidakLayak => tl,
                Suitability::CukupLayak => cl,
                Suitability::Layak => l,
                Suitability::SangatLayak => sl,
            })
        })
    }

    #[test]
    fn test_default_samples_101_points() {
        assert_eq!(Defuzzifier::default().sample_count(), 101);
        assert_eq!(Defuzzifier::new(4).sample_count(), 401);
        assert_eq!(Defuzzifier::new(0).resolution(), 1);
        assert_eq!(Defuzzifier::new(u32::MAX).resolution(), MAX_RESOLUTION);
    }

    /// Todas as regras em zero ⇒ score exatamente 0
    #[test]
    fn test_zero_area_returns_zero() {
        let d = Defuzzifier::default();
        assert_eq!(d.centroid(&output(0.0, 0.0, 0.0, 0.0)), 0.0);
        assert_eq!(Defuzzifier::new(10).centroid(&output(0.0, 0.0, 0.0, 0.0)), 0.0);
    }

    /// Só Tidak Layak em 1: centroide de (30 - x)/30 em x = 0..30
    #[test]
    fn test_tidak_layak_only() {
        let score = Defuzzifier::default().centroid(&output(1.0, 0.0, 0.0, 0.0));
        // Σ x(30-x) / Σ (30-x) = 4495 / 465
        assert!((score - 4495.0 / 465.0).abs() < 1e-9, "score={score}");
    }

    /// Sangat Layak é simétrico em torno de 80, logo o centroide é 80
    #[test]
    fn test_sangat_layak_symmetric() {
        for sl in [0.2, 1.0 / 3.0, 0.5, 1.0] {
            let score = Defuzzifier::default().centroid(&output(0.0, 0.0, 0.0, sl));
            assert!((score - 80.0).abs() < 1e-9, "sl={sl} score={score}");
        }
    }

    /// Layak e Cukup Layak isolados têm centroide no pico
    #[test]
    fn test_single_triangles_center_on_peak() {
        let d = Defuzzifier::default();
        assert!((d.centroid(&output(0.0, 1.0, 0.0, 0.0)) - 35.0).abs() < 1e-9);
        assert!((d.centroid(&output(0.0, 0.0, 1.0, 0.0)) - 55.0).abs() < 1e-9);
    }

    /// Aumentar Sangat Layak (demais fixos) nunca reduz o score
    #[test]
    fn test_monotonic_in_sangat_layak() {
        let d = Defuzzifier::default();
        let mut previous = f64::NEG_INFINITY;
        for step in 0..=20 {
            let sl = f64::from(step) / 20.0;
            let score = d.centroid(&output(0.6, 0.4, 0.0, sl));
            assert!(score >= previous - 1e-12, "sl={sl}: {score} < {previous}");
            previous = score;
        }
    }

    /// O score sempre fica dentro do universo
    #[test]
    fn test_score_within_universe() {
        let d = Defuzzifier::default();
        for tl in [0.0, 0.3, 1.0] {
            for l in [0.0, 0.5, 1.0] {
                for sl in [0.0, 0.4, 1.0] {
                    let score = d.centroid(&output(tl, 0.2, l, sl));
                    assert!((UNIVERSE_MIN..=UNIVERSE_MAX).contains(&score));
                }
            }
        }
    }

    /// Resolução maior muda pouco o score, mas não o torna idêntico
    #[test]
    fn test_finer_resolution_is_close() {
        let set = output(0.4, 0.7, 0.2, 0.0);
        let coarse = Defuzzifier::default().centroid(&set);
        let fine = Defuzzifier::new(10).centroid(&set);
        assert!((coarse - fine).abs() < 1.0, "coarse={coarse} fine={fine}");
    }
}
