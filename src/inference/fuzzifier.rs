//! # Fuzzificação — Servis e Harga
//!
//! Converte os dois atributos nítidos de um restaurante em graus de
//! pertinência para cada rótulo linguístico.
//!
//! ## Kualitas Servis (`[0, 100]`)
//!
//! ```text
//!  1 ─╮          ╱╲            ╱╲     ╭──
//!     │╲        ╱  ╲          ╱  ╲   ╱
//!     │ ╲      ╱    ╲        ╱    ╲ ╱
//!  0  │  ╰────╱──────╲──────╱──────╳─────
//!     0   20 30  40   50  60    70 80   100
//!     Buruk    Cukup      Baik   Sangat Baik
//! ```
//!
//! | Rótulo | Forma | Pontos |
//! |--------|-------|--------|
//! | Buruk | RampDown | 1 em ≤0, 0 em 30 |
//! | Cukup | Ramps | 0 em 20, 1 em 40, 0 em 60 |
//! | Baik | Ramps | 0 em 50, 1 em 70, 0 em 80 |
//! | Sangat Baik | RampUp | 0 em 70, 1 em ≥100 |
//!
//! ## Harga (moeda)
//!
//! | Rótulo | Forma | Pontos |
//! |--------|-------|--------|
//! | Murah | RampDown | 1 em ≤20000, 0 em 35000 |
//! | Sedang | Ramps | 0 em 25000, topo ~0.83 em 37500, 0 em 50000 |
//! | Mahal | RampUp | 0 em 40000, 1 em ≥55000 |
//!
//! Murah não tem piso: qualquer harga abaixo de 20000 (inclusive negativa)
//! continua com pertinência 1.

use serde::Serialize;

use crate::core::{LinguisticLabel, Membership, Shape};

/// Rótulos linguísticos de kualitas servis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ServiceLabel {
    Buruk,
    Cukup,
    Baik,
    SangatBaik,
}

impl LinguisticLabel for ServiceLabel {
    const ALL: &'static [Self] = &[
        ServiceLabel::Buruk,
        ServiceLabel::Cukup,
        ServiceLabel::Baik,
        ServiceLabel::SangatBaik,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            ServiceLabel::Buruk => "Buruk",
            ServiceLabel::Cukup => "Cukup",
            ServiceLabel::Baik => "Baik",
            ServiceLabel::SangatBaik => "Sangat Baik",
        }
    }

    fn shape(self) -> Shape {
        match self {
            ServiceLabel::Buruk => Shape::RampDown {
                zero: 30.0,
                width: 30.0,
            },
            ServiceLabel::Cukup => Shape::Ramps {
                start: 20.0,
                rise: 20.0,
                end: 60.0,
                fall: 20.0,
            },
            ServiceLabel::Baik => Shape::Ramps {
                start: 50.0,
                rise: 20.0,
                end: 80.0,
                fall: 10.0,
            },
            ServiceLabel::SangatBaik => Shape::RampUp {
                zero: 70.0,
                width: 30.0,
            },
        }
    }
}

/// Rótulos linguísticos de harga.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PriceLabel {
    Murah,
    Sedang,
    Mahal,
}

impl LinguisticLabel for PriceLabel {
    const ALL: &'static [Self] = &[PriceLabel::Murah, PriceLabel::Sedang, PriceLabel::Mahal];

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            PriceLabel::Murah => "Murah",
            PriceLabel::Sedang => "Sedang",
            PriceLabel::Mahal => "Mahal",
        }
    }

    fn shape(self) -> Shape {
        match self {
            PriceLabel::Murah => Shape::RampDown {
                zero: 35_000.0,
                width: 15_000.0,
            },
            PriceLabel::Sedang => Shape::Ramps {
                start: 25_000.0,
                rise: 15_000.0,
                end: 50_000.0,
                fall: 15_000.0,
            },
            PriceLabel::Mahal => Shape::RampUp {
                zero: 40_000.0,
                width: 15_000.0,
            },
        }
    }
}

/// Pertinência de kualitas servis.
pub type ServiceMembership = Membership<ServiceLabel>;

/// Pertinência de harga.
pub type PriceMembership = Membership<PriceLabel>;

/// Fuzzifica a kualitas servis.
pub fn fuzzify_service(servis: f64) -> ServiceMembership {
    Membership::fuzzify(servis)
}

/// Fuzzifica a harga.
pub fn fuzzify_price(harga: f64) -> PriceMembership {
    Membership::fuzzify(harga)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "esperado {expected}, obtido {actual}"
        );
    }

    /// Todos os graus de servis ficam em [0, 1] para todo o domínio
    #[test]
    fn test_service_degrees_bounded() {
        for s in -20..=120 {
            for (_, d) in fuzzify_service(f64::from(s)).iter() {
                assert!((0.0..=1.0).contains(&d.value()), "servis={s}");
            }
        }
    }

    /// Nos pontos de quebra, os graus batem com as formas declaradas
    #[test]
    fn test_service_breakpoints() {
        let at = |s: f64, l: ServiceLabel| fuzzify_service(s).degree(l).value();

        assert_close(at(0.0, ServiceLabel::Buruk), 1.0);
        assert_close(at(20.0, ServiceLabel::Buruk), 1.0 / 3.0);
        assert_close(at(30.0, ServiceLabel::Buruk), 0.0);

        assert_close(at(20.0, ServiceLabel::Cukup), 0.0);
        assert_close(at(30.0, ServiceLabel::Cukup), 0.5);
        assert_close(at(40.0, ServiceLabel::Cukup), 1.0);
        assert_close(at(50.0, ServiceLabel::Cukup), 0.5);
        assert_close(at(60.0, ServiceLabel::Cukup), 0.0);

        assert_close(at(50.0, ServiceLabel::Baik), 0.0);
        assert_close(at(60.0, ServiceLabel::Baik), 0.5);
        assert_close(at(70.0, ServiceLabel::Baik), 1.0);
        assert_close(at(80.0, ServiceLabel::Baik), 0.0);

        assert_close(at(70.0, ServiceLabel::SangatBaik), 0.0);
        assert_close(at(80.0, ServiceLabel::SangatBaik), 1.0 / 3.0);
        assert_close(at(100.0, ServiceLabel::SangatBaik), 1.0);
        assert_close(at(130.0, ServiceLabel::SangatBaik), 1.0);
    }

    /// Cobertura nos pontos de quebra: sempre há pelo menos um rótulo ativo
    #[test]
    fn test_service_coverage() {
        for s in [0.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 100.0] {
            assert!(!fuzzify_service(s).is_empty(), "servis={s} sem cobertura");
        }
        // Fora das funções: grau exatamente zero
        assert_eq!(fuzzify_service(-10.0).degree(ServiceLabel::Cukup).value(), 0.0);
        assert_eq!(fuzzify_service(90.0).degree(ServiceLabel::Baik).value(), 0.0);
        assert_eq!(fuzzify_service(45.0).degree(ServiceLabel::Buruk).value(), 0.0);
    }

    #[test]
    fn test_price_degrees_bounded() {
        for h in (0..=80_000).step_by(500) {
            for (_, d) in fuzzify_price(f64::from(h)).iter() {
                assert!((0.0..=1.0).contains(&d.value()), "harga={h}");
            }
        }
    }

    #[test]
    fn test_price_breakpoints() {
        let at = |h: f64, l: PriceLabel| fuzzify_price(h).degree(l).value();

        assert_close(at(-5_000.0, PriceLabel::Murah), 1.0);
        assert_close(at(20_000.0, PriceLabel::Murah), 1.0);
        assert_close(at(27_500.0, PriceLabel::Murah), 0.5);
        assert_close(at(35_000.0, PriceLabel::Murah), 0.0);

        assert_close(at(25_000.0, PriceLabel::Sedang), 0.0);
        assert_close(at(37_500.0, PriceLabel::Sedang), 12_500.0 / 15_000.0);
        assert_close(at(50_000.0, PriceLabel::Sedang), 0.0);
        assert_close(at(51_000.0, PriceLabel::Sedang), 0.0);

        assert_close(at(40_000.0, PriceLabel::Mahal), 0.0);
        assert_close(at(47_500.0, PriceLabel::Mahal), 0.5);
        assert_close(at(55_000.0, PriceLabel::Mahal), 1.0);
        assert_close(at(90_000.0, PriceLabel::Mahal), 1.0);
    }

    /// Harga tem cobertura contínua: nenhum valor fica sem rótulo ativo
    #[test]
    fn test_price_coverage() {
        for h in (0..=100_000).step_by(1_000) {
            assert!(!fuzzify_price(f64::from(h)).is_empty(), "harga={h}");
        }
    }
}
