//! # Funções de Pertinência e Mapeamentos Linguísticos
//!
//! Este módulo define as peças de **fuzzificação** compartilhadas por todos
//! os eixos do sistema (servis, harga e o eixo de saída de kelayakan):
//!
//! - [`Shape`] — uma função de pertinência linear por partes
//! - [`LinguisticLabel`] — um conjunto fechado de rótulos, cada um com sua `Shape`
//! - [`Membership`] — o mapeamento rótulo → [`Degree`] para um valor nítido
//!
//! ## As Três Formas
//!
//! ```text
//!  RampDown             RampUp               Ramps
//!  1 ───╮               1          ╭───      1      ╱╲
//!       │╲                        ╱│               ╱  ╲
//!  0    │ ╰────         0 ──────╯  │         0 ──╱    ╲──
//!      zero-width  zero        zero  zero+width  start    end
//! ```
//!
//! `Ramps` combina dois segmentos com inclinações independentes
//! (`rise` e `fall`). O pico só chega a 1.0 quando os segmentos se cruzam
//! acima de 1 — por isso `Sedang` (harga) fica em ~0.83 no topo.
//!
//! ## Rótulos como Enum
//!
//! Os rótulos são enums fechados ([`ServiceLabel`](crate::inference::fuzzifier::ServiceLabel),
//! [`PriceLabel`](crate::inference::fuzzifier::PriceLabel), [`Suitability`](crate::inference::defuzzifier::Suitability)),
//! não strings. Cada enum declara sua `Shape` via `match` exaustivo, então
//! adicionar um rótulo sem definir sua forma é erro de compilação.

use std::fmt;
use std::marker::PhantomData;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::Degree;

/// Função de pertinência linear por partes.
///
/// Todas as variantes retornam **exatamente 0** fora do intervalo onde
/// estão definidas e são limitadas a `[0, 1]` dentro dele.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// 1 à esquerda, desce linearmente até 0 em `zero`.
    ///
    /// Fórmula: `clamp((zero - x) / width)` para `x <= zero`.
    RampDown { zero: f64, width: f64 },
    /// 0 até `zero`, sobe linearmente até 1 em `zero + width` e satura.
    ///
    /// Fórmula: `clamp((x - zero) / width)` para `x >= zero`.
    RampUp { zero: f64, width: f64 },
    /// Dois segmentos: sobe a partir de `start` com largura `rise`,
    /// desce até `end` com largura `fall`.
    ///
    /// Fórmula: `clamp(min((x - start) / rise, (end - x) / fall))`
    /// para `start <= x <= end`.
    Ramps {
        start: f64,
        rise: f64,
        end: f64,
        fall: f64,
    },
}

impl Shape {
    /// Calcula o grau de pertinência de `x` nesta forma.
    pub fn degree(&self, x: f64) -> Degree {
        match *self {
            Shape::RampDown { zero, width } => {
                if x <= zero {
                    Degree::new((zero - x) / width)
                } else {
                    Degree::ZERO
                }
            }
            Shape::RampUp { zero, width } => {
                if x >= zero {
                    Degree::new((x - zero) / width)
                } else {
                    Degree::ZERO
                }
            }
            Shape::Ramps {
                start,
                rise,
                end,
                fall,
            } => {
                if (start..=end).contains(&x) {
                    Degree::new(((x - start) / rise).min((end - x) / fall))
                } else {
                    Degree::ZERO
                }
            }
        }
    }
}

/// Conjunto fechado de rótulos linguísticos de um eixo.
///
/// Implementado por enums sem dados. `ALL` fixa a ordem canônica,
/// que também é a ordem de serialização e de exibição.
pub trait LinguisticLabel: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Todos os rótulos do eixo, na ordem canônica.
    const ALL: &'static [Self];

    /// Posição do rótulo em `ALL`.
    fn index(self) -> usize;

    /// Nome exibido (ex: `"Sangat Baik"`).
    fn name(self) -> &'static str;

    /// Função de pertinência do rótulo no seu eixo.
    fn shape(self) -> Shape;
}

/// Mapeamento rótulo → grau para um único valor nítido.
///
/// Sempre contém **um grau por rótulo** de `L::ALL`; rótulos não ativados
/// têm grau 0. Serializa como objeto JSON `{ "Buruk": 0.0, "Cukup": 0.5, ... }`.
#[derive(Clone, PartialEq)]
pub struct Membership<L: LinguisticLabel> {
    degrees: Vec<Degree>,
    _labels: PhantomData<L>,
}

impl<L: LinguisticLabel> Membership<L> {
    /// Constrói o mapeamento avaliando `f` para cada rótulo.
    pub fn from_fn(mut f: impl FnMut(L) -> Degree) -> Self {
        Self {
            degrees: L::ALL.iter().map(|&label| f(label)).collect(),
            _labels: PhantomData,
        }
    }

    /// **Fuzzificação** — avalia a `Shape` de cada rótulo em `x`.
    pub fn fuzzify(x: f64) -> Self {
        Self::from_fn(|label| label.shape().degree(x))
    }

    /// Grau de um rótulo específico.
    pub fn degree(&self, label: L) -> Degree {
        self.degrees
            .get(label.index())
            .copied()
            .unwrap_or(Degree::ZERO)
    }

    /// Itera `(rótulo, grau)` na ordem canônica.
    pub fn iter(&self) -> impl Iterator<Item = (L, Degree)> + '_ {
        L::ALL.iter().copied().zip(self.degrees.iter().copied())
    }

    /// Rótulo com maior grau; empates ficam com o primeiro na ordem canônica.
    ///
    /// Retorna `None` quando nenhum rótulo está ativo.
    pub fn dominant(&self) -> Option<L> {
        self.iter()
            .filter(|(_, d)| d.is_active())
            .fold(None, |best: Option<(L, Degree)>, (label, d)| match best {
                Some((_, bd)) if bd >= d => best,
                _ => Some((label, d)),
            })
            .map(|(label, _)| label)
    }

    /// `true` se todos os graus são zero.
    pub fn is_empty(&self) -> bool {
        self.degrees.iter().all(|d| !d.is_active())
    }
}

impl<L: LinguisticLabel> fmt::Debug for Membership<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(l, d)| (l.name(), d.value())))
            .finish()
    }
}

/// Formato compacto `Buruk=0.00 Cukup=0.50 ...` usado nos logs.
impl<L: LinguisticLabel> fmt::Display for Membership<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (label, degree) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", label.name(), degree)?;
            first = false;
        }
        Ok(())
    }
}

impl<L: LinguisticLabel> Serialize for Membership<L> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.degrees.len()))?;
        for (label, degree) in self.iter() {
            map.serialize_entry(label.name(), &degree)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Temp {
        Cold,
        Mild,
        Hot,
    }

    impl LinguisticLabel for Temp {
        const ALL: &'static [Self] = &[Temp::Cold, Temp::Mild, Temp::Hot];

        fn index(self) -> usize {
            self as usize
        }

        fn name(self) -> &'static str {
            match self {
                Temp::Cold => "Cold",
                Temp::Mild => "Mild",
                Temp::Hot => "Hot",
            }
        }

        fn shape(self) -> Shape {
            match self {
                Temp::Cold => Shape::RampDown {
                    zero: 10.0,
                    width: 10.0,
                },
                Temp::Mild => Shape::Ramps {
                    start: 5.0,
                    rise: 10.0,
                    end: 25.0,
                    fall: 10.0,
                },
                Temp::Hot => Shape::RampUp {
                    zero: 20.0,
                    width: 10.0,
                },
            }
        }
    }

    /// RampDown satura em 1 à esquerda e é exatamente 0 depois de `zero`
    #[test]
    fn test_ramp_down() {
        let s = Shape::RampDown {
            zero: 30.0,
            width: 30.0,
        };
        assert_eq!(s.degree(-50.0).value(), 1.0);
        assert_eq!(s.degree(0.0).value(), 1.0);
        assert_eq!(s.degree(15.0).value(), 0.5);
        assert_eq!(s.degree(30.0).value(), 0.0);
        assert_eq!(s.degree(31.0).value(), 0.0);
    }

    /// RampUp é 0 antes de `zero` e satura em 1 depois de `zero + width`
    #[test]
    fn test_ramp_up() {
        let s = Shape::RampUp {
            zero: 70.0,
            width: 30.0,
        };
        assert_eq!(s.degree(69.9).value(), 0.0);
        assert_eq!(s.degree(70.0).value(), 0.0);
        assert_eq!(s.degree(85.0).value(), 0.5);
        assert_eq!(s.degree(100.0).value(), 1.0);
        assert_eq!(s.degree(250.0).value(), 1.0);
    }

    /// Ramps com inclinações diferentes: pico em 70 para (50, 20, 80, 10)
    #[test]
    fn test_ramps_asymmetric_peak() {
        let s = Shape::Ramps {
            start: 50.0,
            rise: 20.0,
            end: 80.0,
            fall: 10.0,
        };
        assert_eq!(s.degree(49.0).value(), 0.0);
        assert_eq!(s.degree(60.0).value(), 0.5);
        assert_eq!(s.degree(70.0).value(), 1.0);
        assert_eq!(s.degree(75.0).value(), 0.5);
        assert_eq!(s.degree(80.0).value(), 0.0);
        assert_eq!(s.degree(81.0).value(), 0.0);
    }

    #[test]
    fn test_fuzzify_and_lookup() {
        let m = Membership::<Temp>::fuzzify(7.5);
        assert_eq!(m.degree(Temp::Cold).value(), 0.25);
        assert_eq!(m.degree(Temp::Mild).value(), 0.25);
        assert_eq!(m.degree(Temp::Hot).value(), 0.0);
        assert_eq!(m.iter().count(), 3);
    }

    /// dominant() escolhe o maior grau, primeiro na ordem em caso de empate
    #[test]
    fn test_dominant() {
        assert_eq!(Membership::<Temp>::fuzzify(0.0).dominant(), Some(Temp::Cold));
        assert_eq!(Membership::<Temp>::fuzzify(7.5).dominant(), Some(Temp::Cold));
        assert_eq!(Membership::<Temp>::fuzzify(15.0).dominant(), Some(Temp::Mild));
        let empty = Membership::<Temp>::from_fn(|_| Degree::ZERO);
        assert!(empty.is_empty());
        assert_eq!(empty.dominant(), None);
    }

    #[test]
    fn test_serialize_as_label_map() {
        let m = Membership::<Temp>::fuzzify(25.0);
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json, serde_json::json!({ "Cold": 0.0, "Mild": 0.0, "Hot": 0.5 }));
    }

    #[test]
    fn test_display() {
        let m = Membership::<Temp>::fuzzify(25.0);
        assert_eq!(m.to_string(), "Cold=0.00 Mild=0.00 Hot=0.50");
    }
}
