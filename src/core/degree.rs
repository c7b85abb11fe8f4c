//! # Degree — Grau de Pertinência Fuzzy
//!
//! Um [`Degree`] é o valor que diz **o quanto** um valor nítido pertence a
//! uma categoria linguística. Diferente da lógica clássica (pertence / não
//! pertence), o grau varia continuamente entre 0.0 e 1.0.
//!
//! ## Invariante
//!
//! Todo `Degree` está em `[0, 1]`. O construtor [`Degree::new`] faz o clamp,
//! e os conectivos fuzzy (min/max) são fechados nesse intervalo, então
//! nenhuma operação consegue produzir um grau fora dele.
//!
//! ## Conectivos
//!
//! | Operação | Lógica | Fórmula |
//! |----------|--------|---------|
//! | [`and`](Degree::and) | E (t-norma de Zadeh) | `min(a, b)` |
//! | [`or`](Degree::or) | OU (t-conorma de Zadeh) | `max(a, b)` |
//!
//! ## Exemplo
//!
//! ```rust
//! let baik = Degree::new(0.75);
//! let murah = Degree::new(1.0);
//! assert_eq!(baik.and(murah).value(), 0.75);
//! assert_eq!(baik.or(murah).value(), 1.0);
//! ```

use std::fmt;

use serde::Serialize;

/// Grau de pertinência em `[0, 1]`.
///
/// Serializado como o próprio número (`0.75`), sem envelope.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Degree(f64);

impl Degree {
    /// Pertinência nula — o valor não pertence à categoria.
    pub const ZERO: Degree = Degree(0.0);

    /// Cria um grau a partir de um valor bruto, limitado a `[0, 1]`.
    ///
    /// `NaN` vira 0.0: um valor indefinido não conta como evidência.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Retorna o valor numérico do grau.
    pub fn value(self) -> f64 {
        self.0
    }

    /// **E fuzzy** — mínimo dos dois graus.
    pub fn and(self, other: Degree) -> Degree {
        Degree(self.0.min(other.0))
    }

    /// **OU fuzzy** — máximo dos dois graus.
    pub fn or(self, other: Degree) -> Degree {
        Degree(self.0.max(other.0))
    }

    /// `true` quando o grau é estritamente positivo.
    pub fn is_active(self) -> bool {
        self.0 > 0.0
    }
}

/// Formato com duas casas decimais, ex: `0.75`.
impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
