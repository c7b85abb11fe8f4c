//! # Record — Linha de Restaurante
//!
//! [`Record`] é a unidade de entrada do sistema: um restaurante com seus
//! dois atributos nítidos. [`ScoredRecord`] é o mesmo registro acrescido
//! da pontuação de kelayakan produzida pela pipeline.
//!
//! | Campo | Tipo | Origem na planilha |
//! |-------|------|--------------------|
//! | `id` | i64 | coluna `ID Restoran` |
//! | `servis` | f64 | coluna `Kualitas Servis` (~0..100) |
//! | `harga` | f64 | coluna `Harga` (moeda) |
//!
//! Registros são imutáveis depois de lidos: a pipeline só os consome.

use serde::Serialize;

/// Identificador único de um restaurante na planilha.
pub type RecordId = i64;

/// Restaurante lido da planilha, já validado (valores finitos).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Record {
    /// Chave única do restaurante.
    pub id: RecordId,
    /// Kualitas servis, domínio esperado `[0, 100]`.
    pub servis: f64,
    /// Harga em unidades monetárias.
    pub harga: f64,
}

impl Record {
    pub fn new(id: RecordId, servis: f64, harga: f64) -> Self {
        Self { id, servis, harga }
    }
}

/// Registro com a pontuação nítida de kelayakan (nominalmente `[0, 100]`).
///
/// Serializa "achatado": `{ "id": 1, "servis": 80.0, "harga": 20000.0, "score": 80.0 }`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScoredRecord {
    #[serde(flatten)]
    pub record: Record,
    pub score: f64,
}
