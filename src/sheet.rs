//! # Planilhas — Leitura de Restaurantes e Escrita do Ranking
//!
//! Colaborador de I/O da pipeline: converte planilhas em [`Record`]s
//! validados e grava o ranking de volta em planilha.
//!
//! ## Formato
//!
//! Uma planilha é um documento JSON: array de linhas, cada linha um array
//! de células. A linha 0 é o cabeçalho e é ignorada na leitura.
//!
//! ```json
//! [
//!   ["ID Restoran", "Kualitas Servis", "Harga"],
//!   [1, 80, 20000],
//!   [2, 35.5, "42000"]
//! ]
//! ```
//!
//! Colunas por posição: 0 = ID, 1 = servis, 2 = harga. Colunas extras
//! são ignoradas. Números como string (`"42000"`) são aceitos; IDs com
//! parte fracionária não.
//!
//! ## Validação
//!
//! | Modo | Linha inválida |
//! |------|----------------|
//! | [`Validation::Strict`] | falha a leitura inteira com [`InputError`] |
//! | [`Validation::Lenient`] | registra WARN, pula a linha, segue o lote |
//!
//! ## ⚠️ Atomicidade
//!
//! A escrita do ranking **não é atômica** — crash durante a escrita pode
//! deixar o arquivo truncado.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{json, Value};

use crate::core::{Record, RecordId, ScoredRecord};
use crate::error::InputError;

/// Nome da coluna de identificador.
pub const COL_ID: &str = "ID Restoran";
/// Nome da coluna de kualitas servis.
pub const COL_SERVIS: &str = "Kualitas Servis";
/// Nome da coluna de harga.
pub const COL_HARGA: &str = "Harga";
/// Nome da coluna de pontuação na planilha de saída.
pub const COL_SKOR: &str = "Skor Kelayakan";

/// Cabeçalho fixo da planilha de ranking.
pub const RANKING_HEADER: [&str; 4] = [COL_ID, COL_SERVIS, COL_HARGA, COL_SKOR];

/// Política para linhas inválidas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Validation {
    /// Primeira linha inválida falha a leitura.
    #[default]
    Strict,
    /// Linhas inválidas são puladas e reportadas.
    Lenient,
}

impl Validation {
    pub fn from_lenient(lenient: bool) -> Self {
        if lenient {
            Validation::Lenient
        } else {
            Validation::Strict
        }
    }
}

/// Resultado da leitura de uma planilha.
#[derive(Debug, Default)]
pub struct SheetRead {
    /// Registros válidos, na ordem da planilha.
    pub records: Vec<Record>,
    /// Linhas puladas (só no modo leniente).
    pub skipped: Vec<InputError>,
}

/// Valida as linhas de uma planilha já desserializada.
///
/// # Erros
///
/// - [`InputError::EmptySheet`] se não houver nem cabeçalho
/// - no modo estrito, o erro da primeira linha inválida
pub fn parse_rows(rows: &[Vec<Value>], validation: Validation) -> Result<SheetRead, InputError> {
    if rows.is_empty() {
        return Err(InputError::EmptySheet);
    }

    let mut read = SheetRead::default();
    let mut seen: HashMap<RecordId, usize> = HashMap::new();

    // Linha 1 é o cabeçalho; dados começam na linha 2
    for (offset, cells) in rows.iter().enumerate().skip(1) {
        let row = offset + 1;
        let parsed = parse_row(row, cells).and_then(|record| {
            if let Some(&first_row) = seen.get(&record.id) {
                return Err(InputError::DuplicateId {
                    row,
                    id: record.id,
                    first_row,
                });
            }
            Ok(record)
        });

        match parsed {
            Ok(record) => {
                seen.insert(record.id, row);
                read.records.push(record);
            }
            Err(e) if validation == Validation::Lenient => {
                tracing::warn!(row = ?e.row(), error = %e, "Linha inválida ignorada");
                read.skipped.push(e);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(read)
}

/// Lê e valida a planilha de restaurantes em `path`.
///
/// # Erros
///
/// Retorna erro se o arquivo não puder ser lido, não for uma planilha
/// JSON, ou (modo estrito) contiver uma linha inválida.
pub fn read_records(path: &Path, validation: Validation) -> Result<SheetRead> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Falha ao ler {}", path.display()))?;
    let rows: Vec<Vec<Value>> = serde_json::from_str(&json)
        .with_context(|| format!("Falha ao desserializar {}", path.display()))?;
    let read = parse_rows(&rows, validation)
        .with_context(|| format!("Planilha inválida: {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        records = read.records.len(),
        skipped = read.skipped.len(),
        "Planilha lida"
    );
    Ok(read)
}

/// Linhas da planilha de ranking: cabeçalho fixo + uma linha por registro.
pub fn ranking_rows(entries: &[ScoredRecord]) -> Vec<Value> {
    std::iter::once(json!(RANKING_HEADER))
        .chain(entries.iter().map(|e| {
            json!([e.record.id, e.record.servis, e.record.harga, e.score])
        }))
        .collect()
}

/// Grava o ranking em `path` como planilha JSON pretty-printed.
///
/// Cria os diretórios pais se não existirem.
pub fn write_ranking(path: &Path, entries: &[ScoredRecord]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Falha ao criar diretório {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(&ranking_rows(entries))
        .context("Falha ao serializar ranking")?;
    std::fs::write(path, json).with_context(|| format!("Falha ao escrever {}", path.display()))?;

    tracing::info!(path = %path.display(), rows = entries.len(), "Ranking gravado");
    Ok(())
}

// ─── Validação de células ────────────────────────────────────────

fn parse_row(row: usize, cells: &[Value]) -> Result<Record, InputError> {
    let id = parse_id(row, cell(row, cells, 0, COL_ID)?)?;
    let servis = parse_number(row, COL_SERVIS, cell(row, cells, 1, COL_SERVIS)?)?;
    let harga = parse_number(row, COL_HARGA, cell(row, cells, 2, COL_HARGA)?)?;
    Ok(Record::new(id, servis, harga))
}

/// Célula em `index`; ausente ou `null` conta como coluna ausente.
fn cell<'a>(
    row: usize,
    cells: &'a [Value],
    index: usize,
    column: &'static str,
) -> Result<&'a Value, InputError> {
    match cells.get(index) {
        Some(Value::Null) | None => Err(InputError::MissingColumn { row, column }),
        Some(v) => Ok(v),
    }
}

fn parse_number(row: usize, column: &'static str, value: &Value) -> Result<f64, InputError> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if s.trim().is_empty() => {
            return Err(InputError::MissingColumn { row, column });
        }
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    let number = number.ok_or_else(|| InputError::NotNumeric {
        row,
        column,
        value: value.to_string(),
    })?;
    if !number.is_finite() {
        return Err(InputError::NonFinite { row, column });
    }
    Ok(number)
}

fn parse_id(row: usize, value: &Value) -> Result<RecordId, InputError> {
    if let Some(id) = value.as_i64() {
        return Ok(id);
    }
    let number = parse_number(row, COL_ID, value)?;
    // Planilhas exportam inteiros como 3.0
    if number.fract() == 0.0 && number >= i64::MIN as f64 && number < i64::MAX as f64 {
        Ok(number as RecordId)
    } else {
        Err(InputError::NotInteger {
            row,
            value: value.to_string(),
        })
    }
}
