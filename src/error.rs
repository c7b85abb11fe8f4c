//! # Erros de Fronteira
//!
//! A pipeline fuzzy é infalível: recebe registros já validados e trata a
//! área zero localmente. Os erros tipados existem só nas fronteiras:
//!
//! | Tipo | Onde | Exemplo |
//! |------|------|---------|
//! | [`InputError`] | leitura da planilha | `linha 4, coluna Harga: valor não numérico "abc"` |
//! | [`ConfigError`] | variáveis de ambiente | `RESTO_TOP_N inválido: "dez"` |
//!
//! Erros de I/O de arquivo e de processo usam `anyhow` com contexto
//! (ver [`crate::sheet`] e `main`).

use thiserror::Error;

use crate::core::RecordId;

/// Falha de validação de uma linha da planilha de entrada.
///
/// `row` é a linha da planilha em base 1, contando o cabeçalho
/// (a primeira linha de dados é a linha 2).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("planilha vazia: nenhuma linha de cabeçalho")]
    EmptySheet,

    #[error("linha {row}: coluna {column} ausente")]
    MissingColumn { row: usize, column: &'static str },

    #[error("linha {row}, coluna {column}: valor não numérico {value}")]
    NotNumeric {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("linha {row}, coluna {column}: valor não finito")]
    NonFinite { row: usize, column: &'static str },

    #[error("linha {row}: ID Restoran deve ser inteiro, encontrado {value}")]
    NotInteger { row: usize, value: String },

    #[error("linha {row}: ID Restoran {id} duplicado (primeira ocorrência na linha {first_row})")]
    DuplicateId {
        row: usize,
        id: RecordId,
        first_row: usize,
    },
}

impl InputError {
    /// Linha da planilha onde o erro ocorreu, se houver.
    pub fn row(&self) -> Option<usize> {
        match self {
            InputError::EmptySheet => None,
            InputError::MissingColumn { row, .. }
            | InputError::NotNumeric { row, .. }
            | InputError::NonFinite { row, .. }
            | InputError::NotInteger { row, .. }
            | InputError::DuplicateId { row, .. } => Some(*row),
        }
    }
}

/// Valor inválido em uma variável de configuração.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{var} inválido: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}
