//! Listagem textual do ranking para o console.
//!
//! ```text
//! 10 Restoran Terbaik:
//! ID         Kualitas Servis Harga           Skor
//! 2          80              20000.00        80.00
//! ```

use std::fmt::Write;

use crate::core::ScoredRecord;

/// Renderiza o ranking como tabela de largura fixa.
///
/// `top_n` só aparece no título; as linhas vêm de `entries`.
pub fn render_table(entries: &[ScoredRecord], top_n: usize) -> String {
    let mut out = String::new();
    // Escrever em String não falha
    let _ = writeln!(out, "{top_n} Restoran Terbaik:");
    let _ = writeln!(
        out,
        "{:<10} {:<15} {:<15} {:<15}",
        "ID", "Kualitas Servis", "Harga", "Skor"
    );
    for e in entries {
        let _ = writeln!(
            out,
            "{:<10} {:<15} {:<15.2} {:<15.2}",
            e.record.id, e.record.servis, e.record.harga, e.score
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Record;

    #[test]
    fn test_render_table() {
        let entries = vec![
            ScoredRecord {
                record: Record::new(2, 80.0, 20_000.0),
                score: 80.0,
            },
            ScoredRecord {
                record: Record::new(17, 45.5, 31_250.0),
                score: 35.123,
            },
        ];
        let table = render_table(&entries, 10);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "10 Restoran Terbaik:");
        assert_eq!(
            lines[1],
            "ID         Kualitas Servis Harga           Skor           "
        );
        assert_eq!(
            lines[2],
            "2          80              20000.00        80.00          "
        );
        assert!(lines[3].starts_with("17         45.5            31250.00        35.12"));
        assert_eq!(lines.len(), 4);
    }
}
