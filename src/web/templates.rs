//! # Templates Maud
//!
//! HTML renderizado no servidor com [`maud`](https://maud.lambda.xyz/).
//!
//! | Função | Tipo | Descrição |
//! |--------|------|-----------|
//! | [`ranking_page()`] | Página completa | Tabela do ranking atual |
//! | [`ranking_table()`] | Fragmento | Só a tabela (reusada pela página) |

use maud::{html, Markup, DOCTYPE};

use crate::pipeline::Ranking;

/// Página principal com o ranking atual.
pub fn ranking_page(ranking: &Ranking, top_n: usize) -> Markup {
    html! {
        (DOCTYPE)
        html lang="id" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Peringkat Restoran" }
                style {
                    "body { font-family: sans-serif; margin: 2rem; }"
                    "table { border-collapse: collapse; }"
                    "th, td { padding: .35rem .9rem; border-bottom: 1px solid #ddd; text-align: right; }"
                    "th:first-child, td:first-child { text-align: left; }"
                    ".meta { color: #666; font-size: .9rem; }"
                }
            }
            body {
                h1 { (top_n) " Restoran Terbaik" }
                p class="meta" {
                    (ranking.evaluated) " restoran avaliados em "
                    (ranking.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
                }
                (ranking_table(ranking))
            }
        }
    }
}

/// Tabela do ranking, uma linha por restaurante.
pub fn ranking_table(ranking: &Ranking) -> Markup {
    html! {
        @if ranking.entries.is_empty() {
            p class="empty" { "Nenhum restaurante avaliado." }
        } @else {
            table id="ranking" {
                thead {
                    tr {
                        th { "#" }
                        th { "ID Restoran" }
                        th { "Kualitas Servis" }
                        th { "Harga" }
                        th { "Skor Kelayakan" }
                    }
                }
                tbody {
                    @for (pos, entry) in ranking.entries.iter().enumerate() {
                        tr {
                            td { (pos + 1) }
                            td { (entry.record.id) }
                            td { (entry.record.servis) }
                            td { (format!("{:.2}", entry.record.harga)) }
                            td { (format!("{:.2}", entry.score)) }
                        }
                    }
                }
            }
        }
    }
}
