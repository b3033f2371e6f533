//! Deterministic category rules for statement descriptions.
//!
//! A single ordered table of lower-cased substrings, scanned
//! first-match-wins. No LLM, no fuzzy matching — the Asaas descriptions
//! are templated enough that substring rules cover everything.

use crate::statement::{Category, Direction};

/// Ordered rule table: first needle found in the lower-cased description
/// wins. The order reproduces the production rule chain, including its
/// shadowed entries: "antecipação" (rule 1) also matches every
/// "taxa de antecipação" and "baixa da antecipação" description, and
/// "bloqueio" (rule 8) matches "cancelamento de bloqueio" before rule 9
/// gets a chance. Reorder here if that precedence is ever revisited.
pub const RULES: &[(&str, Category)] = &[
    ("antecipação", Category::Antecipacao),
    ("taxa de cartão", Category::TaxaCartao),
    ("taxa de antecipação", Category::TaxaAntecipacao),
    ("pix", Category::TransferenciaPix),
    ("cobrança recebida", Category::CobrancaRecebida),
    ("estorno", Category::Estorno),
    ("baixa da antecipação", Category::BaixaAntecipacao),
    ("bloqueio", Category::BloqueioSaldo),
    ("cancelamento", Category::CancelamentoBloqueio),
];

/// Categorize a description; falls back to [`Category::Outros`] when no
/// rule matches.
pub fn categorize_description(description: &str) -> Category {
    let desc = description.to_lowercase();
    for (needle, category) in RULES {
        if desc.contains(needle) {
            return *category;
        }
    }
    Category::Outros
}

/// Direction derived purely from the amount sign: zero counts as inflow.
pub fn direction_for(amount: f64) -> Direction {
    if amount >= 0.0 {
        Direction::Entrada
    } else {
        Direction::Saida
    }
}
