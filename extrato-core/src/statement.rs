//! Statement domain types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::categorize::{categorize_description, direction_for};
use crate::client::extract_client;

/// Header metadata of a statement, attached to the parsed collection as a
/// whole rather than to individual rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementMetadata {
    /// Company name (first header line)
    pub company: String,
    /// Account identification, usually a CNPJ line
    pub account_info: String,
    /// Reporting period as printed in the statement
    pub period: String,
    /// Opening balance; absent when the header line is missing or malformed
    pub opening_balance: Option<f64>,
    /// Closing balance; same tolerance as the opening balance
    pub closing_balance: Option<f64>,
}

/// One raw movement row as it appears in the statement table, before
/// categorization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementEntry {
    pub date: NaiveDate,
    pub description: String,
    /// Positive = money in, negative = money out.
    pub amount: f64,
}

/// Business categories assigned by description matching.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "Antecipação")]
    Antecipacao,
    #[serde(rename = "Taxa de Cartão")]
    TaxaCartao,
    #[serde(rename = "Taxa de Antecipação")]
    TaxaAntecipacao,
    #[serde(rename = "Transferência PIX")]
    TransferenciaPix,
    #[serde(rename = "Cobrança Recebida")]
    CobrancaRecebida,
    #[serde(rename = "Estorno")]
    Estorno,
    #[serde(rename = "Baixa de Antecipação")]
    BaixaAntecipacao,
    #[serde(rename = "Bloqueio de Saldo")]
    BloqueioSaldo,
    #[serde(rename = "Cancelamento de Bloqueio")]
    CancelamentoBloqueio,
    #[serde(rename = "Outros")]
    Outros,
}

impl Category {
    /// Display label used in every exported table.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Antecipacao => "Antecipação",
            Category::TaxaCartao => "Taxa de Cartão",
            Category::TaxaAntecipacao => "Taxa de Antecipação",
            Category::TransferenciaPix => "Transferência PIX",
            Category::CobrancaRecebida => "Cobrança Recebida",
            Category::Estorno => "Estorno",
            Category::BaixaAntecipacao => "Baixa de Antecipação",
            Category::BloqueioSaldo => "Bloqueio de Saldo",
            Category::CancelamentoBloqueio => "Cancelamento de Bloqueio",
            Category::Outros => "Outros",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Movement direction, derived from the sign of the amount.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Direction {
    #[serde(rename = "Entrada")]
    Entrada,
    #[serde(rename = "Saída")]
    Saida,
}

impl Direction {
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Entrada => "Entrada",
            Direction::Saida => "Saída",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A fully enriched movement: raw row plus category, direction and the
/// client name when the description identifies one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    pub category: Category,
    pub direction: Direction,
    pub client: Option<String>,
}

impl Movement {
    /// Enrich a raw statement entry. Direction always agrees with the
    /// sign of the amount.
    pub fn from_entry(entry: &StatementEntry) -> Self {
        Movement {
            date: entry.date,
            description: entry.description.clone(),
            amount: entry.amount,
            category: categorize_description(&entry.description),
            direction: direction_for(entry.amount),
            client: extract_client(&entry.description),
        }
    }
}
