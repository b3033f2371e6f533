//! Cash-flow aggregation over enriched movements.
//!
//! All functions are pure and deterministic for a fixed input multiset:
//! grouping goes through `BTreeMap` keyed by the output sort order, and
//! the one explicit sort (top clients) is stable, so equal totals keep
//! first-appearance order.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::statement::{Category, Direction, Movement};

/// Signed net per calendar day (the simple daily view).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyNet {
    pub date: NaiveDate,
    pub total: f64,
}

/// Per-day inflow, outflow magnitude and net balance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub inflow: f64,
    pub outflow: f64,
    pub net: f64,
}

/// Signed total and movement count per category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: f64,
    pub count: usize,
}

/// Signed total per identified client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientTotal {
    pub client: String,
    pub total: f64,
}

/// One (date, category) row of the daily breakdown. Outflow figures are
/// magnitudes; a pair with activity on only one side carries zeros on
/// the other.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyCategorySummary {
    pub date: NaiveDate,
    pub category: Category,
    pub inflow_total: f64,
    pub inflow_count: usize,
    pub outflow_total: f64,
    pub outflow_count: usize,
    pub net: f64,
}

/// Signed sum of amounts per date, ascending by date.
pub fn daily_net(movements: &[Movement]) -> Vec<DailyNet> {
    let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for m in movements {
        *by_date.entry(m.date).or_insert(0.0) += m.amount;
    }
    by_date
        .into_iter()
        .map(|(date, total)| DailyNet { date, total })
        .collect()
}

/// Per-date inflow sum, outflow magnitude sum and net, ascending by date.
pub fn daily_totals(movements: &[Movement]) -> Vec<DailyTotal> {
    let mut by_date: BTreeMap<NaiveDate, DailyTotal> = BTreeMap::new();
    for m in movements {
        let row = by_date.entry(m.date).or_insert(DailyTotal {
            date: m.date,
            inflow: 0.0,
            outflow: 0.0,
            net: 0.0,
        });
        match m.direction {
            Direction::Entrada => row.inflow += m.amount,
            Direction::Saida => row.outflow += m.amount.abs(),
        }
        row.net += m.amount;
    }
    by_date.into_values().collect()
}

/// Signed total and count per category, ascending by category label.
pub fn category_totals(movements: &[Movement]) -> Vec<CategoryTotal> {
    let mut by_label: BTreeMap<&'static str, CategoryTotal> = BTreeMap::new();
    for m in movements {
        let row = by_label.entry(m.category.label()).or_insert(CategoryTotal {
            category: m.category,
            total: 0.0,
            count: 0,
        });
        row.total += m.amount;
        row.count += 1;
    }
    by_label.into_values().collect()
}

/// Ten largest client totals, descending. `None` when no movement
/// carries a client name, so callers can omit the table entirely.
pub fn top_clients(movements: &[Movement]) -> Option<Vec<ClientTotal>> {
    let mut sums: HashMap<&str, f64> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for m in movements {
        if let Some(client) = m.client.as_deref() {
            if !sums.contains_key(client) {
                order.push(client);
            }
            *sums.entry(client).or_insert(0.0) += m.amount;
        }
    }
    if order.is_empty() {
        return None;
    }

    let mut rows: Vec<ClientTotal> = order
        .into_iter()
        .map(|client| ClientTotal {
            client: client.to_string(),
            total: sums[client],
        })
        .collect();
    // Stable sort: equal totals keep first-appearance order.
    rows.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(std::cmp::Ordering::Equal));
    rows.truncate(10);
    Some(rows)
}

/// Daily breakdown per (date, category): inflows and outflows aggregated
/// independently, outer-joined with zero-fill, net = inflow − outflow
/// magnitude. Rows come out sorted by (date, category label).
pub fn daily_category_summary(movements: &[Movement]) -> Vec<DailyCategorySummary> {
    let mut rows: BTreeMap<(NaiveDate, &'static str), DailyCategorySummary> = BTreeMap::new();
    for m in movements {
        let row = rows
            .entry((m.date, m.category.label()))
            .or_insert(DailyCategorySummary {
                date: m.date,
                category: m.category,
                inflow_total: 0.0,
                inflow_count: 0,
                outflow_total: 0.0,
                outflow_count: 0,
                net: 0.0,
            });
        match m.direction {
            Direction::Entrada => {
                row.inflow_total += m.amount;
                row.inflow_count += 1;
            }
            Direction::Saida => {
                row.outflow_total += m.amount.abs();
                row.outflow_count += 1;
            }
        }
    }
    rows.into_values()
        .map(|mut row| {
            row.net = row.inflow_total - row.outflow_total;
            row
        })
        .collect()
}
