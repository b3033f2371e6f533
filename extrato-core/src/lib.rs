//! extrato-core: domain model and pure transformations for Asaas
//! statement processing (categorization, client extraction, aggregation).

pub mod categorize;
pub mod client;
pub mod statement;
pub mod summary;

pub use categorize::{categorize_description, direction_for};
pub use client::extract_client;
pub use statement::{Category, Direction, Movement, StatementEntry, StatementMetadata};
pub use summary::{
    CategoryTotal, ClientTotal, DailyCategorySummary, DailyNet, DailyTotal, category_totals,
    daily_category_summary, daily_net, daily_totals, top_clients,
};
