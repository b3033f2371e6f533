use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

use extrato_core::{
    Movement, category_totals, daily_category_summary, daily_net, daily_totals, top_clients,
};
use extrato_export::{ExportTables, write_all};

/// Extract, categorize and summarize an Asaas statement PDF.
#[derive(Parser, Debug)]
#[command(name = "extrato", version, about)]
struct Cli {
    /// Statement PDF exported from Asaas
    input: PathBuf,

    /// Directory for the generated tables (created if missing)
    #[arg(short, long, default_value = "resultados_extrato")]
    out_dir: PathBuf,

    /// Print the raw text extracted from the PDF and continue
    #[arg(long)]
    print_text: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.input.exists() {
        bail!("input PDF not found: {}", cli.input.display());
    }

    println!("Extracting text from {}", cli.input.display());
    let text = extrato_ingest::extract_text(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    if cli.print_text {
        println!("{text}");
    }

    println!("Processing statement...");
    let parsed = extrato_ingest::parse_statement(&text)?;
    for skip in &parsed.skipped {
        println!(
            "warning: skipped unparsed line {}: {}",
            skip.line_number, skip.content
        );
    }

    println!("Categorizing movements...");
    let movements: Vec<Movement> = parsed.entries.iter().map(Movement::from_entry).collect();

    println!("Summarizing cash flow...");
    let daily_category = daily_category_summary(&movements);
    let totals = daily_totals(&movements);
    let net = daily_net(&movements);
    let categories = category_totals(&movements);
    let clients = top_clients(&movements);

    println!("Writing results to {}", cli.out_dir.display());
    write_all(
        &cli.out_dir,
        &ExportTables {
            metadata: &parsed.metadata,
            movements: &movements,
            daily_category: &daily_category,
            daily_totals: &totals,
            daily_net: &net,
            category_totals: &categories,
            top_clients: clients.as_deref(),
        },
    )?;

    println!(
        "Done: {} movements extracted, {} breakdown rows across {} days",
        movements.len(),
        daily_category.len(),
        totals.len()
    );

    Ok(())
}
