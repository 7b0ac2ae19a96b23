use crate::config::Config;
use crate::error::BoardResult;
use crate::probe;
use crate::store::TableStore;
use crate::types::Table;
use colored::Colorize;

fn load_store(config: &Config) -> BoardResult<TableStore> {
    TableStore::load(&config.sources())
}

/// Print a bounded table preview
fn print_preview(table: &Table, limit: usize) {
    println!(
        "   {} rows × {} columns",
        table.row_count(),
        table.column_count()
    );
    println!();
    println!("   {}", table.columns().join(" | ").bold());
    for row in table.rows().iter().take(limit) {
        let cells: Vec<String> = row.iter().map(|c| c.to_string()).collect();
        println!("   {}", cells.join(" | "));
    }
    if table.row_count() > limit {
        println!(
            "   {}",
            format!("… {} more rows", table.row_count() - limit).dimmed()
        );
    }
}

fn print_table(heading: &str, table: &Table, limit: usize, json: bool) -> BoardResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(table)?);
        return Ok(());
    }
    println!("{}", format!("📋 {}", heading).bold().green());
    print_preview(table, limit);
    Ok(())
}

/// Execute the sheets command
pub fn sheets(config: &Config) -> BoardResult<()> {
    let store = load_store(config)?;
    println!("{}", "📊 csrboard - Loaded sheets".bold().green());
    println!("   CSR MIS:    {}", config.csr_mis.display());
    println!("   JSPL input: {}", config.jspl_input.display());
    println!();

    if store.is_empty() {
        println!("{}", "⚠️  No non-empty sheets found".yellow());
        return Ok(());
    }

    println!("   {} sheets loaded:", store.len());
    for key in store.keys() {
        if let Some(table) = store.get(key) {
            println!(
                "   {} ({} rows × {} columns)",
                key.cyan(),
                table.row_count(),
                table.column_count()
            );
        }
    }
    Ok(())
}

/// Execute the show command (exact-key lookup)
pub fn show(config: &Config, key: &str, limit: usize, json: bool) -> BoardResult<()> {
    let store = load_store(config)?;
    match store.get(key) {
        Some(table) => print_table(key, table, limit, json),
        None => {
            println!("{}", format!("⚠️  No sheet stored under '{}'", key).yellow());
            println!("   Run {} to list available keys", "csrboard sheets".cyan());
            Ok(())
        }
    }
}

/// Execute the program command (layered name resolution)
pub fn program(config: &Config, name: &str, limit: usize, json: bool) -> BoardResult<()> {
    let store = load_store(config)?;
    match store.resolve_program(name) {
        Some(table) => {
            let heading = format!("{} → {}", name, table.name());
            print_table(&heading, table, limit, json)
        }
        None => {
            println!(
                "{}",
                format!("⚠️  No program data found for '{}'", name).yellow()
            );
            Ok(())
        }
    }
}

/// Execute the masters command
pub fn masters(config: &Config) -> BoardResult<()> {
    let store = load_store(config)?;
    let masters = store.master_tables();

    println!("{}", "🗂  csrboard - Master data".bold().green());
    if masters.is_empty() {
        println!("   {}", "No master sheets found".yellow());
        return Ok(());
    }
    for (key, table) in masters {
        println!(
            "   {} ({} rows × {} columns)",
            key.cyan(),
            table.row_count(),
            table.column_count()
        );
    }
    Ok(())
}

/// Execute the summary command
pub fn summary(config: &Config, name: &str, json: bool) -> BoardResult<()> {
    let store = load_store(config)?;
    let Some(table) = store.resolve_program(name) else {
        println!(
            "{}",
            format!("⚠️  No program data found for '{}'", name).yellow()
        );
        return Ok(());
    };

    let summary = probe::program_summary(table);
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}", format!("📈 Summary - {}", table.name()).bold().green());
    println!("   Records:         {}", summary.records);
    println!(
        "   Numeric columns: {}",
        if summary.numeric_columns.is_empty() {
            "none".to_string()
        } else {
            summary.numeric_columns.join(", ")
        }
    );
    match summary.beneficiary_total {
        Some(total) => println!("   Beneficiaries:   {}", total),
        None => println!("   Beneficiaries:   {}", "n/a".dimmed()),
    }
    Ok(())
}
