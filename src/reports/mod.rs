use clap::ValueEnum;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use evaltable::compare::Comparison;
use evaltable::error::EtResult;
use evaltable::render::highlighted_table;
use evaltable::table::{ResultTable, COLUMNS, NUMERIC_COLUMNS};
use std::io;

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

pub fn print_table(table: &ResultTable, format: OutputFormat) -> EtResult<()> {
    match format {
        OutputFormat::Table => println!("\n{}", plain_table(table)),
        OutputFormat::Csv => table.write_csv(io::stdout().lock())?,
        OutputFormat::Json => println!("{}", table.to_json()?),
    }
    Ok(())
}

fn plain_table(table: &ResultTable) -> Table {
    let mut out = Table::new();
    out.load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    out.set_header(
        COLUMNS
            .iter()
            .map(|c| Cell::new(c).add_attribute(Attribute::Bold)),
    );

    for i in 2..=5 {
        if let Some(col) = out.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for row in table {
        let mut cells = vec![Cell::new(row.dataset), Cell::new(row.method)];
        cells.extend(row.values().iter().map(|v| Cell::new(format!("{:.3}", v))));
        out.add_row(cells);
    }
    out
}

pub fn print_comparison(table: &ResultTable, comparison: &Comparison) {
    println!("\n{}", highlighted_table(table, comparison));
    if comparison.is_identical() {
        println!("✅ All cells match the reference (bound = 0)");
        return;
    }

    let total = comparison.rows().len() * NUMERIC_COLUMNS.len();
    if comparison.missing() > 0 {
        println!(
            "⚠️  {} of {} cells have no value on one side and were not compared",
            comparison.missing(),
            total
        );
    }
    if comparison.missing() < total {
        println!("Color bound: ±{:.3}", comparison.bound());
    }
}
