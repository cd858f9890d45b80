use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use campanha_cli::generate::{GenerateResult, SheetSummary};
use campanha_transform::PipelineStats;

pub fn print_summary(result: &GenerateResult) {
    println!("{}", sheet_table(&result.sheets));
    println!("{}", stage_table(&result.stats));
}

pub fn sheet_table(sheets: &[SheetSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Rows"),
        header_cell("Columns"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for sheet in sheets {
        table.add_row(vec![
            Cell::new(sheet.sheet)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(sheet.rows),
            Cell::new(sheet.columns),
        ]);
    }
    table
}

/// Row counts after each pipeline stage.
pub fn stage_table(stats: &PipelineStats) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let rows = [
        ("KPI rows", stats.kpi_rows),
        ("With phone", stats.with_phone),
        ("After type filter", stats.after_type_filter),
        ("Loyal excluded", stats.loyal_excluded),
        ("Panel excluded", stats.panel_excluded),
        ("After dedup", stats.after_dedup),
        ("Distinct names", stats.lookup_rows),
    ];
    for (label, count) in rows {
        let count_cell = if count == 0 {
            dim_cell(count)
        } else {
            Cell::new(count)
        };
        table.add_row(vec![Cell::new(label), count_cell]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_table_lists_each_sheet() {
        let sheets = vec![
            SheetSummary {
                sheet: "kpi",
                rows: 12,
                columns: 3,
            },
            SheetSummary {
                sheet: "nome",
                rows: 9,
                columns: 2,
            },
        ];
        let table = sheet_table(&sheets);
        assert_eq!(table.row_count(), 2);
        let rendered = table.to_string();
        assert!(rendered.contains("kpi"));
        assert!(rendered.contains("nome"));
    }

    #[test]
    fn stage_table_has_one_row_per_stage() {
        let table = stage_table(&PipelineStats::default());
        assert_eq!(table.row_count(), 7);
    }
}
