use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use mapdraw_cli::script::{Step, StepEffect};
use mapdraw_core::{DrawOutcome, EngineConfig};
use mapdraw_model::{CommittedShape, ShapeId, Tool};

use crate::types::ReplayResult;

pub fn print_summary(result: &ReplayResult) {
    println!("Script: {}", result.script.display());
    if let Some(path) = &result.export {
        println!("GeoJSON: {}", path.display());
    }
    print_step_table(&result.report.steps);
    print_shape_table(&result.shapes);
    print_count_table(result);
}

fn print_step_table(steps: &[Step]) {
    if steps.is_empty() {
        println!("No shapes completed.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Event"),
        header_cell("Tool"),
        header_cell("Result"),
        header_cell("Detail"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for step in steps {
        let (tool, result, detail) = match &step.effect {
            StepEffect::Draw(DrawOutcome::Committed {
                id,
                tool,
                kind,
                trimmed_against,
            }) => {
                let detail = if trimmed_against.is_empty() {
                    format!("{} {kind}", id.short())
                } else {
                    format!(
                        "{} {kind}, trimmed against {}",
                        id.short(),
                        trimmed_against
                            .iter()
                            .map(ShapeId::short)
                            .collect::<Vec<_>>()
                            .join(", ")
                    )
                };
                (
                    Cell::new(tool),
                    Cell::new("committed")
                        .fg(Color::Green)
                        .add_attribute(Attribute::Bold),
                    Cell::new(detail),
                )
            }
            StepEffect::Draw(DrawOutcome::Rejected { tool, rejection }) => (
                Cell::new(tool),
                Cell::new("rejected")
                    .fg(Color::Red)
                    .add_attribute(Attribute::Bold),
                Cell::new(rejection.message()),
            ),
            StepEffect::Removed { id } => (
                dim_cell("-"),
                Cell::new("removed").fg(Color::Yellow),
                Cell::new(id.short()),
            ),
            StepEffect::RemoveMissed { shape } => (
                dim_cell("-"),
                Cell::new("skipped").fg(Color::Yellow),
                Cell::new(format!("no shape #{shape}")),
            ),
        };
        table.add_row(vec![
            Cell::new(step.index),
            Cell::new(&step.event),
            tool,
            result,
            detail,
        ]);
    }
    println!("{table}");
}

fn print_shape_table(shapes: &[CommittedShape]) {
    if shapes.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Tool"),
        header_cell("Geometry"),
        header_cell("Parts"),
        header_cell("Radius (m)"),
        header_cell("Created"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for shape in shapes {
        let radius = match shape.metadata.radius_m {
            Some(radius) => Cell::new(format!("{radius:.2}")),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(shape.id.short()),
            Cell::new(shape.tool),
            Cell::new(shape.geometry.kind()),
            Cell::new(shape.geometry.polygon_count()),
            radius,
            Cell::new(shape.created_at.format("%H:%M:%S%.3f")),
        ]);
    }
    println!();
    println!("Shapes:");
    println!("{table}");
}

fn print_count_table(result: &ReplayResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Tool"),
        header_cell("Count"),
        header_cell("Limit"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for &(tool, count) in &result.counts {
        let limit = result.limits.get(tool);
        let count_cell = if u32::try_from(count).is_ok_and(|count| count >= limit) {
            Cell::new(count).fg(Color::Yellow).add_attribute(Attribute::Bold)
        } else {
            Cell::new(count)
        };
        table.add_row(vec![Cell::new(tool), count_cell, Cell::new(limit)]);
    }
    table.add_row(vec![
        Cell::new("Total Features")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.shapes.len()).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!();
    println!("{table}");
    println!(
        "{} committed, {} rejected",
        result.report.committed(),
        result.report.rejected()
    );
}

pub fn print_limits(config: &EngineConfig) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Tool"), header_cell("Limit")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for tool in Tool::ALL {
        table.add_row(vec![Cell::new(tool), Cell::new(config.limits.get(tool))]);
    }
    println!("{table}");
    println!(
        "Area tolerance: {:e} deg²",
        config.validation.area_tolerance
    );
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}
