use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::Itertools;

use crate::{
    core::{
        savings::{Breakeven, SavingsResult},
        station::{Source, Station},
    },
    data::subsidies::Subsidy,
    fmt::format_indian,
    quantity::currency::Rupees,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

const fn savings_color(savings: Rupees) -> Color {
    if savings.is_positive() { Color::Blue } else { Color::Red }
}

pub fn build_savings_table(result: &SavingsResult) -> Table {
    let mut table = new_table();
    table.set_header(vec!["", "Per km", "Monthly", "Annual"]);
    table.add_row(vec![
        Cell::new("Petrol"),
        Cell::new(result.petrol_cost_per_km).set_alignment(CellAlignment::Right),
        Cell::new(result.petrol_cost).set_alignment(CellAlignment::Right).fg(Color::Red),
        Cell::new(result.petrol_cost * 12.0).set_alignment(CellAlignment::Right).fg(Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Electric"),
        Cell::new(result.electric_cost_per_km).set_alignment(CellAlignment::Right),
        Cell::new(result.electric_cost).set_alignment(CellAlignment::Right).fg(Color::Green),
        Cell::new(result.electric_cost * 12.0)
            .set_alignment(CellAlignment::Right)
            .fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Savings").add_attribute(Attribute::Bold),
        Cell::new(result.petrol_cost_per_km - result.electric_cost_per_km)
            .set_alignment(CellAlignment::Right),
        Cell::new(result.monthly_savings)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold)
            .fg(savings_color(result.monthly_savings)),
        Cell::new(result.annual_savings)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold)
            .fg(savings_color(result.annual_savings)),
    ]);
    table
}

pub fn build_breakeven_table(breakeven: Breakeven) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Breakeven", ""]);
    match breakeven {
        Breakeven::Reachable(months) => {
            table.add_row(vec![
                Cell::new("Months"),
                Cell::new(format_indian(months.0, 1))
                    .set_alignment(CellAlignment::Right)
                    .fg(Color::Magenta),
            ]);
            table.add_row(vec![
                Cell::new("Years"),
                Cell::new(format_indian(months.to_years(), 2))
                    .set_alignment(CellAlignment::Right)
                    .fg(Color::Magenta),
            ]);
        }
        Breakeven::Unreachable => {
            table.add_row(vec![
                Cell::new("No positive monthly savings, breakeven is not reachable")
                    .add_attribute(Attribute::Dim),
                Cell::new("—"),
            ]);
        }
    }
    table
}

pub fn build_cumulative_savings_table(result: &SavingsResult) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Month", "Cumulative savings", "Paid off"]);
    let extra_cost_months = result.breakeven.months();
    for sample in &result.cumulative_savings {
        let is_paid_off =
            extra_cost_months.is_some_and(|months| f64::from(sample.month) >= months.0);
        table.add_row(vec![
            Cell::new(sample.month).add_attribute(Attribute::Dim),
            Cell::new(sample.savings).set_alignment(CellAlignment::Right),
            if is_paid_off { Cell::new("✓").fg(Color::Green) } else { Cell::new("") },
        ]);
    }
    table
}

pub fn build_stations_table(stations: &[Station]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Name",
        "Latitude",
        "Longitude",
        "Address",
        "Provider",
        "Connectors",
        "Power",
        "Source",
    ]);
    for station in stations {
        table.add_row(vec![
            Cell::new(&station.name).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.4}", station.latitude)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.4}", station.longitude)).set_alignment(CellAlignment::Right),
            Cell::new(station.address.as_deref().unwrap_or("—")),
            Cell::new(station.provider.as_deref().unwrap_or("—")),
            Cell::new(station.connectors.iter().take(3).join(", ")),
            Cell::new(station.power).set_alignment(CellAlignment::Right),
            Cell::new(station.source).fg(match station.source {
                Source::Local => Color::Reset,
                Source::RemoteProvider => Color::Cyan,
            }),
        ]);
    }
    table
}

pub fn build_subsidies_table(subsidies: &[Subsidy]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["State", "Subsidy"]);
    for subsidy in subsidies {
        table.add_row(vec![
            Cell::new(subsidy.state).add_attribute(Attribute::Bold),
            Cell::new(subsidy.summary),
        ]);
    }
    table
}
