use comfy_table::{Cell, CellAlignment, Table, modifiers, presets};

use crate::{
    benchmarks::{Benchmarks, CostPair, Scenario, TransferSize},
    quantity::percent::Percent,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table
}

/// Format a reduction as a signed change, `-70.0%` for a 70 % reduction.
fn format_reduction(reduction: Option<Percent>) -> String {
    reduction.map_or_else(|| "n/a".to_string(), |reduction| format!("{:+}", -reduction))
}

fn format_optional(percent: Option<Percent>) -> String {
    percent.map_or_else(|| "n/a".to_string(), |percent| percent.to_string())
}

/// Difference in percentage points.
fn format_points(baseline: Option<Percent>, optimized: Option<Percent>) -> String {
    baseline
        .zip(optimized)
        .map_or_else(|| "n/a".to_string(), |(baseline, optimized)| {
            format!("{:+.1} pp", (optimized - baseline).0)
        })
}

#[must_use]
pub fn build_key_metrics_table(benchmarks: &Benchmarks) -> Table {
    let scenarios: [(&str, &Scenario); 2] = [
        ("single recipient", &benchmarks.single_recipient),
        ("multi-wallet", &benchmarks.multi_wallet),
    ];

    let mut table = new_table();
    table.set_header(vec!["Metric", "Baseline", "Optimized", "Change"]);
    for (label, scenario) in scenarios {
        let (optimized, baseline) = (&scenario.optimized, &scenario.baseline);
        table.add_row(vec![
            Cell::new(format!("Transfer efficiency ({label})")),
            Cell::new(baseline.efficiency).set_alignment(CellAlignment::Right),
            Cell::new(optimized.efficiency).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:+.1} pp", (optimized.efficiency - baseline.efficiency).0))
                .set_alignment(CellAlignment::Right),
        ]);
    }
    for (label, scenario) in scenarios {
        let (optimized, baseline) = (&scenario.optimized, &scenario.baseline);
        table.add_row(vec![
            Cell::new(format!("Rent costs ({label})")),
            Cell::new(baseline.cost_breakdown.rent).set_alignment(CellAlignment::Right),
            Cell::new(optimized.cost_breakdown.rent).set_alignment(CellAlignment::Right),
            Cell::new(format_reduction(optimized.rent_reduction_from(baseline)))
                .set_alignment(CellAlignment::Right),
        ]);
    }
    for (label, scenario) in scenarios {
        let (optimized, baseline) = (&scenario.optimized, &scenario.baseline);
        table.add_row(vec![
            Cell::new(format!("Total costs ({label})")),
            Cell::new(baseline.total_cost).set_alignment(CellAlignment::Right),
            Cell::new(optimized.total_cost).set_alignment(CellAlignment::Right),
            Cell::new(format_reduction(optimized.total_cost.reduction_from(baseline.total_cost)))
                .set_alignment(CellAlignment::Right),
        ]);
    }
    for (label, scenario) in scenarios {
        let (optimized, baseline) = (&scenario.optimized, &scenario.baseline);
        table.add_row(vec![
            Cell::new(format!("Rent share ({label})")),
            Cell::new(format_optional(baseline.rent_share())).set_alignment(CellAlignment::Right),
            Cell::new(format_optional(optimized.rent_share())).set_alignment(CellAlignment::Right),
            Cell::new(format_points(baseline.rent_share(), optimized.rent_share()))
                .set_alignment(CellAlignment::Right),
        ]);
    }
    for (label, scenario) in scenarios {
        let (optimized, baseline) = (&scenario.optimized, &scenario.baseline);
        table.add_row(vec![
            Cell::new(format!("Remaining accounts ({label})")),
            Cell::new(baseline.accounts_remaining).set_alignment(CellAlignment::Right),
            Cell::new(optimized.accounts_remaining).set_alignment(CellAlignment::Right),
            Cell::new(format_reduction(optimized.accounts_reduction_from(baseline)))
                .set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[must_use]
pub fn build_transfer_sizes_table(transfer_sizes: &[TransferSize]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Transfer", "Type", "Baseline", "Optimized", "Change"]);
    for transfer_size in transfer_sizes {
        let pairs: [(&str, CostPair); 2] =
            [("single recipient", transfer_size.single), ("multi-wallet", transfer_size.multi)];
        for (label, pair) in pairs {
            table.add_row(vec![
                Cell::new(transfer_size.amount).set_alignment(CellAlignment::Right),
                Cell::new(label),
                Cell::new(pair.baseline).set_alignment(CellAlignment::Right),
                Cell::new(pair.optimized).set_alignment(CellAlignment::Right),
                Cell::new(format_reduction(pair.reduction())).set_alignment(CellAlignment::Right),
            ]);
        }
    }
    table
}
