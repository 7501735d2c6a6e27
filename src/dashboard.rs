use std::{
    fmt::{Display, Formatter},
    iter::repeat_n,
};

use bon::Builder;
use comfy_table::{Cell, CellAlignment, ColumnConstraint, Table, Width};

use crate::{
    consts::{
        BAR_EMPTY,
        BAR_FULL,
        BAR_LENGTH,
        DASHBOARD_PADDING,
        DASHBOARD_PRESET,
        DASHBOARD_WIDTH,
        SINGLE_RECIPIENT_TIPS,
        TIP,
        TITLE,
    },
    efficiency::{EfficiencyModel, EfficiencyResult},
    prelude::*,
    quantity::lamports::Lamports,
};

/// Render `percent` of `length` as filled blocks, the rest as empty ones.
///
/// The filled part is clamped to the bar, so the result is always `length` characters long.
#[must_use]
pub fn progress_bar(percent: f64, length: usize) -> String {
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    let n_filled = (length as f64 * percent / 100.0).floor().clamp(0.0, length as f64) as usize;
    repeat_n(BAR_FULL, n_filled).chain(repeat_n(BAR_EMPTY, length - n_filled)).collect()
}

/// Optimized versus baseline costs of a single transfer.
#[must_use]
#[derive(Builder)]
pub struct Dashboard {
    amount: Lamports,

    #[builder(default = 1)]
    n_recipients: u32,

    optimized: EfficiencyResult,
    baseline: EfficiencyResult,
}

impl Dashboard {
    #[instrument(
        name = "Evaluating the transfer…",
        skip_all,
        fields(amount = %amount, n_recipients = n_recipients),
    )]
    pub fn evaluate(model: &impl EfficiencyModel, amount: Lamports, n_recipients: u32) -> Self {
        let optimized = model.optimized(amount, n_recipients);
        let baseline = model.baseline(amount, n_recipients);
        debug!(optimized = %optimized.efficiency, baseline = %baseline.efficiency, "evaluated");
        Self::builder()
            .amount(amount)
            .n_recipients(n_recipients)
            .optimized(optimized)
            .baseline(baseline)
            .build()
    }

    fn build_table(&self) -> Table {
        let optimized = &self.optimized;
        let baseline = &self.baseline;
        let breakdown = &optimized.cost_breakdown;
        let efficiency_diff = optimized.efficiency - baseline.efficiency;
        let rent_reduction = optimized
            .rent_reduction_from(baseline)
            .map_or_else(String::new, |reduction| format!(" ({:+})", -reduction));

        let mut table = Table::new();
        table.load_preset(DASHBOARD_PRESET);
        table.set_header(vec![Cell::new(TITLE).set_alignment(CellAlignment::Center)]);
        table.add_row(vec![format!(
            "Transfer: {} with {} recipient{}",
            self.amount,
            self.n_recipients,
            if self.n_recipients > 1 { "s" } else { "" },
        )]);
        table.add_row(vec![
            [
                format!("Transfer efficiency:          {}", optimized.efficiency),
                format!(
                    "{}  vs  {}",
                    progress_bar(optimized.efficiency.0, BAR_LENGTH),
                    progress_bar(baseline.efficiency.0, BAR_LENGTH),
                ),
                format!("Improvement: {:+.1} percentage points", efficiency_diff.0),
            ]
            .join("\n"),
        ]);
        table.add_row(vec![
            [
                format!("Total costs:               {}", optimized.total_cost),
                format!("Savings: {} ({})", optimized.savings_vs_baseline, optimized.savings_percent),
            ]
            .join("\n"),
        ]);
        table.add_row(vec![
            [
                "Cost breakdown:".to_string(),
                format!("├─ Tx fees:    {}", breakdown.tx_fee),
                format!("├─ Rent costs: {}{rent_reduction}", breakdown.rent),
                format!("└─ Compute:    {}", breakdown.compute),
            ]
            .join("\n"),
        ]);

        if let Some(column) = table.column_mut(0) {
            column
                .set_padding((DASHBOARD_PADDING, DASHBOARD_PADDING))
                .set_constraint(ColumnConstraint::Absolute(Width::Fixed(DASHBOARD_WIDTH - 2)));
        }
        table
    }
}

impl Display for Dashboard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.build_table())?;
        writeln!(f)?;
        f.write_str(TIP)?;
        if self.n_recipients == 1 {
            for line in SINGLE_RECIPIENT_TIPS {
                writeln!(f)?;
                f.write_str(line)?;
            }
        }
        Ok(())
    }
}

#[must_use]
pub fn render_dashboard(
    model: &impl EfficiencyModel,
    amount: Lamports,
    n_recipients: u32,
) -> String {
    Dashboard::evaluate(model, amount, n_recipients).to_string()
}

pub fn display_dashboard(model: &impl EfficiencyModel, amount: Lamports, n_recipients: u32) {
    println!("{}", render_dashboard(model, amount, n_recipients));
}
