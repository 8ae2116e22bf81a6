//! Tabular rendering of results.

use clmm_hedge_simulation::holdings::HoldingsPoint;
use clmm_hedge_simulation::performance::PerformanceSeries;
use prettytable::{Table, format, row};

/// Two-column key/value table.
pub fn summary_table(rows: &[(&str, String)]) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    for (key, value) in rows {
        table.add_row(row![key, r->value]);
    }
    table
}

/// One row per sampled price: BTC, USD and total value held.
pub fn holdings_table(points: &[HoldingsPoint]) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.set_titles(row!["Price", "BTC", "USD", "Value"]);
    for p in points {
        table.add_row(row![
            r->format!("{:.2}", p.price),
            r->format!("{:.8}", p.btc),
            r->format!("{:.2}", p.usd),
            r->format!("{:.2}", p.value),
        ]);
    }
    table
}

/// One row per sampled price with the three performance curves.
pub fn performance_table(series: &PerformanceSeries) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.set_titles(row!["Price", "Change %", "Position %", "HODL %", "Delta-Neutral %"]);
    for p in &series.points {
        table.add_row(row![
            r->format!("{:.2}", p.price),
            r->format!("{:+.2}", p.price_change_pct),
            r->format!("{:+.4}", p.position_pct),
            r->format!("{:+.4}", p.hodl_pct),
            r->format!("{:+.4}", p.delta_neutral_pct),
        ]);
    }
    table
}
