//! Command Line Interface for the concentrated liquidity hedge calculator.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clmm_hedge_data::providers::JsonPositionSource;
use clmm_hedge_data::{PositionSource, TokenDecimals};
use clmm_hedge_domain::entities::Position;
use clmm_hedge_domain::enums::DistributionAssumption;
use clmm_hedge_domain::math::liquidity::{Reconciliation, ReconciliationPolicy, estimate_liquidity};
use clmm_hedge_domain::value_objects::{Deposit, PriceRange};
use clmm_hedge_simulation::holdings::holdings_curve;
use clmm_hedge_simulation::monte_carlo::MonteCarloHedgeCheck;
use clmm_hedge_simulation::performance::performance_series_par;
use clmm_hedge_simulation::price_grid::PriceGrid;
use dotenv::dotenv;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod output;

#[derive(Parser, Debug)]
#[command(name = "clmm-hedge")]
#[command(
    about = "Valuation and static delta hedging of concentrated liquidity BTC/USD positions",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// BTC held by a position as price moves across and around its range
    Holdings {
        /// Liquidity constant L
        liquidity: f64,
        /// Lower price bound p_a (USD per BTC)
        lower: f64,
        /// Upper price bound p_b (USD per BTC)
        upper: f64,

        /// Number of prices sampled in [0.5·p_a, 1.5·p_b]
        #[arg(long, default_value_t = PriceGrid::HOLDINGS_POINTS)]
        points: usize,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Static BTC short for a position, from its deposit amounts
    Hedge {
        /// Lower price bound p_a (USD per BTC)
        lower: f64,
        /// Upper price bound p_b (USD per BTC)
        upper: f64,
        /// BTC price at deposit p_0
        entry: f64,
        /// BTC deposited
        btc: f64,
        /// USD deposited
        usd: f64,
        /// Price distribution over the range: log-uniform or linear-uniform
        distribution: DistributionAssumption,

        /// Fail instead of averaging when the two liquidity estimates disagree
        #[arg(long)]
        strict: bool,

        /// Cross-check the closed form against a Monte Carlo estimate
        #[arg(long)]
        verify: bool,
    },
    /// Position vs. HODL vs. delta-neutral returns over a price scan
    Performance {
        /// Lower price bound p_a (USD per BTC)
        lower: f64,
        /// Upper price bound p_b (USD per BTC)
        upper: f64,
        /// BTC price at deposit p_0
        entry: f64,
        /// BTC deposited
        btc: f64,
        /// USD deposited
        usd: f64,

        /// Number of prices sampled
        #[arg(long, default_value_t = PriceGrid::PERFORMANCE_POINTS)]
        points: usize,

        /// Lowest price sampled (default 0.2·p_0)
        #[arg(long)]
        min: Option<f64>,

        /// Highest price sampled (default 1.4·p_0)
        #[arg(long)]
        max: Option<f64>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Inspect a position loaded from a JSON snapshot
    Position {
        /// Position token id
        id: u64,

        /// Snapshot file (defaults to $CLMM_HEDGE_POSITIONS_FILE, then positions.json)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Decimals of token0 (BTC)
        #[arg(long, default_value_t = 0)]
        decimals0: u8,

        /// Decimals of token1 (USD)
        #[arg(long, default_value_t = 0)]
        decimals1: u8,

        /// Price distribution used to size the static short
        #[arg(long, default_value = "log-uniform")]
        distribution: DistributionAssumption,

        /// Also show holdings at this price
        #[arg(long)]
        price: Option<f64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(?cli, "Parsed arguments");

    match cli.command {
        Commands::Holdings {
            liquidity,
            lower,
            upper,
            points,
            json,
        } => {
            let range = PriceRange::new(lower, upper)?;
            let position = Position::new(range, liquidity)?;
            let grid = PriceGrid::around_range(&range, points)?;
            let curve = holdings_curve(&position, grid.prices())?;

            if json {
                println!("{}", serde_json::to_string_pretty(&curve)?);
            } else {
                println!("BTC held in position: L={liquidity}, p_a={lower}, p_b={upper}");
                output::holdings_table(&curve).printstd();
            }
        }
        Commands::Hedge {
            lower,
            upper,
            entry,
            btc,
            usd,
            distribution,
            strict,
            verify,
        } => {
            let range = PriceRange::new(lower, upper)?;
            let deposit = Deposit::new(btc, usd, entry)?;
            let policy = if strict {
                ReconciliationPolicy::Strict
            } else {
                ReconciliationPolicy::Average
            };

            let estimate = estimate_liquidity(&deposit, &range, policy)?;
            if estimate.reconciliation == Reconciliation::Averaged {
                warn!(
                    from_btc = ?estimate.from_btc,
                    from_usd = ?estimate.from_usd,
                    "Liquidity from BTC and USD sides disagree, averaging them"
                );
            }

            let position = Position::new(range, estimate.liquidity)?;
            let short = position.static_short(distribution);
            info!(%distribution, liquidity = estimate.liquidity, short, "Computed static short");

            println!("Estimated liquidity (L): {:.6}", estimate.liquidity);
            println!("Static short position (BTC): {short:.6}");

            if verify {
                let check =
                    MonteCarloHedgeCheck::new(range, distribution).run(estimate.liquidity)?;
                println!(
                    "Monte Carlo mean BTC held: {:.6} ({} samples, relative error {:.4}%)",
                    check.empirical,
                    check.samples,
                    check.relative_error * 100.0
                );
            }
        }
        Commands::Performance {
            lower,
            upper,
            entry,
            btc,
            usd,
            points,
            min,
            max,
            json,
        } => {
            let range = PriceRange::new(lower, upper)?;
            let deposit = Deposit::new(btc, usd, entry)?;
            let grid = match (min, max) {
                (None, None) => PriceGrid::around_price(entry, points)?,
                (min, max) => PriceGrid::linear(
                    min.unwrap_or(0.2 * entry),
                    max.unwrap_or(1.4 * entry),
                    points,
                )?,
            };

            let series = performance_series_par(&deposit, &range, grid.prices())?;

            if json {
                println!("{}", serde_json::to_string_pretty(&series)?);
            } else {
                output::summary_table(&[
                    ("Entry price (p_0)", format!("{:.2}", series.entry_price)),
                    ("Initial deposit (USD)", format!("{:.2}", series.initial_value)),
                    ("Liquidity (L)", format!("{:.6}", series.liquidity)),
                    ("p_a vs p_0", format!("{:+.2}%", series.lower_change_pct)),
                    ("p_b vs p_0", format!("{:+.2}%", series.upper_change_pct)),
                ])
                .printstd();
                output::performance_table(&series).printstd();
            }
        }
        Commands::Position {
            id,
            file,
            decimals0,
            decimals1,
            distribution,
            price,
        } => {
            let path = config::positions_file(file);
            let source = JsonPositionSource::new(path);
            let record = source
                .fetch_position(id)
                .await
                .with_context(|| format!("failed to load position {id}"))?;

            let decimals = TokenDecimals::new(decimals0, decimals1);
            let position = record.to_position(decimals)?;
            let range = position.range();

            let mut rows = vec![
                (
                    "Position",
                    format!("#{} {}", record.token_id, record.pair_label()),
                ),
                (
                    "Ticks",
                    format!("[{}, {}]", record.tick_lower, record.tick_upper),
                ),
                (
                    "Range (USD/BTC)",
                    format!("[{:.2}, {:.2}]", range.lower(), range.upper()),
                ),
                ("Liquidity (L)", format!("{:.6}", position.liquidity())),
                (
                    "Static short (BTC)",
                    format!("{:.6} ({distribution})", position.static_short(distribution)),
                ),
            ];
            if let Some(p) = price {
                let held = position.amounts(p)?;
                rows.push(("BTC held", format!("{:.8}", held.btc)));
                rows.push(("USD held", format!("{:.2}", held.usd)));
                rows.push(("Value (USD)", format!("{:.2}", held.value_at(p))));
            }
            output::summary_table(&rows).printstd();
        }
    }

    Ok(())
}
