use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use gridfill::bench::runner::run_benchmark;
use gridfill::perception::grid::{grid_to_string, load_fixture, FillFixture};
use gridfill::{apply, Strategy};

/// Benchmark the flood fill strategies on a fixture grid.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON fixture with `grid`, `seed` and `new_color`; the built-in sample grid when omitted
    fixture: Option<PathBuf>,

    /// Timed fills per strategy
    #[arg(short = 'n', long, default_value_t = 1000)]
    iterations: usize,

    /// Strategy to run (recursive, stack_dfs, queue_bfs, offset_stack); repeatable, all when omitted
    #[arg(short, long)]
    strategy: Vec<Strategy>,

    /// Print the input grid and the filled result
    #[arg(long)]
    show: bool,
}

impl Cli {
    fn strategies(&self) -> Vec<Strategy> {
        if self.strategy.is_empty() {
            Strategy::ALL.to_vec()
        } else {
            self.strategy.clone()
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let strategies = cli.strategies();
    let fixture = match &cli.fixture {
        Some(path) => load_fixture(path).with_context(|| format!("loading {}", path.display()))?,
        None => {
            log::info!("no fixture given, using the built-in sample grid");
            FillFixture::sample()
        }
    };

    if cli.show {
        println!("input (seed {:?}, new color {}):", fixture.seed, fixture.new_color);
        println!("{}\n", grid_to_string(&fixture.grid));
        let filled = apply(strategies[0], &fixture)?;
        println!("output ({}):", strategies[0]);
        println!("{}\n", grid_to_string(&filled));
    }

    let report = run_benchmark(&fixture, &strategies, cli.iterations)?;
    report.print_summary();
    if !report.equivalent {
        bail!("strategies produced different grids");
    }
    Ok(())
}
