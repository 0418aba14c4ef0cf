use clap::Parser;
use mandelbench_cli::Cli;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    mandelbench_cli::run(Cli::parse())
}
