mod app;
mod cli;
mod data;
mod pager;
mod prompt;
mod stats;

use anyhow::Result;
use clap::Parser;

use app::App;
use cli::Args;

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    App::new(args.data_dir).run()
}
