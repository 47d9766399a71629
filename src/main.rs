//! # axdoc entry point
//!
//! ```text
//! main()
//!   ├─> Parse CLI arguments (clap)
//!   ├─> Initialize logging (env_logger, RUST_LOG overrides)
//!   └─> cli::run
//!         ├─> load config, apply flag overrides
//!         ├─> discover models under the metadata root
//!         ├─> pick categories (flags, config, or interactive menu)
//!         └─> run the orchestrator into the output document
//! ```

#![warn(clippy::all, rust_2018_idioms)]
#![expect(clippy::print_stdout, reason = "console front end")]

mod cli;

use clap::Parser as _;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    axdoc::logging::init(cli.verbosity());

    cli::run(cli)
}
