//! This crate contains the source code for the `mazesearch` binary.

#![expect(
    clippy::cargo_common_metadata,
    reason = "The package has no public repository yet."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use mazesearch::{
    cli::{self, Cli, Command},
    App,
};

fn main() -> Result<()> {
    install()?;

    let args = Cli::parse();
    match args.command_or_default() {
        Command::Play { maps_dir } => {
            args.init_logging(true)?;

            let mut app = App::new(&maps_dir)?;
            let mut terminal = ratatui::init();
            let result = app.run(&mut terminal);
            ratatui::restore();

            result
        }
        Command::Solve {
            file,
            strategy,
            render,
        } => {
            args.init_logging(false)?;

            println!("{}", cli::solve_file(&file, strategy, render)?);

            Ok(())
        }
    }
}
