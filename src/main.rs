mod cli;
mod error;
mod event;
mod focus;
mod form;
mod layout;
mod logging;
mod text_field;
mod tui;

use clap::Parser;
use tracing::info;

use cli::Cli;
use error::{CorniceError, Result};
use form::LoginForm;

fn run(cli: Cli) -> Result<()> {
    let _log_guard = logging::init(cli.log_file.as_deref())?;

    let (width, height) = match cli.size.as_deref() {
        Some(raw) => cli::parse_size(raw)?,
        None => crossterm::terminal::size().map_err(CorniceError::TerminalSize)?,
    };
    info!(width, height, "starting form");

    let mut form = LoginForm::new(width, height, cli.mask_char);
    if let Some(name) = cli.username.as_deref() {
        form = form.with_username(name);
    }
    tui::run(&mut form, tui::SessionOptions { mouse: !cli.no_mouse })?;

    // The alternate screen is gone by now; repeat the result on the normal one.
    if form.is_submitted() {
        for line in form.summary_lines() {
            println!("{line}");
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
