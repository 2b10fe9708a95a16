use std::path::PathBuf;

use clap::Parser;

use crate::error::{CorniceError, Result};

#[derive(Parser, Debug)]
#[command(
    name = "cornice",
    version,
    about = "Collect a username and a masked password in a terminal form."
)]
pub struct Cli {
    /// Start with this viewport instead of asking the terminal (e.g. 80x24)
    #[arg(long, value_name = "WxH")]
    pub size: Option<String>,

    /// Do not capture the mouse; focus then moves with the keyboard only
    #[arg(long = "no-mouse")]
    pub no_mouse: bool,

    /// Prefill the username field
    #[arg(long, value_name = "NAME")]
    pub username: Option<String>,

    /// Character shown in place of each password character
    #[arg(long = "mask-char", default_value_t = '\u{2022}')]
    pub mask_char: char,

    /// Append diagnostic logs to this file (filter with RUST_LOG)
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Parse a `WIDTHxHEIGHT` pair such as `80x24`. Both parts must be non-zero.
pub fn parse_size(raw: &str) -> Result<(u16, u16)> {
    let invalid = || CorniceError::InvalidSize(raw.to_string());
    let (w, h) = raw
        .trim()
        .split_once(['x', 'X'])
        .ok_or_else(invalid)?;
    let width: u16 = w.trim().parse().map_err(|_| invalid())?;
    let height: u16 = h.trim().parse().map_err(|_| invalid())?;
    if width == 0 || height == 0 {
        return Err(invalid());
    }
    Ok((width, height))
}
