// src/main.rs
use color_eyre::eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    hs_scrape::cli::run()
}
