// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{Context, Result};
use chrono::Local;
use portfolio_site::{export_site, logging, Site, SiteConfig};
use std::env;
use std::path::Path;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let export = args.len() > 1 && args[1] == "export";

    let config = SiteConfig::load().context("Failed to load configuration")?;
    if let Some(filter) = log_filter(export, &config) {
        logging::init(filter);
    }
    let site = Site::from_config(&config).context("Failed to load profile")?;

    if export {
        // Export mode
        let dir = args.get(2).map(String::as_str).unwrap_or("site");
        run_export(&site, Path::new(dir))?;
    } else {
        // UI mode (default)
        run_ui_mode(site)?;
    }

    Ok(())
}

/// No subscriber at all in UI mode: log lines would draw over the screen,
/// even when `RUST_LOG` is set.
fn log_filter(export: bool, config: &SiteConfig) -> Option<&str> {
    export.then_some(config.log_filter.as_str())
}

fn run_export(site: &Site, dir: &Path) -> Result<()> {
    println!("📦 Exporting static site to {}", dir.display());

    let written = export_site(site, dir, Local::now().date_naive())?;
    for path in &written {
        println!("  ✓ {}", path.display());
    }

    println!("✅ Exported {} pages", written.len());
    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(site: Site) -> Result<()> {
    let mut app = ui::App::new(site, Local::now().date_naive());
    ui::run_ui(&mut app)?;
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_site: Site) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use the web UI: cargo run --bin portfolio-server --features server");
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_mode_installs_no_subscriber() {
        let config = SiteConfig::from_toml("").unwrap();

        assert_eq!(log_filter(false, &config), None);
        assert_eq!(log_filter(true, &config), Some(config.log_filter.as_str()));
    }
}
