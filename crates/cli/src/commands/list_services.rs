//! List the services the catalog declares and which one is the default.

use std::path::Path;

use uichat::{Result, ServiceCatalog};

/// Always exits 0: an empty or unreadable catalog is an informational
/// outcome for this command, not a failure.
pub fn execute(config: &Path) -> Result<()> {
    let catalog = match ServiceCatalog::load(config) {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("Error: {err}");
            return Ok(());
        }
    };

    if catalog.is_empty() {
        println!("No services found in config file.");
        return Ok(());
    }

    // effective_default is Some whenever the catalog is non-empty.
    let default = catalog.effective_default().unwrap_or_default();
    println!("Available chat services (default: {default}):");
    for name in catalog.names() {
        println!("- {name}");
    }

    Ok(())
}
