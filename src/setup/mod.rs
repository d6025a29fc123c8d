//! Startup wiring: registry seeding and module discovery.
//!
//! The registry is populated once at application startup, from the primary
//! configuration and optionally from per-module config files discovered
//! under a modules directory. Everything lands in the registry as named
//! references and resolves through the manager's
//! [`WidgetResolver`](crate::resolver::WidgetResolver) at render time.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info};

use crate::config::WidgetsConfig;
use crate::registry::WidgetManager;
use crate::widget::WidgetRef;

/// Seed the registry from the primary configuration's widget table.
pub fn register_from_config(manager: &WidgetManager, config: &WidgetsConfig) {
    for (alias, target) in &config.widgets {
        manager.register_widget(alias.clone(), WidgetRef::named(target.clone()));
    }
    info!("Registered {} widgets from configuration", config.widgets.len());
}

/// Collect widget tables from per-module config files.
///
/// Scans `<modules_dir>/<module>/widgets.json`, visiting modules in name
/// order so merge results are deterministic. Later modules overwrite
/// earlier entries for the same alias. A missing directory yields an empty
/// table; unreadable or invalid module files are skipped with a debug log.
pub fn discover_module_configs(modules_dir: &Path) -> BTreeMap<String, String> {
    let mut merged = BTreeMap::new();

    let entries = match std::fs::read_dir(modules_dir) {
        Ok(entries) => entries,
        Err(err) => {
            debug!("No modules directory at {}: {}", modules_dir.display(), err);
            return merged;
        }
    };

    let mut module_dirs: Vec<_> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    module_dirs.sort();

    for module_dir in module_dirs {
        let config_path = module_dir.join("widgets.json");
        if !config_path.is_file() {
            continue;
        }

        match WidgetsConfig::from_file(&config_path) {
            Ok(config) => {
                debug!(
                    "Merging {} widgets from {}",
                    config.widgets.len(),
                    config_path.display()
                );
                merged.extend(config.widgets);
            }
            Err(err) => {
                debug!("Skipping module config {}: {}", config_path.display(), err);
            }
        }
    }

    merged
}

/// Seed the registry from discovered module configs.
///
/// Module entries use the same last-write-wins rule as direct registration,
/// so a module may override a primary-config alias.
pub fn register_modules(manager: &WidgetManager, modules_dir: &Path) {
    let widgets = discover_module_configs(modules_dir);
    let count = widgets.len();

    for (alias, target) in widgets {
        manager.register_widget(alias, WidgetRef::named(target));
    }
    info!("Registered {} widgets from modules", count);
}

/// Full startup wiring: primary config first, then discovered modules.
pub fn bootstrap(manager: &WidgetManager, config: &WidgetsConfig, modules_dir: Option<&Path>) {
    register_from_config(manager, config);
    if let Some(dir) = modules_dir {
        register_modules(manager, dir);
    }
}
