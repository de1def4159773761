use crate::error::{DiscError, Result};
use crate::types::config::DiscConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use toml::{Table, Value};
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "disc.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".disc/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/disc/config.toml";

pub fn load_config(root: &Path) -> Result<Option<DiscConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Config layers in increasing precedence. The repo file decides whether
/// any config applies at all, so it is kept separately.
struct Layers {
    repo: PathBuf,
    ordered: Vec<PathBuf>,
}

impl Layers {
    fn for_root(root: &Path, global_path: Option<&Path>) -> Self {
        let repo = root.join(DEFAULT_CONFIG_FILE);
        let ordered = global_path
            .map(Path::to_path_buf)
            .into_iter()
            .chain([repo.clone(), root.join(DEFAULT_LOCAL_FILE)])
            .collect();
        Self { repo, ordered }
    }
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<DiscConfig>> {
    let layers = Layers::for_root(root, global_path);
    if !layers.repo.is_file() {
        return Ok(None);
    }

    let mut merged = Table::new();
    for path in &layers.ordered {
        if let Some(layer) = read_layer(path)? {
            debug!(path = %path.display(), keys = layer.len(), "applying config layer");
            overlay(&mut merged, layer);
        }
    }

    let cfg = DiscConfig::deserialize(Value::Table(merged))
        .map_err(|e| DiscError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn read_layer(path: &Path) -> Result<Option<Table>> {
    if !path.is_file() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    content
        .parse::<Table>()
        .map(Some)
        .map_err(|e| DiscError::ConfigParse(format!("{}: {e}", path.display())))
}

/// Later layers win key by key; sub-tables are combined rather than replaced.
fn overlay(base: &mut Table, layer: Table) {
    for (key, incoming) in layer {
        let incoming = match (base.get_mut(&key), incoming) {
            (Some(Value::Table(existing)), Value::Table(nested)) => {
                overlay(existing, nested);
                continue;
            }
            (_, incoming) => incoming,
        };
        base.insert(key, incoming);
    }
}
