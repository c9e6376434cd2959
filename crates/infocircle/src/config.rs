use crate::icon::IconName;
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use orbit::{Item, ItemDetail, ItemTitle, SettingsOverrides};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ItemConfig {
    pub title: ItemTitle,
    pub detail: Option<ItemDetail>,
    pub icon: Option<IconName>,
}

impl ItemConfig {
    pub fn to_item(&self) -> Item {
        let item = Item::new(
            self.title.to_string(),
            self.detail
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
        );
        match self.icon.as_ref().and_then(crate::icon::find_icon_path) {
            Some(path) => item.with_icon(path),
            None => item,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub animation: SettingsOverrides,
    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

impl Config {
    /// Shown when there is nothing usable to display yet.
    pub fn setup() -> Self {
        Self {
            animation: SettingsOverrides::default(),
            items: vec![ItemConfig {
                title: ItemTitle::new("Setup"),
                detail: Some(ItemDetail::new(
                    "Run `infocircle --write-default-config` to create a config file.",
                )),
                icon: Some(IconName::new("preferences-system")),
            }],
        }
    }

    pub fn items(&self) -> Vec<Item> {
        self.items.iter().map(ItemConfig::to_item).collect()
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "troia", "infocircle").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("INFOCIRCLE")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(environment())
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_setup(path: &Path) -> Config {
    if !path.exists() {
        return parse_config(DEFAULT_CONFIG).unwrap_or_else(|e| {
            log::error!("Bundled config is invalid: {}", e);
            Config::setup()
        });
    }

    match load_config(path) {
        Ok(c) if !c.items.is_empty() => c,
        Ok(_) => {
            log::warn!("{} lists no items", path.display());
            Config::setup()
        }
        Err(e) => {
            log::error!("Failed to load {}: {}", path.display(), e);
            Config::setup()
        }
    }
}

pub fn write_default_config(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(path, DEFAULT_CONFIG)?;
    }
    Ok(())
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

use crate::events::AppEvent;
use async_channel::Sender;

pub async fn run_async_watcher(config_path: PathBuf, tx: Sender<AppEvent>) {
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", ConfigError::from(e));
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}
