use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::app::domain::settings::{AppSettings, SettingKey, SyntaxTheme};
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::infrastructure::platform::detect_system_dark_mode;

type Observer = Box<dyn FnMut(&AppSettings)>;

/// Persisted preferences with per-key change notification.
///
/// Constructed once at startup and handed to whoever needs it; there is no
/// process-wide instance. Every effective change is written to disk, then
/// observers run whether or not the write succeeded. Writing a value equal to
/// the stored one does nothing.
pub struct SettingsStore {
    settings: AppSettings,
    path: Option<PathBuf>,
    observers: Vec<(SettingKey, Observer)>,
}

impl SettingsStore {
    /// Load from the per-user config file, or start from defaults.
    pub fn load() -> Self {
        Self::open(Self::config_path())
    }

    /// Load from `path`. A missing file yields defaults seeded with the
    /// desktop's dark preference; an unreadable or corrupt one is logged and
    /// replaced by plain defaults on the next write.
    pub fn open(path: PathBuf) -> Self {
        Self::open_with(path, detect_system_dark_mode)
    }

    fn open_with(path: PathBuf, system_dark_mode: impl FnOnce() -> bool) -> Self {
        let settings = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to parse settings, using defaults");
                    AppSettings::default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file yet");
                AppSettings {
                    dark_mode: system_dark_mode(),
                    ..AppSettings::default()
                }
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read settings, using defaults");
                AppSettings::default()
            }
        };

        Self {
            settings,
            path: Some(path),
            observers: Vec::new(),
        }
    }

    /// A store that never touches the filesystem.
    pub fn in_memory(settings: AppSettings) -> Self {
        Self {
            settings,
            path: None,
            observers: Vec::new(),
        }
    }

    /// Get config file path (cross-platform)
    pub fn config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("text-viewer");
        path.push("settings.json");
        path
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn snapshot(&self) -> &AppSettings {
        &self.settings
    }

    pub fn dark_mode(&self) -> bool {
        self.settings.dark_mode
    }

    /// Register `callback` to run after `key` changes.
    pub fn subscribe(&mut self, key: SettingKey, callback: impl FnMut(&AppSettings) + 'static) {
        self.observers.push((key, Box::new(callback)));
    }

    pub fn get_bool(&self, key: SettingKey) -> Result<bool> {
        match key {
            SettingKey::DarkMode => Ok(self.settings.dark_mode),
            SettingKey::WindowMaximized => Ok(self.settings.window_maximized),
            _ => Err(type_mismatch(key, "boolean")),
        }
    }

    pub fn set_bool(&mut self, key: SettingKey, value: bool) -> Result<()> {
        let slot = match key {
            SettingKey::DarkMode => &mut self.settings.dark_mode,
            SettingKey::WindowMaximized => &mut self.settings.window_maximized,
            _ => return Err(type_mismatch(key, "boolean")),
        };
        if *slot == value {
            return Ok(());
        }
        *slot = value;
        self.commit(key)
    }

    pub fn get_int(&self, key: SettingKey) -> Result<i32> {
        match key {
            SettingKey::WindowWidth => Ok(self.settings.window_width),
            SettingKey::WindowHeight => Ok(self.settings.window_height),
            _ => Err(type_mismatch(key, "integer")),
        }
    }

    pub fn set_int(&mut self, key: SettingKey, value: i32) -> Result<()> {
        let slot = match key {
            SettingKey::WindowWidth => &mut self.settings.window_width,
            SettingKey::WindowHeight => &mut self.settings.window_height,
            _ => return Err(type_mismatch(key, "integer")),
        };
        if *slot == value {
            return Ok(());
        }
        *slot = value;
        self.commit(key)
    }

    pub fn set_theme(&mut self, key: SettingKey, value: SyntaxTheme) -> Result<()> {
        let slot = match key {
            SettingKey::SyntaxThemeLight => &mut self.settings.syntax_theme_light,
            SettingKey::SyntaxThemeDark => &mut self.settings.syntax_theme_dark,
            _ => return Err(type_mismatch(key, "theme")),
        };
        if *slot == value {
            return Ok(());
        }
        *slot = value;
        self.commit(key)
    }

    /// Flip `dark-mode` and return the new value.
    pub fn toggle_dark_mode(&mut self) -> Result<bool> {
        let dark = !self.settings.dark_mode;
        self.set_bool(SettingKey::DarkMode, dark)?;
        Ok(dark)
    }

    /// Persist, then notify. The in-memory value stays changed and observers
    /// still run when the write fails; the write error is returned.
    fn commit(&mut self, key: SettingKey) -> Result<()> {
        let saved = self.save();
        match &saved {
            Ok(()) => info!(%key, "setting changed"),
            Err(e) => warn!(%key, error = %e, "setting changed but not persisted"),
        }
        let settings = &self.settings;
        for (observed, callback) in self.observers.iter_mut() {
            if *observed == key {
                callback(settings);
            }
        }
        saved
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<()> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.settings)?;
        fs::write(path, json)?;

        Ok(())
    }
}

fn type_mismatch(key: SettingKey, expected: &str) -> AppError {
    AppError::Settings(format!("\"{}\" is not a {} setting", key, expected))
}
