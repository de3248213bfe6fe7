use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const APP_FOLDER_NAME: &str = "EduFinance";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SimDefaults {
    pub interest_rate: f64,
    pub loan_term_years: u32,
}

impl Default for SimDefaults {
    fn default() -> Self {
        Self {
            interest_rate: 5.5,
            loan_term_years: 10,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct UiSettings {
    #[serde(default)]
    pub last_theme: Option<String>,
    #[serde(default)]
    pub last_language: Option<String>,
    #[serde(default)]
    pub window_size: Option<(f32, f32)>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Settings {
    pub version: String,
    pub base_path: String,
    pub mode: String,
    #[serde(default)]
    pub ui: UiSettings,
    #[serde(default)]
    pub sim: SimDefaults,
}

pub fn default_base_path() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()));

    if let Some(dir) = exe_dir {
        return dir.join("data");
    }

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_FOLDER_NAME)
}

pub fn ensure_base_folders(base: &Path) -> io::Result<()> {
    let dirs = [
        base.to_path_buf(),
        base.join("config"),
        base.join("themes"),
        base.join("exports"),
    ];

    for d in dirs {
        if !d.exists() {
            fs::create_dir_all(&d)?;
        }
    }

    Ok(())
}

pub fn settings_path(base: &Path) -> PathBuf {
    base.join("config").join("settings.json")
}

pub fn load_or_init_settings(base: &Path) -> io::Result<Settings> {
    let config_path = settings_path(base);

    if config_path.exists() {
        let contents = fs::read_to_string(&config_path)?;
        let mut settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("JSON parse error: {e}")))?;

        // Keep base_path in sync when the data folder moved.
        if settings.base_path != base.to_string_lossy() {
            settings.base_path = base.to_string_lossy().to_string();
        }
        return Ok(settings);
    }

    let settings = Settings {
        version: "0.1.0".to_string(),
        base_path: base.to_string_lossy().to_string(),
        mode: "gui".to_string(),
        ui: UiSettings::default(),
        sim: SimDefaults::default(),
    };

    let json = serde_json::to_string_pretty(&settings)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("JSON encode error: {e}")))?;
    fs::write(&config_path, json)?;

    Ok(settings)
}

pub fn save_settings(settings: &Settings, base: &Path) -> io::Result<()> {
    let config_path = settings_path(base);
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("JSON encode error: {e}")))?;
    fs::write(&config_path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn first_run_writes_loadable_defaults() {
        let dir = TempDir::new().expect("temp dir");
        ensure_base_folders(dir.path()).expect("folders");
        let settings = load_or_init_settings(dir.path()).expect("init");
        assert_eq!(settings.mode, "gui");
        assert_eq!(settings.sim.interest_rate, 5.5);
        assert_eq!(settings.sim.loan_term_years, 10);
        assert!(settings_path(dir.path()).exists());

        let reloaded = load_or_init_settings(dir.path()).expect("reload");
        assert_eq!(reloaded.version, settings.version);
    }

    #[test]
    fn saved_preferences_survive_reload() {
        let dir = TempDir::new().expect("temp dir");
        ensure_base_folders(dir.path()).expect("folders");
        let mut settings = load_or_init_settings(dir.path()).expect("init");
        settings.ui.last_language = Some("Turkish".to_string());
        settings.ui.last_theme = Some("paper_light".to_string());
        save_settings(&settings, dir.path()).expect("save");

        let reloaded = load_or_init_settings(dir.path()).expect("reload");
        assert_eq!(reloaded.ui.last_language.as_deref(), Some("Turkish"));
        assert_eq!(reloaded.ui.last_theme.as_deref(), Some("paper_light"));
    }
}
