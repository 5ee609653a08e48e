use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Configuration complète d'une conversion.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine, qui
/// reproduit le comportement historique (dossier `assets`, 60 colonnes).
///
/// # Example
/// ```
/// use da_core::config::ConvertConfig;
/// let config = ConvertConfig::default();
/// assert_eq!(config.width, 60);
/// assert_eq!(config.min_height, 10);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ConvertConfig {
    /// Dossier scanné (non récursif).
    pub assets_dir: PathBuf,
    /// Largeur de sortie en caractères.
    pub width: u32,
    /// Hauteur minimale en lignes.
    pub min_height: u32,
    /// Compression verticale (les glyphes sont ~2× plus hauts que larges).
    pub vertical_scale: f32,
    /// Comportement sur échec de décodage.
    pub on_decode_error: ErrorPolicy,
    /// Décoder et rendre les fichiers en parallèle (sortie inchangée).
    pub parallel: bool,
}

/// What to do when an accepted file fails to load.
///
/// # Example
/// ```
/// use da_core::config::ErrorPolicy;
/// assert_eq!(ErrorPolicy::default(), ErrorPolicy::Abort);
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// First failure terminates the run.
    #[default]
    Abort,
    /// Log the failure and continue with the next file.
    Skip,
}

/// Geometry parameters needed by the resizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    /// Output width in glyphs.
    pub width: u32,
    /// Floor for the output height.
    pub min_height: u32,
    /// Vertical compensation factor.
    pub vertical_scale: f32,
}

impl Default for Geometry {
    fn default() -> Self {
        ConvertConfig::default().geometry()
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            width: 60,
            min_height: 10,
            vertical_scale: 0.5,
            on_decode_error: ErrorPolicy::Abort,
            parallel: false,
        }
    }
}

impl ConvertConfig {
    /// Clamp all numeric fields to their valid ranges.
    /// Called after TOML deserialization and CLI overrides.
    pub fn clamp_all(&mut self) {
        self.width = self.width.clamp(1, 1000);
        self.min_height = self.min_height.clamp(1, 1000);
        if !self.vertical_scale.is_finite() {
            self.vertical_scale = 0.5;
        }
        self.vertical_scale = self.vertical_scale.clamp(0.05, 4.0);
    }

    /// Resizer view of this config.
    #[must_use]
    pub fn geometry(&self) -> Geometry {
        Geometry {
            width: self.width,
            min_height: self.min_height,
            vertical_scale: self.vertical_scale,
        }
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    convert: Option<ConvertSection>,
}

/// `[convert]` section, all fields optional for partial override.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConvertSection {
    assets_dir: Option<PathBuf>,
    width: Option<u32>,
    min_height: Option<u32>,
    vertical_scale: Option<f32>,
    on_decode_error: Option<ErrorPolicy>,
    parallel: Option<bool>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use da_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("dirascii.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<ConvertConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Erreur de parsing TOML dans {}", path.display()))
}

/// Parse TOML text into a config, starting from defaults.
///
/// # Errors
/// Returns an error on invalid TOML or unknown keys in `[convert]`.
pub fn parse_config(content: &str) -> Result<ConvertConfig> {
    let file: ConfigFile = toml::from_str(content)?;
    let mut config = ConvertConfig::default();

    if let Some(c) = file.convert {
        if let Some(v) = c.assets_dir {
            config.assets_dir = v;
        }
        if let Some(v) = c.width {
            config.width = v;
        }
        if let Some(v) = c.min_height {
            config.min_height = v;
        }
        if let Some(v) = c.vertical_scale {
            config.vertical_scale = v;
        }
        if let Some(v) = c.on_decode_error {
            config.on_decode_error = v;
        }
        if let Some(v) = c.parallel {
            config.parallel = v;
        }
    } else {
        log::debug!("Pas de section [convert], valeurs par défaut");
    }

    config.clamp_all();
    Ok(config)
}
