use std::path::PathBuf;

use clap::Parser;
use da_core::config::{ConvertConfig, ErrorPolicy};

/// dirascii — convertit un dossier d'images en art ASCII sur stdout.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Dossier d'images à convertir. Défaut : `assets`.
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Largeur de sortie en caractères. Défaut : 60.
    #[arg(long)]
    pub width: Option<u32>,

    /// Hauteur minimale en lignes. Défaut : 10.
    #[arg(long)]
    pub min_height: Option<u32>,

    /// Compression verticale (hauteur glyphe / largeur glyphe). Défaut : 0.5.
    #[arg(long)]
    pub vertical_scale: Option<f32>,

    /// Ignorer les fichiers illisibles au lieu d'interrompre.
    #[arg(long, default_value_t = false)]
    pub keep_going: bool,

    /// Décoder les fichiers en parallèle (ordre de sortie inchangé).
    #[arg(long, default_value_t = false)]
    pub parallel: bool,

    /// Fichier de configuration TOML. Ignoré s'il n'existe pas.
    #[arg(short, long, default_value = "dirascii.toml")]
    pub config: PathBuf,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: log::LevelFilter,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded config.
    pub fn apply_overrides(&self, config: &mut ConvertConfig) {
        if let Some(ref dir) = self.assets {
            config.assets_dir.clone_from(dir);
        }
        if let Some(w) = self.width {
            config.width = w;
        }
        if let Some(h) = self.min_height {
            config.min_height = h;
        }
        if let Some(s) = self.vertical_scale {
            config.vertical_scale = s;
        }
        if self.keep_going {
            config.on_decode_error = ErrorPolicy::Skip;
        }
        if self.parallel {
            config.parallel = true;
        }
        config.clamp_all();
    }
}
