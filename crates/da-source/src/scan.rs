use std::ffi::OsString;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Extensions image reconnues (comparées en minuscules).
pub const IMAGE_EXTS: &[&str] = &["png", "jpg", "jpeg"];

/// Liste les entrées d'un dossier, triées par ordre lexicographique octet par octet.
///
/// Les noms restent bruts (`OsString`) pour pouvoir rouvrir les fichiers dont
/// le nom n'est pas de l'UTF-8. Non récursif : les sous-dossiers apparaissent comme des entrées ordinaires.
/// Aucun filtrage n'est fait ici.
///
/// # Errors
/// Retourne une erreur si le dossier n'existe pas ou ne peut être lu.
///
/// # Example
/// ```no_run
/// use da_source::scan::scan_dir;
/// use std::path::Path;
/// let names = scan_dir(Path::new("assets")).unwrap();
/// ```
pub fn scan_dir(dir: &Path) -> Result<Vec<OsString>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Impossible de lire le dossier {}", dir.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Entrée illisible dans {}", dir.display()))?;
        names.push(entry.file_name());
    }
    names.sort();
    log::debug!("{} entrées dans {}", names.len(), dir.display());
    Ok(names)
}

/// Extension after the last `.`, lower-cased. `None` when the name has no dot.
///
/// # Example
/// ```
/// use da_source::scan::extension_of;
/// assert_eq!(extension_of("photo.Final.JPG").as_deref(), Some("jpg"));
/// assert_eq!(extension_of("README"), None);
/// ```
#[must_use]
pub fn extension_of(name: &str) -> Option<String> {
    name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase())
}

/// True if `name` carries one of [`IMAGE_EXTS`].
///
/// # Example
/// ```
/// use da_source::scan::is_supported;
/// assert!(is_supported("C.JPG"));
/// assert!(!is_supported("b.txt"));
/// ```
#[must_use]
pub fn is_supported(name: &str) -> bool {
    extension_of(name).is_some_and(|ext| IMAGE_EXTS.contains(&ext.as_str()))
}
