use std::ffi::OsString;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use da_ascii::luminance::render_luma;
use da_core::charset::GlyphLut;
use da_core::config::{ConvertConfig, ErrorPolicy};
use da_core::frame::AsciiGrid;
use da_source::image::load_luma;
use da_source::resize::Resizer;
use da_source::scan::{is_supported, scan_dir};
use rayon::prelude::*;

/// Compteurs d'une exécution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files printed.
    pub rendered: usize,
    /// Entries ignored for their extension.
    pub skipped_ext: usize,
    /// Accepted files that failed to load (only with [`ErrorPolicy::Skip`]).
    pub failed: usize,
}

/// Convertit chaque image d'un dossier en art ASCII.
pub struct Converter {
    config: ConvertConfig,
    lut: GlyphLut,
}

impl Converter {
    #[must_use]
    pub fn new(config: ConvertConfig) -> Self {
        Self {
            config,
            lut: GlyphLut::default(),
        }
    }

    /// Load, resize and map a single file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be decoded or resized.
    pub fn render_file(&self, path: &Path) -> Result<AsciiGrid> {
        let frame = load_luma(path)?;
        let small = Resizer::new()
            .fit(&frame, &self.config.geometry())
            .with_context(|| format!("Redimensionnement impossible : {}", path.display()))?;
        Ok(render_luma(&small, &self.lut))
    }

    /// Scan the assets directory and print every supported image to `out`.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read, if writing fails,
    /// or on the first decode failure under [`ErrorPolicy::Abort`].
    pub fn run<W: Write>(&self, out: &mut W) -> Result<RunSummary> {
        let dir = &self.config.assets_dir;
        let names = scan_dir(dir)?;

        let mut summary = RunSummary::default();
        let accepted: Vec<&OsString> = names
            .iter()
            .filter(|name| {
                let ok = is_supported(&name.to_string_lossy());
                if !ok {
                    log::debug!("Ignoré (extension) : {}", name.to_string_lossy());
                    summary.skipped_ext += 1;
                }
                ok
            })
            .collect();

        if self.config.parallel {
            let results: Vec<Result<AsciiGrid>> = accepted
                .par_iter()
                .map(|name| self.render_file(&dir.join(name)))
                .collect();
            for (name, result) in accepted.iter().zip(results) {
                self.emit(out, &name.to_string_lossy(), result, &mut summary)?;
            }
        } else {
            for name in &accepted {
                let result = self.render_file(&dir.join(name));
                self.emit(out, &name.to_string_lossy(), result, &mut summary)?;
            }
        }

        log::info!(
            "{} rendue(s), {} ignorée(s), {} en échec",
            summary.rendered,
            summary.skipped_ext,
            summary.failed
        );
        Ok(summary)
    }

    fn emit<W: Write>(
        &self,
        out: &mut W,
        name: &str,
        result: Result<AsciiGrid>,
        summary: &mut RunSummary,
    ) -> Result<()> {
        match result {
            Ok(grid) => {
                write_rendering(out, name, &grid).context("Écriture sur la sortie impossible")?;
                log::info!("{name}: {}×{}", grid.width, grid.height);
                summary.rendered += 1;
                Ok(())
            }
            Err(e) => match self.config.on_decode_error {
                ErrorPolicy::Abort => Err(e),
                ErrorPolicy::Skip => {
                    log::error!("{e:#}");
                    summary.failed += 1;
                    Ok(())
                }
            },
        }
    }
}

/// Écrit une ligne vide, le nom du fichier, puis chaque ligne de la grille.
///
/// # Errors
/// Propagates write errors from `out`.
pub fn write_rendering<W: Write>(out: &mut W, name: &str, grid: &AsciiGrid) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{name}")?;
    grid.write_rows(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};
    use std::fs;

    fn write_gray(dir: &Path, name: &str, w: u32, h: u32, value: u8) {
        GrayImage::from_pixel(w, h, Luma([value]))
            .save(dir.join(name))
            .unwrap();
    }

    fn converter_for(dir: &Path) -> Converter {
        Converter::new(ConvertConfig {
            assets_dir: dir.to_path_buf(),
            ..ConvertConfig::default()
        })
    }

    fn run_to_string(converter: &Converter) -> (String, RunSummary) {
        let mut out = Vec::new();
        let summary = converter.run(&mut out).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn white_image_renders_blank_rows() {
        let dir = tempfile::tempdir().unwrap();
        write_gray(dir.path(), "white.png", 100, 50, 255);

        let (text, summary) = run_to_string(&converter_for(dir.path()));
        let blank = " ".repeat(60);
        let mut expected = String::from("\nwhite.png\n");
        for _ in 0..15 {
            expected.push_str(&blank);
            expected.push('\n');
        }
        assert_eq!(text, expected);
        assert_eq!(summary.rendered, 1);
    }

    #[test]
    fn black_image_renders_dense_rows() {
        let dir = tempfile::tempdir().unwrap();
        write_gray(dir.path(), "black.png", 100, 50, 0);

        let (text, _) = run_to_string(&converter_for(dir.path()));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "black.png");
        assert_eq!(lines.len(), 2 + 15);
        assert!(lines[2..].iter().all(|l| *l == "@".repeat(60)));
    }

    #[test]
    fn filters_and_orders_files() {
        let dir = tempfile::tempdir().unwrap();
        write_gray(dir.path(), "a.png", 20, 20, 255);
        fs::write(dir.path().join("b.txt"), "texte").unwrap();
        image::RgbImage::from_pixel(20, 20, image::Rgb([0, 0, 0]))
            .save_with_format(dir.path().join("C.JPG"), image::ImageFormat::Jpeg)
            .unwrap();

        let (text, summary) = run_to_string(&converter_for(dir.path()));
        let headers: Vec<&str> = text
            .lines()
            .filter(|l| !l.is_empty() && !l.chars().all(|c| da_core::RAMP.contains(c)))
            .collect();
        assert_eq!(headers, vec!["C.JPG", "a.png"]);
        assert!(!text.contains("b.txt"));
        assert_eq!(summary.skipped_ext, 1);
        assert_eq!(summary.rendered, 2);
    }

    #[test]
    fn every_row_has_configured_width() {
        let dir = tempfile::tempdir().unwrap();
        write_gray(dir.path(), "tall.png", 10, 90, 128);
        write_gray(dir.path(), "wide.png", 300, 2, 64);

        let (text, _) = run_to_string(&converter_for(dir.path()));
        let rows: Vec<&str> = text
            .lines()
            .filter(|l| !l.is_empty() && !l.ends_with(".png"))
            .collect();
        // tall : 90 * 30 / 10 = 270, wide : plancher de 10
        assert_eq!(rows.len(), 270 + 10);
        assert!(rows.iter().all(|r| r.chars().count() == 60));
    }

    #[test]
    fn very_tall_image_keeps_top_and_bottom() {
        let dir = tempfile::tempdir().unwrap();
        let mut img = GrayImage::from_pixel(1, 2200, Luma([0]));
        for y in 1100..2200 {
            img.put_pixel(0, y, Luma([255]));
        }
        img.save(dir.path().join("tall.png")).unwrap();

        let (text, _) = run_to_string(&converter_for(dir.path()));
        let rows: Vec<&str> = text.lines().skip(2).collect();
        // 2200 * 30 / 1 = 66 000 lignes, au-delà de la plage u16
        assert_eq!(rows.len(), 66_000);
        assert_eq!(rows[0], "@".repeat(60));
        assert_eq!(rows[rows.len() - 1], " ".repeat(60));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_name_is_loaded_and_printed() {
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let raw = std::ffi::OsStr::from_bytes(b"caf\xe9.png");
        GrayImage::from_pixel(20, 20, Luma([0]))
            .save(dir.path().join(raw))
            .unwrap();

        let (text, summary) = run_to_string(&converter_for(dir.path()));
        assert_eq!(summary.rendered, 1);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "caf\u{FFFD}.png");
        assert!(lines[2..].iter().all(|l| *l == "@".repeat(60)));
    }

    #[test]
    fn output_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        write_gray(dir.path(), "x.png", 33, 17, 90);
        write_gray(dir.path(), "y.jpeg", 64, 64, 200);

        let converter = converter_for(dir.path());
        let (first, _) = run_to_string(&converter);
        let (second, _) = run_to_string(&converter);
        assert_eq!(first, second);
    }

    #[test]
    fn parallel_matches_sequential() {
        let dir = tempfile::tempdir().unwrap();
        for (i, value) in [0u8, 40, 120, 200, 255].iter().enumerate() {
            write_gray(dir.path(), &format!("img{i}.png"), 50 + i as u32 * 7, 40, *value);
        }

        let (sequential, _) = run_to_string(&converter_for(dir.path()));
        let parallel = Converter::new(ConvertConfig {
            assets_dir: dir.path().to_path_buf(),
            parallel: true,
            ..ConvertConfig::default()
        });
        let (par_text, _) = run_to_string(&parallel);
        assert_eq!(sequential, par_text);
    }

    #[test]
    fn decode_failure_aborts_after_earlier_output() {
        let dir = tempfile::tempdir().unwrap();
        write_gray(dir.path(), "a.png", 20, 20, 0);
        fs::write(dir.path().join("b.png"), b"pas une image").unwrap();
        write_gray(dir.path(), "c.png", 20, 20, 0);

        let mut out = Vec::new();
        let err = converter_for(dir.path()).run(&mut out).unwrap_err();
        assert!(format!("{err:#}").contains("b.png"));

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("a.png"));
        assert!(!text.contains("c.png"));
    }

    #[test]
    fn decode_failure_is_skipped_when_requested() {
        let dir = tempfile::tempdir().unwrap();
        write_gray(dir.path(), "a.png", 20, 20, 0);
        fs::write(dir.path().join("b.png"), b"pas une image").unwrap();
        write_gray(dir.path(), "c.png", 20, 20, 0);

        let converter = Converter::new(ConvertConfig {
            assets_dir: dir.path().to_path_buf(),
            on_decode_error: ErrorPolicy::Skip,
            ..ConvertConfig::default()
        });
        let (text, summary) = run_to_string(&converter);
        assert!(text.contains("a.png"));
        assert!(!text.contains("b.png"));
        assert!(text.contains("c.png"));
        assert_eq!(
            summary,
            RunSummary {
                rendered: 2,
                skipped_ext: 0,
                failed: 1
            }
        );
    }

    #[test]
    fn missing_directory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let converter = converter_for(&dir.path().join("assets"));
        let mut out = Vec::new();
        assert!(converter.run(&mut out).is_err());
        assert!(out.is_empty());
    }
}
