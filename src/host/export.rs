//! PNG export of the scene.

use crate::config::ExportConfig;
use crate::draw::{Scene, render_scene};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while exporting the canvas.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Export size {width}x{height} is out of range")]
    InvalidSize { width: f64, height: f64 },

    #[error("Failed to create export surface: {0}")]
    Surface(#[from] cairo::Error),

    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] cairo::IoError),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Rasterises the scene at `multiplier` times its size and encodes it as PNG.
pub fn render_png(scene: &Scene, multiplier: f64) -> Result<Vec<u8>, ExportError> {
    let width = (f64::from(scene.width()) * multiplier).ceil();
    let height = (f64::from(scene.height()) * multiplier).ceil();
    if !(1.0..=f64::from(i32::MAX)).contains(&width) || !(1.0..=f64::from(i32::MAX)).contains(&height)
    {
        return Err(ExportError::InvalidSize { width, height });
    }

    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width as i32, height as i32)?;
    {
        let ctx = cairo::Context::new(&surface)?;
        ctx.scale(multiplier, multiplier);
        render_scene(&ctx, scene);
    }
    surface.flush();

    let mut buffer = Vec::new();
    surface.write_to_png(&mut buffer)?;
    log::debug!(
        "Encoded {}x{} PNG ({} bytes)",
        width,
        height,
        buffer.len()
    );
    Ok(buffer)
}

/// Generates `<prefix>-<unix-ms>.png` for the current instant.
pub fn export_filename(prefix: &str) -> String {
    format!("{}-{}.png", prefix, chrono::Utc::now().timestamp_millis())
}

/// Directory exports go to when no explicit path is given.
///
/// Uses the configured directory, then the user's download directory, then
/// the current directory.
pub fn export_directory(cfg: &ExportConfig) -> PathBuf {
    cfg.directory
        .as_deref()
        .map(expand_tilde)
        .or_else(dirs::download_dir)
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Writes PNG bytes to `path`, creating missing parent directories.
pub fn write_png(bytes: &[u8], path: &Path) -> Result<PathBuf, ExportError> {
    let write_err = |source: std::io::Error| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty())
        && !parent.exists()
    {
        log::info!("Creating export directory: {}", parent.display());
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    fs::write(path, bytes).map_err(write_err)?;
    log::info!("Exported canvas to {} ({} bytes)", path.display(), bytes.len());
    Ok(path.to_path_buf())
}

/// Expand tilde (~) in configured paths.
fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::BACKGROUND;

    #[test]
    fn filename_has_prefix_and_millis() {
        let name = export_filename("system-design");
        let millis = name
            .strip_prefix("system-design-")
            .and_then(|rest| rest.strip_suffix(".png"))
            .unwrap();
        assert!(millis.parse::<i64>().unwrap() > 1_600_000_000_000);
    }

    #[test]
    fn png_is_scaled_by_multiplier() {
        let scene = Scene::new(40, 30, BACKGROUND);
        let png = render_png(&scene, 2.0).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = cairo::ImageSurface::create_from_png(&mut png.as_slice()).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (80, 60));
    }

    #[test]
    fn configured_directory_wins() {
        let cfg = ExportConfig {
            directory: Some(PathBuf::from("/tmp/exports")),
            ..ExportConfig::default()
        };
        assert_eq!(export_directory(&cfg), PathBuf::from("/tmp/exports"));
    }

    #[test]
    fn write_png_creates_parent_directories() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("nested/out.png");
        let written = write_png(b"png", &path).unwrap();
        assert_eq!(written, path);
        assert_eq!(fs::read(&path).unwrap(), b"png");
    }
}
