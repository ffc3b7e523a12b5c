use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use lumen_trace::Framebuffer;
use lumen_trace::Surface;

/// `lumen-<unix seconds>.png` in the working directory.
pub fn default_path() -> PathBuf {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    PathBuf::from(format!("lumen-{secs}.png"))
}

/// Writes the framebuffer as an RGBA PNG.
pub fn save_png(fb: &Framebuffer, path: &Path) -> Result<()> {
    let bytes: Vec<u8> = fb.pixels().iter().flatten().copied().collect();
    let image = image::RgbaImage::from_raw(fb.width(), fb.height(), bytes)
        .context("framebuffer size does not match its pixel count")?;
    image
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("saved screenshot {}", path.display());
    Ok(())
}
