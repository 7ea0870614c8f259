use crate::models::{BACKGROUND, FOREGROUND, ICON_DIR, ICON_SPECS, IconSpec};
use crate::utils::{Overlay, ensure_dir, fill_ellipse, save_png};
use image::RgbaImage;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("icon size must be a positive number of pixels, got {0}")]
    InvalidSize(u32),
    #[error("failed to create icon directory {}", .0.display())]
    CreateDir(PathBuf, #[source] io::Error),
    #[error("failed to write icon {}", .0.display())]
    Encode(PathBuf, #[source] image::ImageError),
    #[error("failed to write progress output")]
    Console(#[source] io::Error),
}

/// Draws a single icon: a green square with a white plate in the middle.
pub fn synthesize(edge: u32) -> Result<RgbaImage, IconError> {
    if edge == 0 {
        return Err(IconError::InvalidSize(edge));
    }

    let mut canvas = RgbaImage::from_pixel(edge, edge, BACKGROUND);
    let overlay = Overlay::for_edge(edge);
    tracing::debug!(
        edge,
        offset = overlay.offset,
        diameter = overlay.diameter,
        "drawing plate"
    );
    fill_ellipse(
        &mut canvas,
        overlay.offset,
        overlay.offset,
        overlay.end(),
        overlay.end(),
        FOREGROUND,
    );
    Ok(canvas)
}

/// Generates every icon in `specs` into `output_dir`, reporting progress to `out`.
///
/// The directory is created if missing and existing files are overwritten. The first
/// failure stops the run; icons written before it are left on disk.
pub fn generate_icons<W: Write>(
    output_dir: &Path,
    specs: &[IconSpec],
    out: &mut W,
) -> Result<Vec<PathBuf>, IconError> {
    let started = Instant::now();
    ensure_dir(output_dir).map_err(|e| IconError::CreateDir(output_dir.to_owned(), e))?;

    let mut written = Vec::with_capacity(specs.len());
    for spec in specs {
        writeln!(out, "Creating {}", spec).map_err(IconError::Console)?;
        let icon = synthesize(spec.size)?;

        let icon_path = output_dir.join(spec.file_name);
        save_png(&icon, &icon_path).map_err(|e| IconError::Encode(icon_path.clone(), e))?;
        tracing::debug!(path = %icon_path.display(), size = spec.size, "saved icon");
        written.push(icon_path);
    }

    writeln!(out, "✅ All app icons created successfully!").map_err(IconError::Console)?;
    writeln!(out, "Icons saved to: {}", output_dir.display()).map_err(IconError::Console)?;
    tracing::info!(
        count = written.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "icon set generated"
    );
    Ok(written)
}

/// Generates the fixed iOS icon set into the asset catalog under the working directory.
pub fn run() -> Result<Vec<PathBuf>, IconError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    generate_icons(Path::new(ICON_DIR), &ICON_SPECS, &mut out)
}
