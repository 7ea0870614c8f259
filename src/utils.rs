use crate::models::{OVERLAY_DENOMINATOR, OVERLAY_NUMERATOR};
use image::{ImageFormat, ImageResult, Rgba, RgbaImage};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Diameter of the plate for a canvas of the given edge length, rounded down.
pub fn overlay_diameter(edge: u32) -> u32 {
    // u64 so a huge edge can't overflow the multiplication
    (u64::from(edge) * u64::from(OVERLAY_NUMERATOR) / u64::from(OVERLAY_DENOMINATOR)) as u32
}

/// Distance between the canvas border and the plate's bounding box, on both axes.
pub fn overlay_offset(edge: u32) -> u32 {
    (edge - overlay_diameter(edge)) / 2
}

/// Square bounding box of the plate, `[offset, offset + diameter]` on both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Overlay {
    pub offset: u32,
    pub diameter: u32,
}

impl Overlay {
    pub fn for_edge(edge: u32) -> Self {
        Self {
            offset: overlay_offset(edge),
            diameter: overlay_diameter(edge),
        }
    }

    /// Inclusive far corner of the bounding box.
    pub fn end(&self) -> u32 {
        self.offset + self.diameter
    }
}

/// Fills the ellipse inscribed in the inclusive pixel box `[x0, x1] x [y0, y1]`.
///
/// A pixel is painted when its centre falls inside the ellipse. Parts of the box that
/// lie outside the canvas are clipped.
pub fn fill_ellipse(canvas: &mut RgbaImage, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgba<u8>) {
    if x1 < x0 || y1 < y0 || canvas.width() == 0 || canvas.height() == 0 {
        return;
    }
    let rx = f64::from(x1 - x0 + 1) / 2.0;
    let ry = f64::from(y1 - y0 + 1) / 2.0;
    let cx = f64::from(x0) + rx;
    let cy = f64::from(y0) + ry;

    let x_end = x1.min(canvas.width() - 1);
    let y_end = y1.min(canvas.height() - 1);

    for y in y0..=y_end {
        let dy = (f64::from(y) + 0.5 - cy) / ry;
        for x in x0..=x_end {
            let dx = (f64::from(x) + 0.5 - cx) / rx;
            if dx * dx + dy * dy <= 1.0 {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

/// Creates the directory and any missing parents. Succeeds if it already exists.
pub fn ensure_dir(path: &Path) -> Result<(), io::Error> {
    fs::create_dir_all(path)
}

/// Encodes the canvas as PNG and writes it to `path`, replacing any existing file.
pub fn save_png(canvas: &RgbaImage, path: &Path) -> ImageResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    canvas.write_to(&mut writer, ImageFormat::Png)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    #[test]
    fn diameter_is_floor_of_sixty_percent() {
        assert_eq!(overlay_diameter(20), 12);
        assert_eq!(overlay_diameter(29), 17);
        assert_eq!(overlay_diameter(87), 52);
        assert_eq!(overlay_diameter(167), 100);
        assert_eq!(overlay_diameter(1024), 614);
        assert_eq!(overlay_diameter(1), 0);
    }

    #[test]
    fn overlay_is_centered() {
        assert_eq!(Overlay::for_edge(20), Overlay { offset: 4, diameter: 12 });
        assert_eq!(Overlay::for_edge(29), Overlay { offset: 6, diameter: 17 });
        assert_eq!(Overlay::for_edge(1024), Overlay { offset: 205, diameter: 614 });
        assert_eq!(Overlay::for_edge(1024).end(), 819);
    }

    #[test]
    fn ellipse_stays_inside_its_box() {
        let mut canvas = RgbaImage::from_pixel(20, 20, CLEAR);
        fill_ellipse(&mut canvas, 4, 4, 16, 16, RED);

        for (x, y, pixel) in canvas.enumerate_pixels() {
            let in_box = (4..=16).contains(&x) && (4..=16).contains(&y);
            if !in_box {
                assert_eq!(*pixel, CLEAR, "pixel ({x}, {y}) outside the box was painted");
            }
        }
        assert_eq!(*canvas.get_pixel(10, 10), RED);
        assert_eq!(*canvas.get_pixel(4, 10), RED);
        assert_eq!(*canvas.get_pixel(16, 10), RED);
        assert_eq!(*canvas.get_pixel(10, 4), RED);
        assert_eq!(*canvas.get_pixel(4, 4), CLEAR);
        assert_eq!(*canvas.get_pixel(16, 16), CLEAR);
    }

    #[test]
    fn ellipse_is_symmetric_within_its_box() {
        let mut canvas = RgbaImage::from_pixel(29, 29, CLEAR);
        fill_ellipse(&mut canvas, 6, 6, 23, 23, RED);
        for y in 6..=23 {
            for x in 6..=23 {
                let pixel = canvas.get_pixel(x, y);
                assert_eq!(pixel, canvas.get_pixel(29 - x, y));
                assert_eq!(pixel, canvas.get_pixel(x, 29 - y));
                assert_eq!(pixel, canvas.get_pixel(y, x));
            }
        }
    }

    #[test]
    fn ellipse_is_clipped_to_canvas() {
        let mut canvas = RgbaImage::from_pixel(4, 4, CLEAR);
        fill_ellipse(&mut canvas, 0, 0, 9, 9, RED);
        assert_eq!(*canvas.get_pixel(3, 3), RED);
        assert_eq!(*canvas.get_pixel(0, 0), CLEAR);
    }

    #[test]
    fn single_pixel_box_paints_one_pixel() {
        let mut canvas = RgbaImage::from_pixel(3, 3, CLEAR);
        fill_ellipse(&mut canvas, 1, 1, 1, 1, RED);
        let painted = canvas.pixels().filter(|p| **p == RED).count();
        assert_eq!(painted, 1);
        assert_eq!(*canvas.get_pixel(1, 1), RED);
    }

    #[test]
    fn ensure_dir_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b").join("c");
        ensure_dir(&nested).unwrap();
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn save_png_overwrites_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("icon.png");
        fs::write(&path, b"not a png").unwrap();

        let canvas = RgbaImage::from_pixel(8, 8, RED);
        save_png(&canvas, &path).unwrap();

        let reloaded = image::open(&path).unwrap().into_rgba8();
        assert_eq!(reloaded.dimensions(), (8, 8));
        assert_eq!(*reloaded.get_pixel(7, 7), RED);
    }
}
