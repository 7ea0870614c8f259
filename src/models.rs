use image::Rgba;
use std::fmt;

/// Directory the icon set is written to, relative to the working directory.
pub const ICON_DIR: &str = "GoodFood/Assets.xcassets/AppIcon.appiconset";

/// Forest green canvas background.
pub const BACKGROUND: Rgba<u8> = Rgba([34, 139, 34, 255]);
/// White plate drawn in the middle of the canvas.
pub const FOREGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

// The plate covers 3/5 (0.6) of the canvas edge.
pub const OVERLAY_NUMERATOR: u32 = 3;
pub const OVERLAY_DENOMINATOR: u32 = 5;

/// A single entry of the icon table: the edge length in pixels and the file it is saved as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconSpec {
    pub size: u32,
    pub file_name: &'static str,
}

impl IconSpec {
    pub const fn new(size: u32, file_name: &'static str) -> Self {
        Self { size, file_name }
    }

    /// Pixel dimensions of the generated image.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.size, self.size)
    }
}

impl fmt::Display for IconSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}x{})", self.file_name, self.size, self.size)
    }
}

/// Icon sizes needed by the iOS app icon asset catalog.
pub const ICON_SPECS: [IconSpec; 12] = [
    IconSpec::new(20, "Icon-20.png"),
    IconSpec::new(29, "Icon-29.png"),
    IconSpec::new(40, "Icon-40.png"),
    IconSpec::new(58, "Icon-58.png"),
    IconSpec::new(60, "Icon-60.png"),
    IconSpec::new(80, "Icon-80.png"),
    IconSpec::new(87, "Icon-87.png"),
    IconSpec::new(120, "Icon-120.png"),
    IconSpec::new(152, "Icon-152.png"),
    IconSpec::new(167, "Icon-167.png"),
    IconSpec::new(180, "Icon-180.png"),
    IconSpec::new(1024, "Icon-1024.png"),
];
