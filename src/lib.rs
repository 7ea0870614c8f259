//! Generates the GoodFood iOS app icon set: a forest green square with a white plate,
//! rendered at every size the `AppIcon.appiconset` asset catalog needs.

pub mod generator;
pub mod logging;
pub mod models;
pub mod utils;

pub use generator::{IconError, generate_icons, run, synthesize};
pub use models::{ICON_DIR, ICON_SPECS, IconSpec};
