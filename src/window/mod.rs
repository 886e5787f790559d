pub mod config;

pub use config::WindowConfig;

use winit::dpi::PhysicalSize;
use winit::window::WindowAttributes;

/// Build the winit attributes for the main game window.
///
/// The inner size is requested in physical pixels so the initial window is
/// an exact integer multiple of the logical resolution (640 × 480 shows the
/// 320 × 240 game at 2×).
pub fn window_attributes(config: &WindowConfig) -> WindowAttributes {
    WindowAttributes::default()
        .with_title(&config.title)
        .with_inner_size(PhysicalSize::new(config.physical_width, config.physical_height))
        .with_min_inner_size(PhysicalSize::new(config.logical_width, config.logical_height))
        .with_resizable(config.resizable)
}
