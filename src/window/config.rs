// ── WindowConfig ──────────────────────────────────────────────────────────────

/// Window configuration snapshot.
///
/// - **physical** dimensions are the requested pixel size of the OS window.
/// - **logical** dimensions are the internal game resolution everything is
///   simulated and drawn in (320 × 240). The logical frame is scaled
///   uniformly into whatever the physical window currently is.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    /// Initial window width in physical pixels.
    pub physical_width: u32,
    /// Initial window height in physical pixels.
    pub physical_height: u32,
    /// Internal game / render resolution width.
    pub logical_width: u32,
    /// Internal game / render resolution height.
    pub logical_height: u32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    /// 640 × 480 resizable window showing a 320 × 240 game.
    fn default() -> Self {
        Self {
            title:           "overworld".into(),
            physical_width:  640,
            physical_height: 480,
            logical_width:   320,
            logical_height:  240,
            resizable:       true,
        }
    }
}

impl WindowConfig {
    /// Copy of this config with the physical size replaced, used when the OS
    /// resizes the window.
    pub fn with_physical(&self, width: u32, height: u32) -> Self {
        Self { physical_width: width, physical_height: height, ..self.clone() }
    }
}
