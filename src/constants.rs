/// Page wiring constants for the web front-end.
///
/// Element ids are the landing page's contract with this crate; every lookup
/// tolerates a missing element.
// Background canvas; created and appended to <body> when absent
pub const CANVAS_ID: &str = "app-canvas";
pub const CANVAS_STYLE: &str =
    "position:fixed;top:0;left:0;width:100%;height:100%;z-index:-1;display:block";

// Optional <img> holding the environment texture
pub const ENV_IMAGE_ID: &str = "envmap";

// Copy-address button
pub const COPY_BUTTON_ID: &str = "copy-button";
pub const ADDRESS_ID: &str = "contract-address";
pub const COPIED_CLASS: &str = "copied";
pub const COPIED_LABEL: &str = "Copied!";
pub const COPY_RESTORE_MS: i32 = 2000;

// Footer year stamp
pub const YEAR_ID: &str = "current-year";
