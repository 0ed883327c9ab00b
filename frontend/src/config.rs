use log::Level;

#[cfg(debug_assertions)]
pub fn get_asset_base() -> &'static str {
    "/assets"  // Served by trunk from frontend/assets
}

#[cfg(not(debug_assertions))]
pub fn get_asset_base() -> &'static str {
    "/assets"  // Production asset host
}

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

/// Id of the inline `<script type="application/json">` element that may
/// override the built-in page content.
pub const CONTENT_ELEMENT_ID: &str = "profile-content";
