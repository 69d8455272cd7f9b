pub const PRODUCT_NAME: &str = "Voxly";

/// Seconds shown on the payment success page before handing back to the desktop app.
pub const REDIRECT_COUNTDOWN_SECS: u32 = 8;

/// Local listener the desktop app opens while a checkout is in progress.
pub const DESKTOP_CALLBACK_BASE: &str = "http://localhost:8080";

pub const DOWNLOAD_URL: &str = "https://voxly.app/download";

#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8081"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    "https://voxly.app"
}
