use log::Level;

pub const BRAND: &str = "Payouts.com";
pub const PARTNER: &str = "Brainlabs";

/// Phone number of the account manager, in the international format wa.me expects.
pub const WHATSAPP_RECIPIENT: &str = "972545480039";
pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Placeholder the visitor replaces with their own name before sending.
pub const SENDER_PLACEHOLDER: &str = "[name]";

pub const LOGO_URL: &str = "https://payouts.com/wp-content/uploads/2024/02/Payoutscom-logo-light.svg";

pub const VIDEO_URL: &str =
    "https://player.vimeo.com/video/1060857995?badge=0&autopause=0&player_id=0&app_id=58479";
pub const VIDEO_TITLE: &str = "Brainlabs x Payouts";
pub const PLAYER_SCRIPT_URL: &str = "https://player.vimeo.com/api/player.js";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
