
/// Hosted form relay that receives the contact form as JSON.
pub fn get_form_relay_url() -> &'static str {
    "https://formspree.io/f/xjkwobgl"
}

/// WhatsApp number in international format without `+` or spaces, as wa.me expects.
pub const WHATSAPP_NUMBER: &str = "5491144081542";
pub const WHATSAPP_DISPLAY: &str = "+54 9 11 4408-1542";
pub const WHATSAPP_GREETING: &str = "Hola, quiero hacer una consulta...";

pub const CONTACT_EMAIL: &str = "uituzaingo@gmail.com";
pub const LOCATION: &str = "Buenos Aires, Argentina";

// Pixels added to scroll_y so a section counts as active slightly before
// its top edge reaches the sticky header.
pub const SCROLL_ANCHOR_OFFSET: f64 = 100.0;

#[cfg(debug_assertions)]
pub fn log_build_config() {
    log::info!("Form relay: {}", get_form_relay_url());
    log::info!("WhatsApp number: {}", WHATSAPP_NUMBER);
}

#[cfg(not(debug_assertions))]
pub fn log_build_config() {}
