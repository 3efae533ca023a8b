use log::{info, warn};
use web_sys::window;

use crate::config;

/// Chat with no prefilled text, used by the floating button.
pub fn chat_link() -> String {
    format!("https://wa.me/{}", config::WHATSAPP_NUMBER)
}

pub fn text_link(text: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        config::WHATSAPP_NUMBER,
        urlencoding::encode(text)
    )
}

/// Link for the contact card: fixed greeting.
pub fn greeting_link() -> String {
    text_link(config::WHATSAPP_GREETING)
}

pub fn prefilled_message(name: &str, message: &str) -> String {
    format!("Hola, mi nombre es {}. {}", name, message)
}

/// Deep link carrying the form's name and message.
pub fn prefilled_link(name: &str, message: &str) -> String {
    text_link(&prefilled_message(name, message))
}

pub fn open_in_new_tab(url: &str) {
    match window().map(|w| w.open_with_url_and_target(url, "_blank")) {
        Some(Ok(_)) => info!("Opened WhatsApp deep link"),
        Some(Err(e)) => warn!("Could not open WhatsApp link: {:?}", e),
        None => warn!("No window to open WhatsApp link in"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefilled_text_is_percent_encoded() {
        let link = prefilled_link("Ana", "Hola");
        let expected = urlencoding::encode("Hola, mi nombre es Ana. Hola");
        assert_eq!(link, format!("https://wa.me/5491144081542?text={}", expected));
        assert_eq!(
            link,
            "https://wa.me/5491144081542?text=Hola%2C%20mi%20nombre%20es%20Ana.%20Hola"
        );
    }

    #[test]
    fn reserved_characters_cannot_break_the_query() {
        let link = prefilled_link("Ana & Bruno", "¿Precio? 100% = ok#1");
        let text = link.split_once("?text=").map(|(_, t)| t).unwrap_or_default();
        assert!(!text.contains('&'));
        assert!(!text.contains('#'));
        assert!(!text.contains(' '));
        assert!(!text.contains('?'));
        assert_eq!(
            urlencoding::decode(text).expect("valid utf-8"),
            "Hola, mi nombre es Ana & Bruno. ¿Precio? 100% = ok#1"
        );
    }

    #[test]
    fn empty_fields_still_produce_greeting() {
        assert_eq!(prefilled_message("", ""), "Hola, mi nombre es . ");
    }

    #[test]
    fn static_links() {
        assert_eq!(chat_link(), "https://wa.me/5491144081542");
        assert_eq!(
            greeting_link(),
            "https://wa.me/5491144081542?text=Hola%2C%20quiero%20hacer%20una%20consulta..."
        );
    }
}
