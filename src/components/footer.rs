use chrono::Datelike;
use yew::prelude::*;

use crate::contact::whatsapp;

const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("GitHub", "https://github.com/UIZAIT"),
    ("X", "https://x.com/UIZA_IT"),
    ("Instagram", "https://www.instagram.com/uiza.it/"),
    ("LinkedIn", "https://www.linkedin.com/in/thiago-pi%C3%B1eyro-b58669336/"),
];

pub fn copyright_line(year: i32) -> String {
    format!("© {} UIZA. Todos los derechos reservados.", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-top">
                    <div class="footer-brand">
                        <img src="/images/logo.png" alt="UIZA Logo" width="100" height="40" class="footer-logo" />
                        <p>{"Diseño y desarrollo web profesional para hacer crecer tu negocio en el mundo digital."}</p>
                    </div>
                    <div class="social-links">
                        { for SOCIAL_LINKS.iter().map(|(name, href)| html! {
                            <a href={*href} target="_blank" rel="noopener noreferrer" aria-label={*name} class="social-link">
                                {&name[..1]}
                            </a>
                        })}
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{copyright_line(year)}</p>
                    <div class="legal-links">
                        <a href="#">{"Política de Privacidad"}</a>
                        <a href="#">{"Términos de Servicio"}</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}

/// Always-visible WhatsApp button in the bottom-right corner.
#[function_component(WhatsAppFloat)]
pub fn whatsapp_float() -> Html {
    html! {
        <a href={whatsapp::chat_link()}
           target="_blank"
           rel="noopener noreferrer"
           class="whatsapp-float"
           aria-label="WhatsApp">
            {"☎"}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_uses_given_year() {
        assert_eq!(copyright_line(2025), "© 2025 UIZA. Todos los derechos reservados.");
    }

    #[test]
    fn social_links_open_over_https() {
        assert!(SOCIAL_LINKS.iter().all(|(_, href)| href.starts_with("https://")));
    }
}
