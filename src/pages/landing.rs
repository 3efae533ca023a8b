use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

use crate::components::contact::ContactSection;
use crate::components::footer::{Footer, WhatsAppFloat};
use crate::components::nav::Nav;
use crate::components::pricing::PricingTabs;
use crate::scroll_spy::{use_scroll_spy, Section, SectionRefs};

const TRAVELMATE_FEATURES: [&str; 5] = [
    "Interfaz intuitiva y moderna",
    "Sistema de reservas en tiempo real",
    "Calendario inteligente con sugerencias",
    "Integración con mapas y navegación",
    "Modo offline para viajeros sin conexión",
];

struct TeamMember {
    name: &'static str,
    role: &'static str,
    description: &'static str,
}

const TEAM: [TeamMember; 2] = [
    TeamMember {
        name: "Thiago Piñeyro",
        role: "Front-end Developer",
        description: "Desarrollador que transforma los diseños en sitios web funcionales. Especialista en tecnologías modernas como React, Node.js y bases de datos.",
    },
    TeamMember {
        name: "Berenice Frontini",
        role: "UI/UX Designer",
        description: "Diseñadora UI/UX especializada en Figma. Crea el diseño visual y la estructura de las páginas, enfocándose en la experiencia del usuario y la estética.",
    },
];

/// First letter of each of the first two words, e.g. "Thiago Piñeyro" -> "TP".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .collect()
}

#[derive(Properties, PartialEq)]
struct SectionHeaderProps {
    title: &'static str,
    subtitle: &'static str,
}

#[function_component(SectionHeader)]
fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="section-header">
            <h2>{props.title}</h2>
            <div class="section-rule"></div>
            <p>{props.subtitle}</p>
        </div>
    }
}

fn team_member(member: &TeamMember) -> Html {
    html! {
        <div class="team-member">
            <div class="avatar">{initials(member.name)}</div>
            <div>
                <h3>{member.name}</h3>
                <p class="role">{member.role}</p>
                <p>{member.description}</p>
            </div>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let refs = use_memo(|_| SectionRefs::default(), ());
    let active_section = use_scroll_spy((*refs).clone());

    html! {
        <div class="landing-page">
            <Global css={css!(r#"
                html { scroll-behavior: smooth; }
                body {
                    margin: 0;
                    font-family: "Inter", system-ui, -apple-system, sans-serif;
                    color: #111827;
                    background: #ffffff;
                }
                a { color: inherit; text-decoration: none; }
                img { max-width: 100%; }
            "#)} />
            <style>
                {r#"
                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.9);
                    backdrop-filter: blur(4px);
                    border-bottom: 1px solid #f3f4f6;
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0.75rem 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo img { height: 48px; width: auto; }
                .nav-right { display: flex; gap: 2rem; }
                .nav-link { font-size: 0.875rem; font-weight: 500; color: #374151; transition: color 0.2s; }
                .nav-link:hover, .nav-link.active { color: #7c3aed; }
                .burger-menu { display: none; background: none; border: none; cursor: pointer; font-size: 1.5rem; }
                .burger-menu span { display: block; width: 24px; height: 2px; margin: 5px 0; background: #374151; }
                .mobile-menu { background: #ffffff; border-bottom: 1px solid #f3f4f6; }
                .mobile-menu-list { display: flex; flex-direction: column; gap: 1rem; padding: 1rem; }
                .mobile-nav-link { font-size: 1.125rem; color: #374151; }
                .mobile-nav-link:hover { color: #7c3aed; }

                .hero {
                    position: relative;
                    padding: 8rem 1rem;
                    text-align: center;
                    background: linear-gradient(to bottom right, #f5f3ff, #ffffff);
                    overflow: hidden;
                }
                .hero h1 { font-size: 3.5rem; line-height: 1.15; max-width: 48rem; margin: 0 auto 1.5rem; }
                .hero-subtitle { font-size: 1.25rem; color: #4b5563; max-width: 42rem; margin: 0 auto 2rem; }
                .hero-cta-group { display: flex; justify-content: center; gap: 1rem; flex-wrap: wrap; }
                .hero-cta {
                    padding: 0.75rem 2rem;
                    border-radius: 9999px;
                    background: #7c3aed;
                    color: #ffffff;
                    font-weight: 600;
                }
                .hero-cta:hover { background: #6d28d9; }
                .hero-cta.outline { background: #ffffff; color: #111827; border: 1px solid #d1d5db; }

                section { padding: 5rem 1rem; }
                .section-alt { background: #f9fafb; }
                .section-inner { max-width: 1100px; margin: 0 auto; }
                .section-header { text-align: center; margin-bottom: 4rem; }
                .section-header h2 { font-size: 2.25rem; margin-bottom: 1rem; }
                .section-rule { width: 5rem; height: 4px; background: #7c3aed; margin: 0 auto 1.5rem; }
                .section-header p { font-size: 1.125rem; color: #4b5563; max-width: 42rem; margin: 0 auto; }

                .tab-list {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    max-width: 28rem;
                    margin: 0 auto 3rem;
                    padding: 0.25rem;
                    background: #f3f4f6;
                    border-radius: 0.5rem;
                }
                .tab-trigger { font-size: 1.125rem; padding: 0.75rem; border: none; border-radius: 0.375rem; background: none; cursor: pointer; }
                .tab-trigger.active { background: #ffffff; color: #7c3aed; box-shadow: 0 1px 2px rgba(0,0,0,0.05); }
                .pricing-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
                .pricing-card {
                    border: 1px solid #e5e7eb;
                    border-radius: 0.75rem;
                    overflow: hidden;
                    background: #ffffff;
                    box-shadow: 0 10px 15px rgba(0,0,0,0.05);
                    transition: transform 0.3s, box-shadow 0.3s;
                }
                .pricing-card:hover { transform: translateY(-0.5rem); box-shadow: 0 20px 25px rgba(124,58,237,0.12); }
                .pricing-card-header { padding: 1.5rem; background: #f9fafb; transition: background 0.3s, color 0.3s; }
                .pricing-card:hover .pricing-card-header { background: #7c3aed; color: #ffffff; }
                .price .amount { font-size: 1.875rem; font-weight: 700; }
                .price .currency { margin-left: 0.25rem; font-size: 0.875rem; opacity: 0.8; }
                .pricing-card-body { padding: 1.5rem; }
                .pricing-card-body .description { color: #4b5563; margin-bottom: 1.5rem; }
                .feature-list { list-style: none; padding: 0; margin: 0 0 1.5rem; }
                .feature-list li { display: flex; align-items: center; gap: 0.5rem; margin-bottom: 0.75rem; color: #4b5563; }
                .check { color: #7c3aed; font-weight: 700; }
                .pricing-cta {
                    display: block;
                    text-align: center;
                    padding: 0.6rem;
                    border: 1px solid #e5e7eb;
                    border-radius: 0.375rem;
                    transition: all 0.3s;
                }
                .pricing-card:hover .pricing-cta { background: #7c3aed; color: #ffffff; border-color: #7c3aed; }

                .portfolio-grid, .team-grid, .contact-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; align-items: center; }
                .phone-mockup {
                    width: 280px;
                    height: 560px;
                    margin: 0 auto;
                    padding: 0.5rem;
                    background: #111827;
                    border-radius: 36px;
                    box-shadow: 0 20px 25px rgba(0,0,0,0.15);
                }
                .phone-screen {
                    width: 100%;
                    height: 100%;
                    background: #ffffff;
                    border-radius: 30px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }

                .team-member { display: flex; gap: 1.5rem; align-items: flex-start; }
                .avatar {
                    flex-shrink: 0;
                    width: 8rem;
                    height: 8rem;
                    border-radius: 9999px;
                    background: #ede9fe;
                    color: #7c3aed;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2rem;
                    font-weight: 700;
                }
                .role { color: #7c3aed; margin-bottom: 0.75rem; }
                .vision { margin-top: 4rem; background: #f5f3ff; padding: 2rem; border-radius: 1rem; }
                .vision p { color: #4b5563; }

                .contact-grid { align-items: start; }
                .contact-card { background: #ffffff; padding: 2rem; border-radius: 0.75rem; box-shadow: 0 1px 2px rgba(0,0,0,0.05); }
                .contact-form { display: flex; flex-direction: column; gap: 1.5rem; }
                .form-field { display: flex; flex-direction: column; gap: 0.5rem; }
                .form-field label { font-size: 0.875rem; font-weight: 500; color: #374151; }
                .form-field input, .form-field textarea {
                    padding: 0.6rem 0.75rem;
                    border: 1px solid #d1d5db;
                    border-radius: 0.375rem;
                    font: inherit;
                }
                .form-field textarea { min-height: 150px; }
                .form-actions { display: flex; gap: 1rem; }
                .form-actions button { flex: 1; padding: 0.7rem; border: none; border-radius: 0.375rem; color: #ffffff; cursor: pointer; }
                .form-actions button:disabled { opacity: 0.6; cursor: not-allowed; }
                .submit-email { background: #7c3aed; }
                .submit-email:hover { background: #6d28d9; }
                .submit-whatsapp { background: #22c55e; }
                .submit-whatsapp:hover { background: #16a34a; }
                .button-icon { margin-left: 0.5rem; }
                .form-error { color: #ef4444; font-size: 0.875rem; }
                .contact-side { display: flex; flex-direction: column; gap: 2rem; }
                .contact-info-list { display: flex; flex-direction: column; gap: 1.5rem; }
                .contact-info { display: flex; align-items: flex-start; gap: 1rem; }
                .contact-info-icon { color: #7c3aed; font-size: 1.25rem; }
                .contact-info h4 { margin: 0; }
                .contact-info a, .contact-info p { color: #4b5563; margin: 0; }
                .contact-info a:hover { color: #7c3aed; }
                .why-us { background: #7c3aed; color: #ffffff; padding: 2rem; border-radius: 0.75rem; }
                .why-us ul { list-style: none; padding: 0; }
                .why-us li { display: flex; gap: 0.5rem; margin-bottom: 0.75rem; }
                .why-us .check { color: #ddd6fe; }

                .site-footer { background: #111827; color: #ffffff; padding: 3rem 1rem; }
                .footer-content { max-width: 1200px; margin: 0 auto; }
                .footer-top, .footer-bottom { display: flex; justify-content: space-between; align-items: center; }
                .footer-bottom { border-top: 1px solid #1f2937; margin-top: 2rem; padding-top: 2rem; font-size: 0.875rem; color: #9ca3af; }
                .footer-logo { height: 40px; width: auto; filter: brightness(0) invert(1); }
                .footer-brand p { color: #9ca3af; max-width: 28rem; }
                .social-links { display: flex; gap: 1rem; }
                .social-link {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 9999px;
                    background: #1f2937;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .social-link:hover { background: #7c3aed; }
                .legal-links { display: flex; gap: 1.5rem; }
                .legal-links a:hover { color: #ffffff; }

                .whatsapp-float {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    z-index: 50;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    background: #22c55e;
                    color: #ffffff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                    box-shadow: 0 10px 15px rgba(0,0,0,0.15);
                    transition: transform 0.2s;
                }
                .whatsapp-float:hover { transform: scale(1.1); background: #16a34a; }

                @media (max-width: 768px) {
                    .nav-right { display: none; }
                    .burger-menu { display: block; }
                    .hero { padding: 5rem 1rem; }
                    .hero h1 { font-size: 2.25rem; }
                    .pricing-grid, .portfolio-grid, .team-grid, .contact-grid { grid-template-columns: 1fr; }
                    .team-member { flex-direction: column; align-items: center; text-align: center; }
                    .footer-top, .footer-bottom { flex-direction: column; gap: 1.5rem; }
                }
                @media (min-width: 769px) {
                    .mobile-menu { display: none; }
                }
                "#}
            </style>

            <Nav {active_section} />

            <main>
                <section id={Section::Inicio.id()} ref={refs.get(Section::Inicio)} class="hero">
                    <h1>{"Creamos sitios web modernos, rápidos y accesibles para todos"}</h1>
                    <p class="hero-subtitle">
                        {"Diseño y desarrollo web profesional para hacer crecer tu negocio en el mundo digital"}
                    </p>
                    <div class="hero-cta-group">
                        <a href={Section::Servicios.href()} class="hero-cta">{"Ver servicios ›"}</a>
                        <a href={Section::Contacto.href()} class="hero-cta outline">{"Contáctanos"}</a>
                    </div>
                </section>

                <section id={Section::Servicios.id()} ref={refs.get(Section::Servicios)}>
                    <div class="section-inner">
                        <SectionHeader
                            title="Nuestros Servicios"
                            subtitle="Ofrecemos soluciones web a medida para cada necesidad y presupuesto"
                        />
                        <PricingTabs />
                    </div>
                </section>

                <section id={Section::Portfolio.id()} ref={refs.get(Section::Portfolio)} class="section-alt">
                    <div class="section-inner">
                        <SectionHeader title="Nuestro Trabajo" subtitle="Conoce nuestro proyecto destacado" />
                        <div class="portfolio-grid">
                            <div>
                                <h3>{"TravelMate: App de Viajes con Calendario Inteligente"}</h3>
                                <p>
                                    {"Desarrollamos una aplicación móvil para viajeros que incluye un calendario inteligente y sistema de reservas para restaurantes, hoteles y actividades turísticas."}
                                </p>
                                <ul class="feature-list">
                                    { for TRAVELMATE_FEATURES.iter().map(|feature| html! {
                                        <li><span class="check">{"✓"}</span>{*feature}</li>
                                    })}
                                </ul>
                            </div>
                            <div class="phone-mockup">
                                <div class="phone-screen">
                                    <img src="/images/travelmate-logo.png" alt="TravelMate App" width="200" height="400" loading="lazy" />
                                </div>
                            </div>
                        </div>
                    </div>
                </section>

                <section id={Section::Nosotros.id()} ref={refs.get(Section::Nosotros)}>
                    <div class="section-inner">
                        <SectionHeader
                            title="Sobre Nosotros"
                            subtitle="Somos un equipo pequeño pero ambicioso, enfocado en crear soluciones web eficientes y creativas"
                        />
                        <div class="team-grid">
                            { for TEAM.iter().map(team_member) }
                        </div>
                        <div class="vision">
                            <h3>{"Nuestra Visión"}</h3>
                            <p>
                                {"En UIZA, nos dedicamos a ofrecer soluciones web rápidas, responsivas y estéticamente refinadas para empresas e individuos. Combinamos experiencia técnica con diseño creativo para construir sitios web que no solo se vean geniales, sino que también funcionen excepcionalmente bien."}
                            </p>
                            <p>
                                {"Creemos en la simplicidad, la eficiencia y la innovación. Nuestro objetivo es ayudar a nuestros clientes a establecer una presencia en línea sólida que impulse su crecimiento y éxito."}
                            </p>
                        </div>
                    </div>
                </section>

                <section id={Section::Contacto.id()} ref={refs.get(Section::Contacto)} class="section-alt">
                    <div class="section-inner">
                        <SectionHeader
                            title="Contáctanos"
                            subtitle="¿Listo para comenzar tu proyecto? Ponte en contacto con nosotros hoy mismo"
                        />
                        <ContactSection />
                    </div>
                </section>
            </main>

            <Footer />
            <WhatsAppFloat />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("Thiago Piñeyro"), "TP");
        assert_eq!(initials("Berenice Frontini"), "BF");
        assert_eq!(initials("Ana María López"), "AM");
    }

    #[test]
    fn initials_tolerate_short_names() {
        assert_eq!(initials("Ana"), "A");
        assert_eq!(initials(""), "");
    }
}
