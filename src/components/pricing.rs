use yew::prelude::*;

use crate::scroll_spy::Section;

#[derive(Debug, PartialEq)]
pub struct Tier {
    pub title: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Debug, PartialEq)]
pub struct Catalog {
    /// Tab value, also used as the panel's DOM id suffix.
    pub key: &'static str,
    pub label: &'static str,
    pub tiers: [Tier; 3],
}

pub const CURRENCY: &str = "ARS";

pub static CATALOGS: [Catalog; 2] = [
    Catalog {
        key: "landing-pages",
        label: "Landing Pages",
        tiers: [
            Tier {
                title: "Básico",
                price: "$35.000",
                description: "Diseño simple, responsive, botón WhatsApp, redes sociales.",
                features: &[
                    "Diseño responsive",
                    "Botón de WhatsApp",
                    "Integración redes sociales",
                    "Formulario de contacto",
                    "Optimizado para móviles",
                ],
            },
            Tier {
                title: "Intermedio",
                price: "$60.000",
                description: "Sitio multisección, diseño personalizado, SEO básico.",
                features: &[
                    "Diseño personalizado",
                    "Múltiples secciones",
                    "SEO básico",
                    "Integración Google Analytics",
                    "Formulario de contacto avanzado",
                    "Optimización de imágenes",
                ],
            },
            Tier {
                title: "Avanzado",
                price: "$90.000",
                description: "Animaciones, backend básico con Node.js, rendimiento optimizado.",
                features: &[
                    "Diseño premium personalizado",
                    "Animaciones y transiciones",
                    "Backend básico con Node.js",
                    "Optimización de rendimiento",
                    "SEO avanzado",
                    "Panel de administración",
                    "Soporte técnico (1 mes)",
                ],
            },
        ],
    },
    Catalog {
        key: "tiendas-online",
        label: "Tiendas Online",
        tiers: [
            Tier {
                title: "Básico",
                price: "$90.000",
                description: "Hasta 20 productos, diseño responsive, pasarelas de pago locales.",
                features: &[
                    "Hasta 20 productos",
                    "Diseño responsive",
                    "Pasarelas de pago locales",
                    "Panel de administración",
                    "Gestión de inventario básica",
                    "SEO básico",
                    "Hosting estatico",
                    "Ideal para emprendimientos pequeños",
                ],
            },
            Tier {
                title: "Intermedio",
                price: "$135.000",
                description: "Hasta 50 productos, diseño personalizado, SEO mejorado, ideal para tiendas medianas.",
                features: &[
                    "Hasta 50 productos",
                    "Diseño responsive",
                    "Pasarelas de pago locales",
                    "Panel de administración",
                    "Gestión de inventario intermedia",
                    "SEO mejorado",
                    "Hosting optimizado o VPS parcial",
                    "Ideal para tiendas medianas",
                ],
            },
            Tier {
                title: "Avanzado",
                price: "$180.000",
                description: "Hasta 150 productos, diseño a medida, integracion completa, soporte tecnico.",
                features: &[
                    "Hasta 150 productos",
                    "Diseño totalmente personalizado",
                    "Sistema de reviews",
                    "Optimización de velocidad",
                    "Integración con redes sociales",
                    "SEO avanzado",
                    "Múltiples pasarelas de pago",
                    "Soporte técnico (3 meses)",
                    "VPS dedicado",
                    "Ideal para negocios que quieren escalar",
                ],
            },
        ],
    },
];

pub const DEFAULT_TAB: &str = "landing-pages";

pub fn find_catalog(key: &str) -> Option<&'static Catalog> {
    CATALOGS.iter().find(|c| c.key == key)
}

#[derive(Properties, PartialEq)]
pub struct PricingCardProps {
    pub tier: &'static Tier,
}

#[function_component(PricingCard)]
pub fn pricing_card(props: &PricingCardProps) -> Html {
    let tier = props.tier;
    html! {
        <div class="pricing-card">
            <div class="pricing-card-header">
                <h3>{tier.title}</h3>
                <div class="price">
                    <span class="amount">{tier.price}</span>
                    <span class="currency">{CURRENCY}</span>
                </div>
            </div>
            <div class="pricing-card-body">
                <p class="description">{tier.description}</p>
                <ul class="feature-list">
                    { for tier.features.iter().map(|feature| html! {
                        <li><span class="check">{"✓"}</span>{*feature}</li>
                    })}
                </ul>
                <a href={Section::Contacto.href()} class="pricing-cta">{"Contratar"}</a>
            </div>
        </div>
    }
}

/// Tab strip over the catalogs. The selected tab is the only state here.
#[function_component(PricingTabs)]
pub fn pricing_tabs() -> Html {
    let selected = use_state(|| DEFAULT_TAB);

    let catalog = find_catalog(*selected).unwrap_or(&CATALOGS[0]);

    html! {
        <div class="pricing-tabs">
            <div class="tab-list" role="tablist">
                { for CATALOGS.iter().map(|c| {
                    let is_active = c.key == catalog.key;
                    let onclick = {
                        let selected = selected.clone();
                        let key = c.key;
                        Callback::from(move |_: MouseEvent| selected.set(key))
                    };
                    html! {
                        <button
                            role="tab"
                            aria-selected={is_active.to_string()}
                            data-state={if is_active { "active" } else { "inactive" }}
                            class={classes!("tab-trigger", is_active.then(|| "active"))}
                            {onclick}
                        >
                            {c.label}
                        </button>
                    }
                })}
            </div>
            <div class="pricing-grid" role="tabpanel" id={format!("panel-{}", catalog.key)}>
                { for catalog.tiers.iter().map(|tier| html! { <PricingCard tier={tier} /> }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tab_exists() {
        assert_eq!(find_catalog(DEFAULT_TAB).map(|c| c.label), Some("Landing Pages"));
        assert_eq!(CATALOGS[0].key, DEFAULT_TAB);
    }

    #[test]
    fn each_catalog_has_the_three_tiers_in_order() {
        for catalog in &CATALOGS {
            let titles: Vec<_> = catalog.tiers.iter().map(|t| t.title).collect();
            assert_eq!(titles, ["Básico", "Intermedio", "Avanzado"]);
            for tier in &catalog.tiers {
                assert!(tier.price.starts_with('$'));
                assert!(!tier.features.is_empty());
            }
        }
    }

    #[test]
    fn catalog_keys_are_unique() {
        assert_ne!(CATALOGS[0].key, CATALOGS[1].key);
        assert!(find_catalog("unknown").is_none());
    }

    #[test]
    fn store_tiers_keep_feature_order() {
        let stores = find_catalog("tiendas-online").expect("stores catalog");
        assert_eq!(stores.tiers[2].price, "$180.000");
        assert_eq!(stores.tiers[2].features.first(), Some(&"Hasta 150 productos"));
        assert_eq!(
            stores.tiers[2].features.last(),
            Some(&"Ideal para negocios que quieren escalar")
        );
    }
}
