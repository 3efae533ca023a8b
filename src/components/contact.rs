use gloo_console::error;
use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::form::{submit_with, ContactAction, ContactForm, Field};
use crate::contact::relay::send_contact;
use crate::contact::whatsapp;

const WHY_US: [&str; 5] = [
    "Diseño personalizado y único",
    "Optimización para dispositivos móviles",
    "Precios transparentes sin costos ocultos",
    "Soporte técnico continuo",
    "Entrega rápida y eficiente",
];

#[derive(Properties, PartialEq)]
struct ContactInfoProps {
    icon: &'static str,
    title: &'static str,
    content: &'static str,
    #[prop_or_default]
    href: Option<String>,
}

#[function_component(ContactInfo)]
fn contact_info(props: &ContactInfoProps) -> Html {
    html! {
        <div class="contact-info">
            <div class="contact-info-icon">{props.icon}</div>
            <div>
                <h4>{props.title}</h4>
                {
                    match &props.href {
                        Some(href) => html! { <a href={href.clone()}>{props.content}</a> },
                        None => html! { <p>{props.content}</p> },
                    }
                }
            </div>
        </div>
    }
}

#[function_component(ContactFormCard)]
pub fn contact_form_card() -> Html {
    let form = use_reducer(ContactForm::default);

    let on_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(ContactAction::Edit(field, input.value()));
        })
    };

    let on_message_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(ContactAction::Edit(Field::Message, input.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = form.clone();
            spawn_local(async move {
                // The button is disabled while submitting; this covers Enter in a field.
                let outcome = submit_with(
                    &form,
                    |action| form.dispatch(action),
                    |payload| async move { send_contact(&payload).await },
                )
                .await;
                match outcome {
                    Some(Ok(())) => info!("Contact form delivered"),
                    Some(Err(e)) => error!(format!("Contact form failed: {}", e)),
                    None => info!("Submission already in flight"),
                }
            });
        })
    };

    let on_whatsapp = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            whatsapp::open_in_new_tab(&form.whatsapp_link());
        })
    };

    let submitting = form.status.is_submitting();

    html! {
        <div class="contact-card">
            <h3>{"Envíanos un mensaje"}</h3>
            <form class="contact-form" {onsubmit}>
                <div class="form-field">
                    <label for={Field::Name.input_name()}>{"Nombre"}</label>
                    <input
                        id={Field::Name.input_name()}
                        name={Field::Name.input_name()}
                        value={form.fields.name.clone()}
                        oninput={on_input(Field::Name)}
                        placeholder="Tu nombre"
                        required={true}
                        disabled={submitting}
                    />
                </div>
                <div class="form-field">
                    <label for={Field::Email.input_name()}>{"Email"}</label>
                    <input
                        id={Field::Email.input_name()}
                        name={Field::Email.input_name()}
                        type="email"
                        value={form.fields.email.clone()}
                        oninput={on_input(Field::Email)}
                        placeholder="Tu email"
                        required={true}
                        disabled={submitting}
                    />
                </div>
                <div class="form-field">
                    <label for={Field::Phone.input_name()}>
                        {"Numero de telefono (en el caso de extranjeros usar codigo de pais)"}
                    </label>
                    <input
                        id={Field::Phone.input_name()}
                        name={Field::Phone.input_name()}
                        type="tel"
                        value={form.fields.phone.clone()}
                        oninput={on_input(Field::Phone)}
                        placeholder="Tu numero de telefono"
                        required={true}
                        disabled={submitting}
                    />
                </div>
                <div class="form-field">
                    <label for={Field::Message.input_name()}>{"Mensaje"}</label>
                    <textarea
                        id={Field::Message.input_name()}
                        name={Field::Message.input_name()}
                        value={form.fields.message.clone()}
                        oninput={on_message_input}
                        placeholder="Tu mensaje"
                        required={true}
                        disabled={submitting}
                    />
                </div>
                <div class="form-actions">
                    <button type="submit" class="submit-email" disabled={submitting}>
                        {form.submit_label()}
                        <span class="button-icon">{"✉"}</span>
                    </button>
                    <button type="button" class="submit-whatsapp" onclick={on_whatsapp}>
                        {"Enviar por WhatsApp"}
                    </button>
                </div>
                if form.status.is_error() {
                    <p class="form-error">
                        {"Hubo un error al enviar el formulario. Por favor, intenta nuevamente."}
                    </p>
                }
            </form>
        </div>
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    html! {
        <div class="contact-grid">
            <ContactFormCard />

            <div class="contact-side">
                <div>
                    <h3>{"Información de Contacto"}</h3>
                    <div class="contact-info-list">
                        <ContactInfo
                            icon="☎"
                            title="WhatsApp"
                            content={config::WHATSAPP_DISPLAY}
                            href={whatsapp::greeting_link()}
                        />
                        <ContactInfo
                            icon="✉"
                            title="Email"
                            content={config::CONTACT_EMAIL}
                            href={format!("mailto:{}", config::CONTACT_EMAIL)}
                        />
                        <ContactInfo
                            icon="⌖"
                            title="Ubicación"
                            content={config::LOCATION}
                        />
                    </div>
                </div>

                <div class="why-us">
                    <h3>{"¿Por qué elegirnos?"}</h3>
                    <ul>
                        { for WHY_US.iter().map(|reason| html! {
                            <li><span class="check">{"✓"}</span><span>{*reason}</span></li>
                        })}
                    </ul>
                </div>
            </div>
        </div>
    }
}
