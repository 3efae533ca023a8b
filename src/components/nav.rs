use std::rc::Rc;

use yew::prelude::*;

use crate::scroll_spy::Section;

pub enum MenuAction {
    Toggle,
    Close,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    pub open: bool,
}

impl Reducible for MobileMenu {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = match action {
            MenuAction::Toggle => !self.open,
            MenuAction::Close => false,
        };
        Rc::new(MobileMenu { open })
    }
}

#[derive(Properties, PartialEq)]
pub struct NavLinkProps {
    pub section: Section,
    pub active: bool,
}

#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    html! {
        <a href={props.section.href()}
           class={classes!("nav-link", props.active.then(|| "active"))}>
            {props.section.label()}
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct MobileNavLinkProps {
    pub section: Section,
    pub on_navigate: Callback<()>,
}

#[function_component(MobileNavLink)]
pub fn mobile_nav_link(props: &MobileNavLinkProps) -> Html {
    // No prevent_default: the browser still follows the fragment.
    let onclick = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(()))
    };

    html! {
        <a href={props.section.href()} class="mobile-nav-link" {onclick}>
            {props.section.label()}
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active_section: Option<Section>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu = use_reducer(MobileMenu::default);

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::Toggle))
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: ()| menu.dispatch(MenuAction::Close))
    };

    html! {
        <header class="top-nav">
            <div class="nav-content">
                <a href="/" class="nav-logo">
                    <img src="/images/logo.png" alt="UIZA Logo" width="1200" height="48" />
                </a>

                <nav class="nav-right">
                    { for Section::ALL.iter().map(|section| html! {
                        <NavLink
                            section={*section}
                            active={props.active_section == Some(*section)}
                        />
                    })}
                </nav>

                <button class="burger-menu" aria-label="Menú" onclick={toggle_menu}>
                    if menu.open {
                        {"✕"}
                    } else {
                        <>
                            <span></span>
                            <span></span>
                            <span></span>
                        </>
                    }
                </button>
            </div>

            if menu.open {
                <div class="mobile-menu">
                    <nav class="mobile-menu-list">
                        { for Section::ALL.iter().map(|section| html! {
                            <MobileNavLink section={*section} on_navigate={close_menu.clone()} />
                        })}
                    </nav>
                </div>
            }
        </header>
    }
}
