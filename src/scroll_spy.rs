use std::fmt;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlElement};
use yew::prelude::*;

use crate::config;

/// Page sections in document order. The fragment id doubles as the scroll-spy key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Inicio,
    Servicios,
    Portfolio,
    Nosotros,
    Contacto,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Inicio,
        Section::Servicios,
        Section::Portfolio,
        Section::Nosotros,
        Section::Contacto,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Inicio => "inicio",
            Section::Servicios => "servicios",
            Section::Portfolio => "portfolio",
            Section::Nosotros => "nosotros",
            Section::Contacto => "contacto",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Inicio => "Inicio",
            Section::Servicios => "Servicios",
            Section::Portfolio => "Portfolio",
            Section::Nosotros => "Nosotros",
            Section::Contacto => "Contacto",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Measured vertical extent of a section, in document pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub section: Section,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(section: Section, top: f64, height: f64) -> Self {
        Self { section, top, height }
    }

    /// Half-open: the top edge belongs to the section, the bottom edge does not.
    pub fn contains(&self, anchor: f64) -> bool {
        anchor >= self.top && anchor < self.top + self.height
    }
}

/// Computes the active section for a scroll offset. Every containing section
/// is visited in order and the last one wins; with no match the previous
/// value is kept.
pub fn next_active(
    current: Option<Section>,
    scroll_y: f64,
    bounds: &[SectionBounds],
) -> Option<Section> {
    let anchor = scroll_y + config::SCROLL_ANCHOR_OFFSET;
    bounds
        .iter()
        .filter(|b| b.contains(anchor))
        .last()
        .map(|b| b.section)
        .or(current)
}

/// One `NodeRef` per section, created by the page and attached to each
/// `<section>` so the spy measures elements directly.
#[derive(Clone, PartialEq, Default)]
pub struct SectionRefs {
    refs: [NodeRef; 5],
}

impl SectionRefs {
    pub fn get(&self, section: Section) -> NodeRef {
        let index = Section::ALL
            .iter()
            .position(|s| *s == section)
            .unwrap_or_default();
        self.refs[index].clone()
    }

    fn measure(&self) -> Vec<SectionBounds> {
        Section::ALL
            .iter()
            .zip(self.refs.iter())
            .filter_map(|(section, node)| {
                node.cast::<HtmlElement>().map(|el| {
                    SectionBounds::new(
                        *section,
                        el.offset_top() as f64,
                        el.offset_height() as f64,
                    )
                })
            })
            .collect()
    }
}

/// A `scroll` listener on an event target, removed when dropped.
pub struct ScrollListener {
    target: EventTarget,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    pub fn attach(target: &EventTarget, handler: impl FnMut() + 'static) -> Option<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        target
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .ok()?;
        debug!("Scroll listener attached");
        Some(Self {
            target: target.clone(),
            callback,
        })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
        debug!("Scroll listener detached");
    }
}

/// Tracks which section the viewport is on. The window scroll listener lives
/// as long as the calling component and is removed when it unmounts.
///
/// No throttling: every scroll event re-measures all five sections.
#[hook]
pub fn use_scroll_spy(refs: SectionRefs) -> Option<Section> {
    let active = use_state(|| None::<Section>);
    // Latest value for the listener; the state handle it captured goes stale.
    let current = use_mut_ref(|| None::<Section>);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |refs: &SectionRefs| {
                let refs = refs.clone();
                let window = web_sys::window();

                let check = {
                    let window = window.clone();
                    move || {
                        let Some(scroll_y) = window.as_ref().and_then(|w| w.scroll_y().ok()) else {
                            return;
                        };
                        let previous = *current.borrow();
                        let next = next_active(previous, scroll_y, &refs.measure());
                        if next != previous {
                            debug!("Active section: {:?}", next);
                            *current.borrow_mut() = next;
                            active.set(next);
                        }
                    }
                };

                // Initial check so a page loaded mid-scroll highlights correctly
                check();

                let listener = window
                    .as_ref()
                    .and_then(|window| ScrollListener::attach(window, check));

                move || drop(listener)
            },
            refs,
        );
    }

    *active
}
