//! Window scrolling glue: section lookups, smooth scrolling and the scroll
//! and reveal hooks the page components share.

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    window, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions,
};
use yew::prelude::*;

use crate::config;
use crate::sections::{Section, SectionBounds};

fn section_element(section: Section) -> Option<HtmlElement> {
    window()?
        .document()?
        .get_element_by_id(section.id())?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Live layout bounds of a section, `None` while its element isn't mounted.
pub fn section_bounds(section: Section) -> Option<SectionBounds> {
    section_element(section).map(|el| {
        SectionBounds::new(f64::from(el.offset_top()), f64::from(el.offset_height()))
    })
}

pub fn current_scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

fn smooth_scroll_to(top: f64) {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smoothly scrolls so the section's top sits just below the fixed navbar.
/// Does nothing when the section isn't in the document.
pub fn scroll_to_section(section: Section) {
    match section_element(section) {
        Some(el) => smooth_scroll_to(f64::from(el.offset_top()) - config::NAVBAR_CLEARANCE),
        None => debug!("scroll_to_section: #{} not mounted", section.id()),
    }
}

pub fn scroll_to_top() {
    smooth_scroll_to(0.0);
}

/// Calls `on_scroll` with `window.scrollY` once on mount and then on every
/// scroll event until the component unmounts.
///
/// The callback is captured when the component mounts, so it should only
/// close over stable handles such as a reducer dispatcher.
#[hook]
pub fn use_window_scroll(on_scroll: Callback<f64>) {
    use_effect_with_deps(
        move |_| {
            let listener = window().map(|window| {
                let handler = {
                    let on_scroll = on_scroll.clone();
                    Closure::wrap(Box::new(move || {
                        on_scroll.emit(current_scroll_y());
                    }) as Box<dyn FnMut()>)
                };
                if let Err(err) = window
                    .add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref())
                {
                    log::error!("failed to register scroll listener: {:?}", err);
                }
                (window, handler)
            });

            // Initial check, the page may be restored mid-scroll
            on_scroll.emit(current_scroll_y());

            move || {
                if let Some((window, handler)) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        handler.as_ref().unchecked_ref(),
                    );
                }
            }
        },
        (),
    );
}

/// Becomes `true` the first time the referenced element is at least
/// `REVEAL_THRESHOLD` visible, and stays `true`.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let revealed = use_state(|| false);

    {
        let setter = revealed.setter();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let fallback = setter.clone();
                let element = node.cast::<web_sys::Element>();
                let observed = element.and_then(|element| {
                    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                        let intersecting = entries.iter().any(|entry| {
                            entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting()
                        });
                        if intersecting {
                            setter.set(true);
                            observer.disconnect();
                        }
                    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

                    let init = IntersectionObserverInit::new();
                    init.set_threshold(&config::REVEAL_THRESHOLD.into());
                    match IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &init,
                    ) {
                        Ok(observer) => {
                            observer.observe(&element);
                            Some((observer, callback))
                        }
                        Err(err) => {
                            debug!("IntersectionObserver unavailable: {:?}", err);
                            fallback.set(true);
                            None
                        }
                    }
                });

                move || {
                    if let Some((observer, _callback)) = observed {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *revealed
}
