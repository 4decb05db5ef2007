use log::info;
use web_sys::window;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::{
    about::About,
    contact::Contact,
    footer::Footer,
    hero::Hero,
    navbar::{NavAction, NavState, Navbar},
    scroll_top::ScrollTopButton,
    services::Services,
};
use crate::config;
use crate::scroll::{scroll_to_section, section_bounds, use_window_scroll};
use crate::sections::{ScrollSample, ScrollTracker, Section};

fn section_from_location() -> Option<Section> {
    let hash = window()?.location().hash().ok()?;
    Section::from_id(hash.trim_start_matches('#'))
}

/// The whole single page. Owns the scroll-derived state and hands it down;
/// children report navigation back up through `on_navigate`.
#[function_component(Home)]
pub fn home() -> Html {
    use_title(config::SITE_TITLE.to_string());
    let tracker = use_reducer_eq(ScrollTracker::default);
    let nav = use_reducer_eq(NavState::default);

    {
        let tracker = tracker.dispatcher();
        let nav = nav.dispatcher();
        use_window_scroll(Callback::from(move |scroll_y: f64| {
            nav.dispatch(NavAction::Scrolled(scroll_y));
            tracker.dispatch(ScrollSample::take(scroll_y, section_bounds));
        }));
    }

    // Deep links like /#services land on the section once it's laid out
    use_effect_with_deps(
        |_| {
            if let Some(section) = section_from_location() {
                info!("Jumping to #{}", section.id());
                scroll_to_section(section);
            }
            || ()
        },
        (),
    );

    // Every in-page jump closes the mobile menu, even if the target is missing.
    let on_navigate = {
        let nav = nav.dispatcher();
        use_callback(
            move |section: Section, _| {
                nav.dispatch(NavAction::Navigate(section));
                scroll_to_section(section);
            },
            (),
        )
    };

    let on_toggle_menu = {
        let nav = nav.dispatcher();
        use_callback(move |_: (), _| nav.dispatch(NavAction::ToggleMenu), ())
    };

    html! {
        <div class="page">
            <Navbar
                active={tracker.active}
                state={*nav}
                on_navigate={on_navigate.clone()}
                on_toggle_menu={on_toggle_menu}
            />

            <main>
                <section id={Section::Hero.id()}>
                    <Hero on_navigate={on_navigate.clone()} />
                </section>

                <section id={Section::About.id()} class="page-section">
                    <About />
                </section>

                <section id={Section::Services.id()} class="page-section tinted">
                    <Services on_navigate={on_navigate.clone()} />
                </section>

                <section id={Section::Contact.id()} class="page-section">
                    <Contact />
                </section>
            </main>

            <Footer on_navigate={on_navigate} />

            <ScrollTopButton visible={tracker.show_scroll_top} />
        </div>
    }
}
