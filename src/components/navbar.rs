use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::sections::{navbar_scrolled, Section};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavState {
    pub menu_open: bool,
    pub scrolled: bool,
}

pub enum NavAction {
    ToggleMenu,
    /// A section link was followed. Always closes the mobile menu.
    Navigate(Section),
    Scrolled(f64),
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            NavAction::ToggleMenu => next.menu_open = !next.menu_open,
            NavAction::Navigate(_) => next.menu_open = false,
            NavAction::Scrolled(scroll_y) => next.scrolled = navbar_scrolled(scroll_y),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active: Section,
    pub state: NavState,
    pub on_navigate: Callback<Section>,
    pub on_toggle_menu: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavProps) -> Html {
    let NavProps { active, state, on_navigate, on_toggle_menu } = props;

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let navigate = |section: Section| {
        let on_navigate = on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(section);
        })
    };

    let links = |class: &'static str| -> Html {
        Section::ALL
            .into_iter()
            .map(|section| {
                let is_active = section == *active;
                html! {
                    <button
                        key={section.id()}
                        class={classes!(class, is_active.then(|| "active"))}
                        aria-current={is_active.then(|| "true")}
                        onclick={navigate(section)}
                    >
                        {section.label()}
                        if is_active {
                            <span class="nav-underline"></span>
                        }
                    </button>
                }
            })
            .collect()
    };

    html! {
        <header class={classes!("top-nav", state.scrolled.then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        padding: 1rem 0;
                        background: transparent;
                        transition: all 0.3s ease;
                        animation: navDrop 0.5s ease-out;
                    }
                    .top-nav.scrolled {
                        background: #fff;
                        padding: 0.5rem 0;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    }
                    @keyframes navDrop {
                        from { transform: translateY(-100px); }
                        to { transform: translateY(0); }
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: var(--accent);
                        text-decoration: none;
                        transition: transform 0.2s;
                    }
                    .nav-logo:hover {
                        transform: scale(1.05);
                    }
                    .nav-links {
                        display: flex;
                        gap: 2rem;
                    }
                    .nav-link, .nav-mobile-link {
                        position: relative;
                        background: none;
                        border: none;
                        font: inherit;
                        font-weight: 500;
                        color: #4b5563;
                        cursor: pointer;
                        transition: color 0.2s;
                    }
                    .nav-link:hover, .nav-mobile-link:hover,
                    .nav-link.active, .nav-mobile-link.active {
                        color: var(--accent);
                    }
                    .nav-underline {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: -4px;
                        height: 2px;
                        background: var(--accent);
                        animation: grow 0.3s ease-out;
                    }
                    @keyframes grow {
                        from { transform: scaleX(0); }
                        to { transform: scaleX(1); }
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 4px;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #4b5563;
                        transition: transform 0.3s;
                    }
                    .burger-menu.open span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
                    .burger-menu.open span:nth-child(2) { opacity: 0; }
                    .burger-menu.open span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
                    .nav-mobile {
                        display: none;
                    }
                    @media (max-width: 768px) {
                        .nav-links { display: none; }
                        .burger-menu { display: flex; }
                        .nav-mobile {
                            display: flex;
                            flex-direction: column;
                            align-items: flex-start;
                            gap: 1rem;
                            padding: 1rem;
                            background: #fff;
                            animation: fadeDown 0.3s ease-out;
                        }
                    }
                "#}
            </style>
            <div class="container nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"DevXdiscovery"}
                </Link<Route>>

                <nav class="nav-links">
                    { links("nav-link") }
                </nav>

                <button
                    class={classes!("burger-menu", state.menu_open.then(|| "open"))}
                    onclick={toggle_menu}
                    aria-label={if state.menu_open { "Close menu" } else { "Open menu" }}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            if state.menu_open {
                <div class="container nav-mobile">
                    { links("nav-mobile-link") }
                </div>
            }
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: NavState, action: NavAction) -> NavState {
        *Rc::new(state).reduce(action)
    }

    #[test]
    fn burger_toggles_menu() {
        let open = reduce(NavState::default(), NavAction::ToggleMenu);
        assert!(open.menu_open);
        assert!(!reduce(open, NavAction::ToggleMenu).menu_open);
    }

    #[test]
    fn navigating_closes_open_menu() {
        let open = NavState { menu_open: true, scrolled: true };
        let after = reduce(open, NavAction::Navigate(Section::Contact));
        assert!(!after.menu_open);
        assert!(after.scrolled);
    }

    #[test]
    fn navigating_with_menu_closed_is_a_no_op() {
        let state = Rc::new(NavState::default());
        let after = state.clone().reduce(NavAction::Navigate(Section::About));
        assert!(Rc::ptr_eq(&state, &after));
    }

    #[test]
    fn scrolled_style_follows_offset() {
        let state = reduce(NavState::default(), NavAction::Scrolled(120.0));
        assert!(state.scrolled);
        assert!(!reduce(state, NavAction::Scrolled(0.0)).scrolled);
    }
}
