use web_sys::MouseEvent;
use yew::prelude::*;

use crate::scroll::scroll_to_top;

#[derive(Properties, PartialEq)]
pub struct ScrollTopProps {
    pub visible: bool,
}

#[function_component(ScrollTopButton)]
pub fn scroll_top_button(props: &ScrollTopProps) -> Html {
    if !props.visible {
        return html! {};
    }

    let onclick = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <button class="scroll-top" onclick={onclick} aria-label="Scroll to top">
            <style>
                {r#"
                    .scroll-top {
                        position: fixed;
                        right: 2rem;
                        bottom: 2rem;
                        z-index: 50;
                        width: 3rem;
                        height: 3rem;
                        border: none;
                        border-radius: 50%;
                        font-size: 1.25rem;
                        color: #fff;
                        background: var(--accent);
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        cursor: pointer;
                        transition: background 0.2s;
                        animation: riseIn 0.3s ease-out;
                    }
                    .scroll-top:hover {
                        background: #ea580c;
                    }
                    @keyframes riseIn {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                "#}
            </style>
            {"▲"}
        </button>
    }
}
