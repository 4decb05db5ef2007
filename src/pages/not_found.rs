use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>
                {r#"
                    .not-found {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        min-height: 100vh;
                        text-align: center;
                    }
                    .not-found h1 {
                        font-size: 4rem;
                        margin: 0;
                        color: var(--accent);
                    }
                "#}
            </style>
            <h1>{"404"}</h1>
            <p class="muted">{"This page doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">
                {"Back to home"}
            </Link<Route>>
        </div>
    }
}
