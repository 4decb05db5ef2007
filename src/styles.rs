use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

/// Page-wide rules shared by every component. Component specific rules
/// live next to their markup.
#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! {
        <Global css={css!(r#"
            :root {
                --accent: #f97316;
                --accent-soft: #fff7ed;
            }
            html {
                scroll-behavior: smooth;
            }
            body {
                margin: 0;
                font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                color: #1f2937;
                background: #fff;
            }
            *, *::before, *::after {
                box-sizing: border-box;
            }
            .container {
                width: 100%;
                max-width: 1280px;
                margin: 0 auto;
                padding: 0 1rem;
            }
            .page-section {
                padding: 5rem 0;
            }
            .page-section.tinted {
                background: var(--accent-soft);
            }
            .accent {
                color: var(--accent);
            }
            .muted {
                color: #4b5563;
            }
            .small {
                font-size: 0.875rem;
            }
            .section-heading {
                max-width: 48rem;
                margin: 0 auto;
                text-align: center;
            }
            .section-heading h2 {
                margin-bottom: 1rem;
                font-size: 2.25rem;
            }
            .section-heading p {
                color: #4b5563;
            }
            .btn {
                display: inline-block;
                padding: 0.75rem 1.5rem;
                border: 1px solid transparent;
                border-radius: 0.375rem;
                font: inherit;
                font-weight: 500;
                text-decoration: none;
                cursor: pointer;
                transition: background 0.2s, transform 0.15s;
            }
            .btn:hover {
                transform: scale(1.05);
            }
            .btn:active {
                transform: scale(0.95);
            }
            .btn:disabled {
                opacity: 0.7;
                cursor: default;
                transform: none;
            }
            .btn-primary {
                color: #fff;
                background: var(--accent);
            }
            .btn-primary:hover {
                background: #ea580c;
            }
            .btn-outline {
                color: var(--accent);
                background: transparent;
                border-color: var(--accent);
            }
            .btn-outline:hover {
                background: var(--accent-soft);
            }
            .btn-light {
                color: var(--accent);
                background: #fff;
            }
            .btn-light:hover {
                background: #f3f4f6;
            }
            .btn-small {
                margin-top: 1rem;
                padding: 0.5rem 1rem;
                font-size: 0.875rem;
            }
            .reveal {
                opacity: 0;
                transform: translateY(20px);
                transition: opacity 0.6s ease-out, transform 0.6s ease-out;
            }
            .reveal.visible {
                opacity: 1;
                transform: translateY(0);
            }
            @keyframes fadeIn {
                from { opacity: 0; }
                to { opacity: 1; }
            }
            @keyframes fadeDown {
                from { opacity: 0; transform: translateY(-10px); }
                to { opacity: 1; transform: translateY(0); }
            }
        "#)} />
    }
}
