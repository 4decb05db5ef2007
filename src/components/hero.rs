use web_sys::MouseEvent;
use yew::prelude::*;

use crate::sections::Section;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_navigate: Callback<Section>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let go_to = |section: Section| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(section))
    };

    html! {
        <div class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        display: flex;
                        align-items: center;
                        min-height: 100vh;
                        overflow: hidden;
                    }
                    .hero-bubble {
                        position: absolute;
                        border-radius: 50%;
                        z-index: 0;
                    }
                    .hero-bubble.one { width: 16rem; height: 16rem; top: 5rem; right: 2.5rem; background: #fed7aa; opacity: 0.3; }
                    .hero-bubble.two { width: 10rem; height: 10rem; bottom: 5rem; left: 2.5rem; background: #fdba74; opacity: 0.2; }
                    .hero-bubble.three { width: 5rem; height: 5rem; top: 33%; left: 25%; background: #fb923c; opacity: 0.1; }
                    .hero-grid {
                        position: relative;
                        z-index: 1;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        align-items: center;
                        gap: 3rem;
                    }
                    .hero-copy {
                        animation: slideFromLeft 0.8s ease-out both;
                    }
                    .hero-copy h1 {
                        font-size: 3.5rem;
                        line-height: 1.15;
                        color: #1f2937;
                        animation: fadeIn 0.8s ease-out 0.2s both;
                    }
                    .hero-copy p {
                        max-width: 32rem;
                        font-size: 1.125rem;
                        color: #4b5563;
                        animation: fadeIn 0.8s ease-out 0.4s both;
                    }
                    .hero-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        animation: fadeIn 0.8s ease-out 0.6s both;
                    }
                    .hero-visual {
                        position: relative;
                        height: 400px;
                        animation: popIn 0.8s ease-out 0.3s both;
                    }
                    .hero-visual img {
                        width: 100%;
                        height: 100%;
                        object-fit: contain;
                    }
                    .scroll-indicator {
                        position: absolute;
                        bottom: 2.5rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        justify-content: center;
                        width: 2rem;
                        height: 3rem;
                        border: 2px solid var(--accent);
                        border-radius: 9999px;
                        animation: bob 0.5s ease-in-out 1s infinite alternate;
                    }
                    .scroll-indicator span {
                        width: 0.375rem;
                        height: 0.75rem;
                        margin-top: 0.5rem;
                        border-radius: 9999px;
                        background: var(--accent);
                        animation: wheel 1.5s linear infinite;
                    }
                    @keyframes slideFromLeft {
                        from { opacity: 0; transform: translateX(-50px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                    @keyframes popIn {
                        from { opacity: 0; transform: scale(0.8); }
                        to { opacity: 1; transform: scale(1); }
                    }
                    @keyframes bob {
                        from { transform: translate(-50%, -20px); opacity: 0.4; }
                        to { transform: translate(-50%, 0); opacity: 1; }
                    }
                    @keyframes wheel {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(12px); }
                    }
                    @media (max-width: 768px) {
                        .hero-grid { grid-template-columns: 1fr; padding-top: 8rem; }
                        .hero-copy h1 { font-size: 2.25rem; }
                    }
                "#}
            </style>
            <div class="hero-bubble one"></div>
            <div class="hero-bubble two"></div>
            <div class="hero-bubble three"></div>

            <div class="container hero-grid">
                <div class="hero-copy">
                    <h1>
                        {"DevXdiscovery"}
                        <br />
                        <span class="accent">{"Where Ideas Turn Into Impact"}</span>
                    </h1>
                    <p>
                        {"Innovation isn't optional, it's essential. At DevXdiscovery, we don't just build software; we engineer possibilities. Whether you're shaping a startup dream or scaling an enterprise vision, our expert team delivers cutting-edge solutions with speed, style, and precision. You imagine it. We design, develop, and launch it with passion and purpose."}
                    </p>
                    <div class="hero-actions">
                        <button class="btn btn-primary" onclick={go_to(Section::Services)}>
                            {"Our Services"}
                        </button>
                        <button class="btn btn-outline" onclick={go_to(Section::Contact)}>
                            {"Contact Us"}
                        </button>
                    </div>
                </div>
                <div class="hero-visual">
                    <img src="/assets/hero.svg" alt="Business solutions illustration" />
                </div>
            </div>

            <div class="scroll-indicator">
                <span></span>
            </div>
        </div>
    }
}
