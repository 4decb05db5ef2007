use yew::prelude::*;

use crate::scroll::use_reveal;

static STATS: [(&str, &str, &str); 3] = [
    ("👥", "10+", "Years Experience"),
    ("🏆", "200+", "Projects Completed"),
    ("📈", "50+", "Happy Clients"),
];

static VALUES: [(&str, &str); 3] = [
    ("Innovation", "We constantly explore new ideas and technologies to deliver cutting-edge solutions."),
    ("Excellence", "We strive for excellence in everything we do, from customer service to product delivery."),
    ("Integrity", "We conduct our business with honesty, transparency, and ethical practices."),
];

static APPROACH: [&str; 4] = [
    "Understanding your unique challenges and goals",
    "Developing customized strategies and solutions",
    "Implementing with precision and attention to detail",
    "Measuring results and continuously improving",
];

#[function_component(About)]
pub fn about() -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());

    html! {
        <div ref={node} class={classes!("container", "about", "reveal", revealed.then(|| "visible"))}>
            <style>
                {r#"
                    .about > * + * {
                        margin-top: 4rem;
                    }
                    .about-story {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        align-items: center;
                        gap: 3rem;
                    }
                    .about-image {
                        position: relative;
                        height: 400px;
                    }
                    .about-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        border-radius: 0.5rem;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .about-image::after {
                        content: '';
                        position: absolute;
                        inset: 0;
                        border-radius: 0.5rem;
                        background: linear-gradient(to right, rgba(249, 115, 22, 0.2), transparent);
                    }
                    .about-stats {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1rem;
                        padding-top: 1rem;
                    }
                    .about-stat {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        padding: 1rem;
                        background: #fff;
                        border-radius: 0.5rem;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        transition: box-shadow 0.2s;
                    }
                    .about-stat:hover {
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .about-stat .value {
                        margin-top: 0.5rem;
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #1f2937;
                    }
                    .about-stat .label {
                        font-size: 0.875rem;
                        color: #6b7280;
                    }
                    .about-values {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                        padding: 2rem;
                        background: var(--accent-soft);
                        border-radius: 0.75rem;
                    }
                    .about-values ul, .about-values ol {
                        list-style: none;
                        padding: 0;
                    }
                    .about-values li {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        margin-bottom: 1rem;
                    }
                    .about-values .dot {
                        flex: none;
                        width: 0.5rem;
                        height: 0.5rem;
                        margin-top: 0.5rem;
                        border-radius: 50%;
                        background: var(--accent);
                        box-shadow: 0 0 0 4px #ffedd5;
                    }
                    .about-values .step {
                        flex: none;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 1.5rem;
                        height: 1.5rem;
                        border-radius: 50%;
                        font-size: 0.875rem;
                        color: #fff;
                        background: var(--accent);
                    }
                    @media (max-width: 768px) {
                        .about-story, .about-values { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="section-heading">
                <h2>{"About "}<span class="accent">{"Us"}</span></h2>
                <p>
                    {"We are a team of passionate professionals dedicated to delivering innovative solutions that help businesses grow and succeed in the digital age."}
                </p>
            </div>

            <div class="about-story">
                <div class="about-image">
                    <img src="/assets/team.svg" alt="Our team" />
                </div>
                <div>
                    <h3>{"Our "}<span class="accent">{"Story"}</span></h3>
                    <p class="muted">
                        {"Our company has grown from a small startup to a recognized leader in the industry. We've helped businesses of all sizes transform their operations and achieve their goals through innovative technology solutions."}
                    </p>
                    <p class="muted">
                        {"Our mission is to empower organizations with cutting-edge tools and strategies that drive growth, efficiency, and competitive advantage in an ever-evolving digital landscape."}
                    </p>
                    <div class="about-stats">
                        { for STATS.iter().map(|(icon, value, label)| html! {
                            <div class="about-stat" key={*label}>
                                <span class="icon">{*icon}</span>
                                <span class="value">{*value}</span>
                                <span class="label">{*label}</span>
                            </div>
                        }) }
                    </div>
                </div>
            </div>

            <div class="about-values">
                <div>
                    <h3>{"Our "}<span class="accent">{"Values"}</span></h3>
                    <ul>
                        { for VALUES.iter().map(|(title, text)| html! {
                            <li key={*title}>
                                <span class="dot"></span>
                                <div>
                                    <h4>{*title}</h4>
                                    <p class="muted small">{*text}</p>
                                </div>
                            </li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h3>{"Our "}<span class="accent">{"Approach"}</span></h3>
                    <p class="muted">
                        {"We believe in a collaborative approach that puts our clients at the center of everything we do. Our process involves:"}
                    </p>
                    <ol>
                        { for APPROACH.iter().enumerate().map(|(i, step)| html! {
                            <li key={i}>
                                <span class="step">{i + 1}</span>
                                <span>{*step}</span>
                            </li>
                        }) }
                    </ol>
                </div>
            </div>
        </div>
    }
}
