use chrono::{Datelike, Local};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::contact::SOCIALS;
use crate::components::services::SERVICES;
use crate::sections::Section;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<Section>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let current_year = Local::now().year();

    let go_to = |section: Section| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(section);
        })
    };

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        position: relative;
                        overflow: hidden;
                        padding: 4rem 0 2rem;
                        color: #fff;
                        background: #111827;
                    }
                    .footer-glow {
                        position: absolute;
                        border-radius: 50%;
                        opacity: 0.05;
                        filter: blur(64px);
                    }
                    .footer-glow.top {
                        top: 0;
                        right: 0;
                        width: 20rem;
                        height: 20rem;
                        background: #f97316;
                        animation: drift 15s ease-in-out infinite;
                    }
                    .footer-glow.bottom {
                        bottom: 0;
                        left: 0;
                        width: 15rem;
                        height: 15rem;
                        background: #fb923c;
                        animation: drift 12s ease-in-out infinite reverse;
                    }
                    @keyframes drift {
                        0%, 100% { transform: scale(1) translate(0, 0); }
                        50% { transform: scale(1.2) translate(20px, -20px); }
                    }
                    .footer-grid {
                        position: relative;
                        z-index: 1;
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                        margin-bottom: 3rem;
                    }
                    .footer-grid h3 {
                        font-size: 1.125rem;
                    }
                    .footer-brand {
                        font-size: 1.25rem;
                        color: var(--accent);
                    }
                    .site-footer p, .site-footer li, .site-footer a {
                        color: #9ca3af;
                    }
                    .footer-list {
                        list-style: none;
                        padding: 0;
                    }
                    .footer-list li {
                        margin-bottom: 0.5rem;
                    }
                    .footer-list a {
                        display: flex;
                        align-items: center;
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .footer-list a:hover, .footer-legal a:hover {
                        color: var(--accent);
                    }
                    .footer-list a::before {
                        content: '';
                        width: 0.375rem;
                        height: 0.375rem;
                        margin-right: 0.5rem;
                        border-radius: 50%;
                        background: var(--accent);
                        transition: transform 0.2s;
                    }
                    .footer-list a:hover::before {
                        transform: scale(1.5);
                    }
                    .footer-socials {
                        display: flex;
                        gap: 1rem;
                    }
                    .footer-socials a {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 2rem;
                        height: 2rem;
                        border-radius: 50%;
                        background: #1f2937;
                        transition: all 0.2s;
                    }
                    .footer-socials a:hover {
                        background: var(--accent);
                        transform: translateY(-5px) scale(1.1);
                    }
                    .footer-socials span {
                        width: 0.75rem;
                        height: 0.75rem;
                        border-radius: 50%;
                        background: #fff;
                    }
                    .footer-contact li {
                        display: flex;
                        gap: 0.75rem;
                        transition: transform 0.2s;
                    }
                    .footer-contact li:hover {
                        transform: translateX(5px);
                    }
                    .footer-bottom {
                        position: relative;
                        z-index: 1;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding-top: 2rem;
                        border-top: 1px solid #1f2937;
                        font-size: 0.875rem;
                    }
                    .footer-bottom p {
                        animation: breathe 3s ease-in-out infinite;
                    }
                    @keyframes breathe {
                        0%, 100% { opacity: 0.8; }
                        50% { opacity: 1; }
                    }
                    .footer-legal {
                        display: flex;
                        gap: 1.5rem;
                        list-style: none;
                        padding: 0;
                    }
                    .footer-legal a {
                        text-decoration: none;
                    }
                    @media (max-width: 1024px) {
                        .footer-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (max-width: 768px) {
                        .footer-grid { grid-template-columns: 1fr; }
                        .footer-bottom { flex-direction: column; gap: 1rem; }
                    }
                "#}
            </style>
            <div class="footer-glow top"></div>
            <div class="footer-glow bottom"></div>

            <div class="container">
                <div class="footer-grid">
                    <div>
                        <h3 class="footer-brand">{"DevXdiscovery"}</h3>
                        <p>
                            {"Providing innovative solutions for modern challenges. We help businesses grow and succeed in the digital age."}
                        </p>
                        <div class="footer-socials">
                            { for SOCIALS.iter().map(|social| html! {
                                <a key={*social} href="#" aria-label={format!("Follow us on {}", social)}>
                                    <span></span>
                                </a>
                            }) }
                        </div>
                    </div>

                    <div>
                        <h3>{"Quick Links"}</h3>
                        <ul class="footer-list">
                            { for Section::ALL.into_iter().map(|section| html! {
                                <li key={section.id()}>
                                    <a href={format!("#{}", section.id())} onclick={go_to(section)}>
                                        {section.label()}
                                    </a>
                                </li>
                            }) }
                            <li><a href="#">{"Privacy Policy"}</a></li>
                            <li><a href="#">{"Terms of Service"}</a></li>
                        </ul>
                    </div>

                    <div>
                        <h3>{"Our Services"}</h3>
                        <ul class="footer-list">
                            { for SERVICES.iter().map(|service| html! {
                                <li key={service.title}>
                                    <a href="#services" onclick={go_to(Section::Services)}>
                                        {service.title}
                                    </a>
                                </li>
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h3>{"Contact Info"}</h3>
                        <ul class="footer-list footer-contact">
                            <li><span>{"📍"}</span><span>{"Jamnagar, Kudrat Residency"}</span></li>
                            <li><span>{"📞"}</span><span>{"+91 98987 24247"}</span></li>
                            <li><span>{"✉"}</span><span>{"info@devxdiscovery.com"}</span></li>
                        </ul>
                        <button class="btn btn-primary btn-small" onclick={go_to(Section::Contact)}>
                            {"Get a Quote"}
                        </button>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{format!("© {} DevXdiscovery. All rights reserved.", current_year)}</p>
                    <ul class="footer-legal">
                        { for ["Privacy Policy", "Terms of Service", "Sitemap"].into_iter().map(|item| html! {
                            <li key={item}><a href="#">{item}</a></li>
                        }) }
                    </ul>
                </div>
            </div>
        </footer>
    }
}
