use web_sys::MouseEvent;
use yew::prelude::*;

use crate::scroll::use_reveal;
use crate::sections::Section;

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub short_desc: &'static str,
    pub long_desc: &'static str,
    pub features: [&'static str; 4],
}

pub static SERVICES: [Service; 6] = [
    Service {
        icon: "</>",
        title: "Web Development",
        short_desc: "Custom websites and web applications",
        long_desc: "We build responsive, high-performance websites and web applications tailored to your specific business needs. Our development team uses the latest technologies to ensure your web presence is modern, secure, and scalable.",
        features: [
            "Responsive design for all devices",
            "Custom CMS integration",
            "E-commerce solutions",
            "Performance optimization",
        ],
    },
    Service {
        icon: "📊",
        title: "Digital Marketing",
        short_desc: "Grow your online presence and reach",
        long_desc: "Our digital marketing strategies help you connect with your target audience, increase brand awareness, and drive conversions. We use data-driven approaches to maximize your marketing ROI.",
        features: ["SEO optimization", "Social media marketing", "Content strategy", "PPC advertising"],
    },
    Service {
        icon: "📱",
        title: "Mobile App Development",
        short_desc: "Native and cross-platform mobile apps",
        long_desc: "We design and develop intuitive, feature-rich mobile applications for iOS and Android platforms. Our mobile solutions help businesses engage users and streamline operations on the go.",
        features: [
            "Native iOS and Android apps",
            "Cross-platform development",
            "UI/UX design",
            "App store optimization",
        ],
    },
    Service {
        icon: "🌐",
        title: "Cloud Solutions",
        short_desc: "Scalable and secure cloud infrastructure",
        long_desc: "Our cloud solutions help businesses leverage the power of cloud computing for improved scalability, reliability, and cost-efficiency. We provide migration, management, and optimization services.",
        features: [
            "Cloud migration",
            "Infrastructure as code",
            "Serverless architecture",
            "DevOps implementation",
        ],
    },
    Service {
        icon: "🛡",
        title: "Cybersecurity",
        short_desc: "Protect your business from threats",
        long_desc: "We help organizations strengthen their security posture with comprehensive cybersecurity services. Our team identifies vulnerabilities and implements robust security measures to protect your valuable data.",
        features: [
            "Security assessments",
            "Penetration testing",
            "Compliance consulting",
            "Security awareness training",
        ],
    },
    Service {
        icon: "💡",
        title: "IT Consulting",
        short_desc: "Strategic technology guidance",
        long_desc: "Our IT consulting services provide strategic guidance to help businesses leverage technology for growth and competitive advantage. We work with you to develop IT roadmaps aligned with your business objectives.",
        features: [
            "IT strategy development",
            "Technology assessment",
            "Digital transformation",
            "Process optimization",
        ],
    },
];

/// Accordion rule: clicking the open card closes it, any other card replaces it.
pub fn toggle_service(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub on_navigate: Callback<Section>,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let open_service = use_state(|| None::<usize>);

    let to_contact = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            // Don't let the card underneath toggle shut.
            e.stop_propagation();
            on_navigate.emit(Section::Contact);
        })
    };

    html! {
        <div ref={node} class={classes!("container", "services", "reveal", revealed.then(|| "visible"))}>
            <style>
                {r#"
                    .services > * + * {
                        margin-top: 3rem;
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                        align-items: start;
                    }
                    .service-card {
                        padding: 1.5rem;
                        background: #fff;
                        border: 2px solid transparent;
                        border-radius: 0.5rem;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        cursor: pointer;
                        transition: all 0.2s ease;
                    }
                    .service-card:hover {
                        transform: translateY(-5px);
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .service-card.open {
                        border-color: var(--accent);
                    }
                    .service-head {
                        display: flex;
                        justify-content: space-between;
                        align-items: flex-start;
                    }
                    .service-title {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    .service-icon {
                        padding: 0.75rem;
                        border-radius: 0.5rem;
                        background: #ffedd5;
                        color: var(--accent);
                        font-weight: 700;
                    }
                    .service-title h3 {
                        margin: 0;
                        font-size: 1.25rem;
                        color: #1f2937;
                    }
                    .service-chevron {
                        color: var(--accent);
                        transition: transform 0.3s;
                    }
                    .service-card.open .service-chevron {
                        transform: rotate(90deg);
                    }
                    .service-body {
                        margin-top: 1rem;
                        padding-top: 1rem;
                        border-top: 1px solid #f3f4f6;
                        animation: fadeDown 0.3s ease-out;
                    }
                    .service-body ul {
                        list-style: none;
                        padding: 0;
                    }
                    .service-body li::before {
                        content: '';
                        display: inline-block;
                        width: 0.375rem;
                        height: 0.375rem;
                        margin-right: 0.5rem;
                        border-radius: 50%;
                        background: var(--accent);
                        vertical-align: middle;
                    }
                    .custom-banner {
                        padding: 2rem;
                        border-radius: 0.75rem;
                        text-align: center;
                        color: #fff;
                        background: linear-gradient(to right, #f97316, #ea580c);
                    }
                    .custom-banner p {
                        max-width: 42rem;
                        margin: 0 auto 1.5rem;
                    }
                    @media (max-width: 1024px) {
                        .services-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (max-width: 768px) {
                        .services-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="section-heading">
                <h2>{"Our "}<span class="accent">{"Services"}</span></h2>
                <p>
                    {"We offer a comprehensive range of services to help your business thrive in the digital landscape. Explore our offerings below."}
                </p>
            </div>

            <div class="services-grid">
                { for SERVICES.iter().enumerate().map(|(index, service)| {
                    let is_open = *open_service == Some(index);
                    let onclick = {
                        let open_service = open_service.clone();
                        Callback::from(move |_: MouseEvent| {
                            open_service.set(toggle_service(*open_service, index));
                        })
                    };
                    html! {
                        <div key={service.title} class={classes!("service-card", is_open.then(|| "open"))} onclick={onclick}>
                            <div class="service-head">
                                <div class="service-title">
                                    <div class="service-icon">{service.icon}</div>
                                    <div>
                                        <h3>{service.title}</h3>
                                        <p class="muted small">{service.short_desc}</p>
                                    </div>
                                </div>
                                <span class="service-chevron">{"›"}</span>
                            </div>
                            if is_open {
                                <div class="service-body">
                                    <p class="muted">{service.long_desc}</p>
                                    <ul>
                                        { for service.features.iter().map(|feature| html! {
                                            <li key={*feature}>{*feature}</li>
                                        }) }
                                    </ul>
                                    <button class="btn btn-primary btn-small" onclick={to_contact.clone()}>
                                        {"Learn More"}
                                    </button>
                                </div>
                            }
                        </div>
                    }
                }) }
            </div>

            <div class="custom-banner">
                <h3>{"Need a Custom Solution?"}</h3>
                <p>
                    {"We understand that every business is unique. Contact us to discuss your specific requirements and how we can tailor our services to meet your needs."}
                </p>
                <button class="btn btn-light" onclick={to_contact.clone()}>
                    {"Contact Us"}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_a_card_closes_the_other() {
        let open = toggle_service(None, 2);
        assert_eq!(open, Some(2));
        assert_eq!(toggle_service(open, 4), Some(4));
    }

    #[test]
    fn clicking_the_open_card_collapses_it() {
        assert_eq!(toggle_service(Some(3), 3), None);
    }

    #[test]
    fn catalogue_titles_are_unique() {
        let mut titles: Vec<_> = SERVICES.iter().map(|s| s.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), SERVICES.len());
    }
}
