use yew::prelude::*;
use log::info;

use crate::config::{self, CONTACT};
use crate::contact::controller::SUCCESS_MESSAGE;
use crate::contact::form::ContactForm;
use crate::components::toast::{Notice, Toast};
use crate::content::{self, PROCESS_STEPS, SERVICES, TESTIMONIALS, TRUST_BULLETS};
use crate::pages::faq::FaqSection;

#[derive(Properties, PartialEq)]
pub struct PillProps {
    #[prop_or_default]
    pub icon: Option<&'static str>,
    pub children: Children,
}

#[function_component(Pill)]
pub fn pill(props: &PillProps) -> Html {
    html! {
        <div class="pill">
            if let Some(icon) = props.icon {
                <span class="pill-icon" aria-hidden="true">{icon}</span>
            }
            <span>{ for props.children.iter() }</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SectionTitleProps {
    #[prop_or_default]
    kicker: Option<&'static str>,
    title: &'static str,
    #[prop_or_default]
    children: Children,
}

#[function_component(SectionTitle)]
fn section_title(props: &SectionTitleProps) -> Html {
    html! {
        <div class="section-title">
            if let Some(kicker) = props.kicker {
                <div class="kicker">{kicker}</div>
            }
            <h2>{props.title}</h2>
            if !props.children.is_empty() {
                <p>{ for props.children.iter() }</p>
            }
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="container hero-grid">
                <div>
                    <Pill icon={Some("🛡")}>{CONTACT.tagline}</Pill>
                    <h1>{"HUMITEK — Recherche de fuites, infiltrations, diagnostic humidité"}</h1>
                    <p class="hero-subtitle">
                        {"Experts en pathologies du bâtiment. Diagnostic précis et solutions adaptées, en toute indépendance."}
                    </p>
                    <div class="pill-row">
                        { for TRUST_BULLETS.iter().map(|b| html! {
                            <Pill icon={Some(b.icon)}>{b.label}</Pill>
                        }) }
                    </div>
                    <div class="cta-row">
                        <a href="#contact" class="button primary">{"Demander un devis →"}</a>
                        <a href={CONTACT.phone_uri} class="button secondary">
                            {format!("Appeler le {}", CONTACT.phone_display)}
                        </a>
                    </div>
                </div>
                <div class="hero-badge">
                    <img src="/assets/logo_humitek.svg" alt={CONTACT.company} width="80" height="80" />
                    <div>{format!("{} · {}", CONTACT.company, CONTACT.area)}</div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Services)]
fn services() -> Html {
    html! {
        <section id="services" class="band white">
            <div class="container">
                <SectionTitle kicker={Some("Services")} title="Nos expertises">
                    {"Nous intervenons en Nouvelle-Aquitaine pour diagnostiquer et résoudre durablement les problèmes d’humidité."}
                </SectionTitle>
                <div class="card-grid four">
                    { for SERVICES.iter().map(|s| html! {
                        <div class="card">
                            <div class="card-head">
                                <div class="icon-box" aria-hidden="true">{s.icon}</div>
                                <h3>{s.title}</h3>
                            </div>
                            <p>{s.description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Process)]
fn process() -> Html {
    html! {
        <section id="process" class="band muted">
            <div class="container">
                <SectionTitle kicker={Some("Accompagnement")} title="Un parcours simple et efficace">
                    {"De la prise de contact au suivi, nous restons votre interlocuteur unique."}
                </SectionTitle>
                <ol class="card-grid three steps">
                    { for PROCESS_STEPS.iter().enumerate().map(|(i, step)| html! {
                        <li class="card step">
                            <div class="step-number">{(i + 1).to_string()}</div>
                            <h3>{step.title}</h3>
                            <p>{step.description}</p>
                        </li>
                    }) }
                </ol>
            </div>
        </section>
    }
}

#[function_component(Reviews)]
fn reviews() -> Html {
    html! {
        <section id="avis" class="band white">
            <div class="container">
                <SectionTitle kicker={Some("Avis")} title="Avis Google">
                    {"Quelques retours clients."}
                </SectionTitle>
                <div class="card-grid three">
                    { for TESTIMONIALS.iter().map(|r| html! {
                        <div class="card review">
                            <div class="stars" aria-label={format!("Note {}/5", r.rating)}>
                                { for (0..content::stars(r.rating)).map(|_| html! { <span>{"★"}</span> }) }
                            </div>
                            <p>{format!("“{}”", r.text)}</p>
                            <div class="review-author">{format!("— {}", r.author)}</div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    let notice = use_state(|| None::<Notice>);
    let serial = use_mut_ref(|| 0u32);

    let on_accepted = {
        let notice = notice.clone();
        let serial = serial.clone();
        Callback::from(move |_: ()| {
            info!("Quote request confirmed to visitor");
            let next = Notice::next(&mut serial.borrow_mut(), SUCCESS_MESSAGE);
            notice.set(Some(next));
        })
    };

    let on_close = {
        let notice = notice.clone();
        Callback::from(move |_: ()| notice.set(None))
    };

    html! {
        <section id="contact" class="band muted">
            <div class="container">
                <SectionTitle title="Contact & Devis">
                    {format!("{} – {}. Dites-nous ce que vous constatez, nous revenons vers vous rapidement.", CONTACT.city, CONTACT.area)}
                </SectionTitle>
                <div class="card-grid two">
                    <div class="card">
                        <div class="card-head">
                            <div class="icon-box solid" aria-hidden="true">{"☎"}</div>
                            <div>
                                <div class="strong">{"Un besoin urgent ?"}</div>
                                <div class="small">{"Appelez-nous ou laissez vos coordonnées."}</div>
                            </div>
                        </div>
                        <ul class="contact-list">
                            <li><strong>{"Tél."}</strong>{" : "}<a href={CONTACT.phone_uri}>{CONTACT.phone_display}</a></li>
                            <li><strong>{"Email"}</strong>{" : "}<a href={config::mailto_link("Demande de devis")}>{CONTACT.email}</a></li>
                            <li><strong>{"Zone"}</strong>{" : "}{CONTACT.area}</li>
                        </ul>
                        <div class="pill-stack">
                            <Pill icon={Some("✔")}>{"Experts indépendants"}</Pill>
                            <Pill icon={Some("⏱")}>{"Intervention rapide"}</Pill>
                            <Pill icon={Some("📍")}>{format!("{} · {}", CONTACT.city, CONTACT.area)}</Pill>
                        </div>
                    </div>
                    <div class="card">
                        <ContactForm on_accepted={on_accepted} />
                    </div>
                </div>
            </div>
            if let Some(current) = (*notice).clone() {
                <Toast notice={current} on_close={on_close} />
            }
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="landing-page">
            <Hero />
            <Services />
            <Process />
            <Reviews />
            <FaqSection />
            <Contact />
            <style>
                {r#"
                .hero {
                    border-bottom: 1px solid #e2e8f0;
                    background: linear-gradient(to bottom, #fff, #f8fafc);
                }
                .hero-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    align-items: center;
                    gap: 2.5rem;
                    padding: 3rem 0;
                }
                @media (min-width: 1024px) {
                    .hero-grid { grid-template-columns: 1fr 1fr; }
                }
                .hero h1 {
                    margin-top: 1rem;
                    font-size: clamp(1.875rem, 4vw, 3rem);
                    font-weight: 800;
                    letter-spacing: -0.02em;
                }
                .hero-subtitle {
                    max-width: 36rem;
                    font-size: 1.125rem;
                    color: #475569;
                }
                .hero-badge {
                    border: 1px dashed #cbd5e1;
                    border-radius: 1rem;
                    padding: 2rem;
                    text-align: center;
                    font-size: 0.875rem;
                    color: #64748b;
                }
                .pill {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    border: 1px solid #e2e8f0;
                    border-radius: 999px;
                    background: #fff;
                    padding: 0.25rem 0.75rem;
                    font-size: 0.875rem;
                    color: #334155;
                    box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
                }
                .pill-row, .cta-row {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    gap: 0.5rem;
                    margin-top: 1.5rem;
                }
                .cta-row { gap: 0.75rem; }
                .pill-stack {
                    display: flex;
                    flex-direction: column;
                    align-items: flex-start;
                    gap: 0.5rem;
                    margin-top: 1.5rem;
                }
                .band { border-bottom: 1px solid #e2e8f0; padding: 3rem 0; }
                .band.white { background: #fff; }
                .band.muted { background: #f8fafc; }
                .card-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                    padding: 0;
                    list-style: none;
                }
                @media (min-width: 768px) {
                    .card-grid.two { grid-template-columns: repeat(2, 1fr); }
                    .card-grid.three { grid-template-columns: repeat(3, 1fr); }
                    .card-grid.four { grid-template-columns: repeat(2, 1fr); }
                }
                @media (min-width: 1024px) {
                    .card-grid.four { grid-template-columns: repeat(4, 1fr); }
                }
                .card {
                    position: relative;
                    border: 1px solid #e2e8f0;
                    border-radius: 1rem;
                    background: #fff;
                    padding: 1.5rem;
                    box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
                }
                .card p { font-size: 0.875rem; color: #475569; }
                .card-head { display: flex; align-items: center; gap: 0.75rem; }
                .card-head h3 { margin: 0; font-size: 1.125rem; }
                .icon-box {
                    display: flex;
                    height: 2.75rem;
                    width: 2.75rem;
                    flex-shrink: 0;
                    align-items: center;
                    justify-content: center;
                    border-radius: 0.75rem;
                    background: #f0f9ff;
                    font-size: 1.25rem;
                }
                .icon-box.solid { background: #0284c7; color: #fff; }
                .step-number {
                    position: absolute;
                    top: -0.75rem;
                    left: 1.5rem;
                    display: inline-flex;
                    height: 1.75rem;
                    width: 1.75rem;
                    align-items: center;
                    justify-content: center;
                    border-radius: 999px;
                    background: #0284c7;
                    font-size: 0.875rem;
                    font-weight: 700;
                    color: #fff;
                }
                .review { background: #f8fafc; }
                .stars { color: #f59e0b; font-size: 1.25rem; letter-spacing: 0.1em; }
                .review-author { font-size: 0.875rem; font-weight: 600; }
                .contact-list { padding-left: 0; list-style: none; font-size: 0.875rem; }
                .contact-list li { margin-bottom: 0.5rem; }
                .strong { font-weight: 600; }
                .small { font-size: 0.875rem; color: #475569; }
                "#}
            </style>
        </div>
    }
}
