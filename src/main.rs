use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::*;
use log::info;
use web_sys::MouseEvent;

mod config;
mod content;
mod contact {
    pub mod controller;
    pub mod delay;
    pub mod form;
    pub mod validation;
}
mod components {
    pub mod footer;
    pub mod toast;
}
mod pages {
    pub mod faq;
    pub mod home;
    pub mod legal;
}

use components::footer::Footer;
use config::CONTACT;
use pages::{
    home::Home,
    legal::{CookiePolicy, LegalNotice, NotFound, PrivacyPolicy},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/mentions-legales")]
    LegalNotice,
    #[at("/confidentialite")]
    Privacy,
    #[at("/cookies")]
    Cookies,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::LegalNotice => {
            info!("Rendering legal notice");
            html! { <LegalNotice /> }
        },
        Route::Privacy => {
            info!("Rendering privacy policy");
            html! { <PrivacyPolicy /> }
        },
        Route::Cookies => {
            info!("Rendering cookie policy");
            html! { <CookiePolicy /> }
        },
        Route::NotFound => html! { <NotFound /> },
    }
}

/// Header shadow kicks in once the page has scrolled this far.
const SCROLLED_THRESHOLD: f64 = 16.0;

#[function_component(Nav)]
pub fn nav() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <header class={classes!("top-nav", (scroll_y > SCROLLED_THRESHOLD).then(|| "scrolled"))}>
            <div class="container nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src="/assets/logo_humitek.svg" alt={CONTACT.company} width="40" height="40" />
                    <div>
                        <div class="brand">{CONTACT.company}</div>
                        <div class="brand-tagline">{CONTACT.tagline}</div>
                    </div>
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav class={classes!("nav-links", (*menu_open).then(|| "mobile-menu-open"))} onclick={close_menu}>
                    <a href="/#services">{"Services"}</a>
                    <a href="/#avis">{"Avis"}</a>
                    <a href="/#faq">{"FAQ"}</a>
                    <a href="/#contact">{"Contact"}</a>
                </nav>
                <div class="nav-actions">
                    <a href={CONTACT.phone_uri} class="button secondary small phone-link">
                        {format!("☎ {}", CONTACT.phone_display)}
                    </a>
                    <a href="/#contact" class="button primary small">{"Devis →"}</a>
                </div>
            </div>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>
                {r#"
                body {
                    margin: 0;
                    background: #f8fafc;
                    color: #0f172a;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    line-height: 1.5;
                }
                html { scroll-behavior: smooth; }
                .container {
                    width: 100%;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    box-sizing: border-box;
                }
                @media (min-width: 640px) { .container { padding: 0 1.5rem; } }
                @media (min-width: 1024px) { .container { padding: 0 2rem; } }
                .section-title { margin-bottom: 2rem; text-align: center; }
                .section-title .kicker {
                    margin-bottom: 0.5rem;
                    font-size: 0.75rem;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: #0284c7;
                }
                .section-title h2 { margin: 0; font-size: clamp(1.5rem, 3vw, 1.875rem); }
                .section-title p { max-width: 42rem; margin: 0.75rem auto 0; color: #475569; }
                .button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    border-radius: 1rem;
                    padding: 0.75rem 1.25rem;
                    font-weight: 600;
                    text-decoration: none;
                    box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
                }
                .button.small { padding: 0.5rem 0.75rem; font-size: 0.875rem; }
                .button.primary { background: #0284c7; color: #fff; }
                .button.primary:hover { background: #0369a1; }
                .button.secondary { border: 1px solid #e2e8f0; background: #fff; color: #334155; }
                .button.secondary:hover { background: #f1f5f9; }
                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 40;
                    border-bottom: 1px solid #e2e8f0;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(8px);
                    transition: box-shadow 0.2s;
                }
                .top-nav.scrolled { box-shadow: 0 4px 12px rgba(15, 23, 42, 0.08); }
                .nav-content {
                    display: flex;
                    height: 4rem;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: inherit;
                    text-decoration: none;
                    line-height: 1.2;
                }
                .brand { font-weight: 800; letter-spacing: -0.02em; }
                .brand-tagline { font-size: 0.75rem; color: #64748b; }
                .nav-links {
                    display: none;
                    gap: 1.5rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                .nav-links a { color: #334155; text-decoration: none; }
                .nav-links a:hover { color: #0369a1; }
                .nav-actions { display: flex; align-items: center; gap: 0.5rem; }
                .phone-link { display: none; }
                .burger-menu {
                    display: flex;
                    flex-direction: column;
                    gap: 4px;
                    border: none;
                    background: none;
                    cursor: pointer;
                }
                .burger-menu span { width: 20px; height: 2px; background: #334155; }
                .nav-links.mobile-menu-open {
                    position: absolute;
                    top: 4rem;
                    left: 0;
                    right: 0;
                    display: flex;
                    flex-direction: column;
                    padding: 1rem;
                    background: #fff;
                    border-bottom: 1px solid #e2e8f0;
                }
                @media (min-width: 640px) { .phone-link { display: inline-flex; } }
                @media (min-width: 768px) {
                    .nav-links { display: flex; }
                    .burger-menu { display: none; }
                }
                "#}
            </style>
            <Nav />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");
    tracing_wasm::set_as_global_default();

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
