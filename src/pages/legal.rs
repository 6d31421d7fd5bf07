use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::config::{self, CONTACT};

#[derive(Properties, PartialEq)]
struct LegalPageProps {
    class: &'static str,
    title: &'static str,
    children: Children,
}

#[function_component(LegalPage)]
fn legal_page(props: &LegalPageProps) -> Html {
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            props.title,
        );
    }

    html! {
        <div class={classes!("legal-content", props.class)}>
            <div>
                <h1>{props.title}</h1>
                { for props.children.iter() }
                <p class="back-link">
                    <Link<Route> to={Route::Home}>{"← Retour à l’accueil"}</Link<Route>>
                </p>
            </div>
            <style>
                {r#"
                .legal-content {
                    min-height: 70vh;
                    background: #f8fafc;
                    padding: 4rem 1rem;
                }
                .legal-content > div {
                    max-width: 48rem;
                    margin: 0 auto;
                    border: 1px solid #e2e8f0;
                    border-radius: 1rem;
                    background: #fff;
                    padding: 2.5rem;
                }
                .legal-content h1 { font-size: 2rem; margin-bottom: 2rem; }
                .legal-content h2 { font-size: 1.25rem; color: #0369a1; }
                .legal-content section { margin-bottom: 1.5rem; color: #334155; }
                .back-link a { color: #0369a1; font-weight: 600; }
                "#}
            </style>
        </div>
    }
}

#[function_component(LegalNotice)]
pub fn legal_notice() -> Html {
    html! {
        <LegalPage class="legal-notice" title="Mentions légales">
            <section>
                <h2>{"Éditeur du site"}</h2>
                <p>{format!("{}, {} – {}.", CONTACT.company, CONTACT.city, CONTACT.area)}</p>
                <p>
                    {"Téléphone : "}<a href={CONTACT.phone_uri}>{CONTACT.phone_display}</a>
                    {" · Email : "}<a href={config::mailto_link("Mentions légales")}>{CONTACT.email}</a>
                </p>
            </section>
            <section>
                <h2>{"Hébergement"}</h2>
                <p>{"Site statique servi sans traitement côté serveur. Aucune donnée saisie dans le formulaire n’est transmise ni conservée."}</p>
            </section>
            <section>
                <h2>{"Propriété intellectuelle"}</h2>
                <p>{"Les textes, logos et visuels de ce site sont la propriété de HUMITEK. Toute reproduction sans autorisation est interdite."}</p>
            </section>
        </LegalPage>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <LegalPage class="privacy-policy" title="Politique de confidentialité">
            <section>
                <h2>{"Données collectées"}</h2>
                <p>{"Le formulaire de devis demande votre nom, votre téléphone et, si vous le souhaitez, votre email et un message décrivant votre besoin."}</p>
            </section>
            <section>
                <h2>{"Utilisation"}</h2>
                <p>{"Ces informations servent uniquement à vous recontacter au sujet de votre demande. Elles ne sont ni revendues ni utilisées à des fins publicitaires."}</p>
            </section>
            <section>
                <h2>{"Vos droits"}</h2>
                <p>
                    {"Vous pouvez demander l’accès, la rectification ou la suppression de vos données en écrivant à "}
                    <a href={config::mailto_link("Données personnelles")}>{CONTACT.email}</a>
                    {"."}
                </p>
            </section>
        </LegalPage>
    }
}

#[function_component(CookiePolicy)]
pub fn cookie_policy() -> Html {
    html! {
        <LegalPage class="cookie-policy" title="Cookies">
            <section>
                <p>{"Ce site ne dépose aucun cookie de mesure d’audience ni de publicité. Aucun consentement n’est donc requis."}</p>
            </section>
        </LegalPage>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <LegalPage class="not-found" title="Page introuvable">
            <section>
                <p>{"La page demandée n’existe pas ou a été déplacée."}</p>
            </section>
        </LegalPage>
    }
}
