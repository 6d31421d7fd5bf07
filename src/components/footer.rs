use yew::prelude::*;
use yew_router::prelude::*;
use chrono::Datelike;

use crate::Route;
use crate::config::CONTACT;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div>
                    <div class="footer-brand">{CONTACT.company}</div>
                    <p>{format!("Recherche de fuites, infiltrations & diagnostics humidité — {}.", CONTACT.area)}</p>
                </div>
                <div>
                    <div class="footer-heading">{"Liens"}</div>
                    <ul>
                        <li><a href="/#services">{"Services"}</a></li>
                        <li><a href="/#avis">{"Avis"}</a></li>
                        <li><a href="/#faq">{"FAQ"}</a></li>
                        <li><a href="/#contact">{"Contact"}</a></li>
                    </ul>
                </div>
                <div>
                    <div class="footer-heading">{"Légal"}</div>
                    <ul>
                        <li><Link<Route> to={Route::LegalNotice}>{"Mentions légales"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Privacy}>{"Politique de confidentialité"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Cookies}>{"Cookies"}</Link<Route>></li>
                    </ul>
                </div>
            </div>
            <div class="container footer-legal">
                {format!("© {} {} – Tous droits réservés.", year, CONTACT.company)}
            </div>
            <style>
                {r#"
                .site-footer {
                    border-top: 1px solid #e2e8f0;
                    background: #fff;
                    padding: 2.5rem 0;
                    font-size: 0.875rem;
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                }
                @media (min-width: 768px) {
                    .footer-grid { grid-template-columns: repeat(3, 1fr); }
                }
                .footer-brand { font-size: 1.125rem; font-weight: 700; }
                .footer-heading { font-weight: 600; }
                .site-footer p { color: #475569; }
                .site-footer ul { margin-top: 0.5rem; padding: 0; list-style: none; }
                .site-footer li { margin-bottom: 0.25rem; }
                .site-footer a { color: inherit; text-decoration: none; }
                .site-footer a:hover { text-decoration: underline; }
                .footer-legal {
                    margin-top: 2rem;
                    border-top: 1px solid #e2e8f0;
                    padding-top: 1.5rem;
                    color: #64748b;
                }
                "#}
            </style>
        </footer>
    }
}
