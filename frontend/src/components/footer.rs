use chrono::{Datelike, Local};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::header::navigation;
use crate::components::ui::{Glyph, Icon};
use crate::config;
use crate::contact::Service;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div class="footer-company">
                    <Link<Route> to={Route::Home} classes="logo">
                        <span class="logo-mark logo-mark-lg"><Glyph icon={Icon::Building} /></span>
                        <span class="logo-text">
                            <span class="logo-title">{"ABOVEGROUND"}</span>
                            <span class="logo-subtitle">{"RENOVATION & CONSTRUCTION CORP"}</span>
                        </span>
                    </Link<Route>>
                    <p class="footer-blurb">
                        {"Reimagining construction with trust, quality, and innovation. Building beyond the surface for a better future."}
                    </p>
                    <div class="footer-contact">
                        <div><Glyph icon={Icon::MapPin} />{"Vancouver, BC, Canada"}</div>
                        <div><Glyph icon={Icon::Mail} />{config::CONTACT_EMAIL}</div>
                    </div>
                </div>

                <div>
                    <h3>{"Quick Links"}</h3>
                    <ul>
                        { for navigation().into_iter().map(|(name, route)| html! {
                            <li>
                                <Link<Route> to={route}>
                                    { if name == "About" { "About Us" } else { name } }
                                </Link<Route>>
                            </li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h3>{"Our Services"}</h3>
                    <ul>
                        { for Service::ALL.iter().map(|service| html! { <li>{service.label()}</li> }) }
                    </ul>
                </div>
            </div>

            <div class="container footer-bottom">
                <p>{format!("© {} {}. All rights reserved.", year, config::COMPANY_NAME)}</p>
                <div class="footer-legal">
                    <a href="#">{"Privacy Policy"}</a>
                    <a href="#">{"Terms of Service"}</a>
                </div>
            </div>
        </footer>
    }
}
