use yew::prelude::*;

use crate::components::ui::{ButtonVariant, Card, CardContent, Glyph, Icon, LinkButton};
use crate::config;
use crate::reveal::{use_reveal_on_scroll, REVEAL_CLASS};
use crate::Route;

const WHO_WE_SERVE: [&str; 6] = [
    "The Elder Generation",
    "Business Owners",
    "Property Managers",
    "Government & Industries",
    "Schools & Institutions",
    "Hotels & Hospitality",
];

#[function_component(About)]
pub fn about() -> Html {
    let hero = use_node_ref();
    let story = use_node_ref();
    let vision = use_node_ref();
    use_reveal_on_scroll(vec![hero.clone(), story.clone(), vision.clone()]);

    let facts = [
        (Icon::MapPin, "Location", config::LOCATION),
        (Icon::Globe, "Industry", "Construction & Real Estate Development"),
        (Icon::Mail, "Contact", config::CONTACT_EMAIL),
    ];

    html! {
        <div class="page">
            <section ref={hero} class={classes!("hero", REVEAL_CLASS)}>
                <div class="container">
                    <h1>{"About Aboveground"}</h1>
                    <p>{"Building trust, quality, and the future - one project at a time"}</p>
                </div>
            </section>

            <section ref={story} class={classes!("section", REVEAL_CLASS)}>
                <div class="container grid grid-2" style="align-items: center; gap: 4rem;">
                    <div class="muted">
                        <div class="section-heading" style="text-align: left; margin-bottom: 2rem;">
                            <h2>{"Our Story"}</h2>
                        </div>
                        <p>
                            {"Aboveground Renovation and Construction Corp was born from a simple belief: construction should be about more than just building structures. It should be about building trust, relationships, and a better future."}
                        </p>
                        <p>
                            {"Based in the heart of Vancouver, BC, we've made it our mission to reimagine what construction means. We don't just build - we craft experiences, create lasting value, and exceed expectations at every turn."}
                        </p>
                        <p>
                            {"Our approach is different. We believe in transparency from the first quote to the final walkthrough. We believe in quality that doesn't compromise. And we believe in building relationships that last long after the project is complete."}
                        </p>
                    </div>
                    <Card>
                        <CardContent class={classes!("section-muted")}>
                            { for facts.iter().map(|(icon, title, detail)| html! {
                                <div class="info-row" style="margin-bottom: 1.5rem;">
                                    <Glyph icon={*icon} />
                                    <div>
                                        <h3 style="margin: 0;">{*title}</h3>
                                        <p class="muted" style="margin: 0;">{*detail}</p>
                                    </div>
                                </div>
                            }) }
                        </CardContent>
                    </Card>
                </div>
            </section>

            <section ref={vision} class={classes!("section", "section-muted", REVEAL_CLASS)}>
                <div class="container">
                    <div class="section-heading">
                        <h2>{"Our Mission & Vision"}</h2>
                    </div>
                    <div class="grid grid-2" style="margin-bottom: 4rem;">
                        <Card class={classes!("centered")}>
                            <CardContent>
                                <div class="icon-tile"><Glyph icon={Icon::Target} /></div>
                                <h3>{"Our Mission"}</h3>
                                <p class="muted" style="font-style: italic;">
                                    {"\"Aboveground: Where You See It. Trust It. And We Build It, Beyond the Surface.\""}
                                </p>
                            </CardContent>
                        </Card>
                        <Card class={classes!("centered")}>
                            <CardContent>
                                <div class="icon-tile"><Glyph icon={Icon::Eye} /></div>
                                <h3>{"Our Vision"}</h3>
                                <p class="muted">
                                    {"To become a globally recognized construction brand operating across continents, redefining modern construction for future generations."}
                                </p>
                            </CardContent>
                        </Card>
                    </div>

                    <div class="centered">
                        <h3 style="font-size: 1.875rem;">{"Who We Serve"}</h3>
                        <div class="grid grid-3">
                            { for WHO_WE_SERVE.iter().map(|client| html! {
                                <div class="pill"><p style="margin: 0;">{*client}</p></div>
                            }) }
                        </div>
                    </div>
                </div>
            </section>

            <section class="cta">
                <div class="container">
                    <h2>{"Ready to Work With Us?"}</h2>
                    <p>{"Experience the Aboveground difference. Let's discuss your next project."}</p>
                    <div class="actions">
                        <LinkButton to={Route::Contact} variant={ButtonVariant::Light}>{"Get In Touch"}</LinkButton>
                        <LinkButton to={Route::Services} variant={ButtonVariant::Outline}>{"Our Services"}</LinkButton>
                    </div>
                </div>
            </section>
        </div>
    }
}
