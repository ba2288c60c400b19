use yew::prelude::*;

use crate::components::ui::{stagger_style, ButtonVariant, Card, CardContent, Glyph, Icon, LinkButton};
use crate::reveal::{use_reveal_on_scroll, REVEAL_CLASS};
use crate::Route;

struct Highlight {
    icon: Icon,
    title: &'static str,
    description: &'static str,
}

const WHAT_WE_BUILD: [Highlight; 4] = [
    Highlight {
        icon: Icon::Building,
        title: "New Construction",
        description: "Building your vision from the ground up with precision and care",
    },
    Highlight {
        icon: Icon::Users,
        title: "Renovation",
        description: "Transforming existing spaces into something extraordinary",
    },
    Highlight {
        icon: Icon::Award,
        title: "Restoration",
        description: "Bringing historic and damaged properties back to life",
    },
    Highlight {
        icon: Icon::Shield,
        title: "Land Development",
        description: "Creating communities and commercial spaces that matter",
    },
];

const VALUES: [Highlight; 6] = [
    Highlight {
        icon: Icon::Lightbulb,
        title: "Vision-Driven Innovation",
        description: "We reimagine potential and shape purposeful design that stands out",
    },
    Highlight {
        icon: Icon::Shield,
        title: "Integrity & Transparency",
        description: "Honest and open in every quote, every project, every conversation",
    },
    Highlight {
        icon: Icon::Award,
        title: "Quality Without Compromise",
        description: "Excellence from start to finish, no shortcuts, no exceptions",
    },
    Highlight {
        icon: Icon::Users,
        title: "Client-Centered Collaboration",
        description: "Your vision becomes our blueprint for success",
    },
    Highlight {
        icon: Icon::Building,
        title: "Aboveground Excellence",
        description: "Exceeding industry standards through accountability and drive",
    },
    Highlight {
        icon: Icon::Heart,
        title: "Safety & Sustainability",
        description: "Building responsibly with care for people and our planet",
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    let hero = use_node_ref();
    let services = use_node_ref();
    let values = use_node_ref();
    use_reveal_on_scroll(vec![hero.clone(), services.clone(), values.clone()]);

    html! {
        <div class="page">
            <section ref={hero} class={classes!("hero", "hero-full", REVEAL_CLASS)}>
                <div class="container">
                    <p class="eyebrow">{"REIMAGINING CONSTRUCTION – BUILDING TRUST, QUALITY, AND THE FUTURE"}</p>
                    <h1>
                        {"BUILDING BEYOND"}
                        <br />
                        <span class="accent">{"THE SURFACE"}</span>
                    </h1>
                    <p>{"Where You See It. Trust It. And We Build It."}</p>
                    <div class="actions" style="margin-top: 2rem;">
                        <LinkButton to={Route::Projects} variant={ButtonVariant::Primary}>{"See Our Projects"}</LinkButton>
                        <LinkButton to={Route::Contact} variant={ButtonVariant::Outline}>{"Get Started"}</LinkButton>
                    </div>
                </div>
            </section>

            <section ref={services} class={classes!("section", "section-muted", REVEAL_CLASS)}>
                <div class="container">
                    <div class="section-heading">
                        <h2>{"What We Build"}</h2>
                        <p>{"From residential dreams to commercial landmarks, we craft spaces that stand the test of time"}</p>
                    </div>
                    <div class="grid grid-4">
                        { for WHAT_WE_BUILD.iter().enumerate().map(|(index, item)| html! {
                            <Card class={classes!("lift", "stagger", "centered")} style={stagger_style(2, index)}>
                                <CardContent>
                                    <div class="icon-tile"><Glyph icon={item.icon} /></div>
                                    <h3>{item.title}</h3>
                                    <p class="muted">{item.description}</p>
                                </CardContent>
                            </Card>
                        }) }
                    </div>
                </div>
            </section>

            <section ref={values} class={classes!("section", REVEAL_CLASS)}>
                <div class="container">
                    <div class="section-heading">
                        <h2>{"Built on Strong Values"}</h2>
                        <p>{"Every project we take on is guided by principles that ensure excellence, trust, and lasting relationships"}</p>
                    </div>
                    <div class="grid grid-3">
                        { for VALUES.iter().enumerate().map(|(index, item)| html! {
                            <Card class={classes!("lift", "stagger")} style={stagger_style(3, index)}>
                                <CardContent>
                                    <div class="icon-tile"><Glyph icon={item.icon} /></div>
                                    <h3>{item.title}</h3>
                                    <p class="muted">{item.description}</p>
                                </CardContent>
                            </Card>
                        }) }
                    </div>
                </div>
            </section>

            <section class="cta">
                <div class="container">
                    <h2>{"Ready to Build Something Amazing?"}</h2>
                    <p>{"Let's turn your vision into reality. Get in touch with our team today for a consultation."}</p>
                    <div class="actions">
                        <LinkButton to={Route::Contact} variant={ButtonVariant::Light}>{"Start Your Project"}</LinkButton>
                        <LinkButton to={Route::About} variant={ButtonVariant::Outline}>{"Learn More About Us"}</LinkButton>
                    </div>
                </div>
            </section>
        </div>
    }
}
