use yew::prelude::*;

use crate::components::ui::{stagger_style, ButtonVariant, Card, CardContent, Glyph, Icon, LinkButton};
use crate::reveal::{use_reveal_on_scroll, REVEAL_CLASS};
use crate::Route;

struct Offering {
    icon: Icon,
    title: &'static str,
    description: &'static str,
    features: [&'static str; 4],
}

const OFFERINGS: [Offering; 4] = [
    Offering {
        icon: Icon::Building,
        title: "New Construction",
        description: "Building your dreams from the ground up with precision, quality, and attention to every detail. Whether it's residential or commercial, we create structures that stand the test of time.",
        features: [
            "Custom Design Build",
            "Commercial Construction",
            "Residential Homes",
            "Multi-Unit Developments",
        ],
    },
    Offering {
        icon: Icon::Home,
        title: "Residential & Commercial Renovation",
        description: "Transform your existing space into something extraordinary. We breathe new life into homes and businesses, maximizing potential while respecting your budget and timeline.",
        features: [
            "Kitchen & Bathroom Remodels",
            "Office Renovations",
            "Whole Home Makeovers",
            "Retail Space Updates",
        ],
    },
    Offering {
        icon: Icon::Wrench,
        title: "Property Restoration",
        description: "Bringing damaged or historic properties back to their former glory. Our restoration experts combine traditional craftsmanship with modern techniques.",
        features: [
            "Historic Preservation",
            "Damage Repair",
            "Heritage Buildings",
            "Insurance Restorations",
        ],
    },
    Offering {
        icon: Icon::TreePine,
        title: "Land Development",
        description: "Creating communities and commercial spaces that matter. We handle everything from site preparation to infrastructure development.",
        features: [
            "Site Planning",
            "Infrastructure Development",
            "Community Planning",
            "Commercial Developments",
        ],
    },
];

struct Step {
    icon: Icon,
    number: &'static str,
    title: &'static str,
    description: &'static str,
}

const PROCESS: [Step; 4] = [
    Step {
        icon: Icon::Shield,
        number: "01",
        title: "Consultation",
        description: "We listen to your vision, assess your needs, and provide honest, transparent guidance.",
    },
    Step {
        icon: Icon::Hammer,
        number: "02",
        title: "Planning",
        description: "Detailed planning and design phase where we turn your vision into actionable blueprints.",
    },
    Step {
        icon: Icon::Clock,
        number: "03",
        title: "Execution",
        description: "Skilled craftsmen bring your project to life with precision and attention to detail.",
    },
    Step {
        icon: Icon::Award,
        number: "04",
        title: "Completion",
        description: "Final walkthrough, quality assurance, and ongoing support for your satisfaction.",
    },
];

const BENEFITS: [(&str, &str); 3] = [
    (
        "Transparency First",
        "No hidden costs, no surprises. We believe in honest communication from quote to completion.",
    ),
    (
        "Quality Guaranteed",
        "We stand behind our work with comprehensive warranties and ongoing support.",
    ),
    (
        "On Time, On Budget",
        "Efficient planning and execution means your project gets done right, when promised.",
    ),
];

#[function_component(Services)]
pub fn services() -> Html {
    let hero = use_node_ref();
    let offerings = use_node_ref();
    let process = use_node_ref();
    use_reveal_on_scroll(vec![hero.clone(), offerings.clone(), process.clone()]);

    html! {
        <div class="page">
            <section ref={hero} class={classes!("hero", REVEAL_CLASS)}>
                <div class="container">
                    <h1>{"Our Services"}</h1>
                    <p>{"Comprehensive construction solutions tailored to your vision and needs"}</p>
                </div>
            </section>

            <section ref={offerings} class={classes!("section", REVEAL_CLASS)}>
                <div class="container">
                    <div class="section-heading">
                        <h2>{"What We Do Best"}</h2>
                        <p>{"From concept to completion, we deliver excellence in every aspect of construction"}</p>
                    </div>
                    <div class="grid grid-2">
                        { for OFFERINGS.iter().enumerate().map(|(index, offering)| html! {
                            <Card class={classes!("lift", "stagger")} style={stagger_style(2, index)}>
                                <CardContent>
                                    <div class="icon-tile"><Glyph icon={offering.icon} /></div>
                                    <h3>{offering.title}</h3>
                                    <p class="muted">{offering.description}</p>
                                    <ul class="feature-list">
                                        { for offering.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                                    </ul>
                                </CardContent>
                            </Card>
                        }) }
                    </div>
                </div>
            </section>

            <section ref={process} class={classes!("section", "section-muted", REVEAL_CLASS)}>
                <div class="container">
                    <div class="section-heading">
                        <h2>{"How We Work"}</h2>
                        <p>{"Our proven process ensures your project runs smoothly from start to finish"}</p>
                    </div>
                    <div class="grid grid-4">
                        { for PROCESS.iter().enumerate().map(|(index, step)| html! {
                            <Card class={classes!("lift", "stagger", "centered")} style={stagger_style(3, index)}>
                                <CardContent>
                                    <div class="step-number">{step.number}</div>
                                    <div class="icon-tile"><Glyph icon={step.icon} /></div>
                                    <h3>{step.title}</h3>
                                    <p class="muted">{step.description}</p>
                                </CardContent>
                            </Card>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <div class="section-heading">
                        <h2>{"Why Choose Aboveground?"}</h2>
                    </div>
                    <div class="grid grid-3">
                        { for BENEFITS.iter().map(|(title, description)| html! {
                            <div class="centered">
                                <h3>{*title}</h3>
                                <p class="muted">{*description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="cta">
                <div class="container">
                    <h2>{"Ready to Start Your Project?"}</h2>
                    <p>{"Let's discuss how we can bring your vision to life with quality, transparency, and excellence."}</p>
                    <div class="actions">
                        <LinkButton to={Route::Contact} variant={ButtonVariant::Light}>{"Get Free Quote"}</LinkButton>
                        <LinkButton to={Route::Projects} variant={ButtonVariant::Outline}>{"View Our Work"}</LinkButton>
                    </div>
                </div>
            </section>
        </div>
    }
}
