use yew::prelude::*;

use crate::components::ui::{stagger_style, Badge, ButtonVariant, Card, CardContent, Glyph, Icon, LinkButton};
use crate::reveal::{use_reveal_on_scroll, REVEAL_CLASS};
use crate::Route;

struct Project {
    title: &'static str,
    category: &'static str,
    location: &'static str,
    year: &'static str,
    description: &'static str,
    tags: [&'static str; 3],
}

const PROJECTS: [Project; 6] = [
    Project {
        title: "Vancouver Luxury Condominiums",
        category: "New Construction",
        location: "Downtown Vancouver, BC",
        year: "2024",
        description: "A stunning 24-story residential tower featuring modern amenities and sustainable design elements.",
        tags: ["Residential", "High-Rise", "Sustainable"],
    },
    Project {
        title: "Heritage Building Restoration",
        category: "Restoration",
        location: "Gastown, Vancouver, BC",
        year: "2023",
        description: "Careful restoration of a 1920s heritage building, preserving historical character while adding modern functionality.",
        tags: ["Heritage", "Commercial", "Historic"],
    },
    Project {
        title: "Modern Office Complex",
        category: "Commercial Construction",
        location: "Richmond, BC",
        year: "2024",
        description: "State-of-the-art office complex designed for the future of work with flexible spaces and green technology.",
        tags: ["Commercial", "Modern", "Tech-Forward"],
    },
    Project {
        title: "Residential Community Development",
        category: "Land Development",
        location: "Surrey, BC",
        year: "2023",
        description: "Master-planned community featuring 150 homes with parks, walking trails, and community amenities.",
        tags: ["Community", "Residential", "Master-Planned"],
    },
    Project {
        title: "Boutique Hotel Renovation",
        category: "Renovation",
        location: "Yaletown, Vancouver, BC",
        year: "2024",
        description: "Complete transformation of a dated hotel into a modern boutique experience with luxury finishes.",
        tags: ["Hospitality", "Luxury", "Boutique"],
    },
    Project {
        title: "Educational Facility Expansion",
        category: "Institutional",
        location: "Burnaby, BC",
        year: "2023",
        description: "Expansion of a local school with new classrooms, laboratory spaces, and recreational facilities.",
        tags: ["Education", "Institutional", "Community"],
    },
];

const STATS: [(Icon, &str, &str); 4] = [
    (Icon::Building, "150+", "Projects Completed"),
    (Icon::Users, "500+", "Happy Clients"),
    (Icon::Calendar, "15+", "Years Experience"),
    (Icon::MapPin, "25+", "Locations Served"),
];

const TESTIMONIALS: [(&str, &str, &str); 3] = [
    (
        "Aboveground exceeded our expectations in every way. Their attention to detail and commitment to quality is unmatched.",
        "Sarah Chen",
        "Property Developer",
    ),
    (
        "From start to finish, the team was professional, transparent, and delivered exactly what they promised.",
        "Michael Rodriguez",
        "Business Owner",
    ),
    (
        "The renovation of our heritage building was handled with such care and expertise. Truly impressive work.",
        "Jennifer Walsh",
        "Property Manager",
    ),
];

#[function_component(Projects)]
pub fn projects() -> Html {
    let hero = use_node_ref();
    let featured = use_node_ref();
    let stats = use_node_ref();
    use_reveal_on_scroll(vec![hero.clone(), featured.clone(), stats.clone()]);

    html! {
        <div class="page">
            <section ref={hero} class={classes!("hero", REVEAL_CLASS)}>
                <div class="container">
                    <h1>{"Our Projects"}</h1>
                    <p>{"Showcasing excellence in construction across Vancouver and beyond"}</p>
                </div>
            </section>

            <section ref={stats} class={classes!("section", "section-muted", REVEAL_CLASS)}>
                <div class="container grid grid-4 centered">
                    { for STATS.iter().map(|(icon, number, label)| html! {
                        <Card class={classes!("lift")}>
                            <CardContent>
                                <div class="icon-tile centered"><Glyph icon={*icon} /></div>
                                <div class="stat-number">{*number}</div>
                                <div class="muted">{*label}</div>
                            </CardContent>
                        </Card>
                    }) }
                </div>
            </section>

            <section ref={featured} class={classes!("section", REVEAL_CLASS)}>
                <div class="container">
                    <div class="section-heading">
                        <h2>{"Featured Projects"}</h2>
                        <p>{"Each project tells a story of craftsmanship, innovation, and client satisfaction"}</p>
                    </div>
                    <div class="grid grid-2">
                        { for PROJECTS.iter().enumerate().map(|(index, project)| html! {
                            <Card class={classes!("lift", "stagger")} style={stagger_style(2, index)}>
                                <div class="project-image" role="img" aria-label={project.title}>
                                    <Badge label={project.category} />
                                </div>
                                <CardContent>
                                    <h3>{project.title}</h3>
                                    <div class="project-meta">
                                        <span><Glyph icon={Icon::MapPin} />{project.location}</span>
                                        <span><Glyph icon={Icon::Calendar} />{project.year}</span>
                                    </div>
                                    <p class="muted">{project.description}</p>
                                    <div class="tags">
                                        { for project.tags.iter().map(|tag| html! { <Badge outline=true label={*tag} /> }) }
                                    </div>
                                </CardContent>
                            </Card>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section section-muted">
                <div class="container">
                    <div class="section-heading">
                        <h2>{"What Our Clients Say"}</h2>
                    </div>
                    <div class="grid grid-3">
                        { for TESTIMONIALS.iter().map(|(quote, author, role)| html! {
                            <Card class={classes!("centered")}>
                                <CardContent>
                                    <p class="quote">{format!("\"{}\"", quote)}</p>
                                    <div><strong>{*author}</strong></div>
                                    <div class="muted">{*role}</div>
                                </CardContent>
                            </Card>
                        }) }
                    </div>
                </div>
            </section>

            <section class="cta">
                <div class="container">
                    <h2>{"Ready to Start Your Project?"}</h2>
                    <p>{"Join our growing list of satisfied clients. Let's create something amazing together."}</p>
                    <div class="actions">
                        <LinkButton to={Route::Contact} variant={ButtonVariant::Light}>{"Start Your Project"}</LinkButton>
                        <LinkButton to={Route::Services} variant={ButtonVariant::Outline}>{"Our Services"}</LinkButton>
                    </div>
                </div>
            </section>
        </div>
    }
}
