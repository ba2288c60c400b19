use log::debug;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::ui::{Button, ButtonVariant, Card, CardContent, Glyph, Icon};
use crate::config;
use crate::contact::{ContactSession, Field, Phase, Service, SubmitRejected, TimeoutScheduler};
use crate::reveal::{use_reveal_on_scroll, REVEAL_CLASS};

const FAQS: [(&str, &str); 4] = [
    (
        "How do I get a quote for my project?",
        "Simply fill out our contact form or email us directly. We'll schedule a consultation to discuss your project and provide a detailed, transparent quote.",
    ),
    (
        "What areas do you serve?",
        "We primarily serve the Greater Vancouver Area, including Vancouver, Richmond, Burnaby, Surrey, and surrounding communities.",
    ),
    (
        "Do you handle both residential and commercial projects?",
        "Yes! We work on both residential and commercial projects, from single-family homes to large commercial developments.",
    ),
    (
        "What makes Aboveground different?",
        "Our commitment to transparency, quality without compromise, and building relationships that last. We believe in doing things right the first time.",
    ),
];

fn contact_details() -> [(Icon, &'static str, &'static str, &'static str); 4] {
    [
        (Icon::MapPin, "Location", config::LOCATION, "Serving the Greater Vancouver Area"),
        (Icon::Mail, "Email", config::CONTACT_EMAIL, "We'll respond within 24 hours"),
        (Icon::Phone, "Phone", "Coming Soon", "Available Monday - Friday, 8AM - 6PM"),
        (Icon::Clock, "Business Hours", config::BUSINESS_HOURS, "Saturday: 9AM - 4PM"),
    ]
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let hero = use_node_ref();
    let form_section = use_node_ref();
    let info = use_node_ref();
    use_reveal_on_scroll(vec![hero.clone(), form_section.clone(), info.clone()]);

    let rerender = use_force_update();
    let session = use_state(move || {
        ContactSession::new(TimeoutScheduler, config::ACK_WINDOW_MS, move || rerender.force_update())
    });
    let missing = use_state(Vec::<Field>::new);

    // The pending reset must not outlive this page.
    {
        let session = (*session).clone();
        use_effect_with_deps(move |_| move || session.teardown(), ());
    }

    let onsubmit = {
        let session = (*session).clone();
        let missing = missing.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match session.submit() {
                Ok(_) => missing.set(Vec::new()),
                Err(SubmitRejected::MissingFields(fields)) => missing.set(fields),
                Err(other) => debug!("Ignoring contact form submit: {:?}", other),
            }
        })
    };

    let on_input = |field: Field| {
        let session = (*session).clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            session.update(field, input.value());
        })
    };

    let on_message = {
        let session = (*session).clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            session.update(Field::Message, input.value());
        })
    };

    let on_service = {
        let session = (*session).clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            session.update(Field::Service, select.value());
        })
    };

    let form = session.form();
    let details = contact_details();

    let body = match session.phase() {
        Phase::Acknowledged => html! {
            <div class="acknowledgement">
                <Glyph icon={Icon::CheckCircle} />
                <h3>{"Thank You!"}</h3>
                <p class="muted">{"We've received your message and will get back to you within 24 hours."}</p>
            </div>
        },
        Phase::Editing => html! {
            <form class="contact-form" {onsubmit}>
                if !missing.is_empty() {
                    <p class="form-error">
                        { format!("Please fill in: {}", missing.iter().map(Field::to_string).collect::<Vec<_>>().join(", ")) }
                    </p>
                }
                <div class="form-row">
                    <div class="form-field">
                        <label for="name">{"Full Name *"}</label>
                        <input id="name" value={form.name.clone()} oninput={on_input(Field::Name)} required=true />
                    </div>
                    <div class="form-field">
                        <label for="email">{"Email Address *"}</label>
                        <input id="email" type="email" value={form.email.clone()} oninput={on_input(Field::Email)} required=true />
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-field">
                        <label for="phone">{"Phone Number"}</label>
                        <input id="phone" type="tel" value={form.phone.clone()} oninput={on_input(Field::Phone)} />
                    </div>
                    <div class="form-field">
                        <label for="service">{"Service Needed"}</label>
                        <select id="service" onchange={on_service}>
                            <option value="" selected={form.service.is_none()}>{"Select a service"}</option>
                            { for Service::ALL.iter().map(|service| html! {
                                <option value={service.value()} selected={form.service == Some(*service)}>
                                    {service.label()}
                                </option>
                            }) }
                        </select>
                    </div>
                </div>
                <div class="form-field">
                    <label for="message">{"Project Details *"}</label>
                    <textarea
                        id="message"
                        rows="6"
                        value={form.message.clone()}
                        oninput={on_message}
                        placeholder="Tell us about your project, timeline, and any specific requirements..."
                        required=true
                    />
                </div>
                <Button variant={ButtonVariant::Primary} large=true submit=true class={classes!("btn-block")}>
                    <Glyph icon={Icon::Send} />
                    {"Send Message"}
                </Button>
            </form>
        },
    };

    html! {
        <div class="page">
            <section ref={hero} class={classes!("hero", REVEAL_CLASS)}>
                <div class="container">
                    <h1>{"Get In Touch"}</h1>
                    <p>{"Ready to start your project? Let's discuss how we can bring your vision to life"}</p>
                </div>
            </section>

            <section class="section">
                <div class="container grid grid-2" style="gap: 4rem;">
                    <div ref={form_section} class={REVEAL_CLASS}>
                        <Card>
                            <CardContent>
                                <h2>{"Start Your Project Today"}</h2>
                                { body }
                            </CardContent>
                        </Card>
                    </div>

                    <div ref={info} class={REVEAL_CLASS}>
                        <h2>{"Let's Connect"}</h2>
                        <p class="muted">
                            {"We're here to answer your questions and help you get started on your next project. Reach out to us through any of the methods below."}
                        </p>
                        { for details.iter().map(|(icon, title, detail, note)| html! {
                            <Card class={classes!("lift")} style="margin-bottom: 1.5rem;">
                                <CardContent class={classes!("info-row")}>
                                    <div class="icon-tile"><Glyph icon={*icon} /></div>
                                    <div>
                                        <h3 style="margin: 0 0 0.25rem;">{*title}</h3>
                                        <p style="margin: 0 0 0.25rem; font-weight: 500;">{*detail}</p>
                                        <p class="muted" style="margin: 0; font-size: 0.875rem;">{*note}</p>
                                    </div>
                                </CardContent>
                            </Card>
                        }) }
                        <Card class={classes!("centered")}>
                            <CardContent class={classes!("section-muted")}>
                                <h3>{"Emergency Services"}</h3>
                                <p class="muted">{"Need urgent construction or restoration services? We're here to help."}</p>
                                <Button variant={ButtonVariant::Primary}>{"Emergency Contact"}</Button>
                            </CardContent>
                        </Card>
                    </div>
                </div>
            </section>

            <section class="section section-muted">
                <div class="container">
                    <div class="section-heading">
                        <h2>{"Frequently Asked Questions"}</h2>
                    </div>
                    <div class="grid grid-2">
                        { for FAQS.iter().map(|(question, answer)| html! {
                            <Card>
                                <CardContent>
                                    <h3>{*question}</h3>
                                    <p class="muted">{*answer}</p>
                                </CardContent>
                            </Card>
                        }) }
                    </div>
                </div>
            </section>
        </div>
    }
}
