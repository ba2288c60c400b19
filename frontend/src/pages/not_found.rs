use yew::prelude::*;

use crate::components::ui::{ButtonVariant, LinkButton};
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="page">
            <section class="hero hero-full">
                <div class="container">
                    <h1>{"Page Not Found"}</h1>
                    <p>{"The page you're looking for doesn't exist or has moved."}</p>
                    <div class="actions" style="margin-top: 2rem;">
                        <LinkButton to={Route::Home} variant={ButtonVariant::Light}>{"Back to Home"}</LinkButton>
                    </div>
                </div>
            </section>
        </div>
    }
}
