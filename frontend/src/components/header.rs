use yew::prelude::*;
use yew_hooks::prelude::use_window_scroll;
use yew_router::prelude::*;

use crate::components::ui::{ButtonVariant, Glyph, Icon, LinkButton};
use crate::config;
use crate::Route;

pub fn navigation() -> [(&'static str, Route); 5] {
    [
        ("Home", Route::Home),
        ("About", Route::About),
        ("Services", Route::Services),
        ("Projects", Route::Projects),
        ("Contact", Route::Contact),
    ]
}

fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::SCROLLED_OFFSET_PX
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let current = use_route::<Route>();

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

    let nav_links = |mobile: bool| -> Html {
        navigation()
            .into_iter()
            .map(|(name, route)| {
                let active = current.as_ref() == Some(&route);
                html! {
                    <div onclick={close_menu.clone()}>
                        <Link<Route>
                            to={route}
                            classes={classes!(
                                if mobile { "mobile-nav-link" } else { "nav-link" },
                                active.then(|| "active")
                            )}
                        >
                            {name}
                        </Link<Route>>
                    </div>
                }
            })
            .collect()
    };

    html! {
        <header class={classes!("site-header", is_scrolled(scroll_y).then(|| "scrolled"))}>
            <div class="container header-bar">
                <Link<Route> to={Route::Home} classes="logo">
                    <span class="logo-mark"><Glyph icon={Icon::Building} /></span>
                    <span class="logo-text">
                        <span class="logo-title">{"ABOVEGROUND"}</span>
                        <span class="logo-subtitle">{"CONSTRUCTION"}</span>
                    </span>
                </Link<Route>>

                <nav class="desktop-nav">
                    { nav_links(false) }
                    <LinkButton to={Route::Contact} variant={ButtonVariant::Light} large={false}>
                        {"Get Quote"}
                    </LinkButton>
                </nav>

                <button class="menu-toggle" onclick={toggle_menu} aria-label="Toggle navigation">
                    <Glyph icon={if *menu_open { Icon::Close } else { Icon::Menu }} />
                </button>
            </div>

            if *menu_open {
                <nav class="mobile-nav">
                    { nav_links(true) }
                    <div class="mobile-cta" onclick={close_menu.clone()}>
                        <LinkButton to={Route::Contact} variant={ButtonVariant::Light} large={false}>
                            {"Get Quote"}
                        </LinkButton>
                    </div>
                </nav>
            }
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_past_offset() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn navigation_covers_every_page() {
        let routes: Vec<Route> = navigation().into_iter().map(|(_, route)| route).collect();
        assert_eq!(
            routes,
            vec![Route::Home, Route::About, Route::Services, Route::Projects, Route::Contact]
        );
    }
}
