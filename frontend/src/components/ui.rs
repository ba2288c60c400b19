//! Small presentational building blocks shared by every page.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Award,
    Building,
    Calendar,
    CheckCircle,
    Clock,
    Close,
    Eye,
    Globe,
    Hammer,
    Heart,
    Home,
    Lightbulb,
    Mail,
    MapPin,
    Menu,
    Phone,
    Send,
    Shield,
    Target,
    TreePine,
    Users,
    Wrench,
}

impl Icon {
    fn glyph(self) -> &'static str {
        match self {
            Icon::Award => "🏆",
            Icon::Building => "🏢",
            Icon::Calendar => "📅",
            Icon::CheckCircle => "✔",
            Icon::Clock => "🕗",
            Icon::Close => "✕",
            Icon::Eye => "👁",
            Icon::Globe => "🌐",
            Icon::Hammer => "🔨",
            Icon::Heart => "♥",
            Icon::Home => "🏠",
            Icon::Lightbulb => "💡",
            Icon::Mail => "✉",
            Icon::MapPin => "📍",
            Icon::Menu => "☰",
            Icon::Phone => "☎",
            Icon::Send => "➤",
            Icon::Shield => "🛡",
            Icon::Target => "🎯",
            Icon::TreePine => "🌲",
            Icon::Users => "👥",
            Icon::Wrench => "🔧",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct GlyphProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Glyph)]
pub fn glyph(props: &GlyphProps) -> Html {
    html! {
        <span class={classes!("icon", props.class.clone())} aria-hidden="true">
            {props.icon.glyph()}
        </span>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Slate fill, for light backgrounds.
    Primary,
    /// White fill, for dark backgrounds.
    Light,
    /// White outline, for dark backgrounds.
    Outline,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Light => "btn-light",
            ButtonVariant::Outline => "btn-outline",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub large: bool,
    #[prop_or_default]
    pub submit: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    html! {
        <button
            type={if props.submit { "submit" } else { "button" }}
            class={classes!("btn", props.variant.class(), props.large.then(|| "btn-lg"), props.class.clone())}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct LinkButtonProps {
    pub to: Route,
    pub variant: ButtonVariant,
    #[prop_or(true)]
    pub large: bool,
    #[prop_or_default]
    pub children: Children,
}

/// A route link styled as a button.
#[function_component(LinkButton)]
pub fn link_button(props: &LinkButtonProps) -> Html {
    html! {
        <Link<Route>
            to={props.to.clone()}
            classes={classes!("btn", props.variant.class(), props.large.then(|| "btn-lg"))}
        >
            { for props.children.iter() }
        </Link<Route>>
    }
}

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class={classes!("card", props.class.clone())} style={props.style.clone()}>
            { for props.children.iter() }
        </div>
    }
}

#[function_component(CardContent)]
pub fn card_content(props: &CardProps) -> Html {
    html! {
        <div class={classes!("card-content", props.class.clone())} style={props.style.clone()}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    #[prop_or_default]
    pub outline: bool,
    pub label: AttrValue,
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    html! {
        <span class={classes!("badge", props.outline.then(|| "badge-outline"))}>
            {props.label.clone()}
        </span>
    }
}

/// Inline style that starts a card's entrance after `base_tenths / 10` seconds,
/// plus a tenth of a second per position in its grid.
pub fn stagger_style(base_tenths: u32, index: usize) -> AttrValue {
    let tenths = base_tenths as usize + index;
    AttrValue::from(format!("animation-delay: {}.{}s;", tenths / 10, tenths % 10))
}
