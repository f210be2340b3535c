use leptos::prelude::*;

/// Inline stroke icon, coloured with `currentColor`.
#[component]
pub fn Icon(
    /// Icon name, one of the `icons` constants
    name: &'static str,
    /// CSS classes for sizing and colour
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon_paths(name)}
        </svg>
    }
}

fn icon_paths(name: &'static str) -> AnyView {
    match name {
        icons::ARROW_RIGHT => view! {
            <path d="M5 12h14" />
            <path d="m12 5 7 7-7 7" />
        }
        .into_any(),
        icons::MESSAGE_CIRCLE => view! {
            <path d="M7.9 20A9 9 0 1 0 4 16.1L2 22Z" />
        }
        .into_any(),
        icons::SHOPPING_BAG => view! {
            <path d="M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4Z" />
            <path d="M3 6h18" />
            <path d="M16 10a4 4 0 0 1-8 0" />
        }
        .into_any(),
        icons::TRUCK => view! {
            <path d="M14 18V6a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2v11a1 1 0 0 0 1 1h2" />
            <path d="M15 18H9" />
            <path d="M19 18h2a1 1 0 0 0 1-1v-3.65a1 1 0 0 0-.22-.624l-3.48-4.35A1 1 0 0 0 17.52 8H14" />
            <circle cx="17" cy="18" r="2" />
            <circle cx="7" cy="18" r="2" />
        }
        .into_any(),
        icons::SHIELD_CHECK => view! {
            <path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z" />
            <path d="m9 12 2 2 4-4" />
        }
        .into_any(),
        icons::CHECK_CIRCLE => view! {
            <circle cx="12" cy="12" r="10" />
            <path d="m9 12 2 2 4-4" />
        }
        .into_any(),
        icons::STAR => view! {
            <polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" />
        }
        .into_any(),
        icons::INSTAGRAM => view! {
            <rect width="20" height="20" x="2" y="2" rx="5" ry="5" />
            <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" />
            <line x1="17.5" x2="17.51" y1="6.5" y2="6.5" />
        }
        .into_any(),
        icons::MENU => view! {
            <line x1="4" x2="20" y1="6" y2="6" />
            <line x1="4" x2="20" y1="12" y2="12" />
            <line x1="4" x2="20" y1="18" y2="18" />
        }
        .into_any(),
        icons::X => view! {
            <path d="M18 6 6 18" />
            <path d="m6 6 12 12" />
        }
        .into_any(),
        _ => ().into_any(),
    }
}

/// Icon names understood by `Icon`
pub mod icons {
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const MESSAGE_CIRCLE: &str = "message-circle";
    pub const SHOPPING_BAG: &str = "shopping-bag";
    pub const TRUCK: &str = "truck";
    pub const SHIELD_CHECK: &str = "shield-check";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const STAR: &str = "star";
    pub const INSTAGRAM: &str = "instagram";
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
}
