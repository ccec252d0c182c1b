use leptos::prelude::*;

use crate::config::SocialIcon;

#[component]
fn Svg(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {children()}
        </svg>
    }
}

#[component]
pub fn SunIcon(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Svg class>
            <circle cx="12" cy="12" r="4" />
            <path d="M12 2v2" />
            <path d="M12 20v2" />
            <path d="m4.93 4.93 1.41 1.41" />
            <path d="m17.66 17.66 1.41 1.41" />
            <path d="M2 12h2" />
            <path d="M20 12h2" />
            <path d="m6.34 17.66-1.41 1.41" />
            <path d="m19.07 4.93-1.41 1.41" />
        </Svg>
    }
}

#[component]
pub fn MoonIcon(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Svg class>
            <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" />
        </Svg>
    }
}

#[component]
pub fn HomeIcon(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Svg class>
            <path d="m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" />
            <polyline points="9 22 9 12 15 12 15 22" />
        </Svg>
    }
}

#[component]
pub fn ChevronDownIcon(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Svg class>
            <path d="m6 9 6 6 6-6" />
        </Svg>
    }
}

#[component]
pub fn MenuIcon(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Svg class>
            <line x1="4" x2="20" y1="12" y2="12" />
            <line x1="4" x2="20" y1="6" y2="6" />
            <line x1="4" x2="20" y1="18" y2="18" />
        </Svg>
    }
}

#[component]
pub fn CloseIcon(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Svg class>
            <path d="M18 6 6 18" />
            <path d="m6 6 12 12" />
        </Svg>
    }
}

#[component]
pub fn MailIcon(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Svg class>
            <rect width="20" height="16" x="2" y="4" rx="2" />
            <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
        </Svg>
    }
}

#[component]
pub fn SendIcon(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Svg class>
            <path d="m22 2-7 20-4-9-9-4Z" />
            <path d="M22 2 11 13" />
        </Svg>
    }
}

#[component]
pub fn CalendarIcon(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Svg class>
            <rect width="18" height="18" x="3" y="4" rx="2" ry="2" />
            <line x1="16" x2="16" y1="2" y2="6" />
            <line x1="8" x2="8" y1="2" y2="6" />
            <line x1="3" x2="21" y1="10" y2="10" />
        </Svg>
    }
}

#[component]
pub fn ClockIcon(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Svg class>
            <circle cx="12" cy="12" r="10" />
            <polyline points="12 6 12 12 16 14" />
        </Svg>
    }
}

#[component]
pub fn ArrowRightIcon(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Svg class>
            <path d="M5 12h14" />
            <path d="m12 5 7 7-7 7" />
        </Svg>
    }
}

#[component]
pub fn FileDownIcon(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Svg class>
            <path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z" />
            <path d="M14 2v4a2 2 0 0 0 2 2h4" />
            <path d="M12 18v-6" />
            <path d="m9 15 3 3 3-3" />
        </Svg>
    }
}

#[component]
pub fn SocialGlyph(icon: SocialIcon, #[prop(optional)] class: &'static str) -> impl IntoView {
    match icon {
        SocialIcon::Github => view! {
            <Svg class>
                <path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" />
                <path d="M9 18c-4.51 2-5-2-7-2" />
            </Svg>
        }
        .into_any(),
        SocialIcon::Linkedin => view! {
            <Svg class>
                <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" />
                <rect width="4" height="12" x="2" y="9" />
                <circle cx="4" cy="4" r="2" />
            </Svg>
        }
        .into_any(),
        SocialIcon::Twitter => view! {
            <Svg class>
                <path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z" />
            </Svg>
        }
        .into_any(),
    }
}
