use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::{storage::use_local_storage, use_preferred_dark};

use super::{
    dom,
    icons::{MoonIcon, SunIcon},
};
use crate::interaction::theme::{ThemeMode, ThemeState, THEME_STORAGE_KEY};

/// Shared theme handle. Components read [`ThemeContext::mode`] reactively and
/// call [`ThemeContext::toggle`]; nothing else writes the theme.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    state: RwSignal<ThemeState>,
    mounted: ReadSignal<bool>,
    set_stored: WriteSignal<String>,
}

impl ThemeContext {
    pub fn mode(&self) -> ThemeMode {
        self.state.get().mode()
    }

    /// False until the stored preference has been read on the client.
    pub fn mounted(&self) -> bool {
        self.mounted.get()
    }

    pub fn toggle(&self) {
        dom::suppress_transitions();
        if let Some(mode) = self.state.try_update(|s| s.toggle()) {
            self.set_stored.set(mode.to_string());
        }
    }
}

pub fn provide_theme() -> ThemeContext {
    let (stored, set_stored, _) = use_local_storage::<String, FromToStringCodec>(THEME_STORAGE_KEY);
    let prefers_dark = use_preferred_dark();
    let state = RwSignal::new(ThemeState::default());
    let (mounted, set_mounted) = signal(false);

    // effects only run in the browser, after the bootstrap script already
    // painted the right class
    Effect::new(move |_| {
        let stored = stored.get_untracked();
        state.set(ThemeState::resolve(
            Some(stored.as_str()),
            prefers_dark.get_untracked(),
        ));
        set_mounted.set(true);
    });

    // another tab wrote the key
    Effect::watch(
        move || stored.get(),
        move |stored, _, _| {
            if mounted.get_untracked() {
                state.update(|s| {
                    s.stored_changed(Some(stored.as_str()));
                });
            }
        },
        false,
    );

    Effect::watch(
        move || prefers_dark.get(),
        move |dark, _, _| {
            if mounted.get_untracked() {
                state.update(|s| {
                    s.system_changed(*dark);
                });
            }
        },
        false,
    );

    Effect::new(move |_| {
        let mode = state.get().mode();
        if mounted.get() {
            dom::apply_theme_class(mode);
        }
    });

    let ctx = ThemeContext {
        state,
        mounted,
        set_stored,
    };
    provide_context(ctx);
    ctx
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[component]
pub fn ThemeToggle(#[prop(optional)] class: &'static str) -> impl IntoView {
    let theme = use_theme();
    let is_light = move || theme.mode() == ThemeMode::Light;

    // before mount the icons follow the class the bootstrap script set
    let sun_class = move || {
        if !theme.mounted() {
            "absolute inset-0 dark:hidden"
        } else if is_light() {
            "absolute inset-0 rotate-0 scale-100 transition-transform duration-200"
        } else {
            "absolute inset-0 -rotate-90 scale-0 transition-transform duration-200"
        }
    };
    let moon_class = move || {
        if !theme.mounted() {
            "absolute inset-0 hidden dark:block"
        } else if is_light() {
            "absolute inset-0 rotate-90 scale-0 transition-transform duration-200"
        } else {
            "absolute inset-0 rotate-0 scale-100 transition-transform duration-200"
        }
    };

    view! {
        <button
            type="button"
            class=format!(
                "relative inline-flex h-9 w-9 items-center justify-center rounded-full text-neutral-700 hover:bg-neutral-100 disabled:opacity-50 dark:text-neutral-300 dark:hover:bg-neutral-800 {class}",
            )
            disabled=move || !theme.mounted()
            aria-label=move || {
                if is_light() { "Switch to dark theme" } else { "Switch to light theme" }
            }
            on:click=move |_| theme.toggle()
        >
            <span class="relative block h-[1.1rem] w-[1.1rem]">
                <span class=sun_class>
                    <SunIcon class="h-full w-full" />
                </span>
                <span class=moon_class>
                    <MoonIcon class="h-full w-full" />
                </span>
            </span>
        </button>
    }
}
