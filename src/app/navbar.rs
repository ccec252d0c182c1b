use std::time::Duration;

use leptos::{either::Either, html, prelude::*};
use leptos_router::components::A;
use leptos_use::{
    use_timeout_fn, use_window_scroll, use_window_size, UseTimeoutFnReturn, UseWindowSizeReturn,
};

use super::{
    dom,
    icons::{ChevronDownIcon, CloseIcon, HomeIcon, MenuIcon},
    theme::ThemeToggle,
};
use crate::{
    config::SITE,
    content::{NavItem, NAV_ITEMS},
    interaction::{
        hover::{HoverTracker, LeaveTicket, LEAVE_DEBOUNCE_MS},
        menu::{Dropdowns, MobileMenu, ScrollLock},
        scroll::{NavbarStyle, ScrollTracker},
    },
};

const LOGO_PRESS_MS: u64 = 300;

#[component]
pub fn Navbar() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let UseWindowSizeReturn { width, .. } = use_window_size();

    let tracker = RwSignal::new(ScrollTracker::new(0.0));
    // sync to wherever the page was restored, without animating
    Effect::new(move |_| tracker.set(ScrollTracker::new(dom::scroll_y())));
    Effect::watch(
        move || scroll_y.get(),
        move |y, _, _| tracker.update(|t| t.on_scroll(*y)),
        false,
    );
    let style = Memo::new(move |_| NavbarStyle::at(tracker.get().progress(), width.get()));
    let transition = move || tracker.get().transition_ms();

    let menu = RwSignal::new(MobileMenu::default());
    let apply_lock = |lock: Option<ScrollLock>| match lock {
        Some(ScrollLock::Lock(y)) => dom::lock_body(y),
        Some(ScrollLock::Restore(y)) => {
            dom::unlock_body();
            dom::scroll_to(y);
        }
        None => {}
    };
    let toggle_menu = move || apply_lock(menu.try_update(|m| m.toggle(dom::scroll_y())).flatten());
    let close_menu = Callback::new(move |_: ()| apply_lock(menu.try_update(|m| m.close()).flatten()));
    on_cleanup(move || apply_lock(menu.try_get_untracked().and_then(MobileMenu::release)));

    view! {
        <div
            class="fixed inset-x-0 z-[60] w-full bg-transparent"
            style=move || style.get().wrapper_css(transition())
        >
            // desktop
            <div class="relative z-10 mx-auto hidden w-full max-w-4xl px-12 py-2 md:flex">
                <div
                    class="absolute top-0 bottom-0 overflow-hidden rounded-full border border-white/30 bg-white/95 dark:border-[#2a2a2a]/20 dark:bg-[#171717]/90"
                    style=move || style.get().background_css(transition())
                />
                <div
                    class="relative z-10 flex w-full flex-row items-center justify-between"
                    style=move || style.get().content_css(transition())
                >
                    <NavbarLogo />
                    <div class="ml-auto flex items-center gap-1">
                        <ThemeToggle />
                        <NavItems />
                    </div>
                </div>
            </div>

            // mobile
            <div
                class="relative z-10 mx-auto flex w-full max-w-4xl flex-col px-4 py-2 md:hidden"
                style=move || style.get().mobile_css(transition())
            >
                <div
                    class="absolute inset-0 border-b border-[#f5f5f5] bg-white/95 dark:border-[#1f1f1f] dark:bg-[#171717]/90"
                    style=move || style.get().layer_css(transition())
                />
                <div class="relative z-10 flex w-full flex-row items-center justify-between">
                    <NavbarLogo on_navigate=close_menu />
                    <div class="flex items-center gap-1">
                        <ThemeToggle />
                        <MobileNavToggle open=Signal::derive(move || menu.get().is_open()) on_toggle=Callback::new(move |_: ()| toggle_menu()) />
                    </div>
                </div>
                <Show when=move || menu.get().is_open()>
                    <MobileNavMenu on_close=close_menu />
                </Show>
            </div>
        </div>
    }
}

#[component]
fn NavbarLogo(#[prop(optional)] on_navigate: Option<Callback<()>>) -> impl IntoView {
    let (pressed, set_pressed) = signal(false);
    view! {
        <A
            href="/"
            attr:class=move || {
                let scale = if pressed.get() { "scale-90" } else { "scale-100" };
                format!(
                    "group relative z-20 flex h-9 w-9 items-center justify-center overflow-hidden rounded-full transition-transform duration-150 {scale}",
                )
            }
            attr:aria-label="Home"
            on:click=move |_| {
                set_pressed.set(true);
                set_timeout(move || set_pressed.set(false), Duration::from_millis(LOGO_PRESS_MS));
                if let Some(cb) = on_navigate {
                    cb.run(());
                }
            }
        >
            <img src=SITE.avatar alt=SITE.owner class="h-full w-full object-cover" />
            <span class="absolute inset-0 flex items-center justify-center bg-black/40 text-white opacity-0 transition-opacity duration-200 group-hover:opacity-100">
                <HomeIcon class="h-4 w-4" />
            </span>
        </A>
    }
}

/// Desktop items with a highlight that slides between hovered entries.
#[component]
fn NavItems() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let tracker = RwSignal::new(HoverTracker::new());
    let dropdowns = RwSignal::new(Dropdowns::default());

    let UseTimeoutFnReturn { start, stop, .. } = use_timeout_fn(
        move |ticket: LeaveTicket| {
            tracker.update(|t| {
                t.leave_elapsed(ticket);
            })
        },
        LEAVE_DEBOUNCE_MS as f64,
    );

    let items = NAV_ITEMS
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let item_ref = NodeRef::<html::Div>::new();
            let stop = stop.clone();
            let on_enter = move |_| {
                stop();
                let geometry = item_ref
                    .get_untracked()
                    .zip(container.get_untracked())
                    .map(|(item, container)| (dom::rect_of(&item), dom::rect_of(&container)));
                tracker.update(|t| {
                    t.enter(idx, geometry);
                });
            };
            let entry = if item.sections.is_empty() {
                Either::Left(view! {
                    <A
                        href=item.link
                        attr:class="relative z-20 block px-4 py-2 text-sm font-medium text-neutral-600 dark:text-neutral-300"
                    >
                        {item.name}
                    </A>
                })
            } else {
                Either::Right(view! { <NavDropdown idx item dropdowns /> })
            };
            view! {
                <div
                    node_ref=item_ref
                    class="relative flex h-full items-center justify-center"
                    on:mouseenter=on_enter
                >
                    {entry}
                </div>
            }
        })
        .collect_view();

    view! {
        <div
            node_ref=container
            class="relative flex flex-row items-center"
            on:mouseleave=move |_| {
                if let Some(ticket) = tracker.try_update(|t| t.leave()) {
                    start(ticket);
                }
            }
        >
            <div
                class="pointer-events-none absolute top-0 h-full rounded-full bg-gray-100 transition-all dark:bg-neutral-800"
                style=move || tracker.get().style().css()
            />
            {items}
        </div>
    }
}

#[component]
fn NavDropdown(idx: usize, item: &'static NavItem, dropdowns: RwSignal<Dropdowns>) -> impl IntoView {
    let open = move || dropdowns.get().is_open(idx);
    view! {
        <div class="relative">
            <div class="flex items-center">
                <A
                    href=item.link
                    attr:class="relative z-20 block py-2 pl-4 pr-1 text-sm font-medium text-neutral-600 dark:text-neutral-300"
                >
                    {item.name}
                </A>
                <button
                    type="button"
                    class="relative z-20 rounded-full p-1 pr-3 text-neutral-600 dark:text-neutral-300"
                    aria-haspopup="true"
                    aria-expanded=move || open().to_string()
                    aria-label=format!("{} sections", item.name)
                    on:click=move |_| dropdowns.update(|d| d.toggle(idx))
                >
                    <span class=move || {
                        if open() {
                            "block rotate-180 transition-transform duration-200"
                        } else {
                            "block rotate-0 transition-transform duration-200"
                        }
                    }>
                        <ChevronDownIcon class="h-4 w-4" />
                    </span>
                </button>
            </div>
            <Show when=open>
                <div class="dropdown-enter absolute right-0 top-full z-30 mt-2 min-w-[10rem] overflow-hidden rounded-xl border border-[#f5f5f5] bg-white py-1 shadow-lg dark:border-[#1f1f1f] dark:bg-[#171717]">
                    {item
                        .sections
                        .iter()
                        .map(|section| {
                            let id = section.section_id;
                            view! {
                                <a
                                    href=format!("/#{id}")
                                    class="block px-4 py-2 text-sm text-neutral-600 hover:bg-gray-100 dark:text-neutral-300 dark:hover:bg-neutral-800"
                                    on:click=move |ev| {
                                        dropdowns.update(|d| d.select());
                                        if dom::scroll_to_section(id) {
                                            ev.prevent_default();
                                        }
                                    }
                                >
                                    {section.name}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn MobileNavToggle(open: Signal<bool>, on_toggle: Callback<()>) -> impl IntoView {
    view! {
        <button
            type="button"
            class="relative z-20 inline-flex h-9 w-9 items-center justify-center rounded-full text-neutral-800 hover:bg-gray-100 dark:text-neutral-200 dark:hover:bg-neutral-800"
            aria-label=move || if open.get() { "Close menu" } else { "Open menu" }
            aria-expanded=move || open.get().to_string()
            on:click=move |_| on_toggle.run(())
        >
            {move || {
                if open.get() {
                    Either::Left(view! { <CloseIcon class="h-5 w-5" /> })
                } else {
                    Either::Right(view! { <MenuIcon class="h-5 w-5" /> })
                }
            }}
        </button>
    }
}

#[component]
fn MobileNavMenu(on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="mobile-menu-enter relative z-10 mt-2 flex w-full flex-col gap-1 rounded-xl border border-[#f5f5f5] bg-white px-4 py-4 shadow-lg dark:border-[#1f1f1f] dark:bg-[#171717]">
            {NAV_ITEMS
                .iter()
                .map(|item| {
                    view! {
                        <A
                            href=item.link
                            attr:class="block rounded-lg px-2 py-2 text-base font-medium text-neutral-700 hover:bg-gray-100 dark:text-neutral-200 dark:hover:bg-neutral-800"
                            on:click=move |_| on_close.run(())
                        >
                            {item.name}
                        </A>
                        {item
                            .sections
                            .iter()
                            .map(|section| {
                                let id = section.section_id;
                                view! {
                                    <a
                                        href=format!("/#{id}")
                                        class="block rounded-lg py-1.5 pl-6 pr-2 text-sm text-[#737373] hover:bg-gray-100 dark:hover:bg-neutral-800"
                                        on:click=move |ev| {
                                            on_close.run(());
                                            if dom::scroll_to_section(id) {
                                                ev.prevent_default();
                                            }
                                        }
                                    >
                                        {section.name}
                                    </a>
                                }
                            })
                            .collect_view()}
                    }
                })
                .collect_view()}
        </div>
    }
}
