use leptos::prelude::*;

use crate::{
    content::Testimonial,
    interaction::{
        marquee::{Marquee, MarqueeDirection, MarqueeSpeed, FADE_STEP_MS},
        reveal::stagger_delay_ms,
    },
};

/// Endless horizontal scroller. The list is rendered twice so the CSS
/// `scroll` keyframes (translate by -50%) wrap seamlessly.
#[component]
pub fn InfiniteMovingCards(
    items: &'static [Testimonial],
    #[prop(optional)] direction: MarqueeDirection,
    #[prop(optional)] speed: MarqueeSpeed,
    #[prop(default = true)] pause_on_hover: bool,
) -> impl IntoView {
    let marquee = RwSignal::new(Marquee::new(direction, speed, pause_on_hover));
    // client only; the server renders a static row
    Effect::new(move |_| marquee.update(|m| m.start()));

    let cards = move |copy: usize| {
        items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                let delay = stagger_delay_ms(idx, FADE_STEP_MS);
                view! {
                    <li
                        class="relative flex w-[208px] max-w-full flex-col rounded-2xl border border-[#f5f5f5] bg-[#f5f5f5] px-6 py-5 opacity-0 shadow-sm transition-all duration-300 animate-fade-in hover:border-white hover:shadow-md dark:border-[#1f1f1f] dark:bg-[#0A0A0A] dark:hover:border-[#171717] md:w-[240px]"
                        style=format!("animation-delay: {delay}ms;")
                        aria-hidden=(copy > 0).then_some("true")
                    >
                        <blockquote class="flex h-full flex-col">
                            <span class="relative z-20 flex-1 text-sm font-normal leading-[1.6] text-[#737373]">
                                {item.quote}
                            </span>
                            <div class="relative z-20 mt-4 flex flex-shrink-0 flex-row items-center gap-3 pt-4">
                                <div class="h-8 w-8 flex-shrink-0 overflow-hidden rounded-full">
                                    {match item.image {
                                        Some(src) => {
                                            view! {
                                                <img src=src alt=item.name class="h-full w-full object-cover" />
                                            }
                                                .into_any()
                                        }
                                        None => {
                                            view! {
                                                <div class="h-full w-full bg-gray-200 dark:bg-[#2a2a2a]"></div>
                                            }
                                                .into_any()
                                        }
                                    }}
                                </div>
                                <div class="flex flex-col">
                                    <span class="text-sm font-normal leading-[1.6] text-gray-900 dark:text-white">
                                        {item.name}
                                    </span>
                                    <span class="text-xs text-[#737373]">{item.title}</span>
                                </div>
                            </div>
                        </blockquote>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div class="scroller relative z-20 max-w-7xl overflow-hidden">
            <ul
                class="flex w-max min-w-full shrink-0 flex-nowrap gap-4 py-4"
                style=move || marquee.get().css()
                on:mouseenter=move |_| marquee.update(|m| m.set_hovered(true))
                on:mouseleave=move |_| marquee.update(|m| m.set_hovered(false))
            >
                {cards(0)}
                {cards(1)}
            </ul>
        </div>
    }
}
