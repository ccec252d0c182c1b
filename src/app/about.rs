use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::{
    frame::PageFrame,
    icons::{FileDownIcon, MailIcon},
    pill_badge::{PillBadge, PillSize, PillVariant},
    reveal::RevealCard,
    text::{BlurText, TextWithPillBadge},
};
use crate::{
    config::{ABOUT_SECTIONS, SITE},
    content::{ABOUT_TAGLINE, EXPERIENCE, INTERESTS, TIMELINE},
};

const BUTTON_CLASS: &str = "inline-flex items-center justify-center rounded-md border border-[#f5f5f5] bg-transparent px-3 py-1.5 text-sm font-medium text-gray-900 hover:bg-gray-100 dark:border-[#1f1f1f] dark:text-white dark:hover:bg-[#2a2a2a]";

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About" />
        <PageFrame>
            <section class="mx-auto max-w-4xl bg-white px-6 pb-4 pt-20 dark:bg-[#171717]">
                <div class="max-w-2xl">
                    <PillBadge variant=PillVariant::Elevated size=PillSize::Lg class="mb-4">
                        "Open to new projects"
                    </PillBadge>
                    <h1 class="hero-title mb-2 text-4xl font-bold text-gray-900 dark:text-white">
                        "About Me"
                    </h1>
                    <BlurText text=ABOUT_TAGLINE class="mb-6 text-xl leading-relaxed text-[#737373]" />
                </div>
                {ABOUT_SECTIONS.show_who_i_am.then(|| view! { <WhoIAm /> })}
            </section>

            {ABOUT_SECTIONS.show_brands.then(|| view! { <Brands /> })}

            <section class="mx-auto max-w-4xl border-t border-[#f5f5f5] bg-white px-4 pb-12 pt-8 dark:border-[#1f1f1f] dark:bg-[#171717] sm:px-6 sm:pb-16">
                <div class="mb-8 sm:mb-12">
                    <TextWithPillBadge words="Timeline of Achievements" as_heading=true />
                </div>
                <div class="space-y-8 sm:space-y-10">
                    {TIMELINE
                        .iter()
                        .map(|year| {
                            view! {
                                <div class="flex flex-col gap-4 sm:flex-row sm:gap-6">
                                    <div class="w-20 flex-shrink-0 sm:w-24">
                                        <h3 class="text-2xl font-bold text-gray-900 dark:text-white sm:text-3xl">
                                            {year.year}
                                        </h3>
                                    </div>
                                    <div class="flex-1 space-y-4">
                                        {year
                                            .milestones
                                            .iter()
                                            .map(|m| {
                                                view! {
                                                    <div>
                                                        <h4 class="mb-1 text-base font-semibold text-gray-900 dark:text-white sm:text-lg">
                                                            {m.title}
                                                        </h4>
                                                        <p class="text-sm leading-relaxed text-[#737373]">
                                                            {m.detail}
                                                        </p>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            {ABOUT_SECTIONS.show_beyond_work.then(|| view! { <BeyondWork /> })}

            <section class="section-with-inset-shadow mx-auto max-w-4xl border-t border-[#f5f5f5] bg-white px-6 pb-12 pt-8 dark:border-[#1f1f1f] dark:bg-[#171717]">
                <div class="mx-auto max-w-2xl text-center">
                    <div class="mb-4">
                        <TextWithPillBadge words="Let's Work Together" as_heading=true />
                    </div>
                    <p class="mb-6 leading-relaxed text-[#737373]">
                        "I'm always interested in new opportunities and collaborations. Whether you have a project in mind or just want to chat about design and development, I'd love to hear from you."
                    </p>
                    <div class="flex flex-col justify-center gap-4 sm:flex-row">
                        <A href="/contact" attr:class=BUTTON_CLASS>
                            <MailIcon class="mr-2 h-4 w-4" />
                            "Get in Touch"
                        </A>
                        <a href=SITE.resume download class=BUTTON_CLASS>
                            <FileDownIcon class="mr-2 h-4 w-4" />
                            "Download Resume"
                        </a>
                    </div>
                </div>
            </section>
        </PageFrame>
    }
}

#[component]
fn WhoIAm() -> impl IntoView {
    view! {
        <div class="mt-8 flex flex-col items-center gap-6 sm:flex-row sm:items-start">
            <img
                src=SITE.avatar
                alt=SITE.owner
                class="h-32 w-32 flex-shrink-0 rounded-2xl object-cover shadow-sm"
            />
            <div class="space-y-3 text-sm leading-relaxed text-[#737373]">
                <p>
                    "I care about the details that make software feel effortless: fast pages, clear motion and interfaces that respect the people using them."
                </p>
                <p>
                    "Most of my work sits where design meets engineering. I prototype in code, measure what matters and ship in small steps."
                </p>
            </div>
        </div>
    }
}

#[component]
fn Brands() -> impl IntoView {
    view! {
        <section class="mx-auto max-w-4xl border-t border-[#f5f5f5] bg-white px-6 pb-8 pt-8 dark:border-[#1f1f1f] dark:bg-[#171717]">
            <TextWithPillBadge words="Brands I've Worked With" as_heading=true />
            <div class="mt-6 flex flex-wrap items-center justify-center gap-8">
                {EXPERIENCE
                    .iter()
                    .map(|job| {
                        view! {
                            <img
                                src=job.logo
                                alt=job.company
                                title=job.company
                                class="h-10 w-10 opacity-70 grayscale transition hover:opacity-100 hover:grayscale-0"
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn BeyondWork() -> impl IntoView {
    view! {
        <section class="mx-auto max-w-4xl border-t border-[#f5f5f5] bg-white px-6 pb-12 pt-8 dark:border-[#1f1f1f] dark:bg-[#171717]">
            <TextWithPillBadge words="Beyond Work" as_heading=true />
            <div class="mt-6 grid grid-cols-1 gap-4 sm:grid-cols-2">
                {INTERESTS
                    .iter()
                    .enumerate()
                    .map(|(index, interest)| {
                        view! {
                            <RevealCard index class="rounded-xl border border-[#f5f5f5] p-5 dark:border-[#1f1f1f]">
                                <h4 class="mb-2 font-semibold text-gray-900 dark:text-white">
                                    {interest.title}
                                </h4>
                                <p class="text-sm leading-relaxed text-[#737373]">{interest.detail}</p>
                            </RevealCard>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
