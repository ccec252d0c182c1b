use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::{components::A, location::Url};

use super::{
    blog::BlogTeaser,
    frame::PageFrame,
    icons::MailIcon,
    pill_badge::{PillBadge, PillSize, PillVariant},
    reveal::RevealCard,
    tech_chip::TechChips,
    testimonials::InfiniteMovingCards,
    text::{BlurText, TextFlip, TextWithPillBadge},
};
use crate::{
    config::SITE,
    content::{Job, Project, EXPERIENCE, HERO_ROLES, HERO_TAGLINE, PROJECTS, TESTIMONIALS},
    interaction::marquee::{MarqueeDirection, MarqueeSpeed},
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <PageFrame>
            <section class="mx-auto max-w-4xl bg-white px-6 pt-20 dark:bg-[#171717]">
                <div class="mb-8 max-w-2xl">
                    <div class="mb-4 flex flex-col gap-2 sm:flex-row sm:items-center">
                        <h1 class="hero-title mb-2 text-4xl font-bold text-gray-900 drop-shadow-lg dark:text-white">
                            {SITE.owner}
                        </h1>
                        <div class="w-full sm:w-auto">
                            <TextFlip text="" words=HERO_ROLES />
                        </div>
                    </div>
                    <BlurText text=HERO_TAGLINE class="mb-6 text-xl leading-relaxed text-[#737373]" />
                </div>
            </section>

            <section
                id="projects"
                class="section-with-inset-shadow section-fade-borders mx-auto max-w-4xl border-t border-[#f5f5f5] bg-white px-6 pb-10 pt-8 dark:border-[#1f1f1f] dark:bg-[#171717]"
            >
                <div class="mb-4">
                    <TextWithPillBadge words="Stuff I Made" as_heading=true />
                </div>
                <div class="grid w-full grid-cols-1 items-center gap-4 md:grid-cols-3">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! {
                                <RevealCard index>
                                    <ProjectCard project />
                                </RevealCard>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section
                id="experience"
                class="mx-auto max-w-4xl border-t border-[#f5f5f5] bg-white px-6 pb-8 pt-8 dark:border-[#1f1f1f] dark:bg-[#171717]"
            >
                <TextWithPillBadge words="Experience" as_heading=true />
                <div class="mb-10 mt-6 space-y-8 sm:space-y-12">
                    {EXPERIENCE.iter().map(|job| view! { <JobEntry job /> }).collect_view()}
                </div>
            </section>

            <BlogTeaser />

            <section
                id="testimonials"
                class="border-t border-[#f5f5f5] bg-white pt-8 dark:border-[#1f1f1f] dark:bg-[#171717]"
            >
                <div class="mx-auto mb-4 max-w-4xl px-6">
                    <TextWithPillBadge words="People love my work" as_heading=true />
                </div>
                <div class="w-full">
                    <InfiniteMovingCards
                        items=TESTIMONIALS
                        direction=MarqueeDirection::Right
                        speed=MarqueeSpeed::Slow
                    />
                </div>
            </section>

            <ContactStrip />
        </PageFrame>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="group relative col-span-1 h-[380px] cursor-pointer overflow-hidden rounded-2xl">
            <div class="absolute left-4 top-4 z-10 flex flex-col items-start">
                <p class="text-xs font-bold uppercase tracking-wider text-white/80">
                    {project.category}
                </p>
                <h4 class="text-xl font-semibold text-white">{project.title}</h4>
            </div>
            <img
                src=project.image
                alt=project.alt
                loading="lazy"
                class="absolute inset-0 z-0 h-full w-full object-cover transition-transform duration-500 group-hover:scale-105"
            />
            <div class="absolute inset-0 bg-gradient-to-t from-black/60 via-transparent to-transparent" />
            // always visible on touch layouts, slides up on desktop hover
            <div class="absolute bottom-0 left-0 right-0 z-20 translate-y-0 bg-black/80 p-4 backdrop-blur-sm transition-transform duration-300 ease-out lg:translate-y-full lg:group-hover:translate-y-0">
                <p class="mb-3 text-sm leading-relaxed text-white">{project.description}</p>
                <TechChips techs=project.tech />
            </div>
        </div>
    }
}

#[component]
fn JobEntry(job: &'static Job) -> impl IntoView {
    view! {
        <div class="flex flex-col items-start gap-4 sm:flex-row sm:gap-6">
            <div class="order-2 flex-1 sm:order-1">
                <h3 class="mb-2 text-base font-semibold text-gray-900 dark:text-white sm:text-lg">
                    {job.company}
                </h3>
                <div class="mb-2 flex flex-wrap items-center gap-2">
                    <p class="text-xs text-black dark:text-white sm:text-sm">{job.role}</p>
                    <PillBadge variant=PillVariant::Subtle size=PillSize::Sm>
                        {job.period}
                    </PillBadge>
                </div>
                <p class="mb-3 text-xs leading-relaxed text-[#737373] sm:text-sm">{job.summary}</p>
                <TechChips techs=job.tech />
            </div>
            <div class="order-1 mb-2 hidden items-center justify-center sm:order-2 sm:mb-0 md:flex">
                <img src=job.logo alt=job.company class="h-12 w-12 sm:h-16 sm:w-16" />
            </div>
        </div>
    }
}

/// Message box that hands its draft to the contact page.
#[component]
fn ContactStrip() -> impl IntoView {
    let (draft, set_draft) = signal(String::new());
    let href = move || {
        let draft = draft.get();
        let draft = draft.trim();
        if draft.is_empty() {
            "/contact".to_string()
        } else {
            format!("/contact?message={}", Url::escape(draft))
        }
    };

    view! {
        <section id="contact" class="mx-auto max-w-4xl bg-white px-6 pt-8 dark:bg-[#171717]">
            <div class="mx-auto mb-10 max-w-xl">
                <p class="mb-4 text-center text-sm leading-relaxed text-[#737373]">
                    "Feel free to reach out to me at " {SITE.email}
                </p>
                <div class="flex items-center gap-2 rounded-lg border border-[#f5f5f5] bg-white p-1 dark:border-[#1f1f1f] dark:bg-[#171717]">
                    <input
                        type="text"
                        aria-label="Message"
                        placeholder="Say hi..."
                        class="min-w-0 flex-1 bg-transparent px-3 py-2 text-sm text-gray-900 placeholder:text-[#737373] focus:outline-none dark:text-white"
                        prop:value=draft
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                    />
                    <A
                        href=href
                        attr:class="inline-flex shrink-0 items-center gap-2 rounded-md px-3 py-2 text-sm font-medium text-gray-900 hover:bg-gray-100 dark:text-white dark:hover:bg-[#2a2a2a]"
                    >
                        <MailIcon class="h-4 w-4" />
                        "Send Inquiry"
                    </A>
                </div>
            </div>
        </section>
    }
}
