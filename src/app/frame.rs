use chrono::{DateTime, Utc};
use leptos::prelude::*;

use super::icons::SocialGlyph;
use crate::config::SITE;

const BUILD_TIME: &str = env!("BUILD_TIME");

/// Narrow centered column between two hatched rails, shared by every page.
#[component]
pub fn PageFrame(children: Children) -> impl IntoView {
    view! {
        <div class="outer-background min-h-screen border-none bg-[#f5f5f5] transition-colors dark:bg-[#0A0A0A]">
            <div class="relative mx-auto min-h-screen max-w-4xl border-l-[19px] border-r-[19px] border-[#f5f5f5] bg-white shadow-sm dark:border-[#1f1f1f] dark:bg-[#171717] md:border-l-[31px] md:border-r-[31px]">
                <DiagonalStripes />
                {children()}
                <Footer />
            </div>
        </div>
    }
}

#[component]
fn DiagonalStripes() -> impl IntoView {
    view! {
        <div class="diagonal-stripes-left absolute -left-[19px] top-0 z-[70] h-full w-[19px] overflow-hidden border-l border-r md:-left-[31px] md:w-[31px]" />
        <div class="diagonal-stripes-right absolute -right-[19px] top-0 z-[70] h-full w-[19px] overflow-hidden border-l border-r md:-right-[31px] md:w-[31px]" />
    }
}

#[component]
fn Footer() -> impl IntoView {
    let built = DateTime::parse_from_rfc3339(BUILD_TIME)
        .map(|t| t.with_timezone(&Utc).format("%b %e, %Y").to_string())
        .unwrap_or_default();

    view! {
        <footer class="mx-auto max-w-4xl border-t border-[#f5f5f5] bg-white px-6 py-8 dark:border-[#1f1f1f] dark:bg-[#171717]">
            <div class="flex items-center justify-between">
                <p class="text-xs text-[#737373]">
                    "Built by " {SITE.owner}
                    {(!built.is_empty()).then(|| format!(" · updated {built}"))}
                </p>
                <div class="flex items-center gap-4">
                    {SITE
                        .socials
                        .iter()
                        .map(|social| {
                            view! {
                                <a
                                    href=social.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=social.label
                                    class="text-[#737373] transition-colors dark:hover:text-gray-300"
                                >
                                    <SocialGlyph icon=social.icon class="h-5 w-5" />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
