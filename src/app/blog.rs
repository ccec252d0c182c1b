use leptos::{prelude::*, server_fn::codec::GetUrl};
use leptos_meta::Title;
use leptos_router::{components::*, hooks::*};

use super::{
    frame::PageFrame,
    icons::{ArrowRightIcon, CalendarIcon, ClockIcon},
    pill_badge::{PillBadge, PillSize, PillVariant},
    respond_not_found,
    reveal::RevealCard,
    text::TextWithPillBadge,
};
#[cfg(feature = "ssr")]
use crate::blog::{get_meta, get_post};
use crate::blog::{Post, PostMeta, GLOBAL_META_CACHE, GLOBAL_POST_CACHE};

/// Posts shown in the home page teaser.
const TEASER_POSTS: usize = 2;

#[server(input = GetUrl)]
pub async fn get_meta_server(limit: usize) -> Result<Vec<PostMeta>, ServerFnError> {
    get_meta(limit)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server(input = GetUrl)]
pub async fn get_post_server(name: String) -> Result<Post, ServerFnError> {
    get_post(name)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

fn posts_resource(limit: usize) -> Resource<Vec<PostMeta>> {
    Resource::new(
        move || limit,
        move |limit| async move {
            let cache = &*GLOBAL_META_CACHE;
            if let Some(s) = cache.get(&limit) {
                return (*s).clone();
            }
            let meta = match get_meta_server(limit).await {
                Ok(meta) => meta,
                Err(e) => {
                    log::warn!("couldn't list blog posts: {e}");
                    Vec::new()
                }
            };
            // the server caches in get_meta
            #[cfg(feature = "hydrate")]
            cache.insert(limit, meta.clone());
            meta
        },
    )
}

#[component]
fn PostDetails(meta: PostMeta) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4 text-xs text-[#737373]">
            <div class="flex items-center gap-1">
                <CalendarIcon class="h-3 w-3" />
                <span>{meta.date.format("%b %e, %Y").to_string()}</span>
            </div>
            <div class="flex items-center gap-1">
                <ClockIcon class="h-3 w-3" />
                <span>{format!("{} min read", meta.read_minutes)}</span>
            </div>
        </div>
    }
}

#[component]
fn PostList(posts: Vec<PostMeta>) -> impl IntoView {
    if posts.is_empty() {
        return view! { <p class="text-sm text-[#737373]">"Nothing here yet."</p> }.into_any();
    }
    view! {
        <div class="mb-10 space-y-6">
            {posts
                .into_iter()
                .enumerate()
                .map(|(index, post)| {
                    let href = post.href();
                    let title = post.title.clone();
                    let description = post.description.clone();
                    view! {
                        <RevealCard index>
                            <A href=href attr:class="group block">
                                <h3 class="mb-1 text-base font-semibold text-gray-900 transition-colors group-hover:text-gray-700 dark:text-white dark:group-hover:text-gray-200 sm:text-lg">
                                    {title}
                                </h3>
                                <p class="mb-2 text-sm leading-relaxed text-[#737373]">
                                    {description}
                                </p>
                                <PostDetails meta=post />
                            </A>
                        </RevealCard>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

/// Two most recent posts, shown on the home page.
#[component]
pub fn BlogTeaser() -> impl IntoView {
    let posts = posts_resource(TEASER_POSTS);
    view! {
        <section
            id="blog"
            class="section-with-inset-shadow mx-auto max-w-4xl border-t border-[#f5f5f5] bg-white px-6 pb-10 pt-8 dark:border-[#1f1f1f] dark:bg-[#171717]"
        >
            <div class="mb-6">
                <TextWithPillBadge words="Latest Thoughts" as_heading=true />
            </div>
            <Transition fallback=|| view! { <PostSkeleton /> }>
                {move || Suspend::new(async move { view! { <PostList posts=posts.await /> } })}
            </Transition>
            <div class="mt-10 text-center">
                <A
                    href="/blog"
                    attr:class="mx-auto inline-flex items-center gap-2 text-sm text-[#737373] transition-colors hover:text-gray-900 dark:hover:text-white"
                >
                    "View all posts"
                    <ArrowRightIcon class="h-4 w-4" />
                </A>
            </div>
        </section>
    }
}

#[component]
fn PostSkeleton() -> impl IntoView {
    view! {
        <div class="space-y-4">
            <div class="loading-skeleton h-6 rounded"></div>
            <div class="loading-skeleton h-4 w-3/4 rounded"></div>
            <div class="loading-skeleton h-6 rounded"></div>
            <div class="loading-skeleton h-4 w-2/3 rounded"></div>
        </div>
    }
}

#[component]
pub fn BlogWrapper() -> impl IntoView {
    view! {
        <Title text="Blog" />
        <PageFrame>
            <section class="mx-auto max-w-4xl px-6 pb-10 pt-24">
                <Outlet />
            </section>
        </PageFrame>
    }
}

#[component]
pub fn BlogHome() -> impl IntoView {
    let posts = posts_resource(0);
    view! {
        <Title text="Blog" />
        <div class="mb-8">
            <TextWithPillBadge words="All Posts" as_heading=true />
        </div>
        <Transition fallback=|| view! { <PostSkeleton /> }>
            {move || Suspend::new(async move { view! { <PostList posts=posts.await /> } })}
        </Transition>
    }
}

#[component]
pub fn BlogPage() -> impl IntoView {
    let params = use_params_map();
    let post_name = move || params.get().get("post").unwrap_or_default();
    let post = Resource::new(post_name, move |name| async move {
        let cache = &*GLOBAL_POST_CACHE;
        if let Some(s) = cache.get(&name) {
            return Ok((*s).clone());
        }
        let post_data = get_post_server(name.clone()).await;
        #[cfg(feature = "hydrate")]
        if let Ok(post) = &post_data {
            cache.insert(name, post.clone());
        }
        post_data
    });

    view! {
        <Suspense fallback=|| view! { <PostSkeleton /> }>
            {move || Suspend::new(async move {
                match post.await {
                    Ok(p) => {
                        let title = p.meta.title.clone();
                        view! {
                            <Title text=title.clone() />
                            <A
                                href="/blog"
                                attr:class="mb-6 inline-block text-sm text-[#737373] hover:text-gray-900 dark:hover:text-white"
                            >
                                "← All posts"
                            </A>
                            <PillBadge variant=PillVariant::Square size=PillSize::Sm class="mb-4">
                                "Article"
                            </PillBadge>
                            <h1 class="mb-3 text-3xl font-bold tracking-tight text-gray-900 dark:text-white">
                                {title}
                            </h1>
                            <div class="mb-8">
                                <PostDetails meta=p.meta />
                            </div>
                            <article class="prose max-w-none dark:prose-invert">
                                <div inner_html=p.content></div>
                            </article>
                        }
                            .into_any()
                    }
                    Err(e) => {
                        log::debug!("blog post unavailable: {e}");
                        respond_not_found();
                        view! {
                            <Title text="Post not found" />
                            <p class="py-16 text-center text-[#737373]">
                                "That post doesn't exist. "
                                <A href="/blog" attr:class="underline underline-offset-4">
                                    "See all posts"
                                </A>
                            </p>
                        }
                            .into_any()
                    }
                }
            })}
        </Suspense>
    }
}
