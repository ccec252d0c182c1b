mod about;
mod blog;
mod contact;
mod dom;
mod frame;
mod homepage;
mod icons;
mod navbar;
mod pill_badge;
mod reveal;
mod tech_chip;
mod testimonials;
mod text;
mod theme;

use about::AboutPage;
use blog::{BlogHome, BlogPage, BlogWrapper};
use contact::ContactPage;
use frame::PageFrame;
use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use navbar::Navbar;
use tech_chip::provide_device_capability;
use theme::provide_theme;

use crate::{config::SITE, interaction::theme::THEME_BOOTSTRAP_SCRIPT};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                // must run before first paint
                <script inner_html=THEME_BOOTSTRAP_SCRIPT></script>
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased bg-white text-neutral-900 dark:bg-neutral-950 dark:text-neutral-100">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_theme();
    provide_device_capability();

    view! {
        <Title formatter=|title| format!("{title} | {}", SITE.owner) />
        <Meta name="description" content=SITE.description />
        <Meta property="og:title" content=SITE.title />
        <Meta property="og:description" content=SITE.description />

        <Router>
            <Navbar />
            <main class="flex flex-col flex-grow w-full">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/contact") view=ContactPage />
                    <ParentRoute path=path!("/blog") view=BlogWrapper>
                        <Route path=path!("") view=BlogHome />
                        <Route path=path!(":post") view=BlogPage />
                    </ParentRoute>
                </Routes>
            </main>
        </Router>
    }
}

/// Mark the server response as a 404. No-op in the browser.
fn respond_not_found() {
    #[cfg(feature = "ssr")]
    if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
        resp.set_status(http::StatusCode::NOT_FOUND);
    }
}

#[component]
fn NotFound() -> impl IntoView {
    respond_not_found();

    view! {
        <Title text="Not Found" />
        <PageFrame>
            <div class="flex flex-col items-center justify-center gap-4 py-32 text-center">
                <h1 class="text-4xl font-bold tracking-tight">"404"</h1>
                <p class="text-neutral-600 dark:text-neutral-400">
                    "This page doesn't exist."
                </p>
                <A href="/" attr:class="text-sm font-medium underline underline-offset-4">
                    "Back home"
                </A>
            </div>
        </PageFrame>
    }
}
