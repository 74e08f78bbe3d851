mod about;
mod contact;
mod cursor;
mod header;
mod hero;
mod motion;
mod projects;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::{
    config::SiteConfig,
    sections::{scroll_to_section, SectionId},
};
use about::About;
use contact::Contact;
use cursor::Cursor;
use header::Header;
use hero::Hero;
use projects::Projects;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-dark-200 text-white">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(SiteConfig::default());

    view! {
        <Title text="Ibrahim Sohofi - Web Developer" />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Shell />
            </Routes>
        </Router>
    }
}

/// Holds the page behind a short loading screen, then mounts every section
/// in document order.
#[component]
fn Shell() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let (is_loading, set_is_loading) = signal(true);

    let UseTimeoutFnReturn { start, .. } =
        use_timeout_fn(move |_: ()| set_is_loading(false), config.loading_gate_ms());
    start(());

    let header_offset = config.header_offset;
    let on_navigate = Callback::new(move |id: SectionId| {
        scroll_to_section(id.as_str(), header_offset);
    });

    view! {
        <Show when=move || !is_loading.get() fallback=Loading>
            <div class="App">
                <Cursor />
                <Header on_navigate />
                <Hero on_navigate />
                <About />
                <Projects />
                <Contact />
            </div>
        </Show>
    }
}

#[component]
fn Loading() -> impl IntoView {
    view! {
        <div class="fixed inset-0 flex items-center justify-center bg-dark-200 z-50">
            <div class="text-center">
                <div class="inline-block w-16 h-16 border-t-4 border-b-4 border-teal rounded-full animate-spin mb-4" />
                <h2 class="text-2xl font-bold text-white">
                    "Loading" <span class="animate-pulse">"..."</span>
                </h2>
            </div>
        </div>
    }
}
