use leptos::{either::Either, ev, html, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::{
    config::SiteConfig,
    motion::{Ease, Pose, Position, Target, Timeline, Trigger, Tween},
    sections::{self, active_section, SectionId},
};

use super::motion::use_timeline;

fn intro() -> Timeline {
    Timeline::new()
        .then(
            Tween::from(Target::Selector(".nav-item"), Pose::new().y(-20.0).opacity(0.0))
                .stagger(0.1)
                .ease(Ease::Power3Out)
                .duration(0.8)
                .delay(0.5),
        )
        .push(
            Tween::from(Target::Selector(".download-cv"), Pose::new().y(-20.0).opacity(0.0))
                .ease(Ease::Power3Out)
                .duration(0.8),
            Position::Overlap(0.4),
        )
}

fn section_tops() -> Vec<(SectionId, Option<f64>)> {
    let doc = document();
    SectionId::ALL
        .into_iter()
        .map(|id| {
            let top = doc
                .get_element_by_id(id.as_str())
                .map(|el| el.get_bounding_client_rect().top());
            (id, top)
        })
        .collect()
}

#[component]
pub fn Header(on_navigate: Callback<SectionId>) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let root = NodeRef::<html::Header>::new();
    let (is_scrolled, set_is_scrolled) = signal(false);
    let (active, set_active) = signal(SectionId::Home);
    let (menu_open, set_menu_open) = signal(false);

    let scrolled_threshold = config.scrolled_threshold;
    let active_threshold = config.active_threshold;
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        let y = window().scroll_y().unwrap_or_default();
        set_is_scrolled(sections::is_scrolled(y, scrolled_threshold));
        let next = active_section(section_tops(), active_threshold, active.get_untracked());
        if next != active.get_untracked() {
            set_active(next);
        }
    });

    use_timeline(root, intro(), Trigger::Immediate);

    let navigate = move |id: SectionId| {
        on_navigate.run(id);
        set_active(id);
        set_menu_open(false);
    };

    let nav_link = move |id: SectionId, desktop: bool| {
        view! {
            <a
                href=id.href()
                class=move || {
                    let state = if active.get() == id {
                        "text-teal active"
                    } else {
                        "text-white hover:text-teal"
                    };
                    let base = if desktop {
                        "nav-item nav-link hover:-translate-y-0.5"
                    } else {
                        ""
                    };
                    format!(
                        "{base} text-sm uppercase tracking-wider font-medium transition-all duration-300 {state}",
                    )
                }
                on:click=move |ev: ev::MouseEvent| {
                    ev.prevent_default();
                    navigate(id);
                }
            >
                {id.as_str()}
            </a>
        }
    };

    view! {
        <header
            node_ref=root
            class=move || {
                let state = if is_scrolled.get() {
                    "bg-dark-200/90 backdrop-blur-md py-3 shadow-lg"
                } else {
                    "py-5"
                };
                format!("fixed top-0 left-0 w-full z-50 transition-all duration-300 {state}")
            }
        >
            <div class="container mx-auto px-4 flex justify-between items-center">
                <a
                    href=SectionId::Home.href()
                    class="text-2xl font-bold text-white group"
                    on:click=move |ev: ev::MouseEvent| {
                        ev.prevent_default();
                        navigate(SectionId::Home);
                    }
                >
                    <span class="text-teal">"Ibrahim"</span>
                    <span class="text-white group-hover:text-orange transition-colors duration-300">
                        "Sohofi"
                    </span>
                </a>

                <nav class="hidden md:flex items-center space-x-8">
                    {SectionId::ALL.into_iter().map(|id| nav_link(id, true)).collect_view()}
                </nav>

                <a
                    href=config.cv_path.clone()
                    download=""
                    class="hidden md:block download-cv download-btn px-5 py-2 rounded-md font-medium text-sm transition-all duration-300"
                >
                    "Download CV"
                </a>

                <button
                    class="md:hidden text-white focus:outline-none"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        class="h-6 w-6"
                        fill="none"
                        viewBox="0 0 24 24"
                        stroke="currentColor"
                    >
                        {move || {
                            if menu_open.get() {
                                Either::Left(
                                    view! {
                                        <path
                                            stroke-linecap="round"
                                            stroke-linejoin="round"
                                            stroke-width="2"
                                            d="M6 18L18 6M6 6l12 12"
                                        />
                                    },
                                )
                            } else {
                                Either::Right(
                                    view! {
                                        <path
                                            stroke-linecap="round"
                                            stroke-linejoin="round"
                                            stroke-width="2"
                                            d="M4 6h16M4 12h16M4 18h16"
                                        />
                                    },
                                )
                            }
                        }}
                    </svg>
                </button>
            </div>

            <div class=move || {
                let state = if menu_open.get() {
                    "max-h-64 opacity-100"
                } else {
                    "max-h-0 opacity-0"
                };
                format!(
                    "md:hidden bg-dark-200/95 backdrop-blur-md transition-all duration-300 overflow-hidden {state}",
                )
            }>
                <div class="container mx-auto px-4 py-4">
                    <nav class="flex flex-col space-y-4">
                        {SectionId::ALL.into_iter().map(|id| nav_link(id, false)).collect_view()}
                        <a
                            href=config.cv_path.clone()
                            download=""
                            class="download-btn px-5 py-2 rounded-md font-medium text-sm w-full mt-4 text-center"
                        >
                            "Download CV"
                        </a>
                    </nav>
                </div>
            </div>
        </header>
    }
}
