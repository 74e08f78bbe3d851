use leptos::{html, prelude::*};

use crate::{
    config::SiteConfig,
    motion::{Ease, Pose, Position, Target, Timeline, Trigger, Tween},
    portfolio::{apply_filter, projects, show_more, Filter, Project, FILTERS},
    sections::SectionId,
};

use super::motion::use_timeline;

fn heading() -> Timeline {
    Timeline::new()
        .push(
            Tween::from(
                Target::Selector(".projects-title"),
                Pose::new().y(50.0).opacity(0.0),
            )
            .duration(0.8),
            Position::At(0.0),
        )
        .push(
            Tween::from(
                Target::Selector(".project-filters"),
                Pose::new().y(30.0).opacity(0.0),
            )
            .duration(0.8)
            .delay(0.3),
            Position::At(0.0),
        )
}

fn cards_entrance() -> Timeline {
    Timeline::new().then(
        Tween::from(
            Target::Selector(".project-card"),
            Pose::new().y(50.0).opacity(0.0),
        )
        .duration(0.8)
        .stagger(0.1)
        .delay(0.5),
    )
}

fn cards_refresh() -> Timeline {
    Timeline::new().then(
        Tween::from(
            Target::Selector(".project-card"),
            Pose::new().y(30.0).opacity(0.0),
        )
        .duration(0.5)
        .stagger(0.05)
        .ease(Ease::Power3Out),
    )
}

#[component]
pub fn Projects() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let root = NodeRef::<html::Section>::new();
    let catalogue = StoredValue::new(projects());
    let (filter, set_filter) = signal(Filter::All);
    let visible = Memo::new(move |_| catalogue.with_value(|all| apply_filter(all, &filter.get())));

    use_timeline(root, heading(), Trigger::Viewport(config.reveal_at));
    let cards = use_timeline(root, cards_entrance(), Trigger::Viewport(config.cards_reveal_at));

    let select = move |next: Filter| {
        set_filter(next);
        log::debug!(
            "filter={} showing {} projects",
            filter.get_untracked().as_str(),
            visible.get_untracked().len()
        );
        cards.replay(cards_refresh());
    };

    view! {
        <section id=SectionId::Projects.as_str() node_ref=root class="py-20 bg-dark-100">
            <div class="container mx-auto px-4">
                <h2 class="projects-title text-3xl md:text-4xl font-bold text-center mb-16 relative">
                    "My " <span class="text-teal">"Projects"</span>
                    <span class="absolute bottom-0 left-1/2 -translate-x-1/2 w-20 h-1 bg-teal mt-2" />
                </h2>

                <div class="project-filters flex flex-wrap justify-center mb-12 gap-4">
                    {FILTERS
                        .into_iter()
                        .map(move |tag| {
                            let this = Filter::from(tag);
                            let label = this.label();
                            let is_active = {
                                let this = this.clone();
                                move || filter.with(|f| *f == this)
                            };
                            view! {
                                <button
                                    class=move || {
                                        let state = if is_active() {
                                            "bg-teal text-white shadow-lg shadow-teal/20"
                                        } else {
                                            "bg-dark-200 text-gray-400 hover:bg-dark-100 hover:border-teal hover:text-white"
                                        };
                                        format!(
                                            "px-6 py-2 rounded-full text-sm font-medium transition-all duration-300 {state}",
                                        )
                                    }
                                    on:click=move |_| select(this.clone())
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    <For
                        each=move || visible.get()
                        key=|p| p.id.clone()
                        children=|project| view! { <ProjectCard project /> }
                    />
                </div>

                <Show when=move || catalogue.with_value(|all| show_more(all))>
                    <div class="text-center mt-12">
                        <button class="btn bg-teal hover:bg-teal/90 text-white py-3 px-8 rounded-full font-semibold text-sm transition-all duration-300 shadow-lg hover:shadow-xl">
                            "View More Projects"
                        </button>
                    </div>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let Project {
        title,
        description,
        categories,
        technologies,
        demo_link,
        github_link,
        ..
    } = project.clone();

    view! {
        <div class="project-card overflow-hidden rounded-lg shadow-lg transition-all duration-500 hover:-translate-y-2 hover:shadow-xl bg-dark-200">
            <div class="relative h-52 overflow-hidden">
                <img
                    src=project.image_url()
                    alt=title.clone()
                    class="w-full h-full object-cover transition-transform duration-500 hover:scale-110"
                />
                <div class="absolute inset-0 bg-gradient-to-b from-transparent to-dark-200/90 flex items-end">
                    <div class="p-4">
                        <h3 class="text-xl font-bold text-white mb-1">{title.clone()}</h3>
                        <div class="flex gap-2 flex-wrap">
                            {categories
                                .into_iter()
                                .map(|cat| {
                                    view! {
                                        <span class="inline-block px-2 py-1 text-xs rounded-full bg-teal/20 text-teal">
                                            {cat}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
            <div class="p-4">
                <p class="text-gray-300 text-sm mb-4">{description}</p>
                <div class="mb-4">
                    <h4 class="text-sm font-semibold text-teal mb-2">"Technologies"</h4>
                    <div class="flex flex-wrap gap-2">
                        {technologies
                            .into_iter()
                            .map(|tech| {
                                view! {
                                    <span class="px-2 py-1 text-xs bg-dark-100 rounded-md text-gray-300">
                                        {tech}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="flex justify-between pt-2 border-t border-gray-700">
                    <a
                        href=demo_link
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-sm font-medium text-teal hover:text-orange transition-colors"
                        aria-label=format!("View {title} Demo")
                    >
                        "Demo"
                    </a>
                    <a
                        href=github_link
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-sm font-medium text-teal hover:text-orange transition-colors"
                        aria-label=format!("{title} Github Repository")
                    >
                        "GitHub"
                    </a>
                </div>
            </div>
        </div>
    }
}
