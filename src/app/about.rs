use leptos::{html, prelude::*};

use crate::{
    config::SiteConfig,
    motion::{Ease, Pose, Position, Target, Timeline, Trigger, Tween},
    portfolio::{EDUCATION, LANGUAGES, SKILLS},
    sections::SectionId,
};

use super::motion::use_timeline;

fn reveal() -> Timeline {
    let rise = || Pose::new().y(50.0).opacity(0.0);
    Timeline::new()
        .push(
            Tween::from(Target::Selector(".about-title"), rise()).duration(0.8),
            Position::At(0.0),
        )
        .push(
            Tween::from(Target::Selector(".about-bio"), rise())
                .duration(0.8)
                .delay(0.3),
            Position::At(0.0),
        )
}

/// Bars widen from zero while their labels count up in step.
fn skills_fill() -> Timeline {
    let timed = |t: Tween| {
        t.duration(1.5)
            .stagger(0.1)
            .ease(Ease::Power3Out)
            .delay(0.5)
    };
    Timeline::new()
        .push(
            timed(Tween::fill(Target::Selector(".skill-bar-fill"))),
            Position::At(0.0),
        )
        .push(
            timed(Tween::counter(Target::Selector(".skill-percent"))),
            Position::At(0.0),
        )
}

#[component]
pub fn About() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let section = NodeRef::<html::Section>::new();
    let skills = NodeRef::<html::Div>::new();
    use_timeline(section, reveal(), Trigger::Viewport(config.reveal_at));
    use_timeline(skills, skills_fill(), Trigger::Viewport(config.reveal_at));

    view! {
        <section id=SectionId::About.as_str() node_ref=section class="py-20 bg-dark-200">
            <div class="container mx-auto px-4">
                <h2 class="about-title text-3xl md:text-4xl font-bold text-center mb-16 relative">
                    "About " <span class="text-teal">"Me"</span>
                    <span class="absolute bottom-0 left-1/2 -translate-x-1/2 w-20 h-1 bg-teal mt-2" />
                </h2>

                <div class="grid md:grid-cols-2 gap-12">
                    <div class="about-bio bg-dark-100 p-6 rounded-lg shadow-lg">
                        <h3 class="text-2xl font-semibold mb-4 text-teal">"Who Am I?"</h3>
                        <p class="text-gray-300 mb-4">
                            "I am Ibrahim Sohofi, a passionate web developer from Morocco. I enjoy creating beautiful, functional, and accessible websites and web applications that provide great user experiences."
                        </p>
                        <p class="text-gray-300 mb-4">
                            "My journey in web development started back in 2020, and since then, I've been constantly learning and improving my skills. I specialize in front-end development but also have experience with back-end technologies."
                        </p>

                        <div class="mt-8">
                            <h3 class="text-2xl font-semibold mb-4 text-teal">"Education"</h3>
                            {EDUCATION
                                .iter()
                                .map(|e| {
                                    view! {
                                        <div class="mb-4">
                                            <div class="flex justify-between items-center">
                                                <h4 class="text-lg font-medium">{e.title}</h4>
                                                <span class="text-sm text-teal">{e.period}</span>
                                            </div>
                                            <p class="text-gray-400">{e.school}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div id="skills" node_ref=skills class="bg-dark-100 p-6 rounded-lg shadow-lg">
                        <h3 class="text-2xl font-semibold mb-6 text-teal">"My Skills"</h3>
                        <div class="space-y-5">
                            {SKILLS
                                .iter()
                                .map(|skill| {
                                    view! {
                                        <div class="skill-item">
                                            <div class="flex justify-between mb-1">
                                                <span class="font-medium">{skill.name}</span>
                                                <span
                                                    class="text-teal skill-percent"
                                                    data-value=skill.proficiency.to_string()
                                                    data-suffix="%"
                                                >
                                                    {format!("{}%", skill.proficiency)}
                                                </span>
                                            </div>
                                            <div class="w-full bg-gray-700 rounded-full h-2.5">
                                                <div
                                                    class="skill-bar-fill bg-gradient-to-r from-teal to-orange h-2.5 rounded-full"
                                                    data-value=skill.proficiency.to_string()
                                                    style=format!("width: {}%", skill.proficiency)
                                                />
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="mt-8">
                            <h3 class="text-2xl font-semibold mb-4 text-teal">"Languages"</h3>
                            <div class="grid grid-cols-2 gap-4">
                                {LANGUAGES
                                    .iter()
                                    .map(|l| {
                                        view! {
                                            <div>
                                                <h4 class="text-lg font-medium">{l.name}</h4>
                                                <p class="text-gray-400">{l.level}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
