use leptos::{html, prelude::*};

use crate::{
    motion::{Ease, Loop, Pose, Position, Target, Timeline, Trigger, Tween},
    portfolio::SOCIAL_LINKS,
    sections::SectionId,
    segment::{Segmented, WordUnit},
};

use super::motion::{use_loops, use_timeline};

const SUBTITLE: &str =
    "I create beautiful and functional web experiences with clean code and modern technologies.";

/// Heading lines, each a list of `(text, accent)` runs. Lines are broken
/// with `<br>`; runs on one line are separated by a single space.
const HEADING: [&[(&str, bool)]; 2] = [
    &[("Hi, I'm", false), ("Ibrahim Sohofi", true)],
    &[("Web Developer", false)],
];

fn intro() -> Timeline {
    Timeline::new()
        .then(
            Tween::from(Target::Root, Pose::new().opacity(0.0))
                .duration(1.0)
                .ease(Ease::Power3Out),
        )
        .push(
            Tween::from(
                Target::Selector(".char"),
                Pose::new().opacity(0.0).y(50.0).rotate_x(-90.0),
            )
            .stagger(0.02)
            .duration(0.8)
            .ease(Ease::BackOut(1.7)),
            Position::Overlap(0.5),
        )
        .push(
            Tween::from(Target::Selector(".word"), Pose::new().opacity(0.0).y(20.0))
                .stagger(0.05)
                .duration(0.8)
                .ease(Ease::Power3Out),
            Position::Overlap(0.3),
        )
        .push(
            Tween::from(Target::Selector(".hero-btn"), Pose::new().opacity(0.0).y(20.0))
                .stagger(0.1)
                .duration(0.8)
                .ease(Ease::Power3Out),
            Position::Overlap(0.4),
        )
        .push(
            Tween::from(Target::Selector(".social-icon"), Pose::new().opacity(0.0).scale(0.0))
                .stagger(0.1)
                .duration(0.6)
                .ease(Ease::BackOut(1.7)),
            Position::Overlap(0.6),
        )
}

fn ambience() -> Vec<Loop> {
    vec![
        Loop::new(
            Target::Selector(".hero-image"),
            Pose::new().y(-20.0),
            2.5,
            Ease::Power1InOut,
        ),
        Loop::new(
            Target::Selector(".bg-gradient-1"),
            Pose::new().x_percent(10.0).y_percent(5.0),
            10.0,
            Ease::SineInOut,
        ),
        Loop::new(
            Target::Selector(".bg-gradient-2"),
            Pose::new().x_percent(-10.0).y_percent(-5.0),
            8.0,
            Ease::SineInOut,
        ),
    ]
}

fn word_view(index: usize, word: &WordUnit) -> impl IntoView {
    let chars = word
        .chars
        .iter()
        .map(|c| view! { <span class="inline-block char">{c.to_string()}</span> })
        .collect_view();
    view! {
        {(index > 0).then_some(" ")}
        <span class="inline-block overflow-hidden">{chars}</span>
    }
}

fn run_view(index: usize, (text, accent): &(Segmented<WordUnit>, bool)) -> impl IntoView {
    let words = text
        .units()
        .iter()
        .enumerate()
        .map(|(i, w)| word_view(i, w))
        .collect_view();
    let class = if *accent { "text-teal" } else { "" };
    view! {
        {(index > 0).then_some(" ")}
        <span class=class>{words}</span>
    }
}

fn line_view(index: usize, runs: &[(Segmented<WordUnit>, bool)]) -> impl IntoView {
    let runs = runs
        .iter()
        .enumerate()
        .map(|(i, run)| run_view(i, run))
        .collect_view();
    view! {
        {(index > 0).then(|| view! { <br /> })}
        {runs}
    }
}

#[component]
pub fn Hero(on_navigate: Callback<SectionId>) -> impl IntoView {
    let root = NodeRef::<html::Section>::new();
    use_timeline(root, intro(), Trigger::Immediate);
    use_loops(root, ambience());

    let heading = HEADING
        .iter()
        .map(|line| {
            line.iter()
                .map(|(text, accent)| (Segmented::chars(text), *accent))
                .collect::<Vec<_>>()
        })
        .enumerate()
        .map(|(i, runs)| line_view(i, &runs))
        .collect_view();
    let subtitle = Segmented::words(SUBTITLE)
        .units()
        .iter()
        .enumerate()
        .map(|(i, w)| {
            view! {
                {(i > 0).then_some(" ")}
                <span class="inline-block word">{w.clone()}</span>
            }
        })
        .collect_view();

    view! {
        <section
            id=SectionId::Home.as_str()
            node_ref=root
            class="relative min-h-screen flex items-center pt-16 overflow-hidden"
        >
            <div class="absolute inset-0 overflow-hidden">
                <div class="absolute top-0 left-0 w-[50%] h-[50%] -translate-x-1/4 -translate-y-1/4">
                    <div class="bg-gradient-1 w-full h-full rounded-full bg-teal/10 blur-[100px]" />
                </div>
                <div class="absolute bottom-0 right-0 w-[50%] h-[50%] translate-x-1/4 translate-y-1/4">
                    <div class="bg-gradient-2 w-full h-full rounded-full bg-orange/10 blur-[100px]" />
                </div>
            </div>

            <div class="container mx-auto px-4 md:px-6 z-10">
                <div class="grid md:grid-cols-2 gap-8 items-center">
                    <div class="text-center md:text-left">
                        <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold mb-6 leading-tight">
                            {heading}
                        </h1>
                        <p class="text-lg md:text-xl text-gray-300 mb-8 max-w-xl mx-auto md:mx-0">
                            {subtitle}
                        </p>

                        <div class="flex flex-wrap justify-center md:justify-start gap-4 mb-10">
                            <button
                                class="hero-btn btn bg-teal hover:bg-teal/90 text-white py-3 px-8 rounded-full font-semibold text-sm transition-all duration-300 shadow-lg hover:shadow-xl"
                                on:click=move |_| on_navigate.run(SectionId::Projects)
                            >
                                "View Projects"
                            </button>
                            <button
                                class="hero-btn btn bg-transparent border-2 border-teal text-white hover:text-teal py-3 px-8 rounded-full font-semibold text-sm transition-all duration-300"
                                on:click=move |_| on_navigate.run(SectionId::Contact)
                            >
                                "Contact Me"
                            </button>
                        </div>

                        <div class="flex justify-center md:justify-start space-x-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="social-icon text-white hover:text-teal transition-colors duration-300"
                                            aria-label=link.label
                                        >
                                            <i class=format!("{} text-2xl", link.icon) />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="relative flex justify-center md:justify-end">
                        <div class="hero-image relative w-64 h-64 md:w-80 md:h-80 rounded-full bg-teal/20 flex items-center justify-center">
                            <div class="absolute inset-0 border-2 border-teal/30 rounded-full animate-pulse" />
                            <div class="w-56 h-56 md:w-72 md:h-72 bg-gradient-to-br from-teal to-navy rounded-full overflow-hidden border-4 border-teal/20 shadow-xl">
                                <div class="h-full w-full bg-gradient-to-br from-navy/80 to-dark-200/80" />
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <div class="absolute bottom-10 left-1/2 -translate-x-1/2 flex flex-col items-center">
                <span class="text-white/70 text-sm mb-2">"Scroll Down"</span>
                <div class="w-6 h-10 border-2 border-white/30 rounded-full flex justify-center p-1">
                    <div class="w-1 h-2 bg-teal rounded-full animate-bounce-slow" />
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos::tachys::view::RenderHtml;

    use super::*;
    use crate::segment::split_chars;

    /// Text content of the first `<tag ...>` element, with `<br>` read as a newline.
    fn text_of(html: &str, tag: &str) -> String {
        let open = format!("<{tag} ");
        let close = format!("</{tag}>");
        let start = html.find(&open).expect("element should be rendered");
        let end = start + html[start..].find(&close).expect("element should be closed");
        let inner = &html[start..end];
        let inner = &inner[inner.find('>').expect("open tag should end") + 1..];

        let mut text = String::new();
        let mut in_tag = false;
        let mut tag_name = String::new();
        for c in inner.chars() {
            match c {
                '<' => {
                    in_tag = true;
                    tag_name.clear();
                }
                '>' if in_tag => {
                    in_tag = false;
                    if tag_name.trim_end_matches('/').trim() == "br" {
                        text.push('\n');
                    }
                }
                c if in_tag => {
                    if !tag_name.contains(' ') {
                        tag_name.push(c);
                    }
                }
                c => text.push(c),
            }
        }
        text.replace("&#x27;", "'")
            .replace("&#39;", "'")
            .replace("&quot;", "\"")
            .replace("&amp;", "&")
    }

    fn render_hero() -> String {
        let owner = Owner::new();
        owner.with(|| view! { <Hero on_navigate=Callback::new(|_: SectionId| {}) /> }.to_html())
    }

    #[test]
    fn test_heading_reads_as_source_text() {
        let html = render_hero();
        assert_eq!(text_of(&html, "h1"), "Hi, I'm Ibrahim Sohofi\nWeb Developer");
    }

    #[test]
    fn test_subtitle_reads_as_source_text() {
        let html = render_hero();
        assert_eq!(text_of(&html, "p"), SUBTITLE);
    }

    #[test]
    fn test_every_character_is_its_own_unit() {
        let html = render_hero();
        let expected: usize = HEADING
            .iter()
            .flat_map(|line| line.iter())
            .flat_map(|(text, _)| split_chars(text))
            .map(|w| w.chars.len())
            .sum();
        assert_eq!(html.matches("inline-block char").count(), expected);
        assert_eq!(
            html.matches("inline-block word").count(),
            Segmented::words(SUBTITLE).units().len()
        );
    }
}
