use futures::future::AbortHandle;
use leptos::{either::Either, ev, html, prelude::*, task::spawn_local};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::{
    config::SiteConfig,
    contact::{
        submit, BrowserSleeper, ContactError, ContactState, FormField, SimulatedTransport,
        SubmitStatus,
    },
    motion::{Pose, Position, Target, Timeline, Trigger, Tween},
    portfolio::SOCIAL_LINKS,
    sections::SectionId,
};

use super::motion::use_timeline;

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-dark-200 border border-gray-700 rounded-md focus:outline-none focus:ring-2 focus:ring-teal focus:border-transparent text-white";

fn reveal() -> Timeline {
    let slide = |selector, pose: Pose, delay| {
        Tween::from(Target::Selector(selector), pose.opacity(0.0))
            .duration(0.8)
            .delay(delay)
    };
    Timeline::new()
        .push(
            slide(".contact-title", Pose::new().y(50.0), 0.0),
            Position::At(0.0),
        )
        .push(
            slide(".contact-form", Pose::new().x(-50.0), 0.3),
            Position::At(0.0),
        )
        .push(
            slide(".contact-info", Pose::new().x(50.0), 0.5),
            Position::At(0.0),
        )
        .push(
            Tween::from(
                Target::Selector(".form-control"),
                Pose::new().y(20.0).opacity(0.0),
            )
            .duration(0.5)
            .stagger(0.1)
            .delay(0.6),
            Position::At(0.0),
        )
}

fn field_meta(field: FormField) -> (&'static str, &'static str, &'static str) {
    match field {
        FormField::Name => ("Your Name", "text", "John Doe"),
        FormField::Email => ("Email Address", "email", "john.doe@example.com"),
        FormField::Subject => ("Subject", "text", "Project Inquiry"),
        FormField::Message => ("Message", "", "Your message here..."),
    }
}

#[component]
fn Field(field: FormField, state: RwSignal<ContactState>) -> impl IntoView {
    let (label, kind, placeholder) = field_meta(field);
    let name = field.as_str();
    let value = move || state.with(|s| s.form.get(field).to_string());
    let on_input = move |ev: ev::Event| {
        let v = event_target_value(&ev);
        state.update(|s| s.form.set(field, v));
    };

    let control = if field == FormField::Message {
        Either::Left(view! {
            <textarea
                id=name
                name=name
                required
                rows=5
                class=format!("{INPUT_CLASS} resize-none")
                placeholder=placeholder
                prop:value=value
                on:input=on_input
            />
        })
    } else {
        Either::Right(view! {
            <input
                id=name
                type=kind
                name=name
                required
                class=INPUT_CLASS
                placeholder=placeholder
                prop:value=value
                on:input=on_input
            />
        })
    };

    let spacing = if field == FormField::Message { "mb-6" } else { "mb-4" };
    view! {
        <div class=format!("{spacing} form-control")>
            <label for=name class="block text-sm font-medium text-gray-300 mb-2">
                {label}
            </label>
            {control}
        </div>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let root = NodeRef::<html::Section>::new();
    let state = RwSignal::new(ContactState::default());
    let in_flight = StoredValue::new(None::<AbortHandle>);

    use_timeline(root, reveal(), Trigger::Viewport(config.reveal_at));

    let UseTimeoutFnReturn {
        start: start_reset, ..
    } = use_timeout_fn(
        move |_: ()| state.update(ContactState::expire),
        config.reset_delay_ms(),
    );

    let submit_delay = config.submit_delay;
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(message) = state.try_update(ContactState::begin_submit).flatten() else {
            return;
        };
        let (delivery, handle) =
            submit(SimulatedTransport::new(BrowserSleeper, submit_delay), message);
        in_flight.set_value(Some(handle));

        let start_reset = start_reset.clone();
        spawn_local(async move {
            let result = delivery.await;
            if result == Err(ContactError::Cancelled) {
                return;
            }
            in_flight.try_set_value(None);
            if let Err(e) = &result {
                log::warn!("contact delivery failed: {e}");
            }
            let sent = result.is_ok();
            state.try_update(|s| s.finish(result));
            if sent {
                start_reset(());
            }
        });
    };

    on_cleanup(move || {
        if let Some(Some(handle)) = in_flight.try_get_value() {
            handle.abort();
        }
    });

    let button_class = move || {
        let look = match state.with(|s| s.status) {
            SubmitStatus::Idle => "bg-teal hover:bg-teal/90",
            SubmitStatus::Submitting => "bg-gray-600 cursor-not-allowed",
            SubmitStatus::Submitted => "bg-green-600 cursor-not-allowed",
        };
        format!("btn w-full py-3 px-6 rounded-md font-semibold text-white transition-all duration-300 {look}")
    };

    view! {
        <section id=SectionId::Contact.as_str() node_ref=root class="py-20 bg-dark-200">
            <div class="container mx-auto px-4">
                <h2 class="contact-title text-3xl md:text-4xl font-bold text-center mb-16 relative">
                    "Get In " <span class="text-teal">"Touch"</span>
                    <span class="absolute bottom-0 left-1/2 -translate-x-1/2 w-20 h-1 bg-teal mt-2" />
                </h2>

                <div class="grid md:grid-cols-2 gap-12">
                    <div>
                        <form
                            on:submit=on_submit
                            class="contact-form bg-dark-100 p-6 rounded-lg shadow-lg"
                        >
                            <h3 class="text-2xl font-semibold mb-6 text-teal">
                                "Send Me a Message"
                            </h3>
                            {FormField::ALL
                                .into_iter()
                                .map(|field| view! { <Field field state /> })
                                .collect_view()}
                            <div>
                                <button
                                    type="submit"
                                    disabled=move || state.with(ContactState::is_locked)
                                    class=button_class
                                >
                                    {move || state.with(ContactState::button_label)}
                                </button>
                                {move || {
                                    state
                                        .with(|s| s.error.clone())
                                        .map(|error| {
                                            view! { <p class="mt-2 text-red-500 text-sm">{error}</p> }
                                        })
                                }}
                            </div>
                        </form>
                    </div>

                    <div class="contact-info bg-dark-100 p-6 rounded-lg shadow-lg">
                        <h3 class="text-2xl font-semibold mb-6 text-teal">"Contact Information"</h3>
                        <div class="space-y-6">
                            <InfoRow title="Email">
                                <a
                                    href="mailto:contact@ibrahim.com"
                                    class="text-gray-300 hover:text-teal transition-colors duration-300"
                                >
                                    "contact@ibrahim.com"
                                </a>
                            </InfoRow>
                            <InfoRow title="Phone">
                                <a
                                    href="tel:+2120000000000"
                                    class="text-gray-300 hover:text-teal transition-colors duration-300"
                                >
                                    "+212 0000 00000"
                                </a>
                            </InfoRow>
                            <InfoRow title="Location">
                                <p class="text-gray-300">"Morocco"</p>
                            </InfoRow>
                        </div>

                        <div class="mt-10">
                            <h3 class="text-xl font-semibold mb-4 text-teal">"Connect With Me"</h3>
                            <div class="flex space-x-4">
                                {SOCIAL_LINKS
                                    .iter()
                                    .map(|link| {
                                        view! {
                                            <a
                                                href=link.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="text-white hover:text-teal transition-colors duration-300"
                                                aria-label=link.label
                                            >
                                                <i class=format!("{} text-2xl", link.icon) />
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <div class="mt-8 pt-8 border-t border-gray-700">
                                <h4 class="text-lg font-medium text-white mb-4">"Download CV"</h4>
                                <a
                                    href=config.cv_path.clone()
                                    download=""
                                    class="download-btn inline-flex items-center px-6 py-3 rounded-md text-white font-medium text-sm"
                                >
                                    "Download CV"
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn InfoRow(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="flex items-start space-x-4">
            <div class="text-teal mt-1 w-6 h-6 rounded-full bg-teal/20" />
            <div>
                <h4 class="text-lg font-medium text-white">{title}</h4>
                {children()}
            </div>
        </div>
    }
}
