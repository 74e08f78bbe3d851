use leptos::{ev, html, prelude::*};
use leptos_use::{
    use_event_listener, use_raf_fn_with_options, use_window, UseRafFnCallbackArgs,
    UseRafFnOptions,
};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::motion::{Ease, Follower, Pose};

const INTERACTIVE: &str = "button, a, .nav-link, .project-card";
const HOVER_SCALE: f64 = 1.5;

struct CursorState {
    outline: Follower<2>,
    dot: Follower<2>,
    scale: Follower<1>,
    hovering: bool,
    now: f64,
    /// The last frame drawn had every follower at rest.
    idle: bool,
}

impl Default for CursorState {
    fn default() -> Self {
        Self {
            outline: Follower::new([0.0, 0.0], 0.5, Ease::Power2Out),
            dot: Follower::new([0.0, 0.0], 0.2, Ease::Power2Out),
            scale: Follower::new([1.0], 0.3, Ease::Power2Out),
            hovering: false,
            now: 0.0,
            idle: false,
        }
    }
}

impl CursorState {
    /// Samples every follower at `now`, or `None` when nothing moved since
    /// the last settled frame.
    fn frame(&mut self, now: f64) -> Option<([f64; 2], [f64; 2], [f64; 1])> {
        self.now = now;
        let settled = self.outline.is_settled(now)
            && self.dot.is_settled(now)
            && self.scale.is_settled(now);
        if settled && self.idle {
            return None;
        }
        self.idle = settled;
        Some((self.outline.sample(now), self.dot.sample(now), self.scale.sample(now)))
    }
}

fn place(el: &HtmlElement, pos: [f64; 2], scale: Option<f64>) {
    let mut pose = Pose::new().x(pos[0]).y(pos[1]);
    pose.scale = scale;
    let _ = el.style().set_property("transform", &pose.to_transform());
}

/// Custom pointer. Owns the page's only `mousemove`/`mouseover` listeners;
/// they are dropped with the component.
#[component]
pub fn Cursor() -> impl IntoView {
    let outline_ref = NodeRef::<html::Div>::new();
    let dot_ref = NodeRef::<html::Div>::new();
    let state = StoredValue::new_local(CursorState::default());

    let _ = use_event_listener(use_window(), ev::mousemove, move |ev| {
        let to = [ev.client_x() as f64, ev.client_y() as f64];
        state.update_value(|s| {
            let now = s.now;
            s.outline.retarget(to, now);
            s.dot.retarget(to, now);
        });
    });

    // delegated so elements rendered later (filtered cards) are covered too
    let _ = use_event_listener(use_window(), ev::mouseover, move |ev| {
        let hovering = ev
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(INTERACTIVE).ok().flatten())
            .is_some();
        state.update_value(|s| {
            if s.hovering != hovering {
                s.hovering = hovering;
                let now = s.now;
                s.scale
                    .retarget([if hovering { HOVER_SCALE } else { 1.0 }], now);
            }
        });
    });

    let _ = use_raf_fn_with_options(
        move |args: UseRafFnCallbackArgs| {
            let Some((outline, dot, scale)) = state
                .try_update_value(|s| s.frame(args.timestamp / 1000.0))
                .flatten()
            else {
                return;
            };
            if let Some(el) = outline_ref.get_untracked() {
                place(&el, outline, Some(scale[0]));
            }
            if let Some(el) = dot_ref.get_untracked() {
                place(&el, dot, None);
            }
        },
        UseRafFnOptions::default(),
    );

    view! {
        <div node_ref=outline_ref class="custom-cursor pointer-events-none fixed top-0 left-0 z-[100]">
            <div class="cursor-outline" />
        </div>
        <div node_ref=dot_ref class="cursor-dot pointer-events-none fixed top-0 left-0 z-[100]" />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settled_cursor_skips_frames() {
        let mut state = CursorState::default();
        assert_eq!(state.frame(0.0), Some(([0.0, 0.0], [0.0, 0.0], [1.0])));
        // the first settled frame is still drawn, later ones are skipped
        assert!(state.frame(0.5).is_some());
        assert_eq!(state.frame(0.6), None);

        state.outline.retarget([100.0, 40.0], 0.6);
        state.dot.retarget([100.0, 40.0], 0.6);
        assert!(state.frame(0.7).is_some());
        assert_eq!(state.frame(1.1).map(|f| f.0), Some([100.0, 40.0]));
        assert_eq!(state.frame(1.2), None);
    }
}
