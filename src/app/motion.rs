use std::rc::Rc;

use leptos::{ev, html::ElementType, prelude::*};
use leptos_use::{
    use_event_listener, use_raf_fn_with_options, use_window, utils::Pausable,
    UseRafFnCallbackArgs, UseRafFnOptions,
};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::motion::{counter_value, fill_width, Loop, Player, Pose, Target, Timeline, Trigger, Tween};

type Hook = Rc<dyn Fn()>;

fn now_secs() -> f64 {
    window()
        .performance()
        .map(|p| p.now() / 1000.0)
        .unwrap_or_default()
}

fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default()
}

fn resolve(root: &Element, target: Target) -> Vec<HtmlElement> {
    match target {
        Target::Root => root.clone().dyn_into::<HtmlElement>().into_iter().collect(),
        Target::Selector(selector) => {
            let Ok(list) = root.query_selector_all(selector) else {
                return Vec::new();
            };
            (0..list.length())
                .filter_map(|i| list.get(i))
                .filter_map(|n| n.dyn_into::<HtmlElement>().ok())
                .collect()
        }
    }
}

fn set_pose(el: &HtmlElement, pose: &Pose) {
    let style = el.style();
    if pose.has_transform() {
        let _ = style.set_property("transform", &pose.to_transform());
    }
    if let Some(opacity) = pose.opacity {
        let _ = style.set_property("opacity", &opacity.to_string());
    }
}

fn data_value(el: &HtmlElement) -> Option<f64> {
    el.get_attribute("data-value")?.parse().ok()
}

fn apply_tween(el: &HtmlElement, tween: &Tween, progress: f64) {
    set_pose(el, &tween.pose_at(progress));
    if !tween.counter && !tween.fill {
        return;
    }
    let Some(value) = data_value(el) else {
        return;
    };
    if tween.fill {
        let _ = el.style().set_property("width", &fill_width(value, progress));
    }
    if tween.counter {
        let suffix = el.get_attribute("data-suffix").unwrap_or_default();
        el.set_text_content(Some(&format!("{}{suffix}", counter_value(value, progress))));
    }
}

/// Drops the inline styles a finished tween left behind.
fn clear_tween(el: &HtmlElement, tween: &Tween) {
    let style = el.style();
    if tween.from.has_transform() {
        let _ = style.remove_property("transform");
    }
    if tween.from.opacity.is_some() {
        let _ = style.remove_property("opacity");
    }
}

struct Driver {
    player: Player,
    targets: Vec<Vec<HtmlElement>>,
}

impl Driver {
    fn new(player: Player) -> Self {
        Self {
            player,
            targets: Vec::new(),
        }
    }

    fn counts(&self) -> Vec<usize> {
        self.targets.iter().map(Vec::len).collect()
    }

    /// Resolves every step's elements and parks them at their start pose.
    fn attach(&mut self, root: &Element) {
        self.targets = self
            .player
            .timeline()
            .steps()
            .iter()
            .map(|s| resolve(root, s.tween.target))
            .collect();
        let progress = self.player.timeline().sample(0.0, &self.counts());
        self.apply(&progress);
    }

    fn apply(&self, progress: &[Vec<f64>]) {
        let steps = self.player.timeline().steps();
        for ((step, els), ps) in steps.iter().zip(&self.targets).zip(progress) {
            for (el, p) in els.iter().zip(ps) {
                apply_tween(el, &step.tween, *p);
            }
        }
    }

    fn clear(&self) {
        let steps = self.player.timeline().steps();
        for (step, els) in steps.iter().zip(&self.targets) {
            for el in els {
                clear_tween(el, &step.tween);
            }
        }
    }

    /// Returns true once there is nothing left to draw.
    fn tick(&mut self, now: f64) -> bool {
        let counts = self.counts();
        let Some(frame) = self.player.frame(now, &counts) else {
            return true;
        };
        self.apply(&frame.progress);
        if frame.finished {
            self.clear();
        }
        frame.finished
    }
}

/// Handle to a section's entrance timeline.
#[derive(Clone, Copy)]
pub struct TimelineHandle {
    driver: StoredValue<Driver, LocalStorage>,
    root: StoredValue<Option<Element>, LocalStorage>,
    resume: StoredValue<Option<Hook>, LocalStorage>,
    /// Stops the scroll listener; set only while a viewport trigger is pending.
    detach: StoredValue<Option<Hook>, LocalStorage>,
}

impl TimelineHandle {
    fn new(player: Player) -> Self {
        Self {
            driver: StoredValue::new_local(Driver::new(player)),
            root: StoredValue::new_local(None),
            resume: StoredValue::new_local(None),
            detach: StoredValue::new_local(None),
        }
    }

    fn check(&self) {
        let Some(root) = self.root.get_value() else {
            return;
        };
        let top = root.get_bounding_client_rect().top();
        self.observe(top, viewport_height(), now_secs());
    }

    fn observe(&self, top: f64, viewport_height: f64, now: f64) {
        let (fired, awaiting) = self
            .driver
            .try_update_value(|d| {
                let fired = d.player.observe(top, viewport_height, now);
                (fired, d.player.awaiting_trigger())
            })
            .unwrap_or((false, false));
        if !awaiting {
            self.release_listener();
        }
        if fired {
            log::debug!("timeline fired at top={top}");
            self.resume.with_value(|r| {
                if let Some(r) = r {
                    r()
                }
            });
        }
    }

    fn release_listener(&self) {
        let stop = self.detach.try_update_value(Option::take).flatten();
        if let Some(stop) = stop {
            stop();
        }
    }

    /// Cancels the player and drops the scroll listener.
    fn stop(&self) {
        self.driver.try_update_value(|d| d.player.cancel());
        self.release_listener();
    }

    #[cfg(all(test, feature = "ssr"))]
    fn listening(&self) -> bool {
        self.detach.with_value(Option::is_some)
    }

    /// Cancels whatever is playing and runs `timeline` right away against
    /// the section's current elements.
    pub fn replay(&self, timeline: Timeline) {
        self.stop();
        self.driver
            .update_value(|d| *d = Driver::new(Player::new(timeline, Trigger::Immediate)));
        let handle = *self;
        request_animation_frame(move || {
            let Some(root) = handle.root.get_value() else {
                return;
            };
            handle.driver.try_update_value(|d| d.attach(&root));
            handle.check();
        });
    }
}

/// Plays `timeline` once, the first time `trigger` fires for `root`.
///
/// A viewport trigger listens to window scrolls only until it fires. The
/// listener and the frame loop belong to the calling component; on unmount
/// the player is cancelled so no further frames are drawn.
pub fn use_timeline<E>(root: NodeRef<E>, timeline: Timeline, trigger: Trigger) -> TimelineHandle
where
    E: ElementType + 'static,
    E::Output: JsCast + Clone + 'static,
{
    let handle = TimelineHandle::new(Player::new(timeline, trigger));
    let pause = StoredValue::new_local(None::<Hook>);

    let Pausable {
        pause: pause_fn,
        resume: resume_fn,
        ..
    } = use_raf_fn_with_options(
        move |args: UseRafFnCallbackArgs| {
            let done = handle
                .driver
                .try_update_value(|d| d.tick(args.timestamp / 1000.0))
                .unwrap_or(true);
            if done {
                pause.with_value(|p| {
                    if let Some(p) = p {
                        p()
                    }
                });
            }
        },
        UseRafFnOptions::default().immediate(false),
    );
    pause.set_value(Some(Rc::new(pause_fn)));
    handle.resume.set_value(Some(Rc::new(resume_fn)));

    if matches!(trigger, Trigger::Viewport(_)) {
        let stop = use_event_listener(use_window(), ev::scroll, move |_| handle.check());
        handle.detach.set_value(Some(Rc::new(stop)));
    }

    Effect::new(move |_| {
        let Some(node) = root.get() else {
            return;
        };
        let el: Element = node.unchecked_into();
        handle.driver.update_value(|d| d.attach(&el));
        handle.root.set_value(Some(el));
        handle.check();
    });

    on_cleanup(move || handle.stop());

    handle
}

struct LoopDriver {
    loops: Vec<Loop>,
    targets: Vec<Vec<HtmlElement>>,
    origin: Option<f64>,
}

/// Runs endless decorative loops on elements inside `root` for as long as
/// the calling component is mounted.
pub fn use_loops<E>(root: NodeRef<E>, loops: Vec<Loop>)
where
    E: ElementType + 'static,
    E::Output: JsCast + Clone + 'static,
{
    let driver = StoredValue::new_local(LoopDriver {
        loops,
        targets: Vec::new(),
        origin: None,
    });

    let _ = use_raf_fn_with_options(
        move |args: UseRafFnCallbackArgs| {
            driver.update_value(|d| {
                if d.targets.is_empty() {
                    return;
                }
                let now = args.timestamp / 1000.0;
                let origin = *d.origin.get_or_insert(now);
                for (lp, els) in d.loops.iter().zip(&d.targets) {
                    let pose = lp.pose(now - origin);
                    for el in els {
                        set_pose(el, &pose);
                    }
                }
            });
        },
        UseRafFnOptions::default(),
    );

    Effect::new(move |_| {
        let Some(node) = root.get() else {
            return;
        };
        let el: Element = node.unchecked_into();
        driver.update_value(|d| {
            d.targets = d.loops.iter().map(|lp| resolve(&el, lp.target)).collect();
        });
    });
}
