//! Tween and timeline model for the section entrance animations.
//!
//! Everything here is pure: times are seconds, progress values are sampled
//! on demand, and nothing touches the DOM. The browser side lives in
//! `app::motion` and only feeds timestamps and element counts in.

use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    Linear,
    Power1Out,
    Power1InOut,
    Power2Out,
    Power3Out,
    SineInOut,
    /// Overshoots past the end before settling; the value is the overshoot amount.
    BackOut(f64),
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power1InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Ease::BackOut(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u.powi(3) + s * u.powi(2)
            }
        }
    }
}

/// A set of animatable properties. Unset properties are left alone.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub x_percent: Option<f64>,
    pub y_percent: Option<f64>,
    pub opacity: Option<f64>,
    pub scale: Option<f64>,
    pub rotate_x: Option<f64>,
}

fn lerp_prop(from: Option<f64>, to: Option<f64>, rest: f64, p: f64) -> Option<f64> {
    match (from, to) {
        (None, None) => None,
        (a, b) => {
            let a = a.unwrap_or(rest);
            let b = b.unwrap_or(rest);
            Some(a + (b - a) * p)
        }
    }
}

impl Pose {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn x(mut self, v: f64) -> Self {
        self.x = Some(v);
        self
    }

    pub fn y(mut self, v: f64) -> Self {
        self.y = Some(v);
        self
    }

    pub fn x_percent(mut self, v: f64) -> Self {
        self.x_percent = Some(v);
        self
    }

    pub fn y_percent(mut self, v: f64) -> Self {
        self.y_percent = Some(v);
        self
    }

    pub fn opacity(mut self, v: f64) -> Self {
        self.opacity = Some(v);
        self
    }

    pub fn scale(mut self, v: f64) -> Self {
        self.scale = Some(v);
        self
    }

    pub fn rotate_x(mut self, v: f64) -> Self {
        self.rotate_x = Some(v);
        self
    }

    /// Property-wise interpolation; a property set on only one side takes
    /// its resting value (0 offsets, opacity 1, scale 1) on the other.
    pub fn interpolate(from: &Pose, to: &Pose, p: f64) -> Pose {
        Pose {
            x: lerp_prop(from.x, to.x, 0.0, p),
            y: lerp_prop(from.y, to.y, 0.0, p),
            x_percent: lerp_prop(from.x_percent, to.x_percent, 0.0, p),
            y_percent: lerp_prop(from.y_percent, to.y_percent, 0.0, p),
            opacity: lerp_prop(from.opacity, to.opacity, 1.0, p),
            scale: lerp_prop(from.scale, to.scale, 1.0, p),
            rotate_x: lerp_prop(from.rotate_x, to.rotate_x, 0.0, p),
        }
    }

    pub fn has_transform(&self) -> bool {
        self.x.is_some()
            || self.y.is_some()
            || self.x_percent.is_some()
            || self.y_percent.is_some()
            || self.scale.is_some()
            || self.rotate_x.is_some()
    }

    /// CSS `transform` value for the set properties.
    pub fn to_transform(&self) -> String {
        let mut parts = Vec::new();
        if self.x.is_some() || self.y.is_some() {
            parts.push(format!(
                "translate({}px, {}px)",
                self.x.unwrap_or(0.0),
                self.y.unwrap_or(0.0)
            ));
        }
        if self.x_percent.is_some() || self.y_percent.is_some() {
            parts.push(format!(
                "translate({}%, {}%)",
                self.x_percent.unwrap_or(0.0),
                self.y_percent.unwrap_or(0.0)
            ));
        }
        if let Some(s) = self.scale {
            parts.push(format!("scale({s})"));
        }
        if let Some(r) = self.rotate_x {
            parts.push(format!("rotateX({r}deg)"));
        }
        parts.join(" ")
    }
}

/// What a tween animates, relative to the section that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Root,
    Selector(&'static str),
}

/// A "from" tween: matched elements start at `from` and settle at rest.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub target: Target,
    pub from: Pose,
    pub duration: f64,
    pub ease: Ease,
    pub stagger: f64,
    pub delay: f64,
    /// Progress also counts the element's numeric value up from zero.
    pub counter: bool,
    /// Progress also widens the element from zero to its value, in percent.
    pub fill: bool,
}

impl Tween {
    pub fn from(target: Target, from: Pose) -> Self {
        Self {
            target,
            from,
            duration: 0.5,
            ease: Ease::Power1Out,
            stagger: 0.0,
            delay: 0.0,
            counter: false,
            fill: false,
        }
    }

    pub fn counter(target: Target) -> Self {
        Self {
            counter: true,
            ..Self::from(target, Pose::new())
        }
    }

    pub fn fill(target: Target) -> Self {
        Self {
            fill: true,
            ..Self::from(target, Pose::new())
        }
    }

    pub fn duration(mut self, secs: f64) -> Self {
        self.duration = secs;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn stagger(mut self, secs: f64) -> Self {
        self.stagger = secs;
        self
    }

    pub fn delay(mut self, secs: f64) -> Self {
        self.delay = secs;
        self
    }

    /// Total length across `count` matched elements.
    pub fn span(&self, count: usize) -> f64 {
        self.delay + self.duration + self.stagger * count.saturating_sub(1) as f64
    }

    /// Eased progress of element `index`, `local` seconds after the step starts.
    pub fn progress(&self, local: f64, index: usize) -> f64 {
        let begin = self.delay + self.stagger * index as f64;
        if self.duration <= 0.0 {
            return if local >= begin { 1.0 } else { 0.0 };
        }
        self.ease.apply((local - begin) / self.duration)
    }

    pub fn pose_at(&self, progress: f64) -> Pose {
        Pose::interpolate(&self.from, &Pose::new(), progress)
    }
}

pub fn counter_value(target: f64, progress: f64) -> f64 {
    (target * progress).round()
}

/// CSS `width` for a bar filled to `progress` of `target` percent.
pub fn fill_width(target: f64, progress: f64) -> String {
    format!("{}%", target * progress)
}

/// Where a step sits on its timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    /// At the current end of the timeline.
    Sequential,
    /// This many seconds before the current end of the timeline.
    Overlap(f64),
    At(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub tween: Tween,
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub start: f64,
    pub end: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Timeline {
    steps: Vec<Step>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, tween: Tween, position: Position) -> Self {
        self.steps.push(Step { tween, position });
        self
    }

    pub fn then(self, tween: Tween) -> Self {
        self.push(tween, Position::Sequential)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Start/end of each step given how many elements each step matched.
    /// A step with no recorded count is treated as a single element.
    pub fn schedule(&self, counts: &[usize]) -> Vec<Span> {
        let mut end: f64 = 0.0;
        self.steps
            .iter()
            .enumerate()
            .map(|(i, step)| {
                let count = counts.get(i).copied().unwrap_or(1);
                let start = match step.position {
                    Position::Sequential => end,
                    Position::Overlap(secs) => (end - secs).max(0.0),
                    Position::At(t) => t,
                };
                let stop = start + step.tween.span(count);
                end = end.max(stop);
                Span { start, end: stop }
            })
            .collect()
    }

    pub fn duration(&self, counts: &[usize]) -> f64 {
        self.schedule(counts)
            .iter()
            .map(|s| s.end)
            .fold(0.0, f64::max)
    }

    /// Per-step, per-element progress at `elapsed` seconds.
    pub fn sample(&self, elapsed: f64, counts: &[usize]) -> Vec<Vec<f64>> {
        self.steps
            .iter()
            .zip(self.schedule(counts))
            .enumerate()
            .map(|(i, (step, span))| {
                let count = counts.get(i).copied().unwrap_or(1);
                (0..count)
                    .map(|k| step.tween.progress(elapsed - span.start, k))
                    .collect()
            })
            .collect()
    }
}

/// An endlessly repeating back-and-forth tween from rest to `to`.
#[derive(Debug, Clone, PartialEq)]
pub struct Loop {
    pub target: Target,
    pub to: Pose,
    pub duration: f64,
    pub ease: Ease,
}

impl Loop {
    pub fn new(target: Target, to: Pose, duration: f64, ease: Ease) -> Self {
        Self {
            target,
            to,
            duration,
            ease,
        }
    }

    pub fn sample(&self, elapsed: f64) -> f64 {
        if self.duration <= 0.0 {
            return 0.0;
        }
        let cycles = elapsed.max(0.0) / self.duration;
        let n = cycles.floor();
        let t = cycles - n;
        let t = if (n as u64) % 2 == 0 { t } else { 1.0 - t };
        self.ease.apply(t)
    }

    pub fn pose(&self, elapsed: f64) -> Pose {
        Pose::interpolate(&Pose::new(), &self.to, self.sample(elapsed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    Immediate,
    /// Fires once the root's top edge is at or above this fraction of the viewport height.
    Viewport(f64),
}

impl Trigger {
    pub fn fires(&self, top: f64, viewport_height: f64) -> bool {
        match self {
            Trigger::Immediate => true,
            Trigger::Viewport(f) => top <= viewport_height * f,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Pending,
    Playing { started: f64 },
    Done,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub progress: Vec<Vec<f64>>,
    pub finished: bool,
}

/// One-shot playback of a timeline: pending until its trigger fires,
/// then playing until the timeline ends. Never replays.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    timeline: Timeline,
    trigger: Trigger,
    phase: Phase,
}

impl Player {
    pub fn new(timeline: Timeline, trigger: Trigger) -> Self {
        Self {
            timeline,
            trigger,
            phase: Phase::Pending,
        }
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// True while a viewport trigger can still start playback, i.e. while
    /// position updates still matter.
    pub fn awaiting_trigger(&self) -> bool {
        self.phase == Phase::Pending && matches!(self.trigger, Trigger::Viewport(_))
    }

    /// Checks the trigger against the root's current position. Returns
    /// true only on the call that starts playback.
    pub fn observe(&mut self, top: f64, viewport_height: f64, now: f64) -> bool {
        if self.phase != Phase::Pending || !self.trigger.fires(top, viewport_height) {
            return false;
        }
        self.phase = Phase::Playing { started: now };
        true
    }

    pub fn frame(&mut self, now: f64, counts: &[usize]) -> Option<Frame> {
        let Phase::Playing { started } = self.phase else {
            return None;
        };
        let elapsed = (now - started).max(0.0);
        let finished = elapsed >= self.timeline.duration(counts);
        if finished {
            self.phase = Phase::Done;
        }
        Some(Frame {
            progress: self.timeline.sample(elapsed, counts),
            finished,
        })
    }

    pub fn cancel(&mut self) {
        self.phase = Phase::Done;
    }
}

/// A tween that can be pointed at a new destination mid-flight, starting
/// over from wherever it currently is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Follower<const N: usize> {
    from: [f64; N],
    to: [f64; N],
    started: f64,
    duration: f64,
    ease: Ease,
}

impl<const N: usize> Follower<N> {
    pub fn new(at: [f64; N], duration: f64, ease: Ease) -> Self {
        Self {
            from: at,
            to: at,
            started: 0.0,
            duration,
            ease,
        }
    }

    pub fn retarget(&mut self, to: [f64; N], now: f64) {
        self.from = self.sample(now);
        self.to = to;
        self.started = now;
    }

    pub fn is_settled(&self, now: f64) -> bool {
        self.duration <= 0.0 || now - self.started >= self.duration
    }

    pub fn sample(&self, now: f64) -> [f64; N] {
        let p = if self.duration <= 0.0 {
            1.0
        } else {
            self.ease.apply((now - self.started) / self.duration)
        };
        let mut out = self.from;
        for (o, (a, b)) in out.iter_mut().zip(self.from.iter().zip(self.to.iter())) {
            *o = a + (b - a) * p;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    fn hero_timeline() -> Timeline {
        Timeline::new()
            .then(
                Tween::from(Target::Root, Pose::new().opacity(0.0))
                    .duration(1.0)
                    .ease(Ease::Power3Out),
            )
            .push(
                Tween::from(Target::Selector(".char"), Pose::new().opacity(0.0).y(50.0))
                    .stagger(0.02)
                    .duration(0.8)
                    .ease(Ease::BackOut(1.7)),
                Position::Overlap(0.5),
            )
            .push(
                Tween::from(Target::Selector(".word"), Pose::new().opacity(0.0).y(20.0))
                    .stagger(0.05)
                    .duration(0.8),
                Position::Overlap(0.3),
            )
    }

    #[test]
    fn test_ease_endpoints() {
        let eases = [
            Ease::Linear,
            Ease::Power1Out,
            Ease::Power1InOut,
            Ease::Power2Out,
            Ease::Power3Out,
            Ease::SineInOut,
            Ease::BackOut(1.7),
        ];
        for ease in eases {
            assert!(close(ease.apply(0.0), 0.0), "{ease:?} at 0");
            assert!(close(ease.apply(1.0), 1.0), "{ease:?} at 1");
            assert!(close(ease.apply(-3.0), 0.0));
            assert!(close(ease.apply(7.0), 1.0));
        }
        assert!(Ease::BackOut(1.7).apply(0.7) > 1.0);
        assert!(close(Ease::SineInOut.apply(0.5), 0.5));
    }

    #[test]
    fn test_schedule_overlaps() {
        let tl = hero_timeline();
        // 10 chars, 4 words
        let spans = tl.schedule(&[1, 10, 4]);
        assert!(close(spans[0].start, 0.0));
        assert!(close(spans[0].end, 1.0));
        assert!(close(spans[1].start, 0.5));
        assert!(close(spans[1].end, 0.5 + 0.8 + 0.02 * 9.0));
        assert!(close(spans[2].start, spans[1].end - 0.3));
        assert!(close(tl.duration(&[1, 10, 4]), spans[2].end));
    }

    #[test]
    fn test_overlap_clamps_at_zero() {
        let tl = Timeline::new().push(
            Tween::from(Target::Root, Pose::new().opacity(0.0)),
            Position::Overlap(0.4),
        );
        assert!(close(tl.schedule(&[1])[0].start, 0.0));
    }

    #[test]
    fn test_absolute_positions_run_in_parallel() {
        let tl = Timeline::new()
            .push(
                Tween::from(Target::Root, Pose::new().y(50.0)).duration(0.8),
                Position::At(0.0),
            )
            .push(
                Tween::from(Target::Selector(".bio"), Pose::new().y(50.0))
                    .duration(0.8)
                    .delay(0.3),
                Position::At(0.0),
            );
        let spans = tl.schedule(&[1, 1]);
        assert!(close(spans[1].start, 0.0));
        assert!(close(spans[1].end, 1.1));
        let sample = tl.sample(0.2, &[1, 1]);
        assert!(sample[0][0] > 0.0);
        assert!(close(sample[1][0], 0.0));
    }

    #[test]
    fn test_stagger_progress() {
        let tween = Tween::from(Target::Selector(".x"), Pose::new().opacity(0.0))
            .duration(1.0)
            .stagger(0.5)
            .ease(Ease::Linear);
        assert!(close(tween.progress(0.5, 0), 0.5));
        assert!(close(tween.progress(0.5, 1), 0.0));
        assert!(close(tween.progress(1.0, 1), 0.5));
        assert!(close(tween.span(3), 2.0));
    }

    #[test]
    fn test_player_one_shot() {
        let mut player = Player::new(hero_timeline(), Trigger::Viewport(0.8));
        let counts = [1, 3, 2];
        assert_eq!(player.frame(0.0, &counts), None);

        // below the trigger line
        assert!(!player.observe(900.0, 1000.0, 0.0));
        assert_eq!(player.phase(), Phase::Pending);

        assert!(player.observe(800.0, 1000.0, 2.0));
        assert_eq!(player.phase(), Phase::Playing { started: 2.0 });
        // doesn't restart
        assert!(!player.observe(0.0, 1000.0, 3.0));

        let frame = player.frame(2.1, &counts).unwrap();
        assert!(!frame.finished);
        assert_eq!(frame.progress.len(), 3);
        assert_eq!(frame.progress[1].len(), 3);

        let end = 2.0 + player.timeline().duration(&counts) + 0.01;
        let frame = player.frame(end, &counts).unwrap();
        assert!(frame.finished);
        assert!(frame.progress.iter().flatten().all(|p| close(*p, 1.0)));
        assert!(player.is_done());

        assert_eq!(player.frame(end + 1.0, &counts), None);
        assert!(!player.observe(0.0, 1000.0, end + 1.0));
    }

    #[test]
    fn test_player_cancel() {
        let mut player = Player::new(hero_timeline(), Trigger::Immediate);
        assert!(player.observe(5000.0, 1000.0, 0.0));
        player.cancel();
        assert!(player.is_done());
        assert_eq!(player.frame(0.1, &[1, 1, 1]), None);

        let mut pending = Player::new(hero_timeline(), Trigger::Viewport(0.8));
        pending.cancel();
        assert!(!pending.observe(0.0, 1000.0, 0.0));
    }

    #[test]
    fn test_awaiting_trigger() {
        assert!(!Player::new(hero_timeline(), Trigger::Immediate).awaiting_trigger());

        let mut player = Player::new(hero_timeline(), Trigger::Viewport(0.8));
        assert!(player.awaiting_trigger());
        assert!(!player.observe(900.0, 1000.0, 0.0));
        assert!(player.awaiting_trigger());
        assert!(player.observe(700.0, 1000.0, 0.0));
        assert!(!player.awaiting_trigger());

        let mut cancelled = Player::new(hero_timeline(), Trigger::Viewport(0.8));
        cancelled.cancel();
        assert!(!cancelled.awaiting_trigger());
    }

    #[test]
    fn test_pose_interpolation() {
        let from = Pose::new().y(50.0).opacity(0.0);
        let mid = Pose::interpolate(&from, &Pose::new(), 0.5);
        assert_eq!(mid.y, Some(25.0));
        assert_eq!(mid.opacity, Some(0.5));
        assert_eq!(mid.x, None);
        assert_eq!(mid.to_transform(), "translate(0px, 25px)");
        assert!(!Pose::new().opacity(0.0).has_transform());
    }

    #[test]
    fn test_loop_yoyo() {
        let lp = Loop::new(
            Target::Selector(".hero-image"),
            Pose::new().y(-20.0),
            2.5,
            Ease::Linear,
        );
        assert!(close(lp.sample(0.0), 0.0));
        assert!(close(lp.sample(1.25), 0.5));
        assert!(close(lp.sample(2.5), 1.0));
        assert!(close(lp.sample(3.75), 0.5));
        assert!(close(lp.sample(5.0), 0.0));
        assert_eq!(lp.pose(2.5).y, Some(-20.0));
    }

    #[test]
    fn test_follower_retarget_is_continuous() {
        let mut f = Follower::new([0.0, 0.0], 0.5, Ease::Linear);
        f.retarget([100.0, 50.0], 0.0);
        assert_eq!(f.sample(0.25), [50.0, 25.0]);
        f.retarget([0.0, 0.0], 0.25);
        assert_eq!(f.sample(0.25), [50.0, 25.0]);
        assert_eq!(f.sample(0.75), [0.0, 0.0]);
        assert!(f.is_settled(0.75));
        assert!(!f.is_settled(0.5));
    }

    #[test]
    fn test_counter_value() {
        assert_eq!(counter_value(90.0, 0.0), 0.0);
        assert_eq!(counter_value(90.0, 0.5), 45.0);
        assert_eq!(counter_value(85.0, 1.0), 85.0);
    }

    #[test]
    fn test_fill_grows_width_from_zero() {
        let bar = Tween::fill(Target::Selector(".skill-bar-fill"));
        assert!(bar.fill);
        assert!(!bar.counter);
        // only the width moves; no transform is written
        assert!(!bar.pose_at(0.0).has_transform());
        assert_eq!(bar.pose_at(0.0).opacity, None);
        assert_eq!(fill_width(90.0, 0.0), "0%");
        assert_eq!(fill_width(90.0, 0.5), "45%");
        assert_eq!(fill_width(85.0, 1.0), "85%");
    }
}
