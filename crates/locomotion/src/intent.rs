use glam::Vec3;
use techart_input::{Action, Axis, InputSource};

use crate::config::{HEAD_PROBE_FACTOR, RUN_SPEED_THRESHOLD};
use crate::host::{AnimParam, AnimationSink, CharacterBody, Raycast};
use crate::integrate::MoveAxes;
use crate::state::MotionState;

/// Input sampled once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IntentInput {
    pub horizontal: f32,
    pub vertical: f32,
    /// Jump axis fully engaged.
    pub jump: bool,
    /// Sprint axis fully engaged.
    pub sprint: bool,
    /// Crouch action went down this frame.
    pub crouch_toggled: bool,
}

impl IntentInput {
    pub fn sample(input: &impl InputSource) -> Self {
        Self {
            horizontal: input.axis(Axis::Horizontal),
            vertical: input.axis(Axis::Vertical),
            jump: input.axis(Axis::Jump) >= 1.0,
            sprint: input.axis(Axis::Fire3) >= 1.0,
            crouch_toggled: input.action_pressed(Action::Crouch),
        }
    }

    pub fn axes(&self) -> MoveAxes {
        MoveAxes {
            horizontal: self.horizontal,
            vertical: self.vertical,
        }
    }
}

/// What the body and scene report at the start of a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BodySnapshot {
    pub grounded: bool,
    /// Horizontal component of the resolved velocity.
    pub planar_speed: f32,
    /// The head probe hit something.
    pub head_blocked: bool,
    /// An animation sink is attached. Sprint state and the grounded
    /// parameters only refresh when it is.
    pub animated: bool,
}

impl BodySnapshot {
    pub fn observe(body: &impl CharacterBody, world: &impl Raycast) -> Self {
        let v = body.velocity();
        Self {
            grounded: body.is_grounded(),
            planar_speed: Vec3::new(v.x, 0.0, v.z).length(),
            head_blocked: head_probe(body, world),
            animated: false,
        }
    }
}

/// Cast upward from the capsule center for half its height plus a margin.
pub fn head_probe(body: &impl CharacterBody, world: &impl Raycast) -> bool {
    let capsule = body.capsule();
    let origin = body.transform().transform_point(capsule.center);
    let reach = capsule.height / 2.0 * HEAD_PROBE_FACTOR;
    world.raycast(origin, Vec3::Y, reach)
}

/// Animation parameters for one frame. `None` means "leave unchanged".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimationFrame {
    pub crouch: Option<bool>,
    pub run: Option<bool>,
    pub sprint: Option<bool>,
    pub air: bool,
}

impl AnimationFrame {
    pub fn apply<S: AnimationSink + ?Sized>(&self, sink: &mut S) {
        let grounded_params = [
            (AnimParam::Crouch, self.crouch),
            (AnimParam::Run, self.run),
            (AnimParam::Sprint, self.sprint),
        ];
        for (param, value) in grounded_params {
            if let Some(value) = value {
                sink.set_bool(param, value);
            }
        }
        sink.set_bool(AnimParam::Air, self.air);
    }
}

/// Output of [`decide_intent`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intent {
    pub state: MotionState,
    pub animation: AnimationFrame,
}

/// Per-frame decision step.
///
/// Crouch flips on the input edge. Sprint state and the run, sprint and
/// crouch parameters only refresh while grounded with an animation sink
/// attached; without one the character never sprints. A jump starts whenever jump is held on the ground,
/// whatever the crouch or sprint state. A blocked head probe cancels any jump
/// in progress, including one started this frame.
pub fn decide_intent(input: &IntentInput, body: &BodySnapshot, state: MotionState) -> Intent {
    let mut next = state;

    if input.crouch_toggled {
        next.is_crouching = !next.is_crouching;
    }

    let mut animation = AnimationFrame {
        air: !body.grounded,
        ..AnimationFrame::default()
    };

    if body.grounded && body.animated {
        let running = body.planar_speed > RUN_SPEED_THRESHOLD;
        next.is_sprinting = running && input.sprint;
        animation.crouch = Some(next.is_crouching);
        animation.run = Some(running);
        animation.sprint = Some(next.is_sprinting);
    }

    if input.jump && body.grounded {
        next.is_jumping = true;
    }

    if body.head_blocked {
        next.reset_jump();
    }

    Intent {
        state: next,
        animation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Capsule;
    use techart_common::Transform;

    fn grounded(speed: f32) -> BodySnapshot {
        BodySnapshot {
            grounded: true,
            planar_speed: speed,
            head_blocked: false,
            animated: true,
        }
    }

    #[test]
    fn crouch_flips_on_edge() {
        let input = IntentInput {
            crouch_toggled: true,
            ..IntentInput::default()
        };
        let once = decide_intent(&input, &grounded(0.0), MotionState::default());
        assert!(once.state.is_crouching);
        let twice = decide_intent(&input, &grounded(0.0), once.state);
        assert!(!twice.state.is_crouching);
    }

    #[test]
    fn crouch_without_edge_is_kept() {
        let state = MotionState {
            is_crouching: true,
            ..MotionState::default()
        };
        let out = decide_intent(&IntentInput::default(), &grounded(0.0), state);
        assert!(out.state.is_crouching);
    }

    #[test]
    fn crouch_flips_in_the_air_too() {
        let input = IntentInput {
            crouch_toggled: true,
            ..IntentInput::default()
        };
        let out = decide_intent(&input, &BodySnapshot::default(), MotionState::default());
        assert!(out.state.is_crouching);
        assert_eq!(out.animation.crouch, None);
    }

    #[test]
    fn sprint_needs_running_speed() {
        let input = IntentInput {
            sprint: true,
            ..IntentInput::default()
        };
        let slow = decide_intent(&input, &grounded(0.9), MotionState::default());
        assert!(!slow.state.is_sprinting);
        assert_eq!(slow.animation.run, Some(false));

        let fast = decide_intent(&input, &grounded(1.5), MotionState::default());
        assert!(fast.state.is_sprinting);
        assert_eq!(fast.animation.run, Some(true));
        assert_eq!(fast.animation.sprint, Some(true));
    }

    #[test]
    fn no_sink_means_no_sprint() {
        let input = IntentInput {
            sprint: true,
            ..IntentInput::default()
        };
        let body = BodySnapshot {
            animated: false,
            ..grounded(5.0)
        };
        let out = decide_intent(&input, &body, MotionState::default());
        assert!(!out.state.is_sprinting);
        assert_eq!(out.animation.run, None);
        assert_eq!(out.animation.sprint, None);
        assert!(!out.animation.air);
    }

    #[test]
    fn sprint_state_is_frozen_while_airborne() {
        let state = MotionState {
            is_sprinting: true,
            ..MotionState::default()
        };
        let airborne = BodySnapshot {
            grounded: false,
            ..grounded(0.0)
        };
        let out = decide_intent(&IntentInput::default(), &airborne, state);
        assert!(out.state.is_sprinting);
        assert_eq!(out.animation.sprint, None);
        assert!(out.animation.air);
    }

    #[test]
    fn jump_starts_only_when_grounded() {
        let input = IntentInput {
            jump: true,
            ..IntentInput::default()
        };
        let out = decide_intent(&input, &grounded(0.0), MotionState::default());
        assert!(out.state.is_jumping);
        assert!(!out.animation.air);

        let out = decide_intent(&input, &BodySnapshot::default(), MotionState::default());
        assert!(!out.state.is_jumping);
    }

    #[test]
    fn crouching_sprint_jump_is_reachable() {
        let input = IntentInput {
            jump: true,
            sprint: true,
            ..IntentInput::default()
        };
        let state = MotionState {
            is_crouching: true,
            ..MotionState::default()
        };
        let out = decide_intent(&input, &grounded(3.0), state);
        assert!(out.state.is_jumping && out.state.is_crouching && out.state.is_sprinting);
    }

    #[test]
    fn head_hit_cancels_jump_mid_arc() {
        let state = MotionState {
            is_jumping: true,
            jump_elapsed: 0.4,
            ..MotionState::default()
        };
        let body = BodySnapshot {
            grounded: false,
            head_blocked: true,
            ..grounded(0.0)
        };
        let out = decide_intent(&IntentInput::default(), &body, state);
        assert!(!out.state.is_jumping);
        assert_eq!(out.state.jump_elapsed, 0.0);
    }

    #[test]
    fn head_hit_cancels_jump_started_this_frame() {
        let input = IntentInput {
            jump: true,
            ..IntentInput::default()
        };
        let body = BodySnapshot {
            head_blocked: true,
            ..grounded(0.0)
        };
        let out = decide_intent(&input, &body, MotionState::default());
        assert!(!out.state.is_jumping);
    }

    #[derive(Default)]
    struct Recorder(Vec<(AnimParam, bool)>);

    impl AnimationSink for Recorder {
        fn set_bool(&mut self, param: AnimParam, value: bool) {
            self.0.push((param, value));
        }
    }

    #[test]
    fn animation_frame_skips_unset_params() {
        let mut sink = Recorder::default();
        AnimationFrame {
            air: true,
            ..AnimationFrame::default()
        }
        .apply(&mut sink);
        assert_eq!(sink.0, vec![(AnimParam::Air, true)]);
    }

    #[test]
    fn animation_frame_writes_grounded_params_in_order() {
        let mut sink = Recorder::default();
        let out = decide_intent(&IntentInput::default(), &grounded(2.0), MotionState::default());
        out.animation.apply(&mut sink);
        assert_eq!(
            sink.0,
            vec![
                (AnimParam::Crouch, false),
                (AnimParam::Run, true),
                (AnimParam::Sprint, false),
                (AnimParam::Air, false),
            ]
        );
    }

    struct Body {
        transform: Transform,
        velocity: Vec3,
    }

    impl CharacterBody for Body {
        fn is_grounded(&self) -> bool {
            true
        }
        fn velocity(&self) -> Vec3 {
            self.velocity
        }
        fn transform(&self) -> Transform {
            self.transform
        }
        fn capsule(&self) -> Capsule {
            Capsule::default()
        }
        fn move_and_slide(&mut self, _displacement: Vec3) {}
    }

    /// Ceiling plane at a fixed height.
    struct Ceiling(f32);

    impl Raycast for Ceiling {
        fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> bool {
            direction.y > 0.0 && origin.y <= self.0 && (self.0 - origin.y) <= max_distance
        }
    }

    #[test]
    fn head_probe_reach_is_half_height_times_margin() {
        let body = Body {
            transform: Transform::from_position(Vec3::new(0.0, 0.0, 0.0)),
            velocity: Vec3::ZERO,
        };
        // Center at y = 1, reach = 1.1.
        assert!(head_probe(&body, &Ceiling(2.05)));
        assert!(!head_probe(&body, &Ceiling(2.2)));
    }

    #[test]
    fn snapshot_uses_planar_speed() {
        let body = Body {
            transform: Transform::default(),
            velocity: Vec3::new(3.0, -9.0, 4.0),
        };
        let snap = BodySnapshot::observe(&body, &Ceiling(100.0));
        assert!(snap.grounded);
        assert!((snap.planar_speed - 5.0).abs() < 1e-6);
        assert!(!snap.head_blocked);
    }
}
