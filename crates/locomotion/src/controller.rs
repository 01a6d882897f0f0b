use glam::Vec3;
use techart_input::InputSource;

use crate::config::MotionConfig;
use crate::error::SetupError;
use crate::host::{AnimationSink, CharacterBody, NoAnimation, Raycast, ViewBasis};
use crate::integrate::{PlanarBasis, integrate_motion};
use crate::intent::{BodySnapshot, Intent, IntentInput, decide_intent};
use crate::state::{MotionState, Phase};

/// Collects collaborators for a [`LocomotionController`].
pub struct LocomotionBuilder<B, A = NoAnimation> {
    config: MotionConfig,
    body: Option<B>,
    animator: Option<A>,
}

impl<B: CharacterBody> LocomotionBuilder<B, NoAnimation> {
    pub fn new(config: MotionConfig) -> Self {
        Self {
            config,
            body: None,
            animator: None,
        }
    }

    /// Attach an animation sink. Optional.
    pub fn animator<S: AnimationSink>(self, sink: S) -> LocomotionBuilder<B, S> {
        LocomotionBuilder {
            config: self.config,
            body: self.body,
            animator: Some(sink),
        }
    }
}

impl<B: CharacterBody, A: AnimationSink> LocomotionBuilder<B, A> {
    /// Attach the character body. Required.
    pub fn body(mut self, body: B) -> Self {
        self.body = Some(body);
        self
    }

    pub fn build(self) -> Result<LocomotionController<B, A>, SetupError> {
        self.config.validate()?;
        let body = self.body.ok_or(SetupError::MissingBody)?;
        if self.animator.is_none() {
            tracing::warn!("no animation sink attached; animation parameters and sprint are disabled");
        }
        Ok(LocomotionController {
            config: self.config,
            state: MotionState::default(),
            input: IntentInput::default(),
            body,
            animator: self.animator,
        })
    }
}

/// Third-person movement driven by two host callbacks.
///
/// [`LocomotionController::frame`] runs once per rendered frame and samples
/// input; [`LocomotionController::fixed_tick`] runs at the physics cadence and
/// moves the body using the most recently sampled axes.
pub struct LocomotionController<B, A = NoAnimation> {
    config: MotionConfig,
    state: MotionState,
    input: IntentInput,
    body: B,
    animator: Option<A>,
}

impl<B: CharacterBody> LocomotionController<B, NoAnimation> {
    pub fn builder(config: MotionConfig) -> LocomotionBuilder<B, NoAnimation> {
        LocomotionBuilder::new(config)
    }
}

impl<B: CharacterBody, A: AnimationSink> LocomotionController<B, A> {
    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    /// Input sampled by the last [`LocomotionController::frame`].
    pub fn last_input(&self) -> IntentInput {
        self.input
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    pub fn animator(&self) -> Option<&A> {
        self.animator.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase(self.body.is_grounded())
    }

    /// Per-frame step: sample input, probe head clearance, update state and
    /// animation parameters.
    pub fn frame(&mut self, input: &impl InputSource, world: &impl Raycast) -> Intent {
        let sampled = IntentInput::sample(input);
        let snapshot = BodySnapshot {
            animated: self.animator.is_some(),
            ..BodySnapshot::observe(&self.body, world)
        };
        let intent = decide_intent(&sampled, &snapshot, self.state);

        if let Some(animator) = self.animator.as_mut() {
            intent.animation.apply(animator);
        }

        let before = self.state;
        let after = intent.state;
        if before.is_crouching != after.is_crouching {
            tracing::debug!(crouching = after.is_crouching, "crouch toggled");
        }
        if !before.is_jumping && sampled.jump && snapshot.grounded {
            if after.is_jumping {
                tracing::debug!("jump started");
            } else {
                tracing::debug!("jump suppressed by head clearance");
            }
        }
        if before.is_jumping && !after.is_jumping {
            tracing::debug!(elapsed = before.jump_elapsed, "jump cut short by head hit");
        }

        self.state = after;
        self.input = sampled;
        intent
    }

    /// Physics step: integrate and submit the displacement to the body.
    pub fn fixed_tick(&mut self, dt: f32, view: &impl ViewBasis) -> Vec3 {
        let basis = PlanarBasis::from_view(view);
        let was_jumping = self.state.is_jumping;
        let displacement =
            integrate_motion(&mut self.state, self.input.axes(), &self.config, dt, &basis);
        if was_jumping && !self.state.is_jumping {
            tracing::debug!("jump finished");
        }
        tracing::trace!(?displacement, "move");
        self.body.move_and_slide(displacement);
        displacement
    }
}
