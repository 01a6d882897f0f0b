use glam::Vec3;
use serde::Serialize;
use std::sync::Arc;
use techart_input::InputMap;
use techart_interact::{InteractionToggle, Trigger};
use techart_locomotion::{CharacterBody, LocomotionController, MotionState, Phase};

use crate::animator::RecordingAnimator;
use crate::body::KinematicCapsule;
use crate::camera::FollowCamera;
use crate::config::{SceneConfig, SceneError};
use crate::level::Level;
use crate::props::{Door, Lamp};
use crate::script::InputScript;

/// A record of every observable transition in the scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SceneEvent {
    LightToggled { on: bool },
    DoorUsed { open: bool },
    CrouchToggled { crouching: bool },
    JumpStarted { tick: u64 },
    /// The jump ran its full duration.
    JumpFinished { tick: u64 },
    /// The head probe hit something and cleared the jump.
    HeadBlocked { tick: u64 },
    Landed { tick: u64, position: Vec3 },
    Moved { tick: u64, position: Vec3 },
}

impl SceneEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            SceneEvent::LightToggled { .. } => "light_toggled",
            SceneEvent::DoorUsed { .. } => "door_used",
            SceneEvent::CrouchToggled { .. } => "crouch_toggled",
            SceneEvent::JumpStarted { .. } => "jump_started",
            SceneEvent::JumpFinished { .. } => "jump_finished",
            SceneEvent::HeadBlocked { .. } => "head_blocked",
            SceneEvent::Landed { .. } => "landed",
            SceneEvent::Moved { .. } => "moved",
        }
    }
}

pub type Player = LocomotionController<KinematicCapsule, RecordingAnimator>;

/// Headless host for one player, one lamp and one door.
///
/// [`Scene::frame`] plays the role of the engine's frame callback and drives
/// physics from a fixed-timestep accumulator. Key events fed through
/// [`Scene::input_mut`] between frames are consumed by the next frame.
pub struct Scene {
    config: SceneConfig,
    level: Arc<Level>,
    input: InputMap,
    toggle: InteractionToggle,
    lamp: Lamp,
    door: Door,
    player: Player,
    camera: FollowCamera,
    frames: u64,
    tick: u64,
    tick_accumulator: f64,
    event_log: Vec<SceneEvent>,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Result<Self, SceneError> {
        config.validate()?;
        let level = Arc::new(config.level.clone());
        let body = KinematicCapsule::new(
            Arc::clone(&level),
            config.spawn,
            config.capsule,
            config.fixed_timestep,
        );
        let player = LocomotionController::<KinematicCapsule>::builder(config.motion)
            .animator(RecordingAnimator::new())
            .body(body)
            .build()?;

        let toggle = InteractionToggle::with_light(config.light_on);
        let mut lamp = Lamp::new();
        toggle.sync(&mut lamp);

        tracing::info!(
            spawn = ?config.spawn,
            fixed_timestep = config.fixed_timestep,
            ceilings = level.ceilings.len(),
            "scene ready"
        );

        Ok(Self {
            input: InputMap::new(config.input.clone()),
            camera: FollowCamera::from_config(&config.camera),
            config,
            level,
            toggle,
            lamp,
            door: Door::new(),
            player,
            frames: 0,
            tick: 0,
            tick_accumulator: 0.0,
            event_log: Vec::new(),
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Feed key presses and analog values here before calling [`Scene::frame`].
    pub fn input_mut(&mut self) -> &mut InputMap {
        &mut self.input
    }

    pub fn input(&self) -> &InputMap {
        &self.input
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn position(&self) -> Vec3 {
        self.player.body().position()
    }

    pub fn phase(&self) -> Phase {
        self.player.phase()
    }

    pub fn motion_state(&self) -> MotionState {
        self.player.state()
    }

    pub fn animator(&self) -> Option<&RecordingAnimator> {
        self.player.animator()
    }

    pub fn lamp(&self) -> &Lamp {
        &self.lamp
    }

    pub fn door(&self) -> &Door {
        &self.door
    }

    pub fn light_on(&self) -> bool {
        self.toggle.light_on()
    }

    pub fn camera(&self) -> &FollowCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut FollowCamera {
        &mut self.camera
    }

    /// Rendered frames completed.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Physics steps completed.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn events(&self) -> &[SceneEvent] {
        &self.event_log
    }

    pub fn drain_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.event_log)
    }

    /// Advance one rendered frame of `dt` seconds.
    ///
    /// Order: axis smoothing, interaction, locomotion decision, then zero or
    /// more physics steps. Input edges are cleared at the end. A non-finite
    /// or negative `dt` skips the frame and leaves pending input in place.
    pub fn frame(&mut self, dt: f32) {
        if !dt.is_finite() || dt < 0.0 {
            tracing::warn!(dt, "frame skipped: dt must be finite and non-negative");
            return;
        }
        let span = tracing::info_span!("frame", n = self.frames);
        let _enter = span.enter();

        self.input.update(dt);

        match self.toggle.tick(&self.input, &mut self.lamp, &mut self.door) {
            Trigger::ToggleLight => self.event_log.push(SceneEvent::LightToggled {
                on: self.toggle.light_on(),
            }),
            Trigger::Use => self.event_log.push(SceneEvent::DoorUsed {
                open: self.door.is_open(),
            }),
            Trigger::None => {}
        }

        let before = self.player.state();
        let was_grounded = self.player.body().is_grounded();
        let intent = self.player.frame(&self.input, self.level.as_ref());
        let wanted_jump = self.player.last_input().jump && was_grounded;
        let after = intent.state;

        if before.is_crouching != after.is_crouching {
            self.event_log.push(SceneEvent::CrouchToggled {
                crouching: after.is_crouching,
            });
        }
        if !before.is_jumping && after.is_jumping {
            self.event_log
                .push(SceneEvent::JumpStarted { tick: self.tick });
        }
        if (before.is_jumping || wanted_jump) && !after.is_jumping {
            self.event_log
                .push(SceneEvent::HeadBlocked { tick: self.tick });
        }

        self.tick_accumulator += dt as f64;
        let step = self.config.fixed_timestep as f64;
        while self.tick_accumulator >= step {
            self.tick_accumulator -= step;
            self.fixed_step();
        }

        self.input.begin_frame();
        self.frames += 1;
    }

    /// One physics step at the configured fixed timestep.
    pub fn fixed_step(&mut self) {
        let dt = self.config.fixed_timestep;
        let was_jumping = self.player.state().is_jumping;
        let was_grounded = self.player.body().is_grounded();
        let start = self.position();

        self.player.fixed_tick(dt, &self.camera);
        self.tick += 1;

        let position = self.position();
        if was_jumping && !self.player.state().is_jumping {
            self.event_log
                .push(SceneEvent::JumpFinished { tick: self.tick });
        }
        if position != start {
            self.event_log.push(SceneEvent::Moved {
                tick: self.tick,
                position,
            });
        }
        if !was_grounded && self.player.body().is_grounded() {
            tracing::debug!(tick = self.tick, ?position, "landed");
            self.event_log.push(SceneEvent::Landed {
                tick: self.tick,
                position,
            });
        }
    }

    /// Replay `script` for `frames` frames of `dt` seconds each.
    pub fn run_script(&mut self, script: &InputScript, frames: u64, dt: f32) {
        for _ in 0..frames {
            script.apply(self.frames, &mut self.input);
            self.frame(dt);
        }
    }

    /// Deterministic hash of the simulated state for replay comparison.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325; // FNV offset basis
        let mix = |h: &mut u64, bytes: &[u8]| {
            for &b in bytes {
                *h ^= b as u64;
                *h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        let state = self.player.state();
        let body = self.player.body();
        mix(&mut h, &self.frames.to_le_bytes());
        mix(&mut h, &self.tick.to_le_bytes());
        for v in [body.position(), body.velocity()] {
            mix(&mut h, &v.x.to_le_bytes());
            mix(&mut h, &v.y.to_le_bytes());
            mix(&mut h, &v.z.to_le_bytes());
        }
        mix(&mut h, &state.jump_elapsed.to_le_bytes());
        mix(
            &mut h,
            &[
                state.is_jumping as u8,
                state.is_sprinting as u8,
                state.is_crouching as u8,
                body.is_grounded() as u8,
                self.toggle.light_on() as u8,
                self.lamp.is_active() as u8,
                self.door.is_open() as u8,
            ],
        );
        h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_scene_syncs_lamp() {
        let scene = Scene::new(SceneConfig {
            light_on: true,
            ..SceneConfig::default()
        })
        .unwrap();
        assert!(scene.lamp().is_active());
        assert_eq!(scene.lamp().switches(), 1);
        assert!(scene.events().is_empty());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let result = Scene::new(SceneConfig {
            fixed_timestep: -1.0,
            ..SceneConfig::default()
        });
        assert!(matches!(result, Err(SceneError::BadTimestep(_))));
    }

    #[test]
    fn accumulator_runs_fixed_steps() {
        let mut scene = Scene::new(SceneConfig::default()).unwrap();
        scene.frame(0.02);
        assert_eq!(scene.tick(), 1);
        scene.frame(0.04);
        assert_eq!(scene.tick(), 3);
        scene.frame(0.01);
        assert_eq!(scene.tick(), 3);
        assert_eq!(scene.frame_count(), 3);
    }

    #[test]
    fn invalid_dt_skips_the_frame() {
        let mut scene = Scene::new(SceneConfig::default()).unwrap();
        scene.input_mut().press(techart_input::KeyCode::F);
        scene.frame(f32::NAN);
        scene.frame(-0.02);
        scene.frame(f32::INFINITY);
        assert_eq!(scene.frame_count(), 0);
        assert_eq!(scene.tick(), 0);
        assert!(!scene.light_on());

        scene.frame(0.02);
        assert_eq!(scene.tick(), 1);
        assert!(scene.light_on());
    }

    #[test]
    fn idle_on_floor_stays_put() {
        let mut scene = Scene::new(SceneConfig::default()).unwrap();
        for _ in 0..10 {
            scene.frame(0.02);
        }
        assert_eq!(scene.position(), Vec3::ZERO);
        assert!(scene.player().body().is_grounded());
        assert!(scene.events().is_empty());
    }

    #[test]
    fn drain_empties_log() {
        let mut scene = Scene::new(SceneConfig::default()).unwrap();
        scene.input_mut().press(techart_input::KeyCode::F);
        scene.frame(0.02);
        let drained = scene.drain_events();
        assert_eq!(drained, vec![SceneEvent::LightToggled { on: true }]);
        assert!(scene.events().is_empty());
    }
}
