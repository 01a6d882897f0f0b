//! Headless scene host: drives the interaction and locomotion scripts the way
//! an engine would, against deliberately simple stand-ins for engine services.
//!
//! # Invariants
//! - Per-frame callbacks run once per [`Scene::frame`]; physics callbacks run
//!   at a fixed cadence from an accumulator.
//! - Every observable script transition is appended to the event log.
//! - Same config and input sequence produce the same [`Scene::state_hash`].

pub mod animator;
pub mod body;
pub mod camera;
pub mod config;
pub mod level;
pub mod props;
pub mod scene;
pub mod script;

pub use animator::RecordingAnimator;
pub use body::KinematicCapsule;
pub use camera::{CameraConfig, FollowCamera};
pub use config::{SceneConfig, SceneError};
pub use level::{Aabb, Level};
pub use props::{Door, Lamp};
pub use scene::{Player, Scene, SceneEvent};
pub use script::{AnalogInput, InputScript, ScriptStep};
