//! Recorded hand pose: bone name -> local position and rotation.
//!
//! A [`HandPose`] is the immutable pose store built once from a list of
//! `(name, position, rotation)` bone entries, usually captured from a live
//! hand skeleton by external authoring tooling. It is attached to pose
//! grabbables (one per handedness) and played back on a
//! [`PoseAnimator`](super::poseanimator::PoseAnimator).
//!
//! Duplicate bone names resolve last-write-wins on the lenient constructor,
//! matching the asset layer's dictionary conversion; the strict constructor
//! rejects them instead.

use glam::{Quat, Vec3};
use log::warn;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Local position and rotation of a single bone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BonePose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl BonePose {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }
}

/// Errors from strict pose construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoseError {
    /// The same bone name appeared twice in the input list.
    #[error("duplicate bone name: {0}")]
    DuplicateBone(String),

    /// A bone entry had an empty name.
    #[error("empty bone name")]
    EmptyBoneName,
}

/// Immutable mapping from bone name to recorded [`BonePose`].
#[derive(Debug, Clone, Default)]
pub struct HandPose {
    bones: FxHashMap<String, BonePose>,
}

impl HandPose {
    /// Build a pose from bone entries. Empty names are skipped and duplicate
    /// names overwrite the earlier entry; both are logged.
    pub fn from_bones<I>(bones: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec3, Quat)>,
    {
        let mut map = FxHashMap::default();
        for (name, position, rotation) in bones {
            if name.is_empty() {
                warn!("HandPose: skipping bone with empty name");
                continue;
            }
            if map
                .insert(name.clone(), BonePose::new(position, rotation))
                .is_some()
            {
                warn!("HandPose: duplicate bone '{name}', keeping the later entry");
            }
        }
        Self { bones: map }
    }

    /// Build a pose, rejecting empty or duplicate bone names.
    pub fn try_from_bones<I>(bones: I) -> Result<Self, PoseError>
    where
        I: IntoIterator<Item = (String, Vec3, Quat)>,
    {
        let mut map = FxHashMap::default();
        for (name, position, rotation) in bones {
            if name.is_empty() {
                return Err(PoseError::EmptyBoneName);
            }
            if map
                .insert(name.clone(), BonePose::new(position, rotation))
                .is_some()
            {
                return Err(PoseError::DuplicateBone(name));
            }
        }
        Ok(Self { bones: map })
    }

    /// Recorded pose for `name`, if the pose contains that bone.
    pub fn lookup(&self, name: &str) -> Option<&BonePose> {
        self.bones.get(name)
    }

    pub fn len(&self) -> usize {
        self.bones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BonePose)> {
        self.bones.iter()
    }

    /// Clone the underlying map, e.g. to become an animator's active pose.
    pub(crate) fn to_map(&self) -> FxHashMap<String, BonePose> {
        self.bones.clone()
    }
}
