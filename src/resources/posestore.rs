//! Hand-pose asset registry.
//!
//! [`HandPoseAsset`] is the serializable shape the external asset layer
//! produces: a flat list of named bone poses. [`PoseAssetStore`] keeps
//! loaded assets keyed by name so multiple grabbables can share them, and
//! offers a JSON convenience loader. What format the assets ultimately live
//! in on disk is the asset layer's business; only this in-memory shape is
//! part of the core contract.

use bevy_ecs::prelude::Resource;
use glam::{Quat, Vec3};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::handpose::HandPose;

/// One named bone pose inside an asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonePoseEntry {
    pub name: String,
    pub position: Vec3,
    pub rotation: Quat,
}

/// Serializable list of bone poses, convertible into a [`HandPose`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HandPoseAsset {
    pub bones: Vec<BonePoseEntry>,
}

impl HandPoseAsset {
    /// Append a bone pose. Duplicates are allowed here; conversion to a
    /// [`HandPose`] resolves them last-write-wins.
    pub fn add_pose(&mut self, name: impl Into<String>, position: Vec3, rotation: Quat) {
        self.bones.push(BonePoseEntry {
            name: name.into(),
            position,
            rotation,
        });
    }

    /// Build the runtime pose store from this asset.
    pub fn to_pose(&self) -> HandPose {
        HandPose::from_bones(
            self.bones
                .iter()
                .map(|b| (b.name.clone(), b.position, b.rotation)),
        )
    }
}

/// Errors from loading pose assets.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to parse pose asset: {0}")]
    Json(#[from] serde_json::Error),
}

/// Central registry of reusable pose assets keyed by string IDs.
#[derive(Resource, Debug, Default)]
pub struct PoseAssetStore {
    assets: FxHashMap<String, HandPoseAsset>,
}

impl PoseAssetStore {
    pub fn insert(&mut self, key: impl Into<String>, asset: HandPoseAsset) {
        self.assets.insert(key.into(), asset);
    }

    pub fn get(&self, key: &str) -> Option<&HandPoseAsset> {
        self.assets.get(key)
    }

    /// Parse a JSON-encoded asset and register it under `key`.
    pub fn insert_json(&mut self, key: impl Into<String>, json: &str) -> Result<(), AssetError> {
        let asset: HandPoseAsset = serde_json::from_str(json)?;
        self.assets.insert(key.into(), asset);
        Ok(())
    }

    /// The runtime pose for `key`, if such an asset is registered.
    pub fn pose(&self, key: &str) -> Option<HandPose> {
        self.assets.get(key).map(HandPoseAsset::to_pose)
    }
}
