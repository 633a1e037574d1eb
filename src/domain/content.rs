//! Material manifest for the picker UI
//!
//! The host builds its palette from this JSON instead of hard-coding ids and
//! colours.

use serde::Serialize;

use crate::domain::elements::{Material, MaterialId};

#[derive(Debug, Clone, Serialize)]
pub struct MaterialManifestEntry {
    pub id: MaterialId,
    pub key: &'static str,
    /// 0xRRGGBB
    pub color: u32,
    pub footprint: u32,
    pub placeable: bool,
}

pub fn material_manifest() -> Vec<MaterialManifestEntry> {
    Material::ALL
        .iter()
        .map(|&m| MaterialManifestEntry {
            id: m.id(),
            key: m.key(),
            color: m.base_rgb(),
            footprint: m.footprint(),
            placeable: Material::PLACEABLE.contains(&m),
        })
        .collect()
}

pub fn material_manifest_json() -> String {
    serde_json::to_string(&material_manifest()).unwrap_or_else(|_| "[]".to_string())
}
