//! Material Definitions
//!
//! `Material` is the plain tag of a particle: what the picker UI asks for and
//! what the render feed writes into the `types` buffer. Ids are stable and
//! exported to JS (`el_*` functions in lib.rs); 0 is reserved for empty.

use serde::Serialize;

pub type MaterialId = u8;

pub const EL_EMPTY: MaterialId = 0;
pub const EL_STONE: MaterialId = 1;
pub const EL_SAND: MaterialId = 2;
pub const EL_WATER: MaterialId = 3;
pub const EL_WOOD: MaterialId = 4;
pub const EL_EXPLOSIVE: MaterialId = 5;
pub const EL_FIRE: MaterialId = 6;
pub const EL_SMOKE: MaterialId = 7;
pub const EL_EXPLOSION_WHITE: MaterialId = 8;
pub const EL_EXPLOSION_YELLOW: MaterialId = 9;
pub const EL_EXPLOSION_RED: MaterialId = 10;

pub const MATERIAL_COUNT: usize = 11;

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    Stone = EL_STONE,
    Sand = EL_SAND,
    Water = EL_WATER,
    Wood = EL_WOOD,
    Explosive = EL_EXPLOSIVE,
    Fire = EL_FIRE,
    Smoke = EL_SMOKE,
    ExplosionWhite = EL_EXPLOSION_WHITE,
    ExplosionYellow = EL_EXPLOSION_YELLOW,
    ExplosionRed = EL_EXPLOSION_RED,
}

impl Material {
    pub const ALL: [Material; 10] = [
        Material::Stone,
        Material::Sand,
        Material::Water,
        Material::Wood,
        Material::Explosive,
        Material::Fire,
        Material::Smoke,
        Material::ExplosionWhite,
        Material::ExplosionYellow,
        Material::ExplosionRed,
    ];

    /// Materials offered by the picker UI.
    pub const PLACEABLE: [Material; 5] = [
        Material::Sand,
        Material::Water,
        Material::Stone,
        Material::Wood,
        Material::Explosive,
    ];

    #[inline]
    pub fn id(self) -> MaterialId {
        self as MaterialId
    }

    pub fn from_id(id: MaterialId) -> Option<Material> {
        match id {
            EL_STONE => Some(Material::Stone),
            EL_SAND => Some(Material::Sand),
            EL_WATER => Some(Material::Water),
            EL_WOOD => Some(Material::Wood),
            EL_EXPLOSIVE => Some(Material::Explosive),
            EL_FIRE => Some(Material::Fire),
            EL_SMOKE => Some(Material::Smoke),
            EL_EXPLOSION_WHITE => Some(Material::ExplosionWhite),
            EL_EXPLOSION_YELLOW => Some(Material::ExplosionYellow),
            EL_EXPLOSION_RED => Some(Material::ExplosionRed),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Material::Stone => "stone",
            Material::Sand => "sand",
            Material::Water => "water",
            Material::Wood => "wood",
            Material::Explosive => "explosive",
            Material::Fire => "fire",
            Material::Smoke => "smoke",
            Material::ExplosionWhite => "explosion_white",
            Material::ExplosionYellow => "explosion_yellow",
            Material::ExplosionRed => "explosion_red",
        }
    }

    /// Base colour as 0xRRGGBB.
    pub fn base_rgb(self) -> u32 {
        match self {
            Material::Stone => 0x888888,
            Material::Sand => 0xd2b48c,
            Material::Water => 0x3399ff,
            Material::Wood => 0x8b5a2b,
            Material::Explosive => 0xff0000,
            Material::Fire => 0xff7a1a,
            Material::Smoke => 0x5a5a5a,
            Material::ExplosionWhite => 0xffffff,
            Material::ExplosionYellow => 0xffdd00,
            Material::ExplosionRed => 0xff4444,
        }
    }

    /// Placement footprint (square side, anchored at the requested cell).
    pub fn footprint(self) -> u32 {
        match self {
            Material::Stone => 2,
            Material::Wood => 6,
            _ => 1,
        }
    }

    /// Only these carry a free-flight velocity.
    #[inline]
    pub fn is_ballistic(self) -> bool {
        matches!(self, Material::Sand | Material::Water)
    }
}

/// 0xRRGGBB -> opaque ABGR (little-endian canvas byte order).
#[inline]
pub const fn rgb_to_abgr(rgb: u32) -> u32 {
    let r = (rgb >> 16) & 0xFF;
    let g = (rgb >> 8) & 0xFF;
    let b = rgb & 0xFF;
    0xFF00_0000 | (b << 16) | (g << 8) | r
}
