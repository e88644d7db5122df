//! Content domain: serde shapes for the stage file.

use serde::Deserialize;

use crate::interactions::CollectibleKind;
use crate::movement::StageTuning;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StageLayout {
    pub tuning: StageTuning,
    pub character_start_x: f32,
    pub blocks: Vec<BlockDef>,
    pub collectibles: Vec<CollectibleDef>,
    pub pipe: Option<PipeDef>,
    pub portal: Option<PortalDef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlockDef {
    pub x: f32,
    pub bottom: f32,
    #[serde(default)]
    pub reveals: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollectibleDef {
    pub id: String,
    pub x: f32,
    pub bottom: f32,
    pub kind: CollectibleKind,
    /// Visible from the start rather than hidden behind a block bump.
    #[serde(default)]
    pub revealed: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PipeDef {
    pub x: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PortalDef {
    pub x: f32,
    #[serde(default)]
    pub bottom: f32,
}

impl Default for StageLayout {
    fn default() -> Self {
        Self {
            tuning: StageTuning::default(),
            character_start_x: 10.0,
            blocks: vec![
                BlockDef {
                    x: 30.0,
                    bottom: 14.0,
                    reveals: Some("super-shroom".to_string()),
                },
                BlockDef {
                    x: 38.0,
                    bottom: 14.0,
                    reveals: Some("sour-shroom".to_string()),
                },
            ],
            collectibles: vec![
                CollectibleDef {
                    id: "super-shroom".to_string(),
                    x: 30.0,
                    bottom: 19.0,
                    kind: CollectibleKind::PowerUp,
                    revealed: false,
                },
                CollectibleDef {
                    id: "sour-shroom".to_string(),
                    x: 38.0,
                    bottom: 19.0,
                    kind: CollectibleKind::Hazard,
                    revealed: false,
                },
            ],
            pipe: Some(PipeDef { x: 72.0 }),
            portal: Some(PortalDef {
                x: 90.0,
                bottom: 0.0,
            }),
        }
    }
}
