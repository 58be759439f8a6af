use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

use crate::config::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PlatformKind {
    Spawn,
    Normal,
    Bridge,
    Checkpoint,
}

/// One axis-aligned block of the tower. `size` is full extents.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Platform {
    pub id: usize,
    pub level: u32,
    pub kind: PlatformKind,
    pub position: Vec3,
    pub size: Vec3,
    pub color: &'static str,
}

impl Platform {
    pub fn top(&self) -> f32 {
        self.position.y + self.size.y / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.position.y - self.size.y / 2.0
    }
}

/// Collision-irrelevant background element (floating bricks, skyline).
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Decor {
    pub position: Vec3,
    pub size: Vec3,
    pub color: &'static str,
    pub spin: f32,
}

const COLOR_EASY: &str = "#4FC3F7";
const COLOR_MEDIUM: &str = "#E91E63";
const COLOR_HARD: &str = "#9C27B0";
const COLOR_EXPERT: &str = "#F44336";
const COLOR_BRIDGE: &str = "#FF9800";
const COLOR_GREEN: &str = "#4CAF50";
const COLOR_SKYLINE: &str = "#757575";

const DECOR_COLORS: [&str; 4] = [COLOR_EASY, COLOR_MEDIUM, COLOR_HARD, COLOR_GREEN];

/// Closed-form position of a spiral level's platform center.
pub fn level_position(level: u32) -> Vec3 {
    let angle = level as f32 / PLATFORMS_PER_ROTATION * TAU;
    let height = BASE_HEIGHT + level as f32 * HEIGHT_INCREMENT;
    let radius = BASE_RADIUS + (level as f32 * 0.2).sin();
    Vec3::new(angle.cos() * radius, height, angle.sin() * radius)
}

// Footprint shrinks with height.
fn tier(height: f32) -> (f32, &'static str) {
    if height < 10.0 {
        (3.0, COLOR_EASY)
    } else if height < 20.0 {
        (2.5, COLOR_MEDIUM)
    } else if height < 30.0 {
        (2.0, COLOR_HARD)
    } else {
        (1.8, COLOR_EXPERT)
    }
}

/// The generated tower. Built once at world init; both the renderer and the
/// collision pass query this same set, in declaration order: the spawn pad,
/// then per level its platform, its bridge (every 4th level), and its
/// checkpoint marker (every 8th level).
pub struct Tower {
    platforms: Vec<Platform>,
    // descriptors of level L occupy platforms[level_start[L]..level_start[L+1]]
    level_start: Vec<usize>,
}

impl Tower {
    pub fn generate(total_levels: u32) -> Self {
        let mut platforms = vec![Platform {
            id: 0,
            level: 0,
            kind: PlatformKind::Spawn,
            position: Vec3::ZERO,
            size: Vec3::new(6.0, PLATFORM_THICKNESS, 6.0),
            color: COLOR_GREEN,
        }];
        let mut level_start = Vec::with_capacity(total_levels as usize + 1);

        for level in 0..total_levels {
            level_start.push(platforms.len());
            let position = level_position(level);
            let (side, color) = tier(position.y);

            let id = platforms.len();
            platforms.push(Platform {
                id,
                level,
                kind: PlatformKind::Normal,
                position,
                size: Vec3::new(side, PLATFORM_THICKNESS, side),
                color,
            });

            if level % 4 == 1 && level > 0 {
                let id = platforms.len();
                platforms.push(Platform {
                    id,
                    level,
                    kind: PlatformKind::Bridge,
                    position: (position + level_position(level - 1)) / 2.0,
                    size: Vec3::new(1.5, PLATFORM_THICKNESS, 1.5),
                    color: COLOR_BRIDGE,
                });
            }

            if level % 8 == 0 && level > 0 {
                let id = platforms.len();
                platforms.push(Platform {
                    id,
                    level,
                    kind: PlatformKind::Checkpoint,
                    position: position + Vec3::new(0.0, 1.0, 0.0),
                    size: Vec3::new(1.0, 2.0, 1.0),
                    color: COLOR_GREEN,
                });
            }
        }
        level_start.push(platforms.len());

        Self {
            platforms,
            level_start,
        }
    }

    /// Every descriptor, spawn pad first. Render-facing.
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn spawn_pad(&self) -> &Platform {
        &self.platforms[0]
    }

    /// Spiral descriptors whose level could support a character at height
    /// `y`, in declaration order. The level index bounds derive from `y`
    /// directly, so the collision pass never scans the whole tower.
    pub fn near(&self, y: f32) -> &[Platform] {
        let total = self.level_start.len() - 1;
        let lo = (((y - 3.0) / HEIGHT_INCREMENT).floor().max(0.0) as usize).min(total);
        let hi = ((((y + 3.0) / HEIGHT_INCREMENT).floor() + 1.0).max(0.0) as usize).min(total);
        if lo >= hi {
            return &[];
        }
        &self.platforms[self.level_start[lo]..self.level_start[hi]]
    }

    /// The checkpoint marker stacked on `level`, if that level has one.
    pub fn checkpoint_at(&self, level: u32) -> Option<&Platform> {
        let total = self.level_start.len() - 1;
        if level as usize >= total {
            return None;
        }
        let range = self.level_start[level as usize]..self.level_start[level as usize + 1];
        self.platforms[range]
            .iter()
            .find(|p| p.kind == PlatformKind::Checkpoint)
    }
}

/// Randomized background decor: floating bricks above the tower and a few
/// skyline blocks near the ground. Pure data for the renderer.
pub fn scatter_decor<R: Rng>(rng: &mut R) -> Vec<Decor> {
    let mut decor = Vec::with_capacity(12);
    for i in 0..8 {
        decor.push(Decor {
            position: Vec3::new(
                (rng.random::<f32>() - 0.5) * 40.0,
                rng.random::<f32>() * 20.0 + 10.0,
                (rng.random::<f32>() - 0.5) * 40.0,
            ),
            size: Vec3::ONE,
            color: DECOR_COLORS[i % 4],
            spin: (rng.random::<f32>() - 0.5) * 0.02,
        });
    }
    for _ in 0..4 {
        decor.push(Decor {
            position: Vec3::new(
                (rng.random::<f32>() - 0.5) * 80.0,
                rng.random::<f32>() * 5.0,
                (rng.random::<f32>() - 0.5) * 80.0,
            ),
            size: Vec3::new(3.0, 8.0, 3.0),
            color: COLOR_SKYLINE,
            spin: 0.0,
        });
    }
    decor
}
