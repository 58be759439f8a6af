//! Simulation core for a spiral-tower platforming game: deterministic
//! layout generation, input sampling with per-frame snapshots, character
//! physics with heuristic platform collision, an orbit follow camera and
//! derived climb progress. Rendering and page UI live outside; they read
//! the published state each frame.

pub mod camera;
pub mod collision;
pub mod config;
pub mod game;
pub mod input;
pub mod player;
pub mod progress;
pub mod tower;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod hud;
