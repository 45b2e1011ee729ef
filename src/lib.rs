//! A single-level side-scrolling platformer.
//!
//! The library is the simulation plus the small collaborator interfaces the
//! frame loop plugs into; the terminal renderer and the loop itself live in
//! the binary.

pub mod audio;
pub mod camera;
pub mod collectibles;
pub mod compute;
pub mod config;
pub mod constants;
pub mod debug;
pub mod enemy;
pub mod entities;
pub mod error;
pub mod input;
pub mod level;
pub mod particles;
pub mod physics;
pub mod player;
