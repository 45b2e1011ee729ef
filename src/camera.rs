//! Smoothed follow camera.

use crate::constants::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::entities::Camera;

/// Ease the camera toward centring `(target_x, target_y)` and keep the view
/// inside the world.  An axis whose viewport is larger than the world stays
/// pinned at 0.
pub fn update_camera(camera: &mut Camera, target_x: f32, target_y: f32) {
    let desired_x = target_x - camera.viewport_width / 2.0;
    let desired_y = target_y - camera.viewport_height / 2.0;

    camera.x += (desired_x - camera.x) * camera.smoothing;
    camera.y += (desired_y - camera.y) * camera.smoothing;

    camera.x = camera.x.clamp(0.0, (WORLD_WIDTH - camera.viewport_width).max(0.0));
    camera.y = camera.y.clamp(0.0, (WORLD_HEIGHT - camera.viewport_height).max(0.0));
}
