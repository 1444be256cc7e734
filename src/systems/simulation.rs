//! Demo simulation system
//!
//! Advances the demo by a fixed time step:
//! - Spin angle accumulation
//! - Quad vertices through a TRS matrix
//! - Tint and orientation interpolation
//! - Mesh update with change tracking

use crate::config::DemoConfig;
use pony_core::{Mesh, MeshChanges, MeshError};
use pony_math::transformations2d::{
    extract_angle_degrees, extract_rs_matrix, transform_point, trs_matrix_degrees,
};
use pony_math::{Quaternion, RGBAInt, Vector2, Vector3, RGBA};

/// Result of a simulation step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSummary {
    /// Frame number, starting at 1
    pub frame: u32,
    /// Interpolation factor in `[0, 1]`
    pub progress: f32,
    /// Spin of the quad in degrees, in `(-180, 180]`
    pub angle: f32,
    /// Tint written to the mesh
    pub tint: RGBA<f32>,
    /// Current orientation
    pub orientation: Quaternion<f32>,
    /// Forward axis rotated by the orientation
    pub facing: Vector3<f32>,
    /// Mesh parts changed by this step
    pub changes: MeshChanges,
}

impl FrameSummary {
    /// Tint as a packed `0xRRGGBBAA` value
    pub fn packed_tint(&self) -> u32 {
        let tint: RGBAInt<u8> = self.tint.to_int();
        tint.to_packed()
    }
}

/// Runs the demo at a fixed time step
///
/// The quad is kept in local space and re-transformed every step, so errors do not accumulate.
pub struct SimulationSystem {
    config: DemoConfig,
    local_vertices: Vec<Vector2<f32>>,
    mesh: Mesh,
    start_orientation: Quaternion<f32>,
    end_orientation: Quaternion<f32>,
    angle: f32,
    frame: u32,
}

impl SimulationSystem {
    /// Create the demo quad from the configuration
    pub fn new(config: DemoConfig) -> Result<Self, MeshError> {
        let local_vertices = vec![
            Vector2::new(-0.5, -0.5),
            Vector2::new(0.5, -0.5),
            Vector2::new(0.5, 0.5),
            Vector2::new(-0.5, 0.5),
        ];
        let vertices = local_vertices.iter().map(|v| Vector3::new(v.x, v.y, 0.0)).collect();
        let triangles = vec![Vector3::new(0, 1, 2), Vector3::new(0, 2, 3)];
        let mut mesh = Mesh::new(vertices, triangles)?;
        mesh.fill_colors(RGBA::from(config.start_tint));

        let start_orientation =
            Quaternion::create_by_euler_degrees(Vector3::from(config.start_orientation));
        let end_orientation =
            Quaternion::create_by_euler_degrees(Vector3::from(config.end_orientation));

        Ok(Self {
            config,
            local_vertices,
            mesh,
            start_orientation,
            end_orientation,
            angle: 0.0,
            frame: 0,
        })
    }

    /// The demo mesh
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Number of steps taken
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Whether the configured number of frames has run
    pub fn is_finished(&self) -> bool {
        self.frame >= self.config.frames
    }

    /// Run one simulation step
    pub fn step(&mut self) -> Result<FrameSummary, MeshError> {
        self.frame += 1;
        let progress = if self.config.frames == 0 {
            1.0
        } else {
            (self.frame as f32 / self.config.frames as f32).min(1.0)
        };

        // 1. Spin, wrapped to keep the accumulator small
        self.angle = (self.angle + self.config.rotation_speed * self.config.time_step) % 360.0;

        // 2. Transform the quad
        let trs = trs_matrix_degrees(
            Vector2::from(self.config.translation),
            self.angle,
            Vector2::from(self.config.scale),
        );
        let vertices = self
            .local_vertices
            .iter()
            .map(|&v| {
                let p = transform_point(&trs, v);
                Vector3::new(p.x, p.y, 0.0)
            })
            .collect();
        self.mesh.set_vertices(vertices)?;

        // 3. Interpolate tint and orientation
        let start_tint = RGBA::from(self.config.start_tint);
        let tint = start_tint.lerp(RGBA::from(self.config.end_tint), progress);
        self.mesh.fill_colors(tint);
        let orientation = self.start_orientation.slerp(self.end_orientation, progress);

        let summary = FrameSummary {
            frame: self.frame,
            progress,
            angle: extract_angle_degrees(&extract_rs_matrix(&trs)),
            tint,
            orientation,
            facing: orientation * Vector3::forward(),
            changes: self.mesh.take_changes(),
        };
        log::debug!(
            "Frame {}: angle {:.1}, tint {}, facing {}",
            summary.frame,
            summary.angle,
            summary.tint,
            summary.facing
        );
        Ok(summary)
    }
}
