//! A spinning wireframe scene projected into screen space.

use std::fmt;

use crate::{
    config::{Config, Projection},
    frame::Frame,
    linalg::{trig, vec3, Axis, Matrix, Vector},
};

/// Rotation speed around Y, in degrees per second.
const SPIN_SPEED: f64 = 45.0;
/// Ratio of the X rotation to the Y rotation.
const TILT: f64 = 0.5;

const Z_NEAR: f64 = 0.1;
const Z_FAR: f64 = 100.0;

/// Returns the 8 corners of an axis-aligned cube with edge length `size`, centered on the origin.
pub fn cube(size: f64) -> Vec<Vector> {
    let h = size / 2.0;
    let mut corners = Vec::with_capacity(8);
    for x in [-h, h] {
        for y in [-h, h] {
            for z in [-h, h] {
                corners.push(vec3(x, y, z));
            }
        }
    }
    corners
}

/// A camera orbiting the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vector,
    pub target: Vector,
    pub up: Vector,
}

impl Camera {
    /// Places the camera on the +Z axis at `distance` from the origin, looking at the origin.
    pub fn orbit(distance: f64) -> Self {
        Self {
            eye: vec3(0.0, 0.0, distance),
            target: vec3(0.0, 0.0, 0.0),
            up: Vector::Y,
        }
    }

    /// Returns the matrix transforming world space into view space.
    ///
    /// In view space, the camera sits at the origin and looks along +Z.
    pub fn view(&self) -> Matrix {
        Matrix::look_at(self.eye, self.target, self.up).fast_inverse()
    }
}

/// The size of the screen the scene is projected onto.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the X scale to pass to [`Matrix::projection`], which is `height / width`.
    pub fn aspect(&self) -> f64 {
        self.height / self.width
    }

    /// Returns the distance in cells of a virtual screen that spans `fov` degrees vertically.
    pub fn focal_length(&self, fov: f64) -> f64 {
        self.height / 2.0 / trig::radians(fov / 2.0).tan()
    }

    /// Maps normalized device coordinates (`-1..=1` on both axes, Y up) to screen cells.
    pub fn to_screen(&self, ndc: Vector) -> ScreenPoint {
        ScreenPoint {
            x: (ndc.x + 1.0) * 0.5 * self.width,
            y: (1.0 - ndc.y) * 0.5 * self.height,
        }
    }

    /// Returns whether `p` lies on the screen.
    pub fn contains(&self, p: ScreenPoint) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

/// A projected vertex, in screen cells from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl fmt::Display for ScreenPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// A mesh viewed through a camera, ready to be projected frame by frame.
#[derive(Debug, Clone)]
pub struct Scene {
    vertices: Vec<Vector>,
    camera: Camera,
    viewport: Viewport,
    fov: f64,
    projection: Projection,
}

impl Scene {
    /// Creates a scene with a unit cube, viewed from a distance of 3.
    pub fn new(config: &Config) -> Self {
        Self {
            vertices: cube(1.0),
            camera: Camera::orbit(3.0),
            viewport: Viewport::new(config.width.into(), config.height.into()),
            fov: config.fov,
            projection: config.projection,
        }
    }

    pub fn with_vertices(mut self, vertices: Vec<Vector>) -> Self {
        self.vertices = vertices;
        self
    }

    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = camera;
        self
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Returns the model matrix at `frame`: a spin around Y, followed by a slower tilt around X.
    pub fn model(&self, frame: &Frame) -> Matrix {
        let angle = frame.elapsed_secs() * SPIN_SPEED;
        Matrix::rotation_y(angle).rotate_axis(Axis::X, angle * TILT)
    }

    /// Projects every vertex of the scene at `frame` into screen space.
    pub fn render(&self, frame: &Frame) -> Vec<ScreenPoint> {
        let model_view = self.model(frame) * self.camera.view();
        match self.projection {
            Projection::Matrix => {
                let mvp = model_view.apply_projection(
                    self.fov,
                    self.viewport.aspect(),
                    Z_NEAR,
                    Z_FAR,
                );
                self.vertices
                    .iter()
                    .map(|v| self.viewport.to_screen(v.transform_by(&mvp)))
                    .collect()
            }
            Projection::Canvas => {
                let Viewport { width, height } = self.viewport;
                let focal = self.viewport.focal_length(self.fov);
                self.vertices
                    .iter()
                    .map(|v| {
                        let p = v
                            .transform_by(&model_view)
                            .project(width, height, focal, 0.0);
                        // `project` keeps view-space Y pointing up.
                        ScreenPoint {
                            x: p.x,
                            y: height - p.y,
                        }
                    })
                    .collect()
            }
        }
    }
}
