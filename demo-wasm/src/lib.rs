use tearaway::{
    Bounds, Command, FilterBank, FilterKind, NoOpStepObserver, Session, SessionConfig,
    SoftBodyProperties, Vec2, WorldConfig,
};
use wasm_bindgen::prelude::*;

fn parse_command(name: &str) -> Option<Command> {
    match name {
        "toggle-spawn" => Some(Command::ToggleSpawn),
        "toggle-debug-view" => Some(Command::ToggleDebugView),
        "toggle-gui" => Some(Command::ToggleGui),
        "clear-pool" => Some(Command::ClearPool),
        _ => None,
    }
}

fn flatten(points: Vec<Vec2<f32>>) -> Vec<f32> {
    let mut out = Vec::with_capacity(points.len() * 2);
    for p in &points {
        out.push(p.x);
        out.push(p.y);
    }
    out
}

fn panel_props(width: f32, height: f32) -> SoftBodyProperties<f32> {
    SoftBodyProperties {
        image_width: width,
        image_height: height,
        ..SoftBodyProperties::default()
    }
}

// ---- Cascade Sketch ----
//
// The image-cycling variant: eight pre-filtered copies of the source image,
// gravity straight down, a tear every four seconds, flaps fall off the
// bottom edge.

#[wasm_bindgen]
pub struct CascadeSketch {
    session: Session<f32>,
    props: SoftBodyProperties<f32>,
}

#[wasm_bindgen]
impl CascadeSketch {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, seed: u32) -> Self {
        let props = panel_props(width, height);
        let config = SessionConfig::new()
            .with_spawn_interval_ms(4_000)
            .with_max_bodies(4)
            .with_world(
                WorldConfig::new()
                    .with_gravity(Vec2::new(0.0, 300.0))
                    .with_iterations(4)
                    .with_sub_steps(2),
            );
        CascadeSketch {
            session: Session::new(config, props.clone(), FilterBank::image_variants(8), seed as u64),
            props,
        }
    }

    pub fn update(&mut self, now_ms: u64, dt: f32) {
        self.session
            .update(now_ms, dt, self.props.clone(), &mut NoOpStepObserver);
    }

    pub fn command(&mut self, name: &str) -> bool {
        match parse_command(name) {
            Some(cmd) => {
                self.session.handle(cmd);
                true
            }
            None => false,
        }
    }

    // Panel setters, clamped to the slider ranges.
    pub fn set_mesh_vertex_radius(&mut self, v: f32) { self.props.mesh_vertex_radius = v.clamp(1.0, 30.0); }
    pub fn set_subsection_width(&mut self, v: f32) { self.props.subsection_width = v.clamp(10.0, 500.0); }
    pub fn set_subsection_height(&mut self, v: f32) { self.props.subsection_height = v.clamp(10.0, 500.0); }
    pub fn set_mesh_columns(&mut self, v: usize) { self.props.mesh_columns = v.clamp(1, 100); }
    pub fn set_mesh_rows(&mut self, v: usize) { self.props.mesh_rows = v.clamp(1, 100); }
    pub fn set_vertex_density(&mut self, v: f32) { self.props.vertex_density = v.clamp(0.0, 1.0); }
    pub fn set_vertex_bounce(&mut self, v: f32) { self.props.vertex_bounce = v.clamp(0.0, 1.0); }
    pub fn set_vertex_friction(&mut self, v: f32) { self.props.vertex_friction = v.clamp(0.0, 1.0); }
    pub fn set_joint_frequency(&mut self, v: f32) { self.props.joint_frequency = v.clamp(0.0, 20.0); }
    pub fn set_joint_damping(&mut self, v: f32) { self.props.joint_damping = v.clamp(0.0, 5.0); }

    pub fn subsection_width(&self) -> f32 { self.props.subsection_width }
    pub fn subsection_height(&self) -> f32 { self.props.subsection_height }
    pub fn filter_count(&self) -> usize { self.session.filters().len() }
    pub fn debug_view(&self) -> bool { self.session.debug_view() }
    pub fn gui_hidden(&self) -> bool { self.session.gui_hidden() }

    /// Torn tiles as flat [x, y, filter, ...] triples, draw before bodies.
    pub fn torn_tiles(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.session.torn().len() * 3);
        for t in self.session.torn() {
            out.push(t.origin.x);
            out.push(t.origin.y);
            out.push(t.filter_index as f32);
        }
        out
    }

    pub fn body_count(&self) -> usize {
        self.session.pool().len()
    }

    /// Vertex positions of body `index` as flat [x0, y0, x1, y1, ...].
    pub fn body_positions(&self, index: usize) -> Vec<f32> {
        flatten(self.session.pool().get(index).map(|b| b.positions()).unwrap_or_default())
    }

    /// Normalized texture coordinates of body `index`, same layout.
    pub fn body_texcoords(&self, index: usize) -> Vec<f32> {
        flatten(
            self.session
                .pool()
                .get(index)
                .map(|b| b.texcoords().to_vec())
                .unwrap_or_default(),
        )
    }

    /// Triangle-list indices of body `index`.
    pub fn body_indices(&self, index: usize) -> Vec<u32> {
        self.session
            .pool()
            .get(index)
            .map(|b| b.triangle_indices())
            .unwrap_or_default()
    }

    pub fn body_filter(&self, index: usize) -> usize {
        self.session.pool().get(index).map(|b| b.filter_index()).unwrap_or(0)
    }
}

// ---- Drift Sketch ----
//
// The shader-filter variant: five post-processing filters, gravity pulling
// up and to the left, a floor along the bottom, a tear every three seconds.

#[wasm_bindgen]
pub struct DriftSketch {
    session: Session<f32>,
    props: SoftBodyProperties<f32>,
}

#[wasm_bindgen]
impl DriftSketch {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, seed: u32) -> Self {
        let props = panel_props(width, height);
        let filters = FilterBank::new(vec![
            FilterKind::Sketch,
            FilterKind::Posterize { levels: 5 },
            FilterKind::Displacement,
            FilterKind::Lookup,
            FilterKind::PerlinPixellate,
        ]);
        let config = SessionConfig::new()
            .with_spawn_interval_ms(3_000)
            .with_max_bodies(3)
            .with_world(
                WorldConfig::new()
                    .with_gravity(Vec2::new(-300.0, -300.0))
                    .with_iterations(4)
                    .with_sub_steps(2)
                    .with_bounds(Bounds::Floor(height)),
            );
        DriftSketch {
            session: Session::new(config, props.clone(), filters, seed as u64),
            props,
        }
    }

    pub fn update(&mut self, now_ms: u64, dt: f32) {
        self.session
            .update(now_ms, dt, self.props.clone(), &mut NoOpStepObserver);
    }

    pub fn command(&mut self, name: &str) -> bool {
        match parse_command(name) {
            Some(cmd) => {
                self.session.handle(cmd);
                true
            }
            None => false,
        }
    }

    pub fn set_mesh_vertex_radius(&mut self, v: f32) { self.props.mesh_vertex_radius = v.clamp(1.0, 30.0); }
    pub fn set_subsection_width(&mut self, v: f32) { self.props.subsection_width = v.clamp(10.0, 500.0); }
    pub fn set_subsection_height(&mut self, v: f32) { self.props.subsection_height = v.clamp(10.0, 500.0); }
    pub fn set_mesh_columns(&mut self, v: usize) { self.props.mesh_columns = v.clamp(1, 100); }
    pub fn set_mesh_rows(&mut self, v: usize) { self.props.mesh_rows = v.clamp(1, 100); }
    pub fn set_vertex_density(&mut self, v: f32) { self.props.vertex_density = v.clamp(0.0, 1.0); }
    pub fn set_vertex_bounce(&mut self, v: f32) { self.props.vertex_bounce = v.clamp(0.0, 1.0); }
    pub fn set_vertex_friction(&mut self, v: f32) { self.props.vertex_friction = v.clamp(0.0, 1.0); }
    pub fn set_joint_frequency(&mut self, v: f32) { self.props.joint_frequency = v.clamp(0.0, 20.0); }
    pub fn set_joint_damping(&mut self, v: f32) { self.props.joint_damping = v.clamp(0.0, 5.0); }

    pub fn subsection_width(&self) -> f32 { self.props.subsection_width }
    pub fn subsection_height(&self) -> f32 { self.props.subsection_height }
    pub fn filter_count(&self) -> usize { self.session.filters().len() }
    pub fn debug_view(&self) -> bool { self.session.debug_view() }
    pub fn gui_hidden(&self) -> bool { self.session.gui_hidden() }

    pub fn torn_tiles(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.session.torn().len() * 3);
        for t in self.session.torn() {
            out.push(t.origin.x);
            out.push(t.origin.y);
            out.push(t.filter_index as f32);
        }
        out
    }

    pub fn body_count(&self) -> usize {
        self.session.pool().len()
    }

    pub fn body_positions(&self, index: usize) -> Vec<f32> {
        flatten(self.session.pool().get(index).map(|b| b.positions()).unwrap_or_default())
    }

    pub fn body_texcoords(&self, index: usize) -> Vec<f32> {
        flatten(
            self.session
                .pool()
                .get(index)
                .map(|b| b.texcoords().to_vec())
                .unwrap_or_default(),
        )
    }

    pub fn body_indices(&self, index: usize) -> Vec<u32> {
        self.session
            .pool()
            .get(index)
            .map(|b| b.triangle_indices())
            .unwrap_or_default()
    }

    pub fn body_filter(&self, index: usize) -> usize {
        self.session.pool().get(index).map(|b| b.filter_index()).unwrap_or(0)
    }
}
