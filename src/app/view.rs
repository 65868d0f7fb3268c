pub const LAYER_SPACING_RANGE: (f32, f32) = (0.0, 160.0);
pub const ROTATE_X_RANGE: (f32, f32) = (-90.0, 90.0);
pub const ROTATE_Z_RANGE: (f32, f32) = (-180.0, 180.0);

const DEFAULT_LAYER_SPACING: f32 = 48.0;
const DEFAULT_ROTATE_X: f32 = 55.0;
const DEFAULT_ROTATE_Z: f32 = -35.0;

/// Stage view toggles and the exploded-layer camera parameters.
///
/// The measurement and token overlays never show together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewOptions {
    measure_overlay: bool,
    token_overlay: bool,
    layer_view: bool,
    layer_spacing: f32,
    rotate_x: f32,
    rotate_z: f32,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            measure_overlay: false,
            token_overlay: false,
            layer_view: false,
            layer_spacing: DEFAULT_LAYER_SPACING,
            rotate_x: DEFAULT_ROTATE_X,
            rotate_z: DEFAULT_ROTATE_Z,
        }
    }
}

impl ViewOptions {
    pub fn measure_overlay(&self) -> bool {
        self.measure_overlay
    }

    pub fn token_overlay(&self) -> bool {
        self.token_overlay
    }

    pub fn layer_view(&self) -> bool {
        self.layer_view
    }

    pub fn layer_spacing(&self) -> f32 {
        self.layer_spacing
    }

    pub fn rotate_x(&self) -> f32 {
        self.rotate_x
    }

    pub fn rotate_z(&self) -> f32 {
        self.rotate_z
    }

    pub fn set_measure_overlay(&mut self, enabled: bool) -> bool {
        let before = *self;
        self.measure_overlay = enabled;
        if enabled {
            self.token_overlay = false;
        }
        before != *self
    }

    pub fn set_token_overlay(&mut self, enabled: bool) -> bool {
        let before = *self;
        self.token_overlay = enabled;
        if enabled {
            self.measure_overlay = false;
        }
        before != *self
    }

    pub fn set_layer_view(&mut self, enabled: bool) -> bool {
        replace_if_changed(&mut self.layer_view, enabled)
    }

    pub fn set_layer_spacing(&mut self, value: f32) -> bool {
        replace_if_changed(&mut self.layer_spacing, clamp(value, LAYER_SPACING_RANGE))
    }

    pub fn set_rotate_x(&mut self, degrees: f32) -> bool {
        replace_if_changed(&mut self.rotate_x, clamp(degrees, ROTATE_X_RANGE))
    }

    pub fn set_rotate_z(&mut self, degrees: f32) -> bool {
        replace_if_changed(&mut self.rotate_z, clamp(degrees, ROTATE_Z_RANGE))
    }
}

fn clamp(value: f32, (min, max): (f32, f32)) -> f32 {
    if value.is_nan() {
        return min;
    }
    value.clamp(min, max)
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
