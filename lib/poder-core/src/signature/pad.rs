use super::{MAX_SURFACE_SIDE, SignatureDataUrl, SignatureError, raster};

/// Position in CSS pixels, relative to the top-left corner of the surface
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

pub type Stroke = Vec<Point>;

/// Drawing surface fed by pointer (mouse or touch) events.
///
/// The backing surface is `css size * device pixel ratio` pixels, so strokes
/// stay sharp on high density screens.
#[derive(Clone, Debug)]
pub struct SignaturePad {
    css_width: f32,
    css_height: f32,
    ratio: f32,
    strokes: Vec<Stroke>,
    drawing: bool,
}

impl SignaturePad {
    pub fn new(css_width: f32, css_height: f32, device_pixel_ratio: f32) -> Self {
        let mut pad = Self {
            css_width: 0.0,
            css_height: 0.0,
            ratio: 1.0,
            strokes: vec![],
            drawing: false,
        };
        pad.resize(css_width, css_height, device_pixel_ratio);
        pad
    }

    /// Fits the surface to its container. Like resizing a canvas, this wipes
    /// whatever was drawn.
    pub fn resize(&mut self, css_width: f32, css_height: f32, device_pixel_ratio: f32) {
        self.css_width = sanitize(css_width, 0.0);
        self.css_height = sanitize(css_height, 0.0);
        self.ratio = sanitize(device_pixel_ratio, 1.0).max(1.0);
        self.clear();
    }

    pub fn pointer_down(&mut self, point: Point) {
        self.drawing = true;
        self.strokes.push(vec![point]);
    }

    pub fn pointer_move(&mut self, point: Point) {
        if !self.drawing {
            return;
        }

        if let Some(stroke) = self.strokes.last_mut() {
            stroke.push(point);
        }
    }

    pub fn pointer_up(&mut self) {
        self.drawing = false;
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
        self.drawing = false;
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn device_pixel_ratio(&self) -> f32 {
        self.ratio
    }

    /// Backing surface size in device pixels.
    ///
    /// Fails when either side rounds to zero or exceeds [`MAX_SURFACE_SIDE`].
    pub fn surface_size(&self) -> Result<(u32, u32), SignatureError> {
        let width = self.css_width * self.ratio;
        let height = self.css_height * self.ratio;

        match (surface_side(width), surface_side(height)) {
            (Some(width), Some(height)) => Ok((width, height)),
            _ => Err(SignatureError::InvalidSurfaceSize { width, height }),
        }
    }

    pub fn to_png(&self) -> Result<Vec<u8>, SignatureError> {
        let (width, height) = self.surface_size()?;
        raster::render_png(width, height, self.ratio, &self.strokes)
    }

    pub fn to_data_url(&self) -> Result<String, SignatureError> {
        SignatureDataUrl::new("image/png", self.to_png()?).encode()
    }
}

fn sanitize(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        fallback
    }
}

fn surface_side(device_pixels: f32) -> Option<u32> {
    let side = device_pixels.round();
    (1.0..=MAX_SURFACE_SIDE as f32)
        .contains(&side)
        .then_some(side as u32)
}
