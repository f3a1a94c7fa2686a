use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use yew::NodeRef;
use shared::constants::WHEEL_CANVAS_SIZE;
use shared::shared_wheel_game::PrizeList;
use shared::wheel_render::{render_wheel, LabelStyle, Paint, Point, Shadow, WheelSurface, TAU};

const LABEL_FONT_FAMILY: &str = "\"SN Pro\", sans-serif";

/// [`WheelSurface`] backed by a 2D canvas context.
pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    fn from_canvas(canvas: &HtmlCanvasElement) -> Option<Self> {
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { context })
    }

    fn apply_shadow(&self, shadow: Option<Shadow>) {
        match shadow {
            Some(shadow) => {
                self.context.set_shadow_color(shadow.color);
                self.context.set_shadow_blur(shadow.blur);
            }
            None => {
                self.context.set_shadow_color("transparent");
                self.context.set_shadow_blur(0.0);
            }
        }
    }

    fn circle_path(&self, center: Point, radius: f64) {
        self.context.begin_path();
        let _ = self.context.arc(center.x, center.y, radius, 0.0, TAU);
    }
}

impl WheelSurface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, paint: &Paint, shadow: Option<Shadow>) {
        self.context.save();
        self.apply_shadow(shadow);
        match paint {
            Paint::Solid(color) => self.context.set_fill_style_str(color),
            Paint::RadialGradient { inner, outer, stops } => {
                match self
                    .context
                    .create_radial_gradient(center.x, center.y, *inner, center.x, center.y, *outer)
                {
                    Ok(gradient) => {
                        for (offset, color) in stops.iter() {
                            let _ = gradient.add_color_stop(*offset as f32, color);
                        }
                        self.context.set_fill_style_canvas_gradient(&gradient);
                    }
                    Err(_) => {
                        if let Some((_, color)) = stops.first() {
                            self.context.set_fill_style_str(color);
                        }
                    }
                }
            }
        }
        self.circle_path(center, radius);
        self.context.fill();
        self.context.restore();
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: &str, line_width: f64) {
        self.circle_path(center, radius);
        self.context.set_stroke_style_str(color);
        self.context.set_line_width(line_width);
        self.context.stroke();
    }

    fn fill_wedge(&mut self, center: Point, radius: f64, start: f64, end: f64, fill: &str, divider: &str) {
        self.context.begin_path();
        self.context.move_to(center.x, center.y);
        let _ = self.context.arc(center.x, center.y, radius, start, end);
        self.context.close_path();
        self.context.set_fill_style_str(fill);
        self.context.fill();
        self.context.set_stroke_style_str(divider);
        self.context.set_line_width(1.0);
        self.context.stroke();
    }

    fn draw_label(&mut self, text: &str, center: Point, angle: f64, distance: f64, style: &LabelStyle) {
        self.context.save();
        let _ = self.context.translate(center.x, center.y);
        let _ = self.context.rotate(angle);
        self.context.set_text_align("right");
        self.context.set_text_baseline("middle");
        self.context.set_font(&format!("bold {}px {}", style.font_size, LABEL_FONT_FAMILY));
        self.context.set_fill_style_str(style.color);
        self.apply_shadow(Some(style.shadow));
        let _ = self.context.fill_text(text, distance, 0.0);
        self.context.restore();
    }
}

/// Sizes the backing store for the device pixel ratio and scales the context so
/// drawing stays in logical pixels. Resizing resets the transform, so this runs once per mount.
pub fn prepare_canvas(canvas_ref: &NodeRef) {
    let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
        return;
    };
    let dpr = window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let backing = (WHEEL_CANVAS_SIZE * dpr).round() as u32;
    canvas.set_width(backing);
    canvas.set_height(backing);

    if let Some(surface) = CanvasSurface::from_canvas(&canvas) {
        let _ = surface.context.scale(dpr, dpr);
    }
}

/// Draws the wheel at `rotation`. Does nothing until the canvas is mounted.
pub fn draw_wheel(canvas_ref: &NodeRef, prizes: &PrizeList, rotation: f64) {
    if prizes.is_empty() {
        return;
    }
    let Some(mut surface) = canvas_ref
        .cast::<HtmlCanvasElement>()
        .and_then(|canvas| CanvasSurface::from_canvas(&canvas))
    else {
        return;
    };
    render_wheel(&mut surface, WHEEL_CANVAS_SIZE, WHEEL_CANVAS_SIZE, prizes, rotation);
}
