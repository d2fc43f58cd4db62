//! Canvas-2D wheel drawing
//!
//! Draws the wheel from a [`WheelLayout`] and the current cumulative
//! rotation. The pointer itself is a DOM element above the canvas; this
//! module only paints the disc. Angles here follow the layout's drawing
//! frame: canvas angle 0 is 3 o'clock, slices carry the -90 degree anchor.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::spin::WheelLayout;

/// Slice fill palette (muted teal/cyan/sky tones, cycled)
const COLORS: [&str; 12] = [
    "#0d9488", "#14b8a6", "#5eead4", "#99f6e4", "#0891b2", "#06b6d4", "#67e8f9", "#a5f3fc",
    "#0284c7", "#0ea5e9", "#7dd3fc", "#bae6fd",
];

/// Longest label painted before truncation
const MAX_LABEL_CHARS: usize = 12;

/// Paint the wheel at `rotation` degrees onto a square canvas of `size`
/// CSS pixels.
pub fn draw_wheel(ctx: &CanvasRenderingContext2d, layout: &WheelLayout, rotation: f64, size: f64) {
    let center = size / 2.0;
    let radius = center - 10.0;

    ctx.clear_rect(0.0, 0.0, size, size);
    if layout.is_empty() {
        return;
    }

    ctx.save();
    let _ = ctx.translate(center, center);
    let _ = ctx.rotate(rotation.to_radians());

    let n = layout.len();
    let font_size = (200.0 / n as f64).clamp(10.0, 16.0);

    for (i, label) in layout.labels().iter().enumerate() {
        let start = layout.slice_start(i).to_radians();
        let end = layout.slice_end(i).to_radians();

        ctx.begin_path();
        ctx.move_to(0.0, 0.0);
        let _ = ctx.arc(0.0, 0.0, radius, start, end);
        ctx.close_path();

        ctx.set_fill_style_str(COLORS[i % COLORS.len()]);
        ctx.fill();
        ctx.set_stroke_style_str("white");
        ctx.set_line_width(2.0);
        ctx.stroke();

        // Label at 0.75r along the slice's center ray, rotated to read
        // outward, right-aligned toward the rim
        let anchor = layout.label_anchor(i, radius as f32, 0.75);
        ctx.save();
        let _ = ctx.translate(anchor.x as f64, anchor.y as f64);
        let _ = ctx.rotate((start + end) / 2.0);
        ctx.set_font(&format!("600 {font_size}px Inter, system-ui, sans-serif"));
        ctx.set_fill_style_str("#1f2937");
        ctx.set_text_align("right");
        ctx.set_text_baseline("middle");

        let text = truncate_label(label);
        let _ = ctx.fill_text(&text, 0.0, 0.0);
        ctx.restore();
    }

    ctx.restore();

    // Center hub
    ctx.begin_path();
    let _ = ctx.arc(center, center, 25.0, 0.0, 2.0 * PI);
    ctx.set_fill_style_str("white");
    ctx.fill();
    ctx.set_stroke_style_str("#e5e7eb");
    ctx.set_line_width(2.0);
    ctx.stroke();
}

fn truncate_label(label: &str) -> String {
    if label.chars().count() > MAX_LABEL_CHARS {
        let head: String = label.chars().take(MAX_LABEL_CHARS - 1).collect();
        format!("{head}\u{2026}")
    } else {
        label.to_string()
    }
}
