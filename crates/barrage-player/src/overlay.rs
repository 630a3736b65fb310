//! egui overlay: the projectile field, emitter marker and parameter panel
//!
//! Simulation units map 1:1 to egui points, so the emitter origin from the
//! config is also its on-screen position.

use barrage_core::{Color, Vec2};
use barrage_patterns::{ParamField, PatternKind, Sandbox};
use std::f64::consts::{FRAC_PI_2, TAU};

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(12, 12, 18);
const MARKER_RING: egui::Color32 = egui::Color32::from_rgb(200, 100, 100);
const MARKER_CORE: egui::Color32 = egui::Color32::BLACK;
const MARKER_RADIUS: f32 = 20.0;
const MARKER_CORE_RADIUS: f32 = 14.0;
const COOLDOWN_RING_RADIUS: f64 = 26.0;
const PHASE_INDICATOR_LENGTH: f64 = 34.0;

/// Something the user clicked in the panel, applied after the egui pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayAction {
    SelectPattern(PatternKind),
    ApplyPreset,
    ClearField,
}

impl OverlayAction {
    pub fn apply(self, sandbox: &mut Sandbox) {
        match self {
            OverlayAction::SelectPattern(kind) => sandbox.select_pattern(kind),
            OverlayAction::ApplyPreset => sandbox.apply_preset(sandbox.kind()),
            OverlayAction::ClearField => sandbox.clear_field(),
        }
    }
}

/// Draw the whole overlay for one frame
pub fn show(ctx: &egui::Context, sandbox: &mut Sandbox) -> Vec<OverlayAction> {
    draw_field(ctx, sandbox);
    param_panel(ctx, sandbox)
}

fn draw_field(ctx: &egui::Context, sandbox: &Sandbox) {
    let painter = ctx.layer_painter(egui::LayerId::background());
    let screen = ctx.screen_rect();
    painter.rect_filled(screen, 0.0, BACKGROUND);

    let kind = sandbox.kind();
    let fill = color32(kind.color());
    let outline = egui::Stroke::new(1.0, egui::Color32::WHITE);

    for p in sandbox.field() {
        let center = to_pos(p.position);
        let r = p.radius() as f32;
        if !screen.expand(r + 2.0).contains(center) {
            continue;
        }
        painter.circle_filled(center, r, fill);
        painter.circle_stroke(center, r + 2.0, outline);
    }

    let emitter = sandbox.emitter();
    let origin = emitter.origin();
    let center = to_pos(origin);

    painter.circle_filled(center, MARKER_RADIUS, MARKER_RING);
    painter.circle_filled(center, MARKER_CORE_RADIUS, MARKER_CORE);

    let progress = emitter.cooldown_progress(sandbox.params());
    let arc = cooldown_arc(origin, COOLDOWN_RING_RADIUS, progress);
    if arc.len() >= 2 {
        painter.add(egui::Shape::line(arc, egui::Stroke::new(2.0, fill)));
    }

    if kind == PatternKind::Spiral {
        let tip = origin + Vec2::from_angle(emitter.phase_angle().to_radians()) * PHASE_INDICATOR_LENGTH;
        painter.line_segment([center, to_pos(tip)], egui::Stroke::new(2.0, fill));
    }

    let label = format!("Pattern: {}  (1-5 to change)", sandbox.current_pattern_name());
    painter.text(
        screen.left_top() + egui::vec2(12.0, 10.0),
        egui::Align2::LEFT_TOP,
        label,
        egui::FontId::proportional(20.0),
        egui::Color32::WHITE,
    );
    painter.text(
        screen.left_top() + egui::vec2(12.0, 36.0),
        egui::Align2::LEFT_TOP,
        format!("Projectiles: {}", sandbox.field().len()),
        egui::FontId::proportional(14.0),
        egui::Color32::from_rgb(180, 180, 200),
    );
}

fn param_panel(ctx: &egui::Context, sandbox: &mut Sandbox) -> Vec<OverlayAction> {
    let mut actions = Vec::new();
    let current = sandbox.kind();

    egui::SidePanel::right("params_panel")
        .resizable(false)
        .default_width(190.0)
        .show(ctx, |ui| {
            ui.heading("Pattern");
            ui.horizontal_wrapped(|ui| {
                for kind in PatternKind::ALL {
                    let text = format!("{} {}", kind.index() + 1, kind.name());
                    // Clicking the active pattern still restarts it on an empty field
                    if ui.selectable_label(kind == current, text).clicked() {
                        actions.push(OverlayAction::SelectPattern(kind));
                    }
                }
            });

            ui.separator();
            ui.heading("Parameters");

            let params = sandbox.params_mut();
            for field in ParamField::ALL {
                let bounds = field.bounds();
                let mut value = params.get(field);
                let mut slider =
                    egui::Slider::new(&mut value, bounds.min..=bounds.max).text(field.label());
                if field.is_integer() {
                    slider = slider.integer();
                }
                if ui.add(slider).changed() {
                    params.set(field, value);
                }
            }

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Preset (P)").clicked() {
                    actions.push(OverlayAction::ApplyPreset);
                }
                if ui.button("Clear (C)").clicked() {
                    actions.push(OverlayAction::ClearField);
                }
            });
        });

    actions
}

/// Points along a clockwise arc starting at twelve o'clock covering
/// `progress` of a full turn. Empty when there is nothing to draw.
fn cooldown_arc(center: Vec2, radius: f64, progress: f64) -> Vec<egui::Pos2> {
    let progress = progress.clamp(0.0, 1.0);
    if progress <= 0.0 {
        return Vec::new();
    }
    let segments = ((64.0 * progress).ceil() as usize).max(1);
    let sweep = TAU * progress;
    (0..=segments)
        .map(|i| {
            let a = -FRAC_PI_2 + sweep * i as f64 / segments as f64;
            to_pos(center + Vec2::from_angle(a) * radius)
        })
        .collect()
}

fn to_pos(v: Vec2) -> egui::Pos2 {
    egui::pos2(v.x as f32, v.y as f32)
}

fn color32(c: Color) -> egui::Color32 {
    let [r, g, b, a] = c.to_rgba8();
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}
