// src/gui/components/radar_chart.rs
//
// Paints the overlaid radar chart directly with the egui painter:
// grid rings, one spoke + label per stat axis, then a translucent fill
// and solid outline per polygon, legend underneath. Geometry itself
// comes ready-made from radar::build_polygons.

use eframe::egui::{self, Align2, Color32, FontId, Mesh, Pos2, Sense, Shape, Stroke, vec2};

use crate::data::capitalize;
use crate::gui::app::App;

const CHART_SIZE: f32 = 380.0;
const LABEL_MARGIN: f32 = 40.0;
const FILL_ALPHA: u8 = 64;
const GRID_RINGS: usize = 4;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    if app.polygons.is_empty() {
        return;
    }

    let (rect, _) = ui.allocate_exact_size(vec2(CHART_SIZE, CHART_SIZE), Sense::hover());
    let painter = ui.painter_at(rect);
    let center = rect.center();
    let radius = rect.width() * 0.5 - LABEL_MARGIN;

    // shared scale: largest magnitude across all polygons maps to the rim
    let max_mag = app
        .polygons
        .iter()
        .flat_map(|p| p.magnitudes.iter())
        .copied()
        .max()
        .unwrap_or(0)
        .max(1) as f32;

    // angle 0 points right, counter-clockwise (screen y grows down)
    let to_screen = |angle: f64, mag: f32| -> Pos2 {
        let r = radius * (mag / max_mag);
        Pos2::new(
            center.x + r * angle.cos() as f32,
            center.y - r * angle.sin() as f32,
        )
    };

    let grid = ui.visuals().weak_text_color().linear_multiply(0.5);
    let label_color = ui.visuals().weak_text_color();

    for ring in 1..=GRID_RINGS {
        let frac = ring as f32 / GRID_RINGS as f32;
        painter.circle_stroke(center, radius * frac, Stroke::new(1.0, grid));
    }

    // spokes + axis labels; axes come from the shared key set
    let axes = app.entities.first().map(|e| e.stats.as_slice()).unwrap_or(&[]);
    let open_angles = &app.polygons[0].angles[..app.polygons[0].angles.len() - 1];
    for (&angle, (stat, _)) in open_angles.iter().zip(axes) {
        painter.line_segment([center, to_screen(angle, max_mag)], Stroke::new(1.0, grid));

        let dir = vec2(angle.cos() as f32, -(angle.sin() as f32));
        let pos = center + dir * (radius + LABEL_MARGIN * 0.5);
        painter.text(
            pos,
            Align2::CENTER_CENTER,
            capitalize(stat),
            FontId::proportional(12.0),
            label_color,
        );
    }

    for poly in &app.polygons {
        let [r, g, b] = poly.color.rgb;
        let outline = Color32::from_rgb(r, g, b);
        let fill = Color32::from_rgba_unmultiplied(r, g, b, FILL_ALPHA);

        // closed point sequence, last == first
        let pts: Vec<Pos2> = poly
            .angles
            .iter()
            .zip(&poly.magnitudes)
            .map(|(&a, &m)| to_screen(a, m as f32))
            .collect();

        // star-shaped about the center, so a triangle fan fills exactly
        let k = (pts.len() - 1) as u32;
        let mut mesh = Mesh::default();
        mesh.colored_vertex(center, fill);
        for p in &pts[..pts.len() - 1] {
            mesh.colored_vertex(*p, fill);
        }
        for i in 0..k {
            mesh.add_triangle(0, 1 + i, 1 + (i + 1) % k);
        }
        painter.add(mesh);
        painter.add(Shape::line(pts, Stroke::new(2.0, outline)));
    }

    // legend
    ui.horizontal(|ui| {
        for poly in &app.polygons {
            let [r, g, b] = poly.color.rgb;
            ui.colored_label(Color32::from_rgb(r, g, b), "■");
            ui.label(poly.label.as_str());
            ui.add_space(8.0);
        }
    });
}
