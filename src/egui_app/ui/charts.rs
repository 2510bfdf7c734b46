//! Painter-drawn charts: bars, grouped bars, pie, unit-square lines and a
//! heat grid.

use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Shape, Stroke, StrokeKind, Ui};

use super::style;
use crate::egui_app::view_model::{BarDatum, CoOccurrenceGrid, OverfittingRow, PieSlice};

const AXIS_MARGIN_LEFT: f32 = 44.0;
const AXIS_MARGIN_BOTTOM: f32 = 36.0;
const AXIS_MARGIN_TOP: f32 = 18.0;
const Y_TICKS: usize = 4;

/// Round `max` up to 1, 2 or 5 times a power of ten.
pub(crate) fn nice_axis_max(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    let normalized = max / magnitude;
    let step = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    step * magnitude
}

/// Horizontal slot for bar `index` of `count`, with `gap` as a fraction of the slot.
pub(crate) fn bar_slot(plot: Rect, index: usize, count: usize, gap: f32) -> (f32, f32) {
    let count = count.max(1) as f32;
    let slot = plot.width() / count;
    let inset = slot * gap.clamp(0.0, 0.9) / 2.0;
    let left = plot.left() + slot * index as f32 + inset;
    (left, left + slot - 2.0 * inset)
}

/// Map a point in the unit square (y up) into `plot`.
pub(crate) fn unit_to_screen(plot: Rect, point: [f64; 2]) -> Pos2 {
    let x = point[0].clamp(0.0, 1.0) as f32;
    let y = point[1].clamp(0.0, 1.0) as f32;
    egui::pos2(
        plot.left() + x * plot.width(),
        plot.bottom() - y * plot.height(),
    )
}

/// Start and sweep angles for each slice, clockwise from twelve o'clock.
pub(crate) fn pie_angles(fractions: &[f64]) -> Vec<(f32, f32)> {
    let mut start = -FRAC_PI_2;
    fractions
        .iter()
        .map(|fraction| {
            let sweep = fraction.clamp(0.0, 1.0) as f32 * TAU;
            let angles = (start, sweep);
            start += sweep;
            angles
        })
        .collect()
}

/// Convex fan pieces covering one wedge. Each piece spans at most a quarter turn.
pub(crate) fn wedge_polygons(center: Pos2, radius: f32, start: f32, sweep: f32) -> Vec<Vec<Pos2>> {
    if sweep <= 0.0 {
        return Vec::new();
    }
    let pieces = (sweep / FRAC_PI_2).ceil().max(1.0) as usize;
    let piece_sweep = sweep / pieces as f32;
    (0..pieces)
        .map(|piece| {
            let piece_start = start + piece_sweep * piece as f32;
            let steps = 12;
            let mut points = Vec::with_capacity(steps + 2);
            points.push(center);
            for step in 0..=steps {
                let angle = piece_start + piece_sweep * step as f32 / steps as f32;
                points.push(center + radius * egui::vec2(angle.cos(), angle.sin()));
            }
            points
        })
        .collect()
}

fn plot_rect(outer: Rect) -> Rect {
    Rect::from_min_max(
        egui::pos2(outer.left() + AXIS_MARGIN_LEFT, outer.top() + AXIS_MARGIN_TOP),
        egui::pos2(outer.right() - 8.0, outer.bottom() - AXIS_MARGIN_BOTTOM),
    )
}

fn draw_y_axis(painter: &egui::Painter, plot: Rect, max: f64, decimals: usize) {
    let palette = style::palette();
    for tick in 0..=Y_TICKS {
        let fraction = tick as f32 / Y_TICKS as f32;
        let y = plot.bottom() - fraction * plot.height();
        painter.line_segment(
            [egui::pos2(plot.left(), y), egui::pos2(plot.right(), y)],
            Stroke::new(1.0, palette.grid_soft),
        );
        let value = max * fraction as f64;
        painter.text(
            egui::pos2(plot.left() - 6.0, y),
            Align2::RIGHT_CENTER,
            format!("{value:.decimals$}"),
            FontId::proportional(11.0),
            palette.text_muted,
        );
    }
    painter.line_segment(
        [plot.left_bottom(), plot.right_bottom()],
        Stroke::new(1.0, palette.grid_strong),
    );
}

fn axis_label(painter: &egui::Painter, pos: Pos2, text: &str) {
    painter.text(
        pos,
        Align2::CENTER_TOP,
        text,
        FontId::proportional(11.0),
        style::palette().text_muted,
    );
}

/// Vertical bars with value labels.
pub(crate) fn bar_chart(ui: &mut Ui, bars: &[BarDatum], height: f32, color: Color32) {
    let width = ui.available_width().max(200.0);
    let (response, painter) = ui.allocate_painter(egui::vec2(width, height), egui::Sense::hover());
    let plot = plot_rect(response.rect);
    let max = nice_axis_max(bars.iter().map(|bar| bar.value).fold(0.0, f64::max));
    draw_y_axis(&painter, plot, max, 0);
    for (index, bar) in bars.iter().enumerate() {
        let (left, right) = bar_slot(plot, index, bars.len(), 0.3);
        let top = plot.bottom() - (bar.value / max) as f32 * plot.height();
        let rect = Rect::from_min_max(egui::pos2(left, top), egui::pos2(right, plot.bottom()));
        painter.rect_filled(rect, 0.0, color);
        painter.text(
            egui::pos2(rect.center().x, top - 2.0),
            Align2::CENTER_BOTTOM,
            format!("{}", bar.value),
            FontId::proportional(11.0),
            style::palette().text_primary,
        );
        axis_label(
            &painter,
            egui::pos2(rect.center().x, plot.bottom() + 6.0),
            &bar.label,
        );
    }
}

/// Train and test F1 bars per class on a fixed `[0, 1]` axis.
pub(crate) fn grouped_bar_chart(ui: &mut Ui, rows: &[OverfittingRow], height: f32) {
    let width = ui.available_width().max(200.0);
    let (response, painter) = ui.allocate_painter(egui::vec2(width, height), egui::Sense::hover());
    let plot = plot_rect(response.rect);
    draw_y_axis(&painter, plot, 1.0, 2);
    for (index, row) in rows.iter().enumerate() {
        let (left, right) = bar_slot(plot, index, rows.len(), 0.3);
        let mid = (left + right) / 2.0;
        for (value, span, color) in [
            (row.train_f1, (left, mid), style::train_bar_color()),
            (row.test_f1, (mid, right), style::test_bar_color()),
        ] {
            let Some(value) = value else {
                continue;
            };
            let top = plot.bottom() - value.clamp(0.0, 1.0) as f32 * plot.height();
            let rect = Rect::from_min_max(
                egui::pos2(span.0 + 1.0, top),
                egui::pos2(span.1 - 1.0, plot.bottom()),
            );
            painter.rect_filled(rect, 0.0, color);
            painter.text(
                egui::pos2(rect.center().x, top - 2.0),
                Align2::CENTER_BOTTOM,
                format!("{value:.2}"),
                FontId::proportional(10.0),
                style::palette().text_primary,
            );
        }
        axis_label(&painter, egui::pos2(mid, plot.bottom() + 6.0), &row.class_name);
    }
    ui.horizontal(|ui| {
        legend_entry(ui, style::train_bar_color(), "Training");
        legend_entry(ui, style::test_bar_color(), "Test");
    });
}

/// Pie with a legend listing counts and shares.
pub(crate) fn pie_chart(ui: &mut Ui, slices: &[PieSlice], radius: f32) {
    ui.horizontal(|ui| {
        let size = egui::vec2(radius * 2.0 + 8.0, radius * 2.0 + 8.0);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let center = response.rect.center();
        let fractions: Vec<f64> = slices.iter().map(|slice| slice.fraction).collect();
        for (index, (start, sweep)) in pie_angles(&fractions).into_iter().enumerate() {
            for points in wedge_polygons(center, radius, start, sweep) {
                painter.add(Shape::convex_polygon(
                    points,
                    style::series_color(index),
                    Stroke::NONE,
                ));
            }
        }
        painter.circle_stroke(center, radius, style::card_border());
        ui.vertical(|ui| {
            for (index, slice) in slices.iter().enumerate() {
                legend_entry(
                    ui,
                    style::series_color(index),
                    &format!(
                        "{}: {} ({:.1}%)",
                        slice.label,
                        slice.count,
                        slice.fraction * 100.0
                    ),
                );
            }
        });
    });
}

/// Line through unit-square points, e.g. ROC or precision/recall curves.
pub(crate) fn unit_line_chart(
    ui: &mut Ui,
    points: &[[f64; 2]],
    height: f32,
    axes: (&str, &str),
    color: Color32,
    chance_diagonal: bool,
) {
    let width = ui.available_width().max(200.0);
    let (response, painter) = ui.allocate_painter(egui::vec2(width, height), egui::Sense::hover());
    let plot = plot_rect(response.rect);
    let palette = style::palette();
    draw_y_axis(&painter, plot, 1.0, 2);
    painter.rect_stroke(plot, 0.0, Stroke::new(1.0, palette.grid_strong), StrokeKind::Inside);
    if chance_diagonal {
        painter.line_segment(
            [plot.left_bottom(), plot.right_top()],
            Stroke::new(1.0, palette.grid_strong),
        );
    }
    let screen: Vec<Pos2> = points.iter().map(|point| unit_to_screen(plot, *point)).collect();
    if screen.len() >= 2 {
        painter.add(Shape::line(screen, Stroke::new(2.0, color)));
    }
    axis_label(&painter, egui::pos2(plot.center().x, plot.bottom() + 18.0), axes.0);
    painter.text(
        egui::pos2(plot.left() + 4.0, plot.top() - 2.0),
        Align2::LEFT_BOTTOM,
        axes.1,
        FontId::proportional(11.0),
        palette.text_muted,
    );
}

/// Label x label grid shaded by count.
pub(crate) fn heat_grid(ui: &mut Ui, grid: &CoOccurrenceGrid, cell: f32) {
    let label_width = 120.0;
    let n = grid.labels.len();
    let size = egui::vec2(label_width + cell * n as f32, label_width * 0.4 + cell * n as f32);
    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let origin = response.rect.min + egui::vec2(label_width, label_width * 0.4);
    let palette = style::palette();
    for (col, label) in grid.labels.iter().enumerate() {
        painter.text(
            egui::pos2(origin.x + cell * (col as f32 + 0.5), origin.y - 4.0),
            Align2::CENTER_BOTTOM,
            abbreviate(label, 6),
            FontId::proportional(10.0),
            palette.text_muted,
        );
    }
    for (row, label) in grid.labels.iter().enumerate() {
        let y = origin.y + cell * row as f32;
        painter.text(
            egui::pos2(origin.x - 6.0, y + cell / 2.0),
            Align2::RIGHT_CENTER,
            label,
            FontId::proportional(11.0),
            palette.text_muted,
        );
        for col in 0..n {
            let count = grid.cells[row][col];
            let fraction = if grid.max == 0 {
                0.0
            } else {
                count as f32 / grid.max as f32
            };
            let rect = Rect::from_min_size(
                egui::pos2(origin.x + cell * col as f32, y),
                egui::vec2(cell, cell),
            );
            painter.rect_filled(rect.shrink(1.0), 0.0, style::heat_color(fraction));
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                count.to_string(),
                FontId::proportional(11.0),
                if fraction > 0.5 {
                    palette.bg_primary
                } else {
                    palette.text_primary
                },
            );
        }
    }
}

fn abbreviate(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        label.to_string()
    } else {
        let head: String = label.chars().take(max_chars).collect();
        format!("{head}.")
    }
}

fn legend_entry(ui: &mut Ui, color: Color32, text: &str) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
        ui.painter().rect_filled(rect, 0.0, color);
        ui.label(text);
    });
}
