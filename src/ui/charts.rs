// Geometría de los gráficos (donut y barras), separada del pintado para poder
// probarla sin contexto de egui.

use egui::{Color32, Painter, Pos2, Shape, Stroke, vec2};
use std::f32::consts::{FRAC_PI_2, TAU};

/// El donut empieza arriba y avanza en sentido horario (y crece hacia abajo).
pub const START_ANGLE: f32 = -FRAC_PI_2;
/// Hueco entre segmentos, en radianes (~2°).
pub const PADDING_ANGLE: f32 = 0.035;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: f32,
    pub end: f32,
}

impl Segment {
    pub fn sweep(&self) -> f32 {
        self.end - self.start
    }
}

/// Un segmento por valor, en el mismo orden. Con un único valor no hay hueco.
pub fn donut_segments(values: &[usize], padding: f32) -> Vec<Segment> {
    let total: usize = values.iter().sum();
    if total == 0 {
        return values
            .iter()
            .map(|_| Segment {
                start: START_ANGLE,
                end: START_ANGLE,
            })
            .collect();
    }

    let pad = if values.len() > 1 { padding } else { 0.0 };
    let available = (TAU - pad * values.len() as f32).max(0.0);
    let mut angle = START_ANGLE;

    values
        .iter()
        .map(|&v| {
            let sweep = available * v as f32 / total as f32;
            let seg = Segment {
                start: angle,
                end: angle + sweep,
            };
            angle += sweep + pad;
            seg
        })
        .collect()
}

/// Índice del segmento bajo `pos`, si cae dentro del anillo.
pub fn segment_at(
    segments: &[Segment],
    center: Pos2,
    pos: Pos2,
    inner_radius: f32,
    outer_radius: f32,
) -> Option<usize> {
    let d = pos - center;
    let r = d.length();
    if r < inner_radius || r > outer_radius {
        return None;
    }

    let mut angle = d.y.atan2(d.x);
    while angle < START_ANGLE {
        angle += TAU;
    }
    while angle >= START_ANGLE + TAU {
        angle -= TAU;
    }

    segments
        .iter()
        .position(|s| angle >= s.start && angle < s.end)
}

pub fn paint_donut_segment(
    painter: &Painter,
    center: Pos2,
    inner_radius: f32,
    outer_radius: f32,
    segment: Segment,
    color: Color32,
) {
    if segment.sweep() <= 0.0 {
        return;
    }
    // Cada trozo es un cuadrilátero convexo
    let steps = ((segment.sweep() / 0.05).ceil() as usize).max(1);
    let point = |angle: f32, radius: f32| center + vec2(angle.cos(), angle.sin()) * radius;

    for i in 0..steps {
        let a0 = segment.start + segment.sweep() * i as f32 / steps as f32;
        let a1 = segment.start + segment.sweep() * (i + 1) as f32 / steps as f32;
        painter.add(Shape::convex_polygon(
            vec![
                point(a0, outer_radius),
                point(a1, outer_radius),
                point(a1, inner_radius),
                point(a0, inner_radius),
            ],
            color,
            Stroke::NONE,
        ));
    }
}

/// Máximo del eje Y y paso entre marcas: enteros "redondos" (1, 2, 5 × 10^k)
/// con unas cuatro divisiones.
pub fn nice_axis(max_count: usize) -> (usize, usize) {
    if max_count == 0 {
        return (4, 1);
    }
    let raw_step = max_count.div_ceil(4);
    let mut magnitude = 1;
    let step = loop {
        if let Some(s) = [1, 2, 5]
            .iter()
            .map(|m| m * magnitude)
            .find(|s| *s >= raw_step)
        {
            break s;
        }
        magnitude *= 10;
    };
    (max_count.div_ceil(step) * step, step)
}
