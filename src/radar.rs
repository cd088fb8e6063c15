// src/radar.rs
//
// Radar geometry builder: N same-keyed stat vectors → overlaid closed
// polygons for a polar chart. Pure function of its arguments; the GUI
// only paints what comes out of here.

use std::error::Error;
use std::f64::consts::PI;

use crate::data::{Entity, StatVector};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub name: &'static str,
    pub rgb: [u8; 3],
}

/// Fixed palette, assigned by input position.
pub const PALETTE: [Color; 4] = [
    Color { name: "blue", rgb: [60, 100, 220] },
    Color { name: "red", rgb: [210, 60, 60] },
    Color { name: "green", rgb: [60, 170, 90] },
    Color { name: "orange", rgb: [235, 150, 40] },
];

/// One entity's overlay: closed angle/magnitude sequences of length
/// k+1 (first point repeated at the end), plus legend color and label.
#[derive(Clone, Debug, PartialEq)]
pub struct RadarPolygon {
    pub label: String,
    pub color: Color,
    pub angles: Vec<f64>,
    pub magnitudes: Vec<u32>,
}

/// Build one polygon per entity, all sharing the same angle sequence.
///
/// Fails fast instead of producing a malformed chart: empty input,
/// more entities than palette colors, an empty stat set, or a stat
/// key-set mismatch between entities are all errors.
pub fn build_polygons(entities: &[Entity]) -> Result<Vec<RadarPolygon>, Box<dyn Error>> {
    if entities.is_empty() {
        return Err("no entities to chart".into());
    }
    if entities.len() > PALETTE.len() {
        return Err(format!("at most {} entities per chart", PALETTE.len()).into());
    }

    let first = &entities[0];
    let num_stats = first.stats.len();
    if num_stats == 0 {
        return Err(format!("{} has no stats to chart", first.name).into());
    }
    for e in &entities[1..] {
        if !same_keys(&first.stats, &e.stats) {
            return Err(
                format!("stat axes mismatch between {} and {}", first.name, e.name).into(),
            );
        }
    }

    let angles = closed_angles(num_stats);
    Ok(entities
        .iter()
        .enumerate()
        .map(|(i, e)| RadarPolygon {
            label: e.name.clone(),
            color: PALETTE[i],
            angles: angles.clone(),
            magnitudes: closed_magnitudes(&e.stats),
        })
        .collect())
}

/// Equal angular spacing from 0, counter-clockwise, closed:
/// `[2π·0/k, …, 2π·(k-1)/k, 2π·0/k]`. Each angle is computed directly
/// from its index, so the closing point is bit-identical to the first.
pub fn closed_angles(num_stats: usize) -> Vec<f64> {
    let k = num_stats as f64;
    let mut angles: Vec<f64> = (0..num_stats)
        .map(|i| 2.0 * PI * i as f64 / k)
        .collect();
    angles.push(angles[0]);
    angles
}

/// Raw base stats with the first value repeated at the end. No scaling,
/// no normalization.
pub fn closed_magnitudes(stats: &StatVector) -> Vec<u32> {
    let mut mags: Vec<u32> = stats.iter().map(|(_, v)| *v).collect();
    mags.push(mags[0]);
    mags
}

fn same_keys(a: &StatVector, b: &StatVector) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|((ka, _), (kb, _))| ka == kb)
}
