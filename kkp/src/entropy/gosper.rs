// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

//! Distance along a level-`n` Gosper space-filling curve, given 2D coordinates.
//!
//! Ported from the hex-axial-coordinate walk described in doi:10.1109/CYBConf.2017.7985819.

use std::f64::consts::PI;

const ORIENTATION: [f64; 7] = [
    -PI * 2.0 / 3.0,
    0.0,
    0.0,
    -PI * 2.0 / 3.0,
    0.0,
    PI * 2.0 / 3.0,
    0.0,
];

const IDX_PATTERN: [bool; 7] = [false, true, true, true, false, false, true];

fn hex_axial_to_xy(ql: (i64, i64), size: f64) -> (f64, f64) {
    (
        size * (ql.0 as f64 + ql.1 as f64 / 2.0) * 3.0f64.sqrt(),
        size * ql.1 as f64 * 3.0 / 2.0,
    )
}

fn hex_xy_to_axial(xy: (f64, f64), size: f64) -> (i64, i64) {
    let cube_x = (xy.0 * 3.0f64.sqrt() / 3.0 - xy.1 / 3.0) / size;
    let cube_z = xy.1 * 2.0 / 3.0 / size;
    let cube_y = -cube_x - cube_z;

    let mut rx = cube_x.round() as i64;
    let mut ry = cube_y.round() as i64;
    let mut rz = cube_z.round() as i64;

    let x_diff = (cube_x - rx as f64).abs();
    let y_diff = (cube_y - ry as f64).abs();
    let z_diff = (cube_z - rz as f64).abs();

    if x_diff > y_diff && x_diff > z_diff {
        rx = -ry - rz;
    } else if y_diff > z_diff {
        ry = -rx - rz;
    } else {
        rz = -rx - ry;
    }

    (rx, rz)
}

fn rotate(theta: f64, r: (f64, f64)) -> (f64, f64) {
    (
        theta.cos() * r.0 - theta.sin() * r.1,
        theta.sin() * r.0 + theta.cos() * r.1,
    )
}

fn sub(a: (f64, f64), b: (f64, f64)) -> (f64, f64) {
    (a.0 - b.0, a.1 - b.1)
}

fn scale(s: f64, r: (f64, f64)) -> (f64, f64) {
    (s * r.0, s * r.1)
}

fn gosper_center(pt: (f64, f64), n: u32, alpha: f64, factor: f64) -> Vec<(f64, f64)> {
    let mut s_i = factor.powi(n as i32);
    let mut cr_i = hex_axial_to_xy(hex_xy_to_axial(pt, s_i), s_i);
    let mut c_i = rotate(n as f64 * alpha, cr_i);

    let mut center = vec![c_i];
    for i in (0..n).rev() {
        s_i /= factor;
        cr_i = hex_axial_to_xy(hex_xy_to_axial(rotate(alpha, cr_i), s_i), s_i);
        c_i = rotate(i as f64 * alpha, cr_i);
        center.push(c_i);
    }
    center.reverse();
    center
}

fn get_y_idx(d_i: (f64, f64), dy_i: (f64, f64)) -> usize {
    let dot = dy_i.0 * d_i.0 + dy_i.1 * d_i.1;
    let det = dy_i.0 * d_i.1 - dy_i.1 * d_i.0;
    let angle = det.atan2(dot);
    let rd = (3.0 * angle / PI).round() as i64;

    if dy_i.0.hypot(dy_i.1) < 0.01 * d_i.0.hypot(d_i.1) {
        4
    } else {
        match rd {
            0 => 0,
            -1 => 5,
            -2 => 6,
            1 => 1,
            2 => 2,
            _ => 3,
        }
    }
}

fn gosper_index(center: &[(f64, f64)], n: u32, alpha: f64, factor: f64) -> Vec<i64> {
    let mut k_i = 0i64;
    let mut y_i = 1usize;
    let mut pattern = true;
    let mut d_i = (-3.0f64.sqrt(), 0.0);

    let mut index = Vec::with_capacity(n as usize + 1);

    if center[0].0.abs() + center[0].1.abs() > 0.1 {
        index.push(-1);
        return index;
    }

    index.push(k_i);
    for i in 1..=n as usize {
        d_i = scale(factor, rotate(alpha, rotate(ORIENTATION[y_i], d_i)));
        let dy_i = sub(center[i], center[i - 1]);

        y_i = get_y_idx(d_i, dy_i);
        if pattern {
            k_i = y_i as i64;
            pattern = IDX_PATTERN[y_i];
        } else {
            k_i = 6 - y_i as i64;
            pattern = !IDX_PATTERN[y_i];
        }

        index.push(k_i);
    }

    index
}

/// Returns the distance along a level-`n` Gosper space-filling curve from 2D coordinates
/// `point`, or `None` if `point` does not lie on the curve at that recursion level.
#[must_use]
pub fn gosper_distance(point: (f64, f64), level: u32) -> Option<i64> {
    let alpha = ((3.0f64 / 7.0).sqrt() / 2.0).asin();
    let factor = 1.0 / 7.0f64.sqrt();

    let center = gosper_center(point, level, alpha, factor);
    let index = gosper_index(&center, level, alpha, factor);

    if index[0] != 0 {
        return None;
    }

    let mut distance = 0i64;
    let mut power7 = 1i64;
    for i in 0..index.len() {
        distance += index[level as usize - i] * power7;
        power7 *= 7;
    }

    Some(distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_at_level_zero_is_distance_zero() {
        assert_eq!(gosper_distance((0.0, 0.0), 0), Some(0));
    }

    #[test]
    fn far_off_curve_point_is_none() {
        assert_eq!(gosper_distance((1_000_000.0, 1_000_000.0), 1), None);
    }
}
