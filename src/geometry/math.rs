use super::tolerance::EPS_LEN;

pub fn cubic_point(
    t: f32,
    x0: f32, y0: f32, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32,
) -> (f32, f32) {
    let u = 1.0 - t;
    let tt = t * t;
    let uu = u * u;
    let uuu = uu * u;
    let ttt = tt * t;
    let x = uuu * x0 + 3.0 * uu * t * x1 + 3.0 * u * tt * x2 + ttt * x3;
    let y = uuu * y0 + 3.0 * uu * t * y1 + 3.0 * u * tt * y2 + ttt * y3;
    (x, y)
}

pub fn quad_point(t: f32, x0: f32, y0: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> (f32, f32) {
    let u = 1.0 - t;
    let x = u * u * x0 + 2.0 * u * t * x1 + t * t * x2;
    let y = u * u * y0 + 2.0 * u * t * y1 + t * t * y2;
    (x, y)
}

/// One cubic segment as (x1, y1, x2, y2, x, y): two control points and the
/// endpoint, with the start point implied by the previous segment.
pub type CubicSegment = (f32, f32, f32, f32, f32, f32);

/// Convert an elliptical arc from endpoint parameterization to a chain of
/// cubic segments, honoring both radii, the x-axis rotation and the
/// large-arc/sweep flags. Each segment spans at most a quarter turn.
///
/// Returns an empty chain for degenerate input (zero radius or coincident
/// endpoints); the caller falls back to a straight line.
pub fn arc_to_cubics(
    x0: f32, y0: f32,
    rx: f32, ry: f32,
    x_rotation_deg: f32,
    large_arc: bool,
    sweep: bool,
    x: f32, y: f32,
) -> Vec<CubicSegment> {
    let mut rx = rx.abs();
    let mut ry = ry.abs();
    if rx <= EPS_LEN || ry <= EPS_LEN {
        return Vec::new();
    }
    let dx = x0 - x;
    let dy = y0 - y;
    if dx.abs() <= EPS_LEN && dy.abs() <= EPS_LEN {
        return Vec::new();
    }

    let phi = x_rotation_deg.to_radians();
    let (sin_phi, cos_phi) = phi.sin_cos();

    // Endpoint-to-center conversion.
    let dx2 = dx * 0.5;
    let dy2 = dy * 0.5;
    let x1p = cos_phi * dx2 + sin_phi * dy2;
    let y1p = -sin_phi * dx2 + cos_phi * dy2;

    // Scale radii up if they cannot span the endpoints.
    let lambda = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
    if lambda > 1.0 {
        let s = lambda.sqrt();
        rx *= s;
        ry *= s;
    }

    let rx2 = rx * rx;
    let ry2 = ry * ry;
    let num = rx2 * ry2 - rx2 * y1p * y1p - ry2 * x1p * x1p;
    let den = rx2 * y1p * y1p + ry2 * x1p * x1p;
    let mut co = (num.max(0.0) / den).sqrt();
    if large_arc == sweep {
        co = -co;
    }
    let cxp = co * rx * y1p / ry;
    let cyp = -co * ry * x1p / rx;
    let cx = cos_phi * cxp - sin_phi * cyp + (x0 + x) * 0.5;
    let cy = sin_phi * cxp + cos_phi * cyp + (y0 + y) * 0.5;

    // Angles over the unit-circle parameters, not the raw vectors.
    let theta1 = ((y1p - cyp) / ry).atan2((x1p - cxp) / rx);
    let theta2 = ((-y1p - cyp) / ry).atan2((-x1p - cxp) / rx);
    let mut dtheta = theta2 - theta1;
    if sweep && dtheta < 0.0 {
        dtheta += 2.0 * std::f32::consts::PI;
    } else if !sweep && dtheta > 0.0 {
        dtheta -= 2.0 * std::f32::consts::PI;
    }

    let segments = (dtheta.abs() / std::f32::consts::FRAC_PI_2).ceil().max(1.0) as u32;
    let d = dtheta / segments as f32;
    // Handle length for a cubic spanning the angle d.
    let alpha = d.sin() * ((4.0 + 3.0 * (d * 0.5).tan().powi(2)).sqrt() - 1.0) / 3.0;

    let point_at = |theta: f32| -> (f32, f32) {
        let (st, ct) = theta.sin_cos();
        (
            cx + rx * ct * cos_phi - ry * st * sin_phi,
            cy + rx * ct * sin_phi + ry * st * cos_phi,
        )
    };
    let derivative_at = |theta: f32| -> (f32, f32) {
        let (st, ct) = theta.sin_cos();
        (
            -rx * st * cos_phi - ry * ct * sin_phi,
            -rx * st * sin_phi + ry * ct * cos_phi,
        )
    };

    let mut out = Vec::with_capacity(segments as usize);
    let mut theta = theta1;
    let mut p = point_at(theta);
    for _ in 0..segments {
        let next = theta + d;
        let q = point_at(next);
        let (dx1, dy1) = derivative_at(theta);
        let (dx2n, dy2n) = derivative_at(next);
        out.push((
            p.0 + alpha * dx1,
            p.1 + alpha * dy1,
            q.0 - alpha * dx2n,
            q.1 - alpha * dy2n,
            q.0,
            q.1,
        ));
        theta = next;
        p = q;
    }
    out
}
