/// Bit-spreading masks, widest group first
const MASKS: [u64; 6] = [
    0x0000_0000_FFFF_FFFF,
    0x0000_FFFF_0000_FFFF,
    0x00FF_00FF_00FF_00FF,
    0x0F0F_0F0F_0F0F_0F0F,
    0x3333_3333_3333_3333,
    0x5555_5555_5555_5555,
];

const SHIFTS: [u32; 6] = [32, 16, 8, 4, 2, 1];

/// Default multiplier applied to float coordinates before truncation
pub const DEFAULT_SCALE: f64 = 1_000_000.0;

/// Spread the low 32 bits of `v` so that a zero bit separates each pair
fn spread(mut v: u64) -> u64 {
    for (shift, mask) in SHIFTS.iter().zip(MASKS) {
        v = (v | (v << shift)) & mask;
    }
    v
}

/// Morton code of integer coordinates
///
/// Dimension `i` is spread and shifted left by `i` before being OR-ed in.
/// Only the low 32 bits of each coordinate take part, and with more than
/// two dimensions the spread coordinates overlap, so ordering is only
/// approximately spatial.
pub fn z_order_curve(coords: &[u64]) -> u64 {
    coords.iter().enumerate().fold(0, |code, (dimension, &v)| {
        let shifted = u32::try_from(dimension)
            .ok()
            .and_then(|dimension| spread(v).checked_shl(dimension))
            .unwrap_or(0);
        code | shifted
    })
}

/// Morton code of float coordinates scaled by [`DEFAULT_SCALE`]
pub fn z_order_curve_f64(coords: &[f64]) -> u64 {
    z_order_curve_scaled(coords, DEFAULT_SCALE)
}

/// Morton code of float coordinates multiplied by `scale`
///
/// Scaled values are truncated toward zero; negative and NaN values
/// saturate to 0 and values beyond `u64::MAX` to `u64::MAX`.
pub fn z_order_curve_scaled(coords: &[f64], scale: f64) -> u64 {
    let scaled: Vec<u64> = coords.iter().map(|x| (x * scale) as u64).collect();
    z_order_curve(&scaled)
}
