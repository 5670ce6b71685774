//! Point property estimates for a classified phase.
//!
//! Simple linear models keyed by the exact region label. They are illustrative
//! figures for the info panel, not thermodynamic data.
//!
//! | label        | model                                                        |
//! |--------------|--------------------------------------------------------------|
//! | `Liquid`     | density = 7.0 − 0.001·(T − 1500), viscosity = exp(−T / 500)   |
//! | `Austenite`  | hardness = 200 + 100·c, strength = 400 + 200·c               |
//! | `Ferrite`    | hardness = 80 + 50·c, strength = 250 + 100·c                 |
//! | `Martensite` | hardness = 600 + 200·c, strength = 1500 + 500·c              |

/// Estimated properties at one diagram point.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "state", rename_all = "kebab-case"))]
pub enum PropertyEstimate {
    /// Molten phase.
    Liquid {
        /// Relative density.
        density: f64,
        /// Relative viscosity.
        viscosity: f64,
    },
    /// Solid phase with a mechanical model.
    Solid {
        /// Hardness, HV.
        hardness: f64,
        /// Tensile strength, MPa.
        strength: f64,
    },
    /// No model for this label.
    None,
}

/// Estimate properties for `label` at `(temperature, composition)`.
///
/// The label must match exactly; anything without a model yields
/// [`PropertyEstimate::None`].
pub fn estimate_properties(label: &str, temperature: f64, composition: f64) -> PropertyEstimate {
    let c = composition;
    let solid = |hardness: f64, strength: f64| PropertyEstimate::Solid { hardness, strength };
    match label {
        "Liquid" => PropertyEstimate::Liquid {
            density: 7.0 - (temperature - 1500.0) * 0.001,
            viscosity: exp_approx(-temperature / 500.0),
        },
        "Austenite" => solid(200.0 + c * 100.0, 400.0 + c * 200.0),
        "Ferrite" => solid(80.0 + c * 50.0, 250.0 + c * 100.0),
        "Martensite" => solid(600.0 + c * 200.0, 1500.0 + c * 500.0),
        _ => PropertyEstimate::None,
    }
}

/// `exp(x)` without `std`. Relative error below 1e-9 on the clamped range.
fn exp_approx(x: f64) -> f64 {
    // exp(709.7) overflows f64
    let x = x.clamp(-708.0, 709.0);
    // x = k·ln2 + r, |r| ≤ ln2 / 2
    const LN2: f64 = core::f64::consts::LN_2;
    const INV_LN2: f64 = core::f64::consts::LOG2_E;
    let t = x * INV_LN2 + 0.5;
    let mut k = t as i64;
    if (k as f64) > t {
        k -= 1; // truncation rounds toward zero; want floor
    }
    let r = x - k as f64 * LN2;
    // Taylor to r⁹, Horner form
    const C: [f64; 10] = [
        1.0,
        1.0,
        1.0 / 2.0,
        1.0 / 6.0,
        1.0 / 24.0,
        1.0 / 120.0,
        1.0 / 720.0,
        1.0 / 5040.0,
        1.0 / 40320.0,
        1.0 / 362_880.0,
    ];
    let poly = C.iter().rev().fold(0.0, |acc, c| acc * r + c);
    // 2^k through the exponent field (bias 1023)
    let scale = f64::from_bits(((1023 + k.clamp(-1022, 1023)) as u64) << 52);
    poly * scale
}
