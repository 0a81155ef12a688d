//! Passive heat transfer and touch-safe surface flux.

use crate::core::{MarineWireError, Result};

/// Free convection coefficient, W/(m²·K).
pub const H_PASSIVE_CONVECTION: f64 = 5.0;
/// Linearised radiation coefficient, W/(m²·K).
pub const H_PASSIVE_RADIATION: f64 = 7.0;
pub const H_PASSIVE: f64 = H_PASSIVE_CONVECTION + H_PASSIVE_RADIATION;

/// Peak solar insolation, W/m².
pub const SOLAR_INSOLATION: f64 = 800.0;

/// Surface temperature limit for continuous skin contact, degrees C.
pub const TOUCH_CONTINUOUS_TEMP_LIMIT_C: f64 = 43.0;

/// Heat flux (W/m²) a passively cooled surface can shed while staying under
/// the continuous touch limit at `ambient_c`.
pub fn touch_surface_passive_flux(ambient_c: f64) -> Result<f64> {
    let delta_t = TOUCH_CONTINUOUS_TEMP_LIMIT_C - ambient_c;
    if delta_t.is_nan() || delta_t < 0.0 {
        return Err(MarineWireError::AmbientAboveTouchLimit {
            ambient_c,
            limit_c: TOUCH_CONTINUOUS_TEMP_LIMIT_C,
        });
    }
    // Q = h·A·ΔT, so Q/A = h·ΔT
    Ok(H_PASSIVE * delta_t)
}

pub fn w_per_m2_to_mw_per_mm2(flux: f64) -> f64 {
    flux * 1e-3
}
