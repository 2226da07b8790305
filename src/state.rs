//! Night Light state snapshot.

/// A snapshot of the decoded Night Light values.
///
/// Use [`NightLight::get_state`](crate::NightLight::get_state) to obtain one.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NightLightState {
    /// Whether the filter is currently on.
    pub enabled: bool,
    /// Strength percentage (0 = 6500K, 100 = 1200K).
    pub strength: u8,
    /// Stored colour temperature in Kelvin.
    pub kelvin: f64,
}
