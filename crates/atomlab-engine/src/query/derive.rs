//! Per-element values derived for display.
//!
//! No engine or rendering dependencies.

use crate::assets::element::Element;

/// Neutron count of the most common isotope, approximated as
/// `round(mass - number)`.
///
/// The registry rejects entries whose mass is below their atomic number, so
/// the clamp only matters for elements built outside the registry.
pub fn neutron_count(el: &Element) -> u32 {
    (el.mass - f64::from(el.number)).round().max(0.0) as u32
}

/// Electron capacity of shell `n` (1-based): `2n²`.
pub fn shell_capacity(n: u32) -> u32 {
    2 * n * n
}

/// Simplified Bohr-model shell filling: each shell takes `min(remaining, 2n²)`
/// in order. This intentionally ignores the real aufbau order, so heavier
/// elements get e.g. `[2, 8, 18, 32, ...]` rather than their true layout.
pub fn electron_shell_distribution(atomic_number: u32) -> Vec<u32> {
    let mut shells = Vec::new();
    let mut remaining = atomic_number;
    let mut n = 1;
    while remaining > 0 {
        let take = remaining.min(shell_capacity(n));
        shells.push(take);
        remaining -= take;
        n += 1;
    }
    shells
}
