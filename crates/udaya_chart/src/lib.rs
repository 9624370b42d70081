//! Special-lagna chart computation over an abstract ephemeris provider.
//!
//! This crate provides:
//! - The [`EphemerisProvider`] capability trait (positions, sunrise,
//!   ascendant) consumed by chart computation
//! - The sunrise reference-point locator with its guaranteed fallback
//! - [`compute_chart`]: Bhava or Hora Lagna chart with all 9 grahas
//!   placed into rashis, whole-sign houses, and nakshatra padas
//!
//! Each chart is a pure, stateless pipeline over its inputs; nothing is
//! cached or shared across requests.

pub mod anchor;
pub mod chart;
pub mod error;
pub mod provider;
pub mod types;

pub use anchor::{ReferenceAnchor, locate_anchor};
pub use chart::{compute_chart, compute_chart_with_config};
pub use error::ChartError;
pub use provider::{BodyState, EphemerisError, EphemerisProvider, GeoLocation};
pub use types::{BirthInput, Chart, ChartConfig, LongitudePoint, PlanetPosition};

// Re-export the domain vocabulary so callers need only this crate.
pub use udaya_vedic_base::{Graha, LagnaVariant, Nakshatra, Rashi};
