//! Core logic for a color-palette design tool.
//!
//! Four independent pieces that share only the [`color::Color`]
//! representation:
//!
//! - [`accessibility`]: WCAG relative luminance, contrast ratios, and
//!   compliance levels for every color pair of a palette.
//! - [`generator`]: palette strategies (analogous, triadic, complementary,
//!   ...) and mood transforms over a base color.
//! - [`export`]: text format emitters (CSS, SCSS, Tailwind, JSON, SVG) and
//!   shareable links.
//! - [`services::library`]: a persistent library of named palettes and
//!   collections over a pluggable key-value store.

/// WCAG contrast scoring.
pub mod accessibility;
/// Color value type and conversions.
pub mod color;
/// Store location configuration.
pub mod config;
/// Persistence backends and entity models.
pub mod dao;
/// Service-level errors.
pub mod error;
/// Palette exporters.
pub mod export;
/// Palette generation.
pub mod generator;
/// Palette library services.
pub mod services;
