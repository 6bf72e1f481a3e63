//! Numeral-to-words rendering.
//!
//! The pipeline spells out standalone numbers through [`NumeralRenderer`];
//! [`IndonesianNumerals`] implements it for the `id` locale.

pub mod indonesian;
pub mod renderer;

pub use indonesian::IndonesianNumerals;
pub use renderer::NumeralRenderer;
