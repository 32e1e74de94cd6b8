//! Deterministic two-stop gradients derived from a name.
//!
//! Both stops share a chroma target and are placed in Oklch, so every name
//! gets colors of similar vividness while the hue comes from the hash. The
//! first stop is always lighter than the second, which keeps the two ends of
//! the gradient apart even when gamut mapping removes most of the chroma.

use log::debug;
use once_cell::sync::Lazy;
use serde::Serialize;
use thiserror::Error;

use crate::color::{sRGB, to_string, Oklab, Oklch, RGB};
use crate::hash::name_hash;

pub type Result<T> = std::result::Result<T, GradientError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradientError {
    /// A color conversion produced NaN or infinity.
    #[error("Gradient color is not finite: {0:?}")]
    NonFinite(Oklch),

    /// The source could not produce a gradient at all.
    #[error("Gradient unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Gradient {
    pub from_color: String,
    pub to_color: String,
}

impl Gradient {
    pub fn new(from_color: impl Into<String>, to_color: impl Into<String>) -> Self {
        Self {
            from_color: from_color.into(),
            to_color: to_color.into(),
        }
    }

    /// Light gray to darker gray. Used whenever derivation fails.
    pub fn fallback() -> Self {
        FALLBACK.clone()
    }
}

static FALLBACK: Lazy<Gradient> = Lazy::new(|| Gradient::new("#E0E0E0", "#9E9E9E"));

/// Anything that can turn a name into a gradient.
pub trait GradientSource {
    fn derive(&self, name: &str) -> Result<Gradient>;
}

impl<T: GradientSource + ?Sized> GradientSource for &T {
    fn derive(&self, name: &str) -> Result<Gradient> {
        (**self).derive(name)
    }
}

/// The default source: hash the name, pick two hues and lightnesses from it.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashGradient;

const CHROMA: f32 = 14.0;
const FROM_LIGHTNESS: u64 = 68;
const TO_LIGHTNESS: u64 = 52;
const LIGHTNESS_SPREAD: u64 = 8;
const MIN_HUE_OFFSET: u64 = 40;
const HUE_OFFSET_SPREAD: u64 = 100;

// Bisection steps when pulling chroma back into sRGB. 2^-16 of CHROMA is far
// below one 8-bit step.
const GAMUT_STEPS: usize = 16;

/// The two Oklch stops for a hash, before any gamut mapping.
pub fn stops(hash: u64) -> (Oklch, Oklch) {
    let from_hue = hash % 360;
    let offset = MIN_HUE_OFFSET + (hash >> 16) % HUE_OFFSET_SPREAD;
    let to_hue = if (hash >> 32) & 1 == 0 {
        (from_hue + offset) % 360
    } else {
        (from_hue + 360 - offset) % 360
    };

    let from_lightness = FROM_LIGHTNESS + (hash >> 40) % LIGHTNESS_SPREAD;
    let to_lightness = TO_LIGHTNESS + (hash >> 48) % LIGHTNESS_SPREAD;

    (
        Oklch::from_degrees(from_lightness as f32, CHROMA, from_hue as f32),
        Oklch::from_degrees(to_lightness as f32, CHROMA, to_hue as f32),
    )
}

/// Converts to sRGB, reducing chroma until the color fits. Hue and
/// lightness are left alone.
pub fn gamut_map(c: Oklch) -> Result<sRGB> {
    let rgb: RGB = Oklab::from(c).into();
    if !rgb.is_finite() {
        return Err(GradientError::NonFinite(c));
    }
    if rgb.in_gamut() {
        return Ok(rgb.into());
    }

    // Zero chroma is a gray, which is always inside for 0 < L < 100.
    let (mut lo, mut hi) = (0.0, c.chroma());
    for _ in 0..GAMUT_STEPS {
        let mid = (lo + hi) / 2.0;
        let candidate: RGB = Oklab::from(c.with_chroma(mid)).into();
        if candidate.in_gamut() {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    let mapped: RGB = Oklab::from(c.with_chroma(lo)).into();
    if !mapped.is_finite() {
        return Err(GradientError::NonFinite(c));
    }
    Ok(mapped.into())
}

impl GradientSource for HashGradient {
    fn derive(&self, name: &str) -> Result<Gradient> {
        let hash = name_hash(name);
        let (from, to) = stops(hash);
        let gradient = Gradient::new(to_string(&gamut_map(from)?), to_string(&gamut_map(to)?));
        debug!("derived gradient {:?} for hash {:016x}", gradient, hash);
        Ok(gradient)
    }
}

/// Shorthand for [`HashGradient`].
pub fn derive_gradient(name: &str) -> Result<Gradient> {
    HashGradient.derive(name)
}
