use fast_srgb8::{f32_to_srgb8, srgb8_to_f32};

#[allow(non_camel_case_types)]
pub type sRGB = [u8; 3];

pub fn as_index(c: &sRGB) -> usize {
    // RGB order, same as the hex string.
    let mut out: usize = c[2] as usize;
    out |= (c[1] as usize) << 8;
    out |= (c[0] as usize) << 16;
    out
}

/// Formats a color as `#RRGGBB`, which SVG accepts for `stop-color` and `fill`.
pub fn to_string(c: &sRGB) -> String {
    format!("#{:06x}", as_index(c)).to_uppercase()
}

/// Linear-light RGB. Values inside `[0, 1]` are displayable.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RGB {
    r: f32,
    g: f32,
    b: f32,
}

// Slack for f32 error on colors that sit exactly on the gamut boundary.
const GAMUT_EPSILON: f32 = 1e-4;

impl RGB {
    pub(crate) fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    pub(crate) fn in_gamut(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|&x| (-GAMUT_EPSILON..=1.0 + GAMUT_EPSILON).contains(&x))
    }
}

impl From<sRGB> for RGB {
    fn from(c: sRGB) -> Self {
        RGB {
            r: srgb8_to_f32(c[0]),
            g: srgb8_to_f32(c[1]),
            b: srgb8_to_f32(c[2]),
        }
    }
}

impl From<RGB> for sRGB {
    fn from(c: RGB) -> Self {
        // f32_to_srgb8 clamps, so anything within GAMUT_EPSILON lands on the edge.
        [f32_to_srgb8(c.r), f32_to_srgb8(c.g), f32_to_srgb8(c.b)]
    }
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Oklab {
    pub(crate) L: f32,
    pub(crate) a: f32,
    pub(crate) b: f32,
}

// This is a scale factor to make it roughly line up with CIELAB.
const OKLAB_SCALE: f32 = 100.0;

impl From<RGB> for Oklab {
    fn from(c: RGB) -> Self {
        // https://bottosson.github.io/posts/oklab/#converting-from-linear-srgb-to-oklab
        let l = 0.4122214708 * c.r + 0.5363325363 * c.g + 0.0514459929 * c.b;
        let m = 0.2119034982 * c.r + 0.6806995451 * c.g + 0.1073969566 * c.b;
        let s = 0.0883024619 * c.r + 0.2817188376 * c.g + 0.6299787005 * c.b;

        let l_ = l.cbrt();
        let m_ = m.cbrt();
        let s_ = s.cbrt();

        Oklab {
            L: (0.2104542553 * OKLAB_SCALE) * l_ + (0.7936177850 * OKLAB_SCALE) * m_
                - (0.0040720468 * OKLAB_SCALE) * s_,
            a: (1.9779984951 * OKLAB_SCALE) * l_ - (2.4285922050 * OKLAB_SCALE) * m_
                + (0.4505937099 * OKLAB_SCALE) * s_,
            b: (0.0259040371 * OKLAB_SCALE) * l_ + (0.7827717662 * OKLAB_SCALE) * m_
                - (0.8086757660 * OKLAB_SCALE) * s_,
        }
    }
}

impl From<Oklab> for RGB {
    #[allow(non_snake_case)]
    fn from(c: Oklab) -> Self {
        // Inverse of the above, same source.
        let (L, a, b) = (c.L / OKLAB_SCALE, c.a / OKLAB_SCALE, c.b / OKLAB_SCALE);

        let l_ = L + 0.3963377774 * a + 0.2158037573 * b;
        let m_ = L - 0.1055613458 * a - 0.0638541728 * b;
        let s_ = L - 0.0894841775 * a - 1.2914855480 * b;

        let l = l_ * l_ * l_;
        let m = m_ * m_ * m_;
        let s = s_ * s_ * s_;

        RGB {
            r: 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
            g: -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
            b: -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
        }
    }
}

impl From<sRGB> for Oklab {
    fn from(c: sRGB) -> Self {
        Into::<RGB>::into(c).into()
    }
}

impl From<Oklab> for sRGB {
    fn from(c: Oklab) -> Self {
        Into::<RGB>::into(c).into()
    }
}

#[allow(non_snake_case)]
pub fn HyAB(c1: &Oklab, c2: &Oklab) -> f32 {
    (c1.L - c2.L).abs() + ((c1.a - c2.a).powi(2) + (c1.b - c2.b).powi(2)).sqrt()
}

/// Polar Oklab. `h` is in radians.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    pub(crate) L: f32,
    pub(crate) C: f32,
    pub(crate) h: f32,
}

#[allow(non_snake_case)]
impl Oklch {
    pub fn new(L: f32, C: f32, h: f32) -> Self {
        Self { L, C, h }
    }

    pub fn from_degrees(L: f32, C: f32, hue: f32) -> Self {
        Self::new(L, C, hue.to_radians())
    }

    pub fn with_chroma(self, C: f32) -> Self {
        Self { C, ..self }
    }

    pub fn lightness(&self) -> f32 {
        self.L
    }

    pub fn chroma(&self) -> f32 {
        self.C
    }
}

impl From<Oklab> for Oklch {
    fn from(c: Oklab) -> Self {
        Self {
            L: c.L,
            C: (c.a.powi(2) + c.b.powi(2)).sqrt(),
            h: c.b.atan2(c.a),
        }
    }
}

impl From<Oklch> for Oklab {
    fn from(c: Oklch) -> Self {
        let (sin, cos) = c.h.sin_cos();
        Oklab {
            L: c.L,
            a: c.C * cos,
            b: c.C * sin,
        }
    }
}

impl From<sRGB> for Oklch {
    fn from(c: sRGB) -> Self {
        Into::<Oklab>::into(c).into()
    }
}
