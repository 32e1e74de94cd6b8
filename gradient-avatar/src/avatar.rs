use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use color_lib::{Gradient, GradientSource, HashGradient};
use log::{debug, warn};

use crate::code::render_svg;
use crate::{AvatarOptions, Result};

pub const DATA_URI_PREFIX: &str = "data:image/svg+xml;base64,";

/// Renders avatars with gradients from `S`.
///
/// Holds no state besides the source, so one `Avatar` can serve any number of
/// concurrent renders.
#[derive(Debug, Clone, Default)]
pub struct Avatar<S = HashGradient> {
    source: S,
}

impl<S: GradientSource> Avatar<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The gradient for `name`, or the fallback if the source fails.
    pub async fn gradient(&self, name: &str) -> Gradient {
        match self.source.derive(name) {
            Ok(gradient) => gradient,
            Err(err) => {
                warn!("using fallback gradient for {:?}: {}", name, err);
                Gradient::fallback()
            }
        }
    }

    /// Renders `options` as a base64 SVG data URI.
    pub async fn render(&self, options: &AvatarOptions) -> Result<String> {
        options.validate()?;
        let gradient = self.gradient(&options.name).await;
        let svg = render_svg(options, &gradient);
        debug!("rendered {} byte avatar for {:?}", svg.len(), options.name);
        Ok(to_data_uri(&svg))
    }
}

pub fn to_data_uri(svg: &str) -> String {
    format!("{}{}", DATA_URI_PREFIX, STANDARD.encode(svg))
}
