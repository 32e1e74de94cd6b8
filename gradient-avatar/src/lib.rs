//! Gradient avatars: a name picks the colors, the result is an SVG data URI.
//!
//! ```no_run
//! # async fn demo() -> gradient_avatar::Result<()> {
//! use gradient_avatar::{get_avatar, AvatarOptions};
//!
//! let uri = get_avatar(&AvatarOptions::new("John Doe", "JD").with_rounded(16)).await?;
//! assert!(uri.starts_with("data:image/svg+xml;base64,"));
//! # Ok(())
//! # }
//! ```

mod avatar;
mod code;
mod error;
mod options;

pub use avatar::{to_data_uri, Avatar, DATA_URI_PREFIX};
pub use code::{font_size, make_document, render_svg};
pub use color_lib::{Gradient, GradientError, GradientSource, HashGradient};
pub use error::{Error, Result};
pub use options::{AvatarOptions, DEFAULT_ROUNDED, DEFAULT_SIZE};

/// Derives the gradient for `name`. Never fails: a broken derivation yields
/// [`Gradient::fallback`].
pub async fn derive_gradient(name: &str) -> Gradient {
    Avatar::<HashGradient>::default().gradient(name).await
}

/// Renders an avatar with the default gradient source.
pub async fn get_avatar(options: &AvatarOptions) -> Result<String> {
    Avatar::<HashGradient>::default().render(options).await
}

#[cfg(test)]
mod tests {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use regex::Regex;

    use super::*;

    fn decode(uri: &str) -> String {
        let payload = uri.strip_prefix(DATA_URI_PREFIX).unwrap();
        String::from_utf8(STANDARD.decode(payload).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_john_doe() {
        let options = AvatarOptions::new("John Doe", "JD")
            .with_size(128)
            .with_rounded(16);
        let uri = get_avatar(&options).await.unwrap();
        assert!(uri.starts_with("data:image/svg+xml;base64,"));

        let svg = decode(&uri);
        assert!(svg.contains(r#"width="128""#));
        assert!(svg.contains(r#"height="128""#));
        assert!(svg.contains(r#"rx="16""#));
        assert!(svg.contains(r#"ry="16""#));
        assert_eq!(2, svg.matches("<stop").count());

        let text = Regex::new(r"(?s)<text[^>]*>\s*JD\s*</text>").unwrap();
        assert!(text.is_match(&svg), "{}", svg);
    }

    #[tokio::test]
    async fn test_defaults() {
        let options = AvatarOptions::from_json(r#"{"name": "John Doe", "text": "JD"}"#).unwrap();
        let svg = decode(&get_avatar(&options).await.unwrap());
        assert!(svg.contains(r#"viewBox="0 0 128 128""#));
        assert!(svg.contains(r#"rx="0""#));
        assert!(svg.contains(r#"ry="0""#));
    }

    #[tokio::test]
    async fn test_deterministic() {
        let options = AvatarOptions::new("Zoë", "Z");
        assert_eq!(
            get_avatar(&options).await.unwrap(),
            get_avatar(&options).await.unwrap()
        );
        assert_eq!(derive_gradient("").await, derive_gradient("").await);
    }

    #[tokio::test]
    async fn test_concurrent() {
        let handles = (0..8)
            .map(|i| {
                tokio::spawn(async move {
                    get_avatar(&AvatarOptions::new(format!("user {}", i), "U"))
                        .await
                        .unwrap()
                })
            })
            .collect::<Vec<_>>();
        for (i, handle) in handles.into_iter().enumerate() {
            let expected = get_avatar(&AvatarOptions::new(format!("user {}", i), "U"))
                .await
                .unwrap();
            assert_eq!(expected, handle.await.unwrap());
        }
    }
}
