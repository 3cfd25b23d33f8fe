//! CDN transformation URL builder
//!
//! The transformations themselves run on ImageKit's CDN; this module only
//! renders the URL that requests them.

/// Resize/quality parameters rendered into the URL path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transformation {
    pub width: u32,
    pub height: u32,
    pub quality: u32,
}

impl Default for Transformation {
    /// The catalog's card preview: 400x300 at quality 90
    fn default() -> Self {
        Self {
            width: 400,
            height: 300,
            quality: 90,
        }
    }
}

/// Build the CDN URL for a stored image with the given transformation.
///
/// Renders `{endpoint}/tr:w-{w},h-{h},q-{q}/{path}`, normalizing slashes so
/// endpoints with trailing slashes and paths with leading slashes both work.
pub fn image_url(url_endpoint: &str, path: &str, transformation: &Transformation) -> String {
    format!(
        "{}/tr:w-{},h-{},q-{}/{}",
        url_endpoint.trim_end_matches('/'),
        transformation.width,
        transformation.height,
        transformation.quality,
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_card_preview() {
        let url = image_url(
            "https://ik.imagekit.io/demo",
            "/wallpapers/sunset.jpg",
            &Transformation::default(),
        );

        assert_eq!(
            url,
            "https://ik.imagekit.io/demo/tr:w-400,h-300,q-90/wallpapers/sunset.jpg"
        );
    }

    #[test]
    fn test_slash_normalization() {
        let tr = Transformation {
            width: 1920,
            height: 1080,
            quality: 80,
        };

        // Trailing slash on the endpoint, no leading slash on the path
        assert_eq!(
            image_url("https://ik.imagekit.io/demo/", "wallpapers/sunset.jpg", &tr),
            "https://ik.imagekit.io/demo/tr:w-1920,h-1080,q-80/wallpapers/sunset.jpg"
        );
        // Both present
        assert_eq!(
            image_url("https://ik.imagekit.io/demo/", "/wallpapers/sunset.jpg", &tr),
            "https://ik.imagekit.io/demo/tr:w-1920,h-1080,q-80/wallpapers/sunset.jpg"
        );
    }
}
