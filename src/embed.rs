use thiserror::Error;

use crate::state::Theme;

pub const EMBED_BASE: &str = "https://www.figma.com/embed";
pub const EMBED_HOST: &str = "share";

/// Vertical padding for a 16:10 frame.
pub const RATIO_16_10: &str = "62.5%";
/// Vertical padding for a 16:9 frame.
pub const RATIO_16_9: &str = "56.25%";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmbedTheme {
    #[default]
    Dark,
    Light,
}

impl EmbedTheme {
    pub fn as_str(self) -> &'static str {
        match self {
            EmbedTheme::Dark => "dark",
            EmbedTheme::Light => "light",
        }
    }
}

impl From<Theme> for EmbedTheme {
    fn from(value: Theme) -> Self {
        match value {
            Theme::Dark => Self::Dark,
            Theme::Light => Self::Light,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedOptions {
    pub title: String,
    pub theme: EmbedTheme,
    /// Frame height as a padding-top percentage of its width
    pub ratio: String,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            title: "Figma Prototype".to_string(),
            theme: EmbedTheme::default(),
            ratio: RATIO_16_10.to_string(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmbedError {
    #[error("Embed URL is empty")]
    Empty,
    #[error("Embed URL must start with http")]
    UnsupportedScheme,
}

/// Accepts any non-empty string starting with `http`.
///
/// This is a prefix check only. It does not parse the URL or restrict the host.
pub fn validate(url: &str) -> Result<&str, EmbedError> {
    if url.is_empty() {
        Err(EmbedError::Empty)
    } else if !url.starts_with("http") {
        Err(EmbedError::UnsupportedScheme)
    } else {
        Ok(url)
    }
}

/// Builds the viewer address for `url`, percent-encoding it as a single query value.
pub fn embed_src(url: &str, theme: EmbedTheme) -> Result<String, EmbedError> {
    let url = validate(url)?;
    Ok(format!(
        "{EMBED_BASE}?embed_host={EMBED_HOST}&theme={}&url={}",
        theme.as_str(),
        urlencoding::encode(url)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_non_http() {
        assert_eq!(validate(""), Err(EmbedError::Empty));
        assert_eq!(validate("ftp://example.com"), Err(EmbedError::UnsupportedScheme));
        assert_eq!(validate("www.figma.com/proto/x"), Err(EmbedError::UnsupportedScheme));
        assert_eq!(validate(" https://example.com"), Err(EmbedError::UnsupportedScheme));
        assert_eq!(validate("HTTPS://example.com"), Err(EmbedError::UnsupportedScheme));
    }

    #[test]
    fn test_validate_is_prefix_only() {
        assert!(validate("https://example.com").is_ok());
        assert!(validate("http://example.com").is_ok());
        // no parsing beyond the prefix
        assert!(validate("httpfoo").is_ok());
    }

    #[test]
    fn test_embed_src_encodes_url_and_theme() {
        let url = "https://example.com/proto/abc?node-id=1";
        let src = embed_src(url, EmbedTheme::Light).unwrap();

        assert!(src.starts_with("https://www.figma.com/embed?"));
        assert!(src.contains("embed_host=share"));
        assert!(src.contains("&theme=light&"));
        assert!(src.ends_with("&url=https%3A%2F%2Fexample.com%2Fproto%2Fabc%3Fnode-id%3D1"));
    }

    #[test]
    fn test_embed_src_decodes_back_to_source() {
        let url = "https://www.figma.com/proto/XXXXXXXX/Banking-UI?node-id=0-1&scaling=scale-down-width";
        let src = embed_src(url, EmbedTheme::Dark).unwrap();

        let (_, encoded) = src.split_once("&url=").expect("url parameter should be last");
        assert!(!encoded.contains('&'));
        assert_eq!(urlencoding::decode(encoded).unwrap(), url);
        assert!(src.contains("theme=dark"));
    }

    #[test]
    fn test_embed_src_invalid() {
        assert_eq!(embed_src("", EmbedTheme::Dark), Err(EmbedError::Empty));
        assert_eq!(
            embed_src("javascript:alert(1)", EmbedTheme::Dark),
            Err(EmbedError::UnsupportedScheme)
        );
    }

    #[test]
    fn test_options_defaults() {
        let opts = EmbedOptions::default();
        assert_eq!(opts.title, "Figma Prototype");
        assert_eq!(opts.theme, EmbedTheme::Dark);
        assert_eq!(opts.ratio, "62.5%");
        assert_eq!(EmbedTheme::from(Theme::Light), EmbedTheme::Light);
    }
}
