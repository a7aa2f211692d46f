use regex::Regex;
use std::sync::OnceLock;

/// Default for the frame strokes, the pins, the outer fill and the middle glyph.
pub const DEFAULT_ACCENT_COLOUR: &str = "#1c7eea";
/// Default for the inner fill and the top/bottom labels.
pub const DEFAULT_BASE_COLOUR: &str = "#121212";

fn hex_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("^#?[0-9a-fA-F]{6}$").expect("hex pattern is valid"))
}

/// Validation never fails: anything that is not a 6-digit hex string (an
/// optional leading `#` is allowed) silently resolves to `default`.
pub fn validate_hex(value: Option<&str>, default: &str) -> String {
    validate_optional_hex(value).unwrap_or_else(|| default.to_owned())
}

/// As [`validate_hex`], but for the background, whose default is "no fill".
pub fn validate_optional_hex(value: Option<&str>) -> Option<String> {
    let value = value?;
    if !hex_pattern().is_match(value) {
        return None;
    }
    if value.starts_with('#') {
        Some(value.to_owned())
    } else {
        Some(format!("#{value}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Png,
    Jpg,
    Jpeg,
    Svg,
    Pdf,
    DataUrl,
}

impl FileType {
    /// Whitelist lookup; anything else (including absence) falls back to SVG.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("png") => Self::Png,
            Some("jpg") => Self::Jpg,
            Some("jpeg") => Self::Jpeg,
            Some("svg") => Self::Svg,
            Some("pdf") => Self::Pdf,
            Some("dataUrl") => Self::DataUrl,
            _ => Self::Svg,
        }
    }

    /// The response content type; the data-URI case sets none.
    pub fn content_type(self) -> Option<&'static str> {
        match self {
            Self::Png => Some("image/png"),
            Self::Jpg | Self::Jpeg => Some("image/jpeg"),
            Self::Svg => Some("image/svg+xml"),
            Self::Pdf => Some("application/pdf"),
            Self::DataUrl => None,
        }
    }
}

/// Raw query parameters as they arrive on the wire.
#[derive(Debug, Default, Clone)]
pub struct RawParameters {
    pub background_colour: Option<String>,
    pub outer_line_colour: Option<String>,
    pub inner_line_colour: Option<String>,
    pub pin_colour: Option<String>,
    pub inner_colour: Option<String>,
    pub outer_colour: Option<String>,
    pub top_text_colour: Option<String>,
    pub middle_text_colour: Option<String>,
    pub bottom_text_colour: Option<String>,
    pub file_type: Option<String>,
}

/// Fully validated emblem parameters. Every colour is a `#rrggbb` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameters {
    pub background_colour: Option<String>,
    pub outer_line_colour: String,
    pub inner_line_colour: String,
    pub pin_colour: String,
    pub inner_colour: String,
    pub outer_colour: String,
    pub top_text_colour: String,
    pub middle_text_colour: String,
    pub bottom_text_colour: String,
    pub file_type: FileType,
}

impl Parameters {
    pub fn resolve(raw: &RawParameters) -> Self {
        Self {
            background_colour: validate_optional_hex(raw.background_colour.as_deref()),
            outer_line_colour: validate_hex(raw.outer_line_colour.as_deref(), DEFAULT_ACCENT_COLOUR),
            inner_line_colour: validate_hex(raw.inner_line_colour.as_deref(), DEFAULT_ACCENT_COLOUR),
            pin_colour: validate_hex(raw.pin_colour.as_deref(), DEFAULT_ACCENT_COLOUR),
            inner_colour: validate_hex(raw.inner_colour.as_deref(), DEFAULT_BASE_COLOUR),
            outer_colour: validate_hex(raw.outer_colour.as_deref(), DEFAULT_ACCENT_COLOUR),
            top_text_colour: validate_hex(raw.top_text_colour.as_deref(), DEFAULT_BASE_COLOUR),
            middle_text_colour: validate_hex(
                raw.middle_text_colour.as_deref(),
                DEFAULT_ACCENT_COLOUR,
            ),
            bottom_text_colour: validate_hex(raw.bottom_text_colour.as_deref(), DEFAULT_BASE_COLOUR),
            file_type: FileType::parse(raw.file_type.as_deref()),
        }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self::resolve(&RawParameters::default())
    }
}
