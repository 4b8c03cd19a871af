/// One candidate image of a responsive image stack, as handed over by the
/// rendering component in its `fixed` or `fluid` props.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSource {
    /// CSS media query this image applies to. Absent or empty marks the default image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_set: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_set_webp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base64: Option<String>,
}

impl ImageSource {
    pub fn new(src: &str) -> Self {
        Self {
            src: src.to_owned(),
            ..Self::default()
        }
    }

    pub fn with_media(&self, media: &str) -> Self {
        Self {
            media: Some(media.to_owned()),
            ..self.clone()
        }
    }

    pub fn with_src_set(&self, src_set: &str) -> Self {
        Self {
            src_set: Some(src_set.to_owned()),
            ..self.clone()
        }
    }

    pub fn with_src_set_webp(&self, src_set_webp: &str) -> Self {
        Self {
            src_set_webp: Some(src_set_webp.to_owned()),
            ..self.clone()
        }
    }

    pub fn with_sizes(&self, sizes: &str) -> Self {
        Self {
            sizes: Some(sizes.to_owned()),
            ..self.clone()
        }
    }

    /// The media query, treating an empty string the same as no query
    pub fn media(&self) -> Option<&str> {
        self.media.as_deref().filter(|media| !media.is_empty())
    }

    /// Whether this is an unconditional (default) image
    pub fn is_default(&self) -> bool {
        self.media().is_none()
    }
}
