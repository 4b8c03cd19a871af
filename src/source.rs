use crate::constants::WEBP_MIME_TYPE;
use crate::image_source::ImageSource;

use maud::{html, Markup, Render};

/// A conditional `<source>` of an art-directed picture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtDirectionSource {
    pub media: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub srcset: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

impl ArtDirectionSource {
    pub fn new(
        media: String,
        sizes: Option<String>,
        src: String,
        srcset: Option<String>,
        mime_type: Option<String>,
    ) -> Self {
        Self {
            media,
            sizes,
            src,
            srcset,
            mime_type,
        }
    }

    /// Build the source for an image carrying a media query.
    /// Returns `None` for a default image, which never becomes a conditional source.
    pub fn from_image(image: &ImageSource) -> Option<Self> {
        let media = image.media()?;
        let (srcset, mime_type) = match &image.src_set_webp {
            Some(webp) => (Some(webp.clone()), Some(WEBP_MIME_TYPE.to_owned())),
            None => (image.src_set.clone(), None),
        };
        Some(Self::new(
            media.to_owned(),
            image.sizes.clone(),
            image.src.clone(),
            srcset,
            mime_type,
        ))
    }

    pub fn to_html(&self) -> String {
        self.render().into_string()
    }
}

impl Render for ArtDirectionSource {
    fn render(&self) -> Markup {
        html! {
            source
                media=(self.media)
                sizes=[&self.sizes]
                src=(self.src)
                srcset=[&self.srcset]
                type=[&self.mime_type];
        }
    }
}
