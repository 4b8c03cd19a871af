use crate::fallback_image::FallbackImage;
use crate::image_source::ImageSource;
use crate::source::ArtDirectionSource;

use maud::{html, Markup, Render};

/// The image props of the rendering component. Exactly one stack is expected.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtDirectionProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed: Option<Vec<ImageSource>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fluid: Option<Vec<ImageSource>>,
}

impl ArtDirectionProps {
    pub fn fixed(images: Vec<ImageSource>) -> Self {
        Self {
            fixed: Some(images),
            fluid: None,
        }
    }

    pub fn fluid(images: Vec<ImageSource>) -> Self {
        Self {
            fixed: None,
            fluid: Some(images),
        }
    }

    /// The stack in use. `fluid` wins when both are present.
    pub fn images(&self) -> Option<&[ImageSource]> {
        match (&self.fluid, &self.fixed) {
            (Some(fluid), _) => Some(fluid.as_slice()),
            (None, Some(fixed)) => Some(fixed.as_slice()),
            (None, None) => None,
        }
    }
}

/// A complete art-directed picture: conditional sources followed by the default image
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Picture {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<FallbackImage>,
    pub sources: Vec<ArtDirectionSource>,
}

impl Picture {
    pub fn to_html(&self) -> String {
        self.render().into_string()
    }
}

impl Render for Picture {
    fn render(&self) -> Markup {
        html! {
            picture {
                @for source in &self.sources {
                    (source)
                }
                @if let Some(fallback) = &self.fallback {
                    (fallback)
                }
            }
        }
    }
}
