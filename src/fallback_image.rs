use crate::image_source::ImageSource;

use maud::{html, Markup, Render};

/// The unconditional image, rendered as the `<img>` of a picture
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct FallbackImage {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub srcset: Option<String>,
}

impl FallbackImage {
    pub fn new(src: String, sizes: Option<String>, srcset: Option<String>) -> Self {
        Self { src, sizes, srcset }
    }

    pub fn to_html(&self) -> String {
        self.render().into_string()
    }
}

impl Render for FallbackImage {
    fn render(&self) -> Markup {
        html! {
            img sizes=[&self.sizes] src=(self.src) srcset=[&self.srcset];
        }
    }
}

impl From<&ImageSource> for FallbackImage {
    fn from(image: &ImageSource) -> Self {
        Self::new(
            image.src.clone(),
            image.sizes.clone(),
            image.src_set.clone(),
        )
    }
}
