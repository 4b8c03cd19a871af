#![warn(clippy::all)]

#[macro_use]
extern crate log;

#[macro_use]
extern crate serde_derive;

pub mod command_line;
pub mod constants;
pub mod data;
pub mod error;
pub mod fallback_image;
pub mod image_source;
pub mod media;
pub mod source;
pub mod viewport;

use crate::data::{ArtDirectionProps, Picture};
use crate::error::AppError;
use crate::fallback_image::FallbackImage;
use crate::media::group_by_media;

use std::fs::{create_dir_all, read_to_string};
use std::path::{Path, PathBuf};

pub use crate::constants::WEBP_MIME_TYPE;
pub use crate::image_source::ImageSource;
pub use crate::media::{
    create_art_direction_sources, current_image, has_art_direction_support, matches_media,
    MediaGroup, MediaMatcher,
};
pub use crate::source::ArtDirectionSource;
pub use crate::viewport::StaticViewport;

/// Reads the `fixed`/`fluid` image props from a JSON file
pub fn load_props(path: &Path) -> Result<ArtDirectionProps, AppError> {
    debug!("Reading image props from {}", path.to_string_lossy());
    let props: ArtDirectionProps = serde_json::from_str(&read_to_string(path)?)?;
    match (props.fluid.is_some(), props.fixed.is_some()) {
        (false, false) => Err(AppError::NoImages),
        (true, true) => {
            debug!("Both fluid and fixed images supplied, ignoring fixed");
            Ok(props)
        }
        _ => Ok(props),
    }
}

/// Builds the picture for the props: the art direction sources plus the default image.
/// A stack of a single image has no sources and uses that image as the fallback.
pub fn build_picture(props: &ArtDirectionProps) -> Picture {
    let images = props.images().unwrap_or_default();
    if images.len() <= 1 {
        return Picture {
            fallback: images.first().map(FallbackImage::from),
            sources: Vec::new(),
        };
    }

    let grouped = group_by_media(images);
    Picture {
        fallback: grouped.default_image().map(FallbackImage::from),
        sources: grouped.sources(),
    }
}

/// Writes to the output location, or stdout when there is none
pub fn write_output(contents: &str, output_location: Option<&PathBuf>) -> Result<(), AppError> {
    match output_location {
        Some(output_location) => {
            if let Some(parent) = output_location.parent() {
                create_dir_all(parent)?;
            }
            std::fs::write(output_location, contents)?;
            info!("Picture written to {}", output_location.to_string_lossy());
        }
        None => println!("{}", contents),
    }
    Ok(())
}
