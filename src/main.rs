#![warn(clippy::all, clippy::pedantic)]
#[macro_use]
extern crate log;

use anyhow::{Context, Result};
use env_logger::Env;
use structopt::StructOpt;

use responsive_art_direction::command_line::{Format, Options};
use responsive_art_direction::constants::LOG_ENV;
use responsive_art_direction::{
    build_picture, current_image, has_art_direction_support, load_props, write_output,
    MediaMatcher, StaticViewport,
};

///
/// This program turns the `fixed` or `fluid` image props of a background image into an art-directed picture.
/// It does this in three steps:
/// 1. Ordering the image stack so the default image (the one without a media query) comes last
/// 2. Building a conditional `<source>` for every image with a media query
/// 3. Writing the resulting `<picture>` as HTML or JSON
fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::new().filter_or(LOG_ENV, "info")).init();

    let options = Options::from_args();
    let props = load_props(&options.props).with_context(|| {
        format!(
            "Failed to load image props from {}",
            options.props.to_string_lossy()
        )
    })?;

    let images = props.images().unwrap_or_default();
    if !has_art_direction_support(images) {
        info!("No art direction needed, the stack holds a single or only unconditional images");
    }

    if let Some(width) = options.viewport_width {
        let viewport = StaticViewport::new(width, options.viewport_height);
        let matcher: &dyn MediaMatcher = &viewport;
        if let Some(image) = current_image(images, Some(matcher)) {
            info!(
                "Image in use at {}x{}: {} ({})",
                width,
                options.viewport_height,
                image.src,
                image.media().unwrap_or("default")
            );
        }
    }

    let picture = build_picture(&props);
    let contents = match options.format {
        Format::Html => picture.to_html(),
        Format::Json => serde_json::to_string_pretty(&picture)?,
    };
    debug!("Writing picture");
    write_output(&contents, options.output.as_ref())?;
    Ok(())
}
