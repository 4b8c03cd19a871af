//! Media query handling for art-directed image stacks.
//!
//! An art-direction stack is a list of images where every image but one
//! carries a CSS media query. The image without a query is the default and
//! is rendered as the picture's `<img>`; the rest become `<source>` elements.

use std::ops::Deref;

use crate::data::ArtDirectionProps;
use crate::image_source::ImageSource;
use crate::source::ArtDirectionSource;

/// The host's media query capability, e.g. `window.matchMedia` in a browser
pub trait MediaMatcher {
    /// Whether the environment currently satisfies `query`
    fn matches(&self, query: &str) -> bool;
}

impl<F> MediaMatcher for F
where
    F: Fn(&str) -> bool,
{
    fn matches(&self, query: &str) -> bool {
        self(query)
    }
}

/// Images ordered so that every image with a media query comes before the default(s)
#[derive(Debug, Clone, PartialEq)]
pub struct MediaGroup {
    images: Vec<ImageSource>,
    default_count: usize,
}

impl MediaGroup {
    /// Number of images without a media query
    pub fn default_count(&self) -> usize {
        self.default_count
    }

    /// More than one default image was found
    pub fn is_ambiguous(&self) -> bool {
        self.default_count > 1
    }

    pub fn into_vec(self) -> Vec<ImageSource> {
        self.images
    }

    /// The conditional `<source>` for every image carrying a media query, in group order
    pub fn sources(&self) -> Vec<ArtDirectionSource> {
        let sources: Vec<ArtDirectionSource> = self
            .images
            .iter()
            .filter_map(ArtDirectionSource::from_image)
            .collect();
        debug!("Created {} art direction sources", sources.len());
        sources
    }

    /// The first image without a media query
    pub fn default_image(&self) -> Option<&ImageSource> {
        self.images.iter().find(|image| image.is_default())
    }
}

impl Deref for MediaGroup {
    type Target = [ImageSource];

    fn deref(&self) -> &Self::Target {
        &self.images
    }
}

/// Move the images without a media query to the end, keeping the relative order of both groups.
/// Warns when more than one default image is present; all of them are kept.
pub fn group_by_media(images: &[ImageSource]) -> MediaGroup {
    let (with_media, without_media): (Vec<&ImageSource>, Vec<&ImageSource>) =
        images.iter().partition(|image| image.media().is_some());

    if without_media.len() > 1 {
        warn!(
            "We've found {} sources without a media property. \
             Art direction stacks should contain at most one source without media.",
            without_media.len()
        );
    }

    MediaGroup {
        default_count: without_media.len(),
        images: with_media
            .into_iter()
            .chain(without_media)
            .cloned()
            .collect(),
    }
}

/// Build the conditional `<source>` list for the image stack in `props`.
/// Returns `None` when there is no stack or it holds a single image.
pub fn create_art_direction_sources(props: &ArtDirectionProps) -> Option<Vec<ArtDirectionSource>> {
    let images = props.images()?;
    if images.len() <= 1 {
        return None;
    }

    Some(group_by_media(images).sources())
}

/// Whether `media` currently matches. Without a query or a matcher this is always false.
pub fn matches_media(media: Option<&str>, matcher: Option<&dyn MediaMatcher>) -> bool {
    match (media.filter(|m| !m.is_empty()), matcher) {
        (Some(media), Some(matcher)) => matcher.matches(media),
        _ => false,
    }
}

/// A stack only needs art direction when it has several images, one of them conditional
pub fn has_art_direction_support(images: &[ImageSource]) -> bool {
    images.len() > 1 && images.iter().any(|image| !image.is_default())
}

/// The image that applies right now: the first matching conditional image,
/// else the default image, else the first image.
pub fn current_image<'a>(
    images: &'a [ImageSource],
    matcher: Option<&dyn MediaMatcher>,
) -> Option<&'a ImageSource> {
    images
        .iter()
        .find(|image| matches_media(image.media(), matcher))
        .or_else(|| images.iter().find(|image| image.is_default()))
        .or_else(|| images.first())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::WEBP_MIME_TYPE;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn fluid_image() -> ImageSource {
        ImageSource {
            aspect_ratio: Some(1.0),
            ..ImageSource::new("test_fluid_image.jpg")
        }
        .with_src_set("some srcSet")
        .with_src_set_webp("some srcSetWebp")
        .with_sizes("(max-width: 600px) 100vw, 600px")
    }

    fn fixed_image() -> ImageSource {
        ImageSource {
            width: Some(100),
            height: Some(100),
            ..ImageSource::new("test_fixed_image.jpg")
        }
        .with_src_set("some srcSet")
    }

    fn stack(image: ImageSource) -> Vec<ImageSource> {
        vec![
            image.clone(),
            image.with_media("(min-width: 491px)"),
            image.with_media("(min-width: 1401px)"),
        ]
    }

    fn wide_viewport(query: &str) -> bool {
        query == "(min-width: 1401px)"
    }

    #[test]
    fn test_group_by_media_moves_default_to_end() {
        init();
        let images = stack(fluid_image());
        let grouped = group_by_media(&images);
        assert_eq!(grouped.len(), 3);
        assert_eq!(grouped[0], images[1]);
        assert_eq!(grouped[1], images[2]);
        assert_eq!(grouped[2], images[0]);
        assert_eq!(grouped.default_count(), 1);
        assert!(!grouped.is_ambiguous());
    }

    #[test]
    fn test_group_by_media_keeps_every_default() {
        init();
        let mut images = stack(fluid_image());
        images.push(ImageSource::new("second_default.jpg"));
        let grouped = group_by_media(&images);
        assert!(grouped.is_ambiguous());
        assert_eq!(grouped.default_count(), 2);
        let order: Vec<&str> = grouped.iter().map(|image| image.src.as_str()).collect();
        assert_eq!(
            order,
            vec![
                "test_fluid_image.jpg",
                "test_fluid_image.jpg",
                "test_fluid_image.jpg",
                "second_default.jpg"
            ]
        );
        assert!(grouped[..2].iter().all(|image| !image.is_default()));
        assert!(grouped[2..].iter().all(ImageSource::is_default));
    }

    #[test]
    fn test_group_by_media_treats_empty_media_as_default() {
        init();
        let images = vec![
            ImageSource::new("a.jpg").with_media(""),
            ImageSource::new("b.jpg").with_media("print"),
        ];
        let grouped = group_by_media(&images).into_vec();
        assert_eq!(grouped[0].src, "b.jpg");
        assert_eq!(grouped[1].src, "a.jpg");
    }

    #[test]
    fn test_create_art_direction_sources_fluid() {
        init();
        let props = ArtDirectionProps::fluid(stack(fluid_image()));
        let sources = create_art_direction_sources(&props).unwrap();
        let sizes = Some("(max-width: 600px) 100vw, 600px".to_owned());
        assert_eq!(
            sources,
            vec![
                ArtDirectionSource::new(
                    "(min-width: 491px)".to_owned(),
                    sizes.clone(),
                    "test_fluid_image.jpg".to_owned(),
                    Some("some srcSetWebp".to_owned()),
                    Some(WEBP_MIME_TYPE.to_owned()),
                ),
                ArtDirectionSource::new(
                    "(min-width: 1401px)".to_owned(),
                    sizes,
                    "test_fluid_image.jpg".to_owned(),
                    Some("some srcSetWebp".to_owned()),
                    Some(WEBP_MIME_TYPE.to_owned()),
                ),
            ]
        );
    }

    #[test]
    fn test_create_art_direction_sources_fixed_without_webp() {
        init();
        let props = ArtDirectionProps::fixed(stack(fixed_image()));
        let html: Vec<String> = create_art_direction_sources(&props)
            .unwrap()
            .iter()
            .map(ArtDirectionSource::to_html)
            .collect();
        assert_eq!(
            html,
            vec![
                r#"<source media="(min-width: 491px)" src="test_fixed_image.jpg" srcset="some srcSet">"#,
                r#"<source media="(min-width: 1401px)" src="test_fixed_image.jpg" srcset="some srcSet">"#,
            ]
        );
    }

    #[test]
    fn test_create_art_direction_sources_empty() {
        assert_eq!(create_art_direction_sources(&ArtDirectionProps::default()), None);
        assert_eq!(
            create_art_direction_sources(&ArtDirectionProps::fluid(vec![])),
            None
        );
        assert_eq!(
            create_art_direction_sources(&ArtDirectionProps::fluid(vec![fluid_image()])),
            None
        );
    }

    #[test]
    fn test_create_art_direction_sources_is_idempotent() {
        let props = ArtDirectionProps::fluid(stack(fluid_image()));
        assert_eq!(
            create_art_direction_sources(&props),
            create_art_direction_sources(&props)
        );
    }

    #[test]
    fn test_matches_media() {
        let matcher: &dyn MediaMatcher = &wide_viewport;
        assert!(matches_media(Some("(min-width: 1401px)"), Some(matcher)));
        assert!(!matches_media(Some("(min-width: 491px)"), Some(matcher)));
        assert!(!matches_media(None, Some(matcher)));
        assert!(!matches_media(Some(""), Some(matcher)));
    }

    #[test]
    fn test_group_by_media_is_idempotent() {
        init();
        let mut images = stack(fixed_image());
        images.push(fixed_image());
        let first = group_by_media(&images);
        let second = group_by_media(&images);
        assert_eq!(first, second);
        assert_eq!(group_by_media(&first), first);
    }

    #[test]
    fn test_matches_media_is_idempotent() {
        let matcher: &dyn MediaMatcher = &wide_viewport;
        for media in [Some("(min-width: 1401px)"), Some("(min-width: 491px)"), None] {
            assert_eq!(
                matches_media(media, Some(matcher)),
                matches_media(media, Some(matcher))
            );
        }
        assert!(matches_media(Some("(min-width: 1401px)"), Some(matcher)));
        assert!(matches_media(Some("(min-width: 1401px)"), Some(matcher)));
    }

    #[test]
    fn test_matches_media_without_matcher() {
        assert!(!matches_media(Some("(min-width: 1401px)"), None));
    }

    #[test]
    fn test_has_art_direction_support() {
        assert!(has_art_direction_support(&stack(fluid_image())));
        assert!(!has_art_direction_support(&[fluid_image()]));
        assert!(!has_art_direction_support(&[
            fluid_image(),
            fixed_image()
        ]));
    }

    #[test]
    fn test_current_image() {
        let images = stack(fluid_image());
        let matcher: &dyn MediaMatcher = &wide_viewport;
        assert_eq!(current_image(&images, Some(matcher)), Some(&images[2]));
        assert_eq!(current_image(&images, None), Some(&images[0]));

        let no_default = vec![
            fixed_image().with_media("print"),
            fixed_image().with_media("(orientation: portrait)"),
        ];
        assert_eq!(current_image(&no_default, Some(matcher)), Some(&no_default[0]));
        assert_eq!(current_image(&[], Some(matcher)), None);
    }
}
