use crate::media::MediaMatcher;

lazy_static::lazy_static! {
    // (min-width: 491px), (max-height: 800), ...
    static ref RANGE_FEATURE: regex::Regex = regex::Regex::new(
        r"^\(\s*(min|max)-(width|height)\s*:\s*(\d+(?:\.\d+)?)(?:px)?\s*\)$"
    )
    .unwrap();

    static ref ORIENTATION_FEATURE: regex::Regex = regex::Regex::new(
        r"^\(\s*orientation\s*:\s*(portrait|landscape)\s*\)$"
    )
    .unwrap();

    static ref AND: regex::Regex = regex::Regex::new(r"\s+and\s+").unwrap();
}

/// A fixed screen size standing in for a browser's viewport outside of one.
/// Only understands width, height and orientation features; anything else never matches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticViewport {
    pub width: f64,
    pub height: f64,
}

impl StaticViewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        let negated = query.starts_with("not ");
        let query = if negated {
            query["not ".len()..].trim_start()
        } else {
            query.as_str()
        };
        let query = query.strip_prefix("only ").unwrap_or(query);

        let mut parts = AND.split(query).peekable();
        // A leading media type, when present, must be one a screen satisfies
        if let Some(first) = parts.peek() {
            if !first.starts_with('(') {
                if !matches!(*first, "all" | "screen") {
                    return negated;
                }
                parts.next();
            }
        }

        let mut matched = true;
        for feature in parts {
            match self.matches_feature(feature) {
                Some(true) => {}
                Some(false) => matched = false,
                None => {
                    debug!("Unsupported media feature {}", feature);
                    return false;
                }
            }
        }
        matched != negated
    }

    /// `None` when the feature is not understood
    fn matches_feature(&self, feature: &str) -> Option<bool> {
        if let Some(captures) = RANGE_FEATURE.captures(feature) {
            let value: f64 = captures[3].parse().ok()?;
            let actual = match &captures[2] {
                "width" => self.width,
                _ => self.height,
            };
            return Some(match &captures[1] {
                "min" => actual >= value,
                _ => actual <= value,
            });
        }
        if let Some(captures) = ORIENTATION_FEATURE.captures(feature) {
            let portrait = self.height >= self.width;
            return Some((&captures[1] == "portrait") == portrait);
        }
        None
    }
}

impl MediaMatcher for StaticViewport {
    /// A comma separated query list matches when any of its queries does
    fn matches(&self, query: &str) -> bool {
        query.split(',').any(|q| self.matches_query(q))
    }
}
