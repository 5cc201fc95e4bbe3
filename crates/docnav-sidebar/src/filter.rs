//! Bucket filtering of page records.
//!
//! A "bucket" is a top-level path prefix (e.g. `/orm`) that scopes which
//! pages are visible in the sidebar at a time. The effective bucket comes
//! from the caller's navigation state, overridden by the current slug's
//! first segment when that segment names a configured bucket.

use docnav_config::Config;

use crate::record::{PageRecord, slug_segments};

/// Viewport mode the sidebar renders in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Viewport {
    /// Desktop layout. No sidebar is shown on the landing page.
    Desktop,
    /// Mobile layout. The sidebar is shown on every page.
    Mobile,
}

/// Bucket matching strategy.
///
/// The original implementation matched by substring containment, which
/// lets a bucket like `/orm` also capture `/orm-extended/...`. Segment
/// prefix matching is the default; substring matching is kept as an
/// explicitly named legacy mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BucketMatch {
    /// The bucket's segments must be a prefix of the slug's segments.
    #[default]
    SegmentPrefix,
    /// Legacy behavior: the slug must contain the bucket as a substring.
    Substring,
}

/// Filters page records down to the current navigation bucket.
#[derive(Clone, Debug)]
pub struct EdgeFilter {
    bucket_names: Vec<String>,
    match_mode: BucketMatch,
}

impl EdgeFilter {
    /// Create a filter over the given top-level bucket names.
    #[must_use]
    pub fn new(bucket_names: Vec<String>) -> Self {
        Self {
            bucket_names,
            match_mode: BucketMatch::default(),
        }
    }

    /// Create a filter from the configured header menu.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config
                .bucket_names()
                .into_iter()
                .map(str::to_owned)
                .collect(),
        )
    }

    /// Override the bucket matching strategy.
    #[must_use]
    pub fn with_match_mode(mut self, match_mode: BucketMatch) -> Self {
        self.match_mode = match_mode;
        self
    }

    /// Select the records relevant to the current navigation context.
    ///
    /// `bucket_name` defaults to `/` (everything) when absent. When `slug`
    /// is given and its first segment names a configured bucket, that
    /// bucket overrides `bucket_name`. In desktop mode the landing page
    /// (`slug` exactly `/`) shows no sidebar, so the output is empty.
    ///
    /// Input order is preserved. Unknown bucket names are filtered by
    /// their literal value, which may yield an empty result.
    #[must_use]
    pub fn filter<'a>(
        &self,
        records: &'a [PageRecord],
        bucket_name: Option<&str>,
        slug: Option<&str>,
        viewport: Viewport,
    ) -> Vec<&'a PageRecord> {
        if viewport == Viewport::Desktop && slug.is_some_and(is_root_slug) {
            return Vec::new();
        }

        let bucket = self.effective_bucket(bucket_name, slug);

        records
            .iter()
            .filter(|record| self.matches(&record.slug, &bucket))
            .collect()
    }

    /// Resolve the effective bucket from caller state and current slug.
    fn effective_bucket(&self, bucket_name: Option<&str>, slug: Option<&str>) -> String {
        let bucket = bucket_name.unwrap_or("/");

        if let Some(slug) = slug
            && let Some(first) = slug_segments(slug).next()
        {
            let slug_bucket = format!("/{first}");
            if self.bucket_names.iter().any(|name| *name == slug_bucket) {
                return slug_bucket;
            }
        }

        bucket.to_owned()
    }

    /// Check whether a slug falls under a bucket.
    fn matches(&self, slug: &str, bucket: &str) -> bool {
        match self.match_mode {
            BucketMatch::SegmentPrefix => {
                let mut slug_iter = slug_segments(slug);
                slug_segments(bucket).all(|segment| slug_iter.next() == Some(segment))
            }
            BucketMatch::Substring => slug.contains(bucket),
        }
    }
}

/// True when a slug denotes the site root.
fn is_root_slug(slug: &str) -> bool {
    slug_segments(slug).next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(slug: &str) -> PageRecord {
        PageRecord {
            slug: slug.to_owned(),
            title: slug.to_owned(),
            order: None,
            is_index: false,
            static_link: None,
        }
    }

    fn filter_with(buckets: &[&str]) -> EdgeFilter {
        EdgeFilter::new(buckets.iter().map(|b| (*b).to_owned()).collect())
    }

    fn slugs<'a>(records: &[&'a PageRecord]) -> Vec<&'a str> {
        records.iter().map(|r| r.slug.as_str()).collect()
    }

    #[test]
    fn test_filter_keeps_records_under_bucket() {
        let records = vec![
            record("/orm/queries"),
            record("/guides/deploy"),
            record("/orm/client/setup"),
        ];
        let filter = filter_with(&["/orm", "/guides"]);

        let out = filter.filter(&records, Some("/orm"), None, Viewport::Desktop);

        assert_eq!(slugs(&out), vec!["/orm/queries", "/orm/client/setup"]);
    }

    #[test]
    fn test_filter_slug_bucket_overrides_bucket_name() {
        let records = vec![record("/orm/queries"), record("/guides/deploy")];
        let filter = filter_with(&["/orm", "/guides"]);

        let out = filter.filter(
            &records,
            Some("/orm"),
            Some("/guides/deploy"),
            Viewport::Desktop,
        );

        assert_eq!(slugs(&out), vec!["/guides/deploy"]);
    }

    #[test]
    fn test_filter_unknown_slug_bucket_keeps_bucket_name() {
        let records = vec![record("/orm/queries"), record("/misc/page")];
        let filter = filter_with(&["/orm"]);

        let out = filter.filter(
            &records,
            Some("/orm"),
            Some("/misc/page"),
            Viewport::Desktop,
        );

        assert_eq!(slugs(&out), vec!["/orm/queries"]);
    }

    #[test]
    fn test_filter_defaults_to_everything() {
        let records = vec![record("/orm/queries"), record("/guides/deploy")];
        let filter = filter_with(&["/orm", "/guides"]);

        let out = filter.filter(&records, None, None, Viewport::Desktop);

        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_filter_desktop_root_slug_yields_empty() {
        let records = vec![record("/orm/queries")];
        let filter = filter_with(&["/orm"]);

        let out = filter.filter(&records, Some("/"), Some("/"), Viewport::Desktop);

        assert!(out.is_empty());
    }

    #[test]
    fn test_filter_mobile_root_slug_keeps_everything() {
        let records = vec![record("/orm/queries")];
        let filter = filter_with(&["/orm"]);

        let out = filter.filter(&records, Some("/"), Some("/"), Viewport::Mobile);

        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_filter_unknown_bucket_falls_back_to_literal() {
        let records = vec![record("/orm/queries")];
        let filter = filter_with(&["/orm"]);

        let out = filter.filter(&records, Some("/nothing"), None, Viewport::Desktop);

        assert!(out.is_empty());
    }

    #[test]
    fn test_segment_prefix_rejects_sibling_with_common_prefix() {
        let records = vec![record("/orm/queries"), record("/orm-extended/queries")];
        let filter = filter_with(&["/orm"]);

        let out = filter.filter(&records, Some("/orm"), None, Viewport::Desktop);

        assert_eq!(slugs(&out), vec!["/orm/queries"]);
    }

    #[test]
    fn test_substring_mode_reproduces_legacy_false_positive() {
        let records = vec![record("/orm/queries"), record("/orm-extended/queries")];
        let filter = filter_with(&["/orm"]).with_match_mode(BucketMatch::Substring);

        let out = filter.filter(&records, Some("/orm"), None, Viewport::Desktop);

        assert_eq!(slugs(&out), vec!["/orm/queries", "/orm-extended/queries"]);
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let records = vec![
            record("/orm/z"),
            record("/orm/a"),
            record("/orm/m"),
        ];
        let filter = filter_with(&["/orm"]);

        let out = filter.filter(&records, Some("/orm"), None, Viewport::Desktop);

        assert_eq!(slugs(&out), vec!["/orm/z", "/orm/a", "/orm/m"]);
    }
}
