use super::{ContentKind, ContentStore};
use crate::error::ContentError;
use crate::locale::Locale;
use crate::models::{
    AboutResponse, FaqItem, LessonItem, LessonPreview, PricingPlan, ServiceItem, Testimonial,
};
use crate::preview::to_previews;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{error, warn};

impl ContentStore {
    /// Raw Markdown of the about page.
    pub fn load_about(&self, locale: &Locale) -> Result<AboutResponse, ContentError> {
        let kind = ContentKind::About;
        let path = self.path_for(kind, locale);
        let result = read_text(&path).and_then(|content| {
            if content.is_empty() {
                Err(ContentError::Empty { path })
            } else {
                Ok(AboutResponse { content })
            }
        });
        report(kind, locale, result)
    }

    pub fn load_services(&self, locale: &Locale) -> Result<Vec<ServiceItem>, ContentError> {
        self.load_collection(ContentKind::Services, locale)
    }

    /// Lesson records exactly as authored.
    pub fn list_lesson_items(&self, locale: &Locale) -> Result<Vec<LessonItem>, ContentError> {
        self.load_collection(ContentKind::LessonItems, locale)
    }

    /// Preview cards derived from the lesson records.
    pub fn list_lesson_previews(
        &self,
        locale: &Locale,
    ) -> Result<Vec<LessonPreview>, ContentError> {
        let items: Vec<LessonItem> =
            self.load_collection(ContentKind::LessonPreviews, locale)?;
        Ok(to_previews(&items))
    }

    /// Pricing has no localized variants.
    pub fn load_pricing(&self) -> Result<Vec<PricingPlan>, ContentError> {
        self.load_collection(ContentKind::Pricing, &Locale::baseline())
    }

    pub fn load_testimonials(&self, locale: &Locale) -> Result<Vec<Testimonial>, ContentError> {
        self.load_collection(ContentKind::Testimonials, locale)
    }

    pub fn load_faq(&self, locale: &Locale) -> Result<Vec<FaqItem>, ContentError> {
        self.load_collection(ContentKind::Faq, locale)
    }

    fn path_for(&self, kind: ContentKind, locale: &Locale) -> PathBuf {
        if kind.is_localized() {
            self.resolve_path(kind.base_filename(), locale)
        } else {
            self.resolve_path(kind.base_filename(), &Locale::baseline())
        }
    }

    fn load_collection<T: DeserializeOwned>(
        &self,
        kind: ContentKind,
        locale: &Locale,
    ) -> Result<Vec<T>, ContentError> {
        let path = self.path_for(kind, locale);
        let result = read_text(&path).and_then(|text| parse_collection(path, &text));
        report(kind, locale, result)
    }
}

fn read_text(path: &Path) -> Result<String, ContentError> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ContentError::Missing {
            path: path.to_path_buf(),
        },
        _ => ContentError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

fn parse_collection<T: DeserializeOwned>(
    path: PathBuf,
    text: &str,
) -> Result<Vec<T>, ContentError> {
    match serde_json::from_str::<Vec<T>>(text) {
        Ok(items) if items.is_empty() => Err(ContentError::Empty { path }),
        Ok(items) => Ok(items),
        Err(source) => Err(ContentError::Parse { path, source }),
    }
}

/// Log a failed load. The result itself passes through unchanged.
fn report<T>(
    kind: ContentKind,
    locale: &Locale,
    result: Result<T, ContentError>,
) -> Result<T, ContentError> {
    if let Err(e) = &result {
        match e {
            ContentError::Missing { .. } | ContentError::Empty { .. } => {
                warn!(kind = kind.label(), locale = %locale, "{}", e)
            }
            ContentError::Io { .. } | ContentError::Parse { .. } => {
                error!(kind = kind.label(), locale = %locale, "{}", e)
            }
        }
    }
    result
}
