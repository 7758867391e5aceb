use crate::locale::Locale;

/// Every kind of content the store serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    About,
    Services,
    LessonItems,
    LessonPreviews,
    Pricing,
    Testimonials,
    Faq,
}

impl ContentKind {
    pub const ALL: [ContentKind; 7] = [
        ContentKind::About,
        ContentKind::Services,
        ContentKind::LessonItems,
        ContentKind::LessonPreviews,
        ContentKind::Pricing,
        ContentKind::Testimonials,
        ContentKind::Faq,
    ];

    /// Filename of the baseline variant inside the content store.
    pub fn base_filename(self) -> &'static str {
        match self {
            Self::About => "about.md",
            Self::Services => "services.json",
            Self::LessonItems | Self::LessonPreviews => "lessons.json",
            Self::Pricing => "pricing.json",
            Self::Testimonials => "testimonials.json",
            Self::Faq => "faq.json",
        }
    }

    /// Path of the HTTP endpoint serving this kind.
    pub fn route(self) -> &'static str {
        match self {
            Self::About => "/about",
            Self::Services => "/services",
            Self::LessonItems => "/lessons/items",
            Self::LessonPreviews => "/lessons",
            Self::Pricing => "/pricing",
            Self::Testimonials => "/testimonials",
            Self::Faq => "/faq",
        }
    }

    /// Human-readable name used in not-found messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About content",
            Self::Services => "Services",
            Self::LessonItems => "Lesson items",
            Self::LessonPreviews => "Lesson previews",
            Self::Pricing => "Pricing plans",
            Self::Testimonials => "Testimonials",
            Self::Faq => "FAQ items",
        }
    }

    /// Pricing was never translated and always reads the baseline file.
    pub fn is_localized(self) -> bool {
        !matches!(self, Self::Pricing)
    }

    /// Message for a request that found nothing, e.g. "FAQ items not found"
    /// or "FAQ items not found for language 'ru'".
    pub fn not_found_message(self, locale: &Locale) -> String {
        if self.is_localized() && !locale.is_baseline() {
            format!("{} not found for language '{}'", self.label(), locale)
        } else {
            format!("{} not found", self.label())
        }
    }
}
