//! Lesson preview projection.

use crate::models::{LessonItem, LessonPreview};

/// Build the preview card for a lesson.
///
/// The image is looked up by lesson id, the single chip is the first word of
/// the title, and the caption joins the title with the first comma-separated
/// clause of the description.
pub fn to_preview(item: &LessonItem) -> LessonPreview {
    let chips = item
        .title
        .split_whitespace()
        .next()
        .map(|word| vec![word.to_string()])
        .unwrap_or_default();

    let clause = item.description.split(',').next().unwrap_or_default().trim();
    let caption = if clause.is_empty() {
        item.title.trim().to_string()
    } else {
        format!("{} {}", item.title.trim(), clause)
    };

    LessonPreview {
        image_url: image_url(&item.id),
        chips,
        caption,
    }
}

/// Previews for a collection, in the same order.
pub fn to_previews(items: &[LessonItem]) -> Vec<LessonPreview> {
    items.iter().map(to_preview).collect()
}

fn image_url(id: &str) -> String {
    format!("/images/lessons/{}.jpg", id)
}
