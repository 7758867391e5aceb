use serde::{Deserialize, Serialize};

/// Body of the about page: raw Markdown, rendered by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutResponse {
    pub content: String,
}

/// A service offered on the services page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceItem {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// A lesson record as authored in `lessons.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonItem {
    pub id: String,
    #[serde(default)]
    pub icon: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "basePrice", default, skip_serializing_if = "Option::is_none")]
    pub base_price: Option<f64>,
}

/// Display-oriented projection of a [`LessonItem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonPreview {
    pub image_url: String,
    pub chips: Vec<String>,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingPlan {
    pub name: String,
    pub lessons: u32,
    pub price: f64,
    pub discount_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}
