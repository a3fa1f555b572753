//! Format Models

/// Format Model
///
/// The product's delivery format; only the slug is shown to buyers.
#[derive(Debug, Clone, PartialEq)]
pub struct Format {
    pub id: i64,
    pub slug: String,
}
