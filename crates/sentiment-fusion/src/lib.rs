//! Blends an externally computed news-sentiment compound score with a
//! price-derived sentiment score into one combined score and label.
//!
//! Raw text scoring happens upstream; this crate only consumes the compound
//! scores. Callers with no articles pass a zero news score by convention.

use advisor_core::{SentimentBundle, SentimentLabel};

/// News weight in the combined score; the stock-derived score takes the rest.
/// Distinct from the decision engine's internal 0.5/0.3/0.2 category blend.
pub const NEWS_WEIGHT: f64 = 0.6;
pub const STOCK_WEIGHT: f64 = 0.4;

const BULLISH_THRESHOLD: f64 = 0.1;
const BEARISH_THRESHOLD: f64 = -0.1;

/// Combine a news compound score and a price-derived sentiment score, both
/// in [-1, 1], into a `SentimentBundle`. Out-of-range finite inputs are
/// clamped; validation of non-finite input happens at the decision boundary.
pub fn combine(news_compound: f64, stock_score: f64) -> SentimentBundle {
    let news_compound = news_compound.clamp(-1.0, 1.0);
    let stock_score = stock_score.clamp(-1.0, 1.0);

    let combined_score = news_compound * NEWS_WEIGHT + stock_score * STOCK_WEIGHT;

    let combined_label = if combined_score >= BULLISH_THRESHOLD {
        SentimentLabel::Bullish
    } else if combined_score <= BEARISH_THRESHOLD {
        SentimentLabel::Bearish
    } else {
        SentimentLabel::Neutral
    };

    SentimentBundle {
        news_compound,
        stock_score,
        combined_score,
        combined_label,
    }
}
