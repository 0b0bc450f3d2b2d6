use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// OHLCV bar data, ordered oldest-to-newest in every series this core consumes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceBar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// MACD crossover classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacdSignal {
    Bullish,
    Bearish,
    Neutral,
}

impl MacdSignal {
    pub fn as_str(&self) -> &'static str {
        match self {
            MacdSignal::Bullish => "bullish",
            MacdSignal::Bearish => "bearish",
            MacdSignal::Neutral => "neutral",
        }
    }
}

/// Position of the current close relative to the Bollinger envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandPosition {
    Overbought,
    UpperHalf,
    LowerHalf,
    Oversold,
    Middle,
}

/// Moving-average trend classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    StrongUptrend,
    Uptrend,
    Sideways,
    Downtrend,
    StrongDowntrend,
    InsufficientData,
}

impl Trend {
    pub fn is_up(&self) -> bool {
        matches!(self, Trend::Uptrend | Trend::StrongUptrend)
    }

    pub fn is_down(&self) -> bool {
        matches!(self, Trend::Downtrend | Trend::StrongDowntrend)
    }

    pub fn is_strong(&self) -> bool {
        matches!(self, Trend::StrongUptrend | Trend::StrongDowntrend)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeTrend {
    High,
    Average,
    Low,
}

/// Direction of the trailing run of bar-to-bar changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecentTrend {
    Bullish,
    Bearish,
    Neutral,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Macd {
    pub line: f64,
    pub signal: f64,
    pub signal_type: MacdSignal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bollinger {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    pub position: BandPosition,
    pub bandwidth: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovingAverages {
    pub sma_20: f64,
    pub sma_50: f64,
    pub sma_200: f64,
    pub trend: Trend,
}

/// Nearest and next support/resistance levels with signed % distances
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportResistance {
    pub support: f64,
    pub resistance: f64,
    pub next_support: f64,
    pub next_resistance: f64,
    pub distance_to_support_pct: f64,
    pub distance_to_resistance_pct: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolatilityMetrics {
    pub annualized_volatility: f64,
    pub volume_trend: VolumeTrend,
    pub volume_spike: bool,
    pub volume_ratio: f64,
}

/// Trailing price-change statistics feeding the momentum category score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MomentumSnapshot {
    pub change_24h_pct: f64,
    pub change_7d_pct: f64,
    pub recent_trend: RecentTrend,
}

/// Which indicators were computed from a full window vs. degraded sentinels.
/// Lets callers tell "neutral by convention" apart from "actually computed".
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DataCoverage {
    pub samples: usize,
    pub rsi: bool,
    pub macd: bool,
    pub macd_signal: bool,
    pub bollinger: bool,
    pub moving_averages: bool,
    pub support_resistance: bool,
    pub volatility: bool,
}

/// Immutable indicator snapshot computed fresh per analysis request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorBundle {
    pub rsi: f64,
    pub macd: Macd,
    pub bollinger: Bollinger,
    pub moving_averages: MovingAverages,
    pub support_resistance: SupportResistance,
    pub volatility: VolatilityMetrics,
    pub momentum: MomentumSnapshot,
    pub coverage: DataCoverage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    Bullish,
    Neutral,
    Bearish,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Bullish => "bullish",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Bearish => "bearish",
        }
    }
}

/// News compound score and price-derived score with their 60/40 blend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentBundle {
    pub news_compound: f64,
    pub stock_score: f64,
    pub combined_score: f64,
    pub combined_label: SentimentLabel,
}

/// Per-factor normalized scores, each in [-1, 1]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CategoryScores {
    pub technical: f64,
    pub sentiment: f64,
    pub momentum: f64,
    pub volatility: f64,
    pub volume: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Buy,
    Sell,
    Hold,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Buy => "BUY",
            Action::Sell => "SELL",
            Action::Hold => "HOLD",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
            Confidence::VeryHigh => "very_high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeHorizon {
    #[serde(rename = "N/A")]
    NotApplicable,
    #[serde(rename = "short_term (1-7 days)")]
    ShortTerm,
    #[serde(rename = "medium_term (1-4 weeks)")]
    MediumTerm,
    #[serde(rename = "short_to_medium_term (3-14 days)")]
    ShortToMediumTerm,
}

impl TimeHorizon {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeHorizon::NotApplicable => "N/A",
            TimeHorizon::ShortTerm => "short_term (1-7 days)",
            TimeHorizon::MediumTerm => "medium_term (1-4 weeks)",
            TimeHorizon::ShortToMediumTerm => "short_to_medium_term (3-14 days)",
        }
    }
}

/// The single actionable output of the decision engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    pub action: Action,
    pub price_target: f64,
    pub current_price: f64,
    pub confidence: Confidence,
    pub overall_score: f64,
    pub category_scores: CategoryScores,
    pub explanation: String,
    pub risk_level: RiskLevel,
    pub time_horizon: TimeHorizon,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    BuyOpportunity,
    BreakoutWatch,
    RiskWarning,
    RiskManagement,
    Defensive,
    OverboughtWarning,
    OversoldOpportunity,
    VolumeConfirmation,
    Contrarian,
    General,
}

/// One rule-based advisory message, emitted alongside (not instead of) the
/// decision
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub icon: String,
    pub message: String,
    pub confidence: Confidence,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_wire_labels() {
        assert_eq!(serde_json::to_string(&Action::Buy).unwrap(), "\"BUY\"");
        assert_eq!(serde_json::to_string(&Action::Hold).unwrap(), "\"HOLD\"");
    }

    #[test]
    fn test_snake_case_labels() {
        assert_eq!(
            serde_json::to_string(&Trend::StrongUptrend).unwrap(),
            "\"strong_uptrend\""
        );
        assert_eq!(
            serde_json::to_string(&BandPosition::UpperHalf).unwrap(),
            "\"upper_half\""
        );
        assert_eq!(
            serde_json::to_string(&Confidence::VeryHigh).unwrap(),
            "\"very_high\""
        );
    }

    #[test]
    fn test_time_horizon_labels() {
        assert_eq!(
            serde_json::to_string(&TimeHorizon::ShortTerm).unwrap(),
            "\"short_term (1-7 days)\""
        );
        assert_eq!(TimeHorizon::NotApplicable.as_str(), "N/A");
    }

    #[test]
    fn test_confidence_ordering() {
        assert!(Confidence::VeryHigh > Confidence::High);
        assert!(Confidence::High > Confidence::Medium);
        assert!(Confidence::Medium > Confidence::Low);
    }

    #[test]
    fn test_trend_helpers() {
        assert!(Trend::StrongUptrend.is_up());
        assert!(Trend::StrongUptrend.is_strong());
        assert!(Trend::Downtrend.is_down());
        assert!(!Trend::Sideways.is_up());
        assert!(!Trend::InsufficientData.is_strong());
    }
}
