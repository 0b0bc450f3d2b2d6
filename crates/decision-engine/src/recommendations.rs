//! Actionable recommendations generated independently of the buy/sell/hold
//! decision. Rules fire on raw indicator and sentiment state, so callers can
//! surface them even when the headline action is HOLD.

use advisor_core::{
    BandPosition, Confidence, IndicatorBundle, MacdSignal, Recommendation, RecommendationKind,
    SentimentBundle, SentimentLabel, Trend,
};

const ICON_POSITIVE: &str = "check_circle";
const ICON_IDEA: &str = "lightbulb";
const ICON_WARNING: &str = "alert_triangle";

pub fn generate_recommendations(
    indicators: &IndicatorBundle,
    sentiment: &SentimentBundle,
    current_price: f64,
) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    let sr = &indicators.support_resistance;
    let vol = &indicators.volatility;
    let trend = indicators.moving_averages.trend;

    let dip_setup = indicators.bollinger.position == BandPosition::LowerHalf
        && indicators.rsi < 40.0
        && sentiment.combined_label == SentimentLabel::Bullish;
    let pullback_in_uptrend =
        trend.is_up() && current_price < indicators.moving_averages.sma_20 * 0.98;
    if dip_setup || pullback_in_uptrend {
        recs.push(Recommendation {
            kind: RecommendationKind::BuyOpportunity,
            icon: ICON_POSITIVE.to_string(),
            message: format!(
                "Consider buying opportunities on pullbacks near ${:.2}",
                sr.support
            ),
            confidence: if sentiment.combined_score > 0.2 {
                Confidence::High
            } else {
                Confidence::Medium
            },
        });
    }

    if sr.distance_to_resistance_pct < 5.0
        && indicators.macd.signal_type == MacdSignal::Bullish
        && indicators.rsi > 50.0
    {
        recs.push(Recommendation {
            kind: RecommendationKind::BreakoutWatch,
            icon: ICON_IDEA.to_string(),
            message: format!(
                "Monitor for breakout above resistance level at ${:.2}",
                sr.resistance
            ),
            confidence: if vol.volume_spike {
                Confidence::High
            } else {
                Confidence::Medium
            },
        });
    }

    if vol.annualized_volatility > 0.4 || indicators.bollinger.bandwidth > 0.15 {
        recs.push(Recommendation {
            kind: RecommendationKind::RiskWarning,
            icon: ICON_WARNING.to_string(),
            message: format!(
                "High volatility detected ({:.1}%) - use appropriate position sizing",
                vol.annualized_volatility * 100.0
            ),
            confidence: Confidence::High,
        });
    }

    if current_price > sr.support * 1.02 {
        recs.push(Recommendation {
            kind: RecommendationKind::RiskManagement,
            icon: ICON_WARNING.to_string(),
            message: format!(
                "Consider stop-loss orders near ${:.2} to manage risk",
                sr.support * 0.98
            ),
            confidence: Confidence::High,
        });
    }

    if trend == Trend::StrongDowntrend && sentiment.combined_label == SentimentLabel::Bearish {
        recs.push(Recommendation {
            kind: RecommendationKind::Defensive,
            icon: ICON_IDEA.to_string(),
            message: "Consider defensive positioning or hedging strategies".to_string(),
            confidence: Confidence::High,
        });
    }

    if indicators.rsi > 70.0 && indicators.bollinger.position == BandPosition::Overbought {
        recs.push(Recommendation {
            kind: RecommendationKind::OverboughtWarning,
            icon: ICON_WARNING.to_string(),
            message: format!(
                "Overbought conditions detected (RSI: {:.1}) - potential pullback ahead",
                indicators.rsi
            ),
            confidence: Confidence::Medium,
        });
    } else if indicators.rsi < 30.0 && indicators.bollinger.position == BandPosition::Oversold {
        recs.push(Recommendation {
            kind: RecommendationKind::OversoldOpportunity,
            icon: ICON_POSITIVE.to_string(),
            message: format!(
                "Oversold conditions (RSI: {:.1}) - potential bounce opportunity",
                indicators.rsi
            ),
            confidence: Confidence::Medium,
        });
    }

    if vol.volume_spike && indicators.macd.signal_type == MacdSignal::Bullish {
        recs.push(Recommendation {
            kind: RecommendationKind::VolumeConfirmation,
            icon: ICON_POSITIVE.to_string(),
            message: "Strong volume surge confirms bullish momentum - consider adding to positions"
                .to_string(),
            confidence: Confidence::High,
        });
    }

    if sentiment.combined_score > 0.3 && trend.is_down() {
        recs.push(Recommendation {
            kind: RecommendationKind::Contrarian,
            icon: ICON_IDEA.to_string(),
            message: "Positive sentiment despite downtrend - potential reversal setup developing"
                .to_string(),
            confidence: Confidence::Medium,
        });
    }

    if recs.len() < 3 && sentiment.combined_label == SentimentLabel::Bullish {
        recs.push(Recommendation {
            kind: RecommendationKind::General,
            icon: ICON_IDEA.to_string(),
            message: "Maintain watchlist position - wait for clear entry signals".to_string(),
            confidence: Confidence::Medium,
        });
    }

    tracing::debug!(count = recs.len(), "recommendations generated");
    recs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{neutral_bundle, sentiment};
    use advisor_core::VolumeTrend;

    fn kinds(recs: &[Recommendation]) -> Vec<RecommendationKind> {
        recs.iter().map(|r| r.kind).collect()
    }

    #[test]
    fn test_neutral_state_yields_only_stop_loss_hint() {
        // Neutral price sits more than 2% above support, so only the
        // risk-management rule fires
        let recs = generate_recommendations(&neutral_bundle(), &sentiment(0.0, 0.0), 100.0);
        assert_eq!(kinds(&recs), vec![RecommendationKind::RiskManagement]);
        assert_eq!(recs[0].icon, "alert_triangle");
        assert!(recs[0].message.contains("$93.10"));
    }

    #[test]
    fn test_buy_opportunity_on_bullish_dip() {
        let mut bundle = neutral_bundle();
        bundle.bollinger.position = BandPosition::LowerHalf;
        bundle.rsi = 35.0;
        let recs = generate_recommendations(&bundle, &sentiment(0.5, 0.5), 100.0);
        let buy = recs
            .iter()
            .find(|r| r.kind == RecommendationKind::BuyOpportunity)
            .unwrap();
        assert_eq!(buy.confidence, Confidence::High);
        assert!(buy.message.contains("$95.00"));
    }

    #[test]
    fn test_buy_opportunity_on_uptrend_pullback() {
        let mut bundle = neutral_bundle();
        bundle.moving_averages.trend = Trend::Uptrend;
        bundle.moving_averages.sma_20 = 105.0;
        // price below 98% of the 20-day average
        let recs = generate_recommendations(&bundle, &sentiment(0.0, 0.1), 100.0);
        let buy = recs
            .iter()
            .find(|r| r.kind == RecommendationKind::BuyOpportunity)
            .unwrap();
        // weak sentiment keeps the confidence moderate
        assert_eq!(buy.confidence, Confidence::Medium);
    }

    #[test]
    fn test_breakout_watch_near_resistance() {
        let mut bundle = neutral_bundle();
        bundle.support_resistance.distance_to_resistance_pct = 3.0;
        bundle.macd.signal_type = MacdSignal::Bullish;
        bundle.rsi = 55.0;
        let recs = generate_recommendations(&bundle, &sentiment(0.0, 0.0), 100.0);
        let watch = recs
            .iter()
            .find(|r| r.kind == RecommendationKind::BreakoutWatch)
            .unwrap();
        assert_eq!(watch.confidence, Confidence::Medium);
        assert!(watch.message.contains("$105.00"));

        bundle.volatility.volume_spike = true;
        bundle.volatility.volume_trend = VolumeTrend::High;
        let recs = generate_recommendations(&bundle, &sentiment(0.0, 0.0), 100.0);
        let watch = recs
            .iter()
            .find(|r| r.kind == RecommendationKind::BreakoutWatch)
            .unwrap();
        assert_eq!(watch.confidence, Confidence::High);
    }

    #[test]
    fn test_risk_warning_on_volatility_or_wide_bands() {
        let mut bundle = neutral_bundle();
        bundle.volatility.annualized_volatility = 0.55;
        let recs = generate_recommendations(&bundle, &sentiment(0.0, 0.0), 100.0);
        let warning = recs
            .iter()
            .find(|r| r.kind == RecommendationKind::RiskWarning)
            .unwrap();
        assert!(warning.message.contains("55.0%"));

        let mut bundle = neutral_bundle();
        bundle.bollinger.bandwidth = 0.2;
        let recs = generate_recommendations(&bundle, &sentiment(0.0, 0.0), 100.0);
        assert!(recs
            .iter()
            .any(|r| r.kind == RecommendationKind::RiskWarning));
    }

    #[test]
    fn test_no_stop_loss_hint_when_sitting_on_support() {
        let mut bundle = neutral_bundle();
        bundle.support_resistance.support = 99.5;
        let recs = generate_recommendations(&bundle, &sentiment(0.0, 0.0), 100.0);
        assert!(recs
            .iter()
            .all(|r| r.kind != RecommendationKind::RiskManagement));
    }

    #[test]
    fn test_defensive_in_bearish_downtrend() {
        let mut bundle = neutral_bundle();
        bundle.moving_averages.trend = Trend::StrongDowntrend;
        let recs = generate_recommendations(&bundle, &sentiment(-0.6, -0.6), 100.0);
        assert!(recs.iter().any(|r| r.kind == RecommendationKind::Defensive));
    }

    #[test]
    fn test_overbought_and_oversold_are_exclusive() {
        let mut bundle = neutral_bundle();
        bundle.rsi = 78.0;
        bundle.bollinger.position = BandPosition::Overbought;
        let recs = generate_recommendations(&bundle, &sentiment(0.0, 0.0), 100.0);
        let warn = recs
            .iter()
            .find(|r| r.kind == RecommendationKind::OverboughtWarning)
            .unwrap();
        assert!(warn.message.contains("RSI: 78.0"));
        assert!(recs
            .iter()
            .all(|r| r.kind != RecommendationKind::OversoldOpportunity));

        bundle.rsi = 22.0;
        bundle.bollinger.position = BandPosition::Oversold;
        let recs = generate_recommendations(&bundle, &sentiment(0.0, 0.0), 100.0);
        assert!(recs
            .iter()
            .any(|r| r.kind == RecommendationKind::OversoldOpportunity));
    }

    #[test]
    fn test_volume_confirmation_needs_bullish_macd() {
        let mut bundle = neutral_bundle();
        bundle.volatility.volume_spike = true;
        let recs = generate_recommendations(&bundle, &sentiment(0.0, 0.0), 100.0);
        assert!(recs
            .iter()
            .all(|r| r.kind != RecommendationKind::VolumeConfirmation));

        bundle.macd.signal_type = MacdSignal::Bullish;
        let recs = generate_recommendations(&bundle, &sentiment(0.0, 0.0), 100.0);
        assert!(recs
            .iter()
            .any(|r| r.kind == RecommendationKind::VolumeConfirmation));
    }

    #[test]
    fn test_contrarian_on_positive_sentiment_in_downtrend() {
        let mut bundle = neutral_bundle();
        bundle.moving_averages.trend = Trend::Downtrend;
        let recs = generate_recommendations(&bundle, &sentiment(0.6, 0.6), 100.0);
        assert!(recs
            .iter()
            .any(|r| r.kind == RecommendationKind::Contrarian));
    }

    #[test]
    fn test_general_fallback_for_bullish_sentiment() {
        // Bullish sentiment with a quiet chart pads the list with the
        // watchlist hint
        let recs = generate_recommendations(&neutral_bundle(), &sentiment(0.4, 0.4), 100.0);
        assert!(recs.len() >= 2);
        assert_eq!(recs.last().unwrap().kind, RecommendationKind::General);

        // Bearish sentiment gets no filler
        let recs = generate_recommendations(&neutral_bundle(), &sentiment(-0.4, -0.4), 100.0);
        assert!(recs
            .iter()
            .all(|r| r.kind != RecommendationKind::General));
    }
}
