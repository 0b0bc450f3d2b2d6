use advisor_core::{
    Action, AdvisorError, Confidence, Decision, DecisionConfig, IndicatorBundle, RiskLevel,
    SentimentBundle, TimeHorizon,
};
use chrono::Utc;

use crate::explain;
use crate::scoring;

/// Weighted-fusion decision engine. Stateless per call; the only state is
/// the injected configuration.
pub struct DecisionEngine {
    config: DecisionConfig,
}

impl DecisionEngine {
    pub fn new() -> Self {
        Self {
            config: DecisionConfig::default(),
        }
    }

    pub fn with_config(config: DecisionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecisionConfig {
        &self.config
    }

    /// Produce the single BUY/SELL/HOLD decision for one analysis request.
    ///
    /// Fails with `InvalidInput` when the current price is non-positive or
    /// any score component is non-finite; degraded indicator data is not an
    /// error (the bundle's sentinels already encode it).
    pub fn decide(
        &self,
        indicators: &IndicatorBundle,
        sentiment: &SentimentBundle,
        current_price: f64,
    ) -> Result<Decision, AdvisorError> {
        if !current_price.is_finite() || current_price <= 0.0 {
            return Err(AdvisorError::InvalidInput(format!(
                "current price must be finite and positive, got {current_price}"
            )));
        }
        for (name, value) in [
            ("news_compound", sentiment.news_compound),
            ("stock_score", sentiment.stock_score),
            ("combined_score", sentiment.combined_score),
        ] {
            if !value.is_finite() {
                return Err(AdvisorError::InvalidInput(format!(
                    "sentiment {name} must be finite, got {value}"
                )));
            }
        }

        let scores = scoring::category_scores(indicators, sentiment);
        let overall_score = self.config.weights.technical * scores.technical
            + self.config.weights.sentiment * scores.sentiment
            + self.config.weights.momentum * scores.momentum
            + self.config.weights.volatility * scores.volatility
            + self.config.weights.volume * scores.volume;

        if !overall_score.is_finite() {
            return Err(AdvisorError::InvalidInput(
                "indicator inputs produced a non-finite score".to_string(),
            ));
        }

        tracing::debug!(
            technical = scores.technical,
            sentiment = scores.sentiment,
            momentum = scores.momentum,
            volatility = scores.volatility,
            volume = scores.volume,
            overall = overall_score,
            "category scores"
        );

        let action = if overall_score >= self.config.buy_threshold {
            Action::Buy
        } else if overall_score <= self.config.sell_threshold {
            Action::Sell
        } else {
            Action::Hold
        };

        let price_target = self.price_target(action, current_price, indicators, overall_score);
        let confidence = confidence_level(
            overall_score,
            [scores.technical, scores.sentiment, scores.momentum],
        );
        let risk_level = risk_level(indicators, overall_score);
        let time_horizon = time_horizon(indicators, action);
        let explanation = explain::render(action, indicators, sentiment, &scores, overall_score);

        tracing::info!(
            action = action.as_str(),
            overall = overall_score,
            confidence = confidence.as_str(),
            price_target,
            "trading decision"
        );

        Ok(Decision {
            action,
            price_target,
            current_price,
            confidence,
            overall_score,
            category_scores: scores,
            explanation,
            risk_level,
            time_horizon,
            timestamp: Utc::now(),
        })
    }

    fn price_target(
        &self,
        action: Action,
        current_price: f64,
        indicators: &IndicatorBundle,
        overall_score: f64,
    ) -> f64 {
        match action {
            Action::Buy => {
                let resistance = indicators.support_resistance.resistance;
                let target = if overall_score > self.config.strong_buy_score {
                    resistance * 1.02 // aim slightly above resistance
                } else {
                    (current_price + resistance) / 2.0
                };
                target.max(current_price * self.config.min_upside_ratio)
            }
            Action::Sell => {
                let support = indicators.support_resistance.support;
                let target = if overall_score < self.config.strong_sell_score {
                    support * 0.98 // aim slightly below support
                } else {
                    (current_price + support) / 2.0
                };
                target.min(current_price * self.config.max_downside_ratio)
            }
            Action::Hold => current_price,
        }
    }
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Confidence from score magnitude plus agreement among the technical,
/// sentiment and momentum components
fn confidence_level(overall_score: f64, components: [f64; 3]) -> Confidence {
    let agreeing = components
        .iter()
        .filter(|&&s| s * overall_score > 0.0)
        .count();
    let agreement_ratio = agreeing as f64 / components.len() as f64;

    if overall_score.abs() > 0.4 && agreement_ratio > 0.75 {
        Confidence::VeryHigh
    } else if overall_score.abs() > 0.25 && agreement_ratio > 0.65 {
        Confidence::High
    } else if overall_score.abs() > 0.15 && agreement_ratio > 0.5 {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

fn risk_level(indicators: &IndicatorBundle, overall_score: f64) -> RiskLevel {
    let volatility = indicators.volatility.annualized_volatility;
    if volatility > 0.6 {
        RiskLevel::High
    } else if volatility > 0.4 {
        RiskLevel::Medium
    } else if overall_score.abs() < 0.1 {
        RiskLevel::Low // effectively a neutral position
    } else {
        RiskLevel::Medium
    }
}

fn time_horizon(indicators: &IndicatorBundle, action: Action) -> TimeHorizon {
    if action == Action::Hold {
        return TimeHorizon::NotApplicable;
    }
    if indicators.volatility.annualized_volatility > 0.5 {
        TimeHorizon::ShortTerm
    } else if indicators.moving_averages.trend.is_strong() {
        TimeHorizon::MediumTerm
    } else {
        TimeHorizon::ShortToMediumTerm
    }
}
