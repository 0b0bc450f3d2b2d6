//! Human-readable explanations for decisions. Each action has an ordered
//! rule list; the first few firing rules become the explanation body.

use advisor_core::{Action, CategoryScores, IndicatorBundle, RecentTrend, SentimentBundle, Trend};

pub fn render(
    action: Action,
    indicators: &IndicatorBundle,
    sentiment: &SentimentBundle,
    scores: &CategoryScores,
    overall_score: f64,
) -> String {
    match action {
        Action::Buy => render_buy(indicators, sentiment, scores, overall_score),
        Action::Sell => render_sell(indicators, sentiment, scores, overall_score),
        Action::Hold => render_hold(indicators, scores, overall_score),
    }
}

fn render_buy(
    indicators: &IndicatorBundle,
    sentiment: &SentimentBundle,
    scores: &CategoryScores,
    overall_score: f64,
) -> String {
    let mut reasons: Vec<String> = Vec::new();

    if scores.technical > 0.3 {
        if indicators.rsi < 40.0 {
            reasons.push(format!(
                "RSI at {:.1} indicates oversold conditions",
                indicators.rsi
            ));
        }
        if indicators.macd.signal_type == advisor_core::MacdSignal::Bullish {
            reasons.push("MACD shows bullish crossover signal".to_string());
        }
        if indicators.moving_averages.trend.is_up() {
            reasons.push("Strong uptrend confirmed by moving averages".to_string());
        }
    }
    if scores.sentiment > 0.2 {
        reasons.push(format!(
            "Market sentiment is {} with {:.0}% confidence",
            sentiment.combined_label.as_str(),
            scores.sentiment.abs() * 100.0
        ));
    }
    if scores.momentum > 0.2 {
        reasons.push("Positive price momentum across multiple timeframes".to_string());
    }
    if indicators.volatility.volume_spike {
        reasons.push("Strong volume surge confirms buying interest".to_string());
    }

    reasons.truncate(3);
    let mut explanation = if reasons.is_empty() {
        format!("Buy signal with overall bullish score of {overall_score:.2}")
    } else {
        format!("Buy signal generated based on: {}", reasons.join("; "))
    };
    explanation.push_str(&format!(
        ". Technical analysis ({:.2}), market sentiment ({:.2}), and momentum indicators ({:.2}) all support this decision.",
        scores.technical, scores.sentiment, scores.momentum
    ));
    explanation
}

fn render_sell(
    indicators: &IndicatorBundle,
    sentiment: &SentimentBundle,
    scores: &CategoryScores,
    overall_score: f64,
) -> String {
    let mut reasons: Vec<String> = Vec::new();

    if scores.technical < -0.3 {
        if indicators.rsi > 60.0 {
            reasons.push(format!(
                "RSI at {:.1} indicates overbought conditions",
                indicators.rsi
            ));
        }
        if indicators.macd.signal_type == advisor_core::MacdSignal::Bearish {
            reasons.push("MACD shows bearish crossover signal".to_string());
        }
        if indicators.moving_averages.trend.is_down() {
            reasons.push("Downtrend confirmed by moving averages".to_string());
        }
    }
    if scores.sentiment < -0.2 {
        reasons.push(format!(
            "Market sentiment is {} with negative outlook",
            sentiment.combined_label.as_str()
        ));
    }
    if scores.momentum < -0.2 {
        reasons.push("Negative price momentum across multiple timeframes".to_string());
    }

    reasons.truncate(3);
    let mut explanation = if reasons.is_empty() {
        format!("Sell signal with overall bearish score of {overall_score:.2}")
    } else {
        format!("Sell signal generated based on: {}", reasons.join("; "))
    };
    explanation.push_str(&format!(
        ". Technical analysis ({:.2}), market sentiment ({:.2}), and momentum indicators ({:.2}) suggest taking profits or reducing exposure.",
        scores.technical, scores.sentiment, scores.momentum
    ));
    explanation
}

fn render_hold(indicators: &IndicatorBundle, scores: &CategoryScores, overall_score: f64) -> String {
    let mut reasons: Vec<String> = Vec::new();

    if scores.technical.abs() < 0.2 && scores.sentiment.abs() < 0.2 {
        reasons.push("Technical indicators and sentiment analysis show neutral signals".to_string());
    } else if scores.technical * scores.sentiment < 0.0 {
        reasons.push(
            "Conflicting signals between technical analysis and market sentiment".to_string(),
        );
    }
    if indicators.moving_averages.trend == Trend::Sideways
        || indicators.momentum.recent_trend == RecentTrend::Neutral
    {
        reasons.push("Market is trading sideways without clear direction".to_string());
    }
    let vol = indicators.volatility.annualized_volatility;
    if (0.2..=0.4).contains(&vol) {
        reasons.push("Moderate volatility suggests waiting for clearer entry points".to_string());
    }

    reasons.truncate(2);
    let mut explanation = if reasons.is_empty() {
        format!("Hold position with neutral score of {overall_score:.2}")
    } else {
        format!("Hold recommendation based on: {}", reasons.join("; "))
    };
    explanation.push_str(&format!(
        ". Monitor for stronger signals before making changes. Current technical score: {:.2}, sentiment score: {:.2}.",
        scores.technical, scores.sentiment
    ));
    explanation
}
