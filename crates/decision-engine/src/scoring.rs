use advisor_core::{
    BandPosition, CategoryScores, IndicatorBundle, MacdSignal, MomentumSnapshot, RecentTrend,
    SentimentBundle, Trend, VolatilityMetrics,
};

fn clip(value: f64) -> f64 {
    value.clamp(-1.0, 1.0)
}

/// Average of the RSI, MACD, moving-average-trend and Bollinger sub-scores
pub fn technical_score(bundle: &IndicatorBundle) -> f64 {
    let rsi = bundle.rsi;
    let rsi_score = if rsi < 30.0 {
        0.8 // oversold, bullish
    } else if rsi < 40.0 {
        0.4
    } else if rsi > 70.0 {
        -0.8 // overbought, bearish
    } else if rsi > 60.0 {
        -0.4
    } else {
        0.0
    };

    let macd_score = match bundle.macd.signal_type {
        MacdSignal::Bullish => 0.6,
        MacdSignal::Bearish => -0.6,
        MacdSignal::Neutral => 0.0,
    };

    let trend_score = match bundle.moving_averages.trend {
        Trend::StrongUptrend => 0.8,
        Trend::Uptrend => 0.4,
        Trend::StrongDowntrend => -0.8,
        Trend::Downtrend => -0.4,
        Trend::Sideways | Trend::InsufficientData => 0.0,
    };

    let band_score = match bundle.bollinger.position {
        BandPosition::Oversold => 0.6,
        BandPosition::LowerHalf => 0.3,
        BandPosition::Overbought => -0.6,
        BandPosition::UpperHalf => -0.3,
        BandPosition::Middle => 0.0,
    };

    (rsi_score + macd_score + trend_score + band_score) / 4.0
}

/// The engine's own sentiment blend over combined/news/stock scores.
/// Deliberately distinct from the fusion crate's 0.6/0.4 combiner.
pub fn sentiment_score(sentiment: &SentimentBundle) -> f64 {
    clip(
        sentiment.combined_score * 0.5
            + sentiment.news_compound * 0.3
            + sentiment.stock_score * 0.2,
    )
}

pub fn momentum_score(momentum: &MomentumSnapshot) -> f64 {
    let trend_score = match momentum.recent_trend {
        RecentTrend::Bullish => 0.5,
        RecentTrend::Bearish => -0.5,
        RecentTrend::Neutral => 0.0,
    };

    clip(
        (momentum.change_24h_pct / 100.0) * 0.4
            + (momentum.change_7d_pct / 100.0) * 0.3
            + trend_score * 0.3,
    )
}

/// Lower realized volatility scores better
pub fn volatility_score(volatility: &VolatilityMetrics) -> f64 {
    let vol = volatility.annualized_volatility;
    if vol < 0.2 {
        0.5
    } else if vol < 0.4 {
        0.0
    } else if vol < 0.6 {
        -0.3
    } else {
        -0.6
    }
}

pub fn volume_score(volatility: &VolatilityMetrics) -> f64 {
    use advisor_core::VolumeTrend;

    if volatility.volume_spike && volatility.volume_trend == VolumeTrend::High {
        0.7
    } else if volatility.volume_trend == VolumeTrend::High {
        0.4
    } else if volatility.volume_trend == VolumeTrend::Low {
        -0.3
    } else {
        0.0
    }
}

/// All five per-category scores, each in [-1, 1]
pub fn category_scores(bundle: &IndicatorBundle, sentiment: &SentimentBundle) -> CategoryScores {
    CategoryScores {
        technical: technical_score(bundle),
        sentiment: sentiment_score(sentiment),
        momentum: momentum_score(&bundle.momentum),
        volatility: volatility_score(&bundle.volatility),
        volume: volume_score(&bundle.volatility),
    }
}
