use advisor_core::{DataCoverage, IndicatorBundle, PriceBar};

use crate::indicators::*;

/// Compute the full indicator snapshot for one analysis request.
///
/// Total over any series, including empty ones: indicators without enough
/// samples take their documented sentinel values and the bundle's coverage
/// flags record which windows were actually filled. Bars are assumed ordered
/// oldest-to-newest.
pub fn compute_indicators(bars: &[PriceBar]) -> IndicatorBundle {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let highs: Vec<f64> = bars.iter().map(|b| b.high).collect();
    let lows: Vec<f64> = bars.iter().map(|b| b.low).collect();
    let volumes: Vec<f64> = bars.iter().map(|b| b.volume).collect();

    let current_price = closes.last().copied().unwrap_or(0.0);
    let samples = bars.len();

    let coverage = DataCoverage {
        samples,
        rsi: samples > RSI_PERIOD,
        macd: samples >= MACD_SLOW,
        macd_signal: samples >= MACD_SIGNAL_MIN,
        bollinger: samples >= BOLLINGER_PERIOD,
        moving_averages: samples >= MA_TREND_MIN,
        support_resistance: samples >= SUPPORT_RESISTANCE_MIN,
        volatility: samples >= VOLATILITY_MIN,
    };

    tracing::debug!(
        samples,
        rsi = coverage.rsi,
        macd = coverage.macd,
        moving_averages = coverage.moving_averages,
        "computing indicator bundle"
    );

    IndicatorBundle {
        rsi: rsi(&closes, RSI_PERIOD),
        macd: macd(&closes),
        bollinger: bollinger_bands(&closes, BOLLINGER_PERIOD),
        moving_averages: moving_averages(&closes),
        support_resistance: support_resistance(&highs, &lows, current_price),
        volatility: volatility_metrics(&closes, &volumes),
        momentum: momentum_snapshot(&closes),
        coverage,
    }
}
