use advisor_core::{
    BandPosition, Bollinger, Macd, MacdSignal, MomentumSnapshot, MovingAverages, RecentTrend,
    SupportResistance, Trend, VolatilityMetrics, VolumeTrend,
};

// Per-indicator bootstrap minimums. Deliberately not unified into one shared
// constant: each calculator degrades at its own boundary sample count.
pub const RSI_PERIOD: usize = 14;
pub const MACD_FAST: usize = 12;
pub const MACD_SLOW: usize = 26;
pub const MACD_SIGNAL_PERIOD: usize = 9;
/// MACD_SLOW bars to seed the slow EMA plus MACD_SIGNAL_PERIOD MACD values
/// to seed the signal EMA
pub const MACD_SIGNAL_MIN: usize = 35;
pub const BOLLINGER_PERIOD: usize = 20;
pub const MA_TREND_MIN: usize = 50;
pub const SUPPORT_RESISTANCE_MIN: usize = 10;
pub const VOLATILITY_MIN: usize = 20;

const TRADING_DAYS_PER_YEAR: f64 = 252.0;

fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Population standard deviation
fn std_dev(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let m = mean(data);
    let variance = data.iter().map(|x| (x - m).powi(2)).sum::<f64>() / data.len() as f64;
    variance.sqrt()
}

/// Final EMA value over the whole slice: seeded with the simple average of
/// the first `period` points, then `ema = price*k + ema*(1-k)` with
/// k = 2/(period+1). Falls back to the plain mean for short slices.
fn ema_scalar(data: &[f64], period: usize) -> f64 {
    if data.len() < period {
        return mean(data);
    }
    let k = 2.0 / (period as f64 + 1.0);
    let mut ema = mean(&data[..period]);
    for &price in &data[period..] {
        ema = price * k + ema * (1.0 - k);
    }
    ema
}

/// Running EMA series; `out[j]` is the EMA at bar `period - 1 + j`
fn ema_series(data: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || data.len() < period {
        return vec![];
    }
    let k = 2.0 / (period as f64 + 1.0);
    let mut out = Vec::with_capacity(data.len() - period + 1);
    let mut ema = mean(&data[..period]);
    out.push(ema);
    for &price in &data[period..] {
        ema = price * k + ema * (1.0 - k);
        out.push(ema);
    }
    out
}

/// RSI over the last `period` deltas. Fewer than `period + 1` points returns
/// the neutral 50.0; a window with zero average loss saturates at 100.0.
pub fn rsi(prices: &[f64], period: usize) -> f64 {
    if period == 0 || prices.len() < period + 1 {
        return 50.0;
    }

    let mut gains = 0.0;
    let mut losses = 0.0;
    for w in prices[prices.len() - period - 1..].windows(2) {
        let delta = w[1] - w[0];
        if delta > 0.0 {
            gains += delta;
        } else {
            losses -= delta;
        }
    }

    let avg_gain = gains / period as f64;
    let avg_loss = losses / period as f64;
    if avg_loss == 0.0 {
        return 100.0;
    }

    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}

/// MACD line (EMA12 - EMA26) with a 9-period EMA signal line over the
/// per-bar MACD series. Below 26 points everything is the neutral sentinel;
/// below 35 points the signal line is 0.0 exactly.
pub fn macd(prices: &[f64]) -> Macd {
    if prices.len() < MACD_SLOW {
        return Macd {
            line: 0.0,
            signal: 0.0,
            signal_type: MacdSignal::Neutral,
        };
    }

    let ema_fast = ema_series(prices, MACD_FAST);
    let ema_slow = ema_series(prices, MACD_SLOW);

    // Both series end at the last bar; align them from the slow seed onward.
    let offset = ema_fast.len() - ema_slow.len();
    let macd_line: Vec<f64> = ema_slow
        .iter()
        .enumerate()
        .map(|(i, slow)| ema_fast[i + offset] - slow)
        .collect();

    let line = match macd_line.last() {
        Some(&v) => v,
        None => 0.0,
    };

    let signal = if prices.len() >= MACD_SIGNAL_MIN {
        ema_scalar(&macd_line, MACD_SIGNAL_PERIOD)
    } else {
        0.0
    };

    let signal_type = if line > signal {
        MacdSignal::Bullish
    } else if line < signal {
        MacdSignal::Bearish
    } else {
        MacdSignal::Neutral
    };

    Macd {
        line,
        signal,
        signal_type,
    }
}

/// Bollinger Bands: trailing SMA +/- 2 population standard deviations. Short
/// series degrade to a +/-2% band around the mean with position "middle".
pub fn bollinger_bands(prices: &[f64], period: usize) -> Bollinger {
    if period == 0 || prices.len() < period {
        let avg = mean(prices);
        return Bollinger {
            upper: avg * 1.02,
            middle: avg,
            lower: avg * 0.98,
            position: BandPosition::Middle,
            bandwidth: 0.04,
        };
    }

    let window = &prices[prices.len() - period..];
    let middle = mean(window);
    let std = std_dev(window);
    let upper = middle + 2.0 * std;
    let lower = middle - 2.0 * std;
    let current = prices[prices.len() - 1];

    // Boundary ties resolve outward: >= upper is overbought, <= lower oversold
    let position = if current >= upper {
        BandPosition::Overbought
    } else if current <= lower {
        BandPosition::Oversold
    } else if current > middle {
        BandPosition::UpperHalf
    } else {
        BandPosition::LowerHalf
    };

    Bollinger {
        upper,
        middle,
        lower,
        position,
        bandwidth: if middle != 0.0 { (upper - lower) / middle } else { 0.0 },
    }
}

/// SMA 20/50/200 plus trend classification. Below 50 points every SMA
/// collapses to the last price and the trend is "insufficient_data".
pub fn moving_averages(prices: &[f64]) -> MovingAverages {
    if prices.len() < MA_TREND_MIN {
        let last = prices.last().copied().unwrap_or(0.0);
        return MovingAverages {
            sma_20: last,
            sma_50: last,
            sma_200: last,
            trend: Trend::InsufficientData,
        };
    }

    let sma_20 = mean(&prices[prices.len() - 20..]);
    let sma_50 = mean(&prices[prices.len() - 50..]);
    let sma_200 = if prices.len() >= 200 {
        mean(&prices[prices.len() - 200..])
    } else {
        mean(prices)
    };
    let current = prices[prices.len() - 1];

    let trend = if current > sma_20 && sma_20 > sma_50 {
        Trend::StrongUptrend
    } else if current > sma_20 {
        Trend::Uptrend
    } else if current < sma_20 && sma_20 < sma_50 {
        Trend::StrongDowntrend
    } else if current < sma_20 {
        Trend::Downtrend
    } else {
        Trend::Sideways
    };

    MovingAverages {
        sma_20,
        sma_50,
        sma_200,
        trend,
    }
}

/// Nearest distinct highs above / lows below the current price. Fewer than
/// 10 highs or lows falls back to +/-5% and +/-10% levels.
pub fn support_resistance(highs: &[f64], lows: &[f64], current_price: f64) -> SupportResistance {
    let (support, resistance, next_support, next_resistance) =
        if highs.len() < SUPPORT_RESISTANCE_MIN || lows.len() < SUPPORT_RESISTANCE_MIN {
            (
                current_price * 0.95,
                current_price * 1.05,
                current_price * 0.90,
                current_price * 1.10,
            )
        } else {
            let mut resistance_levels: Vec<f64> =
                highs.iter().copied().filter(|&h| h > current_price).collect();
            resistance_levels.sort_by(f64::total_cmp);
            resistance_levels.dedup();
            resistance_levels.truncate(3);

            let mut support_levels: Vec<f64> =
                lows.iter().copied().filter(|&l| l < current_price).collect();
            support_levels.sort_by(|a, b| f64::total_cmp(b, a));
            support_levels.dedup();
            support_levels.truncate(3);

            let resistance = resistance_levels.first().copied().unwrap_or(current_price * 1.05);
            let support = support_levels.first().copied().unwrap_or(current_price * 0.95);
            let next_resistance = resistance_levels.get(1).copied().unwrap_or(resistance * 1.05);
            let next_support = support_levels.get(1).copied().unwrap_or(support * 0.95);

            (support, resistance, next_support, next_resistance)
        };

    let (distance_to_support_pct, distance_to_resistance_pct) = if current_price != 0.0 {
        (
            (current_price - support) / current_price * 100.0,
            (resistance - current_price) / current_price * 100.0,
        )
    } else {
        (0.0, 0.0)
    };

    SupportResistance {
        support,
        resistance,
        next_support,
        next_resistance,
        distance_to_support_pct,
        distance_to_resistance_pct,
    }
}

/// Annualized return volatility plus volume-trend classification from the
/// ratio of 5-bar to 20-bar average volume. Below 20 points returns the
/// fixed low-volatility default.
pub fn volatility_metrics(prices: &[f64], volumes: &[f64]) -> VolatilityMetrics {
    if prices.len() < VOLATILITY_MIN {
        return VolatilityMetrics {
            annualized_volatility: 0.02,
            volume_trend: VolumeTrend::Average,
            volume_spike: false,
            volume_ratio: 1.0,
        };
    }

    let returns: Vec<f64> = prices
        .windows(2)
        .map(|w| (w[1] - w[0]) / w[0])
        .collect();
    let annualized_volatility = std_dev(&returns) * TRADING_DAYS_PER_YEAR.sqrt();

    let recent_volume = mean(&volumes[volumes.len().saturating_sub(5)..]);
    let avg_volume = mean(&volumes[volumes.len().saturating_sub(20)..]);
    let volume_ratio = if avg_volume > 0.0 {
        recent_volume / avg_volume
    } else {
        1.0
    };

    let (volume_trend, volume_spike) = if volume_ratio > 1.5 {
        (VolumeTrend::High, true)
    } else if volume_ratio < 0.7 {
        (VolumeTrend::Low, false)
    } else {
        (VolumeTrend::Average, false)
    };

    VolatilityMetrics {
        annualized_volatility,
        volume_trend,
        volume_spike,
        volume_ratio,
    }
}

/// Trailing percentage changes: latest bar, mean of the last 7, and a trend
/// label from the mean of the last 10
pub fn momentum_snapshot(prices: &[f64]) -> MomentumSnapshot {
    let changes: Vec<f64> = prices
        .windows(2)
        .map(|w| (w[1] - w[0]) / w[0] * 100.0)
        .collect();

    let change_24h_pct = changes.last().copied().unwrap_or(0.0);
    let change_7d_pct = if changes.len() >= 7 {
        mean(&changes[changes.len() - 7..])
    } else {
        0.0
    };

    let trailing = &changes[changes.len().saturating_sub(10)..];
    let recent_trend = if trailing.is_empty() {
        RecentTrend::Neutral
    } else {
        let avg = mean(trailing);
        if avg > 0.0 {
            RecentTrend::Bullish
        } else if avg < 0.0 {
            RecentTrend::Bearish
        } else {
            RecentTrend::Neutral
        }
    };

    MomentumSnapshot {
        change_24h_pct,
        change_7d_pct,
        recent_trend,
    }
}
