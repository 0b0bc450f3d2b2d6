pub mod engine;
pub mod explain;
pub mod recommendations;
pub mod scoring;

pub use engine::DecisionEngine;
pub use recommendations::generate_recommendations;
pub use scoring::category_scores;

#[cfg(test)]
pub(crate) mod testing {
    use advisor_core::{
        BandPosition, Bollinger, DataCoverage, IndicatorBundle, Macd, MacdSignal,
        MomentumSnapshot, MovingAverages, RecentTrend, SentimentBundle, SentimentLabel,
        SupportResistance, Trend, VolatilityMetrics, VolumeTrend,
    };

    /// Bundle whose every category score comes out 0.0, for tests that move
    /// one factor at a time
    pub fn neutral_bundle() -> IndicatorBundle {
        IndicatorBundle {
            rsi: 50.0,
            macd: Macd {
                line: 0.0,
                signal: 0.0,
                signal_type: MacdSignal::Neutral,
            },
            bollinger: Bollinger {
                upper: 102.0,
                middle: 100.0,
                lower: 98.0,
                position: BandPosition::Middle,
                bandwidth: 0.04,
            },
            moving_averages: MovingAverages {
                sma_20: 100.0,
                sma_50: 100.0,
                sma_200: 100.0,
                trend: Trend::Sideways,
            },
            support_resistance: SupportResistance {
                support: 95.0,
                resistance: 105.0,
                next_support: 90.0,
                next_resistance: 110.0,
                distance_to_support_pct: 5.0,
                distance_to_resistance_pct: 5.0,
            },
            volatility: VolatilityMetrics {
                annualized_volatility: 0.3,
                volume_trend: VolumeTrend::Average,
                volume_spike: false,
                volume_ratio: 1.0,
            },
            momentum: MomentumSnapshot {
                change_24h_pct: 0.0,
                change_7d_pct: 0.0,
                recent_trend: RecentTrend::Neutral,
            },
            coverage: DataCoverage {
                samples: 100,
                rsi: true,
                macd: true,
                macd_signal: true,
                bollinger: true,
                moving_averages: true,
                support_resistance: true,
                volatility: true,
            },
        }
    }

    pub fn sentiment(news_compound: f64, stock_score: f64) -> SentimentBundle {
        let combined_score = news_compound * 0.6 + stock_score * 0.4;
        let combined_label = if combined_score >= 0.1 {
            SentimentLabel::Bullish
        } else if combined_score <= -0.1 {
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
}
