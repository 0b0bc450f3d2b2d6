use serde::{Deserialize, Serialize};

/// Relative weight of each factor category in the overall score
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FactorWeights {
    pub technical: f64,
    pub sentiment: f64,
    pub momentum: f64,
    pub volatility: f64,
    pub volume: f64,
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            technical: 0.35,
            sentiment: 0.25,
            momentum: 0.20,
            volatility: 0.10,
            volume: 0.10,
        }
    }
}

/// Injectable decision parameters. `Default` reproduces the stock strategy;
/// callers construct their own to swap strategies without touching scoring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DecisionConfig {
    pub weights: FactorWeights,
    /// Overall score at or above which the decision is BUY
    pub buy_threshold: f64,
    /// Overall score at or below which the decision is SELL
    pub sell_threshold: f64,
    /// Overall score beyond which a buy targets above resistance
    pub strong_buy_score: f64,
    /// Overall score beyond which a sell targets below support
    pub strong_sell_score: f64,
    /// A buy target is floored at current_price * this ratio
    pub min_upside_ratio: f64,
    /// A sell target is capped at current_price * this ratio
    pub max_downside_ratio: f64,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            weights: FactorWeights::default(),
            buy_threshold: 0.15,
            sell_threshold: -0.15,
            strong_buy_score: 0.3,
            strong_sell_score: -0.3,
            min_upside_ratio: 1.03,
            max_downside_ratio: 0.97,
        }
    }
}
