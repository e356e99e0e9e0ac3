//! Garman-Kohlhagen model for FX option pricing.
//!
//! This module provides the Garman-Kohlhagen closed-form solution for pricing
//! European FX options. This is the standard model for FX options and extends
//! Black-Scholes to account for two interest rates (domestic and foreign).
//!
//! # Mathematical Background
//!
//! The Garman-Kohlhagen formula prices FX options with:
//! - S: spot exchange rate (domestic per foreign)
//! - K: strike price
//! - rd: domestic risk-free rate (continuous compounding)
//! - rf: foreign risk-free rate (continuous compounding)
//! - σ: volatility of the exchange rate
//! - T: time to maturity in years
//!
//! ## Call Option Price
//! C = S * e^(-rf*T) * N(d1) - K * e^(-rd*T) * N(d2)
//!
//! ## Put Option Price
//! P = K * e^(-rd*T) * N(-d2) - S * e^(-rf*T) * N(-d1)
//!
//! where:
//! d1 = [ln(S/K) + (rd - rf + σ²/2) * T] / (σ * √T)
//! d2 = d1 - σ * √T
//!
//! ## Zero Volatility
//!
//! With σ = 0 the exchange rate is deterministic and d1/d2 are undefined.
//! The model then returns the discounted intrinsic value
//! max(±(S * e^(-rf*T) - K * e^(-rd*T)), 0), a step-function Delta and zero
//! Vega. A forward exactly at the strike counts as in-the-money.
//!
//! # Examples
//!
//! ```
//! use pricer_models::analytical::garman_kohlhagen::{
//!     GarmanKohlhagen, GarmanKohlhagenParams,
//! };
//! use pricer_models::instruments::fx::OptionType;
//!
//! let params = GarmanKohlhagenParams::new(
//!     1.10,   // spot
//!     1.12,   // strike
//!     0.03,   // domestic rate (3%)
//!     0.01,   // foreign rate (1%)
//!     0.15,   // volatility (15%)
//!     1.0,    // expiry (1 year)
//! ).unwrap();
//!
//! let model = GarmanKohlhagen::new(params);
//! let call_price = model.price(OptionType::Call);
//! let put_price = model.price(OptionType::Put);
//!
//! // Put-call parity check
//! let parity_diff = call_price - put_price
//!     - (1.10 * (-0.01_f64).exp() - 1.12 * (-0.03_f64).exp());
//! assert!(parity_diff.abs() < 1e-12);
//! ```

use pricer_core::math::distributions::{norm_cdf, norm_pdf};

use super::error::AnalyticalError;
use crate::instruments::fx::OptionType;

/// Parameters for the Garman-Kohlhagen model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GarmanKohlhagenParams {
    /// Spot exchange rate (domestic per foreign).
    pub spot: f64,
    /// Strike price.
    pub strike: f64,
    /// Domestic risk-free rate (continuous compounding).
    pub rate_domestic: f64,
    /// Foreign risk-free rate (continuous compounding).
    pub rate_foreign: f64,
    /// Volatility of the exchange rate.
    pub volatility: f64,
    /// Time to expiry in years.
    pub expiry: f64,
}

impl GarmanKohlhagenParams {
    /// Creates new Garman-Kohlhagen parameters.
    ///
    /// # Arguments
    ///
    /// * `spot` - Spot exchange rate (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `rate_domestic` - Domestic risk-free rate (can be negative)
    /// * `rate_foreign` - Foreign risk-free rate (can be negative)
    /// * `volatility` - Volatility (must be non-negative)
    /// * `expiry` - Time to expiry in years (must be positive)
    ///
    /// # Errors
    ///
    /// Returns `AnalyticalError` if any parameter is invalid. Expiry is
    /// checked before volatility.
    pub fn new(
        spot: f64,
        strike: f64,
        rate_domestic: f64,
        rate_foreign: f64,
        volatility: f64,
        expiry: f64,
    ) -> Result<Self, AnalyticalError> {
        // Negated comparisons so that NaN is rejected too
        if !(expiry > 0.0) || !expiry.is_finite() {
            return Err(AnalyticalError::InvalidExpiry { expiry });
        }
        if !(volatility >= 0.0) || !volatility.is_finite() {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }
        if !(spot > 0.0) || !spot.is_finite() {
            return Err(AnalyticalError::InvalidSpot { spot });
        }
        if !(strike > 0.0) || !strike.is_finite() {
            return Err(AnalyticalError::InvalidStrike { strike });
        }

        Ok(Self {
            spot,
            strike,
            rate_domestic,
            rate_foreign,
            volatility,
            expiry,
        })
    }
}

/// Distribution regime selected from the volatility.
#[derive(Debug, Clone, Copy)]
enum Regime {
    /// σ > 0: lognormal spot, closed-form terms available.
    Lognormal { d1: f64, d2: f64 },
    /// σ = 0: deterministic spot.
    Deterministic,
}

/// Garman-Kohlhagen model for FX option pricing.
///
/// Provides closed-form price, Delta and Vega per unit of notional for
/// European FX options.
#[derive(Debug, Clone)]
pub struct GarmanKohlhagen {
    params: GarmanKohlhagenParams,
    regime: Regime,
    /// √T
    sqrt_t: f64,
    /// e^(-rd * T)
    df_domestic: f64,
    /// e^(-rf * T)
    df_foreign: f64,
}

impl GarmanKohlhagen {
    /// Creates a new Garman-Kohlhagen model instance.
    ///
    /// Pre-computes d1, d2, and discount factors.
    pub fn new(params: GarmanKohlhagenParams) -> Self {
        let sqrt_t = params.expiry.sqrt();

        let regime = if params.volatility > 0.0 {
            let vol_sqrt_t = params.volatility * sqrt_t;

            // d1 = [ln(S/K) + (rd - rf + σ²/2) * T] / (σ * √T)
            let log_sk = (params.spot / params.strike).ln();
            let drift = params.rate_domestic - params.rate_foreign
                + 0.5 * params.volatility * params.volatility;
            let d1 = (log_sk + drift * params.expiry) / vol_sqrt_t;

            // d2 = d1 - σ * √T
            Regime::Lognormal {
                d1,
                d2: d1 - vol_sqrt_t,
            }
        } else {
            Regime::Deterministic
        };

        Self {
            params,
            regime,
            sqrt_t,
            df_domestic: (-params.rate_domestic * params.expiry).exp(),
            df_foreign: (-params.rate_foreign * params.expiry).exp(),
        }
    }

    /// Returns a reference to the parameters.
    #[inline]
    pub fn params(&self) -> &GarmanKohlhagenParams {
        &self.params
    }

    /// Returns d1, or `None` when volatility is zero.
    #[inline]
    pub fn d1(&self) -> Option<f64> {
        match self.regime {
            Regime::Lognormal { d1, .. } => Some(d1),
            Regime::Deterministic => None,
        }
    }

    /// Returns d2, or `None` when volatility is zero.
    #[inline]
    pub fn d2(&self) -> Option<f64> {
        match self.regime {
            Regime::Lognormal { d2, .. } => Some(d2),
            Regime::Deterministic => None,
        }
    }

    /// Returns e^(-rf * T).
    #[inline]
    pub fn df_foreign(&self) -> f64 {
        self.df_foreign
    }

    /// Returns e^(-rd * T).
    #[inline]
    pub fn df_domestic(&self) -> f64 {
        self.df_domestic
    }

    /// S * e^(-rf*T)
    #[inline]
    fn discounted_spot(&self) -> f64 {
        self.params.spot * self.df_foreign
    }

    /// K * e^(-rd*T)
    #[inline]
    fn discounted_strike(&self) -> f64 {
        self.params.strike * self.df_domestic
    }

    /// Computes the option price per unit of notional.
    ///
    /// # Returns
    ///
    /// Option price in domestic (quote) currency.
    pub fn price(&self, option_type: OptionType) -> f64 {
        let spot_leg = self.discounted_spot();
        let strike_leg = self.discounted_strike();

        match (self.regime, option_type) {
            (Regime::Lognormal { d1, d2 }, OptionType::Call) => {
                // C = S * e^(-rf*T) * N(d1) - K * e^(-rd*T) * N(d2)
                spot_leg * norm_cdf(d1) - strike_leg * norm_cdf(d2)
            }
            (Regime::Lognormal { d1, d2 }, OptionType::Put) => {
                // P = K * e^(-rd*T) * N(-d2) - S * e^(-rf*T) * N(-d1)
                strike_leg * norm_cdf(-d2) - spot_leg * norm_cdf(-d1)
            }
            (Regime::Deterministic, OptionType::Call) => (spot_leg - strike_leg).max(0.0),
            (Regime::Deterministic, OptionType::Put) => (strike_leg - spot_leg).max(0.0),
        }
    }

    /// Computes Delta per unit of notional.
    ///
    /// Delta measures the sensitivity of the option price to changes in spot.
    pub fn delta(&self, option_type: OptionType) -> f64 {
        match (self.regime, option_type) {
            // Δ_call = e^(-rf*T) * N(d1)
            (Regime::Lognormal { d1, .. }, OptionType::Call) => self.df_foreign * norm_cdf(d1),
            // Δ_put = e^(-rf*T) * (N(d1) - 1)
            (Regime::Lognormal { d1, .. }, OptionType::Put) => {
                self.df_foreign * (norm_cdf(d1) - 1.0)
            }
            (Regime::Deterministic, OptionType::Call) => {
                if self.discounted_spot() >= self.discounted_strike() {
                    self.df_foreign
                } else {
                    0.0
                }
            }
            (Regime::Deterministic, OptionType::Put) => {
                if self.discounted_strike() >= self.discounted_spot() {
                    -self.df_foreign
                } else {
                    0.0
                }
            }
        }
    }

    /// Computes Vega per unit of notional.
    ///
    /// Same for both call and put options.
    ///
    /// # Returns
    ///
    /// Vega value (per 1 percentage point volatility change).
    pub fn vega(&self) -> f64 {
        match self.regime {
            // ν = S * e^(-rf*T) * N'(d1) * √T / 100
            Regime::Lognormal { d1, .. } => {
                self.discounted_spot() * norm_pdf(d1) * self.sqrt_t / 100.0
            }
            Regime::Deterministic => 0.0,
        }
    }
}
