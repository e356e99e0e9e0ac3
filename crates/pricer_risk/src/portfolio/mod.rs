//! Portfolio valuation runner.
//!
//! Prices a batch of validated trades and aggregates the outcomes into the
//! reporting currency in one call.

use chrono::NaiveDate;
use pricer_core::types::Currency;
use pricer_models::instruments::fx::ValidatedTrade;
use pricer_models::pricing::PricingEngine;
use tracing::{debug, info_span};

use crate::aggregation::{AggregationEngine, AggregationResult};
use crate::parallel::ParallelConfig;

/// Explicit inputs for a valuation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValuationContext {
    /// Currency the portfolio totals are reported in.
    pub reporting_currency: Currency,
    /// Label attached to the summary; no time-decay is applied.
    pub valuation_date: NaiveDate,
    /// Parallel execution settings.
    pub parallel: ParallelConfig,
}

impl ValuationContext {
    /// Creates a context with the default parallel configuration.
    pub fn new(reporting_currency: Currency, valuation_date: NaiveDate) -> Self {
        Self {
            reporting_currency,
            valuation_date,
            parallel: ParallelConfig::default(),
        }
    }

    /// Replaces the parallel configuration.
    pub fn with_parallel(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Prices every trade and aggregates the results.
///
/// Pricing failures never abort the run: they are reported in
/// [`AggregationResult::failures`] and counted in
/// `summary.failed_trade_count`.
pub fn value_portfolio(trades: &[ValidatedTrade], context: &ValuationContext) -> AggregationResult {
    let span = info_span!("value_portfolio", trades = trades.len());
    let _guard = span.enter();

    let engine = PricingEngine::new();
    let parallel = context.parallel.should_parallelize(trades.len());
    debug!(parallel, "Pricing trades");
    let outcomes = context.parallel.map(trades, |trade| engine.price(trade));

    AggregationEngine::with_parallel_config(context.parallel.clone()).aggregate_outcomes(
        &outcomes,
        context.reporting_currency,
        context.valuation_date,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::types::CurrencyPair;
    use pricer_models::instruments::fx::OptionType;

    fn context() -> ValuationContext {
        ValuationContext::new(Currency::USD, NaiveDate::from_ymd_opt(2024, 6, 28).unwrap())
    }

    fn trade(id: &str, currency: Currency, notional: f64, expiry: f64) -> ValidatedTrade {
        ValidatedTrade::builder(id)
            .currency_pair(CurrencyPair::USDJPY)
            .option_type(OptionType::Call)
            .strike(100.0)
            .notional(notional)
            .notional_currency(currency)
            .spot(100.0)
            .volatility(0.20)
            .rate_domestic(0.0)
            .rate_foreign(0.0)
            .time_to_expiry(expiry)
            .build()
            .unwrap()
    }

    #[test]
    fn test_reference_call_in_usd() {
        let result = value_portfolio(&[trade("FX001", Currency::USD, 1.0, 1.0)], &context());
        assert_relative_eq!(result.summary.total_present_value, 7.9656, epsilon = 1e-4);
        assert_relative_eq!(result.summary.total_delta, 0.53983, epsilon = 1e-5);
        assert_relative_eq!(result.summary.total_vega, 0.39695, epsilon = 1e-5);
    }

    #[test]
    fn test_jpy_notional_converted_at_trade_spot() {
        let usd = value_portfolio(&[trade("U", Currency::USD, 1.0, 1.0)], &context());
        let jpy = value_portfolio(&[trade("J", Currency::JPY, 1.0, 1.0)], &context());
        // spot is 100 JPY per USD
        assert_relative_eq!(
            jpy.summary.total_present_value * 100.0,
            usd.summary.total_present_value,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_expired_trade_is_counted_as_failure() {
        let mut expired = trade("EXP", Currency::USD, 1.0, 1.0);
        expired.time_to_expiry = -0.1;
        let result = value_portfolio(&[trade("OK", Currency::USD, 1.0, 1.0), expired], &context());
        assert_eq!(result.summary.trade_count, 1);
        assert_eq!(result.summary.failed_trade_count, 1);
        assert!(result.summary.has_failures());
    }

    #[test]
    fn test_linearity_in_notional() {
        let single = value_portfolio(&[trade("A", Currency::USD, 1_000.0, 1.0)], &context());
        let doubled = value_portfolio(
            &[trade("A", Currency::USD, 1_000.0, 1.0), trade("B", Currency::USD, 1_000.0, 1.0)],
            &context(),
        );
        assert_relative_eq!(
            doubled.summary.total_present_value,
            2.0 * single.summary.total_present_value,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_context_builder() {
        let ctx = context().with_parallel(ParallelConfig::sequential());
        assert_eq!(ctx.parallel, ParallelConfig::sequential());
        assert_eq!(ctx.reporting_currency, Currency::USD);
    }
}
