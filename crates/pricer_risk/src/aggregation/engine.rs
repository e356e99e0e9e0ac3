//! Aggregation engine.

use chrono::NaiveDate;
use pricer_core::types::Currency;
use pricer_models::pricing::{PricedTrade, PricingError};
use tracing::{debug, info, warn};

use super::types::{
    AggregationFailure, AggregationResult, ConvertedTrade, FailureReason, PortfolioSummary, Totals,
};
use crate::conversion::CurrencyConverter;
use crate::parallel::{parallel_reduce, ParallelConfig};

type Outcome = Result<ConvertedTrade, AggregationFailure>;

/// Converts priced trades into a reporting currency and sums them.
///
/// Stateless apart from its configuration: the reporting currency and
/// valuation date are passed to every call.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use pricer_core::types::Currency;
/// use pricer_risk::aggregation::AggregationEngine;
///
/// let date = NaiveDate::from_ymd_opt(2024, 6, 28).unwrap();
/// let result = AggregationEngine::new().aggregate(&[], Currency::USD, date);
///
/// assert_eq!(result.summary.trade_count, 0);
/// assert_eq!(result.summary.total_present_value, 0.0);
/// assert_eq!(result.summary.failed_trade_count, 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AggregationEngine {
    converter: CurrencyConverter,
    parallel: ParallelConfig,
}

impl AggregationEngine {
    /// Creates an engine with the default parallel configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with an explicit parallel configuration.
    pub fn with_parallel_config(parallel: ParallelConfig) -> Self {
        Self {
            converter: CurrencyConverter::new(),
            parallel,
        }
    }

    /// Aggregates successfully priced trades.
    ///
    /// Trades whose conversion fails are listed in
    /// [`AggregationResult::failures`] and excluded from the totals.
    pub fn aggregate(
        &self,
        trades: &[PricedTrade],
        reporting_currency: Currency,
        valuation_date: NaiveDate,
    ) -> AggregationResult {
        let outcomes = self
            .parallel
            .map(trades, |priced| self.convert(priced, reporting_currency));
        self.summarise(outcomes, reporting_currency, valuation_date)
    }

    /// Aggregates pricing outcomes, counting pricing failures alongside
    /// conversion failures.
    pub fn aggregate_outcomes(
        &self,
        outcomes: &[Result<PricedTrade, PricingError>],
        reporting_currency: Currency,
        valuation_date: NaiveDate,
    ) -> AggregationResult {
        let outcomes = self.parallel.map(outcomes, |outcome| match outcome {
            Ok(priced) => self.convert(priced, reporting_currency),
            Err(err) => Err(AggregationFailure {
                trade_id: err.trade_id.clone(),
                reason: FailureReason::Pricing(err.kind.clone()),
            }),
        });
        self.summarise(outcomes, reporting_currency, valuation_date)
    }

    fn convert(&self, priced: &PricedTrade, reporting_currency: Currency) -> Outcome {
        let trade = &priced.trade;
        self.converter
            .factor_for_pair(
                trade.currency_pair,
                trade.notional_currency,
                reporting_currency,
                trade.spot,
            )
            .map(|factor| ConvertedTrade::new(priced.clone(), reporting_currency, factor))
            .map_err(|err| AggregationFailure {
                trade_id: trade.trade_id.clone(),
                reason: FailureReason::Conversion(err),
            })
    }

    fn summarise(
        &self,
        outcomes: Vec<Outcome>,
        reporting_currency: Currency,
        valuation_date: NaiveDate,
    ) -> AggregationResult {
        let mut converted = Vec::with_capacity(outcomes.len());
        let mut failures = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(trade) => converted.push(trade),
                Err(failure) => {
                    warn!(trade_id = %failure.trade_id, reason = %failure.reason, "Trade excluded from totals");
                    failures.push(failure);
                }
            }
        }

        let totals = if self.parallel.should_parallelize(converted.len()) {
            debug!(trades = converted.len(), "Summing totals in parallel");
            parallel_reduce(&converted, Totals::ZERO, Totals::of, Totals::combine)
        } else {
            converted
                .iter()
                .fold(Totals::ZERO, |acc, trade| acc.combine(Totals::of(trade)))
        };

        let summary =
            PortfolioSummary::from_totals(totals, failures.len(), reporting_currency, valuation_date);

        info!(
            trades = summary.trade_count,
            failed = summary.failed_trade_count,
            currency = %reporting_currency,
            total_pv = summary.total_present_value,
            "Portfolio aggregated"
        );

        AggregationResult {
            summary,
            converted,
            failures,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::types::{CurrencyPair, TradeId};
    use pricer_models::instruments::fx::{OptionType, ValidatedTrade};
    use pricer_models::pricing::{PricingEngine, PricingErrorKind};

    use crate::conversion::ConversionError;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 28).unwrap()
    }

    fn priced(id: &str, pair: CurrencyPair, currency: Currency, spot: f64, pv: f64) -> PricedTrade {
        let trade = ValidatedTrade::builder(id)
            .currency_pair(pair)
            .option_type(OptionType::Call)
            .strike(spot)
            .notional(1.0)
            .notional_currency(currency)
            .spot(spot)
            .volatility(0.1)
            .rate_domestic(0.0)
            .rate_foreign(0.0)
            .time_to_expiry(1.0)
            .build()
            .unwrap();
        PricedTrade {
            trade,
            present_value: pv,
            delta: pv / 10.0,
            vega: pv / 100.0,
        }
    }

    #[test]
    fn test_jpy_trade_reported_in_usd() {
        let trades = vec![priced("FX001", CurrencyPair::USDJPY, Currency::JPY, 150.0, 15_000_000.0)];
        let result = AggregationEngine::new().aggregate(&trades, Currency::USD, date());

        assert_eq!(result.summary.trade_count, 1);
        assert_relative_eq!(result.summary.total_present_value, 100_000.0, max_relative = 1e-12);
        assert_relative_eq!(result.summary.total_delta, 10_000.0, max_relative = 1e-12);
        assert_relative_eq!(result.summary.total_vega, 1_000.0, max_relative = 1e-12);
        assert_eq!(result.converted[0].reporting_currency, Currency::USD);
        assert_relative_eq!(result.converted[0].factor, 1.0 / 150.0, epsilon = 1e-15);
    }

    #[test]
    fn test_mixed_currencies_sum() {
        let trades = vec![
            priced("A", CurrencyPair::USDJPY, Currency::USD, 150.0, 1_000.0),
            priced("B", CurrencyPair::USDJPY, Currency::JPY, 150.0, 300_000.0),
            priced("C", CurrencyPair::EURUSD, Currency::USD, 1.1, 500.0),
        ];
        let result = AggregationEngine::new().aggregate(&trades, Currency::USD, date());

        assert_eq!(result.summary.trade_count, 3);
        assert_relative_eq!(result.summary.total_present_value, 3_500.0, max_relative = 1e-12);
        assert_eq!(result.summary.valuation_date, date());
        let ids: Vec<&str> = result.converted.iter().map(|c| c.trade_id().as_str()).collect();
        assert_eq!(ids, ["A", "B", "C"]);
    }

    #[test]
    fn test_jpy_reporting() {
        let trades = vec![priced("A", CurrencyPair::USDJPY, Currency::USD, 150.0, 1_000.0)];
        let result = AggregationEngine::new().aggregate(&trades, Currency::JPY, date());
        assert_relative_eq!(result.summary.total_present_value, 150_000.0, max_relative = 1e-12);
        assert_eq!(result.summary.reporting_currency, Currency::JPY);
    }

    #[test]
    fn test_empty_portfolio() {
        let result = AggregationEngine::new().aggregate(&[], Currency::JPY, date());
        assert_eq!(result.summary.trade_count, 0);
        assert_eq!(result.summary.failed_trade_count, 0);
        assert_eq!(result.summary.total_present_value, 0.0);
        assert_eq!(result.summary.total_delta, 0.0);
        assert_eq!(result.summary.total_vega, 0.0);
        assert!(result.converted.is_empty());
        assert!(result.failures.is_empty());
    }

    #[test]
    fn test_unsupported_reporting_currency_fails_every_trade() {
        let trades = vec![
            priced("A", CurrencyPair::USDJPY, Currency::USD, 150.0, 1_000.0),
            priced("B", CurrencyPair::USDJPY, Currency::JPY, 150.0, 1_000.0),
        ];
        let result = AggregationEngine::new().aggregate(&trades, Currency::EUR, date());
        assert_eq!(result.summary.trade_count, 0);
        assert_eq!(result.summary.failed_trade_count, 2);
        assert_eq!(result.summary.total_present_value, 0.0);
        assert!(matches!(
            result.failures[0].reason,
            FailureReason::Conversion(ConversionError::UnsupportedCurrencyPair { .. })
        ));
    }

    #[test]
    fn test_cross_conversion_on_non_usdjpy_pair_fails() {
        let trades = vec![
            priced("OK", CurrencyPair::USDJPY, Currency::JPY, 150.0, 1_500.0),
            priced("BAD", CurrencyPair::EURUSD, Currency::JPY, 1.1, 1_000.0),
        ];
        let result = AggregationEngine::new().aggregate(&trades, Currency::USD, date());
        assert_eq!(result.summary.trade_count, 1);
        assert_eq!(result.summary.failed_trade_count, 1);
        assert_eq!(result.failures[0].trade_id, TradeId::new("BAD"));
        assert_relative_eq!(result.summary.total_present_value, 10.0, max_relative = 1e-12);
    }

    #[test]
    fn test_pricing_failures_are_counted() {
        let mut expired = priced("EXP", CurrencyPair::USDJPY, Currency::USD, 150.0, 0.0).trade;
        expired.time_to_expiry = 0.0;
        let good = priced("GOOD", CurrencyPair::USDJPY, Currency::USD, 150.0, 0.0).trade;

        let outcomes = PricingEngine::new().price_all(&[good, expired]);
        let result = AggregationEngine::new().aggregate_outcomes(&outcomes, Currency::USD, date());

        assert_eq!(result.summary.trade_count, 1);
        assert_eq!(result.summary.failed_trade_count, 1);
        assert_eq!(result.failures[0].trade_id.as_str(), "EXP");
        assert!(matches!(
            result.failures[0].reason,
            FailureReason::Pricing(PricingErrorKind::Expired { .. })
        ));
    }

    #[test]
    fn test_order_independence() {
        let trades: Vec<PricedTrade> = (0..20)
            .map(|i| {
                let ccy = if i % 2 == 0 { Currency::USD } else { Currency::JPY };
                priced(&format!("T{i}"), CurrencyPair::USDJPY, ccy, 140.0 + i as f64, 1_000.0 * (i + 1) as f64)
            })
            .collect();
        let mut reversed = trades.clone();
        reversed.reverse();

        let engine = AggregationEngine::new();
        let a = engine.aggregate(&trades, Currency::USD, date()).summary;
        let b = engine.aggregate(&reversed, Currency::USD, date()).summary;
        assert_eq!(a.trade_count, b.trade_count);
        assert_relative_eq!(a.total_present_value, b.total_present_value, max_relative = 1e-12);
        assert_relative_eq!(a.total_delta, b.total_delta, max_relative = 1e-12);
        assert_relative_eq!(a.total_vega, b.total_vega, max_relative = 1e-12);
    }

    #[test]
    fn test_parallel_path_matches_sequential() {
        let trades: Vec<PricedTrade> = (0..300)
            .map(|i| {
                let ccy = if i % 3 == 0 { Currency::JPY } else { Currency::USD };
                priced(&format!("T{i}"), CurrencyPair::USDJPY, ccy, 150.0, 10.0 + i as f64)
            })
            .collect();

        let parallel = AggregationEngine::with_parallel_config(ParallelConfig::new(8, 1))
            .aggregate(&trades, Currency::USD, date());
        let sequential = AggregationEngine::with_parallel_config(ParallelConfig::sequential())
            .aggregate(&trades, Currency::USD, date());

        assert_eq!(parallel.converted, sequential.converted);
        assert_eq!(parallel.summary.trade_count, sequential.summary.trade_count);
        assert_relative_eq!(
            parallel.summary.total_present_value,
            sequential.summary.total_present_value,
            max_relative = 1e-12
        );
    }
}
