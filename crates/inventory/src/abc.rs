//! ABC classification.
//!
//! Model:
//! - Compute a rank value per record (raw demand or annualised value).
//! - Sort descending (stable, so ties keep input order).
//! - Walk the sorted rows accumulating each row's share of the total.
//! - Cut the cumulative share into A/B/C bands using the configured policy.

use serde::{Deserialize, Serialize};

use smartspace_core::{AnalysisError, AnalysisResult, Category};

use crate::record::{InventoryRecord, InventoryTable};

/// What an item is ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankBasis {
    /// `daily_demand` as-is.
    #[default]
    Demand,
    /// `daily_demand × 12 × unit_cost`; every record must carry a unit cost.
    AnnualValue,
}

impl RankBasis {
    pub fn rank_value(self, record: &InventoryRecord) -> AnalysisResult<f64> {
        match self {
            RankBasis::Demand => Ok(record.daily_demand),
            RankBasis::AnnualValue => {
                let cost = record.unit_cost.ok_or_else(|| {
                    AnalysisError::schema(format!(
                        "record {} has no unit_cost but ranking is by value",
                        record.id
                    ))
                })?;
                Ok(record.daily_demand * 12.0 * cost)
            }
        }
    }
}

/// Cut points on the cumulative share (percent, inclusive upper bounds).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub a_max: f64,
    pub b_max: f64,
}

impl Thresholds {
    pub fn categorize(&self, cumulative_fraction: f64) -> Category {
        if cumulative_fraction <= self.a_max {
            Category::A
        } else if cumulative_fraction <= self.b_max {
            Category::B
        } else {
            Category::C
        }
    }
}

/// Threshold policy. Fixed per deployment; the two produce very different band sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationPolicy {
    /// A ≤ 20 %, B ≤ 80 %, else C.
    #[default]
    TwoCut,
    /// A ≤ 80 %, B ≤ 95 %, else C.
    Pareto,
}

impl ClassificationPolicy {
    pub fn thresholds(self) -> Thresholds {
        match self {
            ClassificationPolicy::TwoCut => Thresholds { a_max: 20.0, b_max: 80.0 },
            ClassificationPolicy::Pareto => Thresholds { a_max: 80.0, b_max: 95.0 },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub policy: ClassificationPolicy,
    pub basis: RankBasis,
}

/// An inventory record annotated with its ABC classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedRecord {
    #[serde(flatten)]
    pub record: InventoryRecord,
    pub rank_value: f64,
    /// Running share of the total rank value, in [0, 100].
    pub cumulative_fraction: f64,
    pub category: Category,
}

/// Classify every record of `table`.
///
/// Output is sorted descending by `rank_value`. Fails with `DivisionByZero`
/// when every rank value is zero.
pub fn classify(table: &InventoryTable, config: &ClassifierConfig) -> AnalysisResult<Vec<ClassifiedRecord>> {
    let mut ranked = table
        .iter()
        .map(|r| Ok((r.clone(), config.basis.rank_value(r)?)))
        .collect::<AnalysisResult<Vec<(InventoryRecord, f64)>>>()?;

    // `sort_by` is stable: equal rank values keep their input order.
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    let total: f64 = ranked.iter().map(|(_, v)| *v).sum();
    if total == 0.0 {
        return Err(AnalysisError::division_by_zero("cumulative rank share"));
    }

    let thresholds = config.policy.thresholds();
    let mut running = 0.0;

    Ok(ranked
        .into_iter()
        .map(|(record, rank_value)| {
            running += rank_value;
            let cumulative_fraction = (running * 100.0 / total).min(100.0);
            ClassifiedRecord {
                record,
                rank_value,
                cumulative_fraction,
                category: thresholds.categorize(cumulative_fraction),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn table(demands: &[f64]) -> InventoryTable {
        InventoryTable::new(
            demands
                .iter()
                .enumerate()
                .map(|(i, d)| InventoryRecord::new(format!("PROD_{:03}", i + 1), 10.0, *d, "LOC_01"))
                .collect(),
        )
        .unwrap()
    }

    fn categories(rows: &[ClassifiedRecord]) -> Vec<Category> {
        rows.iter().map(|r| r.category).collect()
    }

    #[test]
    fn two_cut_worked_example() {
        let rows = classify(&table(&[100.0, 50.0, 30.0, 15.0, 5.0]), &ClassifierConfig::default()).unwrap();

        let cumulative: Vec<f64> = rows.iter().map(|r| r.cumulative_fraction).collect();
        assert_eq!(cumulative, vec![50.0, 75.0, 90.0, 97.5, 100.0]);
        assert_eq!(
            categories(&rows),
            vec![Category::B, Category::B, Category::C, Category::C, Category::C]
        );
    }

    #[test]
    fn boundaries_are_inclusive() {
        // 80 / 100 lands exactly on the B cut.
        let rows = classify(&table(&[80.0, 20.0]), &ClassifierConfig::default()).unwrap();
        assert_eq!(rows[0].cumulative_fraction, 80.0);
        assert_eq!(rows[0].category, Category::B);

        // 20 / 100 lands exactly on the A cut.
        let rows = classify(&table(&[20.0, 20.0, 20.0, 20.0, 20.0]), &ClassifierConfig::default()).unwrap();
        assert_eq!(rows[0].category, Category::A);
        assert_eq!(rows[1].category, Category::B);
        assert_eq!(rows[3].category, Category::B);
        assert_eq!(rows[4].category, Category::C);
    }

    #[test]
    fn pareto_policy_uses_80_95_cuts() {
        let config = ClassifierConfig {
            policy: ClassificationPolicy::Pareto,
            ..ClassifierConfig::default()
        };
        let rows = classify(&table(&[100.0, 50.0, 30.0, 15.0, 5.0]), &config).unwrap();
        assert_eq!(
            categories(&rows),
            vec![Category::A, Category::A, Category::B, Category::C, Category::C]
        );
    }

    #[test]
    fn ties_keep_input_order() {
        let rows = classify(&table(&[5.0, 10.0, 5.0, 10.0]), &ClassifierConfig::default()).unwrap();
        let ids: Vec<&str> = rows.iter().map(|r| r.record.id.as_str()).collect();
        assert_eq!(ids, vec!["PROD_002", "PROD_004", "PROD_001", "PROD_003"]);
    }

    #[test]
    fn zero_total_is_division_by_zero() {
        let err = classify(&table(&[0.0, 0.0]), &ClassifierConfig::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::DivisionByZero { .. }));
    }

    #[test]
    fn value_ranking_requires_unit_cost() {
        let config = ClassifierConfig {
            basis: RankBasis::AnnualValue,
            ..ClassifierConfig::default()
        };
        let err = classify(&table(&[1.0]), &config).unwrap_err();
        assert!(matches!(err, AnalysisError::SchemaViolation(msg) if msg.contains("unit_cost")));
    }

    #[test]
    fn value_ranking_weights_by_cost() {
        let config = ClassifierConfig {
            basis: RankBasis::AnnualValue,
            ..ClassifierConfig::default()
        };
        let t = InventoryTable::new(vec![
            InventoryRecord::new("cheap", 1.0, 100.0, "L1").with_unit_cost(1.0),
            InventoryRecord::new("pricey", 1.0, 10.0, "L2").with_unit_cost(50.0),
        ])
        .unwrap();

        let rows = classify(&t, &config).unwrap();
        assert_eq!(rows[0].record.id.as_str(), "pricey");
        assert_eq!(rows[0].rank_value, 10.0 * 12.0 * 50.0);
        assert_eq!(rows[1].rank_value, 100.0 * 12.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: cumulative share never decreases, ends at 100, and categories
        /// follow the same order as the cumulative share.
        #[test]
        fn cumulative_share_is_monotonic(
            demands in prop::collection::vec(0u32..1_000u32, 1..60),
            pareto in any::<bool>(),
        ) {
            prop_assume!(demands.iter().any(|d| *d > 0));
            let demands: Vec<f64> = demands.into_iter().map(f64::from).collect();
            let config = ClassifierConfig {
                policy: if pareto { ClassificationPolicy::Pareto } else { ClassificationPolicy::TwoCut },
                basis: RankBasis::Demand,
            };

            let rows = classify(&table(&demands), &config).unwrap();
            prop_assert_eq!(rows.len(), demands.len());

            for pair in rows.windows(2) {
                prop_assert!(pair[0].rank_value >= pair[1].rank_value);
                prop_assert!(pair[0].cumulative_fraction <= pair[1].cumulative_fraction);
                prop_assert!(pair[0].category <= pair[1].category);
            }
            for row in &rows {
                prop_assert!((0.0..=100.0).contains(&row.cumulative_fraction));
                prop_assert_eq!(row.category, config.policy.thresholds().categorize(row.cumulative_fraction));
            }
            prop_assert_eq!(rows.last().unwrap().cumulative_fraction, 100.0);
        }

        /// Property: classification is a pure function of input and policy.
        #[test]
        fn classification_is_deterministic(
            demands in prop::collection::vec(1u32..500u32, 1..40),
        ) {
            let demands: Vec<f64> = demands.into_iter().map(f64::from).collect();
            let t = table(&demands);
            let first = classify(&t, &ClassifierConfig::default()).unwrap();
            let second = classify(&t, &ClassifierConfig::default()).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
