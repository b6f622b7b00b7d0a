use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use smartspace_core::{ensure_unique_ids, AnalysisError, AnalysisResult, Entity, LocationId, SkuId};

/// One row per stock-keeping unit, as supplied by a data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: SkuId,
    /// Units on hand.
    pub current_stock: f64,
    /// Demand signal used for ranking and pick-time weighting.
    #[serde(alias = "monthly_sales")]
    pub daily_demand: f64,
    /// Only required when ranking by monetary value.
    #[serde(default)]
    pub unit_cost: Option<f64>,
    pub current_location: LocationId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
}

impl InventoryRecord {
    pub fn new(
        id: impl Into<SkuId>,
        current_stock: f64,
        daily_demand: f64,
        current_location: impl Into<LocationId>,
    ) -> Self {
        Self {
            id: id.into(),
            current_stock,
            daily_demand,
            unit_cost: None,
            current_location: current_location.into(),
            product_category: None,
            item_type: None,
            weight_kg: None,
        }
    }

    pub fn with_unit_cost(mut self, unit_cost: f64) -> Self {
        self.unit_cost = Some(unit_cost);
        self
    }

    pub fn with_product_category(mut self, category: impl Into<String>) -> Self {
        self.product_category = Some(category.into());
        self
    }

    pub fn with_item_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = Some(item_type.into());
        self
    }

    pub fn with_weight_kg(mut self, weight_kg: f64) -> Self {
        self.weight_kg = Some(weight_kg);
        self
    }

    /// Check the per-row schema invariants.
    pub fn validate(&self) -> AnalysisResult<()> {
        if self.id.is_blank() {
            return Err(AnalysisError::schema("record id cannot be blank"));
        }
        if self.current_location.is_blank() {
            return Err(AnalysisError::schema(format!(
                "record {} has a blank current_location",
                self.id
            )));
        }
        ensure_non_negative(&self.id, "current_stock", self.current_stock)?;
        ensure_non_negative(&self.id, "daily_demand", self.daily_demand)?;
        if let Some(cost) = self.unit_cost {
            ensure_non_negative(&self.id, "unit_cost", cost)?;
        }
        if let Some(weight) = self.weight_kg {
            ensure_non_negative(&self.id, "weight_kg", weight)?;
        }
        Ok(())
    }
}

impl Entity for InventoryRecord {
    type Id = SkuId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn ensure_non_negative(id: &SkuId, field: &str, value: f64) -> AnalysisResult<()> {
    if !value.is_finite() {
        return Err(AnalysisError::schema(format!("record {id}: {field} must be finite")));
    }
    if value < 0.0 {
        return Err(AnalysisError::schema(format!(
            "record {id}: {field} cannot be negative (got {value})"
        )));
    }
    Ok(())
}

/// Validated, non-empty table of inventory records.
///
/// This is the pipeline's input boundary: once a table exists, every stage can
/// rely on unique ids and non-negative, finite numeric fields.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryTable {
    records: Vec<InventoryRecord>,
}

impl InventoryTable {
    pub fn new(records: Vec<InventoryRecord>) -> AnalysisResult<Self> {
        if records.is_empty() {
            return Err(AnalysisError::schema("inventory table is empty"));
        }
        for record in &records {
            record.validate()?;
        }
        ensure_unique_ids(&records)?;
        Ok(Self { records })
    }

    pub fn records(&self) -> &[InventoryRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &InventoryRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false` for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<InventoryRecord> {
        self.records
    }

    /// Distinct `current_location` values, sorted.
    pub fn distinct_locations(&self) -> BTreeSet<&LocationId> {
        self.records.iter().map(|r| &r.current_location).collect()
    }

    pub fn total_stock(&self) -> f64 {
        self.records.iter().map(|r| r.current_stock).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, demand: f64, location: &str) -> InventoryRecord {
        InventoryRecord::new(id, 10.0, demand, location)
    }

    #[test]
    fn empty_table_is_rejected() {
        let err = InventoryTable::new(Vec::new()).unwrap_err();
        assert!(matches!(err, AnalysisError::SchemaViolation(msg) if msg.contains("empty")));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = InventoryTable::new(vec![record("P1", 5.0, "L1"), record("P1", 6.0, "L2")])
            .unwrap_err();
        assert!(matches!(err, AnalysisError::SchemaViolation(msg) if msg.contains("duplicate")));
    }

    #[test]
    fn negative_and_non_finite_fields_are_rejected() {
        let negative_demand = record("P1", -1.0, "L1");
        assert!(InventoryTable::new(vec![negative_demand]).is_err());

        let negative_cost = record("P1", 1.0, "L1").with_unit_cost(-0.5);
        assert!(InventoryTable::new(vec![negative_cost]).is_err());

        let nan_stock = InventoryRecord::new("P1", f64::NAN, 1.0, "L1");
        let err = InventoryTable::new(vec![nan_stock]).unwrap_err();
        assert!(matches!(err, AnalysisError::SchemaViolation(msg) if msg.contains("finite")));
    }

    #[test]
    fn blank_location_is_rejected() {
        let err = InventoryTable::new(vec![record("P1", 1.0, "  ")]).unwrap_err();
        assert!(matches!(err, AnalysisError::SchemaViolation(msg) if msg.contains("current_location")));
    }

    #[test]
    fn distinct_locations_and_stock_totals() {
        let table = InventoryTable::new(vec![
            record("P1", 1.0, "L1"),
            record("P2", 2.0, "L1"),
            record("P3", 3.0, "L2"),
        ])
        .unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.distinct_locations().len(), 2);
        assert_eq!(table.total_stock(), 30.0);
    }

    #[test]
    fn monthly_sales_is_accepted_as_demand_alias() {
        let json = r#"{"id":"P9","current_stock":4,"monthly_sales":12.5,"current_location":"LOC_03"}"#;
        let rec: InventoryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.daily_demand, 12.5);
        assert_eq!(rec.unit_cost, None);
    }
}
