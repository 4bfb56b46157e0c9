//! Age-tiered tax table lookup.
//!
//! The tax table maps inclusive customer age ranges to a price multiplier.
//! Tiers are scanned in order and the first containing tier wins; overlapping
//! or gapped tables are accepted as configured.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{RentalError, RentalResult};

/// A single age range and the multiplier applied to customers within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxTier {
    /// The lowest age in the tier (inclusive).
    pub from: u32,
    /// The highest age in the tier (inclusive).
    pub to: u32,
    /// The multiplier applied to the base price.
    #[serde(rename = "then", alias = "multiplier")]
    pub multiplier: Decimal,
}

impl TaxTier {
    /// Creates a new tier.
    pub fn new(from: u32, to: u32, multiplier: Decimal) -> Self {
        Self {
            from,
            to,
            multiplier,
        }
    }

    /// Returns true if `age` falls within `[from, to]`.
    pub fn contains(&self, age: u32) -> bool {
        (self.from..=self.to).contains(&age)
    }
}

/// An ordered set of tax tiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxTable {
    tiers: Vec<TaxTier>,
}

impl TaxTable {
    /// Creates a table from tiers in lookup order.
    pub fn new(tiers: Vec<TaxTier>) -> Self {
        Self { tiers }
    }

    /// Returns the tiers in lookup order.
    pub fn tiers(&self) -> &[TaxTier] {
        &self.tiers
    }

    /// Finds the tier covering the given age.
    ///
    /// # Returns
    ///
    /// Returns the first tier whose range contains `age`, or
    /// `NoMatchingTier` if the age falls outside every tier.
    ///
    /// # Examples
    ///
    /// ```
    /// use rental_engine::calculation::TaxTable;
    /// use rust_decimal::Decimal;
    ///
    /// let table = TaxTable::default();
    /// assert_eq!(table.tier_for(20).unwrap().multiplier, Decimal::new(11, 1));
    /// assert!(table.tier_for(17).is_err());
    /// ```
    pub fn tier_for(&self, age: u32) -> RentalResult<&TaxTier> {
        self.tiers
            .iter()
            .find(|tier| tier.contains(age))
            .ok_or(RentalError::NoMatchingTier { age })
    }
}

impl Default for TaxTable {
    /// The standard table: 18–25 at 1.1, 26–30 at 1.5, 31–100 at 1.3.
    fn default() -> Self {
        Self::new(vec![
            TaxTier::new(18, 25, Decimal::new(11, 1)),
            TaxTier::new(26, 30, Decimal::new(15, 1)),
            TaxTier::new(31, 100, Decimal::new(13, 1)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_lower_bound_is_inclusive() {
        let table = TaxTable::default();
        assert_eq!(table.tier_for(18).unwrap().multiplier, dec("1.1"));
        assert_eq!(table.tier_for(26).unwrap().multiplier, dec("1.5"));
        assert_eq!(table.tier_for(31).unwrap().multiplier, dec("1.3"));
    }

    #[test]
    fn test_upper_bound_is_inclusive() {
        let table = TaxTable::default();
        assert_eq!(table.tier_for(25).unwrap().multiplier, dec("1.1"));
        assert_eq!(table.tier_for(30).unwrap().multiplier, dec("1.5"));
        assert_eq!(table.tier_for(100).unwrap().multiplier, dec("1.3"));
    }

    #[test]
    fn test_age_below_table_returns_no_matching_tier() {
        let table = TaxTable::default();

        match table.tier_for(17) {
            Err(RentalError::NoMatchingTier { age }) => assert_eq!(age, 17),
            other => panic!("Expected NoMatchingTier error, got {:?}", other),
        }
    }

    #[test]
    fn test_age_above_table_returns_no_matching_tier() {
        let table = TaxTable::default();
        assert!(matches!(
            table.tier_for(101),
            Err(RentalError::NoMatchingTier { age: 101 })
        ));
    }

    #[test]
    fn test_first_matching_tier_wins_on_overlap() {
        let table = TaxTable::new(vec![
            TaxTier::new(40, 50, dec("1.3")),
            TaxTier::new(45, 60, dec("2.0")),
        ]);

        assert_eq!(table.tier_for(47).unwrap().multiplier, dec("1.3"));
        assert_eq!(table.tier_for(55).unwrap().multiplier, dec("2.0"));
    }

    #[test]
    fn test_gap_in_table_returns_no_matching_tier() {
        let table = TaxTable::new(vec![
            TaxTier::new(18, 25, dec("1.1")),
            TaxTier::new(31, 100, dec("1.3")),
        ]);

        assert!(table.tier_for(28).is_err());
    }

    #[test]
    fn test_empty_table_never_matches() {
        let table = TaxTable::new(vec![]);
        assert!(table.tier_for(30).is_err());
    }

    #[test]
    fn test_deserialize_tier_with_then_key() {
        let tier: TaxTier = serde_json::from_str(r#"{"from": 40, "to": 50, "then": 1.3}"#).unwrap();
        assert_eq!(tier, TaxTier::new(40, 50, dec("1.3")));
    }

    #[test]
    fn test_serialize_tier_writes_then_key() {
        let value = serde_json::to_value(TaxTier::new(18, 25, dec("1.1"))).unwrap();

        assert_eq!(value["then"], "1.1");
        assert!(value.get("multiplier").is_none());

        let tier: TaxTier = serde_json::from_value(value).unwrap();
        assert_eq!(tier, TaxTier::new(18, 25, dec("1.1")));
    }

    proptest! {
        #[test]
        fn prop_tier_for_returns_a_containing_tier(age in 0u32..150) {
            let table = TaxTable::default();
            match table.tier_for(age) {
                Ok(tier) => prop_assert!(tier.contains(age)),
                Err(RentalError::NoMatchingTier { age: reported }) => {
                    prop_assert_eq!(reported, age);
                    prop_assert!(table.tiers().iter().all(|t| !t.contains(age)));
                }
                Err(other) => prop_assert!(false, "unexpected error {:?}", other),
            }
        }
    }
}
