//! Tests for products, interest rates, and terms

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_product::{InterestRate, Product, ProductCode, ProductError, Term};

fn create_test_product(max_principal: Decimal) -> Result<Product, ProductError> {
    Product::new(
        "Test Product",
        ProductCode::PersonalLoan,
        Term::from_months(12).unwrap(),
        InterestRate::new(dec!(5)).unwrap(),
        max_principal,
    )
}

mod product_tests {
    use super::*;

    #[test]
    fn test_new_product_exposes_terms() {
        let product = create_test_product(dec!(10000)).unwrap();
        assert_eq!(product.name(), "Test Product");
        assert_eq!(product.code(), ProductCode::PersonalLoan);
        assert_eq!(product.term().months(), 12);
        assert_eq!(product.interest_rate().value(), dec!(5));
        assert_eq!(product.max_principal(), dec!(10000));
    }

    #[test]
    fn test_blank_name_rejected() {
        let result = Product::new(
            "  ",
            ProductCode::AutoLoan,
            Term::from_months(36).unwrap(),
            InterestRate::new(dec!(7.5)).unwrap(),
            dec!(25000),
        );
        assert_eq!(result, Err(ProductError::MissingRequiredField("name".to_string())));
    }

    #[test]
    fn test_zero_ceiling_rejected() {
        assert!(matches!(
            create_test_product(dec!(0)),
            Err(ProductError::NonPositiveCeiling(_))
        ));
    }

    #[test]
    fn test_allows_principal_is_inclusive() {
        let product = create_test_product(dec!(10000)).unwrap();
        assert!(product.allows_principal(dec!(10000)));
        assert!(!product.allows_principal(dec!(10000.01)));
    }
}

mod product_code_tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        assert_eq!(
            serde_json::to_string(&ProductCode::PersonalLoan).unwrap(),
            "\"PERSONAL_LOAN\""
        );
        let code: ProductCode = serde_json::from_str("\"MORTGAGE\"").unwrap();
        assert_eq!(code, ProductCode::Mortgage);
    }

    #[test]
    fn test_parse_unknown_code() {
        assert_eq!(
            "CREDIT_CARD".parse::<ProductCode>(),
            Err(ProductError::UnknownProductCode("CREDIT_CARD".to_string()))
        );
        assert_eq!("auto_loan".parse::<ProductCode>().unwrap(), ProductCode::AutoLoan);
    }
}

mod interest_rate_tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(InterestRate::new(dec!(0)).is_ok());
        assert!(InterestRate::new(dec!(100)).is_ok());
        assert!(InterestRate::new(dec!(-0.01)).is_err());
        assert!(InterestRate::new(dec!(100.01)).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let rate: InterestRate = serde_json::from_str("\"16.49\"").unwrap();
        assert_eq!(rate.value(), dec!(16.49));
        let result: Result<InterestRate, _> = serde_json::from_str("\"120\"");
        assert!(result.is_err());
    }

    proptest! {
        #[test]
        fn prop_saturating_increase_stays_in_bounds(base in 0u32..=10000, points in 0u32..=10000) {
            let rate = InterestRate::new(Decimal::new(base as i64, 2)).unwrap();
            let raised = rate.saturating_increase_by(Decimal::new(points as i64, 2));
            prop_assert!(raised.value() >= rate.value());
            prop_assert!(raised.value() <= dec!(100));
        }

        #[test]
        fn prop_increase_by_matches_addition_when_in_range(base in 0u32..=5000, points in 0u32..=5000) {
            let rate = InterestRate::new(Decimal::new(base as i64, 2)).unwrap();
            let raised = rate.increase_by(Decimal::new(points as i64, 2)).unwrap();
            prop_assert_eq!(raised.value(), Decimal::new((base + points) as i64, 2));
        }
    }
}

mod term_tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Term::from_months(24).unwrap().to_string(), "24 months");
    }

    #[test]
    fn test_deserialize_rejects_zero() {
        let result: Result<Term, _> = serde_json::from_str("0");
        assert!(result.is_err());
    }
}
