//! Bill scenarios built from the shared fixtures and builders
//!
//! These tests double as a check that the helpers in this crate produce
//! the records they claim to.

use domain_billing::{generate_monthly_bill, BillGenerator, ItemCode};
use proptest::prelude::*;
use test_utils::*;

mod fixture_scenarios {
    use super::*;

    #[test]
    fn test_desk_rentals_in_november() {
        let bill = BillGenerator::new(MonthFixtures::november_2024()).generate(&ItemFixtures::desk_rentals());

        let line = assert_single_line(&bill);
        assert_eq!(line.item_code, DESK_CODE);
        assert_eq!(line.rate, 1080.0);
        assert_eq!(line.qty, 10);
        assert_eq!(line.amount, 10800.0);
        assert_eq!(line.billing_period, "2024-11-01 to 2024-11-30");
        assert_revenue_consistent(&bill);
    }

    #[test]
    fn test_expired_desk_alone_bills_nothing() {
        let bill = generate_monthly_bill(&[ItemFixtures::desk_expired()], "2024-11").unwrap();

        assert_empty_bill(&bill);
    }

    #[test]
    fn test_broken_records_are_ignored() {
        let items = vec![
            ItemFixtures::unparsable_start(),
            ItemFixtures::non_numeric_rate(),
            ItemFixtures::missing_code(),
            ItemFixtures::desk_renewed(),
        ];

        let bill = generate_monthly_bill(&items, "2024-11").unwrap();

        assert_eq!(assert_single_line(&bill).item_code, DESK_CODE);
        assert_eq!(bill.total_revenue, 10800.0);
    }

    #[test]
    fn test_leap_february_uses_29_days() {
        let item = ItemRecordBuilder::new()
            .with_rate("290")
            .active(MonthFixtures::date(2024, 2, 29), MonthFixtures::date(2024, 3, 31))
            .build();

        let generator = BillGenerator::new(MonthFixtures::february_2024());
        let charge = generator.prorate(&item).unwrap();

        assert_eq!(charge.fraction, 1.0 / 29.0);
        assert_amount_approx_eq(charge.amount, 10.0, 1e-9);
    }

    #[test]
    fn test_common_february_uses_28_days() {
        let item = ItemRecordBuilder::new()
            .with_rate(280)
            .active(MonthFixtures::date(2023, 2, 28), MonthFixtures::date(2023, 3, 31))
            .build();

        let bill = BillGenerator::new(MonthFixtures::february_2023()).generate(&[item]);

        assert_eq!(assert_single_line(&bill).amount, 10.0);
    }
}

mod builder_scenarios {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_defaults_bill_full_month() {
        let bill = generate_monthly_bill(&[ItemRecordBuilder::new().build()], "2024-06").unwrap();

        let line = assert_single_line(&bill);
        assert_eq!(line.item_code, "Desk");
        assert_eq!(line.amount, 100.0);
        assert_eq!(line.billing_period, "2024-06-01 to 2024-06-30");
    }

    #[test]
    fn test_each_missing_field_skips_the_record() {
        for field in ["item_code", "qty", "rate", "start_date", "stop_date"] {
            let item = ItemRecordBuilder::new().without(field).build();
            let bill = generate_monthly_bill(&[item], "2024-06").unwrap();

            assert_empty_bill(&bill);
        }
    }

    #[test]
    fn test_wrong_shapes_skip_the_record() {
        let cases = [
            ("qty", json!({"n": 1})),
            ("qty", json!(true)),
            ("rate", json!([100])),
            ("start_date", json!(20240101)),
            ("stop_date", json!(null)),
            ("item_code", json!(1.5)),
        ];

        for (field, value) in cases {
            let item = ItemRecordBuilder::new().with_raw(field, value).build();
            let bill = generate_monthly_bill(&[item], "2024-06").unwrap();

            assert_empty_bill(&bill);
        }
    }

    #[test]
    fn test_integer_item_code_stays_an_integer() {
        let item = ItemRecordBuilder::new().with_code(42i64).build();
        let bill = generate_monthly_bill(&[item], "2024-06").unwrap();

        let line = assert_single_line(&bill);
        assert_eq!(line.item_code, ItemCode::Integer(42));
        assert_eq!(line.item_code.to_string(), "42");
    }

    #[test]
    fn test_start_date_text_overrides() {
        let item = ItemRecordBuilder::new()
            .with_start_date("2024-06-16")
            .with_stop_date("2024-06-30")
            .with_qty("3")
            .build();

        let bill = generate_monthly_bill(&[item], "2024-06").unwrap();

        let line = assert_single_line(&bill);
        assert_eq!(line.qty, 3);
        assert_eq!(line.amount, 150.0);
    }
}

proptest! {
    #[test]
    fn generated_bills_are_consistent(
        month in billing_month_strategy(),
        seed_items in item_list_strategy(MonthFixtures::date(2024, 11, 15), 25),
    ) {
        let november = BillGenerator::new(MonthFixtures::november_2024());
        let bill = november.generate(&seed_items);
        assert_revenue_consistent(&bill);

        let other = BillGenerator::new(month);
        prop_assert_eq!(other.generate(&seed_items), other.generate(&seed_items));
    }

    #[test]
    fn lines_never_outnumber_billable_records(items in item_list_strategy(MonthFixtures::date(2024, 11, 15), 25)) {
        let generator = BillGenerator::new(MonthFixtures::november_2024());
        let billable = items.iter().filter(|item| generator.prorate(item).is_ok()).count();

        let bill = generator.generate(&items);

        prop_assert!(bill.line_items.len() <= billable);
        prop_assert_eq!(bill.line_items.is_empty(), billable == 0);
    }
}
