//! Integration tests for tax request generation.
//!
//! These tests build requests for realistic order snapshots and check the
//! serialized JSON against the tax service's request schema.

use chrono::{Local, NaiveDate, TimeZone, Utc};
use common::RecordId;
use domain::{
    Adjustable, Address, Adjustment, Customer, LineItem, Money, OrderSnapshot, Shipment,
};
use serde_json::{Value, json};
use tax_request::{DocumentType, RequestConfig, RequestOptions, TaxRequestBuilder};

const LINE_ITEM_ID: u64 = 1;
const SHIPMENT_ID: u64 = 1;

fn stock_location() -> Address {
    Address::new("1070 Lombard Street")
        .with_city("San Francisco")
        .with_state_code("CA")
        .with_country_iso("US")
        .with_zipcode("94109")
}

fn customer_address() -> Address {
    Address::new("42 Fake Street")
        .with_address2("Southeast")
        .with_city("Los Angeles")
        .with_state_code("CA")
        .with_country_iso("US")
        .with_zipcode("90210")
}

/// One $5 line item shipped for $5 from San Francisco to Los Angeles.
fn order() -> OrderSnapshot {
    OrderSnapshot::new("R123456789", "USD")
        .with_customer(Customer::registered(1, "test@example.com"))
        .with_line_item(
            LineItem::new(LINE_ITEM_ID, "SKU-1", "Product #1", 1, Money::from_cents(500))
                .with_tax_code("PC030000"),
        )
        .with_shipment(Shipment::new(SHIPMENT_ID, "UPS Ground", Money::from_cents(500)))
        .with_address(customer_address())
        .with_stock_location(stock_location())
}

fn builder() -> TaxRequestBuilder {
    TaxRequestBuilder::new(RequestConfig::default().with_company_code("ACME"))
}

fn options() -> RequestOptions {
    RequestOptions {
        commit: false,
        doc_type: Some(DocumentType::SalesOrder),
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn generate(order: &OrderSnapshot) -> Value {
    builder()
        .generate_on(order, &options(), today())
        .to_json()
        .unwrap()
}

fn addresses() -> Value {
    json!({
        "shipFrom": {
            "line1": "1070 Lombard Street",
            "line2": null,
            "city": "San Francisco",
            "region": "CA",
            "country": "US",
            "postalCode": "94109"
        },
        "shipTo": {
            "line1": "42 Fake Street",
            "line2": "Southeast",
            "city": "Los Angeles",
            "region": "CA",
            "country": "US",
            "postalCode": "90210"
        }
    })
}

mod get_tax {
    use super::*;

    #[test]
    fn creates_a_request_with_correct_values() {
        let request = generate(&order());

        assert_eq!(
            request,
            json!({
                "createTransactionModel": {
                    "code": "R123456789",
                    "date": "2024-06-01",
                    "discount": 0.0,
                    "commit": false,
                    "type": "SalesOrder",
                    "lines": [
                        {
                            "number": "1-LI",
                            "description": "Product #1",
                            "taxCode": "PC030000",
                            "itemCode": "SKU-1",
                            "quantity": 1,
                            "amount": 5.0,
                            "discounted": false,
                            "taxIncluded": false,
                            "addresses": addresses(),
                            "customerUsageType": null,
                            "businessIdentificationNo": null,
                            "exemptionCode": null
                        },
                        {
                            "number": "1-FR",
                            "description": "Shipping Charge",
                            "taxCode": "FR000000",
                            "itemCode": "UPS Ground",
                            "quantity": 1,
                            "amount": 5.0,
                            "discounted": false,
                            "taxIncluded": false,
                            "addresses": addresses(),
                            "customerUsageType": null,
                            "businessIdentificationNo": null,
                            "exemptionCode": null
                        }
                    ],
                    "customerCode": "1",
                    "companyCode": "ACME",
                    "customerUsageType": null,
                    "exemptionNo": null,
                    "referenceCode": "R123456789",
                    "currencyCode": "USD",
                    "businessIdentificationNo": null
                }
            })
        );
    }

    #[test]
    fn line_item_discount_sends_full_price_and_header_discount() {
        let order = order().with_adjustment(Adjustment::promotion(
            Adjustable::LineItem(RecordId::new(LINE_ITEM_ID)),
            Money::from_cents(-500),
        ));

        let request = generate(&order);
        let model = &request["createTransactionModel"];

        assert_eq!(model["discount"], json!(5.0));
        assert_eq!(model["lines"][0]["amount"], json!(5.0));
        assert_eq!(model["lines"][0]["discounted"], json!(true));
    }

    #[test]
    fn free_shipping_sends_discounted_shipment_amount() {
        let order = order().with_adjustment(Adjustment::promotion(
            Adjustable::Shipment(RecordId::new(SHIPMENT_ID)),
            Money::from_cents(-500),
        ));

        let request = generate(&order);
        let model = &request["createTransactionModel"];

        assert_eq!(model["discount"], json!(0.0));
        assert_eq!(model["lines"][1]["amount"], json!(0.0));
        assert_eq!(model["lines"][1]["discounted"], json!(false));
        assert_eq!(model["lines"][0]["discounted"], json!(false));
    }

    #[test]
    fn completed_order_includes_tax_date_override() {
        let completed_at = Utc.with_ymd_and_hms(2018, 2, 28, 0, 0, 0).unwrap();
        let order = OrderSnapshot::new("R000000001", "USD").completed(completed_at);

        let request = generate(&order);
        let model = &request["createTransactionModel"];

        assert_eq!(model["date"], json!("2018-02-28"));
        assert_eq!(
            model["taxOverride"],
            json!({
                "type": "TaxDate",
                "reason": "Completed At",
                "taxDate": "2018-02-28"
            })
        );
    }

    #[test]
    fn incomplete_order_has_no_tax_override() {
        let request = generate(&order());
        let model = request["createTransactionModel"].as_object().unwrap();

        assert!(!model.contains_key("taxOverride"));
    }

    #[test]
    fn incomplete_order_is_dated_today() {
        let before = Local::now().date_naive();
        let request = builder().generate(&order(), &options());
        let after = Local::now().date_naive();

        let date = request.create_transaction_model.date;
        assert!(date == before || date == after);
    }

    #[test]
    fn generating_twice_yields_identical_requests() {
        let order = order().with_adjustment(Adjustment::promotion(
            Adjustable::Order,
            Money::from_cents(-250),
        ));

        let first = builder().generate_on(&order, &options(), today());
        let second = builder().generate_on(&order, &options(), today());

        assert_eq!(first, second);
    }
}

mod discounts {
    use super::*;

    #[test]
    fn order_level_promotion_counts_and_flags_items() {
        let order = order()
            .with_line_item(LineItem::new(2, "SKU-2", "Product #2", 3, Money::from_cents(199)))
            .with_adjustment(Adjustment::promotion(Adjustable::Order, Money::from_cents(-300)));

        let request = builder().generate_on(&order, &options(), today());
        let model = request.create_transaction_model;

        assert_eq!(model.discount, 3.0);
        assert!(model.lines[0].discounted);
        assert!(model.lines[1].discounted);
        assert_eq!(model.lines[1].amount, 5.97);
        assert!(!model.lines[2].discounted);
    }

    #[test]
    fn ineligible_and_tax_adjustments_are_ignored() {
        let order = order()
            .with_adjustment(
                Adjustment::promotion(
                    Adjustable::LineItem(RecordId::new(LINE_ITEM_ID)),
                    Money::from_cents(-200),
                )
                .ineligible(),
            )
            .with_adjustment(Adjustment::tax(
                Adjustable::LineItem(RecordId::new(LINE_ITEM_ID)),
                Money::from_cents(45),
            ));

        let request = builder().generate_on(&order, &options(), today());
        let model = request.create_transaction_model;

        assert_eq!(model.discount, 0.0);
        assert!(!model.lines[0].discounted);
    }

    #[test]
    fn mixed_promotions_only_count_non_shipping() {
        let order = order()
            .with_adjustment(Adjustment::promotion(
                Adjustable::LineItem(RecordId::new(LINE_ITEM_ID)),
                Money::from_cents(-125),
            ))
            .with_adjustment(Adjustment::promotion(
                Adjustable::Shipment(RecordId::new(SHIPMENT_ID)),
                Money::from_cents(-500),
            ));

        let request = builder().generate_on(&order, &options(), today());

        assert_eq!(request.create_transaction_model.discount, 1.25);
    }
}

mod customer {
    use super::*;

    #[test]
    fn exemption_details_are_copied_to_header_and_lines() {
        let order = order().with_customer(Customer {
            entity_use_code: Some("E".to_string()),
            exemption_number: Some("EX-42".to_string()),
            vat_id: Some("DE123456789".to_string()),
            ..Customer::registered(7, "exempt@example.com")
        });

        let request = generate(&order);
        let model = &request["createTransactionModel"];

        assert_eq!(model["customerCode"], json!("7"));
        assert_eq!(model["customerUsageType"], json!("E"));
        assert_eq!(model["exemptionNo"], json!("EX-42"));
        assert_eq!(model["businessIdentificationNo"], json!("DE123456789"));
        for line in model["lines"].as_array().unwrap() {
            assert_eq!(line["customerUsageType"], json!("E"));
            assert_eq!(line["exemptionCode"], json!("EX-42"));
            assert_eq!(line["businessIdentificationNo"], json!("DE123456789"));
        }
    }

    #[test]
    fn guest_checkout_uses_email_as_customer_code() {
        let order = order().with_customer(Customer::guest("guest@example.com"));

        let request = builder().generate_on(&order, &options(), today());

        assert_eq!(
            request.create_transaction_model.customer_code,
            "guest@example.com"
        );
    }
}

mod missing_data {
    use super::*;

    #[test]
    fn order_without_shipments_has_only_item_lines() {
        let mut order = order();
        order.shipments.clear();

        let request = builder().generate_on(&order, &options(), today());
        let lines = &request.create_transaction_model.lines;

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].number, "1-LI");
    }

    #[test]
    fn missing_addresses_become_null_fields() {
        let mut order = order();
        order.ship_address = None;
        order.stock_location = None;

        let request = generate(&order);
        let ship_to = &request["createTransactionModel"]["lines"][0]["addresses"]["shipTo"];

        assert_eq!(
            ship_to,
            &json!({
                "line1": null,
                "line2": null,
                "city": null,
                "region": null,
                "country": null,
                "postalCode": null
            })
        );
    }

    #[test]
    fn empty_order_builds_header_only() {
        let order = OrderSnapshot::new("R0", "EUR");

        let request = builder().generate_on(&order, &options(), today());
        let model = request.create_transaction_model;

        assert!(model.lines.is_empty());
        assert_eq!(model.currency_code, "EUR");
        assert_eq!(model.customer_code, "");
        assert_eq!(model.discount, 0.0);
    }
}

mod request_options {
    use super::*;

    #[test]
    fn commit_and_document_type_pass_through() {
        let request = builder().generate_on(
            &order(),
            &RequestOptions::committed(DocumentType::SalesInvoice),
            today(),
        );
        let json = request.to_json().unwrap();

        assert_eq!(json["createTransactionModel"]["commit"], json!(true));
        assert_eq!(json["createTransactionModel"]["type"], json!("SalesInvoice"));
    }

    #[test]
    fn missing_document_type_defaults_to_sales_order() {
        let request = builder().generate_on(&order(), &RequestOptions::estimate(), today());

        assert_eq!(
            request.create_transaction_model.document_type,
            DocumentType::SalesOrder
        );
    }
}

#[test]
fn host_json_snapshot_round_trips_into_a_request() {
    let order: OrderSnapshot = serde_json::from_value(json!({
        "number": "R555",
        "currency": "USD",
        "customer": {"email": "guest@example.com"},
        "adjustments": [
            {"amount": "-2.50", "eligible": true, "source": "promotion",
             "adjustable": {"type": "line_item", "id": 4}},
            {"amount": "-1.00", "eligible": true, "source": "promotion",
             "adjustable": {"type": "shipment", "id": 9}}
        ],
        "line_items": [
            {"id": 4, "sku": "MUG", "name": "Mug", "quantity": 2, "price": "6.00"}
        ],
        "shipments": [
            {"id": 9, "shipping_method": "USPS", "cost": "4.00"}
        ]
    }))
    .unwrap();

    let request = builder().generate_on(&order, &options(), today());
    let model = request.create_transaction_model;

    assert_eq!(model.discount, 2.5);
    assert_eq!(model.lines[0].amount, 12.0);
    assert!(model.lines[0].discounted);
    assert_eq!(model.lines[1].number, "9-FR");
    assert_eq!(model.lines[1].amount, 3.0);
}

#[test]
fn large_host_amounts_do_not_overflow() {
    let order: OrderSnapshot = serde_json::from_value(json!({
        "number": "R556",
        "currency": "USD",
        "line_items": [
            {"id": 4, "sku": "GOLD", "name": "Gold bar", "quantity": 2,
             "price": "90000000000000000"}
        ],
        "adjustments": [
            {"amount": "-90000000000000000", "eligible": true, "source": "promotion",
             "adjustable": {"type": "order"}},
            {"amount": "-90000000000000000", "eligible": true, "source": "promotion",
             "adjustable": {"type": "order"}}
        ]
    }))
    .unwrap();

    let request = builder().generate_on(&order, &options(), today());
    let model = request.create_transaction_model;

    assert_eq!(model.lines[0].amount, 1.8e17);
    assert_eq!(model.discount, 1.8e17);
}
