//! Integration tests for the backend boundary, against a mock HTTP server.
//!
//! These pin down the two things the api crate exists for: the exact wire
//! shapes (request and response) and the normalization of the backend's
//! loose records into canonical types.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use minimart_api::checkout::{confirm_payment, CheckoutError};
use minimart_api::{ApiClient, ApiConfig, ApiError};
use minimart_core::checkout::CheckoutSession;
use minimart_core::money::Money;
use minimart_core::types::{Discount, Product, PromotionScope, Rate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ApiConfig::new(server.uri()))
}

fn catalog_product(id: i64, price: i64, stock: i64) -> Product {
    Product {
        id,
        code: format!("SP-{:03}", id),
        barcode: None,
        name: format!("Product {}", id),
        category_id: None,
        category_name: None,
        unit: None,
        cost_price: None,
        price: Money::from_dong(price),
        stock,
        min_stock: None,
        image_url: None,
        is_active: true,
        created_at: None,
    }
}

#[tokio::test]
async fn products_are_normalized_and_refiltered() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("isActive", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "productId": 1,
                "productCode": "SP-001",
                "productName": "Coca Cola 330ml",
                "sellingPrice": 12000.0,
                "stockQuantity": 40,
                "isActive": true
            },
            {
                // isActive absent: active by default
                "productId": 2,
                "productName": "Snack Oishi",
                "price": 8000,
                "stock": 15
            },
            {
                // soft-deleted record leaking through the query
                "productId": 3,
                "productName": "Discontinued",
                "sellingPrice": 1000,
                "isActive": false
            }
        ])))
        .mount(&server)
        .await;

    let products = client_for(&server).products().list_active().await.unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].price, Money::from_dong(12_000));
    assert_eq!(products[0].stock, 40);
    // The `price`/`stock` aliases land in the same canonical fields.
    assert_eq!(products[1].price, Money::from_dong(8_000));
    assert_eq!(products[1].stock, 15);
}

#[tokio::test]
async fn promotions_are_normalized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/promotions"))
        .and(query_param("isActive", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "promotionId": 5,
                "promotionCode": "KM05",
                "promotionName": "Giảm 20%",
                "discountType": "Percentage",
                "discountValue": 20,
                "minOrderAmount": 0
            },
            {
                "promotionId": 6,
                "promotionCode": "CAT10",
                "discountType": "FIXED",
                "discountValue": 10000,
                "applyTo": "CATEGORY",
                "minOrderAmount": 200000
            }
        ])))
        .mount(&server)
        .await;

    let promotions = client_for(&server)
        .promotions()
        .list_active()
        .await
        .unwrap();

    assert_eq!(promotions.len(), 2);

    // Mixed-case "Percentage", missing applyTo, zero minimum.
    let order_promo = &promotions[0];
    assert_eq!(
        order_promo.discount,
        Discount::Percent(Rate::from_percent(20.0))
    );
    assert_eq!(order_promo.scope, PromotionScope::Order);
    assert_eq!(order_promo.min_order, None);
    assert!(order_promo.is_active);
    assert!(order_promo.applies_to(Money::from_dong(1_000)));

    // Unrecognized discount type falls back to a flat amount; category
    // scope never applies to the order total.
    let category_promo = &promotions[1];
    assert_eq!(
        category_promo.discount,
        Discount::Amount(Money::from_dong(10_000))
    );
    assert_eq!(category_promo.scope, PromotionScope::Category);
    assert!(!category_promo.applies_to(Money::from_dong(999_999)));
}

#[tokio::test]
async fn taxes_default_to_active() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/taxes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "taxId": 1, "taxCode": "VAT8", "taxName": "VAT", "taxRate": 8 },
            { "taxId": 2, "taxCode": "VAT0", "isActive": false }
        ])))
        .mount(&server)
        .await;

    let taxes = client_for(&server).taxes().list_active().await.unwrap();

    assert_eq!(taxes.len(), 2);
    assert!(taxes[0].is_active);
    assert_eq!(taxes[0].rate, Rate::from_percent(8.0));
    assert!(!taxes[1].is_active);
    // Missing taxRate normalizes to zero.
    assert!(taxes[1].rate.is_zero());
}

#[tokio::test]
async fn bearer_token_is_attached() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(ApiConfig::new(server.uri()).with_token("test-token"));
    let products = client.products().list_active().await.unwrap();
    assert!(products.is_empty());
}

#[tokio::test]
async fn unauthorized_maps_to_typed_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .products()
        .list_active()
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
}

#[tokio::test]
async fn confirm_payment_sends_the_legacy_payload_and_resets_the_session() {
    let server = MockServer::start().await;

    // The wire contract: manual discount amount only, null invoice number,
    // zero per-line discounts. Promotion and tax amounts never travel.
    Mock::given(method("POST"))
        .and(path("/api/sales"))
        .and(body_partial_json(json!({
            "invoiceNumber": null,
            "discount": 10000,
            "paidAmount": 200000,
            "paymentMethod": "Cash",
            "details": [
                { "productId": 1, "quantity": 2, "unitPrice": 50000, "discount": 0 }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "invoiceId": 9,
            "invoiceNumber": "HD-2025-0009"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = CheckoutSession::new();
    session
        .cart_mut()
        .add_with_quantity(&catalog_product(1, 50_000, 99), 2)
        .unwrap();
    session.set_discount_percent(10.0).unwrap();

    let receipt = confirm_payment(
        &client_for(&server),
        &mut session,
        Money::from_dong(200_000),
    )
    .await
    .unwrap();

    assert_eq!(receipt.reference().as_deref(), Some("HD-2025-0009"));
    // Reset for the next customer.
    assert!(session.cart().is_empty());
}

#[tokio::test]
async fn rejected_invoice_keeps_the_session_intact() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/sales"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "message": "Không đủ tồn kho" })),
        )
        .mount(&server)
        .await;

    let mut session = CheckoutSession::new();
    session
        .cart_mut()
        .add(&catalog_product(1, 50_000, 99))
        .unwrap();

    let err = confirm_payment(
        &client_for(&server),
        &mut session,
        Money::from_dong(100_000),
    )
    .await
    .unwrap_err();

    match err {
        CheckoutError::Api(ApiError::Backend { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "Không đủ tồn kho");
        }
        other => panic!("unexpected error: {:?}", other),
    }

    // The cashier can fix the problem and retry.
    assert_eq!(session.cart().total_quantity(), 1);
}

#[tokio::test]
async fn short_cash_tender_never_reaches_the_backend() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/sales"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let mut session = CheckoutSession::new();
    session
        .cart_mut()
        .add(&catalog_product(1, 50_000, 99))
        .unwrap();

    let err = confirm_payment(&client_for(&server), &mut session, Money::from_dong(10_000))
        .await
        .unwrap_err();

    assert!(matches!(err, CheckoutError::Core(_)));
    assert!(!session.cart().is_empty());
}

#[tokio::test]
async fn sale_listing_collapses_total_field_variants() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/sales"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "invoiceId": 1, "invoiceNumber": "HD-001", "totalAmount": 120000 },
            { "invoiceId": 2, "total": 80000 },
            { "invoiceId": 3, "grandTotal": 60000, "status": "Completed" }
        ])))
        .mount(&server)
        .await;

    let sales = client_for(&server).sales().list_recent().await.unwrap();

    assert_eq!(sales.len(), 3);
    assert_eq!(sales[0].total, Money::from_dong(120_000));
    assert_eq!(sales[1].total, Money::from_dong(80_000));
    assert_eq!(sales[2].total, Money::from_dong(60_000));
    assert_eq!(sales[2].status.as_deref(), Some("Completed"));
}
