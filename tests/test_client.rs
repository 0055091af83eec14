//! Wire-level tests: URL building, backend error extraction, request bodies
//! and response decoding. No network access.

mod common;

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

use jewel_storefront_sdk::api::cart::QuantityUpdate;
use jewel_storefront_sdk::api::orders::confirmation_from;
use jewel_storefront_sdk::api::products::product_path;
use jewel_storefront_sdk::client::{backend_message, ApiClient};
use jewel_storefront_sdk::models::{
    Cart, MetalRate, MetalRateUpdate, MetalRates, MetalType, OrderConfirmation, OrderResponse,
    PaymentMethod, Product,
};
use jewel_storefront_sdk::notify::{Notification, NotificationLevel, CRITICAL_ERROR_MESSAGE};
use jewel_storefront_sdk::StorefrontError;
use rust_decimal_macros::dec;

// ---------------------------------------------------------------------------
// ApiClient
// ---------------------------------------------------------------------------

#[test]
fn url_joins_base_and_path() {
    let client = ApiClient::new("https://api.example.com/", None, Duration::from_secs(5)).unwrap();
    assert_eq!(client.base_url(), "https://api.example.com");
    assert_eq!(
        client.url("/api/admin/metal-rates"),
        "https://api.example.com/api/admin/metal-rates"
    );
    assert_eq!(client.url("cart"), "https://api.example.com/cart");
    assert_eq!(product_path("abc"), "/products/abc");
}

#[test]
fn token_can_be_replaced() {
    let client = ApiClient::new("http://localhost", Some("a".into()), Duration::from_secs(5)).unwrap();
    assert_eq!(client.token().as_deref(), Some("a"));
    client.set_token(None);
    assert!(client.token().is_none());
}

#[test]
fn backend_message_prefers_msg_then_error_then_message() {
    assert_eq!(
        backend_message(r#"{"msg": "Out of stock", "error": "x"}"#).as_deref(),
        Some("Out of stock")
    );
    assert_eq!(
        backend_message(r#"{"error": "Invalid token"}"#).as_deref(),
        Some("Invalid token")
    );
    assert_eq!(
        backend_message(r#"{"message": "Not allowed"}"#).as_deref(),
        Some("Not allowed")
    );
    assert_eq!(backend_message(r#"{"status": 500}"#), None);
    assert_eq!(backend_message("   "), None);
    assert_eq!(backend_message("Bad Gateway").as_deref(), Some("Bad Gateway"));
    assert_eq!(backend_message("<html><body>oops</body></html>"), None);
}

// ---------------------------------------------------------------------------
// Responses over a loopback socket
// ---------------------------------------------------------------------------

/// Serve one canned HTTP response on a loopback port and return its base URL.
fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
    });
    format!("http://{}", addr)
}

fn client_for(base_url: &str) -> ApiClient {
    ApiClient::new(base_url, Some("tok".into()), Duration::from_secs(5)).unwrap()
}

#[test]
fn rejection_carries_backend_message() {
    let base = serve_once("400 Bad Request", r#"{"msg": "Only 3 units in stock"}"#);
    let err = client_for(&base)
        .get_json::<serde_json::Value>("/cart")
        .unwrap_err();
    match err {
        StorefrontError::Backend { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Only 3 units in stock");
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn rejection_without_body_uses_status_reason() {
    let base = serve_once("502 Bad Gateway", "");
    let err = client_for(&base)
        .get_json::<serde_json::Value>("/api/admin/metal-rates")
        .unwrap_err();
    assert!(matches!(
        err,
        StorefrontError::Backend { status: 502, ref message } if message == "Bad Gateway"
    ));
    assert_eq!(Notification::from_error(&err).message, "Bad Gateway");
}

#[test]
fn success_body_is_decoded() {
    let base = serve_once(
        "200 OK",
        r#"{"gold": {"base_rate": 5800, "premium": 450}, "silver": {"base_rate": 75, "premium": 500}}"#,
    );
    let rates: MetalRates = client_for(&base).get_json("/api/admin/metal-rates").unwrap();
    assert_eq!(rates, common::sample_rates());
}

#[test]
fn empty_success_body_is_accepted() {
    let base = serve_once("200 OK", "");
    client_for(&base).delete("/cart/p1").unwrap();
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

#[test]
fn notifications_from_errors() {
    let backend = StorefrontError::Backend {
        status: 403,
        message: "Admins only".to_string(),
    };
    assert_eq!(Notification::from_error(&backend).message, "Admins only");

    let validation = StorefrontError::Validation("Weight is required".to_string());
    assert_eq!(Notification::from(&validation).message, "Weight is required");

    let json = StorefrontError::Json(serde_json::from_str::<u8>("x").unwrap_err());
    let note = Notification::from_error(&json);
    assert!(note.is_error());
    assert_eq!(note.message, CRITICAL_ERROR_MESSAGE);
}

#[test]
fn notification_levels() {
    let saved = Notification::success("Product saved");
    assert_eq!(saved.level, NotificationLevel::Success);
    assert!(!saved.is_error());

    let info = Notification::info("Rates refreshed");
    assert_eq!(info.level, NotificationLevel::Info);
    assert_eq!(info.message, "Rates refreshed");

    assert!(Notification::error("x").is_error());
}

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

#[test]
fn metal_rate_update_uses_lowercase_key() {
    let body = MetalRateUpdate::new(MetalType::Silver, MetalRate::new(dec!(75), dec!(500)));
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["metal_type"], "silver");
    assert_eq!(json["base_rate"].as_f64(), Some(75.0));
    assert_eq!(json["premium"].as_f64(), Some(500.0));
}

#[test]
fn quantity_update_body() {
    let body = QuantityUpdate {
        product_id: "p1",
        quantity: 11,
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({"product_id": "p1", "quantity": 11})
    );
}

#[test]
fn payment_method_serializes_lowercase() {
    assert_eq!(serde_json::to_value(PaymentMethod::Cod).unwrap(), "cod");
    assert_eq!(serde_json::to_value(PaymentMethod::Online).unwrap(), "online");
}

// ---------------------------------------------------------------------------
// Response decoding
// ---------------------------------------------------------------------------

#[test]
fn metal_rates_decode() {
    let rates: MetalRates = serde_json::from_value(serde_json::json!({
        "gold": {"base_rate": 5800, "premium": 450},
        "silver": {"base_rate": "75.00", "premium": 500}
    }))
    .unwrap();
    assert_eq!(rates, common::sample_rates());
    assert_eq!(rates.for_metal(MetalType::Silver).unwrap().base_rate, dec!(75));
}

#[test]
fn metal_rates_set_replaces_one_metal() {
    let mut rates = MetalRates::default();
    for metal in MetalType::ALL {
        assert!(rates.for_metal(metal).is_none());
    }
    rates.set(MetalType::Silver, MetalRate::new(dec!(76), dec!(400)));
    assert!(rates.gold.is_none());
    assert_eq!(rates.for_metal(MetalType::Silver).unwrap().premium, dec!(400));

    let mut sample = common::sample_rates();
    sample.set(MetalType::Gold, MetalRate::new(dec!(5900), dec!(450)));
    assert_eq!(sample.gold.unwrap().base_rate, dec!(5900));
    assert_eq!(sample.silver, common::sample_rates().silver);
}

#[test]
fn metal_rates_tolerate_missing_metal() {
    let rates: MetalRates = serde_json::from_str(r#"{"gold": {"base_rate": 5800}}"#).unwrap();
    assert!(rates.silver.is_none());
    assert_eq!(rates.gold.unwrap().premium, dec!(0));
}

#[test]
fn product_decodes_mongo_style_record() {
    let product: Product = serde_json::from_value(serde_json::json!({
        "_id": "665f",
        "name": "Silver Anklet",
        "category": "Anklets",
        "price": 4321.5,
        "price_per_gram": "75.50",
        "weight": 50,
        "metal_name": "Silver",
        "making_charge": 8,
        "other_charges": 150,
        "stock": 12,
        "images": ["https://cdn.example.com/a.jpg"]
    }))
    .unwrap();
    assert_eq!(product.id, "665f");
    assert_eq!(product.metal_name, Some(MetalType::Silver));
    assert_eq!(product.price_per_gram, Some(dec!(75.50)));
    assert_eq!(product.price, Some(dec!(4321.5)));
    assert_eq!(product.gst_val, None);
    assert_eq!(product.description, "");
}

#[test]
fn cart_decodes_items_alias() {
    let cart: Cart = serde_json::from_value(serde_json::json!({
        "items": [
            {"product_id": "p1", "name": "Ring", "price": 1000, "quantity": 10, "stock": 20},
            {"product_id": "p2", "price": 250.25, "quantity": 12, "size": "16"}
        ]
    }))
    .unwrap();
    assert_eq!(cart.lines.len(), 2);
    assert_eq!(cart.total_quantity(), 22);
    assert_eq!(cart.line("p2").unwrap().size.as_deref(), Some("16"));
    assert_eq!(cart.line("p2").unwrap().stock, None);
}

#[test]
fn metal_type_parsing() {
    assert_eq!("gold".parse::<MetalType>().unwrap(), MetalType::Gold);
    assert_eq!(" Silver ".parse::<MetalType>().unwrap(), MetalType::Silver);
    assert!("platinum".parse::<MetalType>().is_err());
    for metal in MetalType::ALL {
        assert_eq!(metal.rate_key().parse::<MetalType>().unwrap(), metal);
        assert_eq!(metal.name().parse::<MetalType>().unwrap(), metal);
    }
    assert_eq!(MetalType::Gold.to_string(), "Gold");
    let parsed: MetalType = serde_json::from_str("\"gold\"").unwrap();
    assert_eq!(parsed, MetalType::Gold);
}

#[test]
fn online_order_confirmation_needs_gateway_details() {
    let response: OrderResponse = serde_json::from_value(serde_json::json!({
        "order_id": "ord_1",
        "amount": 6642385,
        "razorpay_order_id": "order_Rz1"
    }))
    .unwrap();
    let confirmation = confirmation_from(response, PaymentMethod::Online).unwrap();
    assert_eq!(
        confirmation,
        OrderConfirmation::Online {
            order_id: "ord_1".to_string(),
            amount: dec!(6642385),
            razorpay_order_id: "order_Rz1".to_string(),
        }
    );

    let incomplete = OrderResponse {
        order_id: Some("ord_2".to_string()),
        ..OrderResponse::default()
    };
    assert!(confirmation_from(incomplete, PaymentMethod::Online).is_err());
}

#[test]
fn cod_order_needs_nothing_back() {
    let confirmation = confirmation_from(OrderResponse::default(), PaymentMethod::Cod).unwrap();
    assert_eq!(confirmation, OrderConfirmation::CashOnDelivery { order_id: None });
}
