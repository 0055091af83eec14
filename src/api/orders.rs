//! Order placement.

use reqwest::Method;
use tracing::info;

use crate::checkout::{validate_address, CheckoutGate};
use crate::client::ApiClient;
use crate::config;
use crate::error::{Result, StorefrontError};
use crate::models::{Address, Cart, OrderConfirmation, OrderRequest, OrderResponse, PaymentMethod};

pub struct OrderApi<'a> {
    client: &'a ApiClient,
}

impl<'a> OrderApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Place an order for `cart`.
    ///
    /// The checkout gate and address checks run first; a blocked cart or a
    /// bad address never reaches the network.
    pub fn place(
        &self,
        cart: &Cart,
        address: &Address,
        payment_method: PaymentMethod,
    ) -> Result<OrderConfirmation> {
        CheckoutGate::new().check(cart)?;
        validate_address(address)?;

        let body = order_request(address, payment_method);
        let response: OrderResponse =
            self.client
                .send_json(Method::POST, config::ORDERS_PATH, &body)?;
        let confirmation = confirmation_from(response, payment_method)?;
        info!(?payment_method, "order created");
        Ok(confirmation)
    }
}

/// Order body for a validated address, with the pincode sent as checked.
pub fn order_request(address: &Address, payment_method: PaymentMethod) -> OrderRequest {
    let mut address = address.clone();
    address.pincode = address.pincode.trim().to_string();
    OrderRequest {
        address,
        payment_method,
    }
}

/// Interpret a `POST /orders` response for the chosen payment method.
pub fn confirmation_from(
    response: OrderResponse,
    payment_method: PaymentMethod,
) -> Result<OrderConfirmation> {
    match payment_method {
        PaymentMethod::Cod => Ok(OrderConfirmation::CashOnDelivery {
            order_id: response.order_id,
        }),
        PaymentMethod::Online => match response {
            OrderResponse {
                order_id: Some(order_id),
                amount: Some(amount),
                razorpay_order_id: Some(razorpay_order_id),
            } => Ok(OrderConfirmation::Online {
                order_id,
                amount,
                razorpay_order_id,
            }),
            _ => Err(StorefrontError::InvalidArgument(
                "Order response is missing payment gateway details".to_string(),
            )),
        },
    }
}
