//! Cart quantity rules and the pre-checkout gate.
//!
//! Every line must hold at least [`MIN_LINE_QUANTITY`] units. Quantity
//! changes are never applied locally: they are sent to the backend and the
//! whole cart is re-fetched. Size is the one field edited locally.
//!
//! The gate is a client-side pre-check only; order creation on the backend
//! still has the final say.

use tracing::{debug, info, warn};

use crate::config::MIN_LINE_QUANTITY;
use crate::error::{Result, StorefrontError};
use crate::models::{Address, Cart, CartLine};
use crate::notify::Notification;

pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

// ---------------------------------------------------------------------------
// Per-line controls
// ---------------------------------------------------------------------------

/// Enabled state of a line's +/- controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineControls {
    pub can_decrement: bool,
    pub can_increment: bool,
}

impl LineControls {
    pub fn for_line(line: &CartLine) -> Self {
        Self {
            can_decrement: line.quantity > MIN_LINE_QUANTITY,
            can_increment: line.stock.map_or(true, |stock| line.quantity < stock),
        }
    }
}

/// Seam between the cart view and the cart endpoints.
pub trait CartBackend {
    fn fetch_cart(&self) -> Result<Cart>;
    /// `PUT /cart/update` with the new, larger quantity.
    fn increment(&self, product_id: &str, quantity: u32) -> Result<()>;
    /// `PUT /cart/update/min` with the new, smaller quantity.
    fn decrement(&self, product_id: &str, quantity: u32) -> Result<()>;
    fn remove(&self, product_id: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// CartSession
// ---------------------------------------------------------------------------

/// The cart as last fetched, plus local-only size edits.
#[derive(Debug, Clone, Default)]
pub struct CartSession {
    cart: Cart,
}

impl CartSession {
    pub fn new(cart: Cart) -> Self {
        Self { cart }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn controls(&self, product_id: &str) -> Option<LineControls> {
        self.cart.line(product_id).map(LineControls::for_line)
    }

    /// Re-fetch the cart, keeping local size edits for lines the backend
    /// has no size for.
    pub fn refresh<B: CartBackend + ?Sized>(&mut self, backend: &B) -> Result<()> {
        let mut fresh = backend.fetch_cart()?;
        for line in &mut fresh.lines {
            if line.size.is_none() {
                line.size = self
                    .cart
                    .line(&line.product_id)
                    .and_then(|old| old.size.clone());
            }
        }
        debug!(lines = fresh.lines.len(), "cart refreshed");
        self.cart = fresh;
        Ok(())
    }

    pub fn increment<B: CartBackend + ?Sized>(
        &mut self,
        backend: &B,
        product_id: &str,
    ) -> std::result::Result<(), Notification> {
        let line = self.require_line(product_id)?;
        if !LineControls::for_line(line).can_increment {
            return Err(Notification::error(format!(
                "Only {} units of {} are available.",
                line.stock.unwrap_or(line.quantity),
                line.name
            )));
        }
        let quantity = line.quantity + 1;
        self.mutate(backend, |b| b.increment(product_id, quantity))
    }

    pub fn decrement<B: CartBackend + ?Sized>(
        &mut self,
        backend: &B,
        product_id: &str,
    ) -> std::result::Result<(), Notification> {
        let line = self.require_line(product_id)?;
        if !LineControls::for_line(line).can_decrement {
            return Err(Notification::error(format!(
                "Minimum order quantity is {} units per product.",
                MIN_LINE_QUANTITY
            )));
        }
        let quantity = line.quantity - 1;
        self.mutate(backend, |b| b.decrement(product_id, quantity))
    }

    pub fn remove<B: CartBackend + ?Sized>(
        &mut self,
        backend: &B,
        product_id: &str,
    ) -> std::result::Result<(), Notification> {
        self.require_line(product_id)?;
        self.mutate(backend, |b| b.remove(product_id))
    }

    /// Local-only size edit. Empty text clears the size.
    pub fn set_size(&mut self, product_id: &str, size: &str) -> Result<()> {
        let line = self
            .cart
            .line_mut(product_id)
            .ok_or_else(|| StorefrontError::NotFound(format!("No cart line for {}", product_id)))?;
        let size = size.trim();
        line.size = if size.is_empty() {
            None
        } else {
            Some(size.to_string())
        };
        Ok(())
    }

    fn require_line(&self, product_id: &str) -> std::result::Result<&CartLine, Notification> {
        self.cart.line(product_id).ok_or_else(|| {
            Notification::from_error(&StorefrontError::NotFound(format!(
                "No cart line for {}",
                product_id
            )))
        })
    }

    /// Run a backend mutation, then refresh. The local cart is left as it
    /// was if either step fails.
    fn mutate<B, F>(&mut self, backend: &B, call: F) -> std::result::Result<(), Notification>
    where
        B: CartBackend + ?Sized,
        F: FnOnce(&B) -> Result<()>,
    {
        call(backend)
            .and_then(|_| self.refresh(backend))
            .map_err(|e| {
                warn!(error = %e, "cart update failed");
                Notification::from_error(&e)
            })
    }
}

// ---------------------------------------------------------------------------
// CheckoutGate
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateBlock {
    pub total_quantity: u32,
    pub min_required: u32,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateState {
    Idle,
    /// Set by [`CheckoutGate::begin`] while the caller refreshes the cart.
    Validating,
    Blocked(GateBlock),
    Proceeding,
}

/// Minimum aggregate quantity for a cart: 10 per distinct line.
pub fn min_required(cart: &Cart) -> u32 {
    MIN_LINE_QUANTITY * cart.lines.len() as u32
}

/// Decide whether `cart` may proceed to checkout.
pub fn evaluate(cart: &Cart) -> GateState {
    if cart.is_empty() {
        return GateState::Blocked(GateBlock {
            total_quantity: 0,
            min_required: 0,
            message: EMPTY_CART_MESSAGE.to_string(),
        });
    }
    let total_quantity = cart.total_quantity();
    let min_required = min_required(cart);
    if total_quantity < min_required {
        GateState::Blocked(GateBlock {
            total_quantity,
            min_required,
            message: format!(
                "Minimum order quantity is {} units ({} per product). Your cart has {} units.",
                min_required, MIN_LINE_QUANTITY, total_quantity
            ),
        })
    } else {
        GateState::Proceeding
    }
}

/// Checkout button state machine.
#[derive(Debug, Clone)]
pub struct CheckoutGate {
    state: GateState,
}

impl Default for CheckoutGate {
    fn default() -> Self {
        Self {
            state: GateState::Idle,
        }
    }
}

impl CheckoutGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GateState {
        &self.state
    }

    /// Mark the gate as validating, before the cart is re-fetched.
    pub fn begin(&mut self) {
        self.state = GateState::Validating;
    }

    /// Validate `cart` synchronously; `Err(CheckoutBlocked)` carries the
    /// shortfall message.
    pub fn check(&mut self, cart: &Cart) -> Result<()> {
        self.state = evaluate(cart);
        match &self.state {
            GateState::Blocked(block) => {
                info!(
                    total = block.total_quantity,
                    required = block.min_required,
                    "checkout blocked"
                );
                Err(StorefrontError::CheckoutBlocked(block.message.clone()))
            }
            _ => Ok(()),
        }
    }

    pub fn reset(&mut self) {
        self.state = GateState::Idle;
    }
}

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

/// Indian PIN code: six digits, first digit non-zero.
pub fn is_valid_pincode(pincode: &str) -> bool {
    let pincode = pincode.trim();
    pincode.len() == 6
        && pincode.chars().all(|c| c.is_ascii_digit())
        && !pincode.starts_with('0')
}

pub fn validate_address(address: &Address) -> Result<()> {
    let required = [
        ("Full name", &address.full_name),
        ("Phone", &address.phone),
        ("Address line", &address.line1),
        ("City", &address.city),
        ("State", &address.state),
    ];
    for (label, value) in required {
        if value.trim().is_empty() {
            return Err(StorefrontError::Validation(format!("{} is required.", label)));
        }
    }
    if !is_valid_pincode(&address.pincode) {
        return Err(StorefrontError::Validation(
            "Please enter a valid 6-digit pincode.".to_string(),
        ));
    }
    Ok(())
}
