//! Kiosk ordering flow with gated field validation.
//!
//! The flow is a linear state machine: each state awaits exactly one
//! console token, and a valid token moves the order one field closer to
//! being priced. The first invalid field rejects the whole run: later
//! fields are never read and no receipt is produced. The surcharge flag
//! has no invalid domain, so the final transition always prices.

use crate::domain::parser;
use crate::domain::services::price_order;
use crate::domain::{ItemType, Order, OrderError, PriceList, Receipt, Size};
use crate::presentation::{ui, Console};
use std::io;

/// States of one kiosk order, from first prompt to terminal outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderFlow {
    AwaitType,
    AwaitSize {
        item: ItemType,
    },
    AwaitQuantity {
        item: ItemType,
        size: Size,
    },
    AwaitSurcharge {
        item: ItemType,
        size: Size,
        quantity: u32,
    },
    Priced(Receipt),
    Rejected(OrderError),
}

impl OrderFlow {
    pub fn new() -> Self {
        OrderFlow::AwaitType
    }

    /// Consumes one console token and returns the next state.
    ///
    /// Terminal states absorb further tokens unchanged.
    pub fn advance(self, token: &str, prices: &PriceList) -> OrderFlow {
        match self {
            OrderFlow::AwaitType => match parser::parse_item_type(token) {
                Ok(item) => OrderFlow::AwaitSize { item },
                Err(err) => OrderFlow::Rejected(err),
            },
            OrderFlow::AwaitSize { item } => match parser::parse_size(token) {
                Ok(size) => OrderFlow::AwaitQuantity { item, size },
                Err(err) => OrderFlow::Rejected(err),
            },
            OrderFlow::AwaitQuantity { item, size } => match parser::parse_quantity(token) {
                Ok(quantity) => OrderFlow::AwaitSurcharge {
                    item,
                    size,
                    quantity,
                },
                Err(err) => OrderFlow::Rejected(err),
            },
            OrderFlow::AwaitSurcharge {
                item,
                size,
                quantity,
            } => {
                let order = Order {
                    item,
                    size,
                    quantity,
                    has_surcharge: parser::parse_flag(token),
                };
                OrderFlow::Priced(price_order(&order, prices))
            }
            terminal => terminal,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderFlow::Priced(_) | OrderFlow::Rejected(_))
    }
}

impl Default for OrderFlow {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives one order through the console from banner to terminal state.
///
/// Returns the receipt when the order priced, `None` when it was rejected
/// or input ended mid-order.
pub fn run_kiosk(console: &mut Console, prices: &PriceList) -> io::Result<Option<Receipt>> {
    console.println(&ui::kiosk_banner(prices))?;
    let mut flow = OrderFlow::new();
    while let Some(prompt) = ui::order_prompt(&flow) {
        let Some(token) = console.prompt(&prompt)? else {
            return Ok(None);
        };
        flow = flow.advance(&token, prices);
    }
    match flow {
        OrderFlow::Priced(receipt) => {
            console.print(&ui::receipt_text(&receipt))?;
            console.println("You will have your order in a few minutes.")?;
            console.println("Thank you for ordering!")?;
            Ok(Some(receipt))
        }
        OrderFlow::Rejected(err) => {
            tracing::debug!(%err, "order rejected");
            console.println(&ui::rejection_text(&err))?;
            Ok(None)
        }
        _ => Ok(None),
    }
}
