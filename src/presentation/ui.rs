use crate::application::{Menu, OrderFlow};
use crate::domain::{OrderError, PriceList, Receipt};
use std::fmt::Write;

/// Renders the numbered option list, one `key - label` line per entry.
pub fn menu_text(menu: &Menu) -> String {
    let mut text = String::from("Choose option:\n");
    for entry in menu.entries() {
        let _ = writeln!(text, "{} - {}", entry.key, entry.label);
    }
    text
}

/// Renders the kiosk welcome banner with the active prices.
pub fn kiosk_banner(prices: &PriceList) -> String {
    format!(
        "Welcome to the shake kiosk!\n\
         We have delicious fruit shakes and milkshakes!\n\
         Small shake costs {} NIS\n\
         Big shake costs {} NIS\n\
         Paying with a meal voucher adds {} NIS per shake.",
        prices.small, prices.big, prices.surcharge
    )
}

/// The prompt for the field an order is currently awaiting.
///
/// Terminal states have nothing left to ask and yield `None`.
pub fn order_prompt(flow: &OrderFlow) -> Option<String> {
    match flow {
        OrderFlow::AwaitType => Some(String::from(
            "What is your order?\nF - fruit shake\nM - milkshake\n",
        )),
        OrderFlow::AwaitSize { .. } => Some(String::from("Choose size:\nB - big\nS - small\n")),
        OrderFlow::AwaitQuantity { .. } => {
            Some(String::from("How many would you like (1-9)?\n"))
        }
        OrderFlow::AwaitSurcharge { .. } => Some(String::from(
            "Paying with a meal voucher? 0 for no, any other number for yes.\n",
        )),
        OrderFlow::Priced(_) | OrderFlow::Rejected(_) => None,
    }
}

/// Renders the receipt: the echoed order line and the total.
pub fn receipt_text(receipt: &Receipt) -> String {
    format!(
        "You ordered {} {} {}.\nTotal price: {}\n",
        receipt.quantity,
        receipt.size.label(),
        receipt.item.label(),
        receipt.total
    )
}

/// Renders the labeled rejection line for a failed order.
pub fn rejection_text(err: &OrderError) -> String {
    format!("***Error! {err}***")
}
