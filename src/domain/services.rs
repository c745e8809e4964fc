//! Pure computations backing the console drills.
//!
//! This module holds the arithmetic shared by the interactive flows:
//! the geometry used by the calculator menu, the geometric series sum,
//! the double-echo rendering, and order pricing for the kiosk.
//!
//! Two reuse relationships from the calculator are preserved here on
//! purpose: the distance between two points and the hypotenuse of a
//! right triangle are the same Euclidean norm of a 2-vector, and a
//! square's area is a rectangle's area with equal sides. Callers pass
//! the deltas or the duplicated side; there is no separate distance or
//! square function.

use super::models::{Order, PriceList, Receipt};

/// Euclidean norm of a 2-vector: `sqrt(a² + b²)`.
///
/// Serves both the distance between two points (legs are the coordinate
/// deltas) and the hypotenuse of a right triangle (legs are the sides).
///
/// # Examples
///
/// ```
/// use termdrills::domain::euclidean_norm;
///
/// assert_eq!(euclidean_norm(3.0, 4.0), 5.0);
/// assert_eq!(format!("{:.2}", euclidean_norm(3.0, 4.0)), "5.00");
/// ```
pub fn euclidean_norm(a: f64, b: f64) -> f64 {
    a.hypot(b)
}

/// Area of a rectangle. A square is the same call with equal sides.
///
/// # Examples
///
/// ```
/// use termdrills::domain::rectangle_area;
///
/// assert_eq!(rectangle_area(3, 5), 15);
/// assert_eq!(rectangle_area(4, 4), 16);
/// ```
pub fn rectangle_area(length: i64, width: i64) -> i64 {
    length * width
}

/// Perimeter of a circle with an integer radius.
pub fn circle_perimeter(radius: i64) -> f64 {
    2.0 * std::f64::consts::PI * radius as f64
}

/// Area of a circle with an integer radius.
pub fn circle_area(radius: i64) -> f64 {
    std::f64::consts::PI * (radius as f64) * (radius as f64)
}

/// Sum of the first `count` elements of a geometric series.
///
/// The sum is accumulated iteratively; a `count` of zero or less sums
/// nothing.
///
/// # Examples
///
/// ```
/// use termdrills::domain::geometric_series_sum;
///
/// assert_eq!(geometric_series_sum(1, 2, 5), 31);
/// assert_eq!(geometric_series_sum(3, 1, 4), 12);
/// assert_eq!(geometric_series_sum(7, 2, 0), 0);
/// ```
pub fn geometric_series_sum(first: i64, ratio: i64, count: i64) -> i64 {
    let mut sum = 0;
    let mut element = first;
    for _ in 0..count.max(0) {
        sum += element;
        element *= ratio;
    }
    sum
}

/// Renders a number twice in a row as digit concatenation, not `2 × n`.
///
/// # Examples
///
/// ```
/// use termdrills::domain::echo_twice;
///
/// assert_eq!(echo_twice(5), "55");
/// assert_eq!(echo_twice(172486), "172486172486");
/// ```
pub fn echo_twice(number: i64) -> String {
    format!("{number}{number}")
}

/// Prices a fully validated order into a read-only receipt.
///
/// The base price comes from the size, the surcharge is a fixed additive
/// penalty applied once per unit when the flag holds, and the total is
/// `(base + surcharge) × quantity`.
///
/// # Examples
///
/// ```
/// use termdrills::domain::{price_order, ItemType, Order, PriceList, Size};
///
/// let order = Order {
///     item: ItemType::Fruit,
///     size: Size::Small,
///     quantity: 3,
///     has_surcharge: false,
/// };
/// let receipt = price_order(&order, &PriceList::default());
/// assert_eq!(receipt.total, 18);
/// ```
pub fn price_order(order: &Order, prices: &PriceList) -> Receipt {
    let base_price = prices.base_price(order.size);
    let surcharge = if order.has_surcharge {
        prices.surcharge
    } else {
        0
    };
    Receipt {
        item: order.item,
        size: order.size,
        quantity: order.quantity,
        base_price,
        surcharge,
        total: (base_price + surcharge) * order.quantity as i64,
    }
}
