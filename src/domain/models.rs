use serde::{Deserialize, Serialize};

/// Smallest quantity the kiosk refuses (exclusive lower bound).
pub const MIN_AMOUNT: i64 = 1;
/// Largest quantity the kiosk refuses (exclusive upper bound).
pub const MAX_AMOUNT: i64 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemType {
    Fruit,
    Milk,
}

impl ItemType {
    pub fn code(&self) -> char {
        match self {
            ItemType::Fruit => 'F',
            ItemType::Milk => 'M',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemType::Fruit => "fruitshakes",
            ItemType::Milk => "milkshakes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    Small,
    Big,
}

impl Size {
    pub fn code(&self) -> char {
        match self {
            Size::Small => 'S',
            Size::Big => 'B',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Size::Small => "SMALL",
            Size::Big => "BIG",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub item: ItemType,
    pub size: Size,
    pub quantity: u32,
    pub has_surcharge: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    pub item: ItemType,
    pub size: Size,
    pub quantity: u32,
    pub base_price: i64,
    pub surcharge: i64,
    pub total: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceList {
    pub small: i64,
    pub big: i64,
    pub surcharge: i64,
}

impl Default for PriceList {
    fn default() -> Self {
        Self {
            small: 6,
            big: 8,
            surcharge: 2,
        }
    }
}

impl PriceList {
    pub fn base_price(&self, size: Size) -> i64 {
        match size {
            Size::Small => self.small,
            Size::Big => self.big,
        }
    }
}
