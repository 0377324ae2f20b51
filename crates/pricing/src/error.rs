use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("unknown discount: {name:?}, expected one of \"vip\", \"black-friday\"")]
    UnknownDiscount { name: String },

    #[error("price overflow, applying discount {discount} to {price}")]
    Overflow { price: i64, discount: i64 },
}

impl PricingError {
    pub fn unknown_discount<S: ToString>(name: S) -> Self {
        Self::UnknownDiscount { name: name.to_string() }
    }

    pub fn overflow(price: i64, discount: i64) -> Self {
        Self::Overflow { price, discount }
    }
}
