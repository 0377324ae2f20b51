//! Discount wrappers.
//!
//! Each wrapper owns exactly one inner [`Priced`] and subtracts a fixed amount from its price.
//! Subtraction commutes, so the final price of a chain does not depend on the order of its
//! discounts, only the intermediate prices do.

use crate::error::PricingError;
use crate::Priced;
use micro_decorator::Decorator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

const VIP_AMOUNT: i64 = 50;
const BLACK_FRIDAY_AMOUNT: i64 = 20;

/// Takes [`VipDiscount::AMOUNT`] off the inner price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VipDiscount<P> {
    inner: P,
}

/// Takes [`BlackFridayDiscount::AMOUNT`] off the inner price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlackFridayDiscount<P> {
    inner: P,
}

impl<P: Priced> VipDiscount<P> {
    pub const AMOUNT: i64 = VIP_AMOUNT;

    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Priced> BlackFridayDiscount<P> {
    pub const AMOUNT: i64 = BLACK_FRIDAY_AMOUNT;

    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Priced> Priced for VipDiscount<P> {
    fn get_price(&self) -> i64 {
        self.inner.get_price() - Self::AMOUNT
    }

    fn checked_price(&self) -> Result<i64, PricingError> {
        checked_discount(self.inner.checked_price()?, Self::AMOUNT)
    }
}

impl<P: Priced> Priced for BlackFridayDiscount<P> {
    fn get_price(&self) -> i64 {
        self.inner.get_price() - Self::AMOUNT
    }

    fn checked_price(&self) -> Result<i64, PricingError> {
        checked_discount(self.inner.checked_price()?, Self::AMOUNT)
    }
}

fn checked_discount(price: i64, discount: i64) -> Result<i64, PricingError> {
    price.checked_sub(discount).ok_or_else(|| PricingError::overflow(price, discount))
}

/// Wraps any [`Priced`] into a [`VipDiscount`].
#[derive(Debug, Default, Clone, Copy)]
pub struct VipDiscountDecorator;

/// Wraps any [`Priced`] into a [`BlackFridayDiscount`].
#[derive(Debug, Default, Clone, Copy)]
pub struct BlackFridayDiscountDecorator;

impl<P: Priced> Decorator<P> for VipDiscountDecorator {
    type Out = VipDiscount<P>;

    fn decorate(&self, raw: P) -> Self::Out {
        VipDiscount::new(raw)
    }
}

impl<P: Priced> Decorator<P> for BlackFridayDiscountDecorator {
    type Out = BlackFridayDiscount<P>;

    fn decorate(&self, raw: P) -> Self::Out {
        BlackFridayDiscount::new(raw)
    }
}

/// A discount picked at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Discount {
    Vip,
    BlackFriday,
}

impl Discount {
    pub fn name(self) -> &'static str {
        match self {
            Discount::Vip => "vip",
            Discount::BlackFriday => "black-friday",
        }
    }

    /// How much this discount takes off the inner price.
    pub fn amount(self) -> i64 {
        match self {
            Discount::Vip => VIP_AMOUNT,
            Discount::BlackFriday => BLACK_FRIDAY_AMOUNT,
        }
    }
}

impl Decorator<Box<dyn Priced>> for Discount {
    type Out = Box<dyn Priced>;

    fn decorate(&self, raw: Box<dyn Priced>) -> Self::Out {
        trace!(discount = %self, amount = self.amount(), "applying discount");
        match self {
            Discount::Vip => Box::new(VipDiscount::new(raw)),
            Discount::BlackFriday => Box::new(BlackFridayDiscount::new(raw)),
        }
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Discount {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vip" => Ok(Discount::Vip),
            "black-friday" | "black_friday" | "blackfriday" => Ok(Discount::BlackFriday),
            _ => Err(PricingError::unknown_discount(s)),
        }
    }
}
