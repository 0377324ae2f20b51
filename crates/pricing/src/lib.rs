//! Ticket prices and the discounts stacked on top of them.
//!
//! A [`Ticket`] costs [`Ticket::BASE_PRICE`]. Every discount wrapper owns exactly one inner
//! [`Priced`] value and subtracts its fixed amount from the inner price:
//!
//! ```
//! use micro_pricing::{BlackFridayDiscount, Priced, Ticket, VipDiscount};
//!
//! assert_eq!(VipDiscount::new(Ticket::new()).get_price(), 50);
//! assert_eq!(VipDiscount::new(BlackFridayDiscount::new(Ticket::new())).get_price(), 30);
//! ```
//!
//! Prices are not clamped, stacking enough discounts yields a negative price.

mod builder;
mod discount;
mod error;
mod ticket;

pub use builder::PriceChainBuilder;
pub use discount::{BlackFridayDiscount, BlackFridayDiscountDecorator, Discount, VipDiscount, VipDiscountDecorator};
pub use error::PricingError;
pub use ticket::Ticket;

/// Something with a price.
///
/// Pricing has no side effects: calling [`Priced::get_price`] any number of times on the same
/// value yields the same price.
#[cfg_attr(test, mockall::automock)]
pub trait Priced {
    fn get_price(&self) -> i64;

    /// Like [`Priced::get_price`], but reports arithmetic overflow instead of wrapping.
    fn checked_price(&self) -> Result<i64, PricingError> {
        Ok(self.get_price())
    }
}

impl<P: Priced + ?Sized> Priced for Box<P> {
    #[inline]
    fn get_price(&self) -> i64 {
        (**self).get_price()
    }

    #[inline]
    fn checked_price(&self) -> Result<i64, PricingError> {
        (**self).checked_price()
    }
}
