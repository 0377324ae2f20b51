use crate::error::PricingError;
use crate::{Discount, Priced, Ticket};
use micro_decorator::Decorator;
use tracing::debug;

/// Assembles a price chain from discounts picked at runtime.
///
/// The chain always starts from a [`Ticket`]. Discounts are applied in the order they are
/// added, the first one wraps the ticket directly.
#[derive(Debug, Default, Clone)]
pub struct PriceChainBuilder {
    discounts: Vec<Discount>,
}

impl PriceChainBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses every name with [`Discount::from_str`](std::str::FromStr), stops at the first unknown one.
    pub fn from_names<'a, I>(names: I) -> Result<Self, PricingError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let discounts = names.into_iter().map(str::parse).collect::<Result<Vec<Discount>, _>>()?;
        Ok(Self { discounts })
    }

    pub fn discount(mut self, discount: Discount) -> Self {
        self.discounts.push(discount);
        self
    }

    pub fn discounts<I: IntoIterator<Item = Discount>>(mut self, discounts: I) -> Self {
        self.discounts.extend(discounts);
        self
    }

    /// Sum of every discount amount, computed without building the chain.
    pub fn total_discount(&self) -> i64 {
        self.discounts.iter().map(|discount| discount.amount()).sum()
    }

    pub fn build(self) -> Box<dyn Priced> {
        debug!(depth = self.discounts.len(), total_discount = self.total_discount(), "building price chain");

        let leaf: Box<dyn Priced> = Box::new(Ticket::new());
        self.discounts.iter().fold(leaf, |inner, discount| discount.decorate(inner))
    }
}
