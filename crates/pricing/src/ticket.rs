use crate::Priced;

/// The leaf of a price chain, always costs [`Ticket::BASE_PRICE`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Ticket;

impl Ticket {
    pub const BASE_PRICE: i64 = 100;

    pub fn new() -> Self {
        Ticket
    }
}

impl Priced for Ticket {
    fn get_price(&self) -> i64 {
        Self::BASE_PRICE
    }
}
