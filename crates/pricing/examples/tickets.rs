use micro_pricing::{BlackFridayDiscount, Discount, PriceChainBuilder, Priced, Ticket, VipDiscount};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!(price = Ticket::new().get_price(), "ticket");
    info!(price = VipDiscount::new(Ticket::new()).get_price(), "vip");
    info!(price = BlackFridayDiscount::new(Ticket::new()).get_price(), "black friday");
    info!(price = VipDiscount::new(BlackFridayDiscount::new(Ticket::new())).get_price(), "vip on black friday");

    let chain = PriceChainBuilder::new().discount(Discount::Vip).discount(Discount::Vip).discount(Discount::Vip).build();
    match chain.checked_price() {
        Ok(price) => info!(price, "three vip discounts, assembled at runtime"),
        Err(e) => error!(cause = %e, "pricing failed"),
    }

    match PriceChainBuilder::from_names(["black-friday", "coupon"]) {
        Ok(builder) => info!(price = builder.build().get_price(), "named discounts"),
        Err(e) => error!(cause = %e, "invalid discount list"),
    }
}
