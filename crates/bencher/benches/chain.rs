use std::hint::black_box;
use bencher::ChainCase;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use micro_decorator::Decorator;
use micro_markup::{Bold, BoldDecorator, Italic, ItalicDecorator, Markup, RenderChainBuilder, Renderable, Text};
use micro_pricing::{BlackFridayDiscount, Discount, PriceChainBuilder, Priced, Ticket, VipDiscount};

fn create_test_cases() -> Vec<ChainCase> {
    vec![ChainCase::shallow("depth_2", 2), ChainCase::shallow("depth_4", 4), ChainCase::deep("depth_64", 64)]
}

fn alternating_markups(depth: usize) -> impl Iterator<Item = Markup> {
    [Markup::Bold, Markup::Italic].into_iter().cycle().take(depth)
}

fn alternating_discounts(depth: usize) -> impl Iterator<Item = Discount> {
    [Discount::Vip, Discount::BlackFriday].into_iter().cycle().take(depth)
}

fn benchmark_static_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("static_chain");

    let markup = Bold::new(Italic::new(ItalicDecorator.decorate(BoldDecorator.decorate(Text::new("hello")))));
    group.bench_function("render_depth_4", |b| b.iter(|| black_box(markup.render())));

    let price = VipDiscount::new(BlackFridayDiscount::new(VipDiscount::new(BlackFridayDiscount::new(Ticket::new()))));
    group.bench_function("price_depth_4", |b| b.iter(|| black_box(price.get_price())));

    group.finish();
}

fn benchmark_boxed_chain(criterion: &mut Criterion) {
    let test_cases = create_test_cases();
    let mut group = criterion.benchmark_group("boxed_chain");

    for case in test_cases {
        let markup = RenderChainBuilder::new()
            .text("hello")
            .markups(alternating_markups(case.depth()))
            .build()
            .expect("text is set");
        group.bench_with_input(BenchmarkId::new("render", case.name()), &markup, |b, chain| {
            b.iter(|| black_box(chain.render()));
        });

        let price = PriceChainBuilder::new().discounts(alternating_discounts(case.depth())).build();
        group.bench_with_input(BenchmarkId::new("price", case.name()), &price, |b, chain| {
            b.iter(|| black_box(chain.get_price()));
        });
    }

    group.finish();
}

criterion_group!(chain, benchmark_static_chain, benchmark_boxed_chain);
criterion_main!(chain);
