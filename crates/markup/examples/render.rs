use micro_markup::{Bold, Italic, Markup, RenderChainBuilder, RenderChainConfig, Renderable, Text};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!(rendered = %Text::new("hello").render(), "text");
    info!(rendered = %Bold::new(Text::new("hello")).render(), "bold");
    info!(rendered = %Italic::new(Text::new("hello")).render(), "italic");
    info!(rendered = %Bold::new(Italic::new(Text::new("hello"))).render(), "bold italic");

    let chain = RenderChainBuilder::new()
        .text("hello")
        .markup(Markup::Bold)
        .markup(Markup::Italic)
        .build()
        .expect("text is set");
    info!(rendered = %chain.render(), "italic bold, assembled at runtime");

    let config: RenderChainConfig =
        serde_json::from_str(r#"{"text": "from json", "markups": ["bold", "italic", "bold"]}"#).expect("valid chain config");
    info!(rendered = %config.build().render(), "configured chain");
}
