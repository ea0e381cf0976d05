use dioxus::desktop::{Config, WindowBuilder};
use quotebox::app::App;
use quotebox::ui::STYLE;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quotebox=info")),
        )
        .init();

    tracing::info!("Starting Quotebox {}", env!("CARGO_PKG_VERSION"));

    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Quotebox")
                .with_resizable(true),
        )
        .with_custom_head(format!("<style>{}</style>", STYLE));

    dioxus::LaunchBuilder::desktop().with_cfg(config).launch(App);
}
