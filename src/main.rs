use overworld::GameBuilder;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("starting overworld v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = GameBuilder::new().with_title("overworld").run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
