use connect4_core::{terminal::Terminal, HEIGHT, WIDTH};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
    let stdin = std::io::stdin();
    let result = Terminal::<_, _, WIDTH, HEIGHT>::new(stdin.lock(), std::io::stdout())
        .and_then(|mut terminal| terminal.run());
    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
