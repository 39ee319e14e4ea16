use std::io;

fn main() {
    if let Err(e) = blackjack_cli::logging::init_logging() {
        eprintln!("WARNING: logging disabled: {}", e);
    }
    let mut out = io::stdout();
    let mut err = io::stderr();
    let code = blackjack_cli::run(std::env::args(), &mut out, &mut err);
    std::process::exit(code);
}
