mod app;
mod cli;
mod config;
mod constants;

use app::App;

fn main() {
    if let Err(e) = App::run() {
        eprintln!("\nError: {:#}\n", e);
        std::process::exit(1);
    }
}
