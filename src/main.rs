use set_tab_color::app;
use set_tab_color::cli::Cli;

fn main() {
    let cli = Cli::parse_checked();
    set_tab_color::debug::init_log_bridge(cli.verbose);
    log::debug!("set-tab-color {}", set_tab_color::VERSION);

    if let Err(e) = app::run(&cli) {
        eprintln!("set-tab-color: error: {e:#}");
        std::process::exit(1);
    }
}
