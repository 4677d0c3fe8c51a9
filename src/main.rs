fn main() {
    let cli = gedtree::cli::parse();
    let code = gedtree::app::run_cli(cli);
    if code != 0 {
        std::process::exit(code);
    }
}
