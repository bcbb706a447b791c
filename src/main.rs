fn main() {
    quakediff::app::cli::run();
}
