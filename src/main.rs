fn main() {
    fossa::app::cli::run();
}
