fn main() {
    patrawl::cli::run();
}
