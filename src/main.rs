fn main() -> std::io::Result<()> {
    ellermaze::app::run()
}
