fn main() -> anyhow::Result<()> {
    numquiz_terminal::run()
}
