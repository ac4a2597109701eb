fn main() -> anyhow::Result<()> {
    prism_studio::run_from_env()
}
