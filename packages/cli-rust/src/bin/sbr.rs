//! `sbr` binary entry point - short alias for `statusbridge`.

fn main() -> anyhow::Result<()> {
    statusbridge::run()
}
