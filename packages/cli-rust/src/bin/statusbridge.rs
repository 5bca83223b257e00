//! `statusbridge` binary entry point.

fn main() -> anyhow::Result<()> {
    statusbridge::run()
}
