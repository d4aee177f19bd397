use anyhow::Context;

fn main() -> anyhow::Result<()> {
    mine_ui::run().context("mine-ui failed")
}
