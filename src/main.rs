use anyhow::Context;

fn main() -> anyhow::Result<()> {
    susplay::run().context("susplay session failed")
}
