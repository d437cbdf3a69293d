use anyhow::Result;

fn main() -> Result<()> {
    timeblock::tui::run()
}
