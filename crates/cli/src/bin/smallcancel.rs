use anyhow::Result;

fn main() -> Result<()> {
    smallcancel_cli::main_entry()
}
