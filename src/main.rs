use anyhow::Result;

fn main() -> Result<()> {
    compdb_merge::cli::run()
}
