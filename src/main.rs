use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = gmv::cli::parse();
    app::run(args)
}
