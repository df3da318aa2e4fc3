mod analysis;
mod config;
mod db;
mod logging;
mod models;
mod run;
mod snapshot;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let db_flag = run::take_flag(&mut args, "--db")?;

    let config = config::Config::resolve(db_flag.as_deref())?;
    logging::init(&config.log_path)?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        db = %config.db_path.display(),
        "starting fintrack"
    );

    let db = db::Database::open(&config.db_path)?;

    if args.is_empty() {
        run::as_tui(&db)
    } else {
        run::as_cli(&args, &db)
    }
}
