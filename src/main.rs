use anyhow::{Context, Result};
use nature_explorer::Explorer;
use nature_explorer::config::{Cli, Command, ExploreArgs};
use nature_explorer::logging::{self, LogTarget};
use nature_explorer::server::{self, ServerConfig};

fn main() -> Result<()> {
    let cli = Cli::load();

    match cli.command {
        Some(Command::Serve(ref args)) => {
            logging::init(LogTarget::Stderr)?;
            let catalog = cli.load_catalog().context("failed to load plant catalog")?;
            let config = ServerConfig::from(args.clone());

            let runtime = tokio::runtime::Runtime::new()?;
            runtime
                .block_on(server::run(config, catalog))
                .context("server failed")?;
        }
        Some(Command::Check) => {
            logging::init(LogTarget::Stderr)?;
            let catalog = cli.load_catalog().context("invalid plant catalog")?;
            let bank = cli.load_question_bank().context("invalid question bank")?;
            println!(
                "ok: {} plants in {} types, {} quiz questions",
                catalog.len(),
                catalog.distinct_types().len(),
                bank.len()
            );
        }
        Some(Command::Explore(ref args)) => explore(&cli, args)?,
        None => explore(&cli, &ExploreArgs::default())?,
    }

    Ok(())
}

fn explore(cli: &Cli, args: &ExploreArgs) -> Result<()> {
    let target = match &args.log_file {
        Some(path) => LogTarget::File(path.clone()),
        None => LogTarget::Discard,
    };
    logging::init(target).context("failed to open log file")?;

    let catalog = cli.load_catalog().context("failed to load plant catalog")?;
    let bank = cli.load_question_bank().context("failed to load quiz questions")?;

    Explorer::new(catalog, bank)
        .run()
        .context("error running explorer")
}
