use crate::support::harness::{DryRunExecutor, Executor, SystemExecutor};
use anyhow::Result;

pub fn run(cli: crate::cli::Cli) -> Result<()> {
    let config = cli.base.resolve()?;
    log::debug!("{config:?}");

    if !cli.base.skip_checks {
        crate::bootstrap::check_prerequisites(&config.tree)?;
    }

    let mut executor: Box<dyn Executor> = if cli.base.dry_run {
        Box::new(DryRunExecutor)
    } else {
        Box::new(SystemExecutor)
    };

    crate::gcc::build(cli.toolchain, &config, executor.as_mut())
}
