use clap::Parser;

use fmcauto::cli::NatCli;
use fmcauto::commands;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = NatCli::parse();

    if let Some(shell) = cli.common.completions {
        commands::print_completions::<NatCli>(shell);
        return;
    }

    let cli = &cli;
    fmcauto::run_main(&cli.common, |cfg| async move {
        commands::nat::run(cli, &cfg).await
    })
    .await;
}
