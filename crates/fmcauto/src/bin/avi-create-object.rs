use clap::Parser;

use fmcauto::cli::ObjectCli;
use fmcauto::commands;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = ObjectCli::parse();

    if let Some(shell) = cli.common.completions {
        commands::print_completions::<ObjectCli>(shell);
        return;
    }

    let cli = &cli;
    fmcauto::run_main(&cli.common, |cfg| async move {
        commands::objects::run(cli, &cfg).await
    })
    .await;
}
