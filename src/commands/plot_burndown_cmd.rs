use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::services::burndown_plot::plot_burndown_from_csv_file;

pub async fn plot_burndown_command(cmd: Commands) -> ExitCode {
    let Commands::PlotBurndown { input, output } = cmd else {
        return ExitCode::FAILURE;
    };

    match plot_burndown_from_csv_file(&input, &output).await {
        Ok(()) => {
            println!("Burndown plot written to {output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to plot burndown: {e}");
            ExitCode::FAILURE
        }
    }
}
