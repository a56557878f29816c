use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ConvertLogic;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Convert {
        input,
        file,
        format,
        force,
    } = cmd
    {
        let rows = ConvertLogic::convert(cfg, input, *format, file, *force)?;
        success(format!("{rows} rows written to {file}"));
    }
    Ok(())
}
