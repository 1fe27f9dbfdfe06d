use crate::Context;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::fail;

pub async fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        worker,
        force,
    } = cmd
    {
        ExportLogic::export(&ctx.api, *format, file, range, *worker, *force)
            .await
            .map_err(|e| fail("Export failed", e))?;
    }
    Ok(())
}
