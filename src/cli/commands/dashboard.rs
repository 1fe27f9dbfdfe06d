use crate::Context;
use crate::core::dashboard::Dashboard;
use crate::errors::AppResult;
use crate::ui::messages::{fail, header};
use crate::ui::render;
use chrono::Local;

pub async fn handle(ctx: &Context) -> AppResult<()> {
    show(ctx).await
}

pub(crate) async fn show(ctx: &Context) -> AppResult<()> {
    let view = Dashboard::load(&ctx.api)
        .await
        .map_err(|e| fail("Loading dashboard failed", e))?;

    header("Dashboard");
    print!("{}", render::dashboard(&view, Local::now().naive_local()));
    Ok(())
}
