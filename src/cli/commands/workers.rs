use crate::Context;
use crate::cli::parser::WorkerCmd;
use crate::core::refetch::{Mutation, View};
use crate::errors::AppResult;
use crate::models::worker::{WorkerCreate, WorkerQuery, WorkerUpdate};
use crate::ui::messages::{fail, header, success};
use crate::ui::render;

use super::refetch;

pub async fn handle(cmd: &WorkerCmd, ctx: &Context) -> AppResult<()> {
    let api = ctx.api.workers();

    match cmd {
        WorkerCmd::List { all } => show_list(ctx, *all).await,

        WorkerCmd::Show { id } => {
            let worker = api
                .get(*id)
                .await
                .map_err(|e| fail("Loading worker failed", e))?;
            print!("{}", render::worker_detail(&worker));
            Ok(())
        }

        WorkerCmd::Add {
            name,
            email,
            phone,
            position,
            rate,
        } => {
            let body = WorkerCreate {
                name: name.trim().to_string(),
                email: email.trim().to_string(),
                phone: phone.clone(),
                position: position.clone(),
                hourly_rate: *rate,
                is_active: Some(true),
            };
            let worker = api
                .create(&body)
                .await
                .map_err(|e| fail("Creating worker failed", e))?;
            success(format!("Worker {} created (#{})", worker.name, worker.id));
            refetch(ctx, Mutation::CreateWorker, View::Workers).await
        }

        WorkerCmd::Edit {
            id,
            name,
            email,
            phone,
            position,
            rate,
            active,
        } => {
            let body = WorkerUpdate {
                name: name.clone(),
                email: email.clone(),
                phone: phone.clone(),
                position: position.clone(),
                hourly_rate: *rate,
                is_active: *active,
            };
            let worker = api
                .update(*id, &body)
                .await
                .map_err(|e| fail("Updating worker failed", e))?;
            success(format!("Worker {} updated", worker.name));
            refetch(ctx, Mutation::UpdateWorker, View::Workers).await
        }

        WorkerCmd::Del { id } => {
            let resp = api
                .delete(*id)
                .await
                .map_err(|e| fail("Deactivating worker failed", e))?;
            if resp.message.is_empty() {
                success(format!("Worker {id} deactivated"));
            } else {
                success(resp.message);
            }
            refetch(ctx, Mutation::DeactivateWorker, View::Workers).await
        }

        WorkerCmd::Stats { id } => {
            let stats = api
                .stats(*id)
                .await
                .map_err(|e| fail("Loading worker stats failed", e))?;
            print!("{}", render::worker_stats(&stats));
            Ok(())
        }
    }
}

pub(crate) async fn show_list(ctx: &Context, all: bool) -> AppResult<()> {
    let mut workers = ctx
        .api
        .workers()
        .list(&WorkerQuery::default())
        .await
        .map_err(|e| fail("Loading workers failed", e))?;

    if !all {
        workers.retain(|w| w.is_active);
    }

    header("Workers");
    print!("{}", render::workers(&workers));
    Ok(())
}
