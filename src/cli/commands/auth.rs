use crate::Context;
use crate::cli::parser::AuthCmd;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &AuthCmd, ctx: &Context) -> AppResult<()> {
    let session = ctx.api.session();

    match cmd {
        AuthCmd::SetToken { token } => {
            if token.trim().is_empty() {
                return Err(AppError::Validation("token cannot be empty".into()));
            }
            session.set_token(token)?;
            success("Token stored");
        }
        AuthCmd::Clear => {
            session.clear();
            success("Token cleared");
        }
        AuthCmd::Status => {
            match session.token() {
                Some(t) => info(format!("Token present ({})", mask(&t))),
                None => warning("No token stored; requests are sent without Authorization"),
            }
            if let Some(path) = session.store_path() {
                info(format!("Token file: {}", path.display()));
            }
            info(format!("API: {}", ctx.api.base_url()));
        }
    }
    Ok(())
}

fn mask(token: &str) -> String {
    let tail: String = token
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("…{tail}")
}
