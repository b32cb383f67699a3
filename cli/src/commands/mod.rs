//! Subcommand implementations.

pub mod delete;
pub mod image_url;
pub mod list;
pub mod save;

use anyhow::{anyhow, Result};
use stockdesk_shared::{AdminError, InventoryAdmin};

use crate::{
    cli::{Cli, Commands},
    http_api::HttpInventoryApi,
    session_file::SessionFile,
};

/// Controller type every command runs against.
pub type Admin = InventoryAdmin<HttpInventoryApi, SessionFile>;

/// Dispatches one parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    let Cli {
        api_base,
        session_file,
        command,
    } = cli;
    let session = SessionFile::new(session_file);

    match command {
        Commands::List {
            json,
        } => list::run(&mut mount(&api_base, session)?, json).await,
        Commands::Create {
            fields,
            images,
        } => save::create(&mut mount(&api_base, session)?, &fields, &images).await,
        Commands::Update {
            id,
            fields,
            images,
        } => save::update(&mut mount(&api_base, session)?, &id, &fields, &images).await,
        Commands::Delete {
            id,
            yes,
        } => delete::run(&mut mount(&api_base, session)?, &id, yes).await,
        Commands::ImageUrl {
            reference,
        } => {
            image_url::run(&api_base, reference.as_deref());
            Ok(())
        },
    }
}

fn mount(api_base: &str, session: SessionFile) -> Result<Admin> {
    let path = session.path().display().to_string();
    let api = HttpInventoryApi::new(api_base)?;
    InventoryAdmin::mount(api, session).map_err(|err| report(err, &path))
}

/// Converts an admin failure into a CLI error. Authentication failures point
/// the user at the login flow instead of retrying.
pub fn report(err: AdminError, session_path: &str) -> anyhow::Error {
    if err.redirects_to_login() {
        tracing::warn!(error = %err, "session rejected");
        anyhow!("{}; please log in again (session file: {session_path})", err.notice())
    } else {
        anyhow!(err.notice())
    }
}

pub(crate) fn session_path(admin: &Admin) -> String {
    admin.auth().provider().path().display().to_string()
}
