use anyhow::Context;
use pos_server::db::seed;
use pos_server::{Config, DbService, Server, ServerState, init_logger};
use shared::models::EmployeeCreate;

/// Staff member created by `pos-server seed`
fn default_employee() -> EmployeeCreate {
    EmployeeCreate {
        name: "Garçom Padrão".into(),
        phone: "0000000000".into(),
        password: "1234".into(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 不存在时忽略
    let _ = dotenvy::dotenv();

    let config = Config::from_env();
    let _log_guard = init_logger(
        &config.log_level,
        config.is_production(),
        config.log_dir.as_deref(),
    )
        .context("failed to initialize logging")?;

    let db = DbService::new(&config.database_path)
        .await
        .context("failed to open database")?;

    if std::env::args().nth(1).as_deref() == Some("seed") {
        let summary = seed::seed(&db.writer, default_employee())
            .await
            .context("failed to seed database")?;
        tracing::info!(
            path = %config.database_path,
            tables = summary.tables,
            products = summary.products,
            "Database seeded"
        );
        return Ok(());
    }

    tracing::info!(env = %config.environment, "POS server starting...");

    let state = ServerState::new(config.clone(), db);
    Server::new(config, state).run().await.context("server error")?;

    Ok(())
}
