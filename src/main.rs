//! Sketch - query a relational database and render the result as a chart.

use db_sketch::catalog;
use db_sketch::chart::{self, preferred_y_field};
use db_sketch::cli::Cli;
use db_sketch::config::{Config, ConnectionConfig};
use db_sketch::db::{self, Connector, MockConnector};
use db_sketch::error::{Result, SketchError};
use db_sketch::insights;
use db_sketch::logging;
use db_sketch::preview;
use db_sketch::query::QueryExecutor;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    logging::init();

    if let Err(e) = run().await {
        // Every error maps to exactly one displayed message.
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse_args();

    if cli.list_queries {
        for query in catalog::all() {
            println!("{:<20} {}", query.name, query.description);
        }
        return Ok(());
    }

    let connector = build_connector(&cli).await?;

    if cli.check {
        match connector.ping().await {
            Ok(()) => println!("Connected successfully"),
            Err(e) => println!("Connection failed: {}", e.detail()),
        }
        connector.close().await?;
        return Ok(());
    }

    let sql = resolve_sql(&cli)?;
    let executor = QueryExecutor::new(connector.as_ref());
    let result = executor.execute(&sql).await?;

    info!(
        "Query returned {} rows in {:?}",
        result.row_count, result.execution_time
    );

    // Axis defaults: x is the first column, y a likely numeric target.
    let columns = result.column_names();
    let x_field = cli
        .x_field
        .clone()
        .or_else(|| columns.first().map(|c| c.to_string()))
        .unwrap_or_default();
    let y_field = cli
        .y_field
        .clone()
        .or_else(|| preferred_y_field(&columns).map(str::to_string))
        .unwrap_or_default();

    let built = chart::build_chart_named(&result, &cli.chart, &x_field, &y_field, cli.color.as_deref());
    let rendered = serde_json::to_string_pretty(&built.to_vega_lite())
        .map_err(|e| SketchError::render(format!("Could not serialize chart spec: {e}")))?;

    match &cli.output_file {
        Some(path) => {
            std::fs::write(path, &rendered).map_err(|e| {
                SketchError::render(format!("Failed to write {}: {e}", path.display()))
            })?;
            info!("Chart spec written to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    if cli.table {
        print!("{}", preview::render_table(&result));
        for line in insights::derive(&result) {
            println!("- {line}");
        }
    }

    connector.close().await?;
    Ok(())
}

/// Picks the SQL to run: custom --sql wins, then a named saved query, then
/// the catalog default.
fn resolve_sql(cli: &Cli) -> Result<String> {
    if let Some(sql) = &cli.sql {
        return Ok(sql.clone());
    }

    if let Some(name) = &cli.query {
        let query = catalog::find(name).ok_or_else(|| {
            SketchError::config(format!(
                "Saved query '{name}' not found. Use --list-queries to see the catalog."
            ))
        })?;
        return Ok(query.sql.to_string());
    }

    Ok(catalog::default_query().sql.to_string())
}

/// Builds the database connector for this run.
async fn build_connector(cli: &Cli) -> Result<Box<dyn Connector>> {
    if cli.mock_db {
        return Ok(Box::new(MockConnector::new()));
    }

    let config_path = cli.config_path();
    let config = Config::load_from_file(&config_path)?;
    let connection = resolve_connection(cli, &config)?.ok_or_else(|| {
        SketchError::config(
            "No database connection configured. Pass a connection string or use --mock-db.",
        )
    })?;

    info!("Connecting to {}", connection.display_string());
    db::connect(&connection).await
}

/// Resolves the final connection configuration from CLI args, config file,
/// and environment, in that precedence order.
fn resolve_connection(cli: &Cli, config: &Config) -> Result<Option<ConnectionConfig>> {
    // Start with CLI connection config if provided
    let mut connection = cli.to_connection_config()?;

    // If no CLI connection, try named connection from config
    if connection.is_none() {
        if let Some(name) = cli.connection_name() {
            connection = config.get_connection(Some(name)).cloned();
            if connection.is_none() {
                return Err(SketchError::config(format!(
                    "Connection '{name}' not found in config file"
                )));
            }
        }
    }

    // If still no connection, try default from config
    if connection.is_none() {
        connection = config.get_connection(None).cloned();
    }

    // Apply environment variable defaults; PG* variables alone are enough
    // to describe a connection.
    let mut conn = connection.unwrap_or_default();
    conn.apply_env_defaults();

    if conn.host.is_none() && conn.database.is_none() {
        return Ok(None);
    }

    Ok(Some(conn))
}
