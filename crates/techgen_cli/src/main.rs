//! Command-line entry point for the techgen handlers.
//!
//! Reads configuration from `TECHGEN_*` environment variables, runs one
//! handler against the configured database and prints the response as JSON.

use clap::{Parser, Subcommand};
use log::info;
use serde::Serialize;
use std::collections::BTreeMap;
use std::process::ExitCode;
use std::time::Duration;
use techgen_api::{
    Api, HandlerResult, ProjectCreateRequest, ProjectDeleteParams, ProjectListParams, Response,
    TaskCreateRequest, TemplateDeleteParams, VersionListParams,
};
use techgen_core::publish::{MemoryChannel, TaskPublisher};
use techgen_core::{init_logging, open_db, AppConfig, RequestContext};

#[derive(Debug, Parser)]
#[command(name = "techgen")]
#[command(about = "Run techgen use-cases against a local database")]
struct Cli {
    /// Abort store and publish calls after this many milliseconds.
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    ProjectCreate {
        #[arg(long)]
        name: String,
        #[arg(long)]
        author: i64,
    },
    ProjectDelete {
        #[arg(long)]
        project: i64,
        #[arg(long)]
        user: i64,
    },
    ProjectList {
        #[arg(long)]
        user: i64,
        #[arg(long, default_value_t = 1)]
        page: i64,
        #[arg(long, default_value_t = 20)]
        size: i64,
        #[arg(long)]
        name: Option<String>,
    },
    UserGet {
        #[arg(long)]
        id: i64,
    },
    VersionList {
        #[arg(long)]
        template: i64,
        #[arg(long)]
        user: i64,
    },
    TemplateDelete {
        #[arg(long)]
        template: i64,
        #[arg(long)]
        user: i64,
    },
    TaskCreate {
        #[arg(long)]
        version: i64,
        #[arg(long)]
        creator: i64,
        /// Payload entry as `key=value`; repeatable.
        #[arg(long = "var", value_parser = parse_var)]
        vars: Vec<(String, String)>,
    },
}

#[derive(Debug, Serialize)]
struct Printed {
    status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<serde_json::Value>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli, AppConfig::from_env()) {
        Ok(printed) => {
            println!("{printed}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("techgen: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: AppConfig) -> Result<String, String> {
    if let Some(log_dir) = config.log_dir.as_deref() {
        init_logging(&config.log_level, log_dir)?;
    }

    let conn = open_db(&config.db_path).map_err(|err| {
        format!(
            "failed to open database `{}`: {err}",
            config.db_path.display()
        )
    })?;
    let channel = MemoryChannel::new();
    let api = Api::with_publisher(&conn, TaskPublisher::with_queue(&channel, config.task_queue));
    let ctx = match cli.timeout_ms {
        Some(ms) => RequestContext::with_timeout(Duration::from_millis(ms)),
        None => RequestContext::background(),
    };

    let printed = match cli.command {
        Command::ProjectCreate { name, author } => render(api.project_create(
            &ctx,
            ProjectCreateRequest {
                name,
                author_id: author,
            },
        )),
        Command::ProjectDelete { project, user } => render(api.project_delete(
            &ctx,
            ProjectDeleteParams {
                project_id: project,
                user_id: user,
            },
        )),
        Command::ProjectList {
            user,
            page,
            size,
            name,
        } => render(api.project_list(
            &ctx,
            ProjectListParams {
                user_id: user,
                page,
                size,
                name,
            },
        )),
        Command::UserGet { id } => render(api.user_get_by_id(&ctx, id)),
        Command::VersionList { template, user } => render(api.version_list(
            &ctx,
            VersionListParams {
                template_id: template,
                user_id: user,
            },
        )),
        Command::TemplateDelete { template, user } => render(api.template_delete(
            &ctx,
            TemplateDeleteParams {
                template_id: template,
                user_id: user,
            },
        )),
        Command::TaskCreate {
            version,
            creator,
            vars,
        } => render(api.task_create(
            &ctx,
            TaskCreateRequest {
                version_id: version,
                creator_id: creator,
                payload: vars.into_iter().collect::<BTreeMap<_, _>>(),
            },
        )),
    }?;

    for message in channel.messages() {
        info!(
            "event=task_announced module=cli status=ok routing_key={} bytes={}",
            message.routing_key,
            message.publishing.body.len()
        );
    }
    Ok(printed)
}

fn render<T: Serialize>(result: HandlerResult<Response<T>>) -> Result<String, String> {
    let printed = match result {
        Ok(response) => Printed {
            status: response.status(),
            body: response
                .to_json()
                .map_err(|err| format!("failed to encode response: {err}"))?,
        },
        Err(err) => Printed {
            status: err.status(),
            body: Some(serde_json::json!({ "message": err.public_message() })),
        },
    };
    serde_json::to_string_pretty(&printed).map_err(|err| format!("failed to encode output: {err}"))
}

fn parse_var(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got `{raw}`")),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_var, Cli, Command};
    use clap::Parser;

    #[test]
    fn parse_var_splits_on_first_equals() {
        assert_eq!(
            parse_var("query=a=b").expect("arguments parse"),
            ("query".to_string(), "a=b".to_string())
        );
        assert!(parse_var("=x").is_err());
        assert!(parse_var("novalue").is_err());
    }

    #[test]
    fn task_create_collects_repeated_vars() {
        let cli = Cli::try_parse_from([
            "techgen",
            "task-create",
            "--version",
            "3",
            "--creator",
            "7",
            "--var",
            "name=demo",
            "--var",
            "lang=rust",
        ])
        .expect("arguments parse");
        match cli.command {
            Command::TaskCreate { version, vars, .. } => {
                assert_eq!(version, 3);
                assert_eq!(vars.len(), 2);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
