use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::{Map, Value, json};
use std::io::{self, BufRead, Write};
use std::process;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod assemble;
mod client;
mod config;
mod input;
mod mcp;
mod tools;
mod types;

use client::{Transport, WinstonClient};
use config::{ApiKey, DEFAULT_BASE_URL, Settings};

#[derive(Parser)]
#[command(name = "winston-mcp")]
#[command(
    version,
    about = "MCP server and CLI for Winston AI content detection"
)]
struct Cli {
    /// Winston AI API key
    #[arg(long, global = true, env = "WINSTONAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    /// Winston AI API base URL
    #[arg(long, global = true, env = "WINSTONAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct DetectTextArgs {
    /// Text to scan (300 to 150 000 characters)
    #[arg(long)]
    text: String,
    /// File to scan instead of the text (.pdf, .doc, .docx)
    #[arg(long)]
    file: Option<String>,
    /// Website to scan instead of the text and file
    #[arg(long)]
    website: Option<String>,
    /// Output JSON structuredContent
    #[arg(long)]
    json: bool,
}

#[derive(Args, Clone)]
struct DetectImageArgs {
    /// Publicly accessible image URL
    #[arg(long)]
    url: String,
    /// Output JSON structuredContent
    #[arg(long)]
    json: bool,
}

#[derive(Args, Clone)]
struct PlagiarismArgs {
    /// Text to scan (100 to 120 000 characters)
    #[arg(long)]
    text: String,
    /// 2 letter language code
    #[arg(long)]
    language: Option<String>,
    /// Country code where the text was written
    #[arg(long)]
    country: Option<String>,
    /// Output JSON structuredContent
    #[arg(long)]
    json: bool,
}

#[derive(Args, Clone)]
struct CompareArgs {
    /// First text
    #[arg(long)]
    first_text: String,
    /// Second text
    #[arg(long)]
    second_text: String,
    /// Output JSON structuredContent
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP stdio server
    Serve {
        /// Serve MCP over stdio (NDJSON)
        #[arg(long)]
        stdio: bool,
    },
    /// Detect AI-generated text
    DetectText(DetectTextArgs),
    /// Detect AI-generated images
    DetectImage(DetectImageArgs),
    /// Detect plagiarism in a text
    Plagiarism(PlagiarismArgs),
    /// Compare two texts
    Compare(CompareArgs),
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let settings = Settings::new(ApiKey::new(cli.api_key.unwrap_or_default()), cli.base_url);
    if settings.api_key.is_placeholder() {
        warn!("WINSTONAI_API_KEY is missing or looks like a placeholder; tool calls will be refused");
    }

    let client = WinstonClient::new(settings).context("failed to build http client")?;

    match cli.command {
        Commands::Serve { stdio } => {
            if stdio {
                run_stdio_server(&client)
            } else {
                anyhow::bail!("only --stdio transport is supported")
            }
        }
        Commands::DetectText(args) => run_detect_text(args, &client),
        Commands::DetectImage(args) => run_detect_image(args, &client),
        Commands::Plagiarism(args) => run_plagiarism(args, &client),
        Commands::Compare(args) => run_compare(args, &client),
    }
}

/// Logs go to stderr; stdout is reserved for protocol frames and CLI output.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("winston_mcp=info"));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run_detect_text(args: DetectTextArgs, transport: &dyn Transport) -> Result<()> {
    let mut map = Map::new();
    map.insert("text".to_string(), json!(args.text));
    if let Some(file) = args.file {
        map.insert("file".to_string(), json!(file));
    }
    if let Some(website) = args.website {
        map.insert("website".to_string(), json!(website));
    }
    let result = tools::ai_text_detection::call(&Value::Object(map), transport);
    print_tool_result(result, args.json)
}

fn run_detect_image(args: DetectImageArgs, transport: &dyn Transport) -> Result<()> {
    let arguments = json!({ "url": args.url });
    let result = tools::ai_image_detection::call(&arguments, transport);
    print_tool_result(result, args.json)
}

fn run_plagiarism(args: PlagiarismArgs, transport: &dyn Transport) -> Result<()> {
    let mut map = Map::new();
    map.insert("text".to_string(), json!(args.text));
    if let Some(language) = args.language {
        map.insert("language".to_string(), json!(language));
    }
    if let Some(country) = args.country {
        map.insert("country".to_string(), json!(country));
    }
    let result = tools::plagiarism_detection::call(&Value::Object(map), transport);
    print_tool_result(result, args.json)
}

fn run_compare(args: CompareArgs, transport: &dyn Transport) -> Result<()> {
    let arguments = json!({
        "first_text": args.first_text,
        "second_text": args.second_text,
    });
    let result = tools::text_compare::call(&arguments, transport);
    print_tool_result(result, args.json)
}

fn print_tool_result(result: Value, json_output: bool) -> Result<()> {
    let is_error = result
        .get("isError")
        .and_then(|value| value.as_bool())
        .unwrap_or(false);

    if is_error {
        let message = result
            .get("structuredContent")
            .and_then(|value| value.get("error"))
            .and_then(|value| value.get("message"))
            .and_then(|value| value.as_str())
            .unwrap_or("tool error");
        eprintln!("{message}");
        process::exit(1);
    }

    if json_output {
        let structured = result
            .get("structuredContent")
            .cloned()
            .unwrap_or_else(|| json!({}));
        let output = serde_json::to_string_pretty(&structured)?;
        println!("{output}");
        return Ok(());
    }

    let text = result
        .get("content")
        .and_then(|value| value.as_array())
        .and_then(|arr| arr.first())
        .and_then(|value| value.get("text"))
        .and_then(|value| value.as_str())
        .unwrap_or("");
    println!("{text}");
    Ok(())
}

fn run_stdio_server(client: &WinstonClient) -> Result<()> {
    info!(base_url = client.base_url(), "serving mcp over stdio");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let reader = stdin.lock().lines();
    let mut writer = io::BufWriter::new(stdout.lock());

    for line in reader {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let request: serde_json::Value = match serde_json::from_str(&line) {
            Ok(value) => value,
            Err(err) => {
                warn!(error = %err, "skipping unparseable frame");
                continue;
            }
        };

        let method = request.get("method").and_then(|value| value.as_str());
        let id = request.get("id").cloned();
        let response = match (method, id) {
            (Some("initialize"), Some(id)) => Some(json!({
                "jsonrpc": "2.0",
                "id": id,
                "result": {
                    "protocolVersion": "2025-11-25",
                    "capabilities": {
                        "tools": {}
                    },
                    "serverInfo": {
                        "name": env!("CARGO_PKG_NAME"),
                        "version": env!("CARGO_PKG_VERSION")
                    },
                    "instructions": mcp::SERVER_INSTRUCTIONS
                }
            })),
            (Some("tools/list"), Some(id)) => Some(json!({
                "jsonrpc": "2.0",
                "id": id,
                "result": {
                    "tools": mcp::tool_definitions()
                }
            })),
            (Some("tools/call"), Some(id)) => {
                let result = handle_tool_call(&request, client);
                Some(json!({
                    "jsonrpc": "2.0",
                    "id": id,
                    "result": result
                }))
            }
            (Some("ping"), Some(id)) => Some(json!({
                "jsonrpc": "2.0",
                "id": id,
                "result": {}
            })),
            (Some(method), Some(id)) => Some(json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": {
                    "code": mcp::errors::METHOD_NOT_FOUND,
                    "message": format!("method not found: {method}")
                }
            })),
            _ => None,
        };

        if let Some(response) = response {
            let serialized =
                serde_json::to_string(&response).context("failed to serialize response")?;
            writeln!(writer, "{serialized}").context("failed to write response")?;
            writer.flush().context("failed to flush response")?;
        }
    }

    Ok(())
}

fn handle_tool_call(request: &serde_json::Value, transport: &dyn Transport) -> serde_json::Value {
    let params = request.get("params");
    let Some(params) = params.and_then(|value| value.as_object()) else {
        return tools::error_result(mcp::errors::INVALID_INPUT, "params must be an object", None);
    };

    let name = params.get("name").and_then(|value| value.as_str());
    let Some(name) = name else {
        return tools::error_result(
            mcp::errors::INVALID_INPUT,
            "params.name must be a string",
            None,
        );
    };

    let args = params
        .get("arguments")
        .cloned()
        .unwrap_or_else(|| json!({}));

    info!(tool = name, "tool call");

    match name {
        mcp::contracts::TOOL_AI_TEXT_DETECTION => tools::ai_text_detection::call(&args, transport),
        mcp::contracts::TOOL_AI_IMAGE_DETECTION => {
            tools::ai_image_detection::call(&args, transport)
        }
        mcp::contracts::TOOL_PLAGIARISM_DETECTION => {
            tools::plagiarism_detection::call(&args, transport)
        }
        mcp::contracts::TOOL_TEXT_COMPARE => tools::text_compare::call(&args, transport),
        _ => tools::error_result(
            mcp::errors::INVALID_INPUT,
            format!("tool not implemented: {name}"),
            Some(name),
        ),
    }
}
