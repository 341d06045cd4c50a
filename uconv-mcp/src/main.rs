//! uconv MCP Server
//!
//! JSON-RPC 2.0 over stdio, one message per line.
//!
//! Tools:
//! - list_categories: Browse the catalog
//! - describe_conversion: Input and output fields of one conversion
//! - evaluate: Run a conversion against an input bag

use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use std::env;
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::{debug, error, info, warn};
use uconv::Converter;
use uconv_core::{InputBag, RawValue, UconvError};
use uconv_registry::{Conversion, LookupError};

const PROTOCOL_VERSION: &str = "2025-11-25";
const SERVER_NAME: &str = "uconv";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

// MCP Protocol types
#[derive(Debug, Deserialize)]
struct McpRequest {
    jsonrpc: String,
    id: Option<JsonValue>,
    method: String,
    #[serde(default)]
    params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
struct McpResponse {
    jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<McpError>,
}

#[derive(Debug, Serialize)]
struct McpError {
    code: i32,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<JsonValue>,
}

impl McpError {
    fn parse_error(details: impl std::fmt::Display) -> Self {
        Self { code: -32700, message: format!("Parse error: {}", details), data: None }
    }

    fn invalid_request(message: impl Into<String>) -> Self {
        Self { code: -32600, message: message.into(), data: None }
    }

    fn method_not_found(method: &str) -> Self {
        Self { code: -32601, message: format!("Method not found: {}", method), data: None }
    }

    fn invalid_params(message: impl Into<String>) -> Self {
        Self { code: -32602, message: message.into(), data: None }
    }
}

impl McpResponse {
    fn from_result(id: Option<JsonValue>, result: Result<JsonValue, McpError>) -> Self {
        match result {
            Ok(r) => Self { jsonrpc: "2.0".to_string(), id, result: Some(r), error: None },
            Err(e) => Self { jsonrpc: "2.0".to_string(), id, result: None, error: Some(e) },
        }
    }
}

/// `UCONV_LOG_ANSI`: `0`, `false`, `no` or `off` disable colour
fn ansi_enabled(setting: Option<&str>, default: bool) -> bool {
    match setting.map(|s| s.trim().to_ascii_lowercase()) {
        Some(s) if s.is_empty() => default,
        Some(s) => !matches!(s.as_str(), "0" | "false" | "no" | "off"),
        None => default,
    }
}

fn init_logging() {
    let ansi_setting = env::var("UCONV_LOG_ANSI").ok();
    let ansi = ansi_enabled(ansi_setting.as_deref(), io::stderr().is_terminal());

    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_ansi(ansi)
        .init();
}

fn write_response(response: &McpResponse) -> io::Result<()> {
    let response_json = serde_json::to_string(response)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", response_json)?;
    stdout.flush()
}

fn main() {
    init_logging();

    let converter = Converter::with_standard_catalog();
    if let Err(e) = converter.registry().validate() {
        error!("Invalid catalog: {}", e);
        std::process::exit(1);
    }

    info!(version = SERVER_VERSION, protocol = PROTOCOL_VERSION, "uconv MCP server started");
    info!(
        categories = converter.registry().categories().len(),
        conversions = converter.registry().conversion_count(),
        "Catalog loaded"
    );

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("Client disconnected (EOF)");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let request: McpRequest = match serde_json::from_str(line) {
                    Ok(r) => r,
                    Err(e) => {
                        error!("Error parsing request: {}", e);
                        let response = McpResponse::from_result(None, Err(McpError::parse_error(e)));
                        if let Err(e) = write_response(&response) {
                            error!("Error writing response: {}", e);
                            break;
                        }
                        continue;
                    }
                };

                info!(method = %request.method, "Processing request");
                let response = handle_request(&converter, &request);

                // Notifications (no id) get no response
                if request.id.is_none() {
                    debug!(method = %request.method, "Notification processed");
                    continue;
                }

                if let Err(e) = write_response(&response) {
                    error!("Error writing response: {}", e);
                    break;
                }
            }
            Err(e) => {
                error!("Error reading input: {}", e);
                break;
            }
        }
    }

    info!("Server shutting down");
}

fn handle_request(converter: &Converter, request: &McpRequest) -> McpResponse {
    if request.jsonrpc != "2.0" {
        let err = McpError::invalid_request(format!("Unsupported jsonrpc version: {}", request.jsonrpc));
        return McpResponse::from_result(request.id.clone(), Err(err));
    }

    let result = match request.method.as_str() {
        // Lifecycle
        "initialize" => handle_initialize(&request.params),
        "initialized" => Ok(json!({})),
        "ping" => Ok(json!({})),

        // Tools
        "tools/list" => handle_tools_list(),
        "tools/call" => handle_tool_call(converter, &request.params),

        _ => Err(McpError::method_not_found(&request.method)),
    };

    McpResponse::from_result(request.id.clone(), result)
}

fn handle_initialize(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let client_info = params.as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    // Use client's protocol version for compatibility
    let client_protocol = params.as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(PROTOCOL_VERSION);

    info!(client = client_info, protocol = client_protocol, "Client connected");

    Ok(json!({
        "protocolVersion": client_protocol,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
            "description": "Unit conversions over a fixed catalog of categories"
        },
        "capabilities": {
            "tools": {
                "listChanged": false
            }
        },
        "instructions": "Call 'list_categories' to browse, 'describe_conversion' to see the input fields of a conversion, then 'evaluate' with the full set of inputs. Empty output values mean the inputs were missing or invalid."
    }))
}

fn handle_tools_list() -> Result<JsonValue, McpError> {
    Ok(json!({
        "tools": [
            {
                "name": "list_categories",
                "description": "List every category and its conversions, in display order.",
                "inputSchema": {
                    "type": "object",
                    "properties": {}
                }
            },
            {
                "name": "describe_conversion",
                "description": "Get the input and output fields of a conversion.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": {
                            "type": "string",
                            "description": "Category name, e.g. \"Temperature\""
                        },
                        "conversion": {
                            "type": "string",
                            "description": "Conversion name, e.g. \"Celsius to Fahrenheit\""
                        }
                    },
                    "required": ["category", "conversion"]
                }
            },
            {
                "name": "evaluate",
                "description": "Evaluate a conversion. Outputs are formatted strings; an empty string means the inputs were insufficient.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": {
                            "type": "string",
                            "description": "Category name"
                        },
                        "conversion": {
                            "type": "string",
                            "description": "Conversion name"
                        },
                        "inputs": {
                            "type": "object",
                            "description": "Input values keyed by field key; null means not entered",
                            "additionalProperties": { "type": ["number", "string", "null"] }
                        }
                    },
                    "required": ["category", "conversion"]
                }
            }
        ]
    }))
}

fn handle_tool_call(converter: &Converter, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let params = params.as_ref().ok_or_else(|| McpError::invalid_params("Missing params"))?;

    let name = params.get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

    let args = params.get("arguments").cloned().unwrap_or(json!({}));

    match name {
        "list_categories" => tool_list_categories(converter),
        "describe_conversion" => tool_describe_conversion(converter, &args),
        "evaluate" => tool_evaluate(converter, &args),
        _ => Err(McpError::invalid_params(format!("Unknown tool: {}", name))),
    }
}

fn string_arg<'a>(args: &'a JsonValue, key: &str) -> Result<&'a str, McpError> {
    args.get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params(format!("Missing {} argument", key)))
}

/// Resolve the conversion named in the arguments
fn lookup<'c>(converter: &'c Converter, args: &JsonValue) -> Result<Result<&'c Conversion, LookupError>, McpError> {
    let category = string_arg(args, "category")?;
    let conversion = string_arg(args, "conversion")?;
    Ok(converter.get_conversion(category, conversion))
}

/// Tool result for a category or conversion that does not exist
fn lookup_failure(err: LookupError) -> JsonValue {
    warn!("Lookup failed: {}", err);
    let err: UconvError = err.into();
    json!({
        "content": [{ "type": "text", "text": format!("Error: {}", err) }],
        "isError": true,
        "error": err
    })
}

fn to_json<T: Serialize>(value: &T) -> Result<JsonValue, McpError> {
    serde_json::to_value(value).map_err(|e| McpError {
        code: -32603,
        message: "Internal error".to_string(),
        data: Some(json!(UconvError::internal(e.to_string()))),
    })
}

fn tool_list_categories(converter: &Converter) -> Result<JsonValue, McpError> {
    let categories = converter.list_categories();
    let text = categories
        .iter()
        .map(|c| format!("{}: {}", c.name, c.conversions.join(", ")))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(json!({
        "content": [{ "type": "text", "text": text }],
        "data": to_json(&categories)?
    }))
}

fn tool_describe_conversion(converter: &Converter, args: &JsonValue) -> Result<JsonValue, McpError> {
    let conversion = match lookup(converter, args)? {
        Ok(c) => c,
        Err(e) => return Ok(lookup_failure(e)),
    };
    let fields = converter.describe_fields(conversion);

    let mut text = format!("# {}\n\nInputs:\n", fields.name);
    for field in fields.input_fields {
        text.push_str(&format!("- {} ({}, {:?})\n", field.label, field.key, field.value_type));
    }
    text.push_str("\nOutputs:\n");
    for field in fields.output_fields {
        text.push_str(&format!("- {} ({})\n", field.label, field.key));
    }

    Ok(json!({
        "content": [{ "type": "text", "text": text }],
        "data": to_json(&fields)?
    }))
}

fn tool_evaluate(converter: &Converter, args: &JsonValue) -> Result<JsonValue, McpError> {
    let conversion = match lookup(converter, args)? {
        Ok(c) => c,
        Err(e) => return Ok(lookup_failure(e)),
    };
    let inputs = json_to_inputs(args.get("inputs"))?;
    let outputs = converter.evaluate(conversion, &inputs);

    let text = conversion
        .output_fields
        .iter()
        .map(|f| format!("{}: {}", f.label, outputs.get(f.key).unwrap_or_default()))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(json!({
        "content": [{ "type": "text", "text": text }],
        "data": to_json(&outputs)?
    }))
}

fn json_to_inputs(json: Option<&JsonValue>) -> Result<InputBag, McpError> {
    let obj = match json {
        None | Some(JsonValue::Null) => return Ok(InputBag::new()),
        Some(JsonValue::Object(obj)) => obj,
        Some(_) => return Err(McpError::invalid_params("inputs must be an object")),
    };

    let mut bag = InputBag::new();
    for (key, value) in obj {
        match value {
            JsonValue::Null => {}
            JsonValue::Number(n) => {
                let n = n.as_f64()
                    .ok_or_else(|| McpError::invalid_params(format!("Input '{}' is not a finite number", key)))?;
                bag.insert(key.clone(), RawValue::Number(n));
            }
            JsonValue::String(s) => bag.insert(key.clone(), RawValue::Text(s.clone())),
            _ => {
                return Err(McpError::invalid_params(format!(
                    "Input '{}' must be a number, a string or null",
                    key
                )))
            }
        }
    }
    Ok(bag)
}
