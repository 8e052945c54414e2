//! MCP server implementation for host telemetry

use std::sync::Arc;
use std::time::Duration;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sysinfo::{ProcessesToUpdate, System};
use tokio::sync::Mutex;

use crate::display;
use crate::info;
use crate::info::process::SortBy;
use crate::result::json_response;

/// Pause between the two refreshes that turn counters into a usage sample
const SAMPLE_INTERVAL: Duration = Duration::from_millis(200);

const DEFAULT_PROCESS_LIMIT: i64 = 20;

/// The host telemetry MCP server
#[derive(Clone)]
pub struct TelemetryMcpServer {
    system: Arc<Mutex<System>>,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Parameter Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ProcessParams {
    #[schemars(description = "Maximum number of processes to return (default 20; 0 or less returns none)")]
    pub limit: Option<i64>,
    #[schemars(description = "Sort order: cpu (descending), memory (descending), or name (ascending)")]
    pub sort_by: Option<SortBy>,
}

// ============================================================================
// Tool Router Implementation
// ============================================================================

#[tool_router]
impl TelemetryMcpServer {
    pub fn new() -> Self {
        Self {
            system: Arc::new(Mutex::new(System::new_all())),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Get CPU information: model, manufacturer, core counts, usage breakdown, temperature, and load average"
    )]
    async fn get_cpu_info(&self) -> Result<CallToolResult, McpError> {
        // Sensor access may block; sample usage while it runs.
        let temperature = tokio::task::spawn_blocking(info::cpu::read_temperature);

        let mut sys = self.system.lock().await;
        sys.refresh_cpu_usage();
        tokio::time::sleep(SAMPLE_INTERVAL).await;
        sys.refresh_cpu_usage();

        let temperature = temperature.await.ok().flatten();
        Ok(json_response(&info::cpu::cpu_report(&sys, temperature)))
    }

    #[tool(
        description = "Get memory information: total, used, free, and available RAM plus swap, as GB strings"
    )]
    async fn get_memory_info(&self) -> Result<CallToolResult, McpError> {
        let mut sys = self.system.lock().await;
        sys.refresh_memory();
        Ok(json_response(&info::memory::memory_report(&sys)))
    }

    #[tool(
        description = "Get disk usage for every mounted filesystem: device, mount point, space, and filesystem type"
    )]
    async fn get_disk_usage(&self) -> Result<CallToolResult, McpError> {
        Ok(json_response(&info::disk::disk_report()))
    }

    #[tool(
        description = "Get running processes sorted by cpu, memory, or name, with status summary counts"
    )]
    async fn get_running_processes(
        &self,
        Parameters(params): Parameters<ProcessParams>,
    ) -> Result<CallToolResult, McpError> {
        let limit = params.limit.unwrap_or(DEFAULT_PROCESS_LIMIT);
        let sort_by = params.sort_by.unwrap_or_default();

        let mut sys = self.system.lock().await;
        // Two refreshes so per-process CPU percentages are deltas, not zeros.
        sys.refresh_processes(ProcessesToUpdate::All, true);
        tokio::time::sleep(SAMPLE_INTERVAL).await;
        sys.refresh_processes(ProcessesToUpdate::All, true);

        Ok(json_response(&info::process::process_report(
            &sys, sort_by, limit,
        )))
    }

    #[tool(
        description = "Get system information: operating system identity, hardware summary, uptime, hostname, and user"
    )]
    async fn get_system_info(&self) -> Result<CallToolResult, McpError> {
        let mut sys = self.system.lock().await;
        sys.refresh_memory();
        Ok(json_response(&info::system::system_report(&sys)))
    }

    #[tool(
        description = "Get network interfaces with addresses and traffic totals, plus connection counts by protocol and state"
    )]
    async fn get_network_info(&self) -> Result<CallToolResult, McpError> {
        let (interfaces, connections) = tokio::join!(
            tokio::task::spawn_blocking(info::network::interface_list),
            info::network::connection_summary(),
        );
        let report = crate::types::NetworkReport {
            interfaces: interfaces.unwrap_or_default(),
            connections,
        };
        Ok(json_response(&report))
    }

    #[tool(
        description = "Get a compact snapshot: CPU usage, memory, root disk, and uptime"
    )]
    async fn get_quick_stats(&self) -> Result<CallToolResult, McpError> {
        let mut sys = self.system.lock().await;
        sys.refresh_cpu_usage();
        sys.refresh_memory();
        tokio::time::sleep(SAMPLE_INTERVAL).await;
        sys.refresh_cpu_usage();
        Ok(json_response(&info::stats::quick_stats(&sys)))
    }

    #[tool(
        description = "Get connected monitors via a prioritized detection chain (cross-platform library, then platform commands, then fallback)"
    )]
    async fn get_monitor_info(&self) -> Result<CallToolResult, McpError> {
        Ok(json_response(&display::discover_displays().await))
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for TelemetryMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Host Telemetry MCP Server - provides tools for retrieving CPU, \
                 memory, disk, process, system, network, and display information."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

impl Default for TelemetryMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_json(result: &CallToolResult) -> serde_json::Value {
        assert!(result.is_error.is_none() || !result.is_error.unwrap_or(false));
        let text = result.content[0].as_text().expect("text content");
        serde_json::from_str(&text.text).expect("valid JSON response")
    }

    #[test]
    fn router_lists_all_tools() {
        let server = TelemetryMcpServer::new();
        let tools = server.tool_router.list_all();
        assert_eq!(tools.len(), 8);

        let names: Vec<&str> = tools.iter().map(|t| t.name.as_ref()).collect();
        for expected in [
            "get_cpu_info",
            "get_memory_info",
            "get_disk_usage",
            "get_running_processes",
            "get_system_info",
            "get_network_info",
            "get_quick_stats",
            "get_monitor_info",
        ] {
            assert!(names.contains(&expected), "missing tool {expected}");
        }
    }

    #[tokio::test]
    async fn memory_info_returns_json() {
        let server = TelemetryMcpServer::new();
        let result = server.get_memory_info().await.expect("tool succeeds");
        let json = response_json(&result);
        assert!(json["usage_percent"].as_str().expect("percent").ends_with('%'));
        assert!(json["swap"].is_object());
    }

    #[tokio::test]
    async fn zero_limit_returns_empty_process_list_with_summary() {
        let server = TelemetryMcpServer::new();
        let result = server
            .get_running_processes(Parameters(ProcessParams {
                limit: Some(0),
                sort_by: None,
            }))
            .await
            .expect("tool succeeds");
        let json = response_json(&result);
        assert_eq!(json["processes"].as_array().expect("list").len(), 0);
        assert!(json["summary"]["total"].as_u64().expect("total") > 0);
    }

    #[tokio::test]
    async fn monitor_info_is_never_empty() {
        let server = TelemetryMcpServer::new();
        let result = server.get_monitor_info().await.expect("tool succeeds");
        let json = response_json(&result);
        assert!(json["total_monitors"].as_u64().expect("count") >= 1);
        assert_eq!(json["system"].as_str(), Some(std::env::consts::OS));
    }

    #[tokio::test]
    async fn system_info_has_expected_sections() {
        let server = TelemetryMcpServer::new();
        let result = server.get_system_info().await.expect("tool succeeds");
        let json = response_json(&result);
        assert!(json["operating_system"].is_object());
        assert!(json["hardware"]["logical_cores"].as_u64().expect("cores") > 0);
        assert!(json["uptime"].as_str().expect("uptime").contains('d'));
    }
}
