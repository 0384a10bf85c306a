use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler, ServiceExt,
};
use reflecthe_core::{
    content, session::Session, AiSettings, AdviceRequest, Advice, ModelKind, StaffRole, Step,
    STEP_COUNT,
};
use serde::Deserialize;
use std::sync::{Arc, Mutex};

// --- Request types ---

#[derive(Debug, Deserialize, schemars::JsonSchema)]
struct GoToStepRequest {
    /// Step to jump to: an ordinal ("0".."9") or a page label such as
    /// "Gibbs", "Practise Lab", or "References". Unknown steps are ignored.
    step: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
struct SelectStageRequest {
    /// ID of the stage/lens to select on the current model page, e.g.
    /// "description" on the Gibbs page or "self" on the Brookfield page.
    stage_id: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
struct FilterCaseStudiesRequest {
    /// Staff role to filter the case studies by. Omit to show all roles.
    role: Option<StaffRole>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
struct GetCoachingRequest {
    /// The user's role and/or discipline, e.g. "Senior Lecturer in Fine Art"
    role: String,
    /// The free-text reflection draft to critique
    experience: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
struct SaveAiSettingsRequest {
    /// Provider: "openai", "anthropic", "google", "ollama", "groq", "mistral", or "deepseek"
    provider: String,
    /// API key for the provider. Empty string keeps the existing key.
    api_key: String,
    /// Model name, e.g. "gemini-2.5-flash"
    model: String,
}

// --- Server ---

#[derive(Clone)]
pub struct WalkthroughServer {
    session: Arc<Mutex<Session>>,
    settings: Arc<Mutex<AiSettings>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl WalkthroughServer {
    pub fn new() -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::new())),
            settings: Arc::new(Mutex::new(reflecthe_core::read_settings())),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Show the current step indicator and which navigation controls are enabled")]
    fn current_step(&self) -> Result<CallToolResult, McpError> {
        let session = self.session.lock().unwrap();
        Ok(CallToolResult::success(vec![Content::text(step_indicator(
            &session,
        ))]))
    }

    #[tool(description = "List all ten walkthrough steps in order, marking the current one")]
    fn list_steps(&self) -> Result<CallToolResult, McpError> {
        let session = self.session.lock().unwrap();
        let current = session.step();
        let lines: Vec<String> = Step::ALL
            .iter()
            .map(|s| {
                let marker = if *s == current { ">" } else { " " };
                format!("{} {}. {}", marker, s.ordinal(), s.label())
            })
            .collect();
        Ok(CallToolResult::success(vec![Content::text(
            lines.join("\n"),
        )]))
    }

    #[tool(
        description = "Read the content of the current step: framework tables, model stages (with the selected stage's critical questions), filtered case studies, the Practise Lab form, or the reading list"
    )]
    fn read_step(&self) -> Result<CallToolResult, McpError> {
        let session = self.session.lock().unwrap();
        Ok(CallToolResult::success(vec![Content::text(render_step(
            &session,
        ))]))
    }

    #[tool(description = "Advance to the next step. A no-op on the final References page.")]
    fn continue_walkthrough(&self) -> Result<CallToolResult, McpError> {
        let mut session = self.session.lock().unwrap();
        session.advance();
        Ok(CallToolResult::success(vec![Content::text(step_indicator(
            &session,
        ))]))
    }

    #[tool(description = "Go back to the previous step. A no-op on the Welcome page.")]
    fn go_back(&self) -> Result<CallToolResult, McpError> {
        let mut session = self.session.lock().unwrap();
        session.retreat();
        Ok(CallToolResult::success(vec![Content::text(step_indicator(
            &session,
        ))]))
    }

    #[tool(
        description = "Jump directly to a step by ordinal or page label. Navigating to a different step clears all stage selections and any held critique. Unknown steps are ignored."
    )]
    fn go_to_step(
        &self,
        Parameters(req): Parameters<GoToStepRequest>,
    ) -> Result<CallToolResult, McpError> {
        let mut session = self.session.lock().unwrap();
        match resolve_step(&req.step) {
            Some(step) => {
                session.go_to(step);
                Ok(CallToolResult::success(vec![Content::text(step_indicator(
                    &session,
                ))]))
            }
            // Navigation misuse is ignored, never surfaced as an error
            None => Ok(CallToolResult::success(vec![Content::text(format!(
                "'{}' is not a walkthrough step; staying on {}.",
                req.step,
                session.step().label()
            ))])),
        }
    }

    #[tool(
        description = "The References page's 'return to start' control: jump back to the Welcome page. Follows the same reset contract as any other navigation."
    )]
    fn restart_walkthrough(&self) -> Result<CallToolResult, McpError> {
        let mut session = self.session.lock().unwrap();
        session.restart();
        Ok(CallToolResult::success(vec![Content::text(step_indicator(
            &session,
        ))]))
    }

    #[tool(
        description = "Select a stage or lens on the current reflective-model page to open its detail panel (critical questions and PSF mapping). Only valid on the Brookfield, Gibbs, Schön, Rolfe, and Kolb pages."
    )]
    fn select_stage(
        &self,
        Parameters(req): Parameters<SelectStageRequest>,
    ) -> Result<CallToolResult, McpError> {
        let mut session = self.session.lock().unwrap();
        let Some(model) = session.step().reflective_model() else {
            return Ok(CallToolResult::error(vec![Content::text(format!(
                "'{}' is not a reflective-model page; navigate to one first.",
                session.step().label()
            ))]));
        };
        match session.select_stage(model, &req.stage_id) {
            Ok(stage) => Ok(CallToolResult::success(vec![Content::text(render_stage(
                stage,
            ))])),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(e)])),
        }
    }

    #[tool(
        description = "Filter the Case Studies page by staff role (lecturing, leadership, professionalServices, technicalServices). Omit the role to show all."
    )]
    fn filter_case_studies(
        &self,
        Parameters(req): Parameters<FilterCaseStudiesRequest>,
    ) -> Result<CallToolResult, McpError> {
        let mut session = self.session.lock().unwrap();
        session.set_role_filter(req.role);
        let shown = session.case_studies().len();
        let label = req.role.map(|r| r.label()).unwrap_or("All");
        Ok(CallToolResult::success(vec![Content::text(format!(
            "Case-study filter set to {label} ({shown} shown). Read them on the Case Studies page."
        ))]))
    }

    #[tool(
        description = "Submit a reflection draft for an AI coaching critique (Practise Lab). Requires a non-empty role and experience text and configured AI settings. One request at a time; the critique is held until you navigate away."
    )]
    async fn get_coaching(
        &self,
        Parameters(req): Parameters<GetCoachingRequest>,
    ) -> Result<CallToolResult, McpError> {
        let request = match AdviceRequest::new(&req.role, &req.experience) {
            Ok(r) => r,
            Err(e) => return Ok(CallToolResult::error(vec![Content::text(e)])),
        };

        let settings = self.settings.lock().unwrap().clone();
        if !reflecthe_core::ai_configured(&settings) {
            return Ok(CallToolResult::error(vec![Content::text(
                "The AI coach is not configured. Set provider, model, and API key with save_ai_settings.",
            )]));
        }

        let requested_at = {
            let mut session = self.session.lock().unwrap();
            match session.begin_advice() {
                Ok(step) => step,
                Err(e) => return Ok(CallToolResult::error(vec![Content::text(e)])),
            }
        };

        match reflecthe_coach::get_coaching(&request, &settings).await {
            Ok(advice) => {
                let mut session = self.session.lock().unwrap();
                if session.complete_advice(requested_at, advice.clone()) {
                    Ok(CallToolResult::success(vec![Content::text(render_advice(
                        &advice,
                    ))]))
                } else {
                    // Stale: the walkthrough navigated away mid-flight
                    Ok(CallToolResult::success(vec![Content::text(
                        "The walkthrough moved to another page before the critique arrived, so it was discarded. Return to the Practise Lab and resubmit.",
                    )]))
                }
            }
            Err(e) => {
                self.session.lock().unwrap().fail_advice();
                Ok(CallToolResult::error(vec![Content::text(format!(
                    "Failed to get a coaching critique: {e}. Please resubmit."
                ))]))
            }
        }
    }

    #[tool(description = "Show the coaching critique held for the current step, if any")]
    fn read_coaching(&self) -> Result<CallToolResult, McpError> {
        let session = self.session.lock().unwrap();
        let text = match session.advice() {
            Some(advice) => render_advice(advice),
            None if session.awaiting_advice() => {
                "A coaching request is in flight; check again shortly.".to_string()
            }
            None => "No critique held. Submit a draft with get_coaching on the Practise Lab page."
                .to_string(),
        };
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Show the AI coach configuration (the API key is masked)")]
    fn get_ai_settings(&self) -> Result<CallToolResult, McpError> {
        let settings = self.settings.lock().unwrap().clone();
        let configured = reflecthe_core::ai_configured(&settings);
        let val = serde_json::json!({
            "provider": settings.provider,
            "model": settings.model,
            "hasKey": !settings.api_key.is_empty(),
            "configured": configured,
        });
        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&val).unwrap_or_default(),
        )]))
    }

    #[tool(description = "Save the AI coach configuration. An empty API key keeps the existing one.")]
    fn save_ai_settings(
        &self,
        Parameters(req): Parameters<SaveAiSettingsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let mut settings = self.settings.lock().unwrap();
        settings.provider = req.provider;
        settings.model = req.model;
        if !req.api_key.is_empty() {
            settings.api_key = req.api_key;
        }
        match reflecthe_core::write_settings(&settings) {
            Ok(()) => Ok(CallToolResult::success(vec![Content::text(
                "AI settings saved.",
            )])),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(e)])),
        }
    }
}

#[tool_handler]
impl ServerHandler for WalkthroughServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

const INSTRUCTIONS: &str = r#"ReflectHE — a guided walkthrough of reflective practice for higher-education staff.

Ten pages in a fixed order: Welcome, the PSF 2023 framework, five reflective models (Brookfield, Gibbs, Schön, Rolfe, Kolb), case studies, the AI Practise Lab, and references. Use continue_walkthrough / go_back / go_to_step to navigate (navigating resets stage selections and any held critique), read_step to view a page, select_stage to open a stage's critical questions on a model page, and filter_case_studies on the Case Studies page.

The Practise Lab accepts a role/discipline and a free-text reflection draft via get_coaching and returns a coaching critique: an analysis of reflection depth, the PSF dimension codes evidenced or missing, and 3-4 coaching questions. The coach never rewrites the user's text. Configure a provider with save_ai_settings before using it."#;

// --- Step resolution and rendering helpers ---

/// Resolve a user-supplied step reference: ordinal first, then a
/// case-insensitive label match.
fn resolve_step(input: &str) -> Option<Step> {
    let trimmed = input.trim();
    if let Ok(n) = trimmed.parse::<usize>() {
        return Step::from_ordinal(n);
    }
    let lowered = trimmed.to_lowercase();
    Step::ALL
        .iter()
        .find(|s| s.label().to_lowercase() == lowered)
        .copied()
}

fn step_indicator(session: &Session) -> String {
    let step = session.step();
    let mut out = format!(
        "Step {} of {}: {}",
        step.ordinal() + 1,
        STEP_COUNT,
        step.label()
    );
    if step.is_initial() {
        out.push_str(" (Back disabled)");
    }
    if step.is_terminal() {
        out.push_str(" (Continue disabled; go_to_step 0 returns to the start)");
    }
    out
}

fn render_step(session: &Session) -> String {
    let step = session.step();
    let mut out = String::with_capacity(2048);
    out.push_str(&step_indicator(session));
    out.push_str("\n\n");

    match step {
        Step::Intro => {
            out.push_str(
                "Reflective Practices\n\
                 A walkthrough of reflective-practice models for higher-education staff, \
                 mapped to the PSF 2023 professional standards. Continue to begin.",
            );
        }
        Step::Framework => render_framework(&mut out),
        Step::Brookfield | Step::Gibbs | Step::Schon | Step::Rolfe | Step::Kolb => {
            // reflective_model is Some for exactly these steps
            let model = step.reflective_model().expect("model page");
            render_model_page(&mut out, session, model);
        }
        Step::Examples => render_case_studies(&mut out, session),
        Step::AiLab => render_ai_lab(&mut out, session),
        Step::Resources => render_readings(&mut out),
    }
    out
}

fn render_framework(out: &mut String) {
    out.push_str("PSF 2023: fifteen dimensions in three families.\n");
    for (family, dimensions) in content::psf_families() {
        out.push('\n');
        out.push_str(family);
        out.push('\n');
        for dim in dimensions {
            out.push_str("  ");
            out.push_str(dim.code);
            out.push_str(": ");
            out.push_str(dim.title);
            out.push('\n');
        }
    }
}

fn render_model_page(out: &mut String, session: &Session, model: ModelKind) {
    out.push_str(model.title());
    out.push('\n');
    let connection = content::psf_connection(model);
    out.push_str(connection.title);
    out.push_str("\n");
    out.push_str(connection.body);
    out.push_str("\n\nStages (select_stage to open one):\n");
    for stage in content::stages_for(model) {
        out.push_str("  [");
        out.push_str(stage.id);
        out.push_str("] ");
        out.push_str(stage.title);
        out.push_str(" — ");
        out.push_str(stage.subtitle);
        out.push('\n');
    }
    if let Some(stage) = session.selection(model) {
        out.push('\n');
        out.push_str(&render_stage(stage));
    }
}

fn render_stage(stage: &reflecthe_core::StageDetail) -> String {
    let mut out = String::with_capacity(512);
    out.push_str(stage.title);
    out.push_str(" — ");
    out.push_str(stage.subtitle);
    out.push('\n');
    out.push_str(stage.description);
    out.push_str("\n\nCritical reflective questions:\n");
    for q in stage.questions {
        out.push_str("  - ");
        out.push_str(q);
        out.push('\n');
    }
    out.push_str("PSF mapping: ");
    out.push_str(&stage.psf_mapping.join(", "));
    out
}

fn render_case_studies(out: &mut String, session: &Session) {
    let filter = session
        .role_filter()
        .map(|r| r.label())
        .unwrap_or("All");
    out.push_str(&format!(
        "PSF 2023 Case Studies (filter: {filter} — change with filter_case_studies)\n"
    ));
    let studies = session.case_studies();
    if studies.is_empty() {
        out.push_str("\nNo examples found for this role.\n");
        return;
    }
    for study in studies {
        out.push('\n');
        out.push_str(study.role.label());
        out.push_str(": ");
        out.push_str(study.title);
        out.push_str("\n  The scenario: ");
        out.push_str(study.scenario);
        out.push_str("\n  The reflection: ");
        out.push_str(study.reflection);
        out.push('\n');
    }
}

fn render_ai_lab(out: &mut String, session: &Session) {
    out.push_str(
        "PSF 2023 Practise Lab\n\
         Get a coaching critique on your reflection based on the models and PSF 2023.\n\
         Write freely about a teaching or support experience; the coach critiques the \
         reflection and helps align it with the PSF and deeper reflective models. Don't \
         worry about perfect phrasing; focus on the 'What', 'So What', and 'Now What'.\n\n\
         Submit with get_coaching (role/discipline + experience text, both required).\n",
    );
    if session.awaiting_advice() {
        out.push_str("\nA coaching request is in flight.\n");
    }
    if let Some(advice) = session.advice() {
        out.push('\n');
        out.push_str(&render_advice(advice));
    }
}

fn render_advice(advice: &Advice) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str("Coaching Feedback & Critique\n");
    out.push_str(&advice.critique);
    out.push_str("\n\nPSF 2023 Dimension Mapping:\n");
    for tag in &advice.dimension_tags {
        out.push_str("  - ");
        out.push_str(tag);
        out.push('\n');
    }
    out.push_str("\nCoaching questions:\n");
    for question in &advice.coaching_questions {
        out.push_str("  - ");
        out.push_str(question);
        out.push('\n');
    }
    out
}

fn render_readings(out: &mut String) {
    out.push_str("References and further reading:\n");
    for reading in content::READINGS {
        out.push('\n');
        out.push_str(reading.author);
        out.push_str(" (");
        out.push_str(reading.year);
        out.push_str(") ");
        out.push_str(reading.title);
        out.push('\n');
        out.push_str("  ");
        out.push_str(reading.summary);
        out.push('\n');
        out.push_str("  ");
        out.push_str(reading.url);
        out.push('\n');
    }
    out.push_str("\nThat's the end of the walkthrough — go_to_step 0 to return to the start.");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Handle `reflecthe-mcp init` subcommand
    if std::env::args().nth(1).as_deref() == Some("init") {
        return init_project();
    }

    let service = WalkthroughServer::new()
        .serve(rmcp::transport::io::stdio())
        .await
        .inspect_err(|e| eprintln!("MCP server error: {}", e))?;
    service.waiting().await?;
    Ok(())
}

/// Write project-scoped MCP config files in the current directory so that
/// Claude Code and/or Codex discover reflecthe-mcp when working here.
/// Only writes config for tools that are actually installed.
fn init_project() -> Result<(), Box<dyn std::error::Error>> {
    let binary_path = std::env::current_exe()?
        .canonicalize()?
        .to_string_lossy()
        .to_string();

    let cwd = std::env::current_dir()?;

    let has_claude = on_path("claude");
    let has_codex = on_path("codex");

    if !has_claude && !has_codex {
        eprintln!("Neither `claude` nor `codex` found in PATH.");
        eprintln!("Install Claude Code or OpenAI Codex first, then re-run `reflecthe-mcp init`.");
        std::process::exit(1);
    }

    if has_claude {
        init_claude_code(&cwd, &binary_path)?;
    }
    if has_codex {
        init_codex(&cwd, &binary_path)?;
    }

    let tools: Vec<&str> = [
        if has_claude { Some("Claude Code") } else { None },
        if has_codex { Some("Codex") } else { None },
    ]
    .into_iter()
    .flatten()
    .collect();
    eprintln!("\nDone. {} will use reflecthe in this project.", tools.join(" and "));

    Ok(())
}

fn on_path(name: &str) -> bool {
    std::env::var_os("PATH")
        .map(|paths| {
            std::env::split_paths(&paths).any(|dir| {
                let candidate = dir.join(name);
                candidate.is_file() || dir.join(format!("{name}.exe")).is_file()
            })
        })
        .unwrap_or(false)
}

/// Write .mcp.json for Claude Code, merging with any existing config.
fn init_claude_code(
    cwd: &std::path::Path,
    binary_path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mcp_json_path = cwd.join(".mcp.json");
    let mut root: serde_json::Value = if mcp_json_path.exists() {
        let contents = std::fs::read_to_string(&mcp_json_path)?;
        serde_json::from_str(&contents).unwrap_or_else(|_| serde_json::json!({}))
    } else {
        serde_json::json!({})
    };

    if !root.get("mcpServers").is_some_and(|v| v.is_object()) {
        root["mcpServers"] = serde_json::json!({});
    }
    root["mcpServers"]["reflecthe"] = serde_json::json!({
        "type": "stdio",
        "command": binary_path,
        "args": [],
    });

    std::fs::write(&mcp_json_path, serde_json::to_string_pretty(&root)?)?;
    eprintln!("Wrote {}", mcp_json_path.display());
    Ok(())
}

/// Write .codex/config.toml for OpenAI Codex, merging with any existing config.
fn init_codex(
    cwd: &std::path::Path,
    binary_path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let codex_dir = cwd.join(".codex");
    let config_toml_path = codex_dir.join("config.toml");

    let mut doc: toml_edit::DocumentMut = if config_toml_path.exists() {
        std::fs::read_to_string(&config_toml_path)?
            .parse()
            .unwrap_or_default()
    } else {
        toml_edit::DocumentMut::new()
    };

    if !doc.contains_table("mcp_servers") {
        doc["mcp_servers"] = toml_edit::Item::Table(toml_edit::Table::new());
    }

    let mut server = toml_edit::Table::new();
    server.insert("command", toml_edit::value(binary_path));
    server.insert("args", toml_edit::value(toml_edit::Array::new()));
    doc["mcp_servers"]["reflecthe"] = toml_edit::Item::Table(server);

    std::fs::create_dir_all(&codex_dir)?;
    std::fs::write(&config_toml_path, doc.to_string())?;
    eprintln!("Wrote {}", config_toml_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_steps_by_ordinal_and_label() {
        assert_eq!(resolve_step("0"), Some(Step::Intro));
        assert_eq!(resolve_step("9"), Some(Step::Resources));
        assert_eq!(resolve_step("10"), None);
        assert_eq!(resolve_step("gibbs"), Some(Step::Gibbs));
        assert_eq!(resolve_step("Practise Lab"), Some(Step::AiLab));
        assert_eq!(resolve_step("  references "), Some(Step::Resources));
        assert_eq!(resolve_step("quiz"), None);
    }

    #[test]
    fn rendered_model_page_includes_selection_detail() {
        let mut session = Session::new();
        session.go_to(Step::Gibbs);
        let before = render_step(&session);
        assert!(before.contains("[description]"));
        assert!(!before.contains("Critical reflective questions"));

        session.select_stage(ModelKind::Gibbs, "description").unwrap();
        let after = render_step(&session);
        assert!(after.contains("Critical reflective questions"));
        assert!(after.contains("What exactly happened"));
    }

    #[test]
    fn rendered_examples_page_respects_the_filter() {
        let mut session = Session::new();
        session.go_to(Step::Examples);
        session.set_role_filter(Some(StaffRole::TechnicalServices));
        let page = {
            let mut out = String::new();
            render_case_studies(&mut out, &session);
            out
        };
        assert!(page.contains("Technical Services"));
        assert!(!page.contains("Programme Leader"));
    }
}
