use crate::confirm::checker::collect_notices;
use crate::confirm::interceptor::{ConfirmWidget, FormHost, SubmitEvent, WidgetServices};
use crate::dialog::dialog_model::ConsoleDialogFactory;
use crate::dialog::markup::HtmlNoticeRenderer;
use crate::form::parse::parse_page_str;
use crate::notify::notifier::ConsoleNotifier;
use crate::strings::resolver::{HttpResolver, StringResolver, TableResolver};
use crate::trace::logger::TraceLogger;

// ============================================================================
// String source selection
// ============================================================================

/// Build a string resolver from resolved CLI/config values.
pub fn build_resolver(
    source: &str,
    pack: Option<&str>,
    endpoint: Option<&str>,
    language: &str,
) -> Result<Box<dyn StringResolver>, Box<dyn std::error::Error>> {
    match source {
        "builtin" => Ok(Box::new(TableResolver::builtin())),
        "pack" => {
            let path = pack.ok_or("--string-pack is required with string source 'pack'")?;
            let yaml = std::fs::read_to_string(path)?;
            let mut resolver = TableResolver::builtin();
            resolver.load_pack(&yaml)?;
            Ok(Box::new(resolver))
        }
        "http" => {
            let endpoint =
                endpoint.ok_or("--strings-endpoint is required with string source 'http'")?;
            Ok(Box::new(HttpResolver::new(endpoint, language)))
        }
        other => Err(format!("Unknown string source: {}", other).into()),
    }
}

// ============================================================================
// check subcommand
// ============================================================================

/// Print changed-field labels and return whether any field changed.
pub fn cmd_check(
    snapshot_path: &str,
    form_id: &str,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(snapshot_path)?;
    let page = parse_page_str(&raw)?;

    if verbose > 0 {
        eprintln!(
            "Loaded snapshot '{}' ({} forms)",
            snapshot_path,
            page.forms.len()
        );
    }

    let form = page
        .form(form_id)
        .ok_or_else(|| format!("Form '{}' not found in snapshot", form_id))?;
    let notices = collect_notices(form)?;

    if notices.is_empty() {
        println!("No changed fields.");
        return Ok(false);
    }

    println!("Changed fields:");
    for notice in &notices {
        println!("  - {}", notice);
    }
    Ok(true)
}

// ============================================================================
// flow subcommand
// ============================================================================

struct ConsoleFormHost {
    form_id: String,
}

impl FormHost for ConsoleFormHost {
    fn submit_native(&mut self) {
        println!("Submitting form '{}'", self.form_id);
    }
}

/// Run the full interception flow: attach, intercept a submit, present the
/// dialog on the terminal, then confirm or cancel.
pub fn cmd_flow(
    snapshot_path: &str,
    form_id: &str,
    confirm: bool,
    trace_path: Option<&str>,
    strings: Box<dyn StringResolver>,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(snapshot_path)?;
    let page = parse_page_str(&raw)?;

    let tracer = match trace_path {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };

    let services = WidgetServices {
        factory: Box::new(ConsoleDialogFactory),
        strings,
        notifier: Box::new(ConsoleNotifier),
        renderer: Box::new(HtmlNoticeRenderer),
    };

    let mut widget = ConfirmWidget::attach(&page, form_id, services, tracer)?;

    // attach() verified the form exists
    let form = page
        .form(form_id)
        .ok_or_else(|| format!("Form '{}' not found in snapshot", form_id))?;

    let mut event = SubmitEvent::new();
    let disposition = widget.on_submit(&mut event, form)?;

    if verbose > 0 {
        eprintln!("Disposition: {:?}", disposition);
    }

    if confirm {
        let mut host = ConsoleFormHost {
            form_id: form_id.to_string(),
        };
        widget.on_dialog_confirmed(&mut host);
    } else {
        widget.on_dialog_cancelled();
        println!("Submission cancelled.");
    }

    Ok(())
}
