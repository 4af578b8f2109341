//! Panic hook that reports what the analysis was doing.
//!
//! The engine does not panic on bad input, so a panic is a bug. The report
//! names the phase, the module being analyzed and the active tracing span
//! so that a bug report can be reproduced with the right input.

use super::context::{get_current_context, AnalysisContext};
use std::panic::PanicHookInfo;
use tracing::Span;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install the crash report hook; call early in `main`
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("{}", crash_report(info, &get_current_context()));
        if std::env::var_os("RUST_BACKTRACE").is_some() {
            eprintln!("{}", std::backtrace::Backtrace::capture());
        } else {
            eprintln!("Run with RUST_BACKTRACE=1 for a stack trace");
        }
    }));
}

fn crash_report(info: &PanicHookInfo<'_>, context: &AnalysisContext) -> String {
    let mut lines = vec![
        format!("couplingmap {VERSION} crashed ({})", std::env::consts::OS),
        format!("  panic: {}", panic_message(info)),
    ];
    if let Some(location) = info.location() {
        lines.push(format!(
            "  at: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        ));
    }
    lines.extend(context_lines(context));
    if let Some(metadata) = Span::current().metadata() {
        lines.push(format!("  span: {}", metadata.name()));
    }
    lines.join("\n")
}

fn context_lines(context: &AnalysisContext) -> Vec<String> {
    let mut lines = Vec::new();
    match context.phase {
        Some(phase) => lines.push(format!("  phase: {phase}")),
        None => lines.push("  phase: (not set, crashed before analysis started)".to_string()),
    }
    if let Some(module) = &context.current_module {
        lines.push(format!("  module: {module}"));
    }
    lines
}

fn panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
