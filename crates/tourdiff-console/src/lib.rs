//! Colorful console output for decomposition events.
//!
//! Provides a custom `tracing` layer that formats tourdiff events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (decomposition start/end)
//! - **DEBUG**: One line per island and per junction split
//! - **TRACE**: Blocked junction branches

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes console output at INFO level.
///
/// Safe to call multiple times - only the first call has effect.
/// `RUST_LOG` overrides the level.
pub fn init() {
    init_with_level(LevelFilter::INFO);
}

/// Initializes console output with the given default level.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init_with_level(level: LevelFilter) {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);
        print_banner();

        let filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(DecomposeConsoleLayer)
            .try_init();
    });
}

// Returns elapsed time since initialization.
fn elapsed_secs() -> f64 {
    EPOCH
        .get()
        .map_or(0.0, |epoch| epoch.elapsed().as_secs_f64())
}

fn print_banner() {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(
        stderr,
        "{} {}",
        "tourdiff".bright_cyan().bold(),
        format!("v{} - disjoint k-opt moves between tours", VERSION).bright_white()
    );
    let _ = stderr.flush();
}

/// A tracing layer that formats decomposition events with colors.
///
/// Writes to stderr so that JSON printed on stdout stays clean.
pub struct DecomposeConsoleLayer;

impl<S: Subscriber> Layer<S> for DecomposeConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        // Accept events from decomposition modules
        if !target.starts_with("tourdiff_split") && !target.starts_with("tourdiff::") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    path: Option<String>,
    total_k: Option<u64>,
    k: Option<u64>,
    edge_count: Option<u64>,
    island_index: Option<u64>,
    island_count: Option<u64>,
    move_count: Option<u64>,
    junction: Option<u64>,
    blocked_at: Option<u64>,
    duration_ms: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "message" => self.message = Some(s),
            "path" => self.path = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "total_k" => self.total_k = Some(value),
            "k" => self.k = Some(value),
            "edge_count" => self.edge_count = Some(value),
            "island_index" => self.island_index = Some(value),
            "island_count" => self.island_count = Some(value),
            "move_count" => self.move_count = Some(value),
            "junction" => self.junction = Some(value),
            "blocked_at" => self.blocked_at = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "message" => self.message = Some(value.to_string()),
            "path" => self.path = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "decompose_start" => format_decompose_start(v),
        "decompose_end" => format_decompose_end(v),
        "island" => format_island(v),
        "junction_split" => format_junction_split(v),
        "junction_unresolved" | "junction_odd_cycle" => format_junction_kept(v, event),
        "branch_blocked" => format_branch_blocked(v, level),
        "moves_written" => format_moves_written(v),
        _ => format_message(v, level),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_count(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

fn format_decompose_start(v: &EventVisitor) -> String {
    format!(
        "{} {} Decomposing │ {}-opt difference │ {} edges",
        format_elapsed(),
        "▶".bright_green().bold(),
        format_count(v.total_k.unwrap_or(0)).bright_yellow(),
        format_count(v.edge_count.unwrap_or(0)).bright_yellow(),
    )
}

fn format_decompose_end(v: &EventVisitor) -> String {
    format!(
        "{} {} Decomposition complete │ {} islands │ {} moves │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_count(v.island_count.unwrap_or(0)).white(),
        format_count(v.move_count.unwrap_or(0)).bright_magenta().bold(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
    )
}

fn format_island(v: &EventVisitor) -> String {
    format!(
        "{} {} Island {:>6} │ {}-opt │ {} edges",
        format_elapsed(),
        "◆".bright_blue(),
        format_count(v.island_index.unwrap_or(0)).white(),
        format_count(v.k.unwrap_or(0)).bright_yellow(),
        format_count(v.edge_count.unwrap_or(0)).bright_black(),
    )
}

fn format_junction_split(v: &EventVisitor) -> String {
    format!(
        "{} {} Junction {} │ split off {}-opt",
        format_elapsed(),
        "✂".bright_green(),
        format_count(v.junction.unwrap_or(0)).white().bold(),
        format_count(v.k.unwrap_or(0)).bright_yellow(),
    )
}

fn format_junction_kept(v: &EventVisitor, event: &str) -> String {
    let reason = if event == "junction_odd_cycle" {
        "odd cycle"
    } else {
        "no closed cycle"
    };
    format!(
        "{} {} Junction {} │ {}",
        format_elapsed(),
        "·".bright_black(),
        format_count(v.junction.unwrap_or(0)).white(),
        reason.bright_black(),
    )
}

fn format_branch_blocked(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }
    format!(
        "{} {} Junction {} │ branch blocked at {}",
        format_elapsed(),
        "✗".bright_red(),
        format_count(v.junction.unwrap_or(0)).bright_black(),
        format_count(v.blocked_at.unwrap_or(0)).bright_black(),
    )
}

fn format_moves_written(v: &EventVisitor) -> String {
    format!(
        "{} {} Wrote {} moves │ {}",
        format_elapsed(),
        "✎".bright_green(),
        format_count(v.move_count.unwrap_or(0)).bright_magenta(),
        v.path.as_deref().unwrap_or("?").white(),
    )
}

fn format_message(v: &EventVisitor, level: Level) -> String {
    let Some(message) = v.message.as_deref() else {
        return String::new();
    };
    let tag = match level {
        Level::ERROR => "ERROR".bright_red().bold().to_string(),
        Level::WARN => "WARN".yellow().bold().to_string(),
        _ => "INFO".bright_blue().to_string(),
    };
    format!("{} {} {}", format_elapsed(), tag, message)
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_unknown_event_without_message_is_silent() {
        let v = EventVisitor {
            event: Some("other".to_string()),
            ..Default::default()
        };
        assert!(format_event(&v, Level::INFO).is_empty());
    }

    #[test]
    fn test_branch_blocked_only_at_trace() {
        let v = EventVisitor {
            event: Some("branch_blocked".to_string()),
            junction: Some(5),
            blocked_at: Some(9),
            ..Default::default()
        };
        assert!(format_event(&v, Level::DEBUG).is_empty());
        assert!(format_event(&v, Level::TRACE).contains("blocked"));
    }

    #[test]
    fn test_island_line_mentions_k() {
        let v = EventVisitor {
            event: Some("island".to_string()),
            island_index: Some(0),
            k: Some(12),
            edge_count: Some(24),
            ..Default::default()
        };
        assert!(format_event(&v, Level::DEBUG).contains("12"));
    }
}
