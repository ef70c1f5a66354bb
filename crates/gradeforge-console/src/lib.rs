//! Colorful console output for GradeForge solver events.
//!
//! Provides a custom `tracing` layer that formats solver and planner events
//! with colors. Events are recognized by their `event` field.
//!
//! ## Log Levels
//!
//! - **INFO**: solve start/end, planner results
//! - **DEBUG**: one line per search layer

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default filter when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "gradeforge_solver=info";

const BOX_WIDTH: usize = 58;

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the GradeForge banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(GradeConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let banner = r#"
  ____               _      _____
 / ___|_ __ __ _  __| | ___|  ___|__  _ __ __ _  ___
| |  _| '__/ _` |/ _` |/ _ \ |_ / _ \| '__/ _` |/ _ \
| |_| | | | (_| | (_| |  __/  _| (_) | | | (_| |  __/
 \____|_|  \__,_|\__,_|\___|_|  \___/|_|  \__, |\___|
                                          |___/
"#;

    let version_line = format!("                v{VERSION} - Minimum Grade Planner\n");

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats GradeForge events with colors.
pub struct GradeConsoleLayer;

impl<S: Subscriber> Layer<S> for GradeConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("gradeforge_solver") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{output}");
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    known_count: Option<u64>,
    unknown_count: Option<u64>,
    reachable: Option<u64>,
    depth: Option<u64>,
    semester: Option<u64>,
    feasible: Option<bool>,
    searched: Option<bool>,
    target: Option<String>,
    needed: Option<String>,
    unknown_points: Option<String>,
    average: Option<String>,
    shortfall: Option<String>,
    course: Option<String>,
    credits: Option<String>,
    branch: Option<String>,
    required_spi: Option<String>,
}

impl EventVisitor {
    fn text_slot(&mut self, name: &str) -> Option<&mut Option<String>> {
        match name {
            "event" => Some(&mut self.event),
            "target" => Some(&mut self.target),
            "needed" => Some(&mut self.needed),
            "unknown_points" => Some(&mut self.unknown_points),
            "average" => Some(&mut self.average),
            "shortfall" => Some(&mut self.shortfall),
            "course" => Some(&mut self.course),
            "credits" => Some(&mut self.credits),
            "branch" => Some(&mut self.branch),
            "required_spi" => Some(&mut self.required_spi),
            _ => None,
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if let Some(slot) = self.text_slot(field.name()) {
            *slot = Some(format!("{value:?}").trim_matches('"').to_string());
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if let Some(slot) = self.text_slot(field.name()) {
            *slot = Some(value.to_string());
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "known_count" => self.known_count = Some(value),
            "unknown_count" => self.unknown_count = Some(value),
            "reachable" => self.reachable = Some(value),
            "depth" => self.depth = Some(value),
            "semester" => self.semester = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        if let Ok(value) = u64::try_from(value) {
            self.record_u64(field, value);
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "feasible" => self.feasible = Some(value),
            "searched" => self.searched = Some(value),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref() {
        Some("solve_start") => format_solve_start(v),
        Some("layer") => format_layer(v),
        Some("solve_end") => format_solve_end(v),
        Some("plan") => format_plan(v),
        _ => String::new(),
    }
}

fn format_solve_start(v: &EventVisitor) -> String {
    let unknown_count = v.unknown_count.unwrap_or(0);

    format!(
        "{} {} {} known courses ({}), unknown courses ({}), target ({}), needed points ({}), search space ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Solver]".bright_cyan(),
        v.known_count.unwrap_or(0).yellow(),
        unknown_count.bright_yellow(),
        v.target.as_deref().unwrap_or("N/A").bright_white().bold(),
        format_points(v.needed.as_deref().unwrap_or("0")),
        search_space(unknown_count).bright_magenta()
    )
}

fn format_layer(v: &EventVisitor) -> String {
    format!(
        "    {} Layer {:>3} | {} ({} cr) | {} reachable totals",
        "->".bright_blue(),
        v.depth.unwrap_or(0).white(),
        v.course.as_deref().unwrap_or("?").bright_white(),
        v.credits.as_deref().unwrap_or("?"),
        v.reachable
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_magenta()
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let feasible = v.feasible.unwrap_or(false);

    let detail = if feasible {
        format!(
            "points ({}), average ({})",
            format_points(v.unknown_points.as_deref().unwrap_or("0")),
            v.average.as_deref().unwrap_or("N/A").bright_white().bold()
        )
    } else {
        format!(
            "short by ({}) points",
            v.shortfall.as_deref().unwrap_or("N/A").bright_red()
        )
    };
    let search = match (v.searched, v.reachable) {
        (Some(false), _) => "target already met, no search".to_string(),
        (_, Some(reachable)) => format!(
            "reachable totals ({})",
            reachable.to_formatted_string(&Locale::en)
        ),
        _ => String::new(),
    };

    let mut output = format!(
        "{} {} {} Solving ended: {}, {}",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Solver]".bright_cyan(),
        detail,
        search.white()
    );

    output.push_str("\n\n");
    let status = if feasible {
        "GRADE PLAN FOUND"
    } else {
        "TARGET UNREACHABLE"
    };
    let value = if feasible {
        ("Average:", v.average.as_deref().unwrap_or("N/A"))
    } else {
        ("Shortfall:", v.shortfall.as_deref().unwrap_or("N/A"))
    };
    output.push_str(&summary_box(status, feasible, &[value]));

    output
}

fn format_plan(v: &EventVisitor) -> String {
    let status = match v.feasible {
        Some(true) => "feasible".bright_green().to_string(),
        _ => "infeasible".bright_red().to_string(),
    };

    format!(
        "{} {} {} {} semester ({}): required SPI ({}), fixed courses ({}), planned courses ({}), {}",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Planner]".bright_cyan(),
        v.branch.as_deref().unwrap_or("?").white().bold(),
        v.semester.unwrap_or(0).yellow(),
        format_index(v.required_spi.as_deref().unwrap_or("N/A")),
        v.known_count.unwrap_or(0),
        v.unknown_count.unwrap_or(0),
        status
    )
}

fn summary_box(status: &str, good: bool, rows: &[(&str, &str)]) -> String {
    let rule = "═".repeat(BOX_WIDTH);
    let mut output = String::new();

    output.push_str(&format!("╔{rule}╗").bright_cyan().to_string());
    output.push('\n');

    let label = format!("  {status}  ");
    let padding = BOX_WIDTH.saturating_sub(label.len());
    let left_pad = padding / 2;
    let right_pad = padding - left_pad;
    let label = if good {
        label.bright_green().bold().to_string()
    } else {
        label.bright_red().bold().to_string()
    };
    output.push_str(&format!(
        "{}{}{}{}{}",
        "║".bright_cyan(),
        " ".repeat(left_pad),
        label,
        " ".repeat(right_pad),
        "║".bright_cyan()
    ));
    output.push('\n');

    output.push_str(&format!("╠{rule}╣").bright_cyan().to_string());
    output.push('\n');

    for (name, value) in rows {
        output.push_str(&format!(
            "{}  {:<18}{:>36}  {}",
            "║".bright_cyan(),
            name,
            value,
            "║".bright_cyan()
        ));
        output.push('\n');
    }

    output.push_str(&format!("╚{rule}╝").bright_cyan().to_string());
    output.push('\n');

    output
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}

fn format_points(points: &str) -> String {
    if points.starts_with('-') {
        points.bright_red().to_string()
    } else {
        points.bright_yellow().to_string()
    }
}

// Index values outside 0..=10 mean "already secured" or "out of reach".
fn format_index(index: &str) -> String {
    match index.parse::<f64>() {
        Ok(value) if value > 10.0 => index.bright_red().to_string(),
        Ok(value) if value <= 0.0 => index.bright_green().to_string(),
        Ok(_) => index.bright_yellow().to_string(),
        Err(_) => index.white().to_string(),
    }
}

// Upper bound of the brute-force space: 7 grades per unknown course.
fn search_space(unknown_count: u64) -> String {
    if unknown_count == 0 {
        return "1".to_string();
    }

    let log_scale = (unknown_count as f64) * 7f64.log10();
    let exponent = log_scale.floor() as i32;
    let mantissa = 10f64.powf(log_scale - exponent as f64);

    format!("{:.3} x 10^{}", mantissa, exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visitor(event: &str) -> EventVisitor {
        EventVisitor {
            event: Some(event.to_string()),
            ..EventVisitor::default()
        }
    }

    #[test]
    fn test_unknown_events_are_silent() {
        assert!(format_event(&EventVisitor::default()).is_empty());
        assert!(format_event(&visitor("something_else")).is_empty());
    }

    #[test]
    fn test_solve_start_lists_counts() {
        let v = EventVisitor {
            known_count: Some(2),
            unknown_count: Some(3),
            target: Some("8.5".to_string()),
            needed: Some("61.5".to_string()),
            ..visitor("solve_start")
        };
        let line = format_event(&v);
        assert!(line.contains("[Solver]"));
        assert!(line.contains("8.5"));
        assert!(line.contains("61.5"));
        assert!(line.contains("3.430 x 10^2"));
    }

    #[test]
    fn test_layer_groups_thousands() {
        let v = EventVisitor {
            depth: Some(4),
            course: Some("Algorithms".to_string()),
            credits: Some("4".to_string()),
            reachable: Some(12_345),
            ..visitor("layer")
        };
        let line = format_event(&v);
        assert!(line.contains("Algorithms"));
        assert!(line.contains("12,345"));
    }

    #[test]
    fn test_solve_end_reports_status() {
        let feasible = EventVisitor {
            feasible: Some(true),
            searched: Some(false),
            unknown_points: Some("16".to_string()),
            average: Some("7".to_string()),
            ..visitor("solve_end")
        };
        let output = format_event(&feasible);
        assert!(output.contains("GRADE PLAN FOUND"));
        assert!(output.contains("no search"));

        let infeasible = EventVisitor {
            feasible: Some(false),
            searched: Some(true),
            reachable: Some(8),
            shortfall: Some("2".to_string()),
            ..visitor("solve_end")
        };
        let output = format_event(&infeasible);
        assert!(output.contains("TARGET UNREACHABLE"));
        assert!(output.contains("reachable totals (8)"));
    }

    #[test]
    fn test_plan_line() {
        let v = EventVisitor {
            branch: Some("CSE".to_string()),
            semester: Some(3),
            required_spi: Some("7.29".to_string()),
            feasible: Some(true),
            ..visitor("plan")
        };
        let line = format_event(&v);
        assert!(line.contains("[Planner]"));
        assert!(line.contains("CSE"));
        assert!(line.contains("7.29"));
        assert!(line.contains("feasible"));
    }

    #[test]
    fn test_summary_box_rows_share_width() {
        let boxed = summary_box("GRADE PLAN FOUND", true, &[("Average:", "8.03")]);
        let lines: Vec<&str> = boxed.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[3].contains("Average:"));
        assert!(lines[3].contains("8.03"));
    }

    #[test]
    fn test_search_space() {
        assert_eq!(search_space(0), "1");
        assert_eq!(search_space(1), "7.000 x 10^0");
        assert_eq!(search_space(2), "4.900 x 10^1");
    }
}
