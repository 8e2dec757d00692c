/// GL debug output - KHR_debug callback with per-severity statistics
///
/// Driver messages are forwarded to the engine logger and counted.
/// Only compiled with the `gl-debug` feature.

use colored::*;
use glow::HasContext;
use hello_gl_engine::{engine_debug, engine_error, engine_info, engine_warn};
use std::sync::atomic::{AtomicU32, Ordering};

/// Global driver message statistics
static DEBUG_STATS: DebugStatsTracker = DebugStatsTracker::new();

/// Driver message counts per severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebugStats {
    pub high: u32,
    pub medium: u32,
    pub low: u32,
    pub notification: u32,
}

impl DebugStats {
    pub fn total(&self) -> u32 {
        self.high + self.medium + self.low + self.notification
    }
}

struct DebugStatsTracker {
    high: AtomicU32,
    medium: AtomicU32,
    low: AtomicU32,
    notification: AtomicU32,
}

impl DebugStatsTracker {
    const fn new() -> Self {
        Self {
            high: AtomicU32::new(0),
            medium: AtomicU32::new(0),
            low: AtomicU32::new(0),
            notification: AtomicU32::new(0),
        }
    }

    fn counter(&self, severity: u32) -> &AtomicU32 {
        match severity {
            glow::DEBUG_SEVERITY_HIGH => &self.high,
            glow::DEBUG_SEVERITY_MEDIUM => &self.medium,
            glow::DEBUG_SEVERITY_LOW => &self.low,
            _ => &self.notification,
        }
    }

    fn get_stats(&self) -> DebugStats {
        DebugStats {
            high: self.high.load(Ordering::Relaxed),
            medium: self.medium.load(Ordering::Relaxed),
            low: self.low.load(Ordering::Relaxed),
            notification: self.notification.load(Ordering::Relaxed),
        }
    }

    fn reset(&self) {
        self.high.store(0, Ordering::Relaxed);
        self.medium.store(0, Ordering::Relaxed);
        self.low.store(0, Ordering::Relaxed);
        self.notification.store(0, Ordering::Relaxed);
    }
}

fn message_type_name(gltype: u32) -> &'static str {
    match gltype {
        glow::DEBUG_TYPE_ERROR => "Error",
        glow::DEBUG_TYPE_DEPRECATED_BEHAVIOR => "Deprecated",
        glow::DEBUG_TYPE_UNDEFINED_BEHAVIOR => "Undefined",
        glow::DEBUG_TYPE_PORTABILITY => "Portability",
        glow::DEBUG_TYPE_PERFORMANCE => "Performance",
        _ => "General",
    }
}

/// Install the callback on a context that supports debug output
///
/// Returns `false` when the context has no debug output.
pub(crate) fn install(gl: &mut glow::Context) -> bool {
    if !gl.supports_debug() {
        engine_warn!("hellogl::opengl::debug", "Context does not support debug output");
        return false;
    }

    DEBUG_STATS.reset();
    unsafe {
        gl.enable(glow::DEBUG_OUTPUT);
        gl.enable(glow::DEBUG_OUTPUT_SYNCHRONOUS);
        gl.debug_message_callback(|_source, gltype, id, severity, message| {
            DEBUG_STATS.counter(severity).fetch_add(1, Ordering::Relaxed);
            let kind = message_type_name(gltype);
            match severity {
                glow::DEBUG_SEVERITY_HIGH => {
                    engine_error!("hellogl::opengl::debug", "[{}] #{} {}", kind, id, message)
                }
                glow::DEBUG_SEVERITY_MEDIUM => {
                    engine_warn!("hellogl::opengl::debug", "[{}] #{} {}", kind, id, message)
                }
                glow::DEBUG_SEVERITY_LOW => {
                    engine_info!("hellogl::opengl::debug", "[{}] #{} {}", kind, id, message)
                }
                _ => engine_debug!("hellogl::opengl::debug", "[{}] #{} {}", kind, id, message),
            }
        });
    }
    true
}

/// Get current driver message statistics
pub fn get_debug_stats() -> DebugStats {
    DEBUG_STATS.get_stats()
}

/// Print driver message statistics report
pub fn print_debug_stats_report() {
    let stats = get_debug_stats();

    if stats.total() == 0 {
        println!("\n{}", "✓ No GL debug messages".green().bold());
        return;
    }

    println!("\n{}", "=== GL Debug Output Report ===".bright_blue().bold());
    if stats.high > 0 {
        println!("  {} {}", "High:".red().bold(), stats.high);
    }
    if stats.medium > 0 {
        println!("  {} {}", "Medium:".yellow().bold(), stats.medium);
    }
    if stats.low > 0 {
        println!("  {} {}", "Low:".cyan(), stats.low);
    }
    if stats.notification > 0 {
        println!("  {} {}", "Notification:".bright_black(), stats.notification);
    }
    println!("  {} {}", "Total:".white().bold(), stats.total());
    println!("{}\n", "==============================".bright_blue().bold());
}
