//! Progress reporting for panel queries

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use panel_application::ProgressNotifier;
use panel_domain::Phase;
use std::sync::Mutex;

/// Reports progress with one indicatif bar per phase
pub struct ProgressReporter {
    multi: MultiProgress,
    phase_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            phase_bar: Mutex::new(None),
        }
    }

    fn phase_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn phase_label(phase: &Phase) -> String {
        let step = match phase {
            Phase::FanOut => 1,
            Phase::Judge => 2,
        };
        format!("Phase {}: {}", step, phase.display_name())
    }

    fn status_line(provider: &str, success: bool) -> String {
        if success {
            format!("{} {}", "v".green(), provider)
        } else {
            format!("{} {}", "x".red(), provider)
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
        let pb = self.multi.add(ProgressBar::new(total_tasks as u64));
        pb.set_style(Self::phase_style());
        pb.set_prefix(Self::phase_label(phase));
        pb.set_message("Starting...");

        if let Ok(mut slot) = self.phase_bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_task_complete(&self, _phase: &Phase, provider: &str, success: bool) {
        if let Ok(slot) = self.phase_bar.lock() {
            if let Some(pb) = slot.as_ref() {
                pb.set_message(Self::status_line(provider, success));
                pb.inc(1);
            }
        }
    }

    fn on_phase_complete(&self, phase: &Phase) {
        let finished = self.phase_bar.lock().ok().and_then(|mut slot| slot.take());
        if let Some(pb) = finished {
            pb.finish_with_message(format!("{} complete!", phase.display_name().green()));
        }
    }
}

/// Simple text-based progress (no fancy UI), written to stderr
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
        eprintln!(
            "{} {} ({} tasks)",
            "->".cyan(),
            ProgressReporter::phase_label(phase).bold(),
            total_tasks
        );
    }

    fn on_task_complete(&self, _phase: &Phase, provider: &str, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), provider);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), provider);
        }
    }

    fn on_phase_complete(&self, _phase: &Phase) {
        eprintln!();
    }
}
