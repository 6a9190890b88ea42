// file: src/pipeline/progress.rs
// description: progress tracking and statistics reporting for index builds
// reference: uses indicatif for progress bars and tracks processing metrics

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    pub files_indexed: usize,
    pub documents_truncated: usize,
    pub untitled_documents: usize,
    pub total_bytes_read: u64,
    pub duration_ms: u64,
}

impl BuildStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files_per_second(&self) -> f64 {
        if self.duration_ms == 0 {
            return 0.0;
        }
        self.files_indexed as f64 * 1000.0 / self.duration_ms as f64
    }

    pub fn truncation_rate(&self) -> f64 {
        if self.files_indexed == 0 {
            return 0.0;
        }
        (self.documents_truncated as f64 / self.files_indexed as f64) * 100.0
    }
}

pub struct ProgressTracker {
    main_bar: ProgressBar,
    detail_bar: ProgressBar,
    files_indexed: Arc<AtomicUsize>,
    documents_truncated: Arc<AtomicUsize>,
    untitled_documents: Arc<AtomicUsize>,
    bytes_read: Arc<AtomicU64>,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn new(total_files: usize) -> Self {
        Self::with_color(total_files, true)
    }

    pub fn with_color(total_files: usize, colored: bool) -> Self {
        Self::build(MultiProgress::new(), total_files, colored)
    }

    /// Tracks counters without drawing anything.
    pub fn hidden(total_files: usize) -> Self {
        Self::build(
            MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
            total_files,
            false,
        )
    }

    fn build(multi_progress: MultiProgress, total_files: usize, colored: bool) -> Self {
        let main_bar = create_progress_bar(&multi_progress, total_files as u64, colored);
        let detail_bar = create_detail_bar(&multi_progress);

        Self {
            main_bar,
            detail_bar,
            files_indexed: Arc::new(AtomicUsize::new(0)),
            documents_truncated: Arc::new(AtomicUsize::new(0)),
            untitled_documents: Arc::new(AtomicUsize::new(0)),
            bytes_read: Arc::new(AtomicU64::new(0)),
            start_time: Instant::now(),
        }
    }

    pub fn inc_files_indexed(&self) {
        self.files_indexed.fetch_add(1, Ordering::SeqCst);
        self.main_bar.inc(1);
        self.update_detail_bar();
    }

    pub fn inc_truncated(&self) {
        self.documents_truncated.fetch_add(1, Ordering::SeqCst);
    }

    pub fn inc_untitled(&self) {
        self.untitled_documents.fetch_add(1, Ordering::SeqCst);
    }

    pub fn add_bytes_read(&self, bytes: u64) {
        self.bytes_read.fetch_add(bytes, Ordering::SeqCst);
    }

    pub fn set_message(&self, message: String) {
        self.main_bar.set_message(message);
    }

    pub fn finish(&self) {
        self.main_bar.finish_with_message("Indexing complete");
        self.detail_bar.finish_and_clear();
    }

    pub fn abandon(&self) {
        self.main_bar.abandon_with_message("Indexing aborted");
        self.detail_bar.finish_and_clear();
    }

    pub fn get_stats(&self) -> BuildStats {
        BuildStats {
            files_indexed: self.files_indexed.load(Ordering::SeqCst),
            documents_truncated: self.documents_truncated.load(Ordering::SeqCst),
            untitled_documents: self.untitled_documents.load(Ordering::SeqCst),
            total_bytes_read: self.bytes_read.load(Ordering::SeqCst),
            duration_ms: self.start_time.elapsed().as_millis() as u64,
        }
    }

    fn update_detail_bar(&self) {
        let truncated = self.documents_truncated.load(Ordering::SeqCst);
        let untitled = self.untitled_documents.load(Ordering::SeqCst);

        let message = format!("Truncated: {} | Untitled: {}", truncated, untitled);

        self.detail_bar.set_message(message);
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        if !self.main_bar.is_finished() {
            self.abandon();
        }
    }
}

fn create_progress_bar(multi_progress: &MultiProgress, total: u64, colored: bool) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(total));
    let template = if colored {
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}"
    } else {
        "{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} {msg}"
    };

    if let Ok(style) = ProgressStyle::default_bar().template(template) {
        bar.set_style(style.progress_chars(if colored { "█▓▒░" } else { "=>-" }));
    }
    bar
}

fn create_detail_bar(multi_progress: &MultiProgress) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(0));
    if let Ok(style) = ProgressStyle::default_bar().template("{msg}") {
        bar.set_style(style);
    }
    bar
}
