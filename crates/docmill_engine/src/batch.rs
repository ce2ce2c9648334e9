use std::path::{Path, PathBuf};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use walkdir::WalkDir;

use crate::paths::is_html_file;
use crate::pipeline::FileConverter;
use crate::types::FileReport;

/// Worker count used when core detection is unavailable.
pub const DEFAULT_WORKERS: usize = 8;

/// Detected parallelism, falling back to [`DEFAULT_WORKERS`].
pub fn default_worker_count() -> usize {
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(DEFAULT_WORKERS)
}

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("input directory {0} does not exist")]
    MissingInputDir(PathBuf),
    #[error("input path {0} is not a directory")]
    NotADirectory(PathBuf),
}

/// Fans the per-file pipeline out across a bounded pool of OS threads.
/// Tasks are fully independent; one file's failure never blocks or aborts
/// the others.
pub struct BatchRunner {
    converter: Arc<FileConverter>,
    workers: usize,
}

impl BatchRunner {
    pub fn new(workers: usize) -> Self {
        Self {
            converter: Arc::new(FileConverter::new()),
            workers: workers.max(1),
        }
    }

    /// Enumerate every `.html` file below `input_root` and dispatch each to
    /// the pipeline. Reports arrive on the returned handle in completion
    /// order, not submission order.
    pub fn convert_tree(
        &self,
        input_root: &Path,
        output_root: &Path,
    ) -> Result<BatchHandle, BatchError> {
        if !input_root.exists() {
            return Err(BatchError::MissingInputDir(input_root.to_path_buf()));
        }
        if !input_root.is_dir() {
            return Err(BatchError::NotADirectory(input_root.to_path_buf()));
        }

        let files: Vec<PathBuf> = WalkDir::new(input_root)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| is_html_file(path))
            .collect();

        let total = files.len();
        let workers = self.workers.min(total).max(1);
        log::info!(
            "converting {} html files under {} with {} workers",
            total,
            input_root.display(),
            workers
        );

        let (job_tx, job_rx) = mpsc::channel::<PathBuf>();
        for file in files {
            let _ = job_tx.send(file);
        }
        drop(job_tx);
        let job_rx = Arc::new(Mutex::new(job_rx));

        let (report_tx, report_rx) = mpsc::channel::<FileReport>();
        for _ in 0..workers {
            let job_rx = Arc::clone(&job_rx);
            let report_tx = report_tx.clone();
            let converter = Arc::clone(&self.converter);
            let input_root = input_root.to_path_buf();
            let output_root = output_root.to_path_buf();
            thread::spawn(move || loop {
                let job = {
                    let guard = match job_rx.lock() {
                        Ok(guard) => guard,
                        Err(_) => return,
                    };
                    guard.recv()
                };
                let input = match job {
                    Ok(path) => path,
                    Err(_) => return,
                };
                let result = converter.convert_file(&input, &input_root, &output_root);
                if report_tx.send(FileReport { input, result }).is_err() {
                    return;
                }
            });
        }
        // The report channel closes once every worker has drained the queue
        // and dropped its sender clone.
        drop(report_tx);

        Ok(BatchHandle { total, report_rx })
    }
}

/// Handle over a running batch: total file count plus the stream of
/// per-file reports.
#[derive(Debug)]
pub struct BatchHandle {
    total: usize,
    report_rx: mpsc::Receiver<FileReport>,
}

impl BatchHandle {
    pub fn total(&self) -> usize {
        self.total
    }

    /// Iterate reports as files complete; ends when the batch is done.
    pub fn reports(self) -> impl Iterator<Item = FileReport> {
        self.report_rx.into_iter()
    }
}
