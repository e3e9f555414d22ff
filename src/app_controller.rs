use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::document::{DocumentFormat, DocumentReader};
use crate::file_utils::FileManager;
use crate::pipeline::SubtitleGenerator;
use crate::subtitle_processor::SubtitleTrack;
use crate::validation::TimecodeValidator;

// @module: Application controller for document conversion

/// What happened to a single input document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Subtitles written to this path
    Converted(PathBuf),
    /// Output already existed and overwriting was not requested
    Skipped(PathBuf),
}

/// Counts for a folder run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderSummary {
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Main application controller for subtitle generation
pub struct Controller {
    // @field: App configuration
    config: Config,
    generator: SubtitleGenerator,
    reader: DocumentReader,
    // @field: Config file on disk, never treated as an input document
    config_file: Option<PathBuf>,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;

        let generator = SubtitleGenerator::new(config.subtitle.clone(), config.stop_words());
        let reader = DocumentReader::new(config.document.clone());

        Ok(Self {
            config,
            generator,
            reader,
            config_file: None,
        })
    }

    /// Remember the config file so folder runs do not try to convert it
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_file = Some(path.as_ref().to_path_buf());
        self
    }

    fn is_config_file(&self, path: &Path) -> bool {
        match &self.config_file {
            Some(config_file) => FileManager::same_file(path, config_file),
            None => false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read a document and build its subtitle track
    pub fn convert_document<P: AsRef<Path>>(&self, input_file: P) -> Result<SubtitleTrack> {
        let input_file = input_file.as_ref();
        let content = FileManager::read_to_string(input_file)?;
        let format = DocumentFormat::from_path(input_file);

        let paragraphs = self
            .reader
            .read(&content, format)
            .with_context(|| format!("Failed to read document: {:?}", input_file))?;
        debug!("Read {} paragraphs from {:?} ({:?})", paragraphs.len(), input_file, format);

        let track = self.generator.generate(&paragraphs);

        let validation = TimecodeValidator::new().validate_track(&track);
        for issue in &validation.issues {
            warn!("{}", issue);
        }

        Ok(track)
    }

    /// Convert one document, writing `<stem>.srt` into `output_dir`
    pub fn run(&self, input_file: PathBuf, output_dir: PathBuf, force_overwrite: bool) -> Result<RunOutcome> {
        if !FileManager::file_exists(&input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let output_path = FileManager::generate_output_path(&input_file, &output_dir, "srt");
        if output_path.exists() && !force_overwrite {
            warn!("Skipping {:?}, output already exists (use -f to force overwrite)", output_path);
            return Ok(RunOutcome::Skipped(output_path));
        }

        let track = self.convert_document(&input_file)?;
        if track.entry_count() == 0 {
            warn!("No subtitles generated from {:?}", input_file);
        }

        FileManager::ensure_dir(&output_dir)?;
        track.write_to_srt(&output_path)?;

        info!(
            "Wrote {} subtitles ({} parts) to {:?}",
            track.entry_count(),
            track.section_break_count(),
            output_path
        );

        Ok(RunOutcome::Converted(output_path))
    }

    /// Convert every document under `input_dir`, each next to its source
    pub fn run_folder(&self, input_dir: PathBuf, force_overwrite: bool) -> Result<FolderSummary> {
        let start_time = std::time::Instant::now();

        if !FileManager::dir_exists(&input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let documents: Vec<PathBuf> = FileManager::find_documents(&input_dir)?
            .into_iter()
            .filter(|document| {
                let is_config = self.is_config_file(document);
                if is_config {
                    debug!("Skipping config file {:?}", document);
                }
                !is_config
            })
            .collect();
        if documents.is_empty() {
            return Err(anyhow!("No documents found in directory: {:?}", input_dir));
        }

        let folder_pb = ProgressBar::new(documents.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result.progress_chars("█▓▒░"));

        let mut summary = FolderSummary::default();

        for document in &documents {
            let file_name = document
                .file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            folder_pb.set_message(format!("Processing: {}", file_name));

            let output_dir = document
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| input_dir.clone());

            match self.run(document.clone(), output_dir, force_overwrite) {
                Ok(RunOutcome::Converted(_)) => summary.converted += 1,
                Ok(RunOutcome::Skipped(_)) => summary.skipped += 1,
                Err(e) => {
                    error!("Error processing file {}: {:#}", file_name, e);
                    summary.failed += 1;
                }
            }

            folder_pb.inc(1);
        }

        folder_pb.finish_and_clear();

        info!(
            "Folder done in {:.1}s: {} converted, {} skipped, {} failed",
            start_time.elapsed().as_secs_f64(),
            summary.converted,
            summary.skipped,
            summary.failed
        );

        Ok(summary)
    }
}
