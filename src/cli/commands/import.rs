//! Import command handler

use std::path::{Path, PathBuf};

use serde::Serialize;

use gpa_calc::core::extract::ingest::import_document;
use gpa_calc::core::gpa::{self, GpaSummary};
use gpa_calc::core::models::Semester;
use gpa_calc::config::Config;
use gpa_calc::{error, info};

/// JSON export document: the parsed semesters plus the computed summary.
#[derive(Serialize)]
struct ExportDocument<'a> {
    semesters: &'a [Semester],
    summary: &'a GpaSummary,
}

/// Run the import command for one or more input documents.
///
/// # Arguments
/// * `input_files` - Paths to input documents (.json or .txt)
/// * `output_files` - Optional export paths; must match inputs 1:1 when provided
/// * `json` - Whether to write a JSON export even without an explicit path
/// * `config` - Configuration containing the default output directory
/// * `verbose` - Whether to show per-course detail
pub fn run(
    input_files: &[PathBuf],
    output_files: &[PathBuf],
    json: bool,
    config: &Config,
    verbose: bool,
) {
    if input_files.is_empty() {
        eprintln!("✗ No input files provided.");
        return;
    }

    if !output_files.is_empty() && output_files.len() != input_files.len() {
        eprintln!(
            "✗ When using -o/--output, provide one output path per input file ({} inputs, {} outputs).",
            input_files.len(),
            output_files.len()
        );
        return;
    }

    for (idx, input_file) in input_files.iter().enumerate() {
        let output_file = output_files.get(idx).map(PathBuf::as_path);
        if let Err(err) = import_single(input_file, output_file, json, config, verbose) {
            error!("Import failed for {}: {err}", input_file.display());
            eprintln!("{err}");
        }
    }
}

fn import_single(
    input_file: &Path,
    output_file: Option<&Path>,
    json: bool,
    config: &Config,
    verbose: bool,
) -> Result<(), String> {
    let semesters = import_document(input_file).map_err(|e| {
        error!("Failed to import {}: {e}", input_file.display());
        format!("✗ Failed to import {}: {e}", input_file.display())
    })?;

    if verbose {
        println!("✓ Document imported successfully from: {}", input_file.display());
    } else {
        info!("Document imported: {}", input_file.display());
    }

    let summary = gpa::summarize(&semesters);

    println!("\n=== Results for {} ===", input_file.display());
    for (semester, sem_gpa) in semesters.iter().zip(&summary.semester_gpas) {
        println!(
            "\n{} - GPA {} ({} credit hours)",
            sem_gpa.term, sem_gpa.gpa, sem_gpa.credits
        );
        if verbose {
            for course in &semester.courses {
                println!(
                    "  {:<10} {:<40} {:>6} {:>5} {}",
                    course.code,
                    course.title,
                    course.marks,
                    course.credits,
                    course.grade.as_deref().unwrap_or("-")
                );
            }
        }
    }
    println!(
        "\nCGPA: {} over {} credit hours",
        summary.cgpa, summary.total_credits
    );

    if json || output_file.is_some() {
        let export_path = resolve_export_path(input_file, output_file, config)?;
        write_export(&semesters, &summary, &export_path)?;
        println!("✓ Results exported to: {}", export_path.display());
        info!("Exported results to: {}", export_path.display());
    }

    Ok(())
}

/// Explicit output path wins; otherwise derive a name inside config `out_dir`.
fn resolve_export_path(
    input_file: &Path,
    output_file: Option<&Path>,
    config: &Config,
) -> Result<PathBuf, String> {
    if let Some(output) = output_file {
        return Ok(output.to_path_buf());
    }

    let out_dir = PathBuf::from(&config.paths.out_dir);
    std::fs::create_dir_all(&out_dir).map_err(|e| {
        format!(
            "✗ Failed to create output directory {}: {e}",
            out_dir.display()
        )
    })?;

    let filename = input_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("results")
        .to_string();
    Ok(out_dir.join(format!("{filename}_results.json")))
}

fn write_export(
    semesters: &[Semester],
    summary: &GpaSummary,
    path: &Path,
) -> Result<(), String> {
    let document = ExportDocument { semesters, summary };
    let rendered = serde_json::to_string_pretty(&document)
        .map_err(|e| format!("✗ Failed to serialize results: {e}"))?;
    std::fs::write(path, rendered)
        .map_err(|e| format!("✗ Failed to write {}: {e}", path.display()))
}
