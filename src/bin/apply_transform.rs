use image_workbench::config::tool::load_config;
use image_workbench::diagnostics::{elapsed_ms, BufferDescriptor, TimingBreakdown, TransformReport};
use image_workbench::image::io::write_json_file;
use image_workbench::Session;
use std::env;
use std::path::Path;
use std::time::Instant;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let start = Instant::now();
    let mut timing = TimingBreakdown::default();
    let mut session = Session::new();

    timing
        .time("load", || session.load_with(&config.input, config.load_mode))
        .map_err(|e| e.to_string())?;
    timing
        .time("transform", || session.apply(config.transform))
        .map_err(|e| e.to_string())?;
    timing
        .time("save", || session.save(&config.output.image))
        .map_err(|e| e.to_string())?;
    timing.total_ms = elapsed_ms(start);

    let (Some(original), Some(processed)) = (session.original(), session.processed()) else {
        return Err("session holds no image after loading".to_string());
    };
    let report = TransformReport {
        transform: config.transform,
        input: BufferDescriptor::from(original),
        output: BufferDescriptor::from(processed),
        timing,
    };

    println!(
        "Applied {} to {} ({}x{}) in {:.3} ms",
        report.transform,
        config.input.display(),
        report.input.width,
        report.input.height,
        report.timing.total_ms
    );
    println!("Saved result to {}", config.output.image.display());

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report)?;
        println!("Saved report to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: apply_transform <config.json>".to_string()
}
