//! `structview`: render a top-down PNG preview of a building structure JSON file.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use structview_io::{load_scene, write_png, SceneFileError};
use structview_renderer::SceneRenderer;

#[derive(Parser, Debug)]
#[command(name = "structview", version, about = "Render a top-down preview of a structure JSON file")]
struct Args {
    /// Structure JSON file to read.
    input: PathBuf,

    /// Image file to write. Defaults to the input path with a `.png` extension.
    output: Option<PathBuf>,
}

fn output_path(input: &Path, output: Option<PathBuf>) -> PathBuf {
    output.unwrap_or_else(|| input.with_extension("png"))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let scene = match load_scene(&args.input) {
        Ok(scene) => scene,
        Err(SceneFileError::InputNotFound(path)) => {
            eprintln!("Input file not exists: {}", path.display());
            return ExitCode::FAILURE;
        }
        Err(err) => {
            eprintln!("Input file unknown format: {}", err);
            return ExitCode::FAILURE;
        }
    };
    if !scene.rejected().is_empty() {
        log::warn!("{} entities were skipped", scene.rejected().len());
    }

    let renderer = SceneRenderer::default();
    let image = renderer.render_image(&scene);

    let output = output_path(&args.input, args.output);
    if let Err(err) = write_png(&image, &output) {
        eprintln!("Failed to write {}: {}", output.display(), err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
