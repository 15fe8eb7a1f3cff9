//! The `generate` command: manifest in, `.g.cs` files and diagnostics out.

use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};

use strongly_compiler::{
    generate, generate_parallel, render_diagnostics, render_diagnostics_json, GenerateConfig,
    GenerateOutput, GeneratedSource,
};
use strongly_diagnostic::emitter::ColorMode;

use crate::manifest::Manifest;

/// Parsed `generate` arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    pub manifest: PathBuf,
    /// Write one file per source here instead of printing to stdout.
    pub output: Option<PathBuf>,
    /// Spread declarations across the rayon pool.
    pub parallel: bool,
    /// Print diagnostics as JSON.
    pub json: bool,
}

impl GenerateOptions {
    /// Parse the arguments after `generate`.
    pub fn parse(args: &[String]) -> Result<Self, String> {
        let mut options = GenerateOptions::default();
        let mut manifest = None;

        let mut i = 0;
        while i < args.len() {
            let arg = args[i].as_str();
            match arg {
                "-o" | "--output" => {
                    let Some(dir) = args.get(i + 1) else {
                        return Err(format!("missing directory after `{arg}`"));
                    };
                    options.output = Some(PathBuf::from(dir));
                    i += 1;
                }
                "--jobs" | "-j" => options.parallel = true,
                "--json" => options.json = true,
                _ if arg.starts_with('-') => return Err(format!("unknown option `{arg}`")),
                _ if manifest.is_none() => manifest = Some(PathBuf::from(arg)),
                _ => return Err(format!("unexpected argument `{arg}`")),
            }
            i += 1;
        }

        options.manifest = manifest.ok_or_else(|| "missing manifest path".to_string())?;
        Ok(options)
    }
}

/// Run the generator over a loaded manifest.
pub fn run_generate(manifest: &Manifest, options: &GenerateOptions) -> GenerateOutput {
    let config = GenerateConfig::default();
    if options.parallel {
        generate_parallel(&manifest.declarations, &manifest.defaults, &config)
    } else {
        generate(&manifest.declarations, &manifest.defaults, &config)
    }
}

/// Write every source into `dir`, creating it if needed. Returns the paths
/// written, in source order.
pub fn write_sources(dir: &Path, sources: &[GeneratedSource]) -> std::io::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(sources.len());
    for source in sources {
        let path = dir.join(&source.file_name);
        std::fs::write(&path, &source.text)?;
        tracing::debug!(path = %path.display(), "wrote source");
        written.push(path);
    }
    Ok(written)
}

/// Print every source to `out`, each preceded by a file-name banner.
pub fn print_sources(out: &mut impl Write, sources: &[GeneratedSource]) -> std::io::Result<()> {
    for source in sources {
        writeln!(out, "// ===== {} =====", source.file_name)?;
        out.write_all(source.text.as_bytes())?;
        if !source.text.ends_with('\n') {
            writeln!(out)?;
        }
    }
    Ok(())
}

/// The `generate` command. Exits with status 1 on error diagnostics or IO
/// failure.
pub fn generate_manifest(options: &GenerateOptions) {
    let manifest = match Manifest::load(&options.manifest) {
        Ok(manifest) => manifest,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let output = run_generate(&manifest, options);

    let emitted = match &options.output {
        Some(dir) => write_sources(dir, &output.sources).map(|paths| {
            for path in paths {
                println!("{}", path.display());
            }
        }),
        None => print_sources(&mut std::io::stdout().lock(), &output.sources),
    };
    if let Err(err) = emitted {
        eprintln!("error: cannot write generated sources: {err}");
        std::process::exit(1);
    }

    if options.json {
        eprint!("{}", render_diagnostics_json(&output.diagnostics));
    } else if !output.diagnostics.is_empty() {
        let color = if std::io::stderr().is_terminal() {
            ColorMode::Always
        } else {
            ColorMode::Never
        };
        let origin = options.manifest.display().to_string();
        eprint!(
            "{}",
            render_diagnostics(&output.diagnostics, Some(&origin), color)
        );
        eprintln!(
            "{} generated, {} skipped, {} error(s), {} warning(s)",
            output.sources.len(),
            output.skipped,
            output.error_count(),
            output.warning_count()
        );
    }

    if output.has_errors() {
        std::process::exit(1);
    }
}
