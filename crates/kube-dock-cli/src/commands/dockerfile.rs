use std::path::{Path, PathBuf};

use kube_dock_core::{DockConfig, EditRequest};
use kube_dock_edit::{Applied, DockerfileEditor};

pub fn dockerfile(
    config_path: Option<&Path>,
    expose: &str,
    env: Vec<String>,
    add: Vec<String>,
    copy: Vec<String>,
) -> anyhow::Result<()> {
    let config = DockConfig::load(&PathBuf::from("."))?;
    let path = config.dockerfile_path(config_path);

    let request = EditRequest::default()
        .with_expose(expose)
        .with_env(env)
        .with_add(add)
        .with_copy(copy);

    // Load first, so a missing descriptor fails even when there is nothing to edit.
    let report = DockerfileEditor::new(&path, &request).apply()?;

    if request.is_empty() {
        println!("nothing to do");
        return Ok(());
    }

    let failed = report.has_failures();
    let mut errors = Vec::new();

    for category in report.into_categories() {
        let directive = category.directive;
        match category.outcome {
            Ok(Applied::Replaced { value }) => println!("{directive} updated: {value}"),
            Ok(Applied::Appended { lines, skipped }) => {
                for line in &lines {
                    println!("{directive} appended: {}", line_args(line));
                }
                for raw in &skipped {
                    println!("skipped malformed {directive} item: {raw}");
                }
            }
            Err(e) => {
                let err = anyhow::Error::new(e).context(format!("{directive} failed"));
                eprintln!("{err:#}");
                errors.push(err);
            }
        }
    }

    if failed {
        let noun = if errors.len() == 1 { "category" } else { "categories" };
        anyhow::bail!("{} edit {noun} failed for {}", errors.len(), path.display());
    }
    Ok(())
}

/// Strip the leading keyword from a rendered directive line.
fn line_args(line: &str) -> &str {
    match line.split_once(' ') {
        Some((_, args)) => args,
        None => line,
    }
}
