//! Charm-style CLI prompts using cliclack

use crate::product::ProductConfig;
use crate::project::{
    patch_manifest, remove_generated_artifacts, scaffold, ProjectDescriptor, ScaffoldOutcome,
};
use crate::remote::{AssetOutcome, RemoteFetcher, VersionSource};
use crate::runtime::{check, tool, ToolInvocation};
use crate::templates;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

/// Prompt shown when the project directory already exists
const OVERWRITE_PROMPT: &str =
    "Do you want only run the transformation steps? THIS WILL OVERWRITE YOUR CODE [y/N]";

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name; prompted for when absent
    pub name: Option<String>,

    /// Answer yes to the overwrite prompt (non-interactive mode)
    pub yes: bool,
}

/// Only an exact `y` allows an existing project to be overwritten
pub fn confirms_overwrite(answer: &str) -> bool {
    answer == "y"
}

/// Run the CLI with interactive prompts
///
/// The project is created in (or read from) `<current dir>/<name>`.
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;

    // Step 1: Check npm/npx (advisory only)
    check_toolchain()?;

    // Resolve endpoints before anything on disk is touched
    let fetcher = RemoteFetcher::from_config(config)?;

    cliclack::log::info(format!(
        "If you haven't already, please set up your environment: {}",
        config.docs_url()
    ))?;

    // Step 2: Project name
    let project = ProjectDescriptor::new(select_name(&args)?);
    let parent = std::env::current_dir().context("Failed to read current directory")?;
    let root = project.root_in(&parent);

    // Step 3: Scaffold, or confirm reuse of an existing one
    if !ensure_scaffold(&project, &parent, &root, &args).await? {
        cliclack::outro_cancel("Nothing was changed.")?;
        return Ok(());
    }

    // Step 4: Swap JS test/lint tooling for shadow-cljs
    patch_dependencies(&root).await?;

    // Step 5: Prune package.json and JS-only files
    patch_manifest(&root).await?;
    cliclack::log::success("Removed jest, test and lint from package.json")?;

    for removed in remove_generated_artifacts(&root).await? {
        cliclack::log::success(format!("Removed {}", display_relative(&root, &removed)))?;
    }

    // Step 6: Render sources
    let version = fetch_version(config, &fetcher).await?;
    for written in templates::emit_templates(&root, &project, &version).await? {
        cliclack::log::success(format!("Wrote {}", display_relative(&root, &written)))?;
    }
    let entrypoint = templates::emit_entrypoint(&root).await?;
    cliclack::log::success(format!("Wrote {}", display_relative(&root, &entrypoint)))?;

    // Step 7: Demo image
    fetch_asset(&fetcher, &root).await?;

    // Step 8: Show next steps
    print_next_steps(config, &project)?;

    Ok(())
}

fn check_toolchain() -> Result<()> {
    for info in check::resolve_toolchain() {
        match &info.path {
            Some(path) => cliclack::log::success(format!("{} ({})", info.name, path.display()))?,
            None => cliclack::log::warning(info.missing_message())?,
        }
    }
    Ok(())
}

fn select_name(args: &CreateArgs) -> Result<String> {
    if let Some(name) = &args.name {
        if name.is_empty() {
            anyhow::bail!("Project name must not be empty.");
        }
        cliclack::log::info(format!("Project name: {}", name))?;
        return Ok(name.clone());
    }

    let name: String = cliclack::input("Project Name")
        .placeholder("AwesomeProject")
        .validate(|input: &String| {
            if input.is_empty() {
                Err("Please enter a project name")
            } else {
                Ok(())
            }
        })
        .interact()?;

    Ok(name)
}

/// Returns false when the user declines to reuse an existing project
async fn ensure_scaffold(
    project: &ProjectDescriptor,
    parent: &Path,
    root: &Path,
    args: &CreateArgs,
) -> Result<bool> {
    let init = ToolInvocation::react_native_init(&project.name);
    if !root.is_dir() {
        cliclack::log::step(format!("Running: {}", init))?;
    }

    let outcome = scaffold::ensure_scaffold(root, parent, &init, || {
        cliclack::log::warning(format!(
            "There seems to be a project named {} already",
            project.name
        ))?;

        if args.yes {
            cliclack::log::info("Running the transformation steps (--yes mode)")?;
            return Ok(true);
        }

        let answer: String = cliclack::input(OVERWRITE_PROMPT)
            .placeholder("N")
            .required(false)
            .interact()?;

        Ok(confirms_overwrite(&answer))
    })
    .await?;

    if let ScaffoldOutcome::Created(Err(e)) = &outcome {
        cliclack::log::warning(format!("{}", e))?;
    }

    Ok(outcome.proceeds())
}

async fn patch_dependencies(root: &Path) -> Result<()> {
    for (invocation, result) in tool::patch_dependencies(root).await {
        match result {
            Ok(()) => cliclack::log::success(format!("{}", invocation))?,
            Err(e) => cliclack::log::warning(format!("{}", e))?,
        }
    }
    Ok(())
}

async fn fetch_version<C: ProductConfig>(config: &C, fetcher: &RemoteFetcher) -> Result<String> {
    let spinner = cliclack::spinner();
    spinner.start("Fetching newest reagent version...");

    let resolved = fetcher.fetch_latest_version(config.fallback_version()).await;
    match &resolved.source {
        VersionSource::Registry => {
            spinner.stop(format!("Newest reagent version is {}", resolved.version));
        }
        VersionSource::Fallback(e) => {
            spinner.stop(format!(
                "Could not fetch newest reagent version, using {}",
                resolved.version
            ));
            cliclack::log::info(format!("{}", e))?;
        }
    }

    Ok(resolved.version)
}

async fn fetch_asset(fetcher: &RemoteFetcher, root: &Path) -> Result<()> {
    match fetcher.fetch_asset_if_absent(root).await? {
        AssetOutcome::AlreadyPresent(path) => {
            cliclack::log::info(format!("Keeping {}", display_relative(root, &path)))?;
        }
        AssetOutcome::Downloaded { path, bytes } => {
            cliclack::log::success(format!(
                "Wrote {} ({} bytes)",
                display_relative(root, &path),
                bytes
            ))?;
        }
        // a missing demo image is not worth interrupting the run for
        AssetOutcome::Skipped(_) => {}
    }
    Ok(())
}

fn display_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

fn print_next_steps<C: ProductConfig>(config: &C, project: &ProjectDescriptor) -> Result<()> {
    let steps = config.next_steps(project);

    println!();
    println!("  {}", "Next steps".bold());
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", (i + 1).to_string().cyan(), step);
    }

    cliclack::outro(format!(
        "The demo code lives in {}/{}. Edit it and the app updates automatically.",
        project.name,
        project.core_source_path().display()
    ))?;

    Ok(())
}
