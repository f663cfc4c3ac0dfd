use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use autorelease::cli::{self, Collaborators, ReleaseWorkflowArgs, RunOutputs};
use autorelease::config::{self, ConfigOverrides};
use autorelease::files::LocalFiles;
use autorelease::git::Git2Repository;
use autorelease::hosting::{GitHubClient, RepoSlug};
use autorelease::ui;

#[derive(clap::Parser)]
#[command(
    name = "autorelease",
    version,
    about = "Create a git tag and a GitHub release when the manifest version changes"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        long,
        env = "GITHUB_TOKEN",
        hide_env_values = true,
        help = "Token used for the releases API"
    )]
    token: Option<String>,

    #[arg(
        long,
        env = "AUTORELEASE_MANIFEST_PATH",
        help = "Manifest declaring the version [default: package.json]"
    )]
    manifest_path: Option<String>,

    #[arg(long, env = "AUTORELEASE_CHANGELOG_PATH", help = "Changelog file [default: CHANGELOG.md]")]
    changelog_path: Option<String>,

    #[arg(long, env = "AUTORELEASE_TAG_PREFIX", help = "Prefix prepended to the version [default: v]")]
    tag_prefix: Option<String>,

    #[arg(long, env = "AUTORELEASE_DRAFT", help = "Create the release as a draft")]
    draft: bool,

    #[arg(long, env = "AUTORELEASE_PRERELEASE", help = "Mark the release as a prerelease")]
    prerelease: bool,

    #[arg(long, help = "Remote to push the tag to [default: origin]")]
    remote: Option<String>,

    #[arg(long, env = "GITHUB_REPOSITORY", help = "Repository to release, as owner/repo")]
    repository: Option<String>,

    #[arg(long, env = "GITHUB_API_URL", help = "API base URL [default: https://api.github.com]")]
    api_url: Option<String>,

    #[arg(long, env = "GITHUB_OUTPUT", help = "File to append key=value outputs to")]
    output_file: Option<PathBuf>,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(long, value_name = "VERSION", help = "Print the release notes for VERSION and exit")]
    notes: Option<String>,

    #[arg(
        long,
        value_name = "TAG",
        requires = "notes",
        help = "Read the changelog as committed at TAG"
    )]
    at_tag: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref())?.with_overrides(ConfigOverrides {
        manifest_path: args.manifest_path,
        changelog_path: args.changelog_path,
        tag_prefix: args.tag_prefix,
        draft: args.draft,
        prerelease: args.prerelease,
        remote: args.remote,
        api_url: args.api_url,
    });

    let files = LocalFiles::new(".");

    if let Some(version) = args.notes.as_deref() {
        let notes = match args.at_tag.as_deref() {
            Some(tag) => {
                let repo = Git2Repository::open(".", config.remote.clone())
                    .context("not in a git repository")?;
                cli::release_notes_at_tag(&repo, tag, &config.changelog_path, version)?
            }
            None => cli::release_notes(&files, &config.changelog_path, version)?,
        };
        println!("{}", notes);
        return Ok(());
    }

    let token = config::require_token(args.token)?;
    let repository = args
        .repository
        .as_deref()
        .map(RepoSlug::parse)
        .transpose()?;

    let repo =
        Git2Repository::open(".", config.remote.clone()).context("not in a git repository")?;
    let host = GitHubClient::new(&config.api_url, token)?;

    let workflow_args = ReleaseWorkflowArgs {
        repository,
        dry_run: args.dry_run,
    };

    let result = cli::run_release_workflow(
        &workflow_args,
        &config,
        Collaborators {
            files: &files,
            repo: &repo,
            host: &host,
        },
    )?;

    RunOutputs::from_result(&result)
        .write(args.output_file.as_deref())
        .context("failed to write outputs")?;

    Ok(())
}
