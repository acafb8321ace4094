//! Command-line interface implementation for flint.
//! Provides argument parsing with clap and dispatch of the parsed commands.

use crate::error::{Error, Result};
use crate::generator::{GenerationContext, GenerationReport, Generator};
use crate::home::TemplateHome;
use crate::hooks::{ScriptExecutor, ShellExecutor};
use crate::prompt::{DialoguerPrompter, Prompter};
use crate::renderer::PlaceholderRenderer;
use crate::resolver::resolve;
use crate::template::{Template, TemplateSource};
use clap::{error::ErrorKind, Args, CommandFactory, Parser, Subcommand};
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Command-line arguments structure for flint.
#[derive(Parser, Debug)]
#[command(name = "flint", author, version, about = "flint: generate projects and files from templates", long_about = None)]
pub struct Cli {
    /// Directory holding stored templates [default: ~/.flint/templates]
    #[arg(long, value_name = "DIR", global = true)]
    pub templates_dir: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate project or files from template
    #[command(visible_alias = "s")]
    Spark(SparkArgs),

    /// Manage stored templates
    #[command(subcommand)]
    Template(TemplateCommands),
}

#[derive(Subcommand, Debug)]
pub enum TemplateCommands {
    /// Add a local template to the template home
    #[command(visible_alias = "a")]
    Add(AddArgs),

    /// List stored templates
    #[command(visible_alias = "ls")]
    List,
}

#[derive(Args, Debug, Clone, Default)]
pub struct SparkArgs {
    /// Name of a template stored in the template home
    #[arg(value_name = "TEMPLATE_NAME")]
    pub template_name: Option<String>,

    /// Path to a template directory, ignored when a name is given
    #[arg(short = 't', long = "template", value_name = "PATH")]
    pub template_path: Option<PathBuf>,

    /// Directory the template is generated into
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// JSON or YAML file with variable values
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Variable value, may be repeated
    #[arg(short = 'v', long = "var", value_name = "KEY:VALUE")]
    pub vars: Vec<String>,

    /// Overwrite existing files without asking
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Path to the template directory
    #[arg(value_name = "PATH")]
    pub template_path: PathBuf,

    /// Stored name, defaults to the directory name
    #[arg(value_name = "TEMPLATE_NAME")]
    pub template_name: Option<String>,

    /// Replace a stored template with the same name
    #[arg(short, long)]
    pub force: bool,
}

/// Parses command line arguments.
///
/// # Exits
/// * With status code 1 and the help text if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Cli {
    match Cli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Cli::command().print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}

/// Makes `path` absolute against the current directory.
fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

/// Uses the given output path, or asks for one.
pub fn get_output_root(output: Option<&Path>, prompter: &dyn Prompter) -> Result<PathBuf> {
    match output {
        Some(path) => absolute(path),
        None => match prompter.ask_output_path() {
            Some(answer) if !answer.trim().is_empty() => absolute(Path::new(answer.trim())),
            _ => Err(Error::OutputPathNotSpecified),
        },
    }
}

/// Runs the `spark` command.
///
/// # Flow
/// 1. Resolves and opens the template
/// 2. Determines the output path
/// 3. Resolves variable values
/// 4. Generates: prehooks, template files, posthooks
pub fn run_spark(
    args: &SparkArgs,
    home: &TemplateHome,
    prompter: &dyn Prompter,
    executor: &dyn ScriptExecutor,
) -> Result<(PathBuf, GenerationReport)> {
    debug!(
        "Input summary: template name: {:?}, template path: {:?}, output: {:?}, input: {:?}, variables: {:?}, force: {}",
        args.template_name, args.template_path, args.output, args.input, args.vars, args.force
    );

    let source = TemplateSource::from_args(args.template_name.as_deref(), args.template_path.as_deref())?;
    debug!("Loading template from {}", source);
    let template = Template::open(source.resolve(home)?)?;

    let output_root = get_output_root(args.output.as_deref(), prompter)?;
    let inputs = resolve(
        &template.manifest,
        |key| std::env::var(key).ok(),
        args.input.as_deref(),
        &args.vars,
        prompter,
    )?;

    let context = GenerationContext { output_root, force: args.force, inputs };
    let renderer = PlaceholderRenderer::new();
    let report = Generator::new(&renderer, prompter, executor).generate(&template, &context)?;

    Ok((context.output_root, report))
}

/// Dispatches the parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let home = match cli.templates_dir {
        Some(dir) => TemplateHome::new(dir),
        None => TemplateHome::from_user_home().unwrap_or_else(|| {
            let fallback = TemplateHome::new(crate::constants::DEFAULT_TEMPLATE_HOME);
            warn!(
                "HOME is not set, using '{}' relative to the current directory as the template home",
                fallback.root().display()
            );
            fallback
        }),
    };
    debug!("Template home: {}", home.root().display());

    match cli.command {
        Commands::Spark(args) => {
            let prompter = DialoguerPrompter::new();
            let executor = ShellExecutor::new();
            let (output_root, report) = run_spark(&args, &home, &prompter, &executor)?;
            println!(
                "Generated {} files in {} ({} skipped).",
                report.written,
                output_root.display(),
                report.skipped
            );
        }
        Commands::Template(TemplateCommands::Add(args)) => {
            let target = home.add(&args.template_path, args.template_name.as_deref(), args.force)?;
            println!("Template added at {}.", target.display());
        }
        Commands::Template(TemplateCommands::List) => {
            for name in home.list()? {
                println!("{}", name);
            }
        }
    }

    Ok(())
}
