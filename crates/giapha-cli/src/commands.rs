//! CLI command implementations.

use crate::config::{Config, CONFIG_DIR};
use crate::error::CliError;
use colored::Colorize;
use giapha_core::{BackupPayload, Person};
use giapha_graph::{FamilyGraph, KinshipResult, LineagePlan, LineageUpdate};
use std::path::{Path, PathBuf};
use tracing::info;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Initialize Gia Pha in a directory.
pub fn init(path: &Path) -> Result<()> {
    if path.join(CONFIG_DIR).exists() {
        println!("{} Already initialized", "✓".green());
        return Ok(());
    }

    let config = Config::default();
    let config_path = config.save(path)?;

    println!("{} Initialized Gia Pha in {}", "✓".green(), path.display());
    println!("  Config written to {}", config_path.display());
    println!(
        "  Export your family to {} and run {}",
        config.data_file.display().to_string().cyan(),
        "giapha status".cyan()
    );

    Ok(())
}

/// Loads the config under `root` and the backup it points at (or `data`).
fn load_family(root: &Path, data: Option<&Path>) -> Result<(Config, PathBuf, BackupPayload)> {
    let config = Config::load(root)?;
    let data_path = match data {
        Some(path) => path.to_path_buf(),
        None => root.join(&config.data_file),
    };

    if !data_path.exists() {
        return Err(CliError::MissingData(data_path.display().to_string()).into());
    }

    let payload = BackupPayload::load(&data_path)?;
    Ok((config, data_path, payload))
}

/// Finds exactly one person by id, then by full name.
fn resolve_person<'a>(graph: &FamilyGraph<'a>, query: &str) -> Result<&'a Person> {
    let mut matches = graph.lookup(query);
    match matches.len() {
        0 => Err(CliError::UnknownPerson(query.to_string()).into()),
        1 => Ok(matches.remove(0)),
        count => Err(CliError::AmbiguousPerson {
            query: query.to_string(),
            count,
        }
        .into()),
    }
}

fn show(value: Option<u32>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn print_update(update: &LineageUpdate) {
    let marker = if update.changed {
        "•".yellow()
    } else {
        "·".dimmed()
    };
    let generation = format!(
        "{} → {}",
        show(update.old_generation),
        show(update.new_generation)
    );
    let order = format!(
        "{} → {}",
        show(update.old_birth_order),
        show(update.new_birth_order)
    );

    if update.changed {
        println!(
            "  {} {}  {} {}  {} {}",
            marker,
            update.full_name.cyan(),
            "đời".dimmed(),
            generation,
            "thứ".dimmed(),
            order
        );
    } else {
        println!(
            "  {} {}  {} {}  {} {}",
            marker,
            update.full_name.dimmed(),
            "đời".dimmed(),
            generation.dimmed(),
            "thứ".dimmed(),
            order.dimmed()
        );
    }
}

fn print_plan(plan: &LineagePlan, limit: usize) {
    println!("{}", "Lineage Preview".cyan().bold());
    println!(
        "{} of {} persons change",
        plan.changed_count().to_string().yellow(),
        plan.len()
    );
    println!();

    for update in plan.updates.iter().take(limit) {
        print_update(update);
    }
    if plan.len() > limit {
        println!("  ... and {} more (use --all)", plan.len() - limit);
    }
}

/// Options of the `lineage` command.
#[derive(Debug, Default)]
pub struct LineageOptions<'p> {
    pub data: Option<&'p Path>,
    pub all: bool,
    pub apply: bool,
    pub output: Option<&'p Path>,
    pub json: bool,
}

/// Recompute generations and birth orders, preview or apply them.
pub fn lineage(root: &Path, options: &LineageOptions<'_>) -> Result<()> {
    let (config, data_path, mut payload) = load_family(root, options.data)?;
    let plan = giapha_graph::plan_lineage(&payload.persons, &payload.relationships);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        let limit = if options.all {
            plan.len()
        } else {
            config.preview_limit
        };
        print_plan(&plan, limit);
    }

    if !options.apply {
        return Ok(());
    }

    let modified = plan.apply(&mut payload.persons);
    payload.timestamp = Some(chrono::Utc::now().to_rfc3339());

    let target = options.output.unwrap_or(data_path.as_path());
    payload.save(target)?;
    info!("Wrote {} updated persons to {}", modified, target.display());

    if !options.json {
        println!();
        println!(
            "{} Updated {} persons in {}",
            "✓".green(),
            modified.to_string().cyan(),
            target.display()
        );
    }

    Ok(())
}

/// Resolves both queries and what the two persons call each other.
fn kinship_between<'a>(
    graph: &FamilyGraph<'a>,
    a: &str,
    b: &str,
) -> Result<(&'a Person, &'a Person, Option<KinshipResult>)> {
    let person_a = resolve_person(graph, a)?;
    let person_b = resolve_person(graph, b)?;
    Ok((person_a, person_b, graph.kinship(person_a, person_b)))
}

/// Show what two persons call each other.
pub fn kinship(root: &Path, a: &str, b: &str, data: Option<&Path>, json: bool) -> Result<()> {
    let (_, _, payload) = load_family(root, data)?;
    let graph = FamilyGraph::from_records(&payload.persons, &payload.relationships);

    let (person_a, person_b, result) = kinship_between(&graph, a, b)?;
    let Some(result) = result else {
        if json {
            println!("null");
        } else {
            println!("{} and {} are the same person", a.cyan(), b.cyan());
        }
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{}", "Kinship".cyan().bold());
    println!(
        "  {} gọi {} là {}",
        person_a.full_name,
        person_b.full_name,
        result.a_calls_b.to_string().green().bold()
    );
    println!(
        "  {} gọi {} là {}",
        person_b.full_name,
        person_a.full_name,
        result.b_calls_a.to_string().green().bold()
    );
    println!();
    println!("  {}", result.description);
    if result.is_related() {
        println!("  {} {}", "Distance:".dimmed(), result.distance);
    }
    for label in &result.path_labels {
        println!("  {} {}", "→".dimmed(), label);
    }

    Ok(())
}

/// Show family statistics.
pub fn status(root: &Path, data: Option<&Path>) -> Result<()> {
    if !root.join(CONFIG_DIR).exists() && data.is_none() {
        println!("{} Gia Pha not initialized in this directory", "✗".red());
        println!("  Run {} to initialize", "giapha init".cyan());
        return Ok(());
    }

    let (_, data_path, payload) = load_family(root, data)?;
    let graph = FamilyGraph::from_records(&payload.persons, &payload.relationships);
    let stats = graph.stats();

    println!("{}", "Gia Pha Status".cyan().bold());
    println!();
    println!("  {} {}", "Backup:".dimmed(), data_path.display());
    if let Some(timestamp) = &payload.timestamp {
        println!("  {} {}", "Taken:".dimmed(), timestamp);
    }
    println!("  {} {}", "Persons:".dimmed(), stats.persons);
    println!("  {} {}", "In-laws:".dimmed(), stats.in_laws);
    println!("  {} {}", "Marriages:".dimmed(), stats.marriages);
    println!("  {} {}", "Parent links:".dimmed(), stats.parent_links);
    println!("  {} {}", "Generations:".dimmed(), stats.generations);
    println!("  {} {}", "Root ancestors:".dimmed(), stats.roots);

    Ok(())
}
