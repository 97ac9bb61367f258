//! # Session Rendering
//!
//! Text and JSON renderers for the session transcript. Everything is
//! written through a generic `Write` handle so scripted tests can capture
//! complete transcripts from a byte buffer.

use std::io::{self, Write};

use trophos_core::{FoodWeb, Species, SpeciesIndex, WebReport};

use crate::repl::Modes;

// =============================================================================
// SETTINGS BLOCK
// =============================================================================

/// Render a mode flag the way the settings block prints it.
#[must_use]
pub fn on_or_off(enabled: bool) -> &'static str {
    if enabled { "ON" } else { "OFF" }
}

/// Print the program settings block shown at session start.
pub fn print_settings<W: Write>(output: &mut W, modes: Modes) -> io::Result<()> {
    writeln!(output, "Program Settings:")?;
    writeln!(output, "  basic mode = {}", on_or_off(modes.basic))?;
    writeln!(output, "  debug mode = {}", on_or_off(modes.debug))?;
    writeln!(output, "  quiet mode = {}", on_or_off(modes.quiet))?;
    writeln!(output, "  json mode = {}", on_or_off(modes.json))?;
    writeln!(output)
}

// =============================================================================
// WEB LISTING
// =============================================================================

/// Print the indexed species listing, one line per species, followed by a
/// blank line. Producers print bare; eaters list their prey by name in
/// insertion order.
pub fn print_web<W: Write>(output: &mut W, web: &FoodWeb) -> io::Result<()> {
    for (index, species) in web.iter() {
        write!(output, "  ({}) {}", index.value(), species.name())?;
        if !species.is_producer() {
            let diet: Vec<&str> = species
                .prey()
                .iter()
                .filter_map(|prey| web.get(*prey).map(Species::name))
                .collect();
            write!(output, " eats {}", diet.join(", "))?;
        }
        writeln!(output)?;
    }
    writeln!(output)
}

// =============================================================================
// FULL REPORT
// =============================================================================

/// Print every derived characteristic of the web. The `updated` marker
/// prefixes each section header after the initial build, matching the
/// transcript users diff between sessions.
pub fn print_report<W: Write>(
    output: &mut W,
    web: &FoodWeb,
    json: bool,
    updated: bool,
) -> io::Result<()> {
    let report = WebReport::from_web(web);

    if json {
        return print_report_json(output, web, &report, updated);
    }

    let prefix = if updated { "UPDATED " } else { "" };

    writeln!(output, "{}Food Web Predators & Prey:", prefix)?;
    print_web(output, web)?;

    writeln!(output, "{}Apex Predators:", prefix)?;
    print_names(output, web, &report.apex_predators)?;
    writeln!(output)?;

    writeln!(output, "{}Producers:", prefix)?;
    print_names(output, web, &report.producers)?;
    writeln!(output)?;

    writeln!(output, "{}Most Flexible Eaters:", prefix)?;
    print_names(output, web, &report.most_flexible_eaters)?;
    writeln!(output)?;

    writeln!(output, "{}Tastiest Food:", prefix)?;
    print_names(output, web, &report.tastiest_food)?;
    writeln!(output)?;

    writeln!(output, "{}Food Web Heights:", prefix)?;
    for (index, species) in web.iter() {
        writeln!(output, "  {}: {}", species.name(), report.heights[index.value()])?;
    }
    writeln!(output)?;

    writeln!(output, "{}Vore Types:", prefix)?;
    writeln!(output, "  Producers:")?;
    print_group(output, web, &report.vore_groups.producers)?;
    writeln!(output, "  Herbivores:")?;
    print_group(output, web, &report.vore_groups.herbivores)?;
    writeln!(output, "  Omnivores:")?;
    print_group(output, web, &report.vore_groups.omnivores)?;
    writeln!(output, "  Carnivores:")?;
    print_group(output, web, &report.vore_groups.carnivores)?;
    writeln!(output)
}

/// Two-space indented name lines for a report section.
fn print_names<W: Write>(
    output: &mut W,
    web: &FoodWeb,
    indices: &[SpeciesIndex],
) -> io::Result<()> {
    for index in indices {
        if let Some(species) = web.get(*index) {
            writeln!(output, "  {}", species.name())?;
        }
    }
    Ok(())
}

/// Four-space indented name lines for a vore group.
fn print_group<W: Write>(
    output: &mut W,
    web: &FoodWeb,
    indices: &[SpeciesIndex],
) -> io::Result<()> {
    for index in indices {
        if let Some(species) = web.get(*index) {
            writeln!(output, "    {}", species.name())?;
        }
    }
    Ok(())
}

/// One pretty-printed JSON document per report, used by `--json`.
fn print_report_json<W: Write>(
    output: &mut W,
    web: &FoodWeb,
    report: &WebReport,
    updated: bool,
) -> io::Result<()> {
    let species: Vec<&Species> = web.iter().map(|(_, species)| species).collect();
    let document = serde_json::json!({
        "updated": updated,
        "species": species,
        "report": report,
    });
    writeln!(
        output,
        "{}",
        serde_json::to_string_pretty(&document).unwrap_or_default()
    )
}
