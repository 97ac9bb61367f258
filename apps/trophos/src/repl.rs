//! # Interactive Session Driver
//!
//! Runs the food-web session over any `BufRead`/`Write` pair:
//!
//! 1. Build phase: read species names until `DONE`.
//! 2. Relation phase: read `predator prey` index pairs until an invalid
//!    pair (out of bounds or equal) ends the phase.
//! 3. Full report of the initial web.
//! 4. Modification menu (`o`/`r`/`x`/`p`/`d`/`q`) unless basic mode.
//!
//! End of input ends whichever phase is reading, so piped scripts always
//! terminate cleanly. Rejected mutations report a reason and the session
//! continues; they never abort it.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use trophos_core::{FoodWeb, SpeciesIndex, TrophosError, validate_name};

use crate::render;

const SEPARATOR: &str = "--------------------------------";

// =============================================================================
// SESSION MODES
// =============================================================================

/// Session modes selected on the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Modes {
    /// Skip the modification menu after the initial build.
    pub basic: bool,
    /// Print a full web snapshot after every mutation.
    pub debug: bool,
    /// Suppress prompts; program output still prints.
    pub quiet: bool,
    /// Render reports as JSON instead of text.
    pub json: bool,
}

// =============================================================================
// TOKEN READER
// =============================================================================

/// Whitespace-delimited token reader over buffered input, so names and
/// index pairs may be separated by spaces or newlines interchangeably.
struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` once input is exhausted.
    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

/// Indices are read as signed so sentinel pairs like `-1 2` parse; any
/// unparseable token maps to -1 and fails the bounds check downstream.
fn parse_index(token: &str) -> i64 {
    token.parse().unwrap_or(-1)
}

fn to_species_index(raw: i64) -> Option<SpeciesIndex> {
    usize::try_from(raw).ok().map(SpeciesIndex)
}

// =============================================================================
// SESSION FLOW
// =============================================================================

/// Run one full session: settings, build, relations, report, and (unless
/// basic mode) the modification menu.
///
/// Returns an error only when the output stream fails; rejected core
/// operations are reported inside the transcript instead.
pub fn run_session<R: BufRead, W: Write>(input: R, output: &mut W, modes: Modes) -> io::Result<()> {
    let mut scanner = TokenReader::new(input);
    let mut web = FoodWeb::new();

    render::print_settings(output, modes)?;
    writeln!(output, "Welcome to the Food Web Application")?;
    writeln!(output)?;
    writeln!(output, "{}", SEPARATOR)?;
    writeln!(output)?;

    writeln!(output, "Building the initial food web...")?;
    build_phase(&mut scanner, output, modes, &mut web)?;
    relation_phase(&mut scanner, output, modes, &mut web)?;

    writeln!(output)?;
    writeln!(output, "{}", SEPARATOR)?;
    writeln!(output)?;
    writeln!(output, "Initial food web complete.")?;
    writeln!(output, "Displaying characteristics for the initial food web...")?;
    render::print_report(output, &web, modes.json, false)?;

    if !modes.basic {
        menu_phase(&mut scanner, output, modes, &mut web)?;
    }

    Ok(())
}

/// Read species names until `DONE` (or end of input). Invalid names are
/// reported and skipped.
fn build_phase<R: BufRead, W: Write>(
    scanner: &mut TokenReader<R>,
    output: &mut W,
    modes: Modes,
    web: &mut FoodWeb,
) -> io::Result<()> {
    loop {
        if !modes.quiet {
            write!(
                output,
                "Enter the name for an organism in the web (or enter DONE): "
            )?;
            output.flush()?;
        }
        let Some(name) = scanner.next_token()? else {
            break;
        };
        if !modes.quiet {
            writeln!(output)?;
        }
        if name == "DONE" {
            break;
        }
        match validate_name(&name) {
            Ok(()) => {
                let index = web.insert_species(name.as_str());
                tracing::debug!("Added species {:?} at index {}", name, index.value());
                if modes.debug {
                    writeln!(output, "DEBUG MODE - added an organism:")?;
                    render::print_web(output, web)?;
                    writeln!(output)?;
                }
            }
            Err(reason) => {
                tracing::warn!("Rejected species name {:?}: {}", name, reason);
                writeln!(
                    output,
                    "Invalid organism name. No organism added to the food web."
                )?;
            }
        }
    }
    if !modes.quiet {
        writeln!(output)?;
    }
    Ok(())
}

/// Read predator/prey index pairs. Out-of-bounds or self-directed pairs
/// end the phase; duplicates are reported and the phase continues.
fn relation_phase<R: BufRead, W: Write>(
    scanner: &mut TokenReader<R>,
    output: &mut W,
    modes: Modes,
    web: &mut FoodWeb,
) -> io::Result<()> {
    loop {
        if !modes.quiet {
            writeln!(
                output,
                "Enter the pair of indices for a predator/prey relation."
            )?;
            writeln!(
                output,
                "Enter any invalid index when done (-1 2, 0 -9, 3 3, etc.)."
            )?;
            write!(output, "The format is <predator index> <prey index>: ")?;
            output.flush()?;
        }
        let Some(first) = scanner.next_token()? else {
            break;
        };
        let Some(second) = scanner.next_token()? else {
            break;
        };
        if !modes.quiet {
            writeln!(output)?;
        }
        let (Some(predator), Some(prey)) = (
            to_species_index(parse_index(&first)),
            to_species_index(parse_index(&second)),
        ) else {
            break;
        };
        match web.add_relation(predator, prey) {
            Ok(()) => {
                tracing::debug!("Added relation {} -> {}", predator.value(), prey.value());
                if modes.debug {
                    writeln!(output, "DEBUG MODE - added a relation:")?;
                    render::print_web(output, web)?;
                    writeln!(output)?;
                }
            }
            Err(error @ TrophosError::DuplicateRelation(_, _)) => {
                tracing::warn!("Rejected relation: {}", error);
                writeln!(
                    output,
                    "Duplicate predator/prey relation. No relation added to the food web."
                )?;
            }
            Err(_) => break,
        }
    }
    Ok(())
}

// =============================================================================
// MODIFICATION MENU
// =============================================================================

/// Menu loop: expansion, supplementation, extinction, print, display, quit.
/// Unknown choices fall through to the next prompt.
fn menu_phase<R: BufRead, W: Write>(
    scanner: &mut TokenReader<R>,
    output: &mut W,
    modes: Modes,
    web: &mut FoodWeb,
) -> io::Result<()> {
    writeln!(output, "{}", SEPARATOR)?;
    writeln!(output)?;
    writeln!(output, "Modifying the food web...")?;
    writeln!(output)?;

    loop {
        if !modes.quiet {
            writeln!(output, "Web modification options:")?;
            writeln!(output, "   o = add a new organism (expansion)")?;
            writeln!(
                output,
                "   r = add a new predator/prey relation (supplementation)"
            )?;
            writeln!(output, "   x = remove an organism (extinction)")?;
            writeln!(output, "   p = print the updated food web")?;
            writeln!(
                output,
                "   d = display ALL characteristics for the updated food web"
            )?;
            writeln!(output, "   q = quit")?;
            write!(output, "Enter a character (o, r, x, p, d, or q): ")?;
            output.flush()?;
        }
        let Some(token) = scanner.next_token()? else {
            break;
        };
        if !modes.quiet {
            writeln!(output)?;
            writeln!(output)?;
        }
        let choice = token.chars().next().unwrap_or('?');

        match choice {
            'o' => {
                if !expansion(scanner, output, modes, web)? {
                    break;
                }
            }
            'r' => {
                if !supplementation(scanner, output, modes, web)? {
                    break;
                }
            }
            'x' => {
                if !extinction(scanner, output, modes, web)? {
                    break;
                }
            }
            'p' => {
                writeln!(output, "UPDATED Food Web Predators & Prey:")?;
                render::print_web(output, web)?;
                writeln!(output)?;
            }
            'd' => {
                writeln!(
                    output,
                    "Displaying characteristics for the UPDATED food web..."
                )?;
                writeln!(output)?;
                render::print_report(output, web, modes.json, true)?;
            }
            _ => {}
        }

        writeln!(output, "{}", SEPARATOR)?;
        writeln!(output)?;

        if choice == 'q' {
            break;
        }
    }
    Ok(())
}

/// Menu option `o`: add a species. Returns `false` when input ends
/// mid-prompt.
fn expansion<R: BufRead, W: Write>(
    scanner: &mut TokenReader<R>,
    output: &mut W,
    modes: Modes,
    web: &mut FoodWeb,
) -> io::Result<bool> {
    if !modes.quiet {
        write!(output, "EXPANSION - enter the name for the new organism: ")?;
        output.flush()?;
    }
    let Some(name) = scanner.next_token()? else {
        return Ok(false);
    };
    if !modes.quiet {
        writeln!(output)?;
    }
    match validate_name(&name) {
        Ok(()) => {
            writeln!(output, "Species Expansion: {}", name)?;
            let index = web.insert_species(name.as_str());
            tracing::debug!("Added species {:?} at index {}", name, index.value());
            writeln!(output)?;
            if modes.debug {
                writeln!(output, "DEBUG MODE - added an organism:")?;
                render::print_web(output, web)?;
                writeln!(output)?;
            }
        }
        Err(reason) => {
            tracing::warn!("Rejected species name {:?}: {}", name, reason);
            writeln!(
                output,
                "Invalid organism name. No organism added to the food web."
            )?;
            writeln!(output)?;
        }
    }
    Ok(true)
}

/// Menu option `r`: add a relation. Returns `false` when input ends
/// mid-prompt.
fn supplementation<R: BufRead, W: Write>(
    scanner: &mut TokenReader<R>,
    output: &mut W,
    modes: Modes,
    web: &mut FoodWeb,
) -> io::Result<bool> {
    if !modes.quiet {
        writeln!(
            output,
            "SUPPLEMENTATION - enter the pair of indices for the new predator/prey relation."
        )?;
        write!(output, "The format is <predator index> <prey index>: ")?;
        output.flush()?;
    }
    let Some(first) = scanner.next_token()? else {
        return Ok(false);
    };
    let Some(second) = scanner.next_token()? else {
        return Ok(false);
    };
    if !modes.quiet {
        writeln!(output)?;
    }

    let parsed = (
        to_species_index(parse_index(&first)),
        to_species_index(parse_index(&second)),
    );
    let added = match parsed {
        (Some(predator), Some(prey)) => match web.add_relation(predator, prey) {
            Ok(()) => {
                if let (Some(hunter), Some(meal)) = (web.get(predator), web.get(prey)) {
                    writeln!(
                        output,
                        "New Food Source: {} eats {}",
                        hunter.name(),
                        meal.name()
                    )?;
                }
                tracing::debug!("Added relation {} -> {}", predator.value(), prey.value());
                true
            }
            Err(error @ TrophosError::DuplicateRelation(_, _)) => {
                tracing::warn!("Rejected relation: {}", error);
                writeln!(
                    output,
                    "Duplicate predator/prey relation. No relation added to the food web."
                )?;
                false
            }
            Err(error) => {
                tracing::warn!("Rejected relation: {}", error);
                writeln!(
                    output,
                    "Invalid predator and/or prey index. No relation added to the food web."
                )?;
                false
            }
        },
        _ => {
            tracing::warn!("Rejected relation {:?} -> {:?}: negative index", first, second);
            writeln!(
                output,
                "Invalid predator and/or prey index. No relation added to the food web."
            )?;
            false
        }
    };
    writeln!(output)?;
    if added && modes.debug {
        writeln!(output, "DEBUG MODE - added a relation:")?;
        render::print_web(output, web)?;
        writeln!(output)?;
    }
    Ok(true)
}

/// Menu option `x`: remove a species by index. Returns `false` when input
/// ends mid-prompt.
fn extinction<R: BufRead, W: Write>(
    scanner: &mut TokenReader<R>,
    output: &mut W,
    modes: Modes,
    web: &mut FoodWeb,
) -> io::Result<bool> {
    if !modes.quiet {
        write!(output, "EXTINCTION - enter the index for the extinct organism: ")?;
        output.flush()?;
    }
    let Some(token) = scanner.next_token()? else {
        return Ok(false);
    };
    if !modes.quiet {
        writeln!(output)?;
    }

    let removed =
        to_species_index(parse_index(&token)).and_then(|index| web.remove_species(index).ok());
    match removed {
        Some(species) => {
            writeln!(output, "Species Extinction: {}", species.name())?;
            tracing::debug!("Removed species {:?}", species.name());
            writeln!(output)?;
            if modes.debug {
                writeln!(output, "DEBUG MODE - removed an organism:")?;
                render::print_web(output, web)?;
                writeln!(output)?;
            }
        }
        None => {
            tracing::warn!("Rejected extinction index {:?}", token);
            writeln!(output, "Invalid index for species extinction")?;
            writeln!(output)?;
        }
    }
    Ok(true)
}

// =============================================================================
// TESTS
// =============================================================================
