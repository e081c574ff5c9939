//! Line-oriented parser for the plain-text recipe format.
//!
//! The grammar is a header block of `Key: value` lines followed by optional
//! `Ingredients:` and `Instructions:` sections:
//!
//! ```text
//! Title: Tomato Soup
//! FoodName: Soup
//! Description: Quick weeknight soup
//! PrepTime: 5
//! CookTime: 10
//! Servings: 2
//! CoverImage: https://example.com/soup.jpg
//! Tags: soup, vegetarian
//!
//! Ingredients:
//! tomato,4,whole
//! salt,1,tsp
//!
//! Instructions:
//! Chop the tomatoes.
//! Simmer for ten minutes.
//! ```
//!
//! Parsing is total: malformed input never fails, every field has a default.

use crate::clock::{Clock, SystemClock};
use crate::model::Recipe;

/// Current section of the file. Transitions only move forward; once a section
/// marker is seen, header keys are never recognized again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Header,
    Ingredients,
    Instructions,
}

/// Parse recipe text using the system clock for the record id.
pub fn parse_recipe_text(text: &str) -> Recipe {
    parse_recipe_text_with_clock(text, &SystemClock)
}

/// Parse recipe text into a [`Recipe`].
///
/// Never fails: unrecognized header lines are discarded, unparseable numbers
/// fall back to their defaults (prep/cook time 0, servings 1), and an absent
/// title leaves the `"New Recipe"` sentinel in place. Duplicate header keys
/// keep the last occurrence.
pub fn parse_recipe_text_with_clock(text: &str, clock: &dyn Clock) -> Recipe {
    let mut recipe = Recipe::empty(clock.now_millis());
    let mut mode = Mode::Header;

    for raw in text.lines() {
        let line = raw.trim();
        // Blank lines carry no information and never reset the mode.
        if line.is_empty() {
            continue;
        }

        // Section markers are consumed, not treated as data.
        if line == "Ingredients:" {
            mode = Mode::Ingredients;
            continue;
        }
        if line == "Instructions:" {
            mode = Mode::Instructions;
            continue;
        }

        match mode {
            Mode::Header => parse_header_line(line, &mut recipe),
            Mode::Ingredients => parse_ingredient_line(line, &mut recipe),
            Mode::Instructions => recipe.instructions.push(line.to_string()),
        }
    }

    if recipe.food_name.is_empty() {
        recipe.food_name = recipe.title.clone();
    }

    recipe
}

/// `Key: value` line in header mode. Unrecognized keys are silently dropped.
fn parse_header_line(line: &str, recipe: &mut Recipe) {
    if let Some(v) = line.strip_prefix("Title:") {
        recipe.title = v.trim().to_string();
    } else if let Some(v) = line.strip_prefix("FoodName:") {
        recipe.food_name = v.trim().to_string();
    } else if let Some(v) = line.strip_prefix("Description:") {
        recipe.description = v.trim().to_string();
    } else if let Some(v) = line.strip_prefix("PrepTime:") {
        recipe.prep_time = parse_minutes(v);
    } else if let Some(v) = line.strip_prefix("CookTime:") {
        recipe.cook_time = parse_minutes(v);
    } else if let Some(v) = line.strip_prefix("Servings:") {
        recipe.servings = parse_servings(v);
    } else if let Some(v) = line.strip_prefix("CoverImage:") {
        let v = v.trim();
        recipe.cover_image = if v.is_empty() {
            None
        } else {
            Some(v.to_string())
        };
    } else if let Some(v) = line.strip_prefix("Tags:") {
        recipe.tags = v
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
    }
}

/// `name,amount,unit` with amount and unit optional. A line with an empty
/// name is dropped whole, keeping the three parallel vectors equal length.
fn parse_ingredient_line(line: &str, recipe: &mut Recipe) {
    let mut parts = line.split(',').map(str::trim);
    let name = parts.next().unwrap_or("");
    if name.is_empty() {
        return;
    }
    let amount = parts.next().unwrap_or("");
    let unit = parts.next().unwrap_or("");
    // Anything past the third field is ignored.

    recipe.ingredients.push(name.to_string());
    recipe.amounts.push(amount.to_string());
    recipe.units.push(unit.to_string());
}

fn parse_minutes(value: &str) -> u32 {
    value.trim().parse().unwrap_or(0)
}

fn parse_servings(value: &str) -> u32 {
    match value.trim().parse() {
        Ok(n) if n > 0 => n,
        _ => 1,
    }
}

/// Serialize a [`Recipe`] back into the text grammar.
///
/// Parsing the result reproduces every field except `id`.
pub fn write_recipe_text(recipe: &Recipe) -> String {
    let mut out = String::new();

    out.push_str(&format!("Title: {}\n", recipe.title));
    out.push_str(&format!("FoodName: {}\n", recipe.food_name));
    out.push_str(&format!("Description: {}\n", recipe.description));
    out.push_str(&format!("PrepTime: {}\n", recipe.prep_time));
    out.push_str(&format!("CookTime: {}\n", recipe.cook_time));
    out.push_str(&format!("Servings: {}\n", recipe.servings));
    if let Some(image) = &recipe.cover_image {
        out.push_str(&format!("CoverImage: {}\n", image));
    }
    out.push_str(&format!("Tags: {}\n", recipe.tags.join(", ")));

    out.push_str("\nIngredients:\n");
    for i in 0..recipe.ingredients.len() {
        out.push_str(&format!(
            "{},{},{}\n",
            recipe.ingredients[i], recipe.amounts[i], recipe.units[i]
        ));
    }

    out.push_str("\nInstructions:\n");
    for step in &recipe.instructions {
        out.push_str(step);
        out.push('\n');
    }

    out
}
