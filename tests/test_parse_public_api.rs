use recipe_box::{parse_recipe_text, parse_recipe_text_with_clock, write_recipe_text, FixedClock};

#[test]
fn well_formed_input_keeps_parallel_arrays_aligned() {
    let text = "\
Title: Big Salad
FoodName: Salad
Description: Lots of vegetables
PrepTime: 15
CookTime: 0
Servings: 4
Tags: salad, fresh

Ingredients:
lettuce,1,head
tomato,3,whole
,no name here,
cucumber

Instructions:
Wash everything.
Chop and toss.
";

    let r = parse_recipe_text(text);
    assert_eq!(r.title, "Big Salad");
    assert_eq!(r.food_name, "Salad");
    // Three non-blank lines with a non-empty name.
    assert_eq!(r.ingredients.len(), 3);
    assert_eq!(r.ingredients.len(), r.amounts.len());
    assert_eq!(r.ingredients.len(), r.units.len());
    assert_eq!(r.instructions.len(), 2);
    assert_eq!(r.servings, 4);
    assert_eq!(r.prep_time, 15);
    assert_eq!(r.tags, vec!["salad", "fresh"]);
}

#[test]
fn headerless_input_is_the_default_record() {
    let r = parse_recipe_text("nothing recognizable\nat all");
    assert_eq!(r.title, "New Recipe");
    assert_eq!(r.food_name, "New Recipe");
    assert!(r.ingredients.is_empty());
    assert!(r.amounts.is_empty());
    assert!(r.units.is_empty());
    assert!(r.instructions.is_empty());
    assert!(r.tags.is_empty());
    assert_eq!(r.prep_time, 0);
    assert_eq!(r.cook_time, 0);
    assert_eq!(r.servings, 1);
}

#[test]
fn repeated_parses_agree_apart_from_id() {
    let text = "Title: Soup\nIngredients:\ncarrot,2,pcs\n\nInstructions:\nBoil it";
    let mut a = parse_recipe_text(text);
    let b = parse_recipe_text(text);
    assert!(b.id >= a.id);
    a.id = b.id;
    assert_eq!(a, b);
}

#[test]
fn serialized_recipe_parses_back_identically() {
    let clock = FixedClock::new(10, "t");
    let original = parse_recipe_text_with_clock(
        "Title: Stew\nDescription: Slow and warm\nPrepTime: 20\nCookTime: 90\nServings: 6\nCoverImage: https://x.test/stew.jpg\nTags: winter, hearty\n\nIngredients:\nbeef,500,g\nonion,2,whole\n\nInstructions:\nBrown the beef.\nSimmer for ninety minutes.",
        &clock,
    );

    let text = write_recipe_text(&original);
    let mut reparsed = parse_recipe_text_with_clock(&text, &clock);
    reparsed.id = original.id;
    assert_eq!(reparsed, original);
}
