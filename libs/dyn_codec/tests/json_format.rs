use bson as _;
use dyn_codec::ops::JsonOps;
use dyn_codec::{CHAR, Codec, FLOAT, INT, NamedEnum as _, STRING, either, enum_codec, map, record};
use indexmap::IndexMap;
use log as _;
use proptest as _;
use serde_json::json;
use thiserror as _;

#[derive(Debug, Clone, PartialEq)]
struct ItemStack {
    id: String,
    count: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecipeKind {
    Shaped,
    Shapeless,
    Smelting,
}

dyn_codec::impl_named_enum!(RecipeKind { Shaped, Shapeless, Smelting });

#[derive(Debug, Clone, PartialEq)]
struct Recipe {
    kind: RecipeKind,
    result: ItemStack,
    pattern: Vec<String>,
    key: IndexMap<char, String>,
    experience: Option<f32>,
}

// an item is either `{ "id": ..., "count": ... }` or just its id
fn item_codec() -> impl Codec<Target = ItemStack> {
    either(
        record(
            (
                STRING.field_ref("id", |i: &ItemStack| &i.id),
                INT.or_else(1).field_of("count", |i: &ItemStack| i.count),
            ),
            |id, count| ItemStack { id, count },
        ),
        STRING.xmap(
            |id| ItemStack { id, count: 1 },
            |i: &ItemStack| i.id.clone(),
        ),
    )
}

fn recipe_codec() -> impl Codec<Target = Recipe> {
    record(
        (
            enum_codec::<RecipeKind>().field_of("type", |r: &Recipe| r.kind),
            item_codec().field_ref("result", |r: &Recipe| &r.result),
            STRING
                .list()
                .or_else_with(Vec::new)
                .field_ref("pattern", |r: &Recipe| &r.pattern),
            map(CHAR, STRING)
                .or_else_with(IndexMap::new)
                .field_ref("key", |r: &Recipe| &r.key),
            FLOAT.optional().field_of("experience", |r: &Recipe| r.experience),
        ),
        |kind, result, pattern, key, experience| Recipe {
            kind,
            result,
            pattern,
            key,
            experience,
        },
    )
}

#[test]
fn shaped_recipe() {
    let input = json!({
        "type": "Shaped",
        "result": { "id": "torch", "count": 4 },
        "pattern": ["C", "S"],
        "key": { "C": "coal", "S": "stick" },
    });

    let recipe = recipe_codec().decode(&JsonOps, &input).expect("must decode");
    assert_eq!(recipe.kind, RecipeKind::Shaped, "kind by name");
    assert_eq!(
        recipe.result,
        ItemStack {
            id: "torch".to_owned(),
            count: 4
        },
        "full item form"
    );
    assert_eq!(recipe.pattern, ["C", "S"], "pattern rows in order");
    assert_eq!(recipe.key.get(&'S').map(String::as_str), Some("stick"), "char keys");
    assert_eq!(recipe.experience, None, "missing optional");
}

#[test]
fn item_shorthand() {
    let input = json!({
        "type": "Smelting",
        "result": "glass",
        "experience": 0.5,
    });

    let recipe = recipe_codec().decode(&JsonOps, &input).expect("must decode");
    assert_eq!(recipe.result.id, "glass", "id from shorthand");
    assert_eq!(recipe.result.count, 1, "shorthand count");
    assert!(recipe.pattern.is_empty(), "default pattern");
    assert!(recipe.key.is_empty(), "default key");
    assert_eq!(recipe.experience, Some(0.5), "present optional");

    // encoding always writes the full form
    let output = recipe_codec().encode(&JsonOps, &recipe).expect("must encode");
    assert_eq!(
        output,
        json!({
            "type": "Smelting",
            "result": { "id": "glass", "count": 1 },
            "pattern": [],
            "key": {},
            "experience": 0.5,
        }),
        "canonical form"
    );
}

#[test]
fn round_trip() {
    let recipe = Recipe {
        kind: RecipeKind::Shapeless,
        result: ItemStack {
            id: "bread".to_owned(),
            count: 1,
        },
        pattern: Vec::new(),
        key: IndexMap::from([('W', "wheat".to_owned()), ('A', "water".to_owned())]),
        experience: Some(1.25),
    };

    let codec = recipe_codec();
    let value = codec.encode(&JsonOps, &recipe).expect("must encode");
    let keys: Vec<_> = value["key"].as_object().expect("object").keys().collect();
    assert_eq!(keys, ["W", "A"], "map keeps its order");
    assert_eq!(codec.decode(&JsonOps, &value).ok(), Some(recipe), "must round trip");
}

#[test]
fn bad_kind() {
    let err = recipe_codec()
        .decode(&JsonOps, &json!({ "type": "Baked", "result": "cake" }))
        .expect_err("unknown kind");
    assert_eq!(err.to_string(), "Invalid enum value: Baked", "enum error");
    assert!(RecipeKind::from_name("Baked").is_none(), "not a variant");
}

#[test]
fn missing_result() {
    let err = recipe_codec()
        .decode(&JsonOps, &json!({ "type": "Shaped" }))
        .expect_err("result is required");
    assert_eq!(err.to_string(), "Expected string", "last alternative's error");
}

#[test]
fn bad_key_char() {
    let recipe = recipe_codec()
        .decode(
            &JsonOps,
            &json!({ "type": "Shaped", "result": "torch", "key": { "CS": "coal" } }),
        )
        .expect("a bad key map falls back to the default");
    assert!(recipe.key.is_empty(), "defaulted key map");
}
