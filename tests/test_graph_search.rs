use cookbook_import::{extract_recipe, extract_recipe_with_config, Extraction, ImportConfig};

fn create_recipe_html(json_ld: &str) -> String {
    format!(
        r#"
        <!DOCTYPE html>
        <html>
        <head>
            <script type="application/ld+json">
                {json_ld}
            </script>
        </head>
        <body></body>
        </html>
        "#
    )
}

fn title_of(outcome: Extraction) -> String {
    outcome.into_result().unwrap().title
}

#[test]
fn test_graph_with_unrelated_nodes() {
    // Typical WordPress/Yoast output
    let json_ld = r#"
    {
        "@context": "https://schema.org",
        "@graph": [
            {"@type": "Article", "@id": "https://example.com/#article", "headline": "Our best stew"},
            {"@type": "WebPage", "@id": "https://example.com/", "name": "Our best stew - Example"},
            {"@type": "ImageObject", "url": "https://example.com/stew.jpg"},
            {"@type": "BreadcrumbList", "itemListElement": []},
            {"@type": "WebSite", "name": "Example Kitchen"},
            {"@type": "Organization", "name": "Example Kitchen"},
            {
                "@type": "Recipe",
                "name": "Beef Stew",
                "image": ["https://example.com/stew-1x1.jpg", "https://example.com/stew-4x3.jpg"],
                "recipeIngredient": ["1 kg beef", "4 carrots", "2 onions"]
            },
            {"@type": "Person", "name": "Jamie"}
        ]
    }
    "#;

    let recipe = extract_recipe(&create_recipe_html(json_ld))
        .into_result()
        .unwrap();

    assert_eq!(recipe.title, "Beef Stew");
    assert_eq!(recipe.image_url, "https://example.com/stew-1x1.jpg");
    assert_eq!(recipe.ingredients, vec!["1 kg beef", "4 carrots", "2 onions"]);
}

#[test]
fn test_graph_position_independent() {
    let others = [
        r#"{"@type": "WebSite", "name": "Site"}"#,
        r#"{"@type": "Person", "name": "Author"}"#,
        r#"{"@type": "WebPage", "name": "Page"}"#,
    ];
    let recipe = r#"{"@type": "Recipe", "name": "Found Me"}"#;

    for position in 0..=others.len() {
        let mut nodes: Vec<&str> = others.to_vec();
        nodes.insert(position, recipe);
        let json_ld = format!(r#"{{"@graph": [{}]}}"#, nodes.join(", "));

        assert_eq!(
            title_of(extract_recipe(&create_recipe_html(&json_ld))),
            "Found Me",
            "recipe at position {position}"
        );
    }
}

#[test]
fn test_top_level_array() {
    let json_ld = r#"
    [
        {"@context": "https://schema.org", "@type": "Organization", "name": "Publisher"},
        {"@context": "https://schema.org", "@type": "Recipe", "name": "Pasta Carbonara"},
        {"@type": "WebSite", "name": "Recipe Website"}
    ]
    "#;

    assert_eq!(
        title_of(extract_recipe(&create_recipe_html(json_ld))),
        "Pasta Carbonara"
    );
}

#[test]
fn test_array_of_graphs() {
    let json_ld = r#"
    [
        {"@graph": [{"@type": "WebSite"}]},
        {"@graph": [{"@type": "Person"}, {"@type": "Recipe", "name": "Second Graph"}]}
    ]
    "#;

    assert_eq!(
        title_of(extract_recipe(&create_recipe_html(json_ld))),
        "Second Graph"
    );
}

#[test]
fn test_first_of_several_recipes_wins() {
    let json_ld = r#"
    {
        "@graph": [
            {"@type": "Recipe", "name": "Main Dish"},
            {"@type": "Recipe", "name": "Side Dish"}
        ]
    }
    "#;

    assert_eq!(
        title_of(extract_recipe(&create_recipe_html(json_ld))),
        "Main Dish"
    );
}

#[test]
fn test_first_block_with_recipe_wins() {
    let html = r#"
        <script type="application/ld+json">{"@type": "WebSite", "name": "Site"}</script>
        <script type="application/ld+json">{"@type": "Recipe", "name": "Block Two"}</script>
        <script type="application/ld+json">{"@type": "Recipe", "name": "Block Three"}</script>
    "#;

    assert_eq!(title_of(extract_recipe(html)), "Block Two");
}

#[test]
fn test_recipe_nested_under_other_property_not_found() {
    let json_ld = r#"
    {
        "@type": "WebPage",
        "mainEntity": {"@type": "Recipe", "name": "Not Searched"}
    }
    "#;

    assert_eq!(
        extract_recipe(&create_recipe_html(json_ld)),
        Extraction::NotFound
    );
}

#[test]
fn test_lowercase_type_needs_opt_in() {
    let json_ld = r#"{"@type": "recipe", "name": "Easy Black Bean Soup"}"#;
    let html = create_recipe_html(json_ld);

    assert_eq!(extract_recipe(&html), Extraction::NotFound);

    let mut config = ImportConfig::default();
    config.resolver.case_insensitive_type = true;
    assert_eq!(
        title_of(extract_recipe_with_config(&html, &config)),
        "Easy Black Bean Soup"
    );
}
